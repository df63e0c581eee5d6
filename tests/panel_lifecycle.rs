//! Panel lifecycle scenarios: attachment, repositioning, and the
//! subscription acquire/release discipline across panel re-creation.

mod common;

use sideview::config::Settings;
use sideview::panel::{DockPriority, DockSide, DockTarget};
use sideview::workspace::Workspace;

// ========================================================================
// Attachment
// ========================================================================

#[test]
fn test_activation_with_position_attaches_one_panel() {
    let (mut controller, log) = common::activated_controller();

    let base_acquired = controller.state().ledger.acquired_total();
    let base_refreshes = log.borrow().refreshes;

    controller.config_mut().set_panel_position("Right (first)");
    controller.pump();

    let state = controller.state();
    assert_eq!(state.workspace.panel_count(), 1);

    let view = state.registry.get(state.id).unwrap();
    let panel = state.workspace.panel_for_item(&view).unwrap();
    assert_eq!(state.workspace.side_of(panel), Some(DockSide::Right));
    assert_eq!(state.workspace.dock_order(DockSide::Right), vec![panel]);

    // exactly one new subscription and one refresh for the attachment
    assert_eq!(state.ledger.acquired_total(), base_acquired + 1);
    assert_eq!(state.ledger.outstanding(), 1);
    assert_eq!(log.borrow().refreshes, base_refreshes + 1);
}

#[test]
fn test_activation_default_position_attaches_nothing() {
    // the shipped default "Right" is not one of the four recognized targets
    let (controller, log) = common::activated_controller();

    let state = controller.state();
    assert_eq!(state.workspace.panel_count(), 0);

    // the view exists and is populated regardless
    let view = state.registry.get(state.id).unwrap();
    assert_eq!(view.borrow().items().len(), common::sample_items().len());
    assert_eq!(state.ledger.outstanding(), 1);
    assert!(log.borrow().refreshes >= 1);
}

#[test]
fn test_unrecognized_position_detaches_and_resubscribes() {
    let (mut controller, _log) = common::attached_controller("Left (last)");
    assert_eq!(controller.state().workspace.panel_count(), 1);

    controller.config_mut().set_panel_position("Middle");
    controller.pump();

    let state = controller.state();
    assert_eq!(state.workspace.panel_count(), 0);
    assert_eq!(state.ledger.outstanding(), 1);
}

#[test]
fn test_left_dock_inverts_resizer() {
    let (controller, _log) = common::attached_controller("Left (first)");
    let state = controller.state();
    let view = state.registry.get(state.id).unwrap();
    assert!(view.borrow().is_resizer_inverted());
}

#[test]
fn test_right_dock_clears_resizer_inversion() {
    let (mut controller, _log) = common::attached_controller("Left (first)");
    controller.config_mut().set_panel_position("Right (last)");
    controller.pump();

    let state = controller.state();
    let view = state.registry.get(state.id).unwrap();
    assert!(!view.borrow().is_resizer_inverted());
}

// ========================================================================
// Repositioning
// ========================================================================

#[test]
fn test_position_change_destroys_then_recreates() {
    let (mut controller, log) = common::attached_controller("Right (last)");

    let view = {
        let state = controller.state();
        state.registry.get(state.id).unwrap()
    };
    let populates_before = view.borrow().populate_count();
    let acquired_before = controller.state().ledger.acquired_total();
    let released_before = controller.state().ledger.released_total();

    controller.config_mut().set_panel_position("Left (first)");
    controller.pump();

    let state = controller.state();
    // one destroy+release pair, one create+acquire pair
    assert_eq!(state.workspace.created_total(), 2);
    assert_eq!(state.workspace.destroyed_total(), 1);
    assert_eq!(state.ledger.released_total(), released_before + 1);
    assert_eq!(state.ledger.acquired_total(), acquired_before + 1);
    assert_eq!(state.ledger.outstanding(), 1);

    // the view survives and is repopulated exactly once
    let panel = state.workspace.panel_for_item(&view).unwrap();
    assert_eq!(state.workspace.side_of(panel), Some(DockSide::Left));
    assert_eq!(state.workspace.dock_order(DockSide::Left), vec![panel]);
    assert_eq!(view.borrow().populate_count(), populates_before + 1);

    // release strictly precedes the re-acquire in the source's trace
    let release_at = common::last_event_index(&log, "unsubscribe").unwrap();
    let acquire_at = common::last_event_index(&log, "subscribe").unwrap();
    let refresh_at = common::last_event_index(&log, "refresh").unwrap();
    assert!(release_at < acquire_at);
    assert!(acquire_at < refresh_at);
}

#[test]
fn test_repeated_position_changes_never_leak_subscriptions() {
    let (mut controller, log) = common::activated_controller();

    for target in [
        "Right (first)",
        "Left (last)",
        "Left (first)",
        "Right (last)",
        "Right (first)",
    ] {
        controller.config_mut().set_panel_position(target);
        controller.pump();
        assert_eq!(controller.state().ledger.outstanding(), 1);
    }

    // panel subscription plus the select list, never more
    assert!(log.borrow().max_subscribers <= 2);
    assert_eq!(controller.state().workspace.panel_count(), 1);
}

#[test]
fn test_position_setting_roundtrips_through_dock_target() {
    for target in DockTarget::ALL {
        let (mut controller, _log) = common::activated_controller();
        controller.config_mut().set_panel_position(target.as_str());
        controller.pump();

        let state = controller.state();
        let view = state.registry.get(state.id).unwrap();
        let panel = state.workspace.panel_for_item(&view).unwrap();
        assert_eq!(state.workspace.side_of(panel), Some(target.side()));
        let order = state.workspace.dock_order(target.side());
        match target.priority() {
            DockPriority::First => assert_eq!(order.first(), Some(&panel)),
            DockPriority::Last => assert_eq!(order.last(), Some(&panel)),
        }
    }
}

// ========================================================================
// Deferred attachment during host startup
// ========================================================================

#[test]
fn test_attach_deferred_until_startup_completes() {
    let (source, _log) = common::RecordingSource::new(common::sample_items());
    let mut controller = sideview::controller::Controller::with_workspace(
        sideview::config::ConfigStore::with_settings(Settings::default()),
        Box::new(source),
        Workspace::new(),
    );
    controller.activate();

    controller.config_mut().set_panel_position("Left (first)");
    controller.pump();
    assert_eq!(controller.state().workspace.panel_count(), 0);

    let ids = controller.state_mut().workspace.complete_startup();
    assert_eq!(ids.len(), 1);

    let state = controller.state();
    assert_eq!(state.workspace.panel_count(), 1);
    assert_eq!(state.workspace.side_of(ids[0]), Some(DockSide::Left));
}

#[test]
fn test_position_changes_during_startup_yield_one_panel() {
    let (source, log) = common::RecordingSource::new(common::sample_items());
    let mut controller = sideview::controller::Controller::with_workspace(
        sideview::config::ConfigStore::with_settings(Settings::default()),
        Box::new(source),
        Workspace::new(),
    );
    controller.activate();

    controller.config_mut().set_panel_position("Left (first)");
    controller.pump();
    controller.config_mut().set_panel_position("Right (last)");
    controller.pump();

    controller.state_mut().workspace.complete_startup();

    let state = controller.state();
    assert_eq!(state.workspace.panel_count(), 1);
    assert_eq!(state.ledger.outstanding(), 1);
    assert!(log.borrow().max_subscribers <= 2);

    let view = state.registry.get(state.id).unwrap();
    let panel = state.workspace.panel_for_item(&view).unwrap();
    assert_eq!(state.workspace.side_of(panel), Some(DockSide::Right));
}
