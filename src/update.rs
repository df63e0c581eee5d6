//! Notification dispatch and the configuration pump
//!
//! Every configuration notification flows through [`update`]. The pump
//! drains the store's queue to a fixed point; handlers that write settings
//! enqueue follow-up notifications which the same pump run consumes. All
//! handlers are guarded by "no registered view ⇒ no-op".

use crate::controller::ControllerState;
use crate::lifecycle;
use crate::messages::ConfigEvent;
use crate::visibility;

/// Defensive cap on one pump run; well above any legitimate cascade
pub const MAX_PUMP_TURNS: usize = 64;

/// Dispatch one configuration notification to its handler
pub fn update(state: &mut ControllerState, event: ConfigEvent) {
    tracing::trace!(?event, "Dispatching configuration notification");
    match event {
        ConfigEvent::VisibilityOption(option) => visibility::on_visibility_option(state, option),
        ConfigEvent::VisibilityActive(active) => visibility::on_visibility_active(state, active),
        ConfigEvent::PanelPosition(target) => lifecycle::resolve_position(state, target),
        ConfigEvent::AutoHide(enabled) => on_auto_hide(state, enabled),
        ConfigEvent::HideHeader(hidden) => on_hide_header(state, hidden),
        ConfigEvent::RootSortBy(_) => on_root_sort_change(state),
        ConfigEvent::StatusBar(enabled) => on_status_bar(state, enabled),
    }
}

/// Drain pending notifications, returning the number of turns taken
pub fn pump(state: &mut ControllerState) -> usize {
    let mut turns = 0;
    while let Some(event) = state.config.take_event() {
        turns += 1;
        if turns > MAX_PUMP_TURNS {
            tracing::error!(
                "Configuration pump exceeded {} turns, dropping {} pending notifications",
                MAX_PUMP_TURNS,
                state.config.pending_events() + 1
            );
            state.config.clear_pending();
            break;
        }
        update(state, event);
    }
    turns
}

fn on_auto_hide(state: &mut ControllerState, enabled: bool) {
    let Some(view) = state.registry.get(state.id) else {
        return;
    };
    view.borrow_mut().autohide(Some(enabled));
}

fn on_hide_header(state: &mut ControllerState, hidden: bool) {
    let Some(view) = state.registry.get(state.id) else {
        return;
    };
    view.borrow_mut().toggle_title(!hidden);
}

/// Sort-order changes invalidate the derived view ordering; repopulate from
/// the source rather than re-sorting locally
fn on_root_sort_change(state: &mut ControllerState) {
    if state.registry.get(state.id).is_none() {
        return;
    }
    state.data.refresh();
}

fn on_status_bar(state: &mut ControllerState, enabled: bool) {
    // observer registration is deferred until the service exists, but the
    // service may have been replaced with nothing in between
    let Some(service) = &state.status_bar else {
        return;
    };
    service.borrow_mut().toggle(enabled);
}
