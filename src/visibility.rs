//! Visibility reactivity engine
//!
//! Two settings model one feature: `visibilityOption` is the policy,
//! `visibilityActive` the last-known desired state. The option handler
//! writes the flag it reconciles, which re-triggers the flag handler, so
//! both are absolute sets (never toggles) and no-ops once the panel already
//! matches the written value. Combined with the store only emitting on
//! actual change, every write sequence reaches a fixed point within one
//! re-entrant round trip.

use crate::config::VisibilityOption;
use crate::controller::ControllerState;

/// `visibilityOption` changed (or replayed on observe)
///
/// Only `RememberState` is actionable: restore the persisted state if it
/// asks for a visible panel, then reconcile the persisted flag with the
/// panel's actual visibility. Reconciling also runs when the option was
/// already `RememberState`, resyncing a stale flag on re-select.
pub fn on_visibility_option(state: &mut ControllerState, option: VisibilityOption) {
    if option != VisibilityOption::RememberState {
        return;
    }
    let Some(view) = state.registry.get(state.id) else {
        return;
    };
    let Some(panel) = state.workspace.panel_for_item(&view) else {
        return;
    };

    if state.config.settings().visibility_active && !state.workspace.is_visible(panel) {
        state.workspace.show(panel);
    }
    let visible = state.workspace.is_visible(panel);
    state.config.set_visibility_active(visible);
}

/// `visibilityActive` changed (or replayed on observe)
///
/// Absolute show/hide; inert under the `DisplayOnStartup` policy.
pub fn on_visibility_active(state: &mut ControllerState, active: bool) {
    if state.config.settings().visibility_option == VisibilityOption::DisplayOnStartup {
        return;
    }
    let Some(view) = state.registry.get(state.id) else {
        return;
    };
    let Some(panel) = state.workspace.panel_for_item(&view) else {
        return;
    };

    if active {
        state.workspace.show(panel);
    } else {
        state.workspace.hide(panel);
    }
}

/// `toggle-panel` command: flip visibility, persist it under `RememberState`
pub fn toggle_panel(state: &mut ControllerState) {
    let Some(view) = state.registry.get(state.id) else {
        return;
    };
    let Some(panel) = state.workspace.panel_for_item(&view) else {
        return;
    };

    let visible = state.workspace.toggle(panel);
    if state.config.settings().visibility_option == VisibilityOption::RememberState {
        state.config.set_visibility_active(visible);
    }
}
