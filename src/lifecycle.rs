//! Panel lifecycle manager
//!
//! Realizes a requested dock-and-priority target into a live panel,
//! replacing any prior one. This module is the only writer of the ownership
//! registry and the only creator/destroyer of panels and subscriptions.

use crate::controller::ControllerState;
use crate::panel::{DockSide, DockTarget};
use crate::view::View;

/// `panelPosition` changed (or replayed on observe)
///
/// Teardown strictly precedes build: the old panel is destroyed and its
/// subscription released before the new panel attaches, so a stale
/// subscription can never deliver a refresh into a destroyed panel.
pub fn resolve_position(state: &mut ControllerState, target: Option<DockTarget>) {
    let view = match state.registry.get(state.id) {
        Some(view) => {
            if let Some(panel) = state.workspace.panel_for_item(&view) {
                state.workspace.destroy_panel(panel);
                state.ledger.release(state.data.as_mut());
            }
            view
        }
        None => {
            // first-activation path
            let view = View::shared();
            state.registry.register(state.id, view.clone());
            view
        }
    };

    match target {
        Some(target) => {
            let visible = state.config.settings().visibility_active;
            state
                .workspace
                .add_panel(view.clone(), target.side(), target.priority(), visible);
            // left-docked panels carry the resize grip on their inner edge
            view.borrow_mut()
                .invert_resizer(target.side() == DockSide::Left);
        }
        None => {
            tracing::debug!("Panel position unset or unrecognized, nothing attached");
        }
    }

    let populate_target = view.clone();
    state.ledger.acquire(
        state.data.as_mut(),
        Box::new(move |items| populate_target.borrow_mut().populate(items)),
    );
    state.data.refresh();
}
