//! Host workspace model: two docks and the panels attached to them
//!
//! The workspace hands out opaque [`PanelId`]s; a stale id (panel already
//! destroyed) makes every operation an idempotent no-op. Attachment
//! requested before the host finishes activating its initial extensions is
//! deferred and flushed by [`Workspace::complete_startup`], so panel
//! stacking order does not race other extensions inserting into the same
//! dock.

use std::rc::Rc;

use crate::panel::{DockPriority, DockSide};
use crate::view::SharedView;

/// Opaque handle to an attached panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(u64);

struct DockPanel {
    id: PanelId,
    item: SharedView,
    visible: bool,
}

struct PendingAttach {
    item: SharedView,
    side: DockSide,
    priority: DockPriority,
    visible: bool,
}

/// Dock state for the host workspace
#[derive(Default)]
pub struct Workspace {
    left: Vec<DockPanel>,
    right: Vec<DockPanel>,
    deferred: Vec<PendingAttach>,
    startup_complete: bool,
    next_id: u64,
    created_total: u64,
    destroyed_total: u64,
}

impl Workspace {
    /// A workspace still activating its initial extensions
    pub fn new() -> Self {
        Self::default()
    }

    /// A workspace past startup; panels attach immediately
    pub fn started() -> Self {
        Self {
            startup_complete: true,
            ..Self::default()
        }
    }

    /// Attach a view to a dock, or queue the attachment during startup
    ///
    /// Returns the panel handle, or `None` while the attachment is pending.
    /// A pending attachment for the same view is superseded rather than
    /// stacked, so rapid position changes during startup yield one panel.
    pub fn add_panel(
        &mut self,
        item: SharedView,
        side: DockSide,
        priority: DockPriority,
        visible: bool,
    ) -> Option<PanelId> {
        if !self.startup_complete {
            self.deferred.retain(|pending| !Rc::ptr_eq(&pending.item, &item));
            self.deferred.push(PendingAttach {
                item,
                side,
                priority,
                visible,
            });
            tracing::debug!(?side, "Panel attachment deferred until startup completes");
            return None;
        }
        Some(self.attach(item, side, priority, visible))
    }

    /// Mark initial extension activation finished and flush deferred attaches
    pub fn complete_startup(&mut self) -> Vec<PanelId> {
        self.startup_complete = true;
        let pending: Vec<PendingAttach> = self.deferred.drain(..).collect();
        pending
            .into_iter()
            .map(|p| self.attach(p.item, p.side, p.priority, p.visible))
            .collect()
    }

    pub fn is_startup_complete(&self) -> bool {
        self.startup_complete
    }

    fn attach(
        &mut self,
        item: SharedView,
        side: DockSide,
        priority: DockPriority,
        visible: bool,
    ) -> PanelId {
        self.next_id += 1;
        let id = PanelId(self.next_id);
        let panel = DockPanel { id, item, visible };
        let dock = self.dock_mut(side);
        match priority {
            DockPriority::First => dock.insert(0, panel),
            DockPriority::Last => dock.push(panel),
        }
        self.created_total += 1;
        tracing::debug!(?side, ?priority, visible, "Panel attached");
        id
    }

    fn dock_mut(&mut self, side: DockSide) -> &mut Vec<DockPanel> {
        match side {
            DockSide::Left => &mut self.left,
            DockSide::Right => &mut self.right,
        }
    }

    fn find(&self, id: PanelId) -> Option<&DockPanel> {
        self.left
            .iter()
            .chain(self.right.iter())
            .find(|panel| panel.id == id)
    }

    fn find_mut(&mut self, id: PanelId) -> Option<&mut DockPanel> {
        self.left
            .iter_mut()
            .chain(self.right.iter_mut())
            .find(|panel| panel.id == id)
    }

    /// The panel currently holding this exact view, if attached
    pub fn panel_for_item(&self, item: &SharedView) -> Option<PanelId> {
        self.left
            .iter()
            .chain(self.right.iter())
            .find(|panel| Rc::ptr_eq(&panel.item, item))
            .map(|panel| panel.id)
    }

    /// Detach and drop a panel; stale ids are tolerated
    pub fn destroy_panel(&mut self, id: PanelId) -> bool {
        let before = self.left.len() + self.right.len();
        self.left.retain(|panel| panel.id != id);
        self.right.retain(|panel| panel.id != id);
        let destroyed = self.left.len() + self.right.len() != before;
        if destroyed {
            self.destroyed_total += 1;
        } else {
            tracing::debug!(?id, "Destroy for unknown panel ignored");
        }
        destroyed
    }

    pub fn is_visible(&self, id: PanelId) -> bool {
        self.find(id).map(|panel| panel.visible).unwrap_or(false)
    }

    pub fn show(&mut self, id: PanelId) {
        if let Some(panel) = self.find_mut(id) {
            panel.visible = true;
        }
    }

    pub fn hide(&mut self, id: PanelId) {
        if let Some(panel) = self.find_mut(id) {
            panel.visible = false;
        }
    }

    /// Flip visibility, returning the new state (stale id stays hidden)
    pub fn toggle(&mut self, id: PanelId) -> bool {
        match self.find_mut(id) {
            Some(panel) => {
                panel.visible = !panel.visible;
                panel.visible
            }
            None => false,
        }
    }

    /// Which dock a panel is attached to
    pub fn side_of(&self, id: PanelId) -> Option<DockSide> {
        if self.left.iter().any(|panel| panel.id == id) {
            Some(DockSide::Left)
        } else if self.right.iter().any(|panel| panel.id == id) {
            Some(DockSide::Right)
        } else {
            None
        }
    }

    /// Panels in one dock, in stacking order
    pub fn dock_order(&self, side: DockSide) -> Vec<PanelId> {
        let dock = match side {
            DockSide::Left => &self.left,
            DockSide::Right => &self.right,
        };
        dock.iter().map(|panel| panel.id).collect()
    }

    pub fn panel_count(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn created_total(&self) -> u64 {
        self.created_total
    }

    pub fn destroyed_total(&self) -> u64 {
        self.destroyed_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;

    #[test]
    fn test_attach_and_lookup() {
        let mut workspace = Workspace::started();
        let view = View::shared();
        let id = workspace
            .add_panel(view.clone(), DockSide::Right, DockPriority::Last, true)
            .unwrap();

        assert_eq!(workspace.panel_for_item(&view), Some(id));
        assert_eq!(workspace.side_of(id), Some(DockSide::Right));
        assert!(workspace.is_visible(id));
    }

    #[test]
    fn test_priority_ordering_within_dock() {
        let mut workspace = Workspace::started();
        let a = workspace
            .add_panel(View::shared(), DockSide::Left, DockPriority::Last, true)
            .unwrap();
        let b = workspace
            .add_panel(View::shared(), DockSide::Left, DockPriority::First, true)
            .unwrap();
        let c = workspace
            .add_panel(View::shared(), DockSide::Left, DockPriority::Last, true)
            .unwrap();

        assert_eq!(workspace.dock_order(DockSide::Left), vec![b, a, c]);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut workspace = Workspace::started();
        let id = workspace
            .add_panel(View::shared(), DockSide::Left, DockPriority::Last, true)
            .unwrap();

        assert!(workspace.destroy_panel(id));
        assert!(!workspace.destroy_panel(id));
        assert_eq!(workspace.destroyed_total(), 1);
        assert!(!workspace.is_visible(id));
    }

    #[test]
    fn test_toggle_and_absolute_visibility() {
        let mut workspace = Workspace::started();
        let id = workspace
            .add_panel(View::shared(), DockSide::Right, DockPriority::Last, false)
            .unwrap();

        assert!(workspace.toggle(id));
        assert!(!workspace.toggle(id));

        workspace.show(id);
        workspace.show(id);
        assert!(workspace.is_visible(id));
        workspace.hide(id);
        assert!(!workspace.is_visible(id));
    }

    #[test]
    fn test_deferred_attach_flushes_in_order() {
        let mut workspace = Workspace::new();
        let first = View::shared();
        let second = View::shared();

        assert!(workspace
            .add_panel(first, DockSide::Left, DockPriority::Last, true)
            .is_none());
        assert!(workspace
            .add_panel(second, DockSide::Right, DockPriority::First, false)
            .is_none());
        assert_eq!(workspace.panel_count(), 0);

        let ids = workspace.complete_startup();
        assert_eq!(ids.len(), 2);
        assert_eq!(workspace.panel_count(), 2);
        assert_eq!(workspace.side_of(ids[0]), Some(DockSide::Left));
        assert!(!workspace.is_visible(ids[1]));
    }

    #[test]
    fn test_deferred_attach_superseded_for_same_view() {
        let mut workspace = Workspace::new();
        let view = View::shared();

        workspace.add_panel(view.clone(), DockSide::Left, DockPriority::Last, true);
        workspace.add_panel(view.clone(), DockSide::Right, DockPriority::Last, true);

        let ids = workspace.complete_startup();
        assert_eq!(ids.len(), 1);
        assert_eq!(workspace.side_of(ids[0]), Some(DockSide::Right));
    }
}
