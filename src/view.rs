//! The panel's renderable content object
//!
//! Exactly one `View` exists per live controller. It survives panel
//! re-attachment when the position changes and is reset at deactivation.
//! Rendering proper (tree/list markup) happens outside this crate; the view
//! tracks the state those renderers consume.

use std::cell::RefCell;
use std::rc::Rc;

use crate::data::Item;

/// Shared handle to a view
///
/// The registry, the workspace panel record, and data-source callbacks all
/// hold the same allocation; identity comparisons use `Rc::ptr_eq`.
pub type SharedView = Rc<RefCell<View>>;

/// Content state of the side panel
#[derive(Debug, Default)]
pub struct View {
    items: Vec<Item>,
    title_visible: bool,
    autohide: bool,
    focused: bool,
    resizer_inverted: bool,
    editor_model: Option<Option<Item>>,
    populate_count: u64,
}

impl View {
    pub fn new() -> Self {
        Self {
            title_visible: true,
            ..Self::default()
        }
    }

    /// Create a view behind a shared handle
    pub fn shared() -> SharedView {
        Rc::new(RefCell::new(View::new()))
    }

    /// Replace the displayed items with a fresh snapshot from the data source
    pub fn populate(&mut self, items: &[Item]) {
        self.items = items.to_vec();
        self.populate_count += 1;
        tracing::trace!(count = items.len(), "View populated");
    }

    /// Show or hide the panel header
    pub fn toggle_title(&mut self, visible: bool) {
        self.title_visible = visible;
    }

    /// Enable/disable hover-driven auto-hide; `None` toggles
    pub fn autohide(&mut self, enabled: Option<bool>) {
        self.autohide = enabled.unwrap_or(!self.autohide);
    }

    /// Flip keyboard focus between the panel and the host
    pub fn toggle_focus(&mut self) {
        self.focused = !self.focused;
    }

    /// Open the item editor; `None` opens a blank form for a new item
    pub fn open_editor(&mut self, model: Option<Item>) {
        self.editor_model = Some(model);
    }

    /// Move the resize grip to the panel's inner edge (left-docked panels)
    pub fn invert_resizer(&mut self, inverted: bool) {
        self.resizer_inverted = inverted;
    }

    /// Clear all content state ahead of teardown
    pub fn reset(&mut self) {
        self.items.clear();
        self.focused = false;
        self.editor_model = None;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_title_visible(&self) -> bool {
        self.title_visible
    }

    pub fn is_autohide(&self) -> bool {
        self.autohide
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_resizer_inverted(&self) -> bool {
        self.resizer_inverted
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_model.is_some()
    }

    /// Number of times the view has been repopulated since construction
    pub fn populate_count(&self) -> u64 {
        self.populate_count
    }
}
