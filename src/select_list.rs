//! Quick-switch select list collaborator
//!
//! A small secondary consumer of the data source: it holds its own
//! subscription (outside the panel's ledger) and a transient panel of its
//! own toggled from the command registry.

use std::cell::RefCell;
use std::rc::Rc;

use crate::data::Item;

pub type SharedSelectList = Rc<RefCell<SelectList>>;

/// Item picker state
#[derive(Debug, Default)]
pub struct SelectList {
    items: Vec<Item>,
    visible: bool,
    initialized: bool,
}

impl SelectList {
    pub fn shared() -> SharedSelectList {
        Rc::new(RefCell::new(SelectList::default()))
    }

    pub fn initialize(&mut self) {
        self.initialized = true;
    }

    /// Refresh callback target; ignores data until initialized
    pub fn populate(&mut self, items: &[Item]) {
        if !self.initialized {
            return;
        }
        self.items = items.to_vec();
    }

    pub fn toggle_panel(&mut self) {
        if !self.initialized {
            return;
        }
        self.visible = !self.visible;
    }

    pub fn reset(&mut self) {
        self.items.clear();
        self.visible = false;
        self.initialized = false;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
