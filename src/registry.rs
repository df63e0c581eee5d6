//! Ownership registry mapping a controller activation to its view
//!
//! One controller owns at most one live view at a time. Every reactivity
//! handler reads this map before acting; only the panel lifecycle manager
//! writes it. Entries are removed explicitly at deactivation rather than
//! finalized through weak references.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::view::SharedView;

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque token identifying one controller activation
///
/// Used only as a registry key, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    pub fn next() -> Self {
        Self(NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// `ControllerId → SharedView` map
#[derive(Default)]
pub struct ViewRegistry {
    entries: HashMap<ControllerId, SharedView>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a controller with its view, replacing any prior entry
    pub fn register(&mut self, id: ControllerId, view: SharedView) {
        if self.entries.insert(id, view).is_some() {
            tracing::debug!(?id, "Registry entry replaced");
        }
    }

    /// Drop the controller's entry, returning the view it owned
    pub fn unregister(&mut self, id: ControllerId) -> Option<SharedView> {
        self.entries.remove(&id)
    }

    /// The view owned by this controller, if any
    pub fn get(&self, id: ControllerId) -> Option<SharedView> {
        self.entries.get(&id).cloned()
    }

    /// Whether this exact view allocation is owned by any controller
    pub fn has_view(&self, view: &SharedView) -> bool {
        self.entries.values().any(|owned| Rc::ptr_eq(owned, view))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
