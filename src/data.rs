//! Data-source collaborator interface and a JSON-backed sample source
//!
//! The panel never queries project data directly; it subscribes to a
//! [`DataSource`] and receives the full item list on every refresh. The
//! storage and query engine behind the source is out of scope here —
//! `JsonDataSource` exists so the demo binary and tests have a real
//! collaborator to talk to.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Kind of entry the panel lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Group,
    Project,
}

/// One entry of the panel's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Group,
        }
    }

    pub fn project(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::Project,
        }
    }
}

/// Identifier for one live refresh subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Callback invoked with the current item list on every refresh
pub type RefreshFn = Box<dyn FnMut(&[Item])>;

/// Narrow interface the controller consumes
///
/// Implementations deliver "refresh" notifications to every subscriber;
/// subscribers are identified by the id returned from `subscribe` and must
/// be released with `unsubscribe`. `unsubscribe` on an unknown id is an
/// idempotent no-op returning `false`.
pub trait DataSource {
    fn activate(&mut self);
    fn deactivate(&mut self);
    fn subscribe(&mut self, callback: RefreshFn) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
    /// Push the current item list to every subscriber
    fn refresh(&mut self);
    /// Host command: reveal the backing store (inert by default)
    fn open_database(&mut self) {}
    /// Host command: lift a legacy-format store into the current one
    fn migrate_legacy(&mut self) {}
}

/// Legacy flat store layout, two plain name lists
#[derive(Debug, Default, Deserialize)]
struct LegacyStore {
    #[serde(default)]
    groups: Vec<String>,
    #[serde(default)]
    projects: Vec<String>,
}

/// In-memory data source, optionally loaded from a JSON item file
pub struct JsonDataSource {
    items: Vec<Item>,
    subscribers: Vec<(SubscriptionId, RefreshFn)>,
    next_id: u64,
    active: bool,
    path: Option<PathBuf>,
}

impl JsonDataSource {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            subscribers: Vec::new(),
            next_id: 1,
            active: false,
            path: None,
        }
    }

    /// Load items from a JSON file holding an array of `Item`
    pub fn load(path: PathBuf) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read data file {}", path.display()))?;
        let items: Vec<Item> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse data file {}", path.display()))?;
        tracing::info!("Loaded {} items from {}", items.len(), path.display());
        Ok(Self {
            path: Some(path),
            ..Self::new(items)
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replace the item list and notify subscribers
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.refresh();
    }
}

impl DataSource for JsonDataSource {
    fn activate(&mut self) {
        self.active = true;
        tracing::debug!("Data source activated ({} items)", self.items.len());
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.subscribers.clear();
        tracing::debug!("Data source deactivated");
    }

    fn subscribe(&mut self, callback: RefreshFn) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        tracing::trace!(id = id.0, "Data source subscription added");
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;
        if !removed {
            tracing::debug!(id = id.0, "Unsubscribe for unknown subscription ignored");
        }
        removed
    }

    fn refresh(&mut self) {
        let items = self.items.clone();
        for (_, callback) in &mut self.subscribers {
            callback(&items);
        }
    }

    fn open_database(&mut self) {
        match &self.path {
            Some(path) => tracing::info!("Database file at {}", path.display()),
            None => tracing::debug!("No database file to open (in-memory source)"),
        }
    }

    fn migrate_legacy(&mut self) {
        let Some(path) = &self.path else {
            tracing::debug!("No backing file, nothing to migrate");
            return;
        };
        let legacy_path = path.with_extension("legacy.json");
        let content = match fs::read_to_string(&legacy_path) {
            Ok(content) => content,
            Err(_) => {
                tracing::debug!("No legacy store at {}", legacy_path.display());
                return;
            }
        };
        let legacy: LegacyStore = match serde_json::from_str(&content) {
            Ok(legacy) => legacy,
            Err(e) => {
                tracing::warn!("Failed to parse legacy store: {}", e);
                return;
            }
        };
        let migrated = legacy.groups.len() + legacy.projects.len();
        self.items
            .extend(legacy.groups.into_iter().map(Item::group));
        self.items
            .extend(legacy.projects.into_iter().map(Item::project));
        tracing::info!("Migrated {} legacy entries", migrated);
        self.refresh();
    }
}
