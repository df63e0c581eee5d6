//! sideview - dockable side-panel controller
//!
//! This crate provides the lifecycle, visibility, and subscription logic
//! for a single dockable side panel inside a host workspace, driven by a
//! reactive configuration store.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod data;
pub mod ledger;
pub mod lifecycle;
pub mod messages;
pub mod panel;
pub mod registry;
pub mod select_list;
pub mod status_bar;
pub mod tracing;
pub mod update;
pub mod view;
pub mod visibility;
pub mod workspace;

// Re-export commonly used types
pub use commands::Command;
pub use config::{ConfigStore, Settings, VisibilityOption};
pub use controller::Controller;
pub use data::{DataSource, Item, ItemKind, JsonDataSource};
pub use messages::{ConfigEvent, OptionKey};
pub use panel::{DockPriority, DockSide, DockTarget};
pub use view::View;
pub use workspace::Workspace;
