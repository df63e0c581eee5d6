//! Reactive configuration store and settings persistence
//!
//! Settings persist in `~/.config/sideview/settings.yaml`. The store is the
//! controller's single source of configuration truth and delivers changes
//! with observe semantics: registering an observer enqueues the current
//! value immediately, and every later change of an observed option enqueues
//! a typed notification. Writes that leave the stored value unchanged emit
//! nothing, which is what bounds re-entrant handler cycles.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::messages::{ConfigEvent, OptionKey};
use crate::panel::DockTarget;

/// Settings keys from pre-1.0 layouts, stripped from the persisted file at
/// activation
const LEGACY_KEYS: &[&str] = &["startupVisibility", "hideTitle", "rememberWindow"];

/// Policy selecting how panel visibility behaves across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityOption {
    /// Always show the panel on startup; toggles are session-transient
    #[serde(rename = "Display on startup")]
    DisplayOnStartup,
    /// Restore the last persisted visibility state
    #[serde(rename = "Remember state")]
    RememberState,
}

/// The recognized options and their persisted values
///
/// Field names serialize in the camelCase spelling the settings file uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub visibility_option: VisibilityOption,
    pub visibility_active: bool,
    /// Free-form; only the four `DockTarget` spellings attach a panel
    pub panel_position: String,
    pub auto_hide: bool,
    pub hide_header: bool,
    pub root_sort_by: String,
    pub keep_context: bool,
    pub open_new_window: bool,
    pub status_bar: bool,
    pub custom_width: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            visibility_option: VisibilityOption::DisplayOnStartup,
            visibility_active: true,
            panel_position: "Right".to_string(),
            auto_hide: false,
            hide_header: false,
            root_sort_by: "position".to_string(),
            keep_context: false,
            open_new_window: false,
            status_bar: false,
            custom_width: 200,
        }
    }
}

/// Configuration store with immediate-replay observation
pub struct ConfigStore {
    settings: Settings,
    queue: VecDeque<ConfigEvent>,
    observed: HashSet<OptionKey>,
    changed_only: HashSet<OptionKey>,
    writes: HashMap<OptionKey, u64>,
    path: Option<PathBuf>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl ConfigStore {
    /// In-memory store (no persistence), used by tests and embedders
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            queue: VecDeque::new(),
            observed: HashSet::new(),
            changed_only: HashSet::new(),
            writes: HashMap::new(),
            path: None,
        }
    }

    /// Load settings from the user config dir, defaults on any failure
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::settings_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(path)
    }

    /// Load settings from an explicit file, persisting back to it
    pub fn load_from(path: PathBuf) -> Self {
        let settings = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {}", path.display());
                        settings
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings at {}: {}", path.display(), e);
                        Settings::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings at {}: {}", path.display(), e);
                    Settings::default()
                }
            }
        } else {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                path.display()
            );
            Settings::default()
        };

        let mut store = Self::with_settings(settings);
        store.path = Some(path);
        store
    }

    /// Save settings to disk
    ///
    /// In-memory stores save nowhere and succeed trivially.
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(&self.settings)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write settings to {}: {}", path.display(), e))?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Strip settings keys from retired layouts out of the persisted file
    pub fn prune_legacy_keys(&self) {
        let Some(path) = &self.path else { return };
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        let Ok(mut value) = serde_yaml::from_str::<serde_yaml::Value>(&content) else {
            return;
        };
        let Some(mapping) = value.as_mapping_mut() else {
            return;
        };

        let before = mapping.len();
        mapping.retain(|key, _| {
            !LEGACY_KEYS
                .iter()
                .any(|legacy| key.as_str() == Some(*legacy))
        });
        let pruned = before - mapping.len();
        if pruned == 0 {
            return;
        }

        match serde_yaml::to_string(&value) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    tracing::warn!("Failed to rewrite pruned settings: {}", e);
                } else {
                    tracing::info!("Pruned {} legacy settings keys", pruned);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize pruned settings: {}", e),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// Observe an option: current value is enqueued now, changes follow
    pub fn observe(&mut self, key: OptionKey) {
        if self.observed.insert(key) {
            if let Some(event) = self.event_for(key) {
                self.queue.push_back(event);
            }
        }
    }

    /// Observe changes only, with no immediate replay
    pub fn observe_changes(&mut self, key: OptionKey) {
        self.changed_only.insert(key);
    }

    /// Drop every observer and any queued notifications
    pub fn drop_observers(&mut self) {
        self.observed.clear();
        self.changed_only.clear();
        self.queue.clear();
    }

    /// Pop the next pending notification
    pub fn take_event(&mut self) -> Option<ConfigEvent> {
        self.queue.pop_front()
    }

    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Drop queued notifications without touching observers
    pub fn clear_pending(&mut self) {
        self.queue.clear();
    }

    /// How many times this option has been written (changed or not)
    pub fn write_count(&self, key: OptionKey) -> u64 {
        self.writes.get(&key).copied().unwrap_or(0)
    }

    fn notify(&mut self, key: OptionKey) {
        if self.observed.contains(&key) || self.changed_only.contains(&key) {
            if let Some(event) = self.event_for(key) {
                tracing::trace!(option = key.as_str(), "Notification queued");
                self.queue.push_back(event);
            }
        }
    }

    fn event_for(&self, key: OptionKey) -> Option<ConfigEvent> {
        match key {
            OptionKey::VisibilityOption => Some(ConfigEvent::VisibilityOption(
                self.settings.visibility_option,
            )),
            OptionKey::VisibilityActive => {
                Some(ConfigEvent::VisibilityActive(self.settings.visibility_active))
            }
            OptionKey::PanelPosition => Some(ConfigEvent::PanelPosition(DockTarget::parse(
                &self.settings.panel_position,
            ))),
            OptionKey::AutoHide => Some(ConfigEvent::AutoHide(self.settings.auto_hide)),
            OptionKey::HideHeader => Some(ConfigEvent::HideHeader(self.settings.hide_header)),
            OptionKey::RootSortBy => {
                Some(ConfigEvent::RootSortBy(self.settings.root_sort_by.clone()))
            }
            OptionKey::StatusBar => Some(ConfigEvent::StatusBar(self.settings.status_bar)),
            // Recognized but consumed outside the controller core
            OptionKey::KeepContext | OptionKey::OpenNewWindow | OptionKey::CustomWidth => None,
        }
    }

    fn record_write(&mut self, key: OptionKey) {
        *self.writes.entry(key).or_insert(0) += 1;
    }

    // ------------------------------------------------------------------
    // Writers
    // ------------------------------------------------------------------

    pub fn set_visibility_option(&mut self, value: VisibilityOption) {
        self.record_write(OptionKey::VisibilityOption);
        if self.settings.visibility_option == value {
            return;
        }
        self.settings.visibility_option = value;
        self.notify(OptionKey::VisibilityOption);
    }

    pub fn set_visibility_active(&mut self, value: bool) {
        self.record_write(OptionKey::VisibilityActive);
        if self.settings.visibility_active == value {
            return;
        }
        self.settings.visibility_active = value;
        self.notify(OptionKey::VisibilityActive);
    }

    pub fn set_panel_position(&mut self, value: &str) {
        self.record_write(OptionKey::PanelPosition);
        if self.settings.panel_position == value {
            return;
        }
        self.settings.panel_position = value.to_string();
        self.notify(OptionKey::PanelPosition);
    }

    pub fn set_auto_hide(&mut self, value: bool) {
        self.record_write(OptionKey::AutoHide);
        if self.settings.auto_hide == value {
            return;
        }
        self.settings.auto_hide = value;
        self.notify(OptionKey::AutoHide);
    }

    pub fn set_hide_header(&mut self, value: bool) {
        self.record_write(OptionKey::HideHeader);
        if self.settings.hide_header == value {
            return;
        }
        self.settings.hide_header = value;
        self.notify(OptionKey::HideHeader);
    }

    pub fn set_root_sort_by(&mut self, value: &str) {
        self.record_write(OptionKey::RootSortBy);
        if self.settings.root_sort_by == value {
            return;
        }
        self.settings.root_sort_by = value.to_string();
        self.notify(OptionKey::RootSortBy);
    }

    pub fn set_status_bar(&mut self, value: bool) {
        self.record_write(OptionKey::StatusBar);
        if self.settings.status_bar == value {
            return;
        }
        self.settings.status_bar = value;
        self.notify(OptionKey::StatusBar);
    }

    pub fn set_keep_context(&mut self, value: bool) {
        self.record_write(OptionKey::KeepContext);
        self.settings.keep_context = value;
    }

    pub fn set_open_new_window(&mut self, value: bool) {
        self.record_write(OptionKey::OpenNewWindow);
        self.settings.open_new_window = value;
    }

    pub fn set_custom_width(&mut self, value: u32) {
        self.record_write(OptionKey::CustomWidth);
        self.settings.custom_width = value;
    }
}
