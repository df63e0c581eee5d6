//! Typed configuration notifications
//!
//! Every observable setting delivers its changes as an explicit record
//! rather than a loosely-shaped event payload. The controller's pump drains
//! these from the config store's queue one turn at a time.

use crate::config::VisibilityOption;
use crate::panel::DockTarget;

/// Key identifying one recognized configuration option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    VisibilityOption,
    VisibilityActive,
    PanelPosition,
    AutoHide,
    HideHeader,
    RootSortBy,
    KeepContext,
    OpenNewWindow,
    StatusBar,
    CustomWidth,
}

impl OptionKey {
    /// The option's name as it appears in the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::VisibilityOption => "visibilityOption",
            OptionKey::VisibilityActive => "visibilityActive",
            OptionKey::PanelPosition => "panelPosition",
            OptionKey::AutoHide => "autoHide",
            OptionKey::HideHeader => "hideHeader",
            OptionKey::RootSortBy => "rootSortBy",
            OptionKey::KeepContext => "keepContext",
            OptionKey::OpenNewWindow => "openNewWindow",
            OptionKey::StatusBar => "statusBar",
            OptionKey::CustomWidth => "customWidth",
        }
    }
}

/// One configuration-change notification
///
/// `PanelPosition` carries the already-parsed dock target; `None` models an
/// unset or unrecognized position and is inert downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigEvent {
    VisibilityOption(VisibilityOption),
    VisibilityActive(bool),
    PanelPosition(Option<DockTarget>),
    AutoHide(bool),
    HideHeader(bool),
    RootSortBy(String),
    StatusBar(bool),
}

impl ConfigEvent {
    /// The option this notification belongs to
    pub fn key(&self) -> OptionKey {
        match self {
            ConfigEvent::VisibilityOption(_) => OptionKey::VisibilityOption,
            ConfigEvent::VisibilityActive(_) => OptionKey::VisibilityActive,
            ConfigEvent::PanelPosition(_) => OptionKey::PanelPosition,
            ConfigEvent::AutoHide(_) => OptionKey::AutoHide,
            ConfigEvent::HideHeader(_) => OptionKey::HideHeader,
            ConfigEvent::RootSortBy(_) => OptionKey::RootSortBy,
            ConfigEvent::StatusBar(_) => OptionKey::StatusBar,
        }
    }
}
