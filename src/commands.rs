//! Host command registry contract
//!
//! The string names are part of the external contract; hosts dispatch them
//! into [`Controller::execute`](crate::controller::Controller::execute).

/// Commands the host's command registry can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    TogglePanel,
    AutohidePanel,
    OpenEditor,
    FocusPanel,
    ToggleSelectList,
    ClearState,
    ClearStates,
    OpenDatabase,
    MigrateLegacyFormat,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::TogglePanel,
        Command::AutohidePanel,
        Command::OpenEditor,
        Command::FocusPanel,
        Command::ToggleSelectList,
        Command::ClearState,
        Command::ClearStates,
        Command::OpenDatabase,
        Command::MigrateLegacyFormat,
    ];

    /// The command's registry name
    pub fn name(&self) -> &'static str {
        match self {
            Command::TogglePanel => "toggle-panel",
            Command::AutohidePanel => "autohide-panel",
            Command::OpenEditor => "open-editor",
            Command::FocusPanel => "focus-panel",
            Command::ToggleSelectList => "toggle-select-list",
            Command::ClearState => "clear-state",
            Command::ClearStates => "clear-states",
            Command::OpenDatabase => "open-database",
            Command::MigrateLegacyFormat => "migrate-legacy-format",
        }
    }

    /// Resolve a registry name back to the command
    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}
