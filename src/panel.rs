//! Dock placement types for the side panel
//!
//! A panel attaches to one side of the host workspace (left or right) with a
//! priority hint deciding whether it stacks before or after panels other
//! extensions insert into the same dock.

use std::fmt;

/// Side of the workspace a dock occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockSide {
    Left,
    Right,
}

/// Stacking priority within a dock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockPriority {
    /// Insert before every existing panel in the dock
    First,
    /// Append after every existing panel in the dock
    Last,
}

/// A fully resolved dock-and-priority target for the panel
///
/// Parsed from the `panelPosition` setting. Any string outside the four
/// recognized spellings is treated as "unset" and attaches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockTarget {
    LeftFirst,
    LeftLast,
    RightFirst,
    RightLast,
}

impl DockTarget {
    /// All targets, for iteration in tests and tooling
    pub const ALL: [DockTarget; 4] = [
        DockTarget::LeftFirst,
        DockTarget::LeftLast,
        DockTarget::RightFirst,
        DockTarget::RightLast,
    ];

    /// Parse the setting's string form, `None` for anything unrecognized
    pub fn parse(value: &str) -> Option<DockTarget> {
        match value {
            "Left (first)" => Some(DockTarget::LeftFirst),
            "Left (last)" => Some(DockTarget::LeftLast),
            "Right (first)" => Some(DockTarget::RightFirst),
            "Right (last)" => Some(DockTarget::RightLast),
            _ => None,
        }
    }

    /// The setting's string form
    pub fn as_str(&self) -> &'static str {
        match self {
            DockTarget::LeftFirst => "Left (first)",
            DockTarget::LeftLast => "Left (last)",
            DockTarget::RightFirst => "Right (first)",
            DockTarget::RightLast => "Right (last)",
        }
    }

    /// Which side of the workspace this target docks to
    pub fn side(&self) -> DockSide {
        match self {
            DockTarget::LeftFirst | DockTarget::LeftLast => DockSide::Left,
            DockTarget::RightFirst | DockTarget::RightLast => DockSide::Right,
        }
    }

    /// Stacking priority within the dock
    pub fn priority(&self) -> DockPriority {
        match self {
            DockTarget::LeftFirst | DockTarget::RightFirst => DockPriority::First,
            DockTarget::LeftLast | DockTarget::RightLast => DockPriority::Last,
        }
    }
}

impl fmt::Display for DockTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
