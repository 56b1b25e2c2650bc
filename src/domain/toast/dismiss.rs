// SPDX-License-Identifier: MPL-2.0
//! Manual dismissal trigger.

use std::fmt;
use std::str::FromStr;

/// How a user manually dismisses a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DismissMode {
    /// An explicit close control dismisses the toast.
    #[default]
    Button,
    /// A click anywhere on the toast body dismisses it.
    Click,
}

impl DismissMode {
    /// All accepted modes, in the order they are listed to users.
    pub const ALL: [DismissMode; 2] = [DismissMode::Button, DismissMode::Click];

    /// Returns the configuration keyword for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DismissMode::Button => "button",
            DismissMode::Click => "click",
        }
    }

    /// Returns true if a click on the toast body dismisses it.
    #[must_use]
    pub fn dismisses_on_body_click(self) -> bool {
        self == DismissMode::Click
    }
}

impl fmt::Display for DismissMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected dismiss mode keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDismissMode(pub String);

impl fmt::Display for UnknownDismissMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<&str> = DismissMode::ALL.iter().map(|m| m.as_str()).collect();
        write!(
            f,
            "unknown dismiss mode '{}', expected one of: {}",
            self.0,
            valid.join(", ")
        )
    }
}

impl std::error::Error for UnknownDismissMode {}

impl FromStr for DismissMode {
    type Err = UnknownDismissMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "button" => Ok(DismissMode::Button),
            "click" => Ok(DismissMode::Click),
            _ => Err(UnknownDismissMode(s.to_string())),
        }
    }
}
