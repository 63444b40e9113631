//!
//! The secondary backend file selection.
//!

use serde::Deserialize;

///
/// The secondary backend file selection.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// Only the files wanted by the marker policy.
    Marked,
    /// All files, regardless of markers.
    All,
}

impl std::str::FromStr for Selection {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "marked" => Ok(Self::Marked),
            "all" => Ok(Self::All),
            string => anyhow::bail!(
                "Unknown selection `{string}`. Supported selections: {}, {}",
                Self::Marked,
                Self::All,
            ),
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Marked => write!(f, "marked"),
            Self::All => write!(f, "all"),
        }
    }
}
