//!
//! The `solc --standard-json` output error severity.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` output error severity.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The compilation error.
    Error,
    /// The compilation warning.
    Warning,
    /// The informational message.
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}
