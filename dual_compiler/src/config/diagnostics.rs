//!
//! The secondary backend diagnostics treatment.
//!

use serde::Deserialize;

///
/// The secondary backend diagnostics treatment.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnostics {
    /// Errors are annotated with a banner explaining how to silence them.
    Annotate,
    /// Errors in files not wanted by the marker policy are demoted to warnings,
    /// the rest are annotated.
    Demote,
}

impl std::str::FromStr for Diagnostics {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "annotate" => Ok(Self::Annotate),
            "demote" => Ok(Self::Demote),
            string => anyhow::bail!(
                "Unknown diagnostics mode `{string}`. Supported modes: {}, {}",
                Self::Annotate,
                Self::Demote,
            ),
        }
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Annotate => write!(f, "annotate"),
            Self::Demote => write!(f, "demote"),
        }
    }
}
