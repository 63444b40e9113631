//!
//! The marker policy selecting the files compiled by the secondary backend.
//!

use serde::Deserialize;

use crate::standard_json::input::source::Source;

///
/// The marker policy selecting the files compiled by the secondary backend.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Every file is compiled unless it contains `// @unsupported: <tag>`.
    OptOut,
    /// Only the files containing `// @supports: <tag>` are compiled.
    OptIn,
}

impl Policy {
    ///
    /// Returns the in-source marker directive for the `tag`.
    ///
    pub fn marker(&self, tag: &str) -> String {
        match self {
            Self::OptOut => format!("// @unsupported: {tag}"),
            Self::OptIn => format!("// @supports: {tag}"),
        }
    }

    ///
    /// Whether the source is meant to be compiled by the secondary backend.
    ///
    pub fn is_wanted(&self, source: &Source, marker: &str) -> bool {
        match self {
            Self::OptOut => !source.contains_marker(marker),
            Self::OptIn => source.contains_marker(marker),
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "opt-out" => Ok(Self::OptOut),
            "opt-in" => Ok(Self::OptIn),
            string => anyhow::bail!(
                "Unknown marker policy `{string}`. Supported policies: {}, {}",
                Self::OptOut,
                Self::OptIn,
            ),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OptOut => write!(f, "opt-out"),
            Self::OptIn => write!(f, "opt-in"),
        }
    }
}
