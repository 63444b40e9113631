//!
//! The `solc --standard-json` input source.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` input source.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// The source code file content.
    ///
    /// Absent for the sources specified with `urls` only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// The fields not interpreted by the orchestrator, e.g. `urls` or `keccak256`.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Source {
    ///
    /// Whether the source code contains the `marker` directive.
    ///
    /// This is a plain substring scan, the source is not parsed.
    /// The sources without inline content never contain markers.
    ///
    pub fn contains_marker(&self, marker: &str) -> bool {
        self.content
            .as_deref()
            .map(|content| content.contains(marker))
            .unwrap_or_default()
    }
}

impl From<String> for Source {
    fn from(content: String) -> Self {
        Self {
            content: Some(content),
            other: serde_json::Map::new(),
        }
    }
}

impl From<&str> for Source {
    fn from(content: &str) -> Self {
        Self::from(content.to_owned())
    }
}
