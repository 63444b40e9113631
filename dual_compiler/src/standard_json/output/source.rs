//!
//! The `solc --standard-json` output source.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` output source.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// The source code ID.
    pub id: usize,
    /// The source code AST.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ast: Option<serde_json::Value>,
    /// The fields not interpreted by the orchestrator.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Source {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(id: usize) -> Self {
        Self {
            id,
            ast: None,
            other: serde_json::Map::new(),
        }
    }
}
