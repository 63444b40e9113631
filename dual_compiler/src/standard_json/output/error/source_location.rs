//!
//! The `solc --standard-json` output error source location.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` output error source location.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// The source file path.
    pub file: String,
    /// The start location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<isize>,
    /// The end location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<isize>,
}

impl SourceLocation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(file: String) -> Self {
        Self {
            file,
            start: None,
            end: None,
        }
    }
}
