//!
//! The `solc --standard-json` output contract EVM bytecode.
//!

pub mod link_reference;

use serde::Deserialize;
use serde::Serialize;

use self::link_reference::LinkReferences;

///
/// The `solc --standard-json` output contract EVM bytecode.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bytecode {
    /// The bytecode object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// The unlinked library references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_references: Option<LinkReferences>,
    /// The fields not interpreted by the orchestrator, e.g. `opcodes` or `sourceMap`.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Bytecode {
    ///
    /// Appends `suffix` to every library name in every file table of the link references.
    ///
    /// Each table is rebuilt from its drained entries, so a name is suffixed exactly once.
    ///
    pub fn suffix_link_references(&mut self, suffix: &str) {
        let link_references = match self.link_references.as_mut() {
            Some(link_references) => link_references,
            None => return,
        };
        for libraries in link_references.values_mut() {
            *libraries = std::mem::take(libraries)
                .into_iter()
                .map(|(name, offsets)| (format!("{name}{suffix}"), offsets))
                .collect();
        }
    }
}
