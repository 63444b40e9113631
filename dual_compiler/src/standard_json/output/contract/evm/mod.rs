//!
//! The `solc --standard-json` output contract EVM data.
//!

pub mod bytecode;

use serde::Deserialize;
use serde::Serialize;

use self::bytecode::Bytecode;

///
/// The `solc --standard-json` output contract EVM data.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::upper_case_acronyms)]
pub struct EVM {
    /// Contract deploy bytecode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytecode: Option<Bytecode>,
    /// The fields not interpreted by the orchestrator, e.g. `deployedBytecode`.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
