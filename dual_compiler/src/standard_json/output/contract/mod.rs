//!
//! The `solc --standard-json` output contract.
//!

pub mod evm;

use serde::Deserialize;
use serde::Serialize;

use self::evm::bytecode::Bytecode;
use self::evm::EVM;

///
/// The `solc --standard-json` output contract.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// The contract EVM data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm: Option<EVM>,
    /// The fields not interpreted by the orchestrator, e.g. `abi` or `metadata`.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Contract {
    ///
    /// Returns the deploy bytecode, if it has been requested.
    ///
    pub fn bytecode(&self) -> Option<&Bytecode> {
        self.evm.as_ref()?.bytecode.as_ref()
    }

    ///
    /// Returns the mutable deploy bytecode, if it has been requested.
    ///
    pub fn bytecode_mut(&mut self) -> Option<&mut Bytecode> {
        self.evm.as_mut()?.bytecode.as_mut()
    }
}
