//!
//! The `solc --standard-json` input language.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` input language.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Language {
    /// The Solidity language.
    Solidity,
    /// The Yul IR.
    Yul,
    /// The Solidity AST imported from a previous compilation.
    #[serde(rename = "SolidityAST")]
    SolidityAST,
    /// The EVM assembly JSON imported from a previous compilation.
    #[serde(rename = "EVMAssembly")]
    EVMAssembly,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solidity => write!(f, "Solidity"),
            Self::Yul => write!(f, "Yul"),
            Self::SolidityAST => write!(f, "SolidityAST"),
            Self::EVMAssembly => write!(f, "EVMAssembly"),
        }
    }
}
