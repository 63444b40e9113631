//!
//! The `solc --standard-json` output.
//!

pub mod contract;
pub mod error;
pub mod source;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::contract::Contract;
use self::error::Error;
use self::source::Source;

///
/// The contracts of a single output, grouped by the source file path.
///
pub type Contracts = BTreeMap<String, BTreeMap<String, Contract>>;

///
/// The `solc --standard-json` output.
///
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// The compilation errors and warnings.
    #[serde(default)]
    pub errors: Vec<Error>,
    /// The file-contract hashmap.
    #[serde(default)]
    pub contracts: Contracts,
    /// The source code mapping data.
    #[serde(default)]
    pub sources: BTreeMap<String, Source>,
    /// The `solc` compiler version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Output {
    ///
    /// Whether any diagnostic has the `error` severity.
    ///
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Error::is_error)
    }

    ///
    /// Returns the number of contracts across all files.
    ///
    pub fn contracts_count(&self) -> usize {
        self.contracts.values().map(BTreeMap::len).sum()
    }
}
