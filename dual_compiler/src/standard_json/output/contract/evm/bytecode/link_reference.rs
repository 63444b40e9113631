//!
//! The `solc --standard-json` output contract bytecode link reference.
//!

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

///
/// The link references of a bytecode object.
///
/// Maps the library file path to the library name and its placeholder offsets.
///
pub type LinkReferences = BTreeMap<String, BTreeMap<String, Vec<LinkReference>>>;

///
/// The placeholder location of a library address within the bytecode.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReference {
    /// The placeholder byte offset.
    pub start: usize,
    /// The placeholder byte length.
    pub length: usize,
}

impl LinkReference {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }
}
