//!
//! The `solc --standard-json` data model shared by both backends.
//!


pub mod input;
pub mod output;
