//!
//! The compilation splitter.
//!


use std::collections::BTreeMap;

use crate::config::selection::Selection;
use crate::config::Config;
use crate::standard_json::input::Input;

///
/// The backend-specific inputs derived from a single input.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// The primary backend input. Always contains every source.
    pub primary: Input,
    /// The secondary backend input. May be empty.
    pub secondary: Input,
}

///
/// Partitions `input` into the primary and secondary backend inputs.
///
/// The primary input receives all sources unconditionally. The secondary input receives
/// the sources selected by the configuration. An empty input yields two empty inputs.
///
pub fn split(input: &Input, config: &Config) -> Split {
    let marker = config.marker();
    let secondary_sources: BTreeMap<_, _> = input
        .sources
        .iter()
        .filter(|(_path, source)| match config.selection {
            Selection::All => true,
            Selection::Marked => config.policy.is_wanted(source, marker.as_str()),
        })
        .map(|(path, source)| (path.to_owned(), source.to_owned()))
        .collect();

    Split {
        primary: input.clone(),
        secondary: input.with_sources(secondary_sources),
    }
}
