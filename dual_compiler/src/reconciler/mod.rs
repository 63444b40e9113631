//!
//! The output reconciler.
//!
//! Merges the primary and secondary backend outputs into a single output understood by the
//! tooling that consumes the primary backend output.
//!


use crate::config::diagnostics::Diagnostics;
use crate::config::policy::Policy;
use crate::config::Config;
use crate::standard_json::input::Input;
use crate::standard_json::output::error::severity::Severity;
use crate::standard_json::output::error::Error;
use crate::standard_json::output::Contracts;
use crate::standard_json::output::Output;

///
/// Reconciles the backend outputs.
///
/// The secondary diagnostics are annotated and prepended to the primary ones, the secondary
/// contracts are merged under suffixed names, and the primary sources are kept.
/// The secondary sources are discarded.
///
pub fn reconcile(primary: Output, mut secondary: Output, input: &Input, config: &Config) -> Output {
    self::annotate(secondary.errors.as_mut_slice(), input, config);
    let errors = self::merge_errors(secondary.errors, primary.errors);

    let mut contracts = primary.contracts;
    self::merge_contracts(&mut contracts, secondary.contracts, config.suffix().as_str());

    Output {
        errors,
        contracts,
        sources: primary.sources,
        version: primary.version,
    }
}

///
/// Rewrites the secondary backend `errors` to tell them apart from the primary ones.
///
/// Only the `error` severity is touched. In the demoting mode, errors in files the marker
/// policy does not want compiled become warnings.
///
pub fn annotate(errors: &mut [Error], input: &Input, config: &Config) {
    let marker = config.marker();
    let name = config.tag.to_uppercase();

    for error in errors.iter_mut().filter(|error| error.is_error()) {
        let is_unwanted = error
            .file()
            .and_then(|file| input.sources.get(file))
            .map(|source| !config.policy.is_wanted(source, marker.as_str()))
            .unwrap_or_default();

        if config.diagnostics == Diagnostics::Demote && is_unwanted {
            error.severity = Severity::Warning;
            let banner = match config.policy {
                Policy::OptOut => format!("{name} Compiler Warning (silenced by \"{marker}\"):"),
                Policy::OptIn => format!(
                    "{name} Compiler Warning (silenced by the absence of \"{marker}\" in this file):"
                ),
            };
            error.prepend_banner(banner.as_str());
        } else {
            let banner = match config.policy {
                Policy::OptOut => format!(
                    "{name} Compiler Error (silence by adding: \"{marker}\" to the top of this file):"
                ),
                Policy::OptIn => format!(
                    "{name} Compiler Error (silence by removing: \"{marker}\" from this file):"
                ),
            };
            error.prepend_banner(banner.as_str());
        }
    }
}

///
/// Concatenates the secondary and primary diagnostics, in this order.
///
/// The empty input error is expected when exactly one of the backends has received no sources,
/// so it is removed only if it occurs exactly once. Any other count is left intact.
///
pub fn merge_errors(secondary: Vec<Error>, primary: Vec<Error>) -> Vec<Error> {
    let mut errors = secondary;
    errors.extend(primary);

    let filtered: Vec<Error> = errors
        .iter()
        .filter(|error| !error.is_no_input_sources())
        .cloned()
        .collect();
    if errors.len() == filtered.len() + 1 {
        filtered
    } else {
        errors
    }
}

///
/// Moves the `secondary` contracts into `primary` under suffixed names.
///
/// Only the files known to the primary output are merged, the rest are dropped.
/// The library names in the deploy bytecode link references get the same suffix.
/// Existing entries with the same suffixed name are overwritten.
///
pub fn merge_contracts(primary: &mut Contracts, secondary: Contracts, suffix: &str) {
    for (path, contracts) in secondary.into_iter() {
        let file = match primary.get_mut(path.as_str()) {
            Some(file) => file,
            None => continue,
        };

        for (name, mut contract) in contracts.into_iter() {
            if let Some(bytecode) = contract.bytecode_mut() {
                bytecode.suffix_link_references(suffix);
            }
            file.insert(format!("{name}{suffix}"), contract);
        }
    }
}
