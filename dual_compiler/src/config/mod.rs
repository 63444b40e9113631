//!
//! The orchestrator configuration.
//!

#[cfg(test)]
mod tests;

pub mod diagnostics;
pub mod policy;
pub mod selection;

use std::path::Path;

use serde::Deserialize;

use self::diagnostics::Diagnostics;
use self::policy::Policy;
use self::selection::Selection;

///
/// The orchestrator configuration.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// The marker policy.
    pub policy: Policy,
    /// The secondary backend file selection.
    pub selection: Selection,
    /// The secondary backend diagnostics treatment.
    pub diagnostics: Diagnostics,
    /// The secondary backend tag used in markers and artifact name suffixes.
    pub tag: String,
    /// Whether to run the backends concurrently.
    pub parallel: bool,
    /// Suppresses the terminal output.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: Policy::OptOut,
            selection: Selection::Marked,
            diagnostics: Diagnostics::Annotate,
            tag: Self::DEFAULT_TAG.to_owned(),
            parallel: true,
            quiet: false,
        }
    }
}

impl Config {
    /// The default secondary backend tag.
    pub const DEFAULT_TAG: &'static str = "ovm";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(policy: Policy, tag: &str) -> Self {
        Self {
            policy,
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    ///
    /// Reads the configuration from a JSON file.
    ///
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|error| anyhow::anyhow!("Config file {path:?} opening error: {error}"))?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .map_err(|error| anyhow::anyhow!("Config file {path:?} parsing error: {error}"))?;
        config.validate()
    }

    ///
    /// Checks the invariants that are not expressed in the type system.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.tag.is_empty() {
            anyhow::bail!("The secondary backend tag must not be empty");
        }
        if self.tag.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "The secondary backend tag `{}` must not contain whitespace",
                self.tag
            );
        }
        Ok(self)
    }

    ///
    /// Returns the in-source marker directive of the active policy.
    ///
    pub fn marker(&self) -> String {
        self.policy.marker(self.tag.as_str())
    }

    ///
    /// Returns the suffix appended to the secondary contract and library names.
    ///
    pub fn suffix(&self) -> String {
        format!(".{}", self.tag)
    }
}
