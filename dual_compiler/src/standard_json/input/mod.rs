//!
//! The `solc --standard-json` input.
//!

pub mod language;
pub mod source;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use self::language::Language;
use self::source::Source;

///
/// The `solc --standard-json` input.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The input language.
    pub language: Language,
    /// The input source code files hashmap.
    pub sources: BTreeMap<String, Source>,
    /// The compiler settings, passed to both backends as is.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub settings: serde_json::Value,
}

impl Input {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        language: Language,
        sources: BTreeMap<String, Source>,
        settings: serde_json::Value,
    ) -> Self {
        Self {
            language,
            sources,
            settings,
        }
    }

    ///
    /// A shortcut constructor from source code.
    ///
    pub fn from_sources(sources: BTreeMap<String, String>, settings: serde_json::Value) -> Self {
        let sources = sources
            .into_iter()
            .map(|(path, content)| (path, Source::from(content)))
            .collect();
        Self::new(Language::Solidity, sources, settings)
    }

    ///
    /// Reads the input from a JSON file.
    ///
    pub fn try_from_path(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .map_err(|error| anyhow::anyhow!("Standard JSON file {path:?} opening error: {error}"))?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|error| anyhow::anyhow!("Standard JSON file {path:?} parsing error: {error}"))
    }

    ///
    /// Reads the input from the standard input stream.
    ///
    pub fn try_from_stdin() -> anyhow::Result<Self> {
        let reader = std::io::BufReader::new(std::io::stdin().lock());
        serde_json::from_reader(reader)
            .map_err(|error| anyhow::anyhow!("Standard JSON parsing from stdin error: {error}"))
    }

    ///
    /// Returns a copy of the input with the sources replaced.
    ///
    /// The language and settings are preserved.
    ///
    pub fn with_sources(&self, sources: BTreeMap<String, Source>) -> Self {
        Self::new(self.language, sources, self.settings.clone())
    }
}
