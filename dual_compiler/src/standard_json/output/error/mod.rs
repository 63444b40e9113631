//!
//! The `solc --standard-json` output error.
//!

pub mod severity;
pub mod source_location;

use serde::Deserialize;
use serde::Serialize;

use self::severity::Severity;
use self::source_location::SourceLocation;

///
/// The `solc --standard-json` output error.
///
/// Both errors and warnings are represented by this type.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The component type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// The error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// The formatted error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_message: Option<String>,
    /// The non-formatted error message.
    pub message: String,
    /// The error severity.
    pub severity: Severity,
    /// The error location data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
    /// The error kind, e.g. `JSONError` or `TypeError`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The fields not interpreted by the orchestrator.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Error {
    /// The message emitted by `solc` for an input with an empty `sources` map.
    pub const NO_INPUT_SOURCES: &'static str = "No input sources specified.";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(severity: Severity, message: &str, source_location: Option<SourceLocation>) -> Self {
        Self {
            component: Some("general".to_owned()),
            error_code: None,
            formatted_message: Some(format!("{severity}: {message}")),
            message: message.to_owned(),
            severity,
            source_location,
            r#type: None,
            other: serde_json::Map::new(),
        }
    }

    ///
    /// A shortcut constructor of the empty input error.
    ///
    pub fn new_no_input_sources() -> Self {
        let mut error = Self::new(Severity::Error, Self::NO_INPUT_SOURCES, None);
        error.r#type = Some("JSONError".to_owned());
        error
    }

    ///
    /// Whether the error is the `solc` boilerplate for an empty input.
    ///
    pub fn is_no_input_sources(&self) -> bool {
        self.message == Self::NO_INPUT_SOURCES
    }

    ///
    /// Whether the error has the `error` severity.
    ///
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    ///
    /// Returns the path of the file the error originates from, if any.
    ///
    pub fn file(&self) -> Option<&str> {
        self.source_location
            .as_ref()
            .map(|location| location.file.as_str())
    }

    ///
    /// Prepends `banner` to the formatted message.
    ///
    /// Falls back to the plain message if the formatted one is absent.
    ///
    pub fn prepend_banner(&mut self, banner: &str) {
        let formatted_message = self
            .formatted_message
            .as_deref()
            .unwrap_or(self.message.as_str());
        self.formatted_message = Some(format!("{banner}\n {formatted_message}"));
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.formatted_message {
            Some(ref formatted_message) => write!(f, "{formatted_message}"),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
