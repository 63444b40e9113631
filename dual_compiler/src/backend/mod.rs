//!
//! The compiler backends.
//!

pub mod error;
pub mod solc;

use crate::standard_json::input::Input;
use crate::standard_json::output::Output;

use self::error::Error;

///
/// The compiler backend trait.
///
/// Diagnostics are returned as data in the output. Only fatal failures, such as a missing
/// executable or an unparsable output, are returned as errors.
///
pub trait Backend: Send + Sync {
    ///
    /// Returns the backend name used in the terminal output.
    ///
    fn name(&self) -> &str;

    ///
    /// Compiles the standard JSON input.
    ///
    fn standard_json(&self, input: &Input) -> anyhow::Result<Output>;
}

///
/// Rewrites the missing secondary executable error into an actionable one.
///
/// Any other error is returned as is.
///
pub fn rewrite_missing_secondary<T>(result: anyhow::Result<T>) -> anyhow::Result<T> {
    result.map_err(|error| match error.downcast_ref::<Error>() {
        Some(Error::ExecutableNotFound { executable, .. }) => anyhow::anyhow!(
            "Could not find the secondary compiler `{executable}`. Install it to compile the sources selected for the secondary backend."
        ),
        None => error,
    })
}
