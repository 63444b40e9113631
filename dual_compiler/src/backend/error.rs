//!
//! The backend resolution error.
//!

///
/// The backend resolution error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The compiler executable cannot be found or started.
    #[error("The `{executable}` executable not found: {reason}")]
    ExecutableNotFound {
        /// The executable name or path.
        executable: String,
        /// The underlying error description.
        reason: String,
    },
}
