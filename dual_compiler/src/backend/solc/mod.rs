//!
//! The `solc` subprocess backend.
//!


use std::io::Write;
use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::backend::error::Error as BackendError;
use crate::backend::Backend;
use crate::standard_json::input::Input;
use crate::standard_json::output::Output;

/// The `solc --version` output version pattern.
static VERSION_REGEX: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"Version: (\d+\.\d+\.\d+)").expect("Always valid"));

///
/// The `solc` subprocess backend.
///
#[derive(Debug, Clone)]
pub struct Solc {
    /// The backend name.
    name: String,
    /// The resolved executable path.
    executable: PathBuf,
    /// The `--base-path` argument.
    base_path: Option<String>,
    /// The `--include-path` arguments.
    include_paths: Vec<String>,
    /// The `--allow-paths` argument.
    allow_paths: Option<String>,
}

impl Solc {
    ///
    /// A shortcut constructor.
    ///
    /// The `executable` is either a path or a name looked up in `${PATH}`.
    ///
    pub fn new(name: &str, executable: &str) -> anyhow::Result<Self> {
        let path = which::which(executable).map_err(|error| BackendError::ExecutableNotFound {
            executable: executable.to_owned(),
            reason: error.to_string(),
        })?;
        Ok(Self {
            name: name.to_owned(),
            executable: path,
            base_path: None,
            include_paths: Vec::new(),
            allow_paths: None,
        })
    }

    ///
    /// Sets the import resolution paths.
    ///
    pub fn with_paths(
        mut self,
        base_path: Option<String>,
        include_paths: Vec<String>,
        allow_paths: Option<String>,
    ) -> Self {
        self.base_path = base_path;
        self.include_paths = include_paths;
        self.allow_paths = allow_paths;
        self
    }

    ///
    /// Returns the resolved executable path.
    ///
    pub fn executable(&self) -> &PathBuf {
        &self.executable
    }

    ///
    /// Queries the compiler version.
    ///
    pub fn version(&self) -> anyhow::Result<semver::Version> {
        let output = std::process::Command::new(self.executable.as_os_str())
            .arg("--version")
            .output()
            .map_err(|error| self.spawn_error(error))?;
        if !output.status.success() {
            anyhow::bail!(
                "{} version getting error: {}",
                self.executable.to_string_lossy(),
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }
        Self::parse_version(String::from_utf8_lossy(output.stdout.as_slice()).as_ref())
    }

    ///
    /// Parses the `solc --version` output.
    ///
    pub fn parse_version(stdout: &str) -> anyhow::Result<semver::Version> {
        let captures = VERSION_REGEX
            .captures(stdout)
            .ok_or_else(|| anyhow::anyhow!("Version not found in the output: {stdout}"))?;
        let version = semver::Version::parse(&captures[1])
            .map_err(|error| anyhow::anyhow!("Version `{}` parsing error: {error}", &captures[1]))?;
        Ok(version)
    }

    ///
    /// Maps the subprocess spawning error, distinguishing a missing executable.
    ///
    fn spawn_error(&self, error: std::io::Error) -> anyhow::Error {
        let executable = self.executable.to_string_lossy().to_string();
        if error.kind() == std::io::ErrorKind::NotFound {
            BackendError::ExecutableNotFound {
                executable,
                reason: error.to_string(),
            }
            .into()
        } else {
            anyhow::anyhow!("{executable} subprocess spawning error: {error:?}")
        }
    }
}

impl Backend for Solc {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn standard_json(&self, input: &Input) -> anyhow::Result<Output> {
        let executable = self.executable.to_string_lossy();

        let mut command = std::process::Command::new(self.executable.as_os_str());
        command.stdin(std::process::Stdio::piped());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        command.arg("--standard-json");

        if let Some(ref base_path) = self.base_path {
            command.arg("--base-path");
            command.arg(base_path);
        }
        for include_path in self.include_paths.iter() {
            command.arg("--include-path");
            command.arg(include_path);
        }
        if let Some(ref allow_paths) = self.allow_paths {
            command.arg("--allow-paths");
            command.arg(allow_paths);
        }

        let input_json = serde_json::to_vec(input)
            .map_err(|error| anyhow::anyhow!("{executable} input serialization error: {error}"))?;

        let mut process = command.spawn().map_err(|error| self.spawn_error(error))?;
        let write_result = match process.stdin.take() {
            Some(mut stdin) => stdin.write_all(input_json.as_slice()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdin is not captured",
            )),
        };

        // The process may exit before reading the whole input, so its stderr is checked first.
        let output = process
            .wait_with_output()
            .map_err(|error| anyhow::anyhow!("{executable} subprocess output error: {error:?}"))?;
        if !output.status.success() {
            anyhow::bail!(
                "{executable} error: {}",
                String::from_utf8_lossy(output.stderr.as_slice())
            );
        }
        write_result
            .map_err(|error| anyhow::anyhow!("{executable} stdin writing error: {error:?}"))?;

        serde_json::from_slice(output.stdout.as_slice()).map_err(|error| {
            anyhow::anyhow!(
                "{executable} subprocess output parsing error: {error}\n{}",
                serde_json::from_slice::<serde_json::Value>(output.stdout.as_slice())
                    .ok()
                    .and_then(|json| serde_json::to_string_pretty(&json).ok())
                    .unwrap_or_else(|| String::from_utf8_lossy(output.stdout.as_slice()).to_string()),
            )
        })
    }
}
