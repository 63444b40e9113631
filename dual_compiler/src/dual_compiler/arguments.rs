//!
//! The dual compiler arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The dual compiler arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The standard JSON input file.
    /// Is read from stdin by default.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// The merged standard JSON output file.
    /// Is written to stdout by default.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-prints the output JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Path to the primary `solc` executable.
    #[arg(long, default_value = "solc")]
    pub solc: String,

    /// Path to the secondary `solc` executable.
    #[arg(long, default_value = "solc-ovm")]
    pub secondary_solc: String,

    /// Path to the JSON configuration file.
    /// The command line options below override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The marker policy: `opt-out` or `opt-in`.
    #[arg(long)]
    pub policy: Option<dual_compiler::Policy>,

    /// The secondary backend tag used in markers and artifact name suffixes.
    #[arg(long)]
    pub tag: Option<String>,

    /// Compiles all files with the secondary backend regardless of markers.
    #[arg(long)]
    pub all: bool,

    /// Demotes the secondary backend errors in unwanted files to warnings.
    #[arg(long)]
    pub demote: bool,

    /// Runs the backends one after another.
    #[arg(long)]
    pub sequential: bool,

    /// Exits successfully even if the merged output contains errors.
    #[arg(long)]
    pub allow_errors: bool,

    /// The `solc` base path.
    #[arg(long)]
    pub base_path: Option<String>,

    /// The `solc` include paths.
    #[arg(long)]
    pub include_path: Vec<String>,

    /// The `solc` allow paths.
    #[arg(long)]
    pub allow_paths: Option<String>,
}

impl Arguments {
    ///
    /// Builds the configuration from the file and command line overrides.
    ///
    pub fn config(&self) -> anyhow::Result<dual_compiler::Config> {
        let mut config = match self.config {
            Some(ref path) => dual_compiler::Config::try_from_path(path.as_path())?,
            None => dual_compiler::Config::default(),
        };
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(ref tag) = self.tag {
            config.tag = tag.to_owned();
        }
        if self.all {
            config.selection = dual_compiler::Selection::All;
        }
        if self.demote {
            config.diagnostics = dual_compiler::Diagnostics::Demote;
        }
        if self.sequential {
            config.parallel = false;
        }
        if self.quiet {
            config.quiet = true;
        }
        config.validate()
    }
}
