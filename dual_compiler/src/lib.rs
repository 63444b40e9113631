//!
//! The dual-backend Solidity compilation orchestrator library.
//!

#[cfg(test)]
mod tests;

pub(crate) mod backend;
pub(crate) mod config;
pub(crate) mod reconciler;
pub(crate) mod splitter;
pub(crate) mod standard_json;

pub use self::backend::error::Error as BackendError;
pub use self::backend::rewrite_missing_secondary;
pub use self::backend::solc::Solc;
pub use self::backend::Backend;
pub use self::config::diagnostics::Diagnostics;
pub use self::config::policy::Policy;
pub use self::config::selection::Selection;
pub use self::config::Config;
pub use self::reconciler::reconcile;
pub use self::splitter::split;
pub use self::splitter::Split;
pub use self::standard_json::input::language::Language;
pub use self::standard_json::input::source::Source as InputSource;
pub use self::standard_json::input::Input;
pub use self::standard_json::output::contract::evm::bytecode::link_reference::LinkReference;
pub use self::standard_json::output::contract::evm::bytecode::link_reference::LinkReferences;
pub use self::standard_json::output::contract::evm::bytecode::Bytecode;
pub use self::standard_json::output::contract::evm::EVM;
pub use self::standard_json::output::contract::Contract;
pub use self::standard_json::output::error::severity::Severity;
pub use self::standard_json::output::error::source_location::SourceLocation;
pub use self::standard_json::output::error::Error as OutputError;
pub use self::standard_json::output::source::Source as OutputSource;
pub use self::standard_json::output::Output;

use std::sync::Arc;

use colored::Colorize;

///
/// The backend invocation, tagging the results arriving from the worker threads.
///
#[derive(Debug, Clone, Copy)]
enum Invocation {
    /// The primary backend invocation.
    Primary,
    /// The secondary backend invocation.
    Secondary,
}

///
/// The dual-backend compiler.
///
/// Every input is split between the primary and secondary backends, and their outputs are
/// reconciled into a single output in the primary backend format.
///
pub struct DualCompiler {
    /// The primary backend, receiving all sources.
    primary: Arc<dyn Backend>,
    /// The secondary backend, receiving the sources selected by markers.
    secondary: Arc<dyn Backend>,
    /// The orchestrator configuration.
    config: Config,
}

impl DualCompiler {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(primary: Arc<dyn Backend>, secondary: Arc<dyn Backend>, config: Config) -> Self {
        Self {
            primary,
            secondary,
            config,
        }
    }

    ///
    /// Returns the orchestrator configuration.
    ///
    pub fn config(&self) -> &Config {
        &self.config
    }

    ///
    /// Compiles the input with both backends and reconciles the outputs.
    ///
    /// The first fatal backend error is returned as soon as it occurs, and the result of the
    /// other backend is ignored. The secondary missing executable error is rewritten into an
    /// actionable one.
    ///
    pub fn compile(&self, input: &Input) -> anyhow::Result<Output> {
        let split = splitter::split(input, &self.config);

        self.log_compiling(self.primary.name(), split.primary.sources.len());
        self.log_compiling(self.secondary.name(), split.secondary.sources.len());

        let (primary, secondary) = if self.config.parallel {
            self.invoke_parallel(split)?
        } else {
            let primary = self.primary.standard_json(&split.primary)?;
            let secondary =
                backend::rewrite_missing_secondary(self.secondary.standard_json(&split.secondary))?;
            (primary, secondary)
        };

        let output = reconciler::reconcile(primary, secondary, input, &self.config);

        if !self.config.quiet {
            eprintln!(
                "    {} {} contracts with {} diagnostics",
                "Finished".bright_green().bold(),
                output.contracts_count(),
                output.errors.len(),
            );
        }

        Ok(output)
    }

    ///
    /// Runs both backends on their own threads and collects the outputs.
    ///
    /// Returns on the first error without waiting for the other backend, whose thread is
    /// detached and its result discarded.
    ///
    fn invoke_parallel(&self, split: Split) -> anyhow::Result<(Output, Output)> {
        let (sender, receiver) = std::sync::mpsc::channel();
        for (kind, backend, input) in [
            (Invocation::Primary, self.primary.clone(), split.primary),
            (Invocation::Secondary, self.secondary.clone(), split.secondary),
        ] {
            let sender = sender.clone();
            let name = backend.name().to_owned();
            std::thread::Builder::new()
                .name(format!("{name}-backend"))
                .spawn(move || {
                    let _ = sender.send((kind, backend.standard_json(&input)));
                })
                .map_err(|error| anyhow::anyhow!("{name} backend thread spawning error: {error}"))?;
        }
        drop(sender);

        let mut primary = None;
        let mut secondary = None;
        loop {
            match (primary.take(), secondary.take()) {
                (Some(primary), Some(secondary)) => return Ok((primary, secondary)),
                (primary_output, secondary_output) => {
                    primary = primary_output;
                    secondary = secondary_output;
                }
            }

            let (kind, result) = receiver
                .recv()
                .map_err(|_| anyhow::anyhow!("A backend thread terminated without a result"))?;
            match kind {
                Invocation::Primary => primary = Some(result?),
                Invocation::Secondary => {
                    secondary = Some(backend::rewrite_missing_secondary(result)?)
                }
            }
        }
    }

    ///
    /// Prints the backend compilation status.
    ///
    fn log_compiling(&self, backend: &str, files: usize) {
        if self.config.quiet {
            return;
        }
        eprintln!(
            "   {} {} files with {}",
            "Compiling".bright_green().bold(),
            files,
            backend,
        );
    }
}
