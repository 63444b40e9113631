//!
//! The dual compiler executable.
//!

pub(crate) mod arguments;

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The successful exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let config = arguments.config()?;
    if !config.quiet {
        eprintln!(
            "    {} {} v{} ({} policy, tag `{}`)",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
            config.policy,
            config.tag,
        );
    }

    let input = match arguments.input {
        Some(ref path) => dual_compiler::Input::try_from_path(path.as_path())?,
        None => dual_compiler::Input::try_from_stdin()?,
    };

    let primary = dual_compiler::Solc::new("primary", arguments.solc.as_str())?.with_paths(
        arguments.base_path.clone(),
        arguments.include_path.clone(),
        arguments.allow_paths.clone(),
    );
    let secondary = secondary_solc(&arguments, &config)?;
    if !config.quiet {
        match secondary.version() {
            Ok(version) => eprintln!(
                "       {} {} compiler v{version}",
                "Using".bright_green().bold(),
                config.tag,
            ),
            Err(error) => eprintln!(
                "     {} {} compiler version unknown: {error}",
                "Warning".bright_yellow().bold(),
                config.tag,
            ),
        }
    }

    let compiler = dual_compiler::DualCompiler::new(Arc::new(primary), Arc::new(secondary), config);
    let output = compiler.compile(&input)?;

    let json = if arguments.pretty {
        serde_json::to_vec_pretty(&output)?
    } else {
        serde_json::to_vec(&output)?
    };
    match arguments.output {
        Some(ref path) => std::fs::write(path, json.as_slice())
            .map_err(|error| anyhow::anyhow!("Output file {path:?} writing error: {error}"))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_slice())?;
            stdout.write_all(b"\n")?;
        }
    }

    if output.has_errors() && !arguments.allow_errors {
        anyhow::bail!("Compilation failed with errors");
    }

    Ok(())
}

///
/// Resolves the secondary `solc` executable.
///
fn secondary_solc(
    arguments: &Arguments,
    config: &dual_compiler::Config,
) -> anyhow::Result<dual_compiler::Solc> {
    let solc = dual_compiler::rewrite_missing_secondary(dual_compiler::Solc::new(
        config.tag.as_str(),
        arguments.secondary_solc.as_str(),
    ))
    .map_err(|error| anyhow::anyhow!("{error} Its path can be passed via `--secondary-solc`."))?;
    Ok(solc.with_paths(
        arguments.base_path.clone(),
        arguments.include_path.clone(),
        arguments.allow_paths.clone(),
    ))
}
