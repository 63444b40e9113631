//!
//! The dual-backend compiler tests.
//!

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

use crate::Backend;
use crate::BackendError;
use crate::Config;
use crate::DualCompiler;
use crate::Input;
use crate::Output;
use crate::OutputError;
use crate::Policy;

///
/// The in-memory backend recording its inputs.
///
struct MockBackend {
    /// The backend name.
    name: &'static str,
    /// Produces the output for the received input.
    compile: Box<dyn Fn(&Input) -> anyhow::Result<Output> + Send + Sync>,
    /// The received source paths.
    received: Mutex<Vec<Vec<String>>>,
}

impl MockBackend {
    fn new<F>(name: &'static str, compile: F) -> Arc<Self>
    where
        F: Fn(&Input) -> anyhow::Result<Output> + Send + Sync + 'static,
    {
        Arc::new(Self {
            name,
            compile: Box::new(compile),
            received: Mutex::new(Vec::new()),
        })
    }

    fn received(&self) -> Vec<Vec<String>> {
        self.received.lock().expect("Sync").clone()
    }
}

impl Backend for MockBackend {
    fn name(&self) -> &str {
        self.name
    }

    fn standard_json(&self, input: &Input) -> anyhow::Result<Output> {
        self.received
            .lock()
            .expect("Sync")
            .push(input.sources.keys().cloned().collect());
        (self.compile)(input)
    }
}

///
/// Emulates `solc`: one contract per file named after the file, linking `Lib` from `L.sol`.
///
fn compile_trivially(input: &Input) -> anyhow::Result<Output> {
    if input.sources.is_empty() {
        return Ok(Output {
            errors: vec![OutputError::new_no_input_sources()],
            ..Output::default()
        });
    }

    let mut contracts = serde_json::Map::new();
    let mut sources = serde_json::Map::new();
    for (id, path) in input.sources.keys().enumerate() {
        let name = path.trim_end_matches(".sol");
        let mut file = serde_json::Map::new();
        file.insert(
            name.to_owned(),
            serde_json::json!({
                "evm": {
                    "bytecode": {
                        "object": "73__$lib$__",
                        "linkReferences": {
                            "L.sol": { "Lib": [{ "start": 1, "length": 20 }] },
                        },
                    },
                },
            }),
        );
        contracts.insert(path.to_owned(), serde_json::Value::Object(file));
        sources.insert(path.to_owned(), serde_json::json!({ "id": id }));
    }
    let output = serde_json::from_value(serde_json::json!({
        "contracts": contracts,
        "sources": sources,
    }))?;
    Ok(output)
}

fn input() -> Input {
    let mut sources = BTreeMap::new();
    sources.insert(
        "A.sol".to_owned(),
        "pragma solidity ^0.7.6;\n// @unsupported: secondary\ncontract A {}".to_owned(),
    );
    sources.insert("B.sol".to_owned(), "contract B {}".to_owned());
    Input::from_sources(sources, serde_json::json!({}))
}

fn config(policy: Policy) -> Config {
    let mut config = Config::new(policy, "secondary");
    config.quiet = true;
    config
}

#[test]
fn end_to_end_opt_out() {
    let primary = MockBackend::new("primary", compile_trivially);
    let secondary = MockBackend::new("secondary", compile_trivially);
    let compiler = DualCompiler::new(
        primary.clone(),
        secondary.clone(),
        config(Policy::OptOut),
    );

    let output = compiler.compile(&input()).expect("Always valid");

    assert_eq!(primary.received(), vec![vec!["A.sol", "B.sol"]]);
    assert_eq!(secondary.received(), vec![vec!["B.sol"]]);
    assert!(output.errors.is_empty());

    let a: Vec<&str> = output.contracts["A.sol"].keys().map(String::as_str).collect();
    assert_eq!(a, vec!["A"]);
    let b: Vec<&str> = output.contracts["B.sol"].keys().map(String::as_str).collect();
    assert_eq!(b, vec!["B", "B.secondary"]);

    let primary_link_references = output.contracts["B.sol"]["B"]
        .bytecode()
        .and_then(|bytecode| bytecode.link_references.as_ref())
        .expect("Always exists");
    assert!(primary_link_references["L.sol"].contains_key("Lib"));
    let secondary_link_references = output.contracts["B.sol"]["B.secondary"]
        .bytecode()
        .and_then(|bytecode| bytecode.link_references.as_ref())
        .expect("Always exists");
    assert!(secondary_link_references["L.sol"].contains_key("Lib.secondary"));
    assert!(!secondary_link_references["L.sol"].contains_key("Lib"));

    assert_eq!(output.sources["A.sol"].id, 0);
    assert_eq!(output.sources["B.sol"].id, 1);
}

#[test]
fn empty_secondary_partition_suppresses_boilerplate() {
    let primary = MockBackend::new("primary", compile_trivially);
    let secondary = MockBackend::new("secondary", compile_trivially);
    let compiler = DualCompiler::new(primary, secondary.clone(), config(Policy::OptIn));

    let output = compiler.compile(&input()).expect("Always valid");

    assert_eq!(secondary.received(), vec![Vec::<String>::new()]);
    assert!(output.errors.is_empty());
    assert_eq!(output.contracts_count(), 2);
}

#[test]
fn empty_input_keeps_both_boilerplate_errors() {
    let primary = MockBackend::new("primary", compile_trivially);
    let secondary = MockBackend::new("secondary", compile_trivially);
    let compiler = DualCompiler::new(primary, secondary, config(Policy::OptOut));
    let input = Input::from_sources(BTreeMap::new(), serde_json::json!({}));

    let output = compiler.compile(&input).expect("Always valid");

    assert_eq!(output.errors.len(), 2);
    assert!(output.errors.iter().all(OutputError::is_no_input_sources));
    assert!(output.has_errors());
}

#[test]
fn sequential_matches_parallel() {
    let mut sequential = config(Policy::OptOut);
    sequential.parallel = false;
    let parallel = config(Policy::OptOut);

    let outputs: Vec<Output> = [sequential, parallel]
        .into_iter()
        .map(|config| {
            DualCompiler::new(
                MockBackend::new("primary", compile_trivially),
                MockBackend::new("secondary", compile_trivially),
                config,
            )
            .compile(&input())
            .expect("Always valid")
        })
        .collect();

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn primary_failure_propagated_verbatim() {
    let primary = MockBackend::new("primary", |_| anyhow::bail!("solc error: segmentation fault"));
    let secondary = MockBackend::new("secondary", compile_trivially);
    let compiler = DualCompiler::new(primary, secondary, config(Policy::OptOut));

    let error = compiler.compile(&input()).expect_err("Must fail");

    assert_eq!(error.to_string(), "solc error: segmentation fault");
}

#[test]
fn secondary_failure_propagated_verbatim() {
    for parallel in [true, false] {
        let primary = MockBackend::new("primary", compile_trivially);
        let secondary = MockBackend::new("secondary", |_| anyhow::bail!("soljson exploded"));
        let mut config = config(Policy::OptOut);
        config.parallel = parallel;
        let compiler = DualCompiler::new(primary, secondary, config);

        let error = compiler.compile(&input()).expect_err("Must fail");

        assert_eq!(error.to_string(), "soljson exploded");
    }
}

#[test]
fn secondary_missing_executable_rewritten() {
    let primary = MockBackend::new("primary", compile_trivially);
    let secondary = MockBackend::new("secondary", |_| {
        Err(BackendError::ExecutableNotFound {
            executable: "solc-ovm".to_owned(),
            reason: "No such file or directory".to_owned(),
        }
        .into())
    });
    let compiler = DualCompiler::new(primary, secondary, config(Policy::OptOut));

    let error = compiler.compile(&input()).expect_err("Must fail");

    assert_eq!(
        error.to_string(),
        "Could not find the secondary compiler `solc-ovm`. Install it to compile the sources selected for the secondary backend."
    );
}

#[test]
fn primary_missing_executable_not_rewritten() {
    let primary = MockBackend::new("primary", |_| {
        Err(BackendError::ExecutableNotFound {
            executable: "solc".to_owned(),
            reason: "No such file or directory".to_owned(),
        }
        .into())
    });
    let secondary = MockBackend::new("secondary", compile_trivially);
    let compiler = DualCompiler::new(primary, secondary, config(Policy::OptOut));

    let error = compiler.compile(&input()).expect_err("Must fail");

    assert_eq!(
        error.to_string(),
        "The `solc` executable not found: No such file or directory"
    );
}

#[test]
fn secondary_failure_does_not_wait_for_slow_primary() {
    let primary = MockBackend::new("primary", |input| {
        std::thread::sleep(Duration::from_secs(3));
        compile_trivially(input)
    });
    let secondary = MockBackend::new("secondary", |_| anyhow::bail!("soljson exploded"));
    let compiler = DualCompiler::new(primary, secondary, config(Policy::OptOut));

    let start = Instant::now();
    let error = compiler.compile(&input()).expect_err("Must fail");

    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(error.to_string(), "soljson exploded");
}

#[test]
fn first_failure_wins_when_both_fail() {
    let primary = MockBackend::new("primary", |_| {
        std::thread::sleep(Duration::from_millis(500));
        anyhow::bail!("solc error: segmentation fault")
    });
    let secondary = MockBackend::new("secondary", |_| anyhow::bail!("soljson exploded"));
    let compiler = DualCompiler::new(primary, secondary, config(Policy::OptOut));

    let error = compiler.compile(&input()).expect_err("Must fail");

    assert_eq!(error.to_string(), "soljson exploded");
}
