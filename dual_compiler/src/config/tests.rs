//!
//! The orchestrator configuration tests.
//!

use std::str::FromStr;

use super::diagnostics::Diagnostics;
use super::policy::Policy;
use super::selection::Selection;
use super::Config;

#[test]
fn default() {
    let config = Config::default();
    assert_eq!(config.policy, Policy::OptOut);
    assert_eq!(config.selection, Selection::Marked);
    assert_eq!(config.diagnostics, Diagnostics::Annotate);
    assert_eq!(config.marker(), "// @unsupported: ovm");
    assert_eq!(config.suffix(), ".ovm");
    assert!(config.parallel);
}

#[test]
fn marker_opt_in() {
    let config = Config::new(Policy::OptIn, "secondary");
    assert_eq!(config.marker(), "// @supports: secondary");
    assert_eq!(config.suffix(), ".secondary");
}

#[test]
fn parse_from_json_partial() {
    let config: Config = serde_json::from_value(serde_json::json!({
        "policy": "opt-in",
        "diagnostics": "demote",
        "tag": "secondary",
    }))
    .expect("Always valid");
    assert_eq!(config.policy, Policy::OptIn);
    assert_eq!(config.selection, Selection::Marked);
    assert_eq!(config.diagnostics, Diagnostics::Demote);
    assert_eq!(config.tag, "secondary");
    assert!(config.parallel);
}

#[test]
fn enums_from_str() {
    assert_eq!(Policy::from_str("opt-out").expect("Always valid"), Policy::OptOut);
    assert_eq!(Selection::from_str("all").expect("Always valid"), Selection::All);
    assert_eq!(
        Diagnostics::from_str("annotate").expect("Always valid"),
        Diagnostics::Annotate
    );
    assert!(Policy::from_str("opt-sideways").is_err());
}

#[test]
fn error_empty_tag() {
    let config = Config::new(Policy::OptOut, "");
    assert!(config.validate().is_err());
}

#[test]
fn error_tag_with_whitespace() {
    let config = Config::new(Policy::OptOut, "o v m");
    assert!(config.validate().is_err());
}
