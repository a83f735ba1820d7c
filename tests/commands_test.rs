//! Integration tests for command helpers

use mlb_props::{commands::resolve_output_dir, OUTPUT_DIR_ENV_VAR};
use std::path::PathBuf;

#[test]
fn test_resolve_output_dir_precedence() {
    // Flag wins over env var
    std::env::set_var(OUTPUT_DIR_ENV_VAR, "/tmp/from-env");
    let dir = resolve_output_dir(Some(PathBuf::from("/tmp/from-flag")));
    assert_eq!(dir, PathBuf::from("/tmp/from-flag"));

    // Env var wins over the default
    let dir = resolve_output_dir(None);
    assert_eq!(dir, PathBuf::from("/tmp/from-env"));

    // Neither: current directory
    std::env::remove_var(OUTPUT_DIR_ENV_VAR);
    let dir = resolve_output_dir(None);
    assert_eq!(dir, PathBuf::from("."));
}
