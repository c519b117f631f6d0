// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations on disk.

use std::collections::HashMap;

use envalid_unused::config::types::ReportTarget;
use envalid_unused::config::{Config, ENV_PREFIX};
use envalid_unused::env::EnvSnapshot;
use envalid_unused::detect::find_unused;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_file_layers() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("envalid-unused.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(
        &base,
        r#"
[global]
output_log_level = 3

[detect]
defined = ["PORT"]
report = "log"
"#,
    )
    .unwrap();
    std::fs::write(&local, "[detect]\ndefined = [\"PORT\", \"HOST\"]\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert_eq!(config.global.output_log_level.as_u8(), 3);
    assert_eq!(config.detect.defined, ["PORT", "HOST"]);
    assert_eq!(config.detect.report, ReportTarget::Log);
}

#[test]
fn config_env_vars_win_over_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("envalid-unused.toml");
    std::fs::write(&path, "[detect]\nfail_on_unused = false\n").unwrap();

    let vars: HashMap<String, String> = [
        ("ENVALID_UNUSED_DETECT__FAIL_ON_UNUSED", "true"),
        ("ENVALID_UNUSED_DETECT__IGNORE_PREFIXES", "GITHUB_,RUNNER_"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = Config::builder()
        .add_toml_file(&path)
        .with_env_prefix(ENV_PREFIX)
        .with_env_vars(vars)
        .build()
        .unwrap();

    assert!(config.detect.fail_on_unused);
    assert_eq!(config.detect.ignore_prefixes, ["GITHUB_", "RUNNER_"]);
}

#[test]
fn config_policy_drives_detection() {
    let config = Config::parse(
        r#"
[detect]
defaults = false
defined = ["PORT"]
ignore_names = ["HOME"]
"#,
    )
    .unwrap();

    let env = EnvSnapshot::from_pairs([("PORT", "1"), ("HOME", "/root"), ("SHELL", "/bin/sh")]);
    let unused = find_unused(&config.detect.defined, &env, &config.detect.policy());
    assert_eq!(unused, ["SHELL"]);
}

#[test]
fn config_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().starts_with("config file not found"));
}
