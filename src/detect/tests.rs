// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the detector.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::Serialize;

use super::{
    DEFAULT_IGNORED_NAMES, DEFAULT_IGNORED_PREFIXES, IgnorePolicy, KeySet, NoReport, WriterReport,
    defined_keys_of, detect_unused, find_unused, format_report, keys_from_json_str,
};
use crate::env::EnvSnapshot;
use crate::error::KeysError;

fn env(names: &[&str]) -> EnvSnapshot {
    names.iter().map(|n| (*n, "value")).collect()
}

/// Runs `detect_unused` and collects every report message.
fn detect_collecting(
    defined: &[&str],
    env: &EnvSnapshot,
    policy: &IgnorePolicy,
) -> (Vec<String>, Vec<String>) {
    let mut messages = Vec::new();
    let mut sink = |m: &str| messages.push(m.to_string());
    let unused = detect_unused(defined, env, policy, &mut sink);
    (unused, messages)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_all_defined_yields_nothing() {
    let (unused, messages) =
        detect_collecting(&["FOO", "BAZ"], &env(&["FOO", "BAZ"]), &IgnorePolicy::default());
    assert!(unused.is_empty());
    assert!(messages.is_empty());
}

#[test]
fn test_single_unused_with_empty_policy() {
    let (unused, _) = detect_collecting(
        &["FOO"],
        &env(&["FOO", "UNUSED_VAR"]),
        &IgnorePolicy::empty(),
    );
    assert_eq!(unused, ["UNUSED_VAR"]);
}

#[test]
fn test_report_message_for_two_unused() {
    let (unused, messages) = detect_collecting(
        &["FOO"],
        &env(&["FOO", "UNUSED1", "UNUSED2"]),
        &IgnorePolicy::empty(),
    );
    assert_eq!(unused, ["UNUSED1", "UNUSED2"]);
    assert_eq!(messages.len(), 1);
    insta::assert_snapshot!(
        &messages[0],
        @"[envalid-unused] Found 2 unused environment variable(s): UNUSED1, UNUSED2"
    );
}

#[test]
fn test_default_names_exclude_shell() {
    let (unused, _) = detect_collecting(
        &["FOO"],
        &env(&["FOO", "SHELL", "CUSTOM_VAR"]),
        &IgnorePolicy::default(),
    );
    assert_eq!(unused, ["CUSTOM_VAR"]);
}

#[test]
fn test_default_prefixes_exclude_npm() {
    let (unused, _) = detect_collecting(
        &["FOO"],
        &env(&["FOO", "npm_config_test", "CUSTOM_VAR"]),
        &IgnorePolicy::default(),
    );
    assert_eq!(unused, ["CUSTOM_VAR"]);
}

#[test]
fn test_builder_replaces_only_the_given_list() {
    let policy = IgnorePolicy::builder()
        .with_ignore_names(Vec::new())
        .build();
    let (unused, _) = detect_collecting(
        &[],
        &env(&["SHELL", "npm_config_cache", "LC_ALL"]),
        &policy,
    );
    assert_eq!(unused, ["SHELL"], "prefixes stay defaulted");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_result_preserves_snapshot_order() {
    let snapshot = env(&["ZED", "FOO", "ALPHA", "MIDDLE"]);
    let unused = find_unused(&["FOO"], &snapshot, &IgnorePolicy::empty());
    assert_eq!(unused, ["ZED", "ALPHA", "MIDDLE"]);
}

#[test]
fn test_result_excludes_defined_and_ignored() {
    let snapshot = env(&[
        "APP_PORT", "APP_HOST", "SHELL", "XDG_RUNTIME_DIR", "STRAY", "LC_CTYPE", "OTHER",
    ]);
    let defined = ["APP_PORT", "APP_HOST"];
    let policy = IgnorePolicy::default();
    let unused = find_unused(&defined, &snapshot, &policy);

    assert_eq!(unused, ["STRAY", "OTHER"]);
    for name in &unused {
        assert!(snapshot.contains(name));
        assert!(!defined.contains_key(name));
        assert!(!policy.ignores_name(name));
        assert!(!policy.ignores_prefix(name));
    }
}

#[test]
fn test_detection_is_idempotent() {
    let snapshot = env(&["A", "B", "C", "SHLVL"]);
    let policy = IgnorePolicy::default();
    let first = find_unused(&["B"], &snapshot, &policy);
    let second = find_unused(&["B"], &snapshot, &policy);
    assert_eq!(first, second);
    assert_eq!(first, ["A", "C"]);
}

#[test]
fn test_defining_a_name_removes_exactly_that_name() {
    let snapshot = env(&["ONE", "TWO", "THREE"]);
    let policy = IgnorePolicy::empty();
    let before = find_unused(&["ONE"], &snapshot, &policy);
    let after = find_unused(&["ONE", "TWO"], &snapshot, &policy);
    assert_eq!(before, ["TWO", "THREE"]);
    assert_eq!(after, ["THREE"]);
}

#[test]
fn test_ignoring_removes_all_matches() {
    let snapshot = env(&["CI", "GITHUB_SHA", "GITHUB_REF", "KEEP"]);
    let defined: [&str; 0] = [];

    let by_name = IgnorePolicy::empty().with_names(["CI"]);
    assert_eq!(
        find_unused(&defined, &snapshot, &by_name),
        ["GITHUB_SHA", "GITHUB_REF", "KEEP"]
    );

    let by_prefix = by_name.with_prefixes(["GITHUB_"]);
    assert_eq!(find_unused(&defined, &snapshot, &by_prefix), ["KEEP"]);
}

#[test]
fn test_matching_is_case_sensitive() {
    let snapshot = env(&["shell", "Npm_token", "foo"]);
    let unused = find_unused(&["FOO"], &snapshot, &IgnorePolicy::default());
    assert_eq!(unused, ["shell", "Npm_token", "foo"]);
}

#[test]
fn test_empty_inputs() {
    let empty: [&str; 0] = [];
    assert!(find_unused(&empty, &EnvSnapshot::new(), &IgnorePolicy::default()).is_empty());
    assert_eq!(
        find_unused(&empty, &env(&["X"]), &IgnorePolicy::empty()),
        ["X"]
    );
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn test_report_called_once_per_non_empty_result() {
    let mut calls = 0;
    let mut counter = |_: &str| calls += 1;
    detect_unused(&["A"], &env(&["A", "B", "C"]), &IgnorePolicy::empty(), &mut counter);
    detect_unused(&["A"], &env(&["A"]), &IgnorePolicy::empty(), &mut counter);
    assert_eq!(calls, 1);
}

#[test]
fn test_writer_report_writes_one_line() {
    let mut sink = WriterReport::new(Vec::new());
    let unused = detect_unused(
        &BTreeSet::<String>::new(),
        &env(&["LONELY"]),
        &IgnorePolicy::empty(),
        &mut sink,
    );
    assert_eq!(unused, ["LONELY"]);
    let written = String::from_utf8(sink.into_inner()).unwrap();
    insta::assert_snapshot!(
        written.trim_end(),
        @"[envalid-unused] Found 1 unused environment variable(s): LONELY"
    );
    assert!(written.ends_with('\n'));
}

#[test]
fn test_no_report_still_returns_result() {
    let unused = detect_unused(&["A"], &env(&["A", "B"]), &IgnorePolicy::empty(), &mut NoReport);
    assert_eq!(unused, ["B"]);
}

#[test]
fn test_format_report_joins_in_order() {
    let names = vec!["Z".to_string(), "A".to_string(), "M".to_string()];
    insta::assert_snapshot!(
        format_report(&names),
        @"[envalid-unused] Found 3 unused environment variable(s): Z, A, M"
    );
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_default_prefixes_end_with_underscore() {
    for prefix in DEFAULT_IGNORED_PREFIXES {
        assert!(prefix.ends_with('_'), "{prefix} should end with '_'");
    }
}

#[test]
fn test_default_names_only_sentinel_ends_with_underscore() {
    let underscored: Vec<_> = DEFAULT_IGNORED_NAMES
        .iter()
        .filter(|n| n.ends_with('_'))
        .collect();
    assert_eq!(underscored, [&"_"]);
}

#[test]
fn test_default_policy_mirrors_constants() {
    let policy = IgnorePolicy::default();
    assert_eq!(policy.names(), DEFAULT_IGNORED_NAMES);
    assert_eq!(policy.prefixes(), DEFAULT_IGNORED_PREFIXES);
}

// =============================================================================
// Key sets
// =============================================================================

#[test]
fn test_key_set_implementations_agree() {
    let snapshot = env(&["A", "B", "C"]);
    let policy = IgnorePolicy::empty();

    let hash_set: HashSet<String> = HashSet::from(["A".to_string()]);
    let btree_set: BTreeSet<String> = BTreeSet::from(["A".to_string()]);
    let hash_map: HashMap<String, u16> = HashMap::from([("A".to_string(), 8080)]);
    let btree_map: BTreeMap<String, bool> = BTreeMap::from([("A".to_string(), true)]);
    let owned: Vec<String> = vec!["A".to_string()];

    let expected = ["B", "C"];
    assert_eq!(find_unused(&hash_set, &snapshot, &policy), expected);
    assert_eq!(find_unused(&btree_set, &snapshot, &policy), expected);
    assert_eq!(find_unused(&hash_map, &snapshot, &policy), expected);
    assert_eq!(find_unused(&btree_map, &snapshot, &policy), expected);
    assert_eq!(find_unused(&owned, &snapshot, &policy), expected);
    assert_eq!(find_unused(&["A"], &snapshot, &policy), expected);
}

#[derive(Serialize)]
#[allow(non_snake_case)]
struct AppSettings {
    DATABASE_URL: String,
    PORT: u16,
    DEBUG: Option<bool>,
}

#[test]
fn test_defined_keys_of_struct() {
    let settings = AppSettings {
        DATABASE_URL: "postgres://localhost/app".to_string(),
        PORT: 8080,
        DEBUG: None,
    };
    let keys = defined_keys_of(&settings).unwrap();
    let keys: Vec<_> = keys.iter().map(String::as_str).collect();
    assert_eq!(keys, ["DATABASE_URL", "DEBUG", "PORT"]);

    let snapshot = env(&["PORT", "DEBUG", "DATABASE_URL", "LEFTOVER"]);
    let unused = find_unused(&defined_keys_of(&settings).unwrap(), &snapshot, &IgnorePolicy::empty());
    assert_eq!(unused, ["LEFTOVER"]);
}

#[test]
fn test_defined_keys_of_rejects_non_objects() {
    let err = defined_keys_of(&vec!["PORT"]).unwrap_err();
    assert!(matches!(err, KeysError::NotAnObject { kind: "array" }));

    let err = defined_keys_of(&42).unwrap_err();
    assert!(matches!(err, KeysError::NotAnObject { kind: "number" }));
}

#[test]
fn test_keys_from_json_str() {
    let keys = keys_from_json_str(r#"{"PORT": 8080, "HOST": "0.0.0.0"}"#, "<inline>").unwrap();
    assert!(keys.contains_key("PORT"));
    assert!(keys.contains_key("HOST"));
    assert_eq!(keys.len(), 2);

    let err = keys_from_json_str("[1, 2]", "<inline>").unwrap_err();
    assert!(matches!(err, KeysError::NotAnObject { kind: "array" }));

    let err = keys_from_json_str("{not json", "<inline>").unwrap_err();
    assert!(err.to_string().starts_with("failed to parse JSON from '<inline>'"));
}
