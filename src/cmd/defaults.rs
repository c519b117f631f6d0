// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Defaults command implementation.

use crate::detect::{DEFAULT_IGNORED_NAMES, DEFAULT_IGNORED_PREFIXES};

/// Renders the built-in ignore lists, names first.
#[must_use]
pub fn format_defaults() -> Vec<String> {
    let mut lines = vec!["names:".to_string()];
    lines.extend(DEFAULT_IGNORED_NAMES.iter().map(|n| format!("  {n}")));
    lines.push("prefixes:".to_string());
    lines.extend(DEFAULT_IGNORED_PREFIXES.iter().map(|p| format!("  {p}*")));
    lines
}

/// Main handler for the defaults command.
pub fn run_defaults_command() {
    for line in format_defaults() {
        println!("{line}");
    }
}
