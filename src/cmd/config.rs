// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `inis` commands.

use crate::config::Config;

/// Shown by `inis` when neither a file nor the environment layer is in use.
pub const NO_SOURCES: &str = "No configuration sources; built-in defaults only";

/// Resolved options, one `key = value` line each.
#[must_use]
pub fn format_options_listing(config: &Config) -> Vec<String> {
    config.format_options()
}

/// Configuration sources in load order, or [`NO_SOURCES`].
#[must_use]
pub fn format_inis_listing(sources: &[String]) -> Vec<String> {
    if sources.is_empty() {
        vec![NO_SOURCES.to_string()]
    } else {
        sources.to_vec()
    }
}

pub fn run_options_command(config: &Config) {
    print_lines(&format_options_listing(config));
}

pub fn run_inis_command(sources: &[String]) {
    print_lines(&format_inis_listing(sources));
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
