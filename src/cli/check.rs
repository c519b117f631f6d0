// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command arguments.
//!
//! # Flag Effects
//!
//! ```text
//! --defined / --ignore / --ignore-prefix  extend the configured lists
//! --no-default-ignores                    detect.defaults = false
//! --report none                           nothing on stderr, names still on stdout
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

use crate::config::types::ReportTarget;

/// How the unused names are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One name per line.
    #[default]
    Text,
    /// A JSON array of names.
    Json,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// A name the application schema defines. Can be repeated.
    #[arg(short = 'D', long = "defined", value_name = "NAME", action = ArgAction::Append)]
    pub defined: Vec<String>,

    /// JSON file whose top-level object keys are defined names. Can be repeated.
    #[arg(long = "defined-from", value_name = "FILE", action = ArgAction::Append)]
    pub defined_from: Vec<PathBuf>,

    /// An exact name to ignore. Can be repeated.
    #[arg(short = 'I', long = "ignore", value_name = "NAME", action = ArgAction::Append)]
    pub ignore_names: Vec<String>,

    /// A prefix to ignore. Can be repeated.
    #[arg(short = 'P', long = "ignore-prefix", value_name = "PREFIX", action = ArgAction::Append)]
    pub ignore_prefixes: Vec<String>,

    /// Don't start from the built-in ignore lists.
    #[arg(long = "no-default-ignores")]
    pub no_default_ignores: bool,

    /// Output format for the list of names.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Where the summary line goes.
    #[arg(long, value_enum)]
    pub report: Option<ReportTarget>,

    /// Exit with failure when anything is unused.
    #[arg(long = "fail-on-unused")]
    pub fail_on_unused: bool,
}
