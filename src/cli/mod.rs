// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envalid-unused [global options] <command>
//! check [--defined NAME]... [--defined-from FILE]... [--ignore NAME]...
//! defaults
//! options
//! inis
//! version
//! ```

pub mod check;
pub mod global;


use crate::cli::check::CheckArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Unused environment variable detector.
#[derive(Debug, Parser)]
#[command(
    name = "envalid-unused",
    author,
    version,
    about = "Reports environment variables that no configuration schema consumes",
    long_about = "envalid-unused Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Compares the current environment against the names your\n\
                  application's configuration schema defines and reports the\n\
                  rest. Common shell and session variables are ignored by\n\
                  default; see `envalid-unused defaults`.",
    after_help = "CONFIG FILES:\n\n\
                  envalid-unused reads `envalid-unused.toml` from the current\n\
                  directory if it exists. Additional files can be given with\n\
                  --config and are loaded after it. ENVALID_UNUSED_<SECTION>__<KEY>\n\
                  variables override files, and command-line flags override both.\n\
                  Use --no-default-config to skip `envalid-unused.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Checks the current environment for unused variables.
    Check(CheckArgs),

    /// Prints the built-in ignored names and prefixes.
    Defaults,

    /// Lists all options and their resolved values.
    Options,

    /// Lists the configuration files in use.
    Inis,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
