// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, DetectConfig
//! DetectConfig --> IgnorePolicy (defaults? + extra names/prefixes)
//! ReportTarget: Stderr (default) | Log | None
//! ```

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

use crate::detect::{IgnorePolicy, NoReport, Report, TracingReport, WriterReport};
use crate::logging::LogLevel;

/// Where the summary line goes.
///
/// Spelled in lowercase both in TOML and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportTarget {
    /// Standard error, one line.
    #[default]
    Stderr,
    /// A `tracing` warning.
    Log,
    /// Nowhere.
    None,
}

impl ReportTarget {
    /// Creates the reporter for this target.
    #[must_use]
    pub fn reporter(self) -> Box<dyn Report> {
        self.reporter_with(std::io::stderr())
    }

    /// Like [`reporter`](Self::reporter), with `writer` standing in for
    /// stderr. Only [`ReportTarget::Stderr`] writes to it.
    #[must_use]
    pub fn reporter_with<'a, W: Write + 'a>(self, writer: W) -> Box<dyn Report + 'a> {
        match self {
            Self::Stderr => Box::new(WriterReport::new(writer)),
            Self::Log => Box::new(TracingReport),
            Self::None => Box::new(NoReport),
        }
    }
}

impl std::fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stderr => write!(f, "stderr"),
            Self::Log => write!(f, "log"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file log when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub log_json: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_json: false,
        }
    }
}

/// Detection options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectConfig {
    /// Start from the built-in ignore lists.
    pub defaults: bool,
    /// Names the application schema already consumes.
    pub defined: Vec<String>,
    /// Extra exact names to ignore.
    pub ignore_names: Vec<String>,
    /// Extra prefixes to ignore.
    pub ignore_prefixes: Vec<String>,
    /// Where the summary line goes.
    pub report: ReportTarget,
    /// Exit with failure when anything is unused.
    pub fail_on_unused: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            defaults: true,
            defined: Vec::new(),
            ignore_names: Vec::new(),
            ignore_prefixes: Vec::new(),
            report: ReportTarget::default(),
            fail_on_unused: false,
        }
    }
}

impl DetectConfig {
    /// Builds the ignore policy: the built-in lists (unless disabled) followed
    /// by the configured extras.
    #[must_use]
    pub fn policy(&self) -> IgnorePolicy {
        let base = if self.defaults {
            IgnorePolicy::default()
        } else {
            IgnorePolicy::empty()
        };
        base.with_names(self.ignore_names.iter().cloned())
            .with_prefixes(self.ignore_prefixes.iter().cloned())
    }
}
