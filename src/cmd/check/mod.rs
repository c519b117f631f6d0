// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementation.
//!
//! ```text
//! CheckArgs + Config --> CheckPlan (defined keys, policy, report, fail flag)
//!                            |
//!                 run(&EnvSnapshot, reporter, stdout)
//!                            |
//!                 names on stdout, summary through the reporter
//!                            |
//!                 finish(&unused)     fatal when fail_on_unused and non-empty
//! ```

use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Context;

use crate::cli::check::{CheckArgs, OutputFormat};
use crate::config::types::ReportTarget;
use crate::config::{Config, ENV_PREFIX};
use crate::detect::{IgnorePolicy, Report, detect_unused, keys_from_json_file};
use crate::env::{EnvSnapshot, current_env};
use crate::error::{EnvalidError, Result, bail_out};

/// Everything a check needs, resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct CheckPlan {
    pub defined: BTreeSet<String>,
    pub policy: IgnorePolicy,
    pub report: ReportTarget,
    pub format: OutputFormat,
    pub fail_on_unused: bool,
}

impl CheckPlan {
    /// Merges command-line flags into the configured detection options.
    ///
    /// Flags extend the configured lists. The tool's own `ENVALID_UNUSED_`
    /// variables are always ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--defined-from` file cannot be read or is not a
    /// JSON object.
    pub fn new(args: &CheckArgs, config: &Config) -> Result<Self> {
        let mut detect = config.detect.clone();
        if args.no_default_ignores {
            detect.defaults = false;
        }
        detect.ignore_names.extend(args.ignore_names.iter().cloned());
        detect
            .ignore_prefixes
            .extend(args.ignore_prefixes.iter().cloned());

        let mut defined: BTreeSet<String> = detect.defined.iter().cloned().collect();
        defined.extend(args.defined.iter().cloned());
        for path in &args.defined_from {
            let keys = keys_from_json_file(path).map_err(EnvalidError::from)?;
            tracing::debug!(path = %path.display(), count = keys.len(), "loaded defined keys");
            defined.extend(keys);
        }

        let policy = detect.policy().with_prefixes([format!("{ENV_PREFIX}_")]);

        Ok(Self {
            defined,
            policy,
            report: args.report.unwrap_or(detect.report),
            format: args.format,
            fail_on_unused: args.fail_on_unused || detect.fail_on_unused,
        })
    }

    /// Runs the detection over `env`, writing the names to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<R, W>(&self, env: &EnvSnapshot, reporter: &mut R, out: &mut W) -> Result<Vec<String>>
    where
        R: Report + ?Sized,
        W: Write,
    {
        let unused = detect_unused(&self.defined, env, &self.policy, reporter);
        write_names(&unused, self.format, out)?;
        Ok(unused)
    }

    /// Turns the result into the command outcome.
    ///
    /// # Errors
    ///
    /// Returns a fatal error when `fail_on_unused` is set and `unused` is not
    /// empty.
    pub fn finish(&self, unused: &[String]) -> Result<()> {
        if self.fail_on_unused && !unused.is_empty() {
            return Err(bail_out(format!(
                "{} unused environment variable(s)",
                unused.len()
            ))
            .into());
        }
        Ok(())
    }
}

fn write_names<W: Write>(names: &[String], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for name in names {
                writeln!(out, "{name}").map_err(EnvalidError::from)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, names).context("failed to write JSON output")?;
            writeln!(out).map_err(EnvalidError::from)?;
        }
    }
    Ok(())
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if the plan cannot be resolved, output fails, or
/// `fail_on_unused` is set and something is unused.
pub fn run_check_command(args: &CheckArgs, config: &Config) -> Result<()> {
    let plan = CheckPlan::new(args, config)?;
    let env = current_env();
    let mut reporter = plan.report.reporter();
    let mut stdout = std::io::stdout().lock();

    let unused = plan.run(&env, reporter.as_mut(), &mut stdout)?;
    tracing::info!(
        defined = plan.defined.len(),
        unused = unused.len(),
        "check finished"
    );

    plan.finish(&unused)
}
