// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Unused-variable detection.
//!
//! # Architecture
//!
//! ```text
//!   KeySet (defined)   EnvSnapshot   IgnorePolicy
//!          \                |             /
//!           +---------------+------------+
//!                           v
//!                     find_unused()        pure, snapshot order
//!                           |
//!                           v
//!                    detect_unused()       report once if non-empty
//!                           |
//!                           v
//!                  Report::report(format_report(..))
//! ```
//!
//! A name is unused when it is not defined, not ignored by exact name and
//! not ignored by prefix. The three exclusions commute, so the order in
//! which they are checked never changes the result.

pub mod defaults;
pub mod keys;
pub mod policy;
pub mod report;

#[cfg(test)]
mod tests;

pub use defaults::{DEFAULT_IGNORED_NAMES, DEFAULT_IGNORED_PREFIXES};
pub use keys::{KeySet, defined_keys_of, keys_from_json_file, keys_from_json_str};
pub use policy::IgnorePolicy;
pub use report::{NoReport, REPORT_TAG, Report, TracingReport, WriterReport, format_report};

use crate::env::EnvSnapshot;

/// Returns the snapshot names that nothing accounts for, in snapshot order.
#[must_use]
pub fn find_unused<D>(defined: &D, env: &EnvSnapshot, policy: &IgnorePolicy) -> Vec<String>
where
    D: KeySet + ?Sized,
{
    let unused: Vec<String> = env
        .names()
        .filter(|name| is_unused(name, defined, policy))
        .map(str::to_owned)
        .collect();

    tracing::debug!(
        scanned = env.len(),
        unused = unused.len(),
        "unused environment scan finished"
    );
    unused
}

/// Runs [`find_unused`] and hands the summary to `reporter` when the result
/// is non-empty.
///
/// The reporter is called exactly once for a non-empty result and never for
/// an empty one. The result is returned either way.
pub fn detect_unused<D, R>(
    defined: &D,
    env: &EnvSnapshot,
    policy: &IgnorePolicy,
    reporter: &mut R,
) -> Vec<String>
where
    D: KeySet + ?Sized,
    R: Report + ?Sized,
{
    let unused = find_unused(defined, env, policy);
    if !unused.is_empty() {
        reporter.report(&format_report(&unused));
    }
    unused
}

/// [`detect_unused`] with the default standard-error reporter.
pub fn detect_unused_to_stderr<D>(defined: &D, env: &EnvSnapshot, policy: &IgnorePolicy) -> Vec<String>
where
    D: KeySet + ?Sized,
{
    detect_unused(defined, env, policy, &mut WriterReport::stderr())
}

fn is_unused<D: KeySet + ?Sized>(name: &str, defined: &D, policy: &IgnorePolicy) -> bool {
    if defined.contains_key(name) {
        return false;
    }
    if policy.ignores_name(name) {
        tracing::trace!(name, "ignored by name");
        return false;
    }
    if let Some(prefix) = policy.matching_prefix(name) {
        tracing::trace!(name, prefix, "ignored by prefix");
        return false;
    }
    true
}
