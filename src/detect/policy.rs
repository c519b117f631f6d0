// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ignore policy: exact names plus `starts_with` prefixes.

use bon::Builder;

use super::defaults::{DEFAULT_IGNORED_NAMES, DEFAULT_IGNORED_PREFIXES};

/// Names and prefixes the detector never reports.
///
/// `Default` and the builder start from the built-in lists; a builder setter
/// replaces its list. Matching is exact and case-sensitive.
///
/// ```
/// use envalid_unused::detect::IgnorePolicy;
///
/// let policy = IgnorePolicy::builder()
///     .with_ignore_names(vec!["CI".to_string()])
///     .build();
/// assert!(policy.ignores("CI"));
/// assert!(!policy.ignores("SHELL"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct IgnorePolicy {
    #[builder(setters(name = with_ignore_names), default = owned_list(DEFAULT_IGNORED_NAMES))]
    ignore_names: Vec<String>,
    #[builder(setters(name = with_ignore_prefixes), default = owned_list(DEFAULT_IGNORED_PREFIXES))]
    ignore_prefixes: Vec<String>,
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl IgnorePolicy {
    /// A policy that ignores nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ignore_names: Vec::new(),
            ignore_prefixes: Vec::new(),
        }
    }

    /// Adds exact names to ignore.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds prefixes to ignore.
    #[must_use]
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_prefixes
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.ignore_names
    }

    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.ignore_prefixes
    }

    #[must_use]
    pub fn ignores_name(&self, name: &str) -> bool {
        self.ignore_names.iter().any(|n| n == name)
    }

    /// Returns the first prefix `name` starts with.
    #[must_use]
    pub fn matching_prefix(&self, name: &str) -> Option<&str> {
        self.ignore_prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| name.starts_with(prefix))
    }

    #[must_use]
    pub fn ignores_prefix(&self, name: &str) -> bool {
        self.matching_prefix(name).is_some()
    }

    /// Whether `name` is excluded by either rule.
    #[must_use]
    pub fn ignores(&self, name: &str) -> bool {
        self.ignores_name(name) || self.ignores_prefix(name)
    }
}

fn owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}
