// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment snapshot container.

use std::collections::{BTreeMap, HashMap};

/// An ordered, read-mostly copy of a process environment.
///
/// Enumeration order is the order in which names were first inserted. For a
/// captured environment that is whatever order the host platform yields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Vec<(String, String)>,
    /// Position of each name in `vars`.
    index: HashMap<String, usize>,
}

impl EnvSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the process environment once.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn capture() -> Self {
        let mut snapshot = Self::new();
        for (name, value) in std::env::vars_os() {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => {
                    snapshot.set(name, value);
                }
                (Ok(name), Err(_)) => {
                    tracing::debug!(%name, "skipping variable with non UTF-8 value");
                }
                (Err(name), _) => {
                    tracing::debug!(name = %name.to_string_lossy(), "skipping non UTF-8 variable name");
                }
            }
        }
        tracing::debug!(count = snapshot.len(), "captured process environment");
        snapshot
    }

    /// Creates a snapshot from name/value pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Sets a variable.
    ///
    /// An existing name keeps its position and gets the new value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        if let Some(&pos) = self.index.get(&name) {
            self.vars[pos].1 = value;
        } else {
            self.index.insert(name.clone(), self.vars.len());
            self.vars.push((name, value));
        }
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&pos| self.vars[pos].1.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the variable names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|(name, _)| name.as_str())
    }

    /// Returns an iterator over name/value pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns all variables as a name-sorted map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.iter().cloned().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        snapshot.extend(iter);
        snapshot
    }
}

impl<K, V> Extend<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
