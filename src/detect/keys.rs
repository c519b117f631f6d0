// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Defined-key sets.
//!
//! ```text
//! KeySet::contains_key(&str)
//!   HashSet / BTreeSet / HashMap / BTreeMap (String keys)
//!   serde_json::Map, [S], Vec<S>, [S; N]     (S: AsRef<str>)
//!
//! defined_keys_of(&T: Serialize)  --> BTreeSet<String>
//! keys_from_json_str / _file      --> BTreeSet<String>
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::KeysError;

/// Membership test for the names a configuration schema already consumes.
///
/// Only the keys matter; values of map-like implementors are never looked at.
pub trait KeySet {
    fn contains_key(&self, key: &str) -> bool;
}

impl<T: KeySet + ?Sized> KeySet for &T {
    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }
}

impl<S: BuildHasher> KeySet for HashSet<String, S> {
    fn contains_key(&self, key: &str) -> bool {
        self.contains(key)
    }
}

impl KeySet for BTreeSet<String> {
    fn contains_key(&self, key: &str) -> bool {
        self.contains(key)
    }
}

impl<V, S: BuildHasher> KeySet for HashMap<String, V, S> {
    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }
}

impl<V> KeySet for BTreeMap<String, V> {
    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }
}

impl KeySet for serde_json::Map<String, Value> {
    fn contains_key(&self, key: &str) -> bool {
        Self::contains_key(self, key)
    }
}

impl<S: AsRef<str>> KeySet for [S] {
    fn contains_key(&self, key: &str) -> bool {
        self.iter().any(|k| k.as_ref() == key)
    }
}

impl<S: AsRef<str>> KeySet for Vec<S> {
    fn contains_key(&self, key: &str) -> bool {
        self.as_slice().contains_key(key)
    }
}

impl<S: AsRef<str>, const N: usize> KeySet for [S; N] {
    fn contains_key(&self, key: &str) -> bool {
        self.as_slice().contains_key(key)
    }
}

/// Collects the top-level field names of a validated configuration value.
///
/// Fields a `Serialize` impl skips (for example through
/// `skip_serializing_if`) are not part of the result.
///
/// # Errors
///
/// Returns [`KeysError::Serialize`] if serialization fails and
/// [`KeysError::NotAnObject`] if the value does not serialize to a map or
/// struct.
pub fn defined_keys_of<T: Serialize + ?Sized>(value: &T) -> Result<BTreeSet<String>, KeysError> {
    let value = serde_json::to_value(value).map_err(KeysError::Serialize)?;
    object_keys(value)
}

/// Parses a JSON object and returns its top-level keys.
///
/// # Errors
///
/// Returns [`KeysError::Parse`] for invalid JSON and
/// [`KeysError::NotAnObject`] if the document is not an object.
pub fn keys_from_json_str(json: &str, origin: &str) -> Result<BTreeSet<String>, KeysError> {
    let value: Value = serde_json::from_str(json).map_err(|source| KeysError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    object_keys(value)
}

/// Reads a JSON object from a file and returns its top-level keys.
///
/// # Errors
///
/// Returns [`KeysError::ReadFailed`] if the file cannot be read, otherwise
/// the errors of [`keys_from_json_str`].
pub fn keys_from_json_file(path: &Path) -> Result<BTreeSet<String>, KeysError> {
    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| KeysError::ReadFailed {
        path: origin.clone(),
        source,
    })?;
    keys_from_json_str(&content, &origin)
}

fn object_keys(value: Value) -> Result<BTreeSet<String>, KeysError> {
    match value {
        Value::Object(map) => Ok(map.into_iter().map(|(k, _)| k).collect()),
        other => Err(KeysError::NotAnObject {
            kind: value_kind(&other),
        }),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
