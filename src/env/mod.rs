// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshots.
//!
//! # Architecture
//!
//! ```text
//! EnvSnapshot (ordered Vec<(String, String)> + name index)
//! Sources: current_env(), EnvSnapshot::from_pairs(), collect()
//! Ops: set/get/contains/names/iter
//! ```
//!
//! - **Order-preserving**: names enumerate in insertion order
//! - **Unique names**: re-inserting a name replaces its value in place
//! - **Case-sensitive**: `Path` and `PATH` are different names
//! - **Read once**: the process environment is only touched by `capture()`

pub mod snapshot;


pub use snapshot::EnvSnapshot;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> EnvSnapshot {
    EnvSnapshot::capture()
}
