// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         check / defaults / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + ENVALID_UNUSED_*  |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |          detect           |
//!              | policy  keys  report      |
//!              '-------------+-------------'
//!                            |
//!                           env
//!                      EnvSnapshot
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envalid_unused::detect::{IgnorePolicy, detect_unused};
//! use envalid_unused::env::EnvSnapshot;
//!
//! let env = EnvSnapshot::from_pairs([("PORT", "8080"), ("SHELL", "/bin/sh"), ("STRAY", "1")]);
//! let mut messages = Vec::new();
//! let unused = detect_unused(
//!     &["PORT"],
//!     &env,
//!     &IgnorePolicy::default(),
//!     &mut |m: &str| messages.push(m.to_string()),
//! );
//!
//! assert_eq!(unused, ["STRAY"]);
//! assert_eq!(
//!     messages,
//!     ["[envalid-unused] Found 1 unused environment variable(s): STRAY"]
//! );
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod detect;
pub mod env;
pub mod error;
pub mod logging;
