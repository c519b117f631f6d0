// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvalidError (~24 bytes)
//!                  |
//!   +--------+-----+-----+--------+
//!   |        |           |        |
//!   v        v           v        v
//! Bail     Config       Keys      Io
//! Box<str>  Box         Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ParseError, InvalidValue, NotFound
//!   Keys    NotAnObject, Serialize, Parse, ReadFailed
//! ```
//!
//! The detector itself is total. Errors only come from the outer surfaces:
//! loading configuration and deriving defined keys from foreign values.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvalidError`].
pub type EnvalidResult<T> = std::result::Result<T, EnvalidError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvalidError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Defined-key extraction error.
    #[error("keys error: {0}")]
    Keys(#[from] Box<KeysError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`EnvalidError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnvalidError {
    EnvalidError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvalidError {
                fn from(err: $error) -> Self {
                    EnvalidError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    KeysError => Keys,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Keys Errors ---

/// Errors raised while deriving a defined-key set from a foreign value.
#[derive(Debug, Error)]
pub enum KeysError {
    /// The value has no named fields (a number, string, array, ...).
    #[error("expected a key-bearing object, got {kind}")]
    NotAnObject { kind: &'static str },

    /// The value could not be serialized.
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The JSON document could not be parsed.
    #[error("failed to parse JSON from '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The keys file could not be read.
    #[error("failed to read keys file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
