// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envalid-unused.toml (cwd)
//! 3. --config FILE
//! 4. ENVALID_UNUSED_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVALID_UNUSED_DETECT__DEFAULTS=false      → detect.defaults = false
//! ENVALID_UNUSED_DETECT__DEFINED=PORT,HOST   → detect.defined = ["PORT", "HOST"]
//! ENVALID_UNUSED_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{DetectConfig, GlobalConfig};

/// Name of the optional configuration file in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "envalid-unused.toml";

/// Prefix of the variables that configure this tool.
pub const ENV_PREFIX: &str = "ENVALID_UNUSED";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Detection options.
    pub detect: DetectConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envalid_unused::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envalid-unused.toml")
    ///     .with_env_prefix("ENVALID_UNUSED")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, is not valid TOML, or does not
    /// match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, one sorted `key = value`
    /// line each.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_detect_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.log_json".into(), self.global.log_json.to_string());
    }

    fn format_detect_options(&self, options: &mut BTreeMap<String, String>) {
        let list = |items: &[String]| items.join(", ");

        options.insert("detect.defaults".into(), self.detect.defaults.to_string());
        options.insert("detect.defined".into(), list(&self.detect.defined));
        options.insert(
            "detect.ignore_names".into(),
            list(&self.detect.ignore_names),
        );
        options.insert(
            "detect.ignore_prefixes".into(),
            list(&self.detect.ignore_prefixes),
        );
        options.insert("detect.report".into(), self.detect.report.to_string());
        options.insert(
            "detect.fail_on_unused".into(),
            self.detect.fail_on_unused.to_string(),
        );
    }
}
