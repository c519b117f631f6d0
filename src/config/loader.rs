// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .with_env_vars()     (tests: explicit map instead of process env)
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use super::Config;
use crate::error::{ConfigError, Result};

/// Every `section.key` the environment layer may set.
pub const ENV_KEYS: &[&str] = &[
    "global.output_log_level",
    "global.file_log_level",
    "global.log_file",
    "global.log_json",
    "detect.defaults",
    "detect.defined",
    "detect.ignore_names",
    "detect.ignore_prefixes",
    "detect.report",
    "detect.fail_on_unused",
];

/// Keys parsed as comma-separated lists when they come from the environment.
const LIST_KEYS: &[&str] = &[
    "detect.defined",
    "detect.ignore_names",
    "detect.ignore_prefixes",
];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<HashMap<String, String>>,
    required: Vec<PathBuf>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_vars: None,
            required: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file is read when `build()` is called. A missing file or invalid
    /// TOML makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.required.push(p.to_path_buf());
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Uses `vars` instead of the process environment for the prefixed
    /// variables.
    #[must_use]
    pub fn with_env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing.
    /// - A configuration file has invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into `Config`.
    pub fn build(self) -> Result<Config> {
        if let Some(missing) = self.required.iter().find(|p| !p.exists()) {
            return Err(ConfigError::NotFound(missing.display().to_string()).into());
        }

        let mut origin = self.origin();
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = config_env_vars(prefix, self.env_vars);
                if !vars.is_empty() {
                    origin = format!("{origin}, <env {prefix}_*>");
                }
                let mut env = config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",");
                for key in LIST_KEYS {
                    env = env.with_list_parse_key(key);
                }
                self.builder.add_source(env.source(Some(vars)))
            }
            None => self.builder,
        };

        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: origin.clone(),
            message: e.to_string(),
        };
        let cfg = builder.build().map_err(parse_error)?;
        let config: Config = cfg.try_deserialize().map_err(parse_error)?;
        tracing::debug!(sources = %origin, "configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    /// Numbered source listing for `inis`: files in load order, then the
    /// environment layer when it sets at least one key.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        let files = self
            .files
            .iter()
            .map(|(source, path)| format!("[{source}] {}", path.display()));
        let env = self.env_prefix.iter().filter_map(|prefix| {
            let count = config_env_vars(prefix, self.env_vars.clone()).len();
            (count > 0).then(|| format!("[env] {prefix}_* ({count} set)"))
        });
        files
            .chain(env)
            .enumerate()
            .map(|(i, line)| format!("{}. {line}", i + 1))
            .collect()
    }

    fn origin(&self) -> String {
        if self.files.is_empty() {
            "<defaults>".to_string()
        } else {
            self.files
                .iter()
                .map(|(_, path)| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Keeps the prefixed variables that name a known config key.
///
/// Any other `<PREFIX>_*` variable is left to detection.
fn config_env_vars(
    prefix: &str,
    vars: Option<HashMap<String, String>>,
) -> HashMap<String, String> {
    let vars = vars.unwrap_or_else(|| {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    });
    vars.into_iter()
        .filter(|(name, _)| match env_config_key(prefix, name) {
            Some(key) if ENV_KEYS.contains(&key.as_str()) => true,
            Some(_) => {
                tracing::debug!(%name, "not a config key, skipping");
                false
            }
            None => false,
        })
        .collect()
}

/// Maps `<PREFIX>_SECTION__KEY` to `section.key`.
fn env_config_key(prefix: &str, name: &str) -> Option<String> {
    let name = name.to_lowercase();
    let rest = name.strip_prefix(&format!("{}_", prefix.to_lowercase()))?;
    Some(rest.replace("__", "."))
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
