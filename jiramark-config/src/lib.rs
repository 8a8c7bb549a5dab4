//! Shared configuration loader for the jiramark toolchain.
//!
//! `defaults/jiramark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`JiramarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use jiramark_babel::JiraOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/jiramark.default.toml");

/// Name of the optional configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "jiramark.toml";

/// Top-level configuration consumed by jiramark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct JiramarkConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Renderer knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub safe: bool,
}

/// Post-processing of the rendered markup.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// `0` means unlimited.
    pub max_length: usize,
}

impl From<&JiramarkConfig> for JiraOptions {
    fn from(config: &JiramarkConfig) -> Self {
        JiraOptions {
            safe: config.render.safe,
            max_length: config.output.max_length,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<JiramarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<JiramarkConfig, ConfigError> {
    Loader::new().build()
}
