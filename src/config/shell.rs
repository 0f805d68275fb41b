//! Shell configuration module.
//!
//! This module defines how the interactive shell prompts and renders its results.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each command (empty to disable)
    pub prompt: String,

    /// How results are rendered
    pub output: OutputFormat,

    /// Whether `list` prints the course mean
    pub echo_mean: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "grades> ".to_string(),
            output: OutputFormat::default(),
            echo_mean: true,
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.contains('\n') {
            return Err(ConfigError::ValidationError(
                "Shell prompt cannot contain a newline".to_string(),
            ));
        }
        Ok(())
    }
}
