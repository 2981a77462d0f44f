//! Configuration settings for the reduction solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest accepted per-instance timeout
const MAX_TIMEOUT_SECONDS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub search: SearchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Per-instance search limit, 0 for none
    pub timeout_seconds: u64,
    /// Seed for the fallback assignment shown when a formula has no solution
    pub random_seed: Option<u64>,
    /// Solve the instances of a batch concurrently
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                timeout_seconds: 0,
                random_seed: None,
                parallel: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save: false,
                output_directory: PathBuf::from("output/results"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.search.timeout_seconds > MAX_TIMEOUT_SECONDS {
            anyhow::bail!(
                "Timeout of {}s exceeds the maximum of {}s",
                self.search.timeout_seconds,
                MAX_TIMEOUT_SECONDS
            );
        }

        if self.output.save && self.output.output_directory.as_os_str().is_empty() {
            anyhow::bail!("Output directory must be set when saving results");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(timeout) = cli_overrides.timeout_seconds {
            self.search.timeout_seconds = timeout;
        }
        if let Some(seed) = cli_overrides.random_seed {
            self.search.random_seed = Some(seed);
        }
        if cli_overrides.parallel {
            self.search.parallel = true;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_seconds: Option<u64>,
    pub random_seed: Option<u64>,
    pub parallel: bool,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}
