// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration management for the Fourier properties demonstration
//!
//! The configuration is backed by a YAML file and validated against an
//! embedded JSON schema before being deserialized, then checked against the
//! rules the schema cannot express (see [`utils::validate_specific_rules`]).
//!
//! ## Configuration Structure
//!
//! - `grid`: sampling grid shared by every signal
//! - `signals`: pulse bounds, step threshold, sinusoid frequencies, shift
//! - `output`: plot export directory and check tolerance
//!
//! ## Usage
//!
//! ```no_run
//! use rust_fourier_properties::config::Config;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file("fourier.yaml").unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(7.5),                  // Base frequency
//!     None,                       // Scaled frequency
//!     Some(25),                   // Shift in samples
//!     None,                       // Sample count
//!     Some("plots".to_string()),  // Plot directory
//! );
//!
//! let grid = config.grid.build().unwrap();
//! println!("Step: {}", grid.step());
//! ```

pub mod grid;
pub mod output;
pub mod signals;
pub mod utils;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

pub use grid::GridConfig;
pub use output::OutputConfig;
pub use signals::SignalsConfig;
pub use utils::output_config_schema;

/// JSON schema every configuration file is validated against
pub(crate) const CONFIG_SCHEMA: &str = include_str!("../../resources/config.schema.json");

/// Root configuration structure.
///
/// Every section falls back to its defaults when missing, so an empty file
/// reproduces the canonical demonstration: 500 points over `[-1, 1]`, a pulse
/// over `[-0.2, 0.2]`, a step at 0, 5 Hz and 10 Hz sinusoids and a 50-sample shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub signals: SignalsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Helper method to create a sample config file when validation fails
    fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let sample_path = path.with_extension("sample.yaml");
        debug!("Original path: {:?}, Sample path: {:?}", path, sample_path);

        if let Some(parent) = sample_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create parent directory for sample config at {:?}",
                        parent
                    )
                })?;
            }
        }

        Self::default()
            .save_to_file(&sample_path)
            .with_context(|| format!("Failed to save sample config to {:?}", sample_path))?;

        error!(
            "Sample configuration file created at {:?}\nPlease edit and rename it",
            sample_path
        );
        Ok(())
    }

    /// Load configuration from a file
    ///
    /// A missing file is created with the default configuration. When the
    /// file fails validation, a `.sample.yaml` with the defaults is written
    /// next to it and the error is returned.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Configuration file not found at {:?}, creating default",
                path
            );
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        debug!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at {:?}", path))?;

        Self::from_yaml_str(&contents).or_else(|err| {
            error!("Configuration error in {}: {:#}", path.display(), err);
            if let Err(e) = Self::create_sample_config(path) {
                error!("Failed to create sample config: {}", e);
            }
            Err(err.context(format!("Invalid configuration in {}", path.display())))
        })
    }

    /// Parse, schema-check and validate a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        // First step: convert YAML to a generic Value
        let yaml_value: serde_yml::Value = if contents.trim().is_empty() {
            serde_yml::Value::Null
        } else {
            serde_yml::from_str(contents).context("Failed to parse YAML configuration")?
        };

        // An empty document means "all defaults"
        let json_value = match serde_json::to_value(&yaml_value)
            .context("Failed to convert YAML to JSON for validation")?
        {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            value => value,
        };

        let schema: serde_json::Value =
            serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;
        let validator = jsonschema::draft202012::options()
            .should_validate_formats(true)
            .build(&schema)
            .map_err(|e| anyhow::anyhow!("Failed to build schema validator: {}", e))?;

        debug!("Validating configuration against schema");
        if let Err(error) = validator.validate(&json_value) {
            anyhow::bail!("Configuration validation failed: {}", error);
        }

        debug!("Schema validation passed, deserializing into Config structure");
        let config: Config = serde_json::from_value(json_value)
            .context("Failed to deserialize configuration")?;

        utils::validate_specific_rules(&config)?;
        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml =
            serde_yml::to_string(self).context("Failed to serialize configuration to YAML")?;

        let mut file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create config file at {:?}", path.as_ref()))?;

        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Apply command line arguments to override configuration values.
    ///
    /// Only arguments that are provided override the loaded values.
    ///
    /// # Parameters
    ///
    /// * `frequency` - Base sinusoid frequency in Hz
    /// * `scaled_frequency` - Frequency of the scaled sinusoid in Hz
    /// * `shift` - Circular shift of the pulse in samples
    /// * `count` - Number of grid samples
    /// * `output_dir` - Directory receiving JSON plots
    pub fn apply_args(
        &mut self,
        frequency: Option<f64>,
        scaled_frequency: Option<f64>,
        shift: Option<isize>,
        count: Option<usize>,
        output_dir: Option<String>,
    ) {
        if let Some(frequency) = frequency {
            debug!("Overriding frequency from command line: {}", frequency);
            self.signals.frequency_hz = frequency;
        }
        if let Some(scaled) = scaled_frequency {
            debug!("Overriding scaled frequency from command line: {}", scaled);
            self.signals.scaled_frequency_hz = scaled;
        }
        if let Some(shift) = shift {
            debug!("Overriding shift from command line: {}", shift);
            self.signals.shift_samples = shift;
        }
        if let Some(count) = count {
            debug!("Overriding sample count from command line: {}", count);
            self.grid.count = count;
        }
        if let Some(dir) = output_dir {
            debug!("Overriding output directory from command line: {}", dir);
            self.output.directory = Some(dir);
        }
    }

    /// Run [`utils::validate_specific_rules`] on this configuration, e.g. after
    /// [`apply_args`](Self::apply_args).
    pub fn validate(&self) -> Result<()> {
        utils::validate_specific_rules(self)
    }
}
