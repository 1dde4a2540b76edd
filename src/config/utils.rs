// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration utilities
//!
//! This module provides utility functions for working with configuration
//! settings, including validation and schema management.

use anyhow::{Context, Result};
use log::debug;

use super::Config;

/// Output the embedded JSON schema to the console.
///
/// This function is called when the `--show-config-schema` flag is provided
/// on the command line.
///
/// # Example
///
/// ```bash
/// ./rust_fourier_properties --show-config-schema > config_schema.json
/// ```
pub fn output_config_schema() -> Result<()> {
    // Parse the schema to a JSON Value to pretty-format it
    let schema: serde_json::Value =
        serde_json::from_str(super::CONFIG_SCHEMA).context("Failed to parse JSON schema")?;

    let formatted_schema =
        serde_json::to_string_pretty(&schema).context("Failed to format JSON schema")?;

    println!("{}", formatted_schema);

    Ok(())
}

/// Validates the configuration against rules the JSON schema cannot express.
///
/// # Validation Rules
///
/// - **Finite values**: every floating point parameter must be finite
/// - **Grid range**: `stop > start` and at least two samples
/// - **Pulse bounds**: `pulse_low < pulse_high`
/// - **Tolerance**: strictly positive
/// - **Frequencies**: both sinusoid frequencies must be strictly positive,
///   spectral peaks are only searched among positive frequencies
pub fn validate_specific_rules(config: &Config) -> Result<()> {
    debug!("Performing additional validation checks");

    let floats = [
        ("grid.start", config.grid.start),
        ("grid.stop", config.grid.stop),
        ("signals.pulse_low", config.signals.pulse_low),
        ("signals.pulse_high", config.signals.pulse_high),
        ("signals.step_threshold", config.signals.step_threshold),
        ("signals.frequency_hz", config.signals.frequency_hz),
        ("signals.scaled_frequency_hz", config.signals.scaled_frequency_hz),
        ("output.tolerance", config.output.tolerance),
    ];
    for (name, value) in floats {
        if !value.is_finite() {
            anyhow::bail!("{} must be a finite number, got {}", name, value);
        }
    }

    config
        .grid
        .build()
        .context("Invalid sampling grid configuration")?;

    if config.signals.pulse_low >= config.signals.pulse_high {
        anyhow::bail!(
            "Pulse bounds are inverted: pulse_low ({}) must be lower than pulse_high ({})",
            config.signals.pulse_low,
            config.signals.pulse_high
        );
    }

    if config.output.tolerance <= 0.0 {
        anyhow::bail!(
            "Tolerance must be strictly positive, got {}",
            config.output.tolerance
        );
    }

    let frequencies = [
        ("signals.frequency_hz", config.signals.frequency_hz),
        ("signals.scaled_frequency_hz", config.signals.scaled_frequency_hz),
    ];
    for (name, value) in frequencies {
        if value <= 0.0 {
            anyhow::bail!("{} must be strictly positive, got {}", name, value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_specific_rules(&Config::default()).is_ok());
    }

    #[test]
    fn test_inverted_pulse_is_rejected() {
        let mut config = Config::default();
        config.signals.pulse_low = 0.5;
        config.signals.pulse_high = 0.1;
        let err = validate_specific_rules(&config).unwrap_err();
        assert!(err.to_string().contains("Pulse bounds"));
    }

    #[test]
    fn test_grid_errors_are_reported() {
        let mut config = Config::default();
        config.grid.count = 1;
        let err = validate_specific_rules(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid sampling range"));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut config = Config::default();
        config.signals.frequency_hz = f64::NAN;
        assert!(validate_specific_rules(&config).is_err());

        let mut config = Config::default();
        config.output.tolerance = 0.0;
        assert!(validate_specific_rules(&config).is_err());
    }

    #[test]
    fn test_non_positive_frequencies_are_rejected() {
        let mut config = Config::default();
        config.signals.frequency_hz = -5.0;
        let err = validate_specific_rules(&config).unwrap_err();
        assert!(err.to_string().contains("signals.frequency_hz"));

        let mut config = Config::default();
        config.signals.frequency_hz = 0.0;
        assert!(validate_specific_rules(&config).is_err());

        let mut config = Config::default();
        config.signals.scaled_frequency_hz = -10.0;
        let err = validate_specific_rules(&config).unwrap_err();
        assert!(err.to_string().contains("signals.scaled_frequency_hz"));
    }
}
