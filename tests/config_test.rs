use anyhow::Result;
use rust_fourier_properties::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_load_and_save() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("fourier.yaml");

    let mut config = Config::default();
    config.grid.count = 256;
    config.signals.frequency_hz = 3.0;
    config.signals.scaled_frequency_hz = 9.0;
    config.output.directory = Some("plots".to_string());

    config.save_to_file(&config_path)?;
    let loaded = Config::from_file(&config_path)?;

    assert_eq!(loaded, config);
    assert_eq!(loaded.grid.build()?.count(), 256);

    Ok(())
}

#[test]
fn test_missing_file_creates_defaults() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("missing.yaml");

    let config = Config::from_file(&config_path)?;

    assert!(config_path.exists());
    assert_eq!(config, Config::default());
    assert_eq!(config.grid.count, 500);
    assert_eq!(config.signals.shift_samples, 50);

    Ok(())
}

#[test]
fn test_partial_file_uses_section_defaults() -> Result<()> {
    let config = Config::from_yaml_str("signals:\n  pulse_low: -0.1\n  pulse_high: 0.3\n  step_threshold: 0.0\n  frequency_hz: 4.0\n  scaled_frequency_hz: 8.0\n  shift_samples: -20\n")?;

    assert_eq!(config.grid.start, -1.0);
    assert_eq!(config.signals.frequency_hz, 4.0);
    assert_eq!(config.signals.shift_samples, -20);

    let empty = Config::from_yaml_str("")?;
    assert_eq!(empty, Config::default());

    Ok(())
}

#[test]
fn test_schema_violation_writes_sample() -> Result<()> {
    let temp_dir = tempdir()?;
    let config_path = temp_dir.path().join("broken.yaml");
    fs::write(&config_path, "grid:\n  start: -1.0\n  stop: 1.0\n  count: 1\n")?;

    let err = Config::from_file(&config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("validation failed"));
    assert!(temp_dir.path().join("broken.sample.yaml").exists());

    Ok(())
}

#[test]
fn test_rule_violation_is_reported() -> Result<()> {
    let err = Config::from_yaml_str("grid:\n  start: 1.0\n  stop: -1.0\n  count: 10\n").unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid sampling range"));

    let err = Config::from_yaml_str("signals:\n  pulse_low: -0.2\n  pulse_high: 0.2\n  step_threshold: 0.0\n  frequency_hz: -5.0\n  scaled_frequency_hz: 10.0\n  shift_samples: 50\n").unwrap_err();
    assert!(err.to_string().contains("validation failed"));

    let err = Config::from_yaml_str("unknown_section: true\n").unwrap_err();
    assert!(err.to_string().contains("validation failed"));

    Ok(())
}

#[test]
fn test_apply_args_overrides_only_given_values() -> Result<()> {
    let mut config = Config::default();
    config.apply_args(Some(7.0), None, Some(-3), None, None);

    assert_eq!(config.signals.frequency_hz, 7.0);
    assert_eq!(config.signals.scaled_frequency_hz, 10.0);
    assert_eq!(config.signals.shift_samples, -3);
    assert_eq!(config.grid.count, 500);
    assert!(config.output.directory.is_none());
    config.validate()?;

    config.apply_args(None, None, None, Some(1), None);
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.apply_args(Some(-5.0), None, None, None, None);
    assert!(config.validate().is_err());

    Ok(())
}
