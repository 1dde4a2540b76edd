// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point for the Fourier properties demonstration
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use rust_fourier_properties::config::{self, Config};
use rust_fourier_properties::run_demonstration;
use rust_fourier_properties::visualization::{JsonSink, LogSink, PlotSink};

/// Time and frequency analysis of canonical signals and Fourier transform properties
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format), created with defaults if missing
    #[arg(long, default_value = "fourier.yaml")]
    config: PathBuf,

    /// Directory receiving one JSON file per plot
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Frequency of the base sinusoid in Hz
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Frequency of the scaled sinusoid in Hz
    #[arg(long)]
    scaled_frequency: Option<f64>,

    /// Circular shift of the pulse in samples
    #[arg(short, long, allow_hyphen_values = true)]
    shift: Option<isize>,

    /// Number of samples of the grid
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Output file for the property report (JSON)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Output the configuration schema as JSON and exit
    #[arg(long)]
    show_config_schema: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.quiet {
        log::LevelFilter::Off
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if args.show_config_schema {
        return config::output_config_schema();
    }

    let mut config = Config::from_file(&args.config)?;
    config.apply_args(
        args.frequency,
        args.scaled_frequency,
        args.shift,
        args.count,
        args.output_dir,
    );
    config
        .validate()
        .context("Invalid command line overrides")?;

    let mut sink: Box<dyn PlotSink> = match &config.output.directory {
        Some(dir) => {
            info!("Writing plots to {}", dir);
            Box::new(JsonSink::new(dir)?)
        }
        None => Box::new(LogSink),
    };

    let report = run_demonstration(&config, sink.as_mut())?;

    if let Some(path) = &args.report {
        info!("Saving report to: {}", path.display());
        std::fs::write(path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write report to {:?}", path))?;
    }

    println!("Fourier properties on {}", report.grid);
    println!("--------------------");
    for check in &report.checks {
        println!(
            "- {:<18} {:<4} {}",
            check.property.to_string(),
            if check.passed { "ok" } else { "FAIL" },
            check.detail
        );
    }

    if !report.all_passed() {
        warn!("Some Fourier properties were not verified");
        std::process::exit(1);
    }

    Ok(())
}
