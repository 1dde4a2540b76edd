// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Demonstration sequence
//!
//! Builds the canonical signals on one shared grid, plots them in time and
//! frequency, and verifies the Fourier properties on them:
//!
//! 1. Time-domain plots: rectangular pulse, unit step, sinusoid
//! 2. Spectra: pulse, step, sinusoid
//! 3. Linearity: spectrum of pulse + sinusoid
//! 4. Time shift: spectrum of the circularly shifted pulse
//! 5. Frequency scaling: spectrum of the higher-frequency sinusoid
//! 6. Numerical property checks, collected in a [`DemonstrationReport`]

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::signal::{
    rectangular_pulse, sinusoid, sum_signals, time_shift, unit_step, SamplingGrid, Signal,
};
use crate::spectral::properties::{
    check_dc_concentration, check_frequency_scaling, check_linearity, check_round_trip,
    check_time_shift,
};
use crate::spectral::{FFTAnalyzer, PropertyCheck, SpectralAnalyzer};
use crate::visualization::{PlotSink, SpectrumPlot, TimePlot};

/// Outcome of a full demonstration run
#[derive(Debug, Clone, Serialize)]
pub struct DemonstrationReport {
    pub timestamp: DateTime<Utc>,
    pub grid: SamplingGrid,
    /// Titles of the time-domain plots, in emission order
    pub time_plots: Vec<String>,
    /// Titles of the spectrum plots, in emission order
    pub spectrum_plots: Vec<String>,
    /// Spectral peak of the base sinusoid in Hz
    pub sinusoid_peak_hz: f64,
    /// Spectral peak of the scaled sinusoid in Hz
    pub scaled_sinusoid_peak_hz: f64,
    pub checks: Vec<PropertyCheck>,
}

impl DemonstrationReport {
    /// True when every property check passed
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }
}

struct Plotter<'a> {
    sink: &'a mut dyn PlotSink,
    analyzer: FFTAnalyzer,
    time_plots: Vec<String>,
    spectrum_plots: Vec<String>,
}

impl Plotter<'_> {
    fn time(&mut self, title: &str, signal: &Signal) -> Result<()> {
        info!("Plotting signal '{}'", title);
        self.sink
            .plot_time(&TimePlot::new(title, signal))
            .with_context(|| format!("Failed to plot signal '{}'", title))?;
        self.time_plots.push(title.to_string());
        Ok(())
    }

    /// Analyze then plot; returns the peak frequency (NaN when there is none).
    fn spectrum(&mut self, title: &str, signal: &Signal) -> Result<f64> {
        info!("Plotting spectrum '{}'", title);
        let spectrum = self.analyzer.analyze(signal);
        self.sink
            .plot_spectrum(&SpectrumPlot::new(title, &spectrum))
            .with_context(|| format!("Failed to plot spectrum '{}'", title))?;
        self.spectrum_plots.push(title.to_string());
        Ok(spectrum.peak_frequency().unwrap_or(f64::NAN))
    }
}

/// Run the demonstration described by `config`, sending every plot to `sink`.
pub fn run_demonstration(config: &Config, sink: &mut dyn PlotSink) -> Result<DemonstrationReport> {
    let grid = config.grid.build().context("Invalid sampling grid")?;
    let params = &config.signals;
    let tolerance = config.output.tolerance;
    info!("Sampling grid: {}", grid);

    let pulse = rectangular_pulse(&grid, params.pulse_low, params.pulse_high)?;
    let step = unit_step(&grid, params.step_threshold)?;
    let sine = sinusoid(&grid, params.frequency_hz, 0.0)?;

    let mut plotter = Plotter {
        sink,
        analyzer: FFTAnalyzer::new(),
        time_plots: Vec::new(),
        spectrum_plots: Vec::new(),
    };

    let sine_title = format!("Sinusoid ({} Hz)", params.frequency_hz);
    plotter.time("Rectangular pulse", &pulse)?;
    plotter.time("Unit step", &step)?;
    plotter.time(&sine_title, &sine)?;

    plotter.spectrum("Rectangular pulse", &pulse)?;
    plotter.spectrum("Unit step", &step)?;
    let sinusoid_peak_hz = plotter.spectrum(&sine_title, &sine)?;

    let combined = sum_signals(&pulse, &sine)?;
    plotter.spectrum("Linearity (pulse + sinusoid)", &combined)?;

    let shifted = time_shift(&pulse, params.shift_samples);
    plotter.spectrum(
        &format!("Pulse shifted by {} samples", params.shift_samples),
        &shifted,
    )?;

    let scaled = sinusoid(&grid, params.scaled_frequency_hz, 0.0)?;
    let scaled_sinusoid_peak_hz = plotter.spectrum(
        &format!(
            "Sinusoid ({} Hz, frequency scaling)",
            params.scaled_frequency_hz
        ),
        &scaled,
    )?;

    let constant = unit_step(&grid, grid.start())?;
    let checks = vec![
        check_linearity(&pulse, &sine, tolerance)?,
        check_time_shift(&pulse, params.shift_samples, tolerance),
        check_frequency_scaling(
            &grid,
            params.frequency_hz,
            params.scaled_frequency_hz / params.frequency_hz,
        )?,
        check_dc_concentration(&constant, tolerance),
        check_round_trip(&combined, tolerance),
    ];

    let passed = checks.iter().filter(|c| c.passed).count();
    info!("{}/{} property checks passed", passed, checks.len());

    Ok(DemonstrationReport {
        timestamp: Utc::now(),
        grid,
        time_plots: plotter.time_plots,
        spectrum_plots: plotter.spectrum_plots,
        sinusoid_peak_hz,
        scaled_sinusoid_peak_hz,
        checks,
    })
}
