// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Visualization boundary
//!
//! The numeric core never draws anything. It hands each plot to a
//! [`PlotSink`] as paired, equal-length sequences and a title:
//!
//! * [`TimePlot`]: time axis and amplitude
//! * [`SpectrumPlot`]: frequency axis, magnitude and phase
//!
//! Two sinks are provided. [`LogSink`] writes a one-line summary of each
//! plot to the log, [`JsonSink`] stores each plot as a JSON document that
//! any plotting tool can pick up.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::signal::Signal;
use crate::spectral::Spectrum;

/// Time-domain plot request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePlot {
    pub title: String,
    pub time: Vec<f64>,
    pub amplitude: Vec<f64>,
}

impl TimePlot {
    pub fn new(title: impl Into<String>, signal: &Signal) -> Self {
        Self {
            title: title.into(),
            time: signal.grid().samples(),
            amplitude: signal.amplitude().to_vec(),
        }
    }
}

/// Frequency-domain plot request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumPlot {
    pub title: String,
    pub frequency: Vec<f64>,
    pub magnitude: Vec<f64>,
    pub phase: Vec<f64>,
}

impl SpectrumPlot {
    pub fn new(title: impl Into<String>, spectrum: &Spectrum) -> Self {
        Self {
            title: title.into(),
            frequency: spectrum.frequencies.clone(),
            magnitude: spectrum.magnitudes.clone(),
            phase: spectrum.phases.clone(),
        }
    }
}

/// Destination for plots produced by the analysis
pub trait PlotSink {
    /// Render a time-domain signal
    fn plot_time(&mut self, plot: &TimePlot) -> Result<()>;

    /// Render the magnitude and phase of a spectrum
    fn plot_spectrum(&mut self, plot: &SpectrumPlot) -> Result<()>;
}

/// Sink that only logs a summary of each plot
#[derive(Debug, Default)]
pub struct LogSink;

impl PlotSink for LogSink {
    fn plot_time(&mut self, plot: &TimePlot) -> Result<()> {
        let (min, max) = plot
            .amplitude
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &a| {
                (lo.min(a), hi.max(a))
            });
        info!(
            "[time] {}: {} samples, amplitude in [{:.3}, {:.3}]",
            plot.title,
            plot.amplitude.len(),
            min,
            max
        );
        Ok(())
    }

    fn plot_spectrum(&mut self, plot: &SpectrumPlot) -> Result<()> {
        // strongest positive-frequency bin
        let peak = plot
            .frequency
            .iter()
            .zip(&plot.magnitude)
            .filter(|(f, _)| **f > 0.0)
            .max_by(|a, b| a.1.total_cmp(b.1));

        match peak {
            Some((frequency, magnitude)) => info!(
                "[spectrum] {}: {} bins, DC {:.3}, peak {:.3} at {:.3} Hz",
                plot.title,
                plot.magnitude.len(),
                plot.magnitude.first().copied().unwrap_or_default(),
                magnitude,
                frequency
            ),
            None => info!("[spectrum] {}: {} bins", plot.title, plot.magnitude.len()),
        }
        Ok(())
    }
}

/// Sink writing every plot as a pretty-printed JSON file into a directory.
///
/// Files are numbered in emission order and named after the plot kind and
/// title: `01_time_rectangular_pulse.json`, `02_time_unit_step.json`, ...,
/// `04_spectrum_rectangular_pulse.json`.
#[derive(Debug)]
pub struct JsonSink {
    directory: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonSink {
    /// Create the sink, creating `directory` if needed.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)
            .with_context(|| format!("Failed to create plot directory {:?}", directory))?;
        Ok(Self {
            directory,
            written: Vec::new(),
        })
    }

    /// Paths of the files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write<T: Serialize>(&mut self, kind: &str, title: &str, plot: &T) -> Result<()> {
        let name = format!("{:02}_{}_{}.json", self.written.len() + 1, kind, slug(title));
        let path = self.directory.join(name);
        let json = serde_json::to_string_pretty(plot).context("Failed to serialize plot")?;
        fs::write(&path, json).with_context(|| format!("Failed to write plot to {:?}", path))?;
        debug!("Plot '{}' written to {:?}", title, path);
        self.written.push(path);
        Ok(())
    }
}

impl PlotSink for JsonSink {
    fn plot_time(&mut self, plot: &TimePlot) -> Result<()> {
        self.write("time", &plot.title, plot)
    }

    fn plot_spectrum(&mut self, plot: &SpectrumPlot) -> Result<()> {
        self.write("spectrum", &plot.title, plot)
    }
}

/// Lowercase ASCII alphanumerics, everything else collapsed to single underscores.
fn slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('_') {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{make_grid, rectangular_pulse};
    use crate::spectral::analyze;
    use tempfile::tempdir;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Sinusoid (5 Hz)"), "sinusoid_5_hz");
        assert_eq!(slug("Linearity: pulse + sinusoid"), "linearity_pulse_sinusoid");
        assert_eq!(slug("--"), "");
    }

    #[test]
    fn test_plots_have_paired_sequences() {
        let grid = make_grid(-1.0, 1.0, 64).unwrap();
        let pulse = rectangular_pulse(&grid, -0.2, 0.2).unwrap();

        let time = TimePlot::new("Pulse", &pulse);
        assert_eq!(time.time.len(), time.amplitude.len());
        assert_eq!(time.time[0], -1.0);

        let spectrum = SpectrumPlot::new("Pulse", &analyze(&pulse));
        assert_eq!(spectrum.frequency.len(), 64);
        assert_eq!(spectrum.magnitude.len(), 64);
        assert_eq!(spectrum.phase.len(), 64);
    }

    #[test]
    fn test_json_sink_writes_numbered_files() {
        let dir = tempdir().unwrap();
        let grid = make_grid(-1.0, 1.0, 16).unwrap();
        let pulse = rectangular_pulse(&grid, -0.2, 0.2).unwrap();

        let mut sink = JsonSink::new(dir.path().join("plots")).unwrap();
        sink.plot_time(&TimePlot::new("Rectangular pulse", &pulse)).unwrap();
        sink.plot_spectrum(&SpectrumPlot::new("Pulse", &analyze(&pulse)))
            .unwrap();

        let written = sink.written();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("01_time_rectangular_pulse.json"));
        assert!(written[1].ends_with("02_spectrum_pulse.json"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&written[1]).unwrap()).unwrap();
        assert_eq!(value["title"], "Pulse");
        assert_eq!(value["magnitude"].as_array().unwrap().len(), 16);
    }
}
