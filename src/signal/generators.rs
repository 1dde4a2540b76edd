// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Signal Generators
//!
//! Pure functions turning a [`SamplingGrid`] into a sampled waveform:
//!
//! * [`rectangular_pulse`] - 1 inside `[low, high]`, 0 elsewhere
//! * [`unit_step`] - Heaviside step at a threshold
//! * [`sinusoid`] - `sin(2π·f·t + φ)`
//! * [`time_shift`] - circular rotation of an existing signal
//! * [`sum_signals`] - element-wise sum of two signals on the same grid
//!
//! None of them mutate their inputs; every call returns a fresh [`Signal`].

use std::f64::consts::PI;

use serde::Serialize;

use super::grid::SamplingGrid;
use crate::error::{ensure_finite, Result, SignalError};

/// A sampled amplitude sequence bound to the grid it was evaluated on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    grid: SamplingGrid,
    amplitude: Vec<f64>,
}

impl Signal {
    /// Wrap raw samples, checking that there is exactly one per grid point.
    pub fn from_samples(grid: SamplingGrid, amplitude: Vec<f64>) -> Result<Self> {
        if amplitude.len() != grid.count() {
            return Err(SignalError::SampleCountMismatch {
                expected: grid.count(),
                actual: amplitude.len(),
            });
        }
        Ok(Self { grid, amplitude })
    }

    fn evaluate<F>(grid: &SamplingGrid, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            grid: *grid,
            amplitude: grid.iter().map(f).collect(),
        }
    }

    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }
}

/// Rectangular pulse: amplitude 1 where `low <= t <= high`, 0 elsewhere.
///
/// Bounds outside the grid are accepted and simply give an all-zero or
/// all-one signal.
///
/// # Errors
///
/// [`SignalError::InvalidPulseBounds`] when `low >= high`.
pub fn rectangular_pulse(grid: &SamplingGrid, low: f64, high: f64) -> Result<Signal> {
    ensure_finite("low", low)?;
    ensure_finite("high", high)?;
    if low >= high {
        return Err(SignalError::InvalidPulseBounds { low, high });
    }
    Ok(Signal::evaluate(grid, |t| {
        if (low..=high).contains(&t) {
            1.0
        } else {
            0.0
        }
    }))
}

/// Unit step: amplitude 1 where `t >= threshold`, 0 elsewhere.
pub fn unit_step(grid: &SamplingGrid, threshold: f64) -> Result<Signal> {
    ensure_finite("threshold", threshold)?;
    Ok(Signal::evaluate(grid, |t| if t >= threshold { 1.0 } else { 0.0 }))
}

/// Sinusoid `sin(2π·frequency_hz·t + phase)`.
///
/// No Nyquist check is made: frequencies above half the sampling rate alias,
/// and that is a legitimate thing to look at.
///
/// # Examples
///
/// ```
/// use rust_fourier_properties::signal::{make_grid, sinusoid};
///
/// let grid = make_grid(0.0, 1.0, 101).unwrap();
/// let sine = sinusoid(&grid, 1.0, 0.0).unwrap();
/// assert!((sine.amplitude()[25] - 1.0).abs() < 1e-12);
/// ```
pub fn sinusoid(grid: &SamplingGrid, frequency_hz: f64, phase: f64) -> Result<Signal> {
    ensure_finite("frequency_hz", frequency_hz)?;
    ensure_finite("phase", phase)?;
    Ok(Signal::evaluate(grid, |t| {
        (2.0 * PI * frequency_hz * t + phase).sin()
    }))
}

/// Circularly rotate a signal by `sample_offset` positions.
///
/// A positive offset delays the signal and the samples pushed past the end
/// wrap around to the front; a negative offset advances it. This is a
/// circular shift, not a zero-padded one.
pub fn time_shift(signal: &Signal, sample_offset: isize) -> Signal {
    let mut amplitude = signal.amplitude.clone();
    let n = amplitude.len();
    if n > 0 {
        let offset = sample_offset.rem_euclid(n as isize) as usize;
        amplitude.rotate_right(offset);
    }
    Signal {
        grid: signal.grid,
        amplitude,
    }
}

/// Element-wise sum of two signals.
///
/// # Errors
///
/// [`SignalError::GridMismatch`] when the two signals were not sampled on the same grid.
pub fn sum_signals(a: &Signal, b: &Signal) -> Result<Signal> {
    a.grid.ensure_compatible(&b.grid)?;
    Ok(Signal {
        grid: a.grid,
        amplitude: a
            .amplitude
            .iter()
            .zip(&b.amplitude)
            .map(|(x, y)| x + y)
            .collect(),
    })
}
