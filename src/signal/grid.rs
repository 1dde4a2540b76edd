// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Sampling Grid
//!
//! Evenly spaced time samples shared by every signal of a session.
//! A grid is three numbers; sample positions are derived on demand, so the
//! type is `Copy` and can be handed to every generator without cloning buffers.

use std::fmt;

use serde::Serialize;

use crate::error::{ensure_finite, Result, SignalError};

/// Evenly spaced sample positions from `start` to `stop`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingGrid {
    start: f64,
    stop: f64,
    count: usize,
}

/// Build a sampling grid of `count` points over `[start, stop]`.
///
/// # Errors
///
/// [`SignalError::InvalidRange`] when `count < 2`, `stop <= start` or the
/// span is too small to give distinct samples,
/// [`SignalError::NonFinite`] when a bound is NaN or infinite, or when the
/// span `stop - start` overflows.
///
/// # Examples
///
/// ```
/// use rust_fourier_properties::signal::make_grid;
///
/// let grid = make_grid(-1.0, 1.0, 500).unwrap();
/// assert_eq!(grid.count(), 500);
/// assert!((grid.step() - 1.0 / 249.5).abs() < 1e-12);
/// ```
pub fn make_grid(start: f64, stop: f64, count: usize) -> Result<SamplingGrid> {
    ensure_finite("start", start)?;
    ensure_finite("stop", stop)?;
    if count < 2 || stop <= start {
        return Err(SignalError::InvalidRange { start, stop, count });
    }

    let grid = SamplingGrid { start, stop, count };
    let step = ensure_finite("step", grid.step())?;
    if step <= 0.0 || start + step <= start {
        return Err(SignalError::InvalidRange { start, stop, count });
    }
    Ok(grid)
}

impl SamplingGrid {
    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Number of samples
    pub fn count(&self) -> usize {
        self.count
    }

    /// Spacing between consecutive samples, `(stop - start) / (count - 1)`
    pub fn step(&self) -> f64 {
        (self.stop - self.start) / (self.count - 1) as f64
    }

    /// Sampling rate in Hz, the reciprocal of [`step`](Self::step)
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.step()
    }

    /// Position of sample `index`.
    ///
    /// The first and last samples are exactly `start` and `stop`; rounding
    /// never moves the endpoints.
    pub fn sample(&self, index: usize) -> f64 {
        if index == 0 {
            self.start
        } else if index + 1 == self.count {
            self.stop
        } else {
            self.start + index as f64 * self.step()
        }
    }

    /// Iterate over every sample position in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.sample(i))
    }

    /// All sample positions collected into a vector (the time axis of a plot).
    pub fn samples(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Check that `other` is the same grid, failing with [`SignalError::GridMismatch`] otherwise.
    pub fn ensure_compatible(&self, other: &SamplingGrid) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(SignalError::GridMismatch {
                left: *self,
                right: *other,
            })
        }
    }
}

impl fmt::Display for SamplingGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x {} (step {:.6})",
            self.start,
            self.stop,
            self.count,
            self.step()
        )
    }
}
