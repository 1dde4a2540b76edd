// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error types for grid construction, signal generation and spectral analysis

use thiserror::Error;

use crate::signal::SamplingGrid;

/// Result type for signal and spectrum operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors raised by the numeric core.
///
/// Every operation is pure and deterministic, so none of these are retried:
/// they are returned to the caller as soon as they are detected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// The grid needs at least two points and a strictly increasing range.
    #[error("Invalid sampling range: [{start}, {stop}] with {count} points (need count >= 2 and stop > start)")]
    InvalidRange { start: f64, stop: f64, count: usize },

    /// Two signals combined element-wise were sampled on different grids.
    #[error("Grid mismatch: {left} vs {right}")]
    GridMismatch {
        left: SamplingGrid,
        right: SamplingGrid,
    },

    #[error("Invalid pulse bounds: low ({low}) must be lower than high ({high})")]
    InvalidPulseBounds { low: f64, high: f64 },

    /// A numeric parameter was NaN or infinite.
    #[error("Parameter '{parameter}' must be finite, got {value}")]
    NonFinite {
        parameter: &'static str,
        value: f64,
    },

    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("Spectrum has no bins")]
    EmptySpectrum,
}

/// Reject NaN and infinities for the named parameter.
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SignalError::NonFinite { parameter, value })
    }
}
