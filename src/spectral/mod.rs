// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! # Spectral Analysis Module
//!
//! This module computes the discrete Fourier spectrum of a sampled signal and
//! derives its magnitude and phase, along with a frequency axis that pairs
//! exactly with the transform bins.
//!
//! ## Architecture
//!
//! - `SpectralAnalyzer` trait defines the forward and inverse transforms
//! - `FFTAnalyzer` implements it with `rustfft`
//! - `DirectDFT` evaluates the DFT sum directly, as a reference
//! - `properties` checks linearity, time shift and frequency scaling on real signals
//!
//! ## Usage
//!
//! ```
//! use rust_fourier_properties::signal::{make_grid, sinusoid};
//! use rust_fourier_properties::spectral;
//!
//! let grid = make_grid(-1.0, 1.0, 500).unwrap();
//! let sine = sinusoid(&grid, 5.0, 0.0).unwrap();
//!
//! let spectrum = spectral::analyze(&sine);
//! let peak = spectrum.peak_frequency().unwrap();
//! assert!((peak - 5.0).abs() <= spectrum.resolution());
//! ```

pub mod fft;
pub mod properties;

#[cfg(test)]
mod fft_test;

pub use fft::{analyze, frequency_axis, inverse, DirectDFT, FFTAnalyzer, SpectralAnalyzer, Spectrum};
pub use properties::{Property, PropertyCheck};
