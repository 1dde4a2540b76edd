// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Rust Fourier properties library
//!
//! Builds canonical one-dimensional signals (rectangular pulse, unit step,
//! sinusoid) on a shared sampling grid, computes their discrete Fourier
//! spectra and verifies the linearity, time-shift and frequency-scaling
//! properties of the transform on them.
//!
//! Data flows one way: [`signal`] → [`spectral`] → [`visualization`].

pub mod config;
pub mod demonstration;
pub mod error;
pub mod signal;
pub mod spectral;
pub mod visualization;

pub use demonstration::{run_demonstration, DemonstrationReport};
pub use error::{Result, SignalError};
