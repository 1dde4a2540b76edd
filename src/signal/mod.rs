// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! # Signal Module
//!
//! Time-domain side of the analysis: the shared [`SamplingGrid`] and the
//! generators producing [`Signal`]s on it.
//!
//! All signals that are compared or combined must come from the same grid,
//! otherwise their frequency axes are not comparable; [`sum_signals`]
//! enforces this.
//!
//! ## Usage
//!
//! ```
//! use rust_fourier_properties::signal::{self, make_grid};
//!
//! let grid = make_grid(-1.0, 1.0, 500).unwrap();
//! let pulse = signal::rectangular_pulse(&grid, -0.2, 0.2).unwrap();
//! let sine = signal::sinusoid(&grid, 5.0, 0.0).unwrap();
//! let combined = signal::sum_signals(&pulse, &sine).unwrap();
//! assert_eq!(combined.len(), grid.count());
//! ```

pub mod generators;
pub mod grid;

pub use generators::{rectangular_pulse, sinusoid, sum_signals, time_shift, unit_step, Signal};
pub use grid::{make_grid, SamplingGrid};
