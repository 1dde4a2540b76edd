// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Sampling grid configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::signal::{make_grid, SamplingGrid};

/// Sampling grid shared by every signal of the demonstration.
///
/// Defaults to 500 points over `[-1, 1]` seconds, i.e. a step of `1/249.5` s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// First sample time in seconds
    pub start: f64,

    /// Last sample time in seconds (inclusive)
    pub stop: f64,

    /// Number of samples, at least 2
    pub count: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: -1.0,
            stop: 1.0,
            count: 500,
        }
    }
}

impl GridConfig {
    /// Build the sampling grid described by this section.
    pub fn build(&self) -> Result<SamplingGrid> {
        make_grid(self.start, self.stop, self.count)
    }
}
