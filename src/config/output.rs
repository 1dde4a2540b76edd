// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Output settings

use serde::{Deserialize, Serialize};

/// Where plots go and how strictly the property checks are judged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one JSON file per plot.
    ///
    /// When unset, plots are only summarised in the log.
    #[serde(default)]
    pub directory: Option<String>,

    /// Absolute tolerance used by the linearity, time-shift and round-trip checks
    pub tolerance: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            tolerance: 1e-9,
        }
    }
}
