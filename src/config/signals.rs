// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal parameters for the demonstration sequence

use serde::{Deserialize, Serialize};

/// Parameters of the signals built by the demonstration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalsConfig {
    /// Start of the rectangular pulse in seconds
    pub pulse_low: f64,

    /// End of the rectangular pulse in seconds
    pub pulse_high: f64,

    /// Time at which the unit step switches on
    pub step_threshold: f64,

    /// Frequency of the base sinusoid in Hz
    pub frequency_hz: f64,

    /// Frequency of the scaled sinusoid in Hz.
    ///
    /// The frequency-scaling check uses `scaled_frequency_hz / frequency_hz`
    /// as the scaling factor.
    pub scaled_frequency_hz: f64,

    /// Circular shift applied to the pulse, in samples (positive delays)
    pub shift_samples: isize,
}

impl Default for SignalsConfig {
    fn default() -> Self {
        Self {
            pulse_low: -0.2,
            pulse_high: 0.2,
            step_threshold: 0.0,
            frequency_hz: 5.0,
            scaled_frequency_hz: 10.0,
            shift_samples: 50,
        }
    }
}
