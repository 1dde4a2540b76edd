// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Fourier Property Checks
//!
//! Numerical verification of the textbook properties of the discrete
//! Fourier transform on concrete signals. Each check runs the analyzer on
//! the signals involved and reports the largest deviation it observed
//! against the value the property predicts.
//!
//! | Property | Prediction |
//! |----------|------------|
//! | Linearity | `F(a + b) = F(a) + F(b)` |
//! | Circular time shift | `F(x rotated by s)[k] = F(x)[k] · e^(-2πi·k·s/N)` |
//! | Frequency scaling | peak of `sin(2π·c·f·t)` moves from `f` to `c·f` |
//! | DC concentration | a constant signal only has energy in bin 0 |
//! | Round trip | `F⁻¹(F(x)) = x` |

use std::f64::consts::PI;
use std::fmt;

use log::{debug, info, warn};
use rustfft::num_complex::Complex64;
use serde::Serialize;

use super::fft::{analyze, inverse};
use crate::error::Result;
use crate::signal::{sinusoid, sum_signals, time_shift, SamplingGrid, Signal};

/// The Fourier transform properties that can be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Linearity,
    TimeShift,
    FrequencyScaling,
    DcConcentration,
    RoundTrip,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Linearity => "linearity",
            Property::TimeShift => "time shift",
            Property::FrequencyScaling => "frequency scaling",
            Property::DcConcentration => "DC concentration",
            Property::RoundTrip => "round trip",
        };
        f.write_str(name)
    }
}

/// Outcome of one property check
#[derive(Debug, Clone, Serialize)]
pub struct PropertyCheck {
    pub property: Property,
    pub passed: bool,
    /// Largest deviation from the predicted value (Hz for frequency scaling)
    pub max_deviation: f64,
    /// Human readable summary
    pub detail: String,
}

impl PropertyCheck {
    fn new(property: Property, passed: bool, max_deviation: f64, detail: String) -> Self {
        if passed {
            info!("{} holds: {}", property, detail);
        } else {
            warn!("{} violated: {}", property, detail);
        }
        Self {
            property,
            passed,
            max_deviation,
            detail,
        }
    }
}

fn max_abs_diff<I>(deviations: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    deviations.into_iter().fold(0.0, f64::max)
}

/// `analyze(a + b)` against `analyze(a) + analyze(b)`, bin by bin on the complex coefficients.
///
/// # Errors
///
/// Fails when `a` and `b` do not share the same grid.
pub fn check_linearity(a: &Signal, b: &Signal, tolerance: f64) -> Result<PropertyCheck> {
    let combined = sum_signals(a, b)?;
    let spectrum_a = analyze(a);
    let spectrum_b = analyze(b);
    let spectrum_sum = analyze(&combined);

    let deviation = max_abs_diff(
        spectrum_sum
            .coefficients
            .iter()
            .zip(spectrum_a.coefficients.iter().zip(&spectrum_b.coefficients))
            .map(|(&s, (&x, &y))| (s - (x + y)).norm()),
    );

    Ok(PropertyCheck::new(
        Property::Linearity,
        deviation <= tolerance,
        deviation,
        format!(
            "max |F(a+b) - F(a) - F(b)| = {:.3e} over {} bins (tolerance {:.1e})",
            deviation,
            spectrum_sum.len(),
            tolerance
        ),
    ))
}

/// Circular shift by `sample_offset` keeps the magnitudes and adds the phase
/// ramp `-2π·k·s/N`.
///
/// The ramp is checked on the complex coefficients rather than on the phase
/// sequence itself, so bins whose phase is numerically arbitrary (near-zero
/// magnitude) do not need special handling.
pub fn check_time_shift(signal: &Signal, sample_offset: isize, tolerance: f64) -> PropertyCheck {
    let shifted = time_shift(signal, sample_offset);
    let original = analyze(signal);
    let moved = analyze(&shifted);
    let n = original.len() as f64;

    let magnitude_deviation = max_abs_diff(
        original
            .magnitudes
            .iter()
            .zip(&moved.magnitudes)
            .map(|(a, b)| (a - b).abs()),
    );

    let ramp_deviation = max_abs_diff(
        original
            .coefficients
            .iter()
            .zip(&moved.coefficients)
            .enumerate()
            .map(|(k, (&x, &y))| {
                let angle = -2.0 * PI * k as f64 * sample_offset as f64 / n;
                (y - x * Complex64::from_polar(1.0, angle)).norm()
            }),
    );
    debug!(
        "Shift by {} samples: magnitude deviation {:.3e}, phase ramp deviation {:.3e}",
        sample_offset, magnitude_deviation, ramp_deviation
    );

    let deviation = magnitude_deviation.max(ramp_deviation);
    PropertyCheck::new(
        Property::TimeShift,
        deviation <= tolerance,
        deviation,
        format!(
            "shift of {} samples: magnitude deviation {:.3e}, phase ramp deviation {:.3e} (tolerance {:.1e})",
            sample_offset, magnitude_deviation, ramp_deviation, tolerance
        ),
    )
}

/// The spectral peak of `sin(2π·f·t)` sits within one bin of `f`, and within
/// one bin of `factor·f` once the frequency is scaled.
///
/// The check fails when `factor·f` reaches the Nyquist frequency, since the
/// peak then aliases.
pub fn check_frequency_scaling(
    grid: &SamplingGrid,
    frequency_hz: f64,
    factor: f64,
) -> Result<PropertyCheck> {
    let scaled_hz = frequency_hz * factor;
    let base = analyze(&sinusoid(grid, frequency_hz, 0.0)?);
    let scaled = analyze(&sinusoid(grid, scaled_hz, 0.0)?);

    let resolution = base.resolution();
    let nyquist = base.nyquist();
    let base_peak = base.peak_frequency()?;
    let scaled_peak = scaled.peak_frequency()?;

    let deviation = (base_peak - frequency_hz)
        .abs()
        .max((scaled_peak - scaled_hz).abs());
    let below_nyquist = scaled_hz.abs() < nyquist;

    let mut detail = format!(
        "peak {:.3} Hz for {} Hz, peak {:.3} Hz for {} Hz (bin width {:.3} Hz)",
        base_peak, frequency_hz, scaled_peak, scaled_hz, resolution
    );
    if !below_nyquist {
        detail.push_str(&format!(", {} Hz aliases above Nyquist {:.2} Hz", scaled_hz, nyquist));
    }

    Ok(PropertyCheck::new(
        Property::FrequencyScaling,
        below_nyquist && deviation <= resolution,
        deviation,
        detail,
    ))
}

/// All spectral energy of the signal sits in the DC bin.
///
/// Meaningful for constant signals; any other signal fails.
pub fn check_dc_concentration(signal: &Signal, tolerance: f64) -> PropertyCheck {
    let spectrum = analyze(signal);
    let leakage = max_abs_diff(spectrum.magnitudes.iter().skip(1).copied());

    PropertyCheck::new(
        Property::DcConcentration,
        leakage <= tolerance,
        leakage,
        format!(
            "DC magnitude {:.3}, largest other bin {:.3e} (tolerance {:.1e})",
            spectrum.magnitudes[0], leakage, tolerance
        ),
    )
}

/// Inverse transform of the spectrum reproduces the samples.
pub fn check_round_trip(signal: &Signal, tolerance: f64) -> PropertyCheck {
    let restored = inverse(&analyze(signal));
    let deviation = max_abs_diff(
        restored
            .iter()
            .zip(signal.amplitude())
            .map(|(a, b)| (a - b).abs()),
    );

    PropertyCheck::new(
        Property::RoundTrip,
        deviation <= tolerance,
        deviation,
        format!(
            "max |x - F⁻¹(F(x))| = {:.3e} over {} samples (tolerance {:.1e})",
            deviation,
            signal.len(),
            tolerance
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignalError;
    use crate::signal::{make_grid, rectangular_pulse, unit_step};

    fn demo_grid() -> SamplingGrid {
        make_grid(-1.0, 1.0, 500).unwrap()
    }

    #[test]
    fn test_linearity_pulse_plus_sine() {
        let grid = demo_grid();
        let pulse = rectangular_pulse(&grid, -0.2, 0.2).unwrap();
        let sine = sinusoid(&grid, 5.0, 0.0).unwrap();

        let check = check_linearity(&pulse, &sine, 1e-9).unwrap();
        assert!(check.passed, "{}", check.detail);
        assert_eq!(check.property, Property::Linearity);
    }

    #[test]
    fn test_linearity_rejects_foreign_grid() {
        let pulse = rectangular_pulse(&demo_grid(), -0.2, 0.2).unwrap();
        let other = make_grid(0.0, 2.0, 500).unwrap();
        let sine = sinusoid(&other, 5.0, 0.0).unwrap();

        assert!(matches!(
            check_linearity(&pulse, &sine, 1e-9),
            Err(SignalError::GridMismatch { .. })
        ));
    }

    #[test]
    fn test_time_shift_of_pulse() {
        let pulse = rectangular_pulse(&demo_grid(), -0.2, 0.2).unwrap();
        for offset in [50, -17, 0, 499, 550] {
            let check = check_time_shift(&pulse, offset, 1e-9);
            assert!(check.passed, "offset {}: {}", offset, check.detail);
        }
    }

    #[test]
    fn test_frequency_scaling_doubling() {
        let check = check_frequency_scaling(&demo_grid(), 5.0, 2.0).unwrap();
        assert!(check.passed, "{}", check.detail);
        assert!(check.max_deviation < 0.5);
    }

    #[test]
    fn test_frequency_scaling_fails_past_nyquist() {
        // Nyquist is 124.75 Hz on the demo grid
        let check = check_frequency_scaling(&demo_grid(), 100.0, 2.0).unwrap();
        assert!(!check.passed);
        assert!(check.detail.contains("Nyquist"));
    }

    #[test]
    fn test_dc_concentration() {
        let grid = demo_grid();
        let constant = unit_step(&grid, -5.0).unwrap();
        assert!(check_dc_concentration(&constant, 1e-9).passed);

        let step = unit_step(&grid, 0.0).unwrap();
        assert!(!check_dc_concentration(&step, 1e-9).passed);
    }

    #[test]
    fn test_round_trip() {
        let grid = demo_grid();
        let sum = sum_signals(
            &rectangular_pulse(&grid, -0.2, 0.2).unwrap(),
            &sinusoid(&grid, 5.0, 0.3).unwrap(),
        )
        .unwrap();
        let check = check_round_trip(&sum, 1e-9);
        assert!(check.passed, "{}", check.detail);
    }
}
