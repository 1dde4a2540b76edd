// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! FFT implementation for spectral analysis
//!
//! The spectrum keeps the full two-sided output of the forward transform in
//! its native order: index 0 is the DC term, the first half holds the
//! positive frequencies and the upper half the negative ones in wrap-around
//! order (for even `N` the Nyquist term sits at `N/2`). The frequency axis is
//! laid out in the same order so `frequency[i]` always pairs with bin `i`.

use std::f64::consts::PI;

use log::debug;
use rustfft::{num_complex::Complex64, FftPlanner};

use crate::error::{Result, SignalError};
use crate::signal::{SamplingGrid, Signal};

/// Trait for implementing spectral analysis
pub trait SpectralAnalyzer {
    /// Forward transform of the signal's amplitude sequence
    fn analyze(&mut self, signal: &Signal) -> Spectrum;

    /// Inverse transform back to real time-domain samples, normalised by `1/N`
    fn inverse(&mut self, spectrum: &Spectrum) -> Vec<f64>;
}

/// Data resulting from spectral analysis
///
/// All sequences have one entry per sample of the analysed signal.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Bin frequencies in Hz, `k / (N·step)` in transform order
    pub frequencies: Vec<f64>,
    /// `|X[k]|`
    pub magnitudes: Vec<f64>,
    /// `atan2(Im X[k], Re X[k])` in `(-π, π]`
    pub phases: Vec<f64>,
    /// Raw transform output
    pub coefficients: Vec<Complex64>,
    /// Grid of the analysed signal
    pub grid: SamplingGrid,
}

impl Spectrum {
    /// Build the magnitude/phase decomposition and frequency axis from raw coefficients.
    fn from_coefficients(coefficients: Vec<Complex64>, grid: SamplingGrid) -> Self {
        let n = coefficients.len();
        let frequencies = frequency_axis(n, grid.step());
        let magnitudes = coefficients.iter().map(|c| c.norm()).collect();
        let phases = coefficients.iter().map(|c| wrap_phase(c.arg())).collect();

        Self {
            frequencies,
            magnitudes,
            phases,
            coefficients,
            grid,
        }
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Width of one frequency bin, `1 / (N·step)`
    pub fn resolution(&self) -> f64 {
        1.0 / (self.len() as f64 * self.grid.step())
    }

    /// Half the sampling rate, `1 / (2·step)`
    pub fn nyquist(&self) -> f64 {
        0.5 * self.grid.sample_rate()
    }

    /// Index of the strongest positive-frequency bin (DC and negative frequencies excluded).
    ///
    /// # Errors
    ///
    /// [`SignalError::EmptySpectrum`] if the spectrum has no positive-frequency bin.
    pub fn peak_bin(&self) -> Result<usize> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .enumerate()
            .filter(|(_, (f, _))| **f > 0.0)
            .max_by(|(_, (_, a)), (_, (_, b))| a.total_cmp(b))
            .map(|(i, _)| i)
            .ok_or(SignalError::EmptySpectrum)
    }

    /// Frequency of [`peak_bin`](Self::peak_bin) in Hz
    pub fn peak_frequency(&self) -> Result<f64> {
        Ok(self.frequencies[self.peak_bin()?])
    }
}

/// Frequency of each transform bin for `n` samples spaced by `step`.
///
/// Bins `0..=(n-1)/2` are non-negative, the rest are negative frequencies
/// counting up towards zero.
pub fn frequency_axis(n: usize, step: f64) -> Vec<f64> {
    let span = n as f64 * step;
    let positive = (n + 1) / 2;
    (0..n)
        .map(|k| {
            let index = if k < positive {
                k as f64
            } else {
                k as f64 - n as f64
            };
            index / span
        })
        .collect()
}

// atan2 returns -π for a negative real part with a negative-zero imaginary part
fn wrap_phase(phase: f64) -> f64 {
    if phase <= -PI {
        phase + 2.0 * PI
    } else {
        phase
    }
}

fn to_complex(samples: &[f64]) -> Vec<Complex64> {
    samples.iter().map(|&x| Complex64::new(x, 0.0)).collect()
}

/// FFT-based spectral analyzer
///
/// Plans are cached by the inner planner, so reusing one analyzer across
/// several signals of the same length only plans once. Spectra themselves
/// are never cached.
pub struct FFTAnalyzer {
    planner: FftPlanner<f64>,
}

impl FFTAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }
}

impl Default for FFTAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralAnalyzer for FFTAnalyzer {
    fn analyze(&mut self, signal: &Signal) -> Spectrum {
        let mut buffer = to_complex(signal.amplitude());

        // Execute FFT in-place
        let fft = self.planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);

        let spectrum = Spectrum::from_coefficients(buffer, *signal.grid());
        debug!(
            "FFT of {} samples: resolution {:.4} Hz, Nyquist {:.2} Hz",
            spectrum.len(),
            spectrum.resolution(),
            spectrum.nyquist()
        );
        spectrum
    }

    fn inverse(&mut self, spectrum: &Spectrum) -> Vec<f64> {
        let mut buffer = spectrum.coefficients.clone();
        let n = buffer.len();

        let ifft = self.planner.plan_fft_inverse(n);
        ifft.process(&mut buffer);

        // rustfft leaves the inverse unnormalised
        buffer.iter().map(|c| c.re / n as f64).collect()
    }
}

/// Direct `O(N²)` evaluation of the DFT sum.
///
/// Slow, but free of any planning logic; useful as an independent reference
/// for the FFT path on small grids.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectDFT;

impl DirectDFT {
    fn transform(input: &[Complex64], sign: f64) -> Vec<Complex64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        // reduce k·j mod n first to keep the angle small
                        let angle = sign * 2.0 * PI * ((k * j) % n) as f64 / n as f64;
                        x * Complex64::from_polar(1.0, angle)
                    })
                    .sum::<Complex64>()
            })
            .collect()
    }
}

impl SpectralAnalyzer for DirectDFT {
    fn analyze(&mut self, signal: &Signal) -> Spectrum {
        let coefficients = Self::transform(&to_complex(signal.amplitude()), -1.0);
        Spectrum::from_coefficients(coefficients, *signal.grid())
    }

    fn inverse(&mut self, spectrum: &Spectrum) -> Vec<f64> {
        let n = spectrum.len() as f64;
        Self::transform(&spectrum.coefficients, 1.0)
            .iter()
            .map(|c| c.re / n)
            .collect()
    }
}

/// Analyze a signal with a fresh FFT analyzer.
pub fn analyze(signal: &Signal) -> Spectrum {
    FFTAnalyzer::new().analyze(signal)
}

/// Inverse-transform a spectrum with a fresh FFT analyzer.
pub fn inverse(spectrum: &Spectrum) -> Vec<f64> {
    FFTAnalyzer::new().inverse(spectrum)
}
