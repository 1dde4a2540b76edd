// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use super::fft::{analyze, frequency_axis, inverse, DirectDFT, FFTAnalyzer, SpectralAnalyzer};
use crate::signal::{make_grid, rectangular_pulse, sinusoid, unit_step, SamplingGrid, Signal};
use std::f64::consts::PI;

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_grid() -> SamplingGrid {
        make_grid(-1.0, 1.0, 500).unwrap()
    }

    #[test]
    fn test_frequency_axis_even_length() {
        // step 0.25, N = 4 -> bin width 1 Hz, Nyquist bin reported as negative
        assert_eq!(frequency_axis(4, 0.25), vec![0.0, 1.0, -2.0, -1.0]);
    }

    #[test]
    fn test_frequency_axis_odd_length() {
        let axis = frequency_axis(5, 0.2);
        let expected = [0.0, 1.0, 2.0, -2.0, -1.0];
        for (a, e) in axis.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{:?}", axis);
        }
    }

    #[test]
    fn test_spectrum_shapes() {
        let grid = demo_grid();
        let spectrum = analyze(&rectangular_pulse(&grid, -0.2, 0.2).unwrap());

        assert_eq!(spectrum.len(), 500);
        assert_eq!(spectrum.frequencies.len(), 500);
        assert_eq!(spectrum.magnitudes.len(), 500);
        assert_eq!(spectrum.phases.len(), 500);
        assert!((spectrum.resolution() - 249.5 / 500.0).abs() < 1e-12);
        assert!((spectrum.nyquist() - 124.75).abs() < 1e-9);

        // DC of a pulse is its number of ones
        assert!((spectrum.magnitudes[0] - 100.0).abs() < 1e-9);
        assert!(spectrum.frequencies[250] < 0.0);
        assert!((spectrum.frequencies[250].abs() - spectrum.nyquist()).abs() < 1e-9);
    }

    #[test]
    fn test_phases_in_range_and_magnitudes_non_negative() {
        let grid = demo_grid();
        let spectrum = analyze(&unit_step(&grid, 0.0).unwrap());

        for (&m, &p) in spectrum.magnitudes.iter().zip(&spectrum.phases) {
            assert!(m >= 0.0);
            assert!(p > -PI && p <= PI, "phase {} out of range", p);
        }
    }

    #[test]
    fn test_constant_signal_energy_in_dc() {
        let grid = demo_grid();
        let constant = Signal::from_samples(grid, vec![0.75; 500]).unwrap();
        let spectrum = analyze(&constant);

        assert!((spectrum.magnitudes[0] - 375.0).abs() < 1e-9);
        assert!(spectrum.magnitudes[1..].iter().all(|&m| m < 1e-9));
    }

    #[test]
    fn test_sinusoid_peaks_follow_frequency() {
        let grid = demo_grid();

        let five = analyze(&sinusoid(&grid, 5.0, 0.0).unwrap());
        let ten = analyze(&sinusoid(&grid, 10.0, 0.0).unwrap());

        let closest = |target: f64, freqs: &[f64]| {
            (0..freqs.len())
                .min_by(|&a, &b| (freqs[a] - target).abs().total_cmp(&(freqs[b] - target).abs()))
                .unwrap()
        };

        assert_eq!(five.peak_bin().unwrap(), closest(5.0, &five.frequencies));
        assert_eq!(ten.peak_bin().unwrap(), closest(10.0, &ten.frequencies));
        assert!((five.peak_frequency().unwrap() - 5.0).abs() <= five.resolution());
        assert!((ten.peak_frequency().unwrap() - 10.0).abs() <= ten.resolution());
    }

    #[test]
    fn test_peak_needs_positive_bin() {
        let grid = make_grid(0.0, 1.0, 2).unwrap();
        let spectrum = analyze(&Signal::from_samples(grid, vec![1.0, -1.0]).unwrap());
        assert!(spectrum.peak_bin().is_err());
    }

    #[test]
    fn test_inverse_restores_samples() {
        let grid = demo_grid();
        let sine = sinusoid(&grid, 7.5, 0.4).unwrap();
        let restored = inverse(&analyze(&sine));

        assert_eq!(restored.len(), sine.len());
        for (a, b) in restored.iter().zip(sine.amplitude()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fft_matches_direct_dft() {
        let grid = make_grid(-1.0, 1.0, 63).unwrap();
        let signal = rectangular_pulse(&grid, -0.3, 0.1).unwrap();

        let fast = FFTAnalyzer::new().analyze(&signal);
        let slow = DirectDFT.analyze(&signal);

        assert_eq!(fast.frequencies, slow.frequencies);
        for (a, b) in fast.coefficients.iter().zip(&slow.coefficients) {
            assert!((a - b).norm() < 1e-9, "{} vs {}", a, b);
        }

        let restored = DirectDFT.inverse(&slow);
        for (a, b) in restored.iter().zip(signal.amplitude()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_analyzer_can_be_reused() {
        let grid = demo_grid();
        let mut analyzer = FFTAnalyzer::new();
        let first = analyzer.analyze(&sinusoid(&grid, 5.0, 0.0).unwrap());
        let second = analyzer.analyze(&sinusoid(&grid, 5.0, 0.0).unwrap());
        assert_eq!(first.magnitudes, second.magnitudes);
    }
}
