// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Tests for the Stimulation Pulse Generator
//!
//! This module validates the single-period pulse synthesis: buffer sizing,
//! waveform phase conventions, amplitude scaling, polarity inversion, and
//! argument validation.

#[cfg(test)]
mod tests {
    use crate::synthesis::{generate_pulse, FirstPeakPolarity, PulseError, WaveformShape};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const SHAPES: [WaveformShape; 3] = [
        WaveformShape::Square,
        WaveformShape::Sawtooth,
        WaveformShape::Sinusoidal,
    ];

    // ========================================
    // BUFFER SIZING
    // ========================================

    #[test]
    fn test_pulse_length_is_floor_of_rate_times_duration() {
        for shape in SHAPES {
            let pulse =
                generate_pulse(16000, 0.5, 1000.0, FirstPeakPolarity::Positive, shape).unwrap();
            assert_eq!(pulse.len(), 8000, "shape {:?}", shape);

            // Non-integral product truncates toward zero
            let pulse =
                generate_pulse(1000, 0.0015, 1.0, FirstPeakPolarity::Positive, shape).unwrap();
            assert_eq!(pulse.len(), 1, "shape {:?}", shape);
        }
    }

    #[test]
    fn test_single_sample_pulse() {
        let pulse = generate_pulse(
            1,
            1.0,
            2.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Square,
        )
        .unwrap();
        assert_eq!(pulse, vec![1.0]);
    }

    // ========================================
    // WAVEFORM PHASE CONVENTIONS
    // ========================================

    #[test]
    fn test_square_pulse_starts_at_positive_maximum() {
        let pulse = generate_pulse(
            1000,
            1.0,
            1000.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Square,
        )
        .unwrap();
        assert_eq!(pulse[0], 500.0);
        assert_eq!(pulse[999], -500.0);
    }

    #[test]
    fn test_square_pulse_has_one_transition_at_midpoint() {
        let pulse = generate_pulse(
            1000,
            1.0,
            1000.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Square,
        )
        .unwrap();

        let transitions: Vec<usize> = (1..pulse.len())
            .filter(|&i| pulse[i].signum() != pulse[i - 1].signum())
            .collect();
        assert_eq!(transitions, vec![500]);

        // First half positive, second half negative
        assert!(pulse[..500].iter().all(|&s| s == 500.0));
        assert!(pulse[500..].iter().all(|&s| s == -500.0));
    }

    #[test]
    fn test_sawtooth_pulse_ramps_from_negative_to_positive() {
        let pulse = generate_pulse(
            1000,
            1.0,
            1000.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Sawtooth,
        )
        .unwrap();

        assert_eq!(pulse[0], -500.0);
        assert_relative_eq!(pulse[999], 499.0, epsilon = 1e-9);
        // Strictly increasing over the whole period
        assert!(pulse.windows(2).all(|w| w[1] > w[0]));
        // Linear: constant increment between consecutive samples
        let step = pulse[1] - pulse[0];
        for w in pulse.windows(2) {
            assert_abs_diff_eq!(w[1] - w[0], step, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sinusoidal_pulse_starts_at_zero_and_peaks_at_first_quarter() {
        let pulse = generate_pulse(
            1000,
            1.0,
            2.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Sinusoidal,
        )
        .unwrap();

        assert_eq!(pulse.len(), 1000);
        assert_abs_diff_eq!(pulse[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pulse[250], 1.0, epsilon = 1e-12);

        let (peak_index, peak) = pulse
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        assert_eq!(peak_index, 250);
        assert_abs_diff_eq!(*peak, 1.0, epsilon = 1e-12);

        // Rising at the start of the period
        assert!(pulse[1] > pulse[0]);
    }

    #[test]
    fn test_sinusoidal_pulse_trough_at_three_quarters() {
        let pulse = generate_pulse(
            1000,
            1.0,
            2.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Sinusoidal,
        )
        .unwrap();
        assert_abs_diff_eq!(pulse[750], -1.0, epsilon = 1e-12);
    }

    // ========================================
    // AMPLITUDE AND POLARITY
    // ========================================

    #[test]
    fn test_amplitude_is_peak_to_peak() {
        for shape in SHAPES {
            let pulse =
                generate_pulse(1000, 1.0, 1000.0, FirstPeakPolarity::Positive, shape).unwrap();
            let max = pulse.iter().cloned().fold(f64::MIN, f64::max);
            let min = pulse.iter().cloned().fold(f64::MAX, f64::min);
            assert!(max <= 500.0 + 1e-9, "shape {:?}", shape);
            assert!(min >= -500.0 - 1e-9, "shape {:?}", shape);
            // Every shape reaches the negative extreme exactly; the sawtooth
            // stops one sample short of the positive one
            assert_relative_eq!(min, -500.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_negative_polarity_negates_every_sample() {
        for shape in SHAPES {
            let positive =
                generate_pulse(16000, 0.25, 1000.0, FirstPeakPolarity::Positive, shape).unwrap();
            let negative =
                generate_pulse(16000, 0.25, 1000.0, FirstPeakPolarity::Negative, shape).unwrap();

            assert_eq!(positive.len(), negative.len());
            for (p, n) in positive.iter().zip(negative.iter()) {
                assert_eq!(*p, -*n);
            }
        }
    }

    #[test]
    fn test_zero_amplitude_yields_silence() {
        let pulse = generate_pulse(
            1000,
            0.5,
            0.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Square,
        )
        .unwrap();
        assert!(pulse.iter().all(|&s| s == 0.0));
    }

    // ========================================
    // DETERMINISM
    // ========================================

    #[test]
    fn test_generation_is_deterministic() {
        for shape in SHAPES {
            let first =
                generate_pulse(16000, 0.5, 1000.0, FirstPeakPolarity::Positive, shape).unwrap();
            let second =
                generate_pulse(16000, 0.5, 1000.0, FirstPeakPolarity::Positive, shape).unwrap();
            assert_eq!(first, second);
        }
    }

    // ========================================
    // ARGUMENT VALIDATION
    // ========================================

    #[test]
    fn test_zero_sample_rate_is_rejected() {
        let result = generate_pulse(
            0,
            1.0,
            1000.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Square,
        );
        assert_eq!(result.unwrap_err(), PulseError::InvalidSampleRate);
    }

    #[test]
    fn test_non_positive_duration_is_rejected() {
        for duration in [0.0, -1.0] {
            let result = generate_pulse(
                16000,
                duration,
                1000.0,
                FirstPeakPolarity::Positive,
                WaveformShape::Sinusoidal,
            );
            assert_eq!(result.unwrap_err(), PulseError::InvalidDuration(duration));
        }
    }

    #[test]
    fn test_empty_pulse_is_rejected() {
        // 10 samples/s over 50 ms floors to zero samples
        let result = generate_pulse(
            10,
            0.05,
            1000.0,
            FirstPeakPolarity::Positive,
            WaveformShape::Square,
        );
        assert_eq!(result.unwrap_err(), PulseError::EmptyPulse);
    }
}
