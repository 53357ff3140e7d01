// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Stimulation Pulse Generator
//!
//! This module generates single-period stimulation pulses for transcranial
//! alternating current stimulation (tACS) signals. A pulse is exactly one
//! period of a periodic waveform, sampled over a half-open time axis
//! `[0, duration)` and scaled so that its peak-to-peak span equals the
//! requested amplitude.
//!
//! ## Supported waveform shapes
//!
//! * **Square** - 50% duty cycle, starting at the positive maximum
//! * **Sawtooth** - linear ramp from the negative to the positive extreme
//! * **Sinusoidal** - starting at zero and rising toward the positive peak
//!
//! ## Polarity
//!
//! The first-peak polarity selects the orientation of the pulse. With
//! [`FirstPeakPolarity::Negative`] the entire buffer is sign-inverted, which
//! is a global negation of the waveform rather than a phase shift.
//!
//! ## Examples
//!
//! ```
//! use rust_neurostim::synthesis::{generate_pulse, FirstPeakPolarity, WaveformShape};
//!
//! // One period of a 0.5 s square pulse at 16 kHz, 1000 μA peak-to-peak
//! let pulse = generate_pulse(
//!     16000,
//!     0.5,
//!     1000.0,
//!     FirstPeakPolarity::Positive,
//!     WaveformShape::Square,
//! )?;
//! assert_eq!(pulse.len(), 8000);
//! assert_eq!(pulse[0], 500.0);
//! # Ok::<(), rust_neurostim::synthesis::PulseError>(())
//! ```

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the pulse generator
///
/// All variants describe invalid arguments; a pulse generation call either
/// returns a complete buffer or fails before producing any samples.
#[derive(Error, Debug, PartialEq)]
pub enum PulseError {
    #[error("sample rate must be a positive number of samples per second")]
    InvalidSampleRate,
    #[error("pulse duration must be positive (got {0} s)")]
    InvalidDuration(f64),
    #[error("sample rate and pulse duration produce an empty pulse")]
    EmptyPulse,
}

/// Shape of the periodic waveform used for a stimulation pulse
///
/// The serialized names (`square`, `sawtooth`, `sinusoidal`) match the
/// values accepted in configuration files and on the command line.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum WaveformShape {
    /// Square wave with 50% duty cycle, starting at the positive maximum
    Square,
    /// Linear ramp from -1 to +1, restarting each period
    Sawtooth,
    /// Sine wave starting at zero, rising toward the positive peak
    #[default]
    Sinusoidal,
}

impl WaveformShape {
    /// Evaluate the unit-amplitude periodic kernel at a phase fraction
    ///
    /// `phase` is the position within the period, in the range `[0.0, 1.0)`.
    /// The returned value lies in `[-1.0, 1.0]`.
    pub fn sample(&self, phase: f64) -> f64 {
        match self {
            WaveformShape::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            WaveformShape::Sawtooth => 2.0 * phase - 1.0,
            WaveformShape::Sinusoidal => (std::f64::consts::TAU * phase).sin(),
        }
    }
}

/// Polarity of the first pulse hillock
///
/// A stimulation pulse can start with a positive or a negative wave. The
/// negative variant inverts every sample of the generated buffer.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPeakPolarity {
    /// The first half-cycle of the pulse has positive sign
    #[default]
    Positive,
    /// The whole waveform is sign-inverted
    Negative,
}

impl FirstPeakPolarity {
    /// Multiplicative factor applied to every generated sample
    fn factor(&self) -> f64 {
        match self {
            FirstPeakPolarity::Positive => 1.0,
            FirstPeakPolarity::Negative => -1.0,
        }
    }
}

/// Generate one period of a stimulation pulse
///
/// The pulse spans the half-open interval `[0, duration)` sampled at
/// `sample_rate`, producing exactly `floor(sample_rate * duration)` samples.
/// The base frequency is `1 / duration`, so exactly one waveform period fits
/// in the buffer. Samples are scaled by `amplitude / 2`, making `amplitude`
/// the peak-to-peak span of the pulse in μA.
///
/// ### Arguments
///
/// * `sample_rate` - Sampling rate of the pulse in samples per second
/// * `duration` - Pulse duration in seconds
/// * `amplitude` - Pulse amplitude (peak-to-peak) in μA
/// * `polarity` - Polarity of the first pulse hillock
/// * `shape` - Shape of the waveform period
///
/// ### Returns
///
/// A buffer of exactly `floor(sample_rate * duration)` samples, or a
/// [`PulseError`] if the sample rate is zero, the duration is not positive,
/// or the combination yields an empty buffer.
///
/// ### Examples
///
/// ```
/// use rust_neurostim::synthesis::{generate_pulse, FirstPeakPolarity, WaveformShape};
///
/// let pulse = generate_pulse(
///     1000,
///     1.0,
///     2.0,
///     FirstPeakPolarity::Positive,
///     WaveformShape::Sinusoidal,
/// )?;
/// assert_eq!(pulse.len(), 1000);
/// // Starts at zero, peaks near the first quarter of the period
/// assert!(pulse[0].abs() < 1e-12);
/// assert!((pulse[250] - 1.0).abs() < 1e-12);
/// # Ok::<(), rust_neurostim::synthesis::PulseError>(())
/// ```
pub fn generate_pulse(
    sample_rate: u32,
    duration: f64,
    amplitude: f64,
    polarity: FirstPeakPolarity,
    shape: WaveformShape,
) -> Result<Vec<f64>, PulseError> {
    if sample_rate == 0 {
        return Err(PulseError::InvalidSampleRate);
    }
    if !(duration > 0.0) {
        return Err(PulseError::InvalidDuration(duration));
    }

    let sample_count = (sample_rate as f64 * duration).floor() as usize;
    if sample_count == 0 {
        return Err(PulseError::EmptyPulse);
    }

    let scale = amplitude / 2.0 * polarity.factor();
    let pulse = (0..sample_count)
        .map(|i| {
            let t = i as f64 / sample_rate as f64;
            shape.sample(t / duration) * scale
        })
        .collect();

    Ok(pulse)
}
