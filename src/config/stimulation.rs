// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Pulsed stimulation configuration
//!
//! This module defines the parameter set for pulsed stimulation signals:
//! a train of single-period pulses repeated at a fixed frequency, framed by
//! silent lead-in/lead-out segments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::synthesis::{FirstPeakPolarity, WaveformShape};

/// Configuration for a pulsed stimulation signal.
///
/// The defaults reproduce the parameter set of the DC-Stimulator MC
/// (neuroConn, GmbH) workflow: 16 kHz sampling, a sinusoidal pulse starting
/// with a positive wave, one pulse every ten seconds, 1000 μA amplitude,
/// and one second of silence on either side of the pulse train.
///
/// # Timing constraints
///
/// Two relations between the fields must hold, and are checked by the
/// assembler before any signal is built:
///
/// * `signal_duration >= 1.0 / frequency` - the signal is long enough for
///   at least one full pulse period
/// * `pulse_duration <= 1.0 / frequency` - a pulse fits inside one
///   repetition period
///
/// # Example
///
/// ```
/// use rust_neurostim::config::StimulationConfig;
/// use rust_neurostim::synthesis::WaveformShape;
///
/// let config = StimulationConfig {
///     shape: WaveformShape::Square,
///     frequency: 1.0,
///     pulse_duration: 0.5,
///     signal_duration: 2.0,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StimulationConfig {
    /// Sampling rate of the signal in samples per second
    /// (16000 is required for the DC-Stimulator MC *.bfs workflow)
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Shape of the stimulation pulses
    #[serde(default)]
    pub shape: WaveformShape,

    /// Polarity of the first pulse hillock
    #[serde(default)]
    pub polarity: FirstPeakPolarity,

    /// Number of stimulation pulses per second, in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Single stimulation pulse duration in seconds
    #[serde(default = "default_pulse_duration")]
    pub pulse_duration: f64,

    /// Total signal duration in seconds
    #[serde(default = "default_signal_duration")]
    pub signal_duration: f64,

    /// Stimulation pulse amplitude (peak-to-peak) in μA
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Offset amplitude added to every sample, in μA
    #[serde(default)]
    pub offset: f64,

    /// Silent lead-in before the pulse train, in seconds
    #[serde(default = "default_silence")]
    pub pre_silence: f64,

    /// Silent lead-out after the pulse train, in seconds
    #[serde(default = "default_silence")]
    pub post_silence: f64,
}

fn default_sample_rate() -> u32 {
    16000 // DC-Stimulator MC sample rate
}

fn default_frequency() -> f64 {
    0.1 // One pulse every ten seconds
}

fn default_pulse_duration() -> f64 {
    0.1
}

fn default_signal_duration() -> f64 {
    10.0
}

fn default_amplitude() -> f64 {
    1000.0 // μA
}

fn default_silence() -> f64 {
    1.0
}

impl Default for StimulationConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            shape: WaveformShape::default(),
            polarity: FirstPeakPolarity::default(),
            frequency: default_frequency(),
            pulse_duration: default_pulse_duration(),
            signal_duration: default_signal_duration(),
            amplitude: default_amplitude(),
            offset: 0.0,
            pre_silence: default_silence(),
            post_silence: default_silence(),
        }
    }
}
