// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Continuous stimulation configuration
//!
//! Parameter set for a plain alternating-current signal: a sine wave of a
//! given oscillation frequency spanning the whole signal duration, with no
//! pulse or trial structure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for a continuous sinusoidal stimulation signal.
///
/// Unlike [`StimulationConfig`](super::StimulationConfig), `frequency` here
/// is the oscillation frequency of the sine itself and `amplitude` is its
/// peak value, not a peak-to-peak span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContinuousConfig {
    /// Sampling rate of the signal in samples per second
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Oscillation frequency of the sine in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Peak amplitude of the sine in μA
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Offset amplitude added to every sample, in μA
    #[serde(default = "default_offset")]
    pub offset: f64,

    /// Total signal duration in seconds
    #[serde(default = "default_signal_duration")]
    pub signal_duration: f64,
}

fn default_sample_rate() -> u32 {
    16000
}

fn default_frequency() -> f64 {
    3.0
}

fn default_amplitude() -> f64 {
    1000.0 // μA
}

fn default_offset() -> f64 {
    500.0 // μA
}

fn default_signal_duration() -> f64 {
    10.0
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            frequency: default_frequency(),
            amplitude: default_amplitude(),
            offset: default_offset(),
            signal_duration: default_signal_duration(),
        }
    }
}
