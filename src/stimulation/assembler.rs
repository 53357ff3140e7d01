// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Stimulation Signal Assembler
//!
//! This module builds complete one-dimensional stimulation signals from an
//! immutable parameter set. The signal is a train of identical pulses: the
//! total duration is divided into equal *trial slots*, one per pulse
//! repetition, each slot holding one generated pulse at its start followed
//! by silence. Silent lead-in and lead-out segments are concatenated around
//! the pulse train and a constant DC offset is added to every sample last,
//! so silent regions rest exactly at the offset level.
//!
//! ## Timing constraints
//!
//! Two constraints must hold before any buffer is allocated:
//!
//! * the signal must be long enough for at least one full pulse period
//!   (`signal_duration >= 1 / frequency`);
//! * a pulse must fit inside its own repetition period
//!   (`pulse_duration <= 1 / frequency`).
//!
//! Violations are rejected with [`AssemblyError`] values carrying the
//! maximum permissible value, so the caller can correct the configuration.
//! Parameter combinations that do not divide the signal into a whole number
//! of equal trial slots are rejected as well instead of being silently
//! truncated.
//!
//! ## Example
//!
//! ```
//! use rust_neurostim::config::StimulationConfig;
//! use rust_neurostim::stimulation::assemble;
//! use rust_neurostim::synthesis::WaveformShape;
//!
//! let config = StimulationConfig {
//!     sample_rate: 16000,
//!     shape: WaveformShape::Square,
//!     frequency: 1.0,
//!     pulse_duration: 0.5,
//!     signal_duration: 2.0,
//!     pre_silence: 0.0,
//!     post_silence: 0.0,
//!     offset: 0.0,
//!     ..Default::default()
//! };
//! let signal = assemble(&config)?;
//! assert_eq!(signal.samples.len(), 32000);
//! # Ok::<(), rust_neurostim::stimulation::AssemblyError>(())
//! ```

use log::debug;
use thiserror::Error;

use crate::config::{ContinuousConfig, StimulationConfig};
use crate::synthesis::{generate_pulse, PulseError};

/// Relative tolerance used to decide whether a derived sample count is a
/// whole number
const INTEGRALITY_TOLERANCE: f64 = 1e-9;

/// Errors produced while assembling a stimulation signal
///
/// The timing-constraint variants carry the maximum permissible value for
/// user correction. Every failure is a non-retryable configuration error:
/// retrying with the same parameters cannot succeed.
#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("stimulation frequency must be positive (got {0} Hz)")]
    InvalidFrequency(f64),
    #[error("signal duration must be positive (got {0} s)")]
    InvalidSignalDuration(f64),
    #[error("pre and post silence durations can't be negative")]
    NegativeSilence,
    #[error(
        "stimulation frequency {frequency} Hz is too high for a {signal_duration} s signal; \
         it should not exceed {max} Hz"
    )]
    FrequencyTooHigh {
        frequency: f64,
        signal_duration: f64,
        max: f64,
    },
    #[error("pulse duration {pulse_duration} s can't be higher than {max} s at {frequency} Hz")]
    PulseDurationTooLong {
        pulse_duration: f64,
        frequency: f64,
        max: f64,
    },
    #[error("signal duration times stimulation frequency is not a whole pulse count (got {0})")]
    FractionalPulseCount(f64),
    #[error("trial slot length is not a whole number of samples (got {0})")]
    FractionalTrialLength(f64),
    #[error(transparent)]
    Pulse(#[from] PulseError),
}

/// A fully assembled stimulation signal
///
/// The sample sequence is expressed in μA and owned by the caller; the
/// struct has no mutable state after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct StimulationSignal {
    /// Ordered sample sequence in μA
    pub samples: Vec<f64>,
    /// Sampling rate of the sequence in samples per second
    pub sample_rate: u32,
}

impl StimulationSignal {
    /// Number of samples in the signal
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total duration of the signal in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Round a real-valued sample count to a whole number, within tolerance
///
/// Returns `None` when the value is not a whole number, which indicates a
/// misconfigured parameter set rather than a quantity to truncate.
fn whole_count(value: f64) -> Option<usize> {
    let rounded = value.round();
    if (value - rounded).abs() > INTEGRALITY_TOLERANCE * rounded.max(1.0) {
        return None;
    }
    Some(rounded as usize)
}

/// Assemble a pulsed stimulation signal
///
/// Validates the timing constraints, generates one pulse period, and lays it
/// out at the start of each of `signal_duration * frequency` equal trial
/// slots. Pre/post silence is concatenated around the pulse train and the
/// DC offset is added to every sample of the final buffer.
///
/// ### Arguments
///
/// * `config` - Immutable stimulation parameter set
///
/// ### Returns
///
/// The assembled [`StimulationSignal`], or an [`AssemblyError`] describing
/// the first violated constraint. No partial signal is ever returned.
///
/// ### Examples
///
/// ```
/// use rust_neurostim::config::StimulationConfig;
/// use rust_neurostim::stimulation::{assemble, AssemblyError};
///
/// // A 10 s signal can't repeat pulses slower than 0.1 Hz
/// let config = StimulationConfig {
///     frequency: 0.05,
///     signal_duration: 10.0,
///     pulse_duration: 0.1,
///     ..Default::default()
/// };
/// assert!(matches!(
///     assemble(&config),
///     Err(AssemblyError::FrequencyTooHigh { .. })
/// ));
/// ```
pub fn assemble(config: &StimulationConfig) -> Result<StimulationSignal, AssemblyError> {
    if !(config.frequency > 0.0) {
        return Err(AssemblyError::InvalidFrequency(config.frequency));
    }
    if !(config.signal_duration > 0.0) {
        return Err(AssemblyError::InvalidSignalDuration(config.signal_duration));
    }
    if config.pre_silence < 0.0 || config.post_silence < 0.0 {
        return Err(AssemblyError::NegativeSilence);
    }

    let period = 1.0 / config.frequency;
    if config.signal_duration < period {
        return Err(AssemblyError::FrequencyTooHigh {
            frequency: config.frequency,
            signal_duration: config.signal_duration,
            max: 1.0 / config.signal_duration,
        });
    }
    if config.pulse_duration > period {
        return Err(AssemblyError::PulseDurationTooLong {
            pulse_duration: config.pulse_duration,
            frequency: config.frequency,
            max: period,
        });
    }

    // Total number of pulses in the signal
    let pulse_count_real = config.signal_duration * config.frequency;
    let pulse_count = whole_count(pulse_count_real)
        .ok_or(AssemblyError::FractionalPulseCount(pulse_count_real))?;

    // Samples per trial slot
    let trial_length_real =
        config.sample_rate as f64 * config.signal_duration / pulse_count as f64;
    let trial_length = whole_count(trial_length_real)
        .ok_or(AssemblyError::FractionalTrialLength(trial_length_real))?;

    // The pulse is identical for every trial, so it is generated once
    let pulse = generate_pulse(
        config.sample_rate,
        config.pulse_duration,
        config.amplitude,
        config.polarity,
        config.shape,
    )?;
    debug_assert!(pulse.len() <= trial_length);

    let pre_length = (config.sample_rate as f64 * config.pre_silence).floor() as usize;
    let post_length = (config.sample_rate as f64 * config.post_silence).floor() as usize;

    debug!(
        "Assembling {} trials of {} samples ({} pulse samples each), pre {} / post {} samples",
        pulse_count,
        trial_length,
        pulse.len(),
        pre_length,
        post_length
    );

    let mut samples =
        Vec::with_capacity(pre_length + pulse_count * trial_length + post_length);
    samples.resize(pre_length, 0.0);
    for _ in 0..pulse_count {
        samples.extend_from_slice(&pulse);
        samples.resize(samples.len() + (trial_length - pulse.len()), 0.0);
    }
    samples.resize(samples.len() + post_length, 0.0);

    for sample in &mut samples {
        *sample += config.offset;
    }

    Ok(StimulationSignal {
        samples,
        sample_rate: config.sample_rate,
    })
}

/// Generate a continuous sinusoidal stimulation signal
///
/// Unlike the pulsed mode, the sine wave spans the whole signal duration at
/// the configured oscillation frequency, with no trial structure and no
/// silent framing. `amplitude` is the peak value of the sine in μA and the
/// DC offset shifts the whole waveform.
///
/// ### Examples
///
/// ```
/// use rust_neurostim::config::ContinuousConfig;
/// use rust_neurostim::stimulation::continuous;
///
/// let config = ContinuousConfig {
///     sample_rate: 16000,
///     frequency: 3.0,
///     amplitude: 1000.0,
///     offset: 500.0,
///     signal_duration: 10.0,
/// };
/// let signal = continuous(&config)?;
/// assert_eq!(signal.samples.len(), 160000);
/// assert_eq!(signal.samples[0], 500.0);
/// # Ok::<(), rust_neurostim::stimulation::AssemblyError>(())
/// ```
pub fn continuous(config: &ContinuousConfig) -> Result<StimulationSignal, AssemblyError> {
    if config.sample_rate == 0 {
        return Err(AssemblyError::Pulse(PulseError::InvalidSampleRate));
    }
    if !(config.frequency > 0.0) {
        return Err(AssemblyError::InvalidFrequency(config.frequency));
    }
    if !(config.signal_duration > 0.0) {
        return Err(AssemblyError::InvalidSignalDuration(config.signal_duration));
    }

    let sample_count = (config.sample_rate as f64 * config.signal_duration).floor() as usize;
    debug!(
        "Generating {} samples of a continuous {} Hz sine",
        sample_count, config.frequency
    );

    let samples = (0..sample_count)
        .map(|i| {
            let t = i as f64 / config.sample_rate as f64;
            (std::f64::consts::TAU * config.frequency * t).sin() * config.amplitude
                + config.offset
        })
        .collect();

    Ok(StimulationSignal {
        samples,
        sample_rate: config.sample_rate,
    })
}
