// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Pulse waveform synthesis
//!
//! This module provides the pulse generator used to build stimulation
//! signals: one period of a square, sawtooth, or sinusoidal waveform,
//! sampled at a configurable rate and scaled to a configurable amplitude.
//!
//! All generation is pure and deterministic: the same parameters always
//! produce the same sample buffer, and no shared state is touched, so the
//! generator is safe to call from concurrent threads.

pub mod pulse;
#[cfg(test)]
pub mod pulse_test;

pub use pulse::{generate_pulse, FirstPeakPolarity, PulseError, WaveformShape};
