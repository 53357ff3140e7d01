// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # rust_neurostim
//!
//! Stimulation signal generator for transcranial alternating current
//! stimulation (tACS). The crate builds one-dimensional stimulation
//! waveforms - repetitive square, sawtooth, or sinusoidal pulses placed in
//! fixed-length trial slots, framed by silent lead-in/lead-out segments and
//! shifted by a constant DC offset - and exports them to numeric file
//! formats alongside their sample rate.
//!
//! ## Modules
//!
//! * [`synthesis`] - single-period pulse generation (the waveform kernels)
//! * [`stimulation`] - signal assembly: trial layout, silence framing,
//!   DC offset, and the continuous sinusoidal mode
//! * [`config`] - immutable configuration, YAML loading, CLI overrides
//! * [`export`] - WAV/JSON persistence of `{data, fs}`
//! * [`utility`] - terminal preview and other support tools
//!
//! ## Example
//!
//! ```
//! use rust_neurostim::config::StimulationConfig;
//! use rust_neurostim::stimulation::assemble;
//! use rust_neurostim::synthesis::WaveformShape;
//!
//! let config = StimulationConfig {
//!     shape: WaveformShape::Square,
//!     frequency: 1.0,
//!     pulse_duration: 0.5,
//!     signal_duration: 2.0,
//!     pre_silence: 0.0,
//!     post_silence: 0.0,
//!     ..Default::default()
//! };
//! let signal = assemble(&config)?;
//! assert_eq!(signal.samples.len(), 32000);
//! # Ok::<(), rust_neurostim::stimulation::AssemblyError>(())
//! ```

pub mod config;
pub mod export;
pub mod stimulation;
pub mod synthesis;
pub mod utility;
