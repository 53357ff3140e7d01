// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Signal Export
//!
//! This module writes an assembled stimulation signal to disk together with
//! its sample rate, so numeric-analysis tooling can reload both without
//! out-of-band knowledge.
//!
//! ## Formats
//!
//! * **WAV** - mono, 32-bit IEEE float. The header carries the sample rate
//!   natively; samples are stored as raw μA values, not normalized to the
//!   `[-1, 1]` audio convention.
//! * **JSON** - an object with two fields, `data` (the sample sequence) and
//!   `fs` (the sample rate), matching the field names of the historical
//!   MATLAB container produced by the DC-Stimulator MC toolchain.
//!
//! Writing is the only side effect of the generator; export never mutates
//! the signal it receives.
//!
//! ## Example
//!
//! ```no_run
//! use rust_neurostim::export::{save, OutputFormat};
//! use rust_neurostim::stimulation::StimulationSignal;
//! use std::path::Path;
//!
//! let signal = StimulationSignal {
//!     samples: vec![0.0, 500.0, -500.0],
//!     sample_rate: 16000,
//! };
//! save(Path::new("Signal.wav"), &signal, OutputFormat::Wav)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

#[cfg(test)]
pub mod export_test;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hound::{SampleFormat, WavSpec, WavWriter};
use log::info;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stimulation::StimulationSignal;

/// Serialization format for an exported signal.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Mono 32-bit float WAV file
    #[default]
    Wav,
    /// JSON object with `data` and `fs` fields
    Json,
}

/// JSON shape of an exported signal: `{"data": [...], "fs": rate}`.
#[derive(Serialize)]
struct JsonSignal<'a> {
    data: &'a [f64],
    fs: u32,
}

/// Write a stimulation signal to a file in the requested format.
///
/// ### Arguments
///
/// * `path` - Destination file path
/// * `signal` - The assembled signal to persist
/// * `format` - Serialization format
pub fn save(path: &Path, signal: &StimulationSignal, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Wav => write_wav(path, signal),
        OutputFormat::Json => write_json(path, signal),
    }
}

/// Write the signal as a mono 32-bit float WAV file.
///
/// The WAV header records the sample rate; each sample is narrowed from
/// f64 to f32 but otherwise written unscaled.
pub fn write_wav(path: &Path, signal: &StimulationSignal) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file {}", path.display()))?;
    for &sample in &signal.samples {
        writer.write_sample(sample as f32)?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file {}", path.display()))?;

    info!(
        "Wrote {} samples at {} Hz to {}",
        signal.samples.len(),
        signal.sample_rate,
        path.display()
    );
    Ok(())
}

/// Write the signal as a JSON object with `data` and `fs` fields.
pub fn write_json(path: &Path, signal: &StimulationSignal) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file {}", path.display()))?;
    serde_json::to_writer(
        BufWriter::new(file),
        &JsonSignal {
            data: &signal.samples,
            fs: signal.sample_rate,
        },
    )
    .with_context(|| format!("Failed to write JSON file {}", path.display()))?;

    info!(
        "Wrote {} samples at {} Hz to {}",
        signal.samples.len(),
        signal.sample_rate,
        path.display()
    );
    Ok(())
}
