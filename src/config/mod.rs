// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Configuration module
//!
//! This module defines the configuration of the stimulation signal
//! generator. The configuration is an immutable value loaded from a YAML
//! file and optionally overridden by command line arguments; nothing in the
//! application mutates it after startup.
//!
//! ## Sections
//!
//! * [`StimulationConfig`] - the pulsed stimulation parameter set
//! * [`ContinuousConfig`] - the continuous sinusoidal parameter set
//! * [`OutputConfig`] - destination file, format, and preview switch
//!
//! ## Example
//!
//! ```
//! use rust_neurostim::config::Config;
//!
//! let yaml = r#"
//! mode: pulsed
//! stimulation:
//!   shape: square
//!   frequency: 1.0
//!   pulse_duration: 0.5
//!   signal_duration: 2.0
//! output:
//!   file: Signal.wav
//! "#;
//! let config: Config = serde_yml::from_str(yaml)?;
//! assert_eq!(config.stimulation.sample_rate, 16000);
//! # Ok::<(), serde_yml::Error>(())
//! ```

pub mod continuous;
pub mod output;
pub mod stimulation;

pub use continuous::ContinuousConfig;
pub use output::OutputConfig;
pub use stimulation::StimulationConfig;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::export::OutputFormat;
use crate::synthesis::{FirstPeakPolarity, WaveformShape};

/// Which generator the application runs.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ValueEnum, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Repetitive pulse train (the stimulation protocol signal)
    #[default]
    Pulsed,
    /// Plain sinusoidal alternating-current signal
    Continuous,
}

/// Top-level application configuration.
///
/// Every section has complete defaults, so an empty file (or no file at
/// all) yields a usable configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Which generator to run
    #[serde(default)]
    pub mode: GenerationMode,

    /// Pulsed stimulation parameters
    #[serde(default)]
    pub stimulation: StimulationConfig,

    /// Continuous sinusoidal parameters
    #[serde(default)]
    pub continuous: ContinuousConfig,

    /// Output destination and format
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load a configuration from a YAML file.
    ///
    /// ### Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// ### Returns
    ///
    /// The parsed [`Config`], or an error if the file cannot be read or
    /// does not deserialize into a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config: Config = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply command line overrides on top of the loaded configuration.
    ///
    /// Every argument is optional; `None` leaves the corresponding field
    /// untouched, so command line values always win over file values.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_args(
        &mut self,
        mode: Option<GenerationMode>,
        sample_rate: Option<u32>,
        shape: Option<WaveformShape>,
        polarity: Option<FirstPeakPolarity>,
        frequency: Option<f64>,
        pulse_duration: Option<f64>,
        signal_duration: Option<f64>,
        amplitude: Option<f64>,
        offset: Option<f64>,
        pre_silence: Option<f64>,
        post_silence: Option<f64>,
        output: Option<PathBuf>,
        format: Option<OutputFormat>,
        preview: bool,
    ) {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(sample_rate) = sample_rate {
            self.stimulation.sample_rate = sample_rate;
            self.continuous.sample_rate = sample_rate;
        }
        if let Some(shape) = shape {
            self.stimulation.shape = shape;
        }
        if let Some(polarity) = polarity {
            self.stimulation.polarity = polarity;
        }
        if let Some(frequency) = frequency {
            self.stimulation.frequency = frequency;
            self.continuous.frequency = frequency;
        }
        if let Some(pulse_duration) = pulse_duration {
            self.stimulation.pulse_duration = pulse_duration;
        }
        if let Some(signal_duration) = signal_duration {
            self.stimulation.signal_duration = signal_duration;
            self.continuous.signal_duration = signal_duration;
        }
        if let Some(amplitude) = amplitude {
            self.stimulation.amplitude = amplitude;
            self.continuous.amplitude = amplitude;
        }
        if let Some(offset) = offset {
            self.stimulation.offset = offset;
            self.continuous.offset = offset;
        }
        if let Some(pre_silence) = pre_silence {
            self.stimulation.pre_silence = pre_silence;
        }
        if let Some(post_silence) = post_silence {
            self.stimulation.post_silence = post_silence;
        }
        if let Some(output) = output {
            self.output.file = output;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        if preview {
            self.output.preview = true;
        }
    }
}

/// Output the configuration JSON schema to the console.
///
/// This function is called when the `--show-config-schema` flag is provided
/// on the command line. It outputs the full JSON schema for the
/// configuration to stdout, formatted for readability.
///
/// ### Example
///
/// ```bash
/// ./rust_neurostim --show-config-schema > config_schema.json
/// ```
pub fn output_config_schema() -> Result<()> {
    let schema = schemars::schema_for!(Config);
    let formatted_schema =
        serde_json::to_string_pretty(&schema).context("Failed to format JSON schema")?;
    println!("{}", formatted_schema);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: Config = serde_yml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mode, GenerationMode::Pulsed);
        assert_eq!(config.stimulation.sample_rate, 16000);
        assert_eq!(config.stimulation.amplitude, 1000.0);
        assert_eq!(config.continuous.offset, 500.0);
        assert_eq!(config.output.format, OutputFormat::Wav);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.mode = GenerationMode::Continuous;
        config.stimulation.shape = WaveformShape::Sawtooth;
        config.stimulation.polarity = FirstPeakPolarity::Negative;
        config.output.format = OutputFormat::Json;

        let yaml = serde_yml::to_string(&config).unwrap();
        let parsed: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_shape_name_is_rejected() {
        let yaml = "stimulation:\n  shape: triangle\n";
        assert!(serde_yml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_unknown_polarity_name_is_rejected() {
        let yaml = "stimulation:\n  polarity: bipolar\n";
        assert!(serde_yml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_apply_args_overrides_file_values() {
        let mut config = Config::default();
        config.apply_args(
            Some(GenerationMode::Continuous),
            Some(8000),
            Some(WaveformShape::Square),
            None,
            Some(2.0),
            None,
            Some(4.0),
            None,
            None,
            Some(0.5),
            None,
            Some(PathBuf::from("out.json")),
            Some(OutputFormat::Json),
            true,
        );

        assert_eq!(config.mode, GenerationMode::Continuous);
        assert_eq!(config.stimulation.sample_rate, 8000);
        assert_eq!(config.continuous.sample_rate, 8000);
        assert_eq!(config.stimulation.shape, WaveformShape::Square);
        assert_eq!(config.stimulation.polarity, FirstPeakPolarity::Positive);
        assert_eq!(config.stimulation.frequency, 2.0);
        assert_eq!(config.continuous.signal_duration, 4.0);
        assert_eq!(config.stimulation.pre_silence, 0.5);
        assert_eq!(config.stimulation.post_silence, 1.0);
        assert_eq!(config.output.file, PathBuf::from("out.json"));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.preview);
    }
}
