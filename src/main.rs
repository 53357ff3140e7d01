// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point for the stimulation signal generator

use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};

use std::path::PathBuf;

use rust_neurostim::config::{self, Config, GenerationMode};
use rust_neurostim::export::{self, OutputFormat};
use rust_neurostim::stimulation::{assemble, continuous};
use rust_neurostim::synthesis::{FirstPeakPolarity, WaveformShape};
use rust_neurostim::utility::preview;

/// Stimulation signal generator for transcranial alternating current stimulation
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (YAML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a configuration to validate and exit
    #[arg(long)]
    validate_config: Option<PathBuf>,

    /// Output the configuration schema as JSON and exit
    #[arg(long)]
    show_config_schema: bool,

    /// Generation mode: pulsed train or continuous sine
    #[arg(long, value_enum)]
    mode: Option<GenerationMode>,

    /// Sampling rate in samples per second
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Shape of the stimulation pulses
    #[arg(long, value_enum)]
    shape: Option<WaveformShape>,

    /// Polarity of the first pulse hillock
    #[arg(long, value_enum)]
    polarity: Option<FirstPeakPolarity>,

    /// Pulse repetition frequency (pulsed) or oscillation frequency
    /// (continuous) in Hz
    #[arg(long)]
    frequency: Option<f64>,

    /// Single pulse duration in seconds
    #[arg(long)]
    pulse_duration: Option<f64>,

    /// Total signal duration in seconds
    #[arg(long)]
    signal_duration: Option<f64>,

    /// Stimulation amplitude in μA
    #[arg(long)]
    amplitude: Option<f64>,

    /// Offset amplitude in μA added to every sample
    #[arg(long)]
    offset: Option<f64>,

    /// Silent lead-in before the pulse train, in seconds
    #[arg(long)]
    pre_silence: Option<f64>,

    /// Silent lead-out after the pulse train, in seconds
    #[arg(long)]
    post_silence: Option<f64>,

    /// Output file for the assembled signal
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Serialization format of the output file
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Render a terminal preview of the signal after assembly
    #[arg(long, default_value_t = false)]
    preview: bool,

    /// Enable verbose logging (debug level)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Disable all logging output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    // Initialize logger with appropriate level based on verbose and quiet flags
    let args = Args::parse();

    let log_level = if args.quiet {
        log::LevelFilter::Off
    } else if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    // Check if --show-config-schema flag is set
    if args.show_config_schema {
        return config::output_config_schema();
    }

    // Validate configuration file if --validate-config is set
    if let Some(validate_path) = args.validate_config {
        if !validate_path.exists() {
            return Err(anyhow::anyhow!(
                "Configuration file does not exist: {}",
                validate_path.display()
            ));
        }

        Config::from_file(&validate_path)
            .map_err(|err| anyhow::anyhow!("Configuration validation failed: {}", err))?;
        println!("Configuration file is valid: {}", validate_path.display());
        return Ok(());
    }

    // Load configuration; a missing default file is not an error since every
    // parameter has a usable default
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let default_path = PathBuf::from("config.yaml");
            if default_path.exists() {
                Config::from_file(&default_path)?
            } else {
                debug!("No configuration file found, using built-in defaults");
                Config::default()
            }
        }
    };

    // Apply command line overrides
    config.apply_args(
        args.mode,
        args.sample_rate,
        args.shape,
        args.polarity,
        args.frequency,
        args.pulse_duration,
        args.signal_duration,
        args.amplitude,
        args.offset,
        args.pre_silence,
        args.post_silence,
        args.output.clone(),
        args.format,
        args.preview,
    );

    if config.mode == GenerationMode::Pulsed && config.stimulation.sample_rate != 16000 {
        warn!(
            "Sample rate {} differs from the 16000 Hz required by the DC-Stimulator MC *.bfs workflow",
            config.stimulation.sample_rate
        );
    }

    let signal = match config.mode {
        GenerationMode::Pulsed => {
            info!(
                "Assembling pulsed {:?} signal: {} Hz, {} s pulses over {} s",
                config.stimulation.shape,
                config.stimulation.frequency,
                config.stimulation.pulse_duration,
                config.stimulation.signal_duration
            );
            assemble(&config.stimulation)?
        }
        GenerationMode::Continuous => {
            info!(
                "Generating continuous {} Hz sine over {} s",
                config.continuous.frequency, config.continuous.signal_duration
            );
            continuous(&config.continuous)?
        }
    };

    info!(
        "Assembled {} samples ({} s at {} Hz)",
        signal.len(),
        signal.duration_secs(),
        signal.sample_rate
    );

    export::save(&config.output.file, &signal, config.output.format)?;

    if config.output.preview {
        preview::print_preview(&signal);
    }

    println!(
        "Stimulation signal successfully written to {:?}",
        config.output.file
    );
    Ok(())
}
