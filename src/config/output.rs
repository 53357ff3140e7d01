// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Output configuration
//!
//! Where and how the assembled signal is written, and whether a terminal
//! preview is rendered after assembly.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::export::OutputFormat;

/// Configuration for signal persistence and preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Destination file for the assembled signal
    #[serde(default = "default_file")]
    pub file: PathBuf,

    /// Serialization format of the destination file
    #[serde(default)]
    pub format: OutputFormat,

    /// Render a terminal preview of the signal after assembly
    #[serde(default)]
    pub preview: bool,
}

fn default_file() -> PathBuf {
    PathBuf::from("Signal.wav")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            format: OutputFormat::default(),
            preview: false,
        }
    }
}
