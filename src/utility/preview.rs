// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Terminal signal preview
//!
//! Renders a sample sequence as a fixed-size line plot made of text cells.
//! Each output column covers a contiguous chunk of samples and draws the
//! chunk's min/max envelope, so pulses shorter than one column still show
//! up. Purely observational: the signal is never modified.

use crate::stimulation::StimulationSignal;

/// Default plot width in columns
pub const DEFAULT_WIDTH: usize = 96;
/// Default plot height in rows
pub const DEFAULT_HEIGHT: usize = 16;

/// Render a sample sequence as a text plot.
///
/// ### Arguments
///
/// * `samples` - The sample sequence to render
/// * `width` - Plot width in columns (at least 1)
/// * `height` - Plot height in rows (at least 2)
///
/// ### Returns
///
/// A multi-line string: a header with the value range and sample count,
/// followed by `height` rows of the envelope plot.
pub fn render(samples: &[f64], width: usize, height: usize) -> String {
    if samples.is_empty() {
        return String::from("(empty signal)");
    }
    let width = width.max(1);
    let height = height.max(2);

    let max = samples.iter().cloned().fold(f64::MIN, f64::max);
    let min = samples.iter().cloned().fold(f64::MAX, f64::min);
    // Flat signals still get a visible midline
    let span = if max > min { max - min } else { 1.0 };

    let row_of = |value: f64| -> usize {
        let normalized = (max - value) / span;
        ((normalized * (height - 1) as f64).round() as usize).min(height - 1)
    };

    let chunk_size = samples.len().div_ceil(width);
    let mut columns = Vec::with_capacity(width);
    for chunk in samples.chunks(chunk_size) {
        let hi = chunk.iter().cloned().fold(f64::MIN, f64::max);
        let lo = chunk.iter().cloned().fold(f64::MAX, f64::min);
        columns.push((row_of(hi), row_of(lo)));
    }

    let mut out = format!(
        "{} samples, range [{}, {}]\n",
        samples.len(),
        min,
        max
    );
    for row in 0..height {
        for &(top, bottom) in &columns {
            if (top..=bottom).contains(&row) {
                out.push('#');
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Print a preview of an assembled signal to stdout.
pub fn print_preview(signal: &StimulationSignal) {
    println!("{}", render(&signal.samples, DEFAULT_WIDTH, DEFAULT_HEIGHT));
}
