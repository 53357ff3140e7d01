// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust_neurostim project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Tests for Signal Export
//!
//! Round-trips exported files through `hound` and `serde_json` to verify
//! that both the sample sequence and the sample rate survive persistence.

#[cfg(test)]
mod tests {
    use crate::export::{save, write_json, write_wav, OutputFormat};
    use crate::stimulation::StimulationSignal;
    use approx::assert_abs_diff_eq;

    fn test_signal() -> StimulationSignal {
        StimulationSignal {
            samples: vec![0.0, 500.0, -500.0, 250.0, 0.125],
            sample_rate: 16000,
        }
    }

    #[test]
    fn test_wav_round_trip_preserves_data_and_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.wav");
        let signal = test_signal();

        write_wav(&path, &signal).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.bits_per_sample, 32);
        assert_eq!(spec.sample_format, hound::SampleFormat::Float);

        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), signal.samples.len());
        for (read, original) in samples.iter().zip(signal.samples.iter()) {
            assert_abs_diff_eq!(*read as f64, *original, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_json_contains_data_and_fs_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.json");
        let signal = test_signal();

        write_json(&path, &signal).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["fs"], 16000);
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        assert_eq!(data[1].as_f64().unwrap(), 500.0);
        assert_eq!(data[2].as_f64().unwrap(), -500.0);
    }

    #[test]
    fn test_save_dispatches_on_format() {
        let dir = tempfile::tempdir().unwrap();
        let signal = test_signal();

        let wav_path = dir.path().join("signal.wav");
        save(&wav_path, &signal, OutputFormat::Wav).unwrap();
        assert!(hound::WavReader::open(&wav_path).is_ok());

        let json_path = dir.path().join("signal.json");
        save(&json_path, &signal, OutputFormat::Json).unwrap();
        let content = std::fs::read_to_string(&json_path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }
}
