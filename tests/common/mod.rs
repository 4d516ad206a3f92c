//! Shared helpers for integration tests: scratch directories and float WAV fixtures.

#![allow(dead_code)]

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Creates an empty scratch directory unique to this process and test name.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("audio_stats_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

/// Writes interleaved 32-bit float samples as a WAV file.
pub fn write_float_wav(path: &Path, samples: &[f32], channels: u16, sample_rate: u32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV writer");
    for &sample in samples {
        writer.write_sample(sample).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV file");
}

/// Cuts `bytes` off the end of a file, leaving its header claiming the original length.
pub fn truncate_tail(path: &Path, bytes: u64) {
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .expect("Failed to open file for truncation");
    let len = file.metadata().expect("Failed to stat file").len();
    file.set_len(len - bytes).expect("Failed to truncate file");
}

/// A 440 Hz tone with a DC offset, `frames` long.
pub fn tone(frames: usize, sample_rate: u32) -> Vec<f32> {
    (0..frames)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5 + 0.1
        })
        .collect()
}

/// Writes 8-bit mono PCM, then rewrites the `data` chunk length (and the RIFF length)
/// so the header declares `declared_data_len` bytes regardless of what follows.
pub fn write_wav_with_declared_length(path: &Path, frames: usize, declared_data_len: u32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 8,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create WAV writer");
    for i in 0..frames {
        writer.write_sample((i % 64) as i8).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize WAV file");

    let mut bytes = fs::read(path).expect("Failed to read WAV file");
    let data_at = bytes
        .windows(4)
        .position(|w| w == b"data")
        .expect("WAV file has no data chunk");
    // RIFF length counts everything after its own 8-byte chunk header.
    let riff_len = declared_data_len.saturating_add(data_at as u32);
    bytes[4..8].copy_from_slice(&riff_len.to_le_bytes());
    bytes[data_at + 4..data_at + 8].copy_from_slice(&declared_data_len.to_le_bytes());
    fs::write(path, bytes).expect("Failed to rewrite WAV header");
}
