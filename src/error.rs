//! Error types and result utilities for audio statistics operations.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type alias for results that may contain AudioStatsError
pub type AudioStatsResult<T> = Result<T, AudioStatsError>;

/// Error types that can occur while loading audio or computing statistics.
#[derive(Error, Debug)]
pub enum AudioStatsError {
    /// The input file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file was opened but no supported container format was recognised.
    #[error("Unsupported audio format in {}: {reason}", path.display())]
    UnsupportedFormat {
        /// Path that was probed.
        path: PathBuf,
        /// Reason reported by the decoder.
        reason: String,
    },

    /// The container holds no track with a decodable codec.
    #[error("No supported audio track found in {}", path.display())]
    NoAudioTrack {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The container does not declare a value required up front.
    #[error("{} does not declare its {field}", path.display())]
    MissingMetadata {
        /// Path that was probed.
        path: PathBuf,
        /// Name of the missing field (e.g. "frame count").
        field: &'static str,
    },

    /// The codec layer failed while constructing a decoder or reading packets.
    #[error("Decoder error: {0}")]
    Decoder(#[from] symphonia::core::errors::Error),

    /// Fewer (or more) frames were decoded than the container declared.
    ///
    /// This happens on truncated or corrupt files.
    #[error(
        "Failed to read audio data from {}. Read {frames_read} frames, instead of {frames_expected}",
        path.display()
    )]
    TruncatedRead {
        /// Path that was read.
        path: PathBuf,
        /// Frames actually produced by the decoder.
        frames_read: u64,
        /// Frames declared by the container.
        frames_expected: u64,
    },

    /// `frame_count × channel_count` does not fit in memory addressing.
    #[error("Sample count overflow: {frame_count} frames x {channel_count} channels")]
    SampleCountOverflow {
        /// Declared frame count.
        frame_count: u64,
        /// Declared channel count.
        channel_count: usize,
    },

    /// The sample buffer could not be reserved.
    #[error("Failed to allocate a buffer for {samples} samples")]
    Allocation {
        /// Number of samples requested.
        samples: usize,
    },

    /// The sample buffer holds no samples, so no statistic is defined.
    #[error("Cannot compute statistics on empty audio data")]
    EmptyInput,

    /// Buffer length and channel count disagree.
    #[error("Layout error: {0}")]
    Layout(String),
}

impl AudioStatsError {
    /// Returns true if the error was caused by the input file rather than by
    /// the crate's own bookkeeping.
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Open { .. }
                | Self::UnsupportedFormat { .. }
                | Self::NoAudioTrack { .. }
                | Self::MissingMetadata { .. }
                | Self::Decoder(_)
                | Self::TruncatedRead { .. }
                | Self::EmptyInput
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_read_message() {
        let err = AudioStatsError::TruncatedRead {
            path: PathBuf::from("audio.wav"),
            frames_read: 50,
            frames_expected: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("audio.wav"));
        assert!(msg.contains("50"));
        assert!(msg.contains("100"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_error_classification() {
        assert!(AudioStatsError::EmptyInput.is_input_error());
        assert!(!AudioStatsError::Layout("bad".to_string()).is_input_error());
        assert!(
            !AudioStatsError::SampleCountOverflow {
                frame_count: u64::MAX,
                channel_count: 2
            }
            .is_input_error()
        );
        assert!(!AudioStatsError::Allocation { samples: 1 << 40 }.is_input_error());
    }

    #[test]
    fn test_open_error_names_path() {
        let err = AudioStatsError::Open {
            path: PathBuf::from("missing.wav"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.wav"));
    }
}
