//! Core sample representation and data structures.
//!
//! - [`AudioMetadata`] - what the container declares about the audio (frames, channels, rate)
//! - [`SampleBuffer`] - the decoded, interleaved samples, owned for the whole run
//! - [`StatisticsResult`] - the four statistics reported for a run
//!
//! # Memory Layout
//!
//! Samples are stored interleaved: the sample for frame `f`, channel `c` lives at
//! index `f * channel_count + c`. The whole-buffer statistics treat the buffer as a
//! flat sequence; per-channel analysis goes through [`SampleBuffer::as_frames`], an
//! `ndarray` view with shape `(frames, channels)`.
//!
//! ```rust
//! use audio_stats::SampleBuffer;
//!
//! let buffer = SampleBuffer::new(vec![1.0, -1.0, 1.0, -1.0], 2).unwrap();
//! assert_eq!(buffer.frames(), 2);
//! assert_eq!(buffer.as_frames().unwrap().column(1).to_vec(), vec![-1.0, -1.0]);
//! ```

use std::fmt;

use ndarray::ArrayView2;

use crate::{AudioStatsError, AudioStatsResult};

/// Properties of an audio stream as declared by its container, before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct AudioMetadata {
    /// Total number of frames (one sample per channel) the stream declares.
    pub frame_count: u64,
    /// Number of interleaved channels.
    pub channel_count: usize,
    /// Sample rate in Hz, when known.
    pub sample_rate: Option<u32>,
}

impl AudioMetadata {
    /// Creates metadata for a stream without a known sample rate.
    pub const fn new(frame_count: u64, channel_count: usize) -> Self {
        Self {
            frame_count,
            channel_count,
            sample_rate: None,
        }
    }

    /// Attaches a sample rate.
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Number of interleaved samples the buffer must hold: `frame_count × channel_count`.
    ///
    /// # Errors
    /// Returns [`AudioStatsError::SampleCountOverflow`] if the product does not fit in `usize`.
    pub fn sample_count(&self) -> AudioStatsResult<usize> {
        usize::try_from(self.frame_count)
            .ok()
            .and_then(|frames| frames.checked_mul(self.channel_count))
            .ok_or(AudioStatsError::SampleCountOverflow {
                frame_count: self.frame_count,
                channel_count: self.channel_count,
            })
    }

    /// Duration of the stream in seconds, if the sample rate is known.
    pub fn duration_seconds(&self) -> Option<f64> {
        match self.sample_rate {
            Some(rate) if rate > 0 => Some(self.frame_count as f64 / rate as f64),
            _ => None,
        }
    }
}

/// An owned buffer of interleaved `f32` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    channel_count: usize,
}

impl SampleBuffer {
    /// Wraps interleaved samples.
    ///
    /// # Errors
    /// Returns [`AudioStatsError::Layout`] if `channel_count` is zero or the number of
    /// samples is not a whole number of frames.
    pub fn new(samples: Vec<f32>, channel_count: usize) -> AudioStatsResult<Self> {
        if channel_count == 0 {
            return Err(AudioStatsError::Layout(
                "channel count must be at least 1".to_string(),
            ));
        }
        if samples.len() % channel_count != 0 {
            return Err(AudioStatsError::Layout(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channel_count
            )));
        }
        Ok(Self {
            samples,
            channel_count,
        })
    }

    /// The samples as one flat, interleaved slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Consumes the buffer, returning the interleaved samples.
    pub fn into_inner(self) -> Vec<f32> {
        self.samples
    }

    /// Total number of samples across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of interleaved channels.
    pub const fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Number of complete frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channel_count
    }

    /// A `(frames, channels)` view over the interleaved samples. Column `c` is channel `c`.
    ///
    /// # Errors
    /// Returns [`AudioStatsError::Layout`] if the view cannot be built over the buffer.
    pub fn as_frames(&self) -> AudioStatsResult<ArrayView2<'_, f32>> {
        ArrayView2::from_shape((self.frames(), self.channel_count), &self.samples)
            .map_err(|e| AudioStatsError::Layout(e.to_string()))
    }
}

/// The four statistics reported for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct StatisticsResult {
    /// Mean accumulated incrementally.
    pub running_mean: f32,
    /// Standard deviation from the single-pass sum-of-squares formulation.
    pub running_standard_deviation: f32,
    /// Arithmetic mean.
    pub mean: f32,
    /// Population standard deviation around [`mean`](Self::mean).
    pub standard_deviation: f32,
}

impl fmt::Display for StatisticsResult {
    /// One value per line: running mean, running standard deviation, mean, standard deviation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.running_mean)?;
        writeln!(f, "{}", self.running_standard_deviation)?;
        writeln!(f, "{}", self.mean)?;
        writeln!(f, "{}", self.standard_deviation)
    }
}
