// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # AudioStats
//!
//! Loads an audio file fully into memory and reports four descriptive statistics over
//! its interleaved samples: the mean, the population standard deviation, a running
//! (incrementally accumulated) mean and a running standard deviation.
//!
//! ## Pipeline
//!
//! 1. An [`AudioLoader`] opens the file and reads its [`AudioMetadata`].
//! 2. The [`AudioDecoder`] decodes every frame into one [`SampleBuffer`].
//! 3. [`driver::read_samples`] checks that the decoder produced exactly the declared
//!    number of frames.
//! 4. The statistics in [`operations`] are evaluated over the flat buffer.
//!
//! ## Error Handling
//!
//! ```rust
//! use audio_stats::{AudioStatsError, AudioStatsResult};
//! use std::path::PathBuf;
//!
//! let result: AudioStatsResult<()> = Err(AudioStatsError::TruncatedRead {
//!     path: PathBuf::from("audio.wav"),
//!     frames_read: 50,
//!     frames_expected: 100,
//! });
//!
//! match result {
//!     Ok(()) => {}
//!     Err(AudioStatsError::TruncatedRead { frames_read, .. }) => {
//!         eprintln!("short read: {frames_read}")
//!     }
//!     Err(other_err) => eprintln!("Other error: {other_err}"),
//! }
//! ```
//!
//! ## Basic Statistics
//!
//! ```rust
//! use audio_stats::{AudioStatistics, SampleBuffer};
//!
//! // Two channels, two frames, interleaved.
//! let buffer = SampleBuffer::new(vec![1.0, -1.0, 1.0, -1.0], 2).unwrap();
//! let stats = buffer.statistics().unwrap();
//! assert_eq!(stats.mean, 0.0);
//! assert_eq!(stats.standard_deviation, 1.0);
//! ```
//!
//! ## Features
//!
//! - `serialization`: derives `serde::Serialize` for [`AudioMetadata`] and [`StatisticsResult`]
//!
//! ## License
//!
//! MIT License

pub mod config;
pub mod decoding;
pub mod driver;
mod error;
pub mod operations;
mod repr;
pub mod traits;

pub use crate::config::{AnalysisConfig, EmptyInputPolicy};
pub use crate::decoding::{SymphoniaDecoder, SymphoniaLoader};
pub use crate::driver::{analyze, read_samples};
pub use crate::error::{AudioStatsError, AudioStatsResult};
pub use crate::operations::AudioStatistics;
pub use crate::repr::{AudioMetadata, SampleBuffer, StatisticsResult};
pub use crate::traits::{AudioDecoder, AudioLoader};

use num_traits::{Float, NumCast};

/// Marker trait for real floating-point types (f32, f64)
pub trait RealFloat: Float + NumCast {}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// Casts a numeric value into the target floating-point type `F`.
///
/// Used by the statistics kernels to turn sample counts into the precision
/// they accumulate in, so one implementation serves both `f32` and `f64`.
///
/// # Examples
/// ```
/// use audio_stats::to_precision;
///
/// let count: f32 = to_precision(5usize);
/// assert_eq!(count, 5.0);
///
/// let count: f64 = to_precision(5usize);
/// assert_eq!(count, 5.0);
/// ```
///
/// # Panics
/// Panics if the numeric conversion fails. Integer to float conversions never do.
#[inline(always)]
pub fn to_precision<F, T>(value: T) -> F
where
    F: RealFloat,
    T: NumCast,
{
    NumCast::from(value).expect("safe_cast: valid numeric conversion")
}
