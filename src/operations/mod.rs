//! Statistical operations over decoded samples.
//!
//! ## Module Organization
//!
//! - [`traits`] - the [`AudioStatistics`] trait
//! - [`statistics`] - the numeric kernels and the trait implementation for
//!   [`SampleBuffer`](crate::SampleBuffer)
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_stats::{AudioStatistics, SampleBuffer};
//!
//! let buffer = SampleBuffer::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], 1).unwrap();
//! let stats = buffer.statistics().unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert!((stats.standard_deviation - 2.0f32.sqrt()).abs() < 1e-6);
//! ```

pub mod statistics;
pub mod traits;

pub use statistics::{mean, running_mean, running_variance, standard_deviation, summarize};
pub use traits::AudioStatistics;
