//! Core trait definitions for sample-buffer statistics.

use crate::{AudioStatsResult, StatisticsResult};

/// Statistical analysis operations for decoded audio.
///
/// Whole-buffer methods treat the interleaved samples as one flat sequence;
/// channels are not separated. Use [`channel_statistics`](Self::channel_statistics)
/// for a per-channel breakdown.
///
/// Every method fails with [`AudioStatsError::EmptyInput`](crate::AudioStatsError::EmptyInput)
/// when there are no samples to analyse.
pub trait AudioStatistics {
    /// Arithmetic mean of all samples.
    fn mean(&self) -> AudioStatsResult<f32>;

    /// Population standard deviation of all samples around [`mean`](Self::mean).
    fn std_dev(&self) -> AudioStatsResult<f32>;

    /// Mean computed by incremental accumulation.
    fn running_mean(&self) -> AudioStatsResult<f32>;

    /// Standard deviation computed in a single sum-of-squares pass.
    fn running_std_dev(&self) -> AudioStatsResult<f32>;

    /// All four statistics in one record.
    fn statistics(&self) -> AudioStatsResult<StatisticsResult>;

    /// The four statistics for each channel, in channel order.
    fn channel_statistics(&self) -> AudioStatsResult<Vec<StatisticsResult>>;
}
