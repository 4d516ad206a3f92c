//! Statistical analysis operations for decoded samples.
//!
//! The free functions are the numeric kernels. They take a flat slice (its length
//! is `n`), never mutate it and use O(1) scratch. They do not check for empty input:
//! an empty slice gives `NaN` from [`mean`] and [`standard_deviation`] and `0` from
//! the running variants, exactly as the formulas evaluate.
//!
//! The [`AudioStatistics`] implementation for [`SampleBuffer`] wraps the kernels
//! and rejects empty buffers up front.

use super::traits::AudioStatistics;
use crate::{
    AudioStatsError, AudioStatsResult, RealFloat, SampleBuffer, StatisticsResult, to_precision,
};

/// Arithmetic mean: `sum(samples) / n`.
pub fn mean<F: RealFloat>(samples: &[F]) -> F {
    let total = samples.iter().fold(F::zero(), |acc, &x| acc + x);
    total / to_precision::<F, _>(samples.len())
}

/// Population standard deviation around a precomputed `mean`.
///
/// `variance = (1/n) * sum((x_i - mean)^2)`. The mean is not recomputed, so it must
/// come from the same samples.
pub fn standard_deviation<F: RealFloat>(samples: &[F], mean: F) -> F {
    let squared_deviations = samples.iter().fold(F::zero(), |acc, &x| {
        let deviation = x - mean;
        acc + deviation * deviation
    });
    (squared_deviations / to_precision::<F, _>(samples.len())).sqrt()
}

/// Mean computed incrementally, updating `sum_so_far / count_so_far` after every sample.
///
/// Returns the mean after the last sample. Agrees with [`mean`] up to rounding.
pub fn running_mean<F: RealFloat>(samples: &[F]) -> F {
    let mut mean = F::zero();
    let mut count = F::zero();
    let mut sum = F::zero();

    for &sample in samples {
        count = count + F::one();
        sum = sum + sample;
        mean = sum / count;
    }

    mean
}

/// Running standard deviation from a single sum / sum-of-squares pass.
///
/// After each sample this evaluates `(sum_squares - running_sum^2 / n) / n` where `n`
/// is the *total* sample count, not the number of samples seen so far. Only the value
/// after the last sample is a variance; the intermediate values have no statistical
/// meaning. The division by the total count is kept as is because the reported value
/// depends on it.
///
/// The result is `sqrt((sum(x^2) - sum(x)^2 / n) / n)`, the population standard
/// deviation via the sum-of-squares identity. Cancellation can push the variance
/// slightly below zero for near-constant input, in which case the result is `NaN`.
pub fn running_variance<F: RealFloat>(samples: &[F]) -> F {
    let n = to_precision::<F, _>(samples.len());
    let mut running_sum = F::zero();
    let mut sum_squares = F::zero();
    let mut variance = F::zero();

    for &sample in samples {
        running_sum = running_sum + sample;
        sum_squares = sum_squares + sample * sample;

        let current_sum_square_avg = running_sum * running_sum / n;
        variance = (sum_squares - current_sum_square_avg) / n;
    }

    variance.sqrt()
}

/// Computes all four statistics without checking for empty input.
pub fn summarize(samples: &[f32]) -> StatisticsResult {
    let mean_of_samples = mean(samples);
    StatisticsResult {
        running_mean: running_mean(samples),
        running_standard_deviation: running_variance(samples),
        mean: mean_of_samples,
        standard_deviation: standard_deviation(samples, mean_of_samples),
    }
}

impl SampleBuffer {
    fn non_empty(&self) -> AudioStatsResult<&[f32]> {
        if self.is_empty() {
            return Err(AudioStatsError::EmptyInput);
        }
        Ok(self.as_slice())
    }
}

impl AudioStatistics for SampleBuffer {
    fn mean(&self) -> AudioStatsResult<f32> {
        Ok(mean(self.non_empty()?))
    }

    /// Uses [`mean`](AudioStatistics::mean) of the same buffer as the centre.
    fn std_dev(&self) -> AudioStatsResult<f32> {
        let samples = self.non_empty()?;
        Ok(standard_deviation(samples, mean(samples)))
    }

    fn running_mean(&self) -> AudioStatsResult<f32> {
        Ok(running_mean(self.non_empty()?))
    }

    fn running_std_dev(&self) -> AudioStatsResult<f32> {
        Ok(running_variance(self.non_empty()?))
    }

    fn statistics(&self) -> AudioStatsResult<StatisticsResult> {
        Ok(summarize(self.non_empty()?))
    }

    /// Channels are de-interleaved through the `(frames, channels)` view.
    fn channel_statistics(&self) -> AudioStatsResult<Vec<StatisticsResult>> {
        self.non_empty()?;
        let frames = self.as_frames()?;
        Ok(frames
            .columns()
            .into_iter()
            .map(|channel| summarize(&channel.to_vec()))
            .collect())
    }
}
