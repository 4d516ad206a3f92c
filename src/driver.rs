//! Load, validate and analyse one file.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::operations::{AudioStatistics, summarize};
use crate::traits::{AudioDecoder, AudioLoader};
use crate::{
    AnalysisConfig, AudioStatsError, AudioStatsResult, EmptyInputPolicy, SampleBuffer,
    StatisticsResult,
};

/// Opens `path` and decodes every frame into memory.
///
/// The decoder is dropped before this function returns, on success and on every
/// error path.
///
/// # Errors
/// Propagates open and decode failures, and returns
/// [`AudioStatsError::TruncatedRead`] when the number of decoded frames differs
/// from the number the container declared.
pub fn read_samples<L: AudioLoader>(loader: &L, path: &Path) -> AudioStatsResult<SampleBuffer> {
    let mut decoder = loader.open(path)?;
    let frames_expected = decoder.metadata().frame_count;

    let (buffer, frames_read) = decoder.read_all()?;
    if frames_read != frames_expected {
        warn!(path = %path.display(), frames_read, frames_expected, "incomplete read");
        return Err(AudioStatsError::TruncatedRead {
            path: path.to_path_buf(),
            frames_read,
            frames_expected,
        });
    }

    debug!(
        path = %path.display(),
        frames = frames_read,
        channels = buffer.channel_count(),
        "loaded samples"
    );
    Ok(buffer)
}

/// Runs the full pipeline for `config.input`: load, check completeness, compute.
///
/// # Errors
/// Any error from [`read_samples`], or [`AudioStatsError::EmptyInput`] for a
/// zero-sample buffer under [`EmptyInputPolicy::Reject`].
pub fn analyze<L: AudioLoader>(
    loader: &L,
    config: &AnalysisConfig,
) -> AudioStatsResult<StatisticsResult> {
    let buffer = read_samples(loader, &config.input)?;

    let result = match config.empty_input {
        EmptyInputPolicy::Reject => buffer.statistics()?,
        EmptyInputPolicy::Propagate => summarize(buffer.as_slice()),
    };

    info!(path = %config.input.display(), samples = buffer.len(), "analysis complete");
    debug!(?result, "statistics");
    Ok(result)
}
