//! Decoding collaborator traits.
//!
//! Statistics never talk to a codec directly. They receive a [`SampleBuffer`]
//! produced by an [`AudioDecoder`], which in turn is opened by an [`AudioLoader`].
//! The production implementation lives in [`crate::decoding`]; tests substitute
//! in-memory loaders.
//!
//! # Resource release
//!
//! A decoder holds its codec and file resources for as long as it is alive and
//! releases them in `Drop`. Callers scope the decoder so that it is dropped
//! exactly once on every exit path, including early error returns.

use std::path::Path;

use crate::{AudioMetadata, AudioStatsResult, SampleBuffer};

/// Opens audio sources by path.
pub trait AudioLoader {
    /// Decoder handle produced by a successful open.
    type Decoder: AudioDecoder;

    /// Opens `path` and reads the stream metadata.
    ///
    /// # Errors
    /// Fails if the path does not exist, cannot be read, or is not a decodable
    /// audio format.
    fn open(&self, path: &Path) -> AudioStatsResult<Self::Decoder>;
}

/// An open, decodable audio stream.
pub trait AudioDecoder {
    /// Metadata declared by the container.
    fn metadata(&self) -> &AudioMetadata;

    /// Decodes up to `metadata().frame_count` frames into a single interleaved buffer.
    ///
    /// Returns the buffer together with the number of frames actually decoded,
    /// which is smaller than the declared count on truncated or corrupt input.
    ///
    /// # Errors
    /// Fails on codec errors that prevent decoding from continuing, or if the
    /// declared sample count cannot be allocated.
    fn read_all(&mut self) -> AudioStatsResult<(SampleBuffer, u64)>;
}
