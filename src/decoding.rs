//! File decoding through `symphonia`.
//!
//! [`SymphoniaLoader`] probes the container, picks the first track with a real codec
//! and hands back a [`SymphoniaDecoder`] that decodes the whole track into one
//! interleaved `f32` buffer.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use symphonia::core::audio::SampleBuffer as DecodedSamples;
use symphonia::core::codecs::{CODEC_TYPE_NULL, Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, info, warn};

use crate::traits::{AudioDecoder, AudioLoader};
use crate::{AudioMetadata, AudioStatsError, AudioStatsResult, SampleBuffer};

/// Opens audio files with any container/codec enabled in `symphonia`'s default registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaLoader {
    format_options: FormatOptions,
    decoder_options: DecoderOptions,
}

impl SymphoniaLoader {
    /// Creates a loader with default probe and decoder options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables codec-level verification of decoded data where the codec supports it.
    pub const fn with_verify(mut self, verify: bool) -> Self {
        self.decoder_options.verify = verify;
        self
    }
}

impl AudioLoader for SymphoniaLoader {
    type Decoder = SymphoniaDecoder;

    fn open(&self, path: &Path) -> AudioStatsResult<SymphoniaDecoder> {
        let file = File::open(path).map_err(|source| AudioStatsError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source_len = file
            .metadata()
            .map_err(|source| AudioStatsError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &self.format_options,
                &MetadataOptions::default(),
            )
            .map_err(|err| AudioStatsError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: match err {
                    SymphoniaError::Unsupported(reason) => reason.to_string(),
                    other => other.to_string(),
                },
            })?;
        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| AudioStatsError::NoAudioTrack {
                path: path.to_path_buf(),
            })?;
        let track_id = track.id;
        let params = track.codec_params.clone();

        let missing = |field| AudioStatsError::MissingMetadata {
            path: path.to_path_buf(),
            field,
        };
        let frame_count = params.n_frames.ok_or_else(|| missing("frame count"))?;
        let channel_count = params
            .channels
            .map(|channels| channels.count())
            .filter(|&count| count > 0)
            .ok_or_else(|| missing("channel count"))?;

        let mut metadata = AudioMetadata::new(frame_count, channel_count);
        if let Some(rate) = params.sample_rate {
            metadata = metadata.with_sample_rate(rate);
        }

        let decoder = symphonia::default::get_codecs().make(&params, &self.decoder_options)?;

        info!(
            path = %path.display(),
            frames = frame_count,
            channels = channel_count,
            sample_rate = ?metadata.sample_rate,
            "opened audio stream"
        );

        Ok(SymphoniaDecoder {
            path: path.to_path_buf(),
            format,
            decoder,
            track_id,
            metadata,
            source_len,
        })
    }
}

/// A decoder bound to one track of one open file.
///
/// The file handle and codec state are released when this value is dropped.
pub struct SymphoniaDecoder {
    path: PathBuf,
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    metadata: AudioMetadata,
    source_len: u64,
}

impl SymphoniaDecoder {
    /// Path this decoder was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AudioDecoder for SymphoniaDecoder {
    fn metadata(&self) -> &AudioMetadata {
        &self.metadata
    }

    fn read_all(&mut self) -> AudioStatsResult<(SampleBuffer, u64)> {
        let capacity = self.metadata.sample_count()?;
        let channel_count = self.metadata.channel_count;
        // The header's frame count is untrusted. PCM needs at least one byte per sample,
        // so the file size bounds the up-front reservation; compressed streams grow past it.
        let reserve = usize::try_from(self.source_len).map_or(capacity, |len| capacity.min(len));
        let mut samples: Vec<f32> = Vec::new();
        samples
            .try_reserve_exact(reserve)
            .map_err(|_| AudioStatsError::Allocation { samples: reserve })?;

        while samples.len() < capacity {
            let packet = match self.format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(err)) if err.kind() == ErrorKind::UnexpectedEof => {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => {
                    warn!(
                        path = %self.path.display(),
                        "track list changed mid-stream, stopping read"
                    );
                    break;
                }
                Err(err) => return Err(err.into()),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            match self.decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    if spec.channels.count() != channel_count {
                        return Err(AudioStatsError::Layout(format!(
                            "packet has {} channels, stream declared {}",
                            spec.channels.count(),
                            channel_count
                        )));
                    }
                    let mut packet_samples =
                        DecodedSamples::<f32>::new(decoded.capacity() as u64, spec);
                    packet_samples.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(packet_samples.samples());
                }
                Err(SymphoniaError::DecodeError(reason)) => {
                    warn!(path = %self.path.display(), reason, "skipping corrupt packet");
                }
                Err(SymphoniaError::IoError(err)) if err.kind() == ErrorKind::UnexpectedEof => {
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        // Frames past the declared length are not part of the stream.
        samples.truncate(capacity);

        let frames_read = (samples.len() / channel_count) as u64;
        samples.truncate(frames_read as usize * channel_count);
        debug!(
            path = %self.path.display(),
            frames_read,
            frames_expected = self.metadata.frame_count,
            "decoded stream"
        );

        Ok((SampleBuffer::new(samples, channel_count)?, frames_read))
    }
}

impl Drop for SymphoniaDecoder {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "closing audio stream");
    }
}
