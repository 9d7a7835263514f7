// src/core/decoder.rs
//
// Decodes audio files into an `AudioSample` plus the declared bitrate.
// Uses Symphonia for format-agnostic decoding.

use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::sample::AudioSample;
use crate::error::{DecodeError, MalformedInput};

/// A decoded file ready for evaluation
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub sample: AudioSample,
    /// Average bitrate of the encoded audio stream in kbps
    pub declared_bitrate_kbps: u32,
}

/// Decode an audio file to normalized floating-point samples
pub fn decode_audio(path: &Path) -> Result<DecodedAudio, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mut probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(DecodeError::Probe)?;

    let track = probed
        .format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoAudioTrack)?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DecodeError::MissingSampleRate)?;
    let codec_name = format!("{:?}", track.codec_params.codec);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut channels: Option<usize> = None;
    // Encoded bytes of the selected track only; tags and artwork are excluded
    let mut stream_bytes: u64 = 0;

    loop {
        let packet = match probed.format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break
            }
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if packet.track_id() != track_id {
            continue;
        }
        stream_bytes += packet.buf().len() as u64;

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(SymphoniaError::DecodeError(msg)) => {
                log::debug!("skipping undecodable packet in {}: {}", path.display(), msg);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if sample_buf.is_none() {
            let spec = *decoded.spec();
            channels = Some(spec.channels.count());
            sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
        }

        if let Some(ref mut buf) = sample_buf {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }
    }

    if samples.is_empty() {
        return Err(DecodeError::NoSamples);
    }

    let channels = channels.ok_or(MalformedInput::UnsupportedChannelCount(0))?;
    let sample = AudioSample::new(sample_rate, channels, samples)?;
    let declared_bitrate_kbps = average_bitrate_kbps(stream_bytes, sample.duration_secs());

    log::debug!(
        "decoded {}: {} Hz, {} ch, {:.2}s, {} kbps ({})",
        path.display(),
        sample.sample_rate(),
        sample.channels(),
        sample.duration_secs(),
        declared_bitrate_kbps,
        codec_name
    );

    Ok(DecodedAudio {
        sample,
        declared_bitrate_kbps,
    })
}

/// Average bitrate in whole kbps, never below 1
pub fn average_bitrate_kbps(stream_bytes: u64, duration_secs: f64) -> u32 {
    if duration_secs <= 0.0 {
        return 1;
    }
    let kbps = (stream_bytes as f64 * 8.0 / duration_secs / 1000.0).floor();
    (kbps as u32).max(1)
}
