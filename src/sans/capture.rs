//! Entry state for recorded captures.
//!
//! A capture is a 16-byte header followed by one packed sample per processing
//! tick (see [`TickInputs::from_sample`](super::tick::TickInputs::from_sample)).

use log::warn;
use thiserror::Error;
use zerocopy::FromBytes;

use super::{
    config::{ConfigError, DecoderConfig},
    decoder::Decoder,
};

/// An error advancing over a capture header.
#[derive(Debug, Error)]
pub enum CaptureHeaderError {
    /// Incorrect capture marker.
    #[error("Incorrect capture marker.")]
    NotCapture,
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    UnknownHeaderLength(u8),
    /// Unknown capture format version.
    #[error("Unsupported capture version ({0}).")]
    UnsupportedVersion(u8),
    /// The recorded decoder parameters are invalid.
    #[error("Invalid decoder configuration: {0}")]
    Config(#[from] ConfigError),
}

/// State token to decode a capture header.
#[derive(Debug)]
pub struct CaptureHeader;

impl CaptureHeader {
    /// Size of a capture header in bytes.
    pub const SIZE: usize = 16;

    /// Transition to decoding samples by decoding a capture header.
    ///
    /// Returns the number of samples in this capture, and a decoder configured
    /// with the recorded parameters.
    pub fn advance(r: [u8; 16]) -> Result<(u32, Decoder), CaptureHeaderError> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct FileHeader {
            header_size: u8,
            version: u8,
            gap_bits: [u8; 2],
            data_width: u8,
            oversample_factor: u8,
            sync_stages: u8,
            _reserved: u8,
            sample_count: [u8; 4],
            marker: [u8; 4],
        }

        let FileHeader {
            header_size,
            version,
            gap_bits,
            data_width,
            oversample_factor,
            sync_stages,
            sample_count,
            marker,
            ..
        } = zerocopy::transmute!(r);

        if &marker != b".GFC" {
            warn!("Rejecting capture with marker {marker:?}.");
            Err(CaptureHeaderError::NotCapture)?;
        }

        if header_size as usize != Self::SIZE {
            warn!("Rejecting capture with a {header_size} byte header.");
            Err(CaptureHeaderError::UnknownHeaderLength(header_size))?;
        }

        if version != 1 {
            warn!("Rejecting capture format version {version}.");
            Err(CaptureHeaderError::UnsupportedVersion(version))?;
        }

        let config = DecoderConfig::new(
            u16::from_le_bytes(gap_bits).into(),
            data_width.into(),
            oversample_factor.into(),
        )
        .and_then(|c| c.with_sync_stages(sync_stages.into()))
        .inspect_err(|err| warn!("Rejecting capture configuration: {err}"))?;

        Ok((u32::from_le_bytes(sample_count), Decoder::new(config)))
    }
}
