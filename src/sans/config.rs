//! Decoder parameters, fixed at construction.

use thiserror::Error;

/// Maximum number of synchronizer stages.
pub const MAX_SYNC_STAGES: usize = 8;

/// An error validating decoder parameters.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The gap length is zero.
    #[error("Gap length must be at least one clock period.")]
    ZeroGapBits,
    /// The word width is zero.
    #[error("Word width must be at least one bit.")]
    ZeroDataWidth,
    /// The word width does not fit a `u64`.
    #[error("Word width ({0}) exceeds 64 bits.")]
    DataWidthTooLarge(u32),
    /// Too few processing ticks per secondary clock period to see its edges.
    #[error("Oversampling factor ({0}) must be at least 2.")]
    OversampleTooLow(u32),
    /// The gap threshold does not fit the gap counter.
    #[error("Gap threshold ({gap_bits} * {oversample_factor}) overflows.")]
    ThresholdOverflow { gap_bits: u32, oversample_factor: u32 },
    /// Unsupported synchronizer depth.
    #[error("Synchronizer stages ({0}) must be between 2 and {max}.", max = MAX_SYNC_STAGES)]
    SyncStages(usize),
}

/// Validated decoder parameters.
///
/// The default is the reference configuration: 8 clock periods of gap, 48-bit
/// words, 4 processing ticks per clock period and a 2-stage synchronizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    gap_bits: u32,
    data_width: u32,
    oversample_factor: u32,
    sync_stages: usize,
    threshold: u32,
}

impl DecoderConfig {
    /// Validate a set of decoder parameters.
    ///
    /// `gap_bits` is the gap length in secondary clock periods, `data_width`
    /// the number of bits per word, and `oversample_factor` the number of
    /// processing ticks per secondary clock period.
    pub fn new(
        gap_bits: u32,
        data_width: u32,
        oversample_factor: u32,
    ) -> Result<Self, ConfigError> {
        if gap_bits == 0 {
            Err(ConfigError::ZeroGapBits)?;
        }
        if data_width == 0 {
            Err(ConfigError::ZeroDataWidth)?;
        }
        if data_width > u64::BITS {
            Err(ConfigError::DataWidthTooLarge(data_width))?;
        }
        if oversample_factor < 2 {
            Err(ConfigError::OversampleTooLow(oversample_factor))?;
        }

        let threshold = gap_bits.checked_mul(oversample_factor).ok_or(
            ConfigError::ThresholdOverflow {
                gap_bits,
                oversample_factor,
            },
        )?;

        Ok(Self {
            gap_bits,
            data_width,
            oversample_factor,
            sync_stages: 2,
            threshold,
        })
    }

    /// Replace the number of synchronizer stages.
    pub fn with_sync_stages(self, sync_stages: usize) -> Result<Self, ConfigError> {
        if !(2..=MAX_SYNC_STAGES).contains(&sync_stages) {
            Err(ConfigError::SyncStages(sync_stages))?;
        }

        Ok(Self {
            sync_stages,
            ..self
        })
    }

    /// Gap length in secondary clock periods.
    pub fn gap_bits(&self) -> u32 {
        self.gap_bits
    }

    /// Number of bits per word.
    pub fn data_width(&self) -> u32 {
        self.data_width
    }

    /// Number of processing ticks per secondary clock period.
    pub fn oversample_factor(&self) -> u32 {
        self.oversample_factor
    }

    /// Number of synchronizer stages on each input.
    pub fn sync_stages(&self) -> usize {
        self.sync_stages
    }

    /// Number of idle ticks making up a full gap.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Gap counter value on which the frame state machine starts reading.
    ///
    /// The counter must reach one short of the threshold on the tick the state
    /// machine leaves gap counting, so the tick itself is idle.
    pub fn gap_exit_count(&self) -> u32 {
        self.threshold - 1
    }

    /// Mask covering the low `data_width` bits of a word.
    pub fn word_mask(&self) -> u64 {
        u64::MAX >> (u64::BITS - self.data_width)
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            gap_bits: 8,
            data_width: 48,
            oversample_factor: 4,
            sync_stages: 2,
            threshold: 32,
        }
    }
}
