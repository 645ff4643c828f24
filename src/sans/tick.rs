//! Inputs and outputs of a single processing tick.

use tartan_bitfield::bitfield;

/// Raw signal levels sampled on one processing tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickInputs {
    /// Secondary (data) clock, asynchronous.
    pub secondary_clock: bool,
    /// Serial data line, asynchronous.
    pub serial_data: bool,
    /// Active-low reset: the decoder only runs while this is `true`.
    pub reset: bool,
    /// Active-high external error.
    pub error: bool,
}

impl TickInputs {
    /// Running inputs with the given line levels.
    pub const fn new(secondary_clock: bool, serial_data: bool) -> Self {
        Self {
            secondary_clock,
            serial_data,
            reset: true,
            error: false,
        }
    }

    /// Running inputs with both lines low.
    pub const fn idle() -> Self {
        Self::new(false, false)
    }

    /// Inputs holding the decoder in reset.
    pub const fn held_in_reset() -> Self {
        Self {
            reset: false,
            ..Self::idle()
        }
    }

    /// Inputs asserting the external error.
    pub const fn with_error(self, error: bool) -> Self {
        Self { error, ..self }
    }

    /// Decode a packed capture sample.
    ///
    /// Bit 0 holds the secondary clock, bit 1 the serial data line, bit 2 the
    /// active-low reset, and bit 3 the external error. Other bits are ignored.
    pub fn from_sample(r: u8) -> Self {
        bitfield! {
            struct Sample(u8) {
                [0] secondary_clock,
                [1] serial_data,
                [2] reset,
                [3] error,
            }
        }

        let sample = Sample(r);

        Self {
            secondary_clock: sample.secondary_clock(),
            serial_data: sample.serial_data(),
            reset: sample.reset(),
            error: sample.error(),
        }
    }
}

impl Default for TickInputs {
    fn default() -> Self {
        Self::idle()
    }
}

/// Decoder outputs after one processing tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutputs {
    /// Last completed word. Only meaningful while `data_valid` is set.
    pub output_word: u64,
    /// Set for exactly one tick per completed frame.
    pub data_valid: bool,
    /// Mirror of the error input.
    pub error_out: bool,
}

impl TickOutputs {
    /// The output word, if valid on this tick.
    pub fn word(&self) -> Option<u64> {
        self.data_valid.then_some(self.output_word)
    }
}
