//! Bit sampling and word assembly.

use log::debug;

use super::config::DecoderConfig;

/// Shift register sampling the data line on rising secondary clock edges.
///
/// The edge detector runs every tick. Samples are only taken while the frame
/// state machine is reading data; each one enters the accumulator as its
/// least-significant bit, so the first bit of a word ends up most
/// significant.
///
/// `reading` is set by the first sampled bit of a word and cleared once the
/// word completes. While it is clear the bit counter is held at zero.
#[derive(Clone, Debug)]
pub struct BitSampler {
    width: u32,
    mask: u64,
    previous_clock: bool,
    accumulator: u64,
    count: u32,
    reading: bool,
    finish: bool,
}

impl BitSampler {
    /// Build a sampler with no word in flight.
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            width: config.data_width(),
            mask: config.word_mask(),
            previous_clock: false,
            accumulator: 0,
            count: 0,
            reading: false,
            finish: false,
        }
    }

    /// Observe this tick's synchronized clock and data line.
    ///
    /// `enabled` is whether the frame state machine was reading data as of the
    /// previous tick. Returns the assembled word on the tick its final bit is
    /// sampled, leaving the accumulator empty.
    pub fn advance(&mut self, clock: bool, data: bool, enabled: bool) -> Option<u64> {
        let rising = clock && !self.previous_clock;
        self.previous_clock = clock;
        self.finish = false;

        if !self.reading {
            self.count = 0;
        }

        if !(enabled && rising) {
            return None;
        }

        self.accumulator = ((self.accumulator << 1) | u64::from(data)) & self.mask;

        if self.count == self.width - 1 {
            self.finish = true;
            self.count = 0;
            self.reading = false;

            let word = core::mem::take(&mut self.accumulator);
            debug!("Assembled {}-bit word {word:#x}.", self.width);
            Some(word)
        } else {
            self.count += 1;
            self.reading = true;
            None
        }
    }

    /// Discard any partial word and forget the previous clock level.
    pub fn reset(&mut self) {
        if self.reading {
            debug!("Discarding partial word after {} bits.", self.count);
        }

        self.previous_clock = false;
        self.accumulator = 0;
        self.count = 0;
        self.reading = false;
        self.finish = false;
    }

    /// Whether a word completed on the last tick.
    pub fn finish_reading(&self) -> bool {
        self.finish
    }

    /// Whether a word is partially assembled.
    pub fn is_reading(&self) -> bool {
        self.reading
    }

    /// Bits of the partial word, most recent least significant.
    pub fn accumulator(&self) -> u64 {
        self.accumulator
    }

    /// Number of bits in the partial word.
    pub fn bits_received(&self) -> u32 {
        if self.reading { self.count } else { 0 }
    }
}
