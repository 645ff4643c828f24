//! Convenience interfaces for decoding recorded captures.
//!
//! The functions in this module decode captures from slices and readers,
//! publishing to the [`FromWords`] trait.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use crate::sans::{Decoder, tick::TickInputs};

/// Receive the events of a decoding session.
///
/// Ticks are counted from zero at the first sample after the capture header.
///
/// The default implementation of each method ignores received events.
#[allow(unused_variables)]
pub trait FromWords {
    /// Add a completed word, on the single tick it is valid.
    fn add_word(&mut self, tick: u64, word: u64) {}
    /// Note that the external error was raised.
    fn add_error(&mut self, tick: u64) {}
}

#[cfg(feature = "std")]
impl FromWords for std::vec::Vec<u64> {
    fn add_word(&mut self, _: u64, word: u64) {
        self.push(word);
    }
}

#[cfg(feature = "std")]
extern crate std;

/// Advance a decoder over packed samples, publishing to a receiver.
///
/// Returns the number of samples consumed.
pub fn run(
    decoder: &mut Decoder,
    samples: impl IntoIterator<Item = u8>,
    o: &mut impl FromWords,
) -> u64 {
    let mut tick = 0;

    for sample in samples {
        step(decoder, tick, sample, o);
        tick += 1;
    }

    tick
}

/// Advance a decoder over a single packed sample.
pub(crate) fn step(decoder: &mut Decoder, tick: u64, sample: u8, o: &mut impl FromWords) {
    let outputs = decoder.advance(TickInputs::from_sample(sample));

    if decoder.error_latch().raised() {
        o.add_error(tick);
    }

    if let Some(word) = outputs.word() {
        o.add_word(tick, word);
    }
}
