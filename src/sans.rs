//! Tick-level decoder core.
//!
//! This module is intended for applications that sample the serial lines
//! themselves. See [`crate::avec`] for decoding recorded captures.
//!
//! # Architecture
//!
//! One call to [`Decoder::advance`] is one processing tick. Every component
//! owns its state exclusively, and within a tick each component reads only
//! values committed on the previous tick. Components are evaluated in a
//! fixed order:
//!
//! 1. Two independent [`synchronizer::Synchronizer`]s move the raw secondary
//! clock and data line into the processing domain, delaying each by a fixed
//! number of ticks.
//!
//! 2. The [`gap::GapDetector`] counts ticks with both lines low.
//!
//! 3. The [`sampler::BitSampler`] shifts a data bit into its accumulator on
//! every rising clock edge seen while reading a word.
//!
//! 4. The frame state machine in [`frame`] moves between its four states. As
//! in the rest of this crate, states are zero-size, non-copy tokens whose
//! `advance` methods return a successor token.
//!
//! 5. The [`latch::ErrorLatch`] mirrors the external error line. An asserted
//! error, or a deasserted (active-low) reset, takes priority over all of the
//! above and returns every component to its initial state.
//!
//! A decoder for recorded captures begins at [`capture::CaptureHeader`],
//! which yields a [`Decoder`] configured from the capture itself.

pub mod capture;
pub mod config;
pub mod decoder;
pub mod frame;
pub mod gap;
pub mod latch;
pub mod sampler;
pub mod synchronizer;
pub mod tick;

pub use decoder::Decoder;
