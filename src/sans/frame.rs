//! States of the frame state machine.
//!
//! A frame is a gap followed by a word. The machine waits in [`Idle`] until a
//! gap begins, counts it out in [`GapCounting`], samples bits in
//! [`DataReading`], and presents the word for a single tick in
//! [`OutputReady`] before returning to [`Idle`]. There is no terminal state.

use either::Either::{self, Left, Right};
use log::trace;

/// State token waiting for the start of a gap.
#[derive(Debug, PartialEq, Eq)]
pub struct Idle(pub(super) ());

impl Idle {
    /// Transition to another state on the gap detector's output.
    pub fn advance(self, gap_active: bool) -> Either<GapCounting, Idle> {
        if gap_active {
            Left(GapCounting(()))
        } else {
            Right(self)
        }
    }
}

/// State token counting out a gap.
#[derive(Debug, PartialEq, Eq)]
pub struct GapCounting(pub(super) ());

impl GapCounting {
    /// Transition to another state once the gap counter reaches `exit_count`.
    ///
    /// See [`DecoderConfig::gap_exit_count`](super::config::DecoderConfig::gap_exit_count).
    pub fn advance(self, gap_count: u32, exit_count: u32) -> Either<DataReading, GapCounting> {
        if gap_count == exit_count {
            Left(DataReading(()))
        } else {
            Right(self)
        }
    }
}

/// State token sampling the bits of a word.
#[derive(Debug, PartialEq, Eq)]
pub struct DataReading(pub(super) ());

impl DataReading {
    /// Transition to another state once the bit sampler finishes a word.
    pub fn advance(self, finish_reading: bool) -> Either<OutputReady, DataReading> {
        if finish_reading {
            Left(OutputReady(()))
        } else {
            Right(self)
        }
    }
}

/// State token presenting a completed word.
#[derive(Debug, PartialEq, Eq)]
pub struct OutputReady(pub(super) ());

impl OutputReady {
    /// Transition unconditionally back to waiting.
    pub fn advance(self) -> Idle {
        Idle(())
    }
}

/// Signals observed by the state machine on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSignals {
    /// Gap detector output committed on the previous tick.
    pub gap_active: bool,
    /// Gap counter as updated on this tick.
    pub gap_count: u32,
    /// Sampler output committed on the previous tick.
    pub finish_reading: bool,
}

/// Any state of the frame state machine.
#[derive(Debug, PartialEq, Eq)]
pub enum FrameState {
    Idle(Idle),
    GapCounting(GapCounting),
    DataReading(DataReading),
    OutputReady(OutputReady),
}

/// The name of a [`FrameState`], without its token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    GapCounting,
    DataReading,
    OutputReady,
}

impl FrameState {
    /// The initial state, also entered on reset.
    pub fn new() -> Self {
        Self::Idle(Idle(()))
    }

    /// Advance by one tick.
    pub fn advance(self, signals: FrameSignals, exit_count: u32) -> Self {
        let before = self.phase();

        let next = match self {
            Self::Idle(s) => s
                .advance(signals.gap_active)
                .either(Self::GapCounting, Self::Idle),
            Self::GapCounting(s) => s
                .advance(signals.gap_count, exit_count)
                .either(Self::DataReading, Self::GapCounting),
            Self::DataReading(s) => s
                .advance(signals.finish_reading)
                .either(Self::OutputReady, Self::DataReading),
            Self::OutputReady(s) => Self::Idle(s.advance()),
        };

        if next.phase() != before {
            trace!("Frame state {before:?} -> {:?}.", next.phase());
        }

        next
    }

    /// The name of this state.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle(_) => Phase::Idle,
            Self::GapCounting(_) => Phase::GapCounting,
            Self::DataReading(_) => Phase::DataReading,
            Self::OutputReady(_) => Phase::OutputReady,
        }
    }

    /// Whether the output word is valid in this state.
    pub fn data_valid(&self) -> bool {
        matches!(self, Self::OutputReady(_))
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::new()
    }
}
