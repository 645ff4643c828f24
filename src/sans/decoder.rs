//! Top-level wiring of the decoder components.

use log::debug;

use super::{
    config::DecoderConfig,
    frame::{FrameSignals, FrameState, Phase},
    gap::GapDetector,
    latch::ErrorLatch,
    sampler::BitSampler,
    synchronizer::Synchronizer,
    tick::{TickInputs, TickOutputs},
};

/// A complete receiver, advanced one processing tick at a time.
#[derive(Debug)]
pub struct Decoder {
    config: DecoderConfig,
    clock_sync: Synchronizer,
    data_sync: Synchronizer,
    gap: GapDetector,
    sampler: BitSampler,
    state: FrameState,
    latch: ErrorLatch,
    word: u64,
}

impl Decoder {
    /// Build a decoder in its reset state.
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            clock_sync: Synchronizer::from_config(&config),
            data_sync: Synchronizer::from_config(&config),
            gap: GapDetector::new(&config),
            sampler: BitSampler::new(&config),
            state: FrameState::new(),
            latch: ErrorLatch::default(),
            word: 0,
        }
    }

    /// Advance every component by one processing tick.
    ///
    /// An asserted error or deasserted reset returns the gap detector, bit
    /// sampler and frame state machine to their initial states on this tick,
    /// discarding any partial word. The synchronizers keep sampling
    /// throughout, as they hold no decode state.
    pub fn advance(&mut self, inputs: TickInputs) -> TickOutputs {
        let clock = self.clock_sync.advance(inputs.secondary_clock);
        let data = self.data_sync.advance(inputs.serial_data);

        if self.latch.advance(inputs.error, inputs.reset) {
            if self.state.phase() != Phase::Idle {
                debug!(
                    "Returning to idle from {:?} (error: {}, reset: {}).",
                    self.state.phase(),
                    inputs.error,
                    !inputs.reset
                );
            }

            self.clear();

            return TickOutputs {
                output_word: self.word,
                data_valid: false,
                error_out: self.latch.error_out(),
            };
        }

        // Values committed on the previous tick.
        let gap_active = self.gap.is_active();
        let finish_reading = self.sampler.finish_reading();
        let reading = self.state.phase() == Phase::DataReading;

        self.gap.advance(clock, data);

        let signals = FrameSignals {
            gap_active,
            gap_count: self.gap.count(),
            finish_reading,
        };

        if let Some(word) = self.sampler.advance(clock, data, reading) {
            self.word = word;
        }

        let state = core::mem::take(&mut self.state);
        self.state = state.advance(signals, self.config.gap_exit_count());

        TickOutputs {
            output_word: self.word,
            data_valid: self.state.data_valid(),
            error_out: self.latch.error_out(),
        }
    }

    fn clear(&mut self) {
        self.gap.reset();
        self.sampler.reset();
        self.state = FrameState::new();
        self.word = 0;
    }

    /// Parameters this decoder was built with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Current frame state.
    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// Name of the current frame state.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The gap detector.
    pub fn gap(&self) -> &GapDetector {
        &self.gap
    }

    /// The bit sampler.
    pub fn sampler(&self) -> &BitSampler {
        &self.sampler
    }

    /// The error latch.
    pub fn error_latch(&self) -> &ErrorLatch {
        &self.latch
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}
