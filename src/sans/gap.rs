//! Inter-word gap detection.

use super::config::DecoderConfig;

/// Counter of consecutive ticks with both synchronized lines low.
///
/// The counter increments on every idle tick until it reaches the threshold,
/// and wraps to zero on the idle tick after. Any tick with either line high
/// clears it. The gap is reported as active while the counter is climbing;
/// reaching the threshold is the signal to stop counting, not a sticky flag.
#[derive(Clone, Debug)]
pub struct GapDetector {
    threshold: u32,
    count: u32,
    active: bool,
}

impl GapDetector {
    /// Build a detector with an empty count.
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            threshold: config.threshold(),
            count: 0,
            active: false,
        }
    }

    /// Update the counter from this tick's synchronized clock and data line.
    pub fn advance(&mut self, clock: bool, data: bool) {
        if !clock && !data && self.count < self.threshold {
            self.count += 1;
            self.active = true;
        } else {
            self.count = 0;
            self.active = false;
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.active = false;
    }

    /// Number of consecutive idle ticks counted, at most the threshold.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether the last tick extended a gap.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of idle ticks making up a full gap.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
