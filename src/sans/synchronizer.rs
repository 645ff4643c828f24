//! Clock domain crossing for a single raw signal.

use tinyvec::ArrayVec;

use super::config::{ConfigError, DecoderConfig, MAX_SYNC_STAGES};

/// A delay line moving an asynchronous signal into the processing domain.
///
/// Each tick, the raw value is captured into the first stage and every other
/// stage takes the value of its predecessor. The settled value leaving the
/// last stage is therefore the raw value from exactly `stages` ticks earlier.
/// No filtering is applied; a one-tick pulse on the raw signal is a one-tick
/// pulse on the settled signal.
///
/// All stages start low.
#[derive(Clone, Debug)]
pub struct Synchronizer {
    stages: ArrayVec<[bool; MAX_SYNC_STAGES]>,
}

impl Synchronizer {
    /// Build a synchronizer with the given number of stages.
    pub fn new(stages: usize) -> Result<Self, ConfigError> {
        if !(2..=MAX_SYNC_STAGES).contains(&stages) {
            Err(ConfigError::SyncStages(stages))?;
        }

        Ok(Self::with_stages(stages))
    }

    /// Build a synchronizer with the stage count of a validated configuration.
    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::with_stages(config.sync_stages())
    }

    fn with_stages(stages: usize) -> Self {
        let mut line = ArrayVec::new();
        line.resize(stages, false);
        Self { stages: line }
    }

    /// Capture a raw value, returning the settled value for this tick.
    pub fn advance(&mut self, raw: bool) -> bool {
        let settled = self.stages.pop().unwrap_or(raw);
        self.stages.insert(0, raw);
        settled
    }

    /// The value that will settle on the next tick.
    pub fn pending(&self) -> bool {
        self.stages.last().copied().unwrap_or_default()
    }

    /// Number of stages, equal to the delay in ticks.
    pub fn stages(&self) -> usize {
        self.stages.len()
    }
}
