//! External error and reset handling.

/// Mirror of the external error line.
///
/// The latch holds no decode state of its own beyond the last observed error
/// level, used to report when an error is first raised.
#[derive(Clone, Debug, Default)]
pub struct ErrorLatch {
    error: bool,
    raised: bool,
}

impl ErrorLatch {
    /// Observe this tick's error input and active-low reset.
    ///
    /// Returns whether the decoder must return to its initial state.
    pub fn advance(&mut self, error_in: bool, reset: bool) -> bool {
        self.raised = error_in && !self.error;
        self.error = error_in;
        error_in || !reset
    }

    /// The error output, equal to the last error input.
    pub fn error_out(&self) -> bool {
        self.error
    }

    /// Whether the error output rose on the last tick.
    pub fn raised(&self) -> bool {
        self.raised
    }
}
