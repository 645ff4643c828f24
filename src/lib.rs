#![no_std]

//! A receiver for gap-framed words on a self-clocked serial line.
//!
//! Gapframe recovers fixed-width data words from a secondary clock and data
//! line that are timed independently of the processing logic. Both lines are
//! oversampled once per processing tick, resynchronized, and decoded by a
//! small finite-state machine: a long enough period with both lines low marks
//! a frame boundary, and the following rising clock edges each shift one data
//! bit into the word.
//!
//! Most users should begin with the functions in the [`avec`] module, which
//! decode recorded captures. Applications driving the decoder tick by tick
//! (for example, from a sampling interrupt on an embedded system) should use
//! the [`sans`] module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

pub mod avec;
pub mod sans;
