//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Read;

use thiserror::Error;

use crate::sans::capture::{CaptureHeader, CaptureHeaderError};

use super::FromWords;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Incorrect capture header.
    #[error("Incorrect capture header: {0}.")]
    Header(#[from] CaptureHeaderError),
}

/// Decode words from a reader of a capture, publishing to a receiver.
///
/// Words are published as they complete, so a truncated capture may publish
/// some words before failing.
///
/// This method is also re-exported as `gapframe::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromWords) -> Result<(), Error> {
    let (count, mut decoder) = CaptureHeader::advance(take(r)?)?;

    for tick in 0..u64::from(count) {
        let [sample] = take(r)?;
        super::step(&mut decoder, tick, sample, o);
    }

    Ok(())
}

/// Take an exact number of bytes from a reader.
fn take<const N: usize>(r: &mut impl Read) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    r.read_exact(&mut buf)?;
    Ok(buf)
}
