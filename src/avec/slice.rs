//! Slice-based decoder implementation.

use thiserror::Error;

use crate::sans::capture::{CaptureHeader, CaptureHeaderError};

use super::FromWords;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
    /// Incorrect capture header.
    #[error("Incorrect capture header: {0}.")]
    Header(#[from] CaptureHeaderError),
}

/// Decode words from a slice of a capture, publishing to a receiver.
///
/// Bytes following the recorded samples are ignored.
///
/// This method is also re-exported as `gapframe::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromWords) -> Result<(), Error> {
    let i = &mut 0; // Offset of the next unread byte.

    let (count, mut decoder) = CaptureHeader::advance(take(r, i)?)?;

    // Check the whole capture is present before publishing anything.
    let end = usize::try_from(count)
        .ok()
        .and_then(|n| i.checked_add(n))
        .ok_or(Error::EndOfSlice)?;
    let samples = r.get(*i..end).ok_or(Error::EndOfSlice)?;

    super::run(&mut decoder, samples.iter().copied(), o);

    Ok(())
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    r.get(s..*i)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::EndOfSlice)
}
