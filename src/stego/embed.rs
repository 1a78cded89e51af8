use super::{BYTES_PER_PIXEL, TERMINATOR_BITS, capacity_pixels};
use crate::error::StegoError;

/// Embed frame bytes into the buffer's channel-0 LSBs, in place.
///
/// Capacity is checked up front for the frame bits plus the 8 terminator
/// bits, so an exact-fit frame can never push its terminator past the end
/// of the buffer. An encode that does not fit fails with
/// [`StegoError::Capacity`] and leaves the buffer byte-for-byte
/// unmodified.
pub fn embed(pixels: &mut [u8], frame: &[u8]) -> Result<(), StegoError> {
    let available = capacity_pixels(pixels);
    let needed = frame.len() * 8 + TERMINATOR_BITS;
    if needed > available {
        return Err(StegoError::Capacity { needed, available });
    }

    for (i, &byte) in frame.iter().enumerate() {
        for j in 0..8 {
            let bit = (byte >> j) & 1;
            let idx = (i * 8 + j) * BYTES_PER_PIXEL;
            pixels[idx] = (pixels[idx] & 0xFE) | bit;
        }
    }

    let base = frame.len() * 8;
    for j in 0..TERMINATOR_BITS {
        pixels[(base + j) * BYTES_PER_PIXEL] &= 0xFE;
    }

    Ok(())
}
