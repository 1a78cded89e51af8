//! LSB bit embedding and extraction over raw RGBA pixel buffers.
//!
//! The carrier is a row-major RGBA buffer, 4 bytes per pixel. Each pixel
//! stores exactly one payload bit in the least significant bit of its
//! first channel; the other three channels are never touched. Payload
//! bytes are laid down least-significant-bit first and followed by an
//! 8-bit all-zero terminator marking end of payload.

pub mod embed;
pub mod extract;

pub use embed::embed;
pub use extract::extract;

/// Bytes per pixel in the carrier buffer (RGBA).
pub const BYTES_PER_PIXEL: usize = 4;
/// Bits in the all-zero end-of-payload terminator.
pub const TERMINATOR_BITS: usize = 8;

/// Number of payload bits the buffer can carry, one per pixel.
pub fn capacity_pixels(pixels: &[u8]) -> usize {
    pixels.len() / BYTES_PER_PIXEL
}
