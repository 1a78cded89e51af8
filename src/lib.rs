//! Password-protected LSB steganography codec.
//!
//! Hides a UTF-8 message inside a caller-supplied RGBA pixel buffer. The
//! message is sealed with AES-256-GCM under a PBKDF2-derived key, framed
//! as a JSON envelope, and embedded one bit per pixel into channel-0
//! least significant bits. [`decode_message`] reverses the process.
//!
//! The crate never parses image files; loading the image into an RGBA
//! buffer and re-encoding the mutated buffer are the caller's job.

pub mod crypto;
pub mod envelope;
mod error;
pub mod stego;

pub use crate::crypto::{EntropySource, OsEntropy};
pub use crate::envelope::Envelope;
pub use crate::error::StegoError;

use log::debug;

/// Encrypt `message` under `password` and embed it into `pixels`.
///
/// `pixels` is a row-major RGBA buffer, 4 bytes per pixel, mutated in
/// place. On [`StegoError::Capacity`] the buffer is left untouched; the
/// failure reveals nothing about the message beyond its framed size.
pub fn encode_message(pixels: &mut [u8], message: &str, password: &str) -> Result<(), StegoError> {
    encode_message_with(pixels, message, password, &mut OsEntropy)
}

/// [`encode_message`] with an explicit entropy source for salt and nonce.
pub fn encode_message_with<E: EntropySource>(
    pixels: &mut [u8],
    message: &str,
    password: &str,
    entropy: &mut E,
) -> Result<(), StegoError> {
    let sealed = crypto::encrypt_with(message.as_bytes(), password, entropy)?;
    let frame = envelope::serialize(&sealed)?;

    debug!(
        "embedding {} frame bytes into {} pixels",
        frame.len(),
        stego::capacity_pixels(pixels)
    );

    stego::embed(pixels, &frame)
}

/// Extract and decrypt a message previously embedded into `pixels`.
///
/// All failure modes — no payload present, malformed frame, wrong
/// password, tampered ciphertext — surface as the single
/// [`StegoError::DecodeFailed`] so callers cannot probe which check
/// rejected the input. The component APIs in [`crypto`], [`envelope`]
/// and [`stego`] keep the distinct error kinds for boundary layers that
/// need them.
pub fn decode_message(pixels: &[u8], password: &str) -> Result<String, StegoError> {
    decode_message_inner(pixels, password).map_err(|err| {
        debug!("decode failed: {err}");
        StegoError::DecodeFailed
    })
}

fn decode_message_inner(pixels: &[u8], password: &str) -> Result<String, StegoError> {
    let frame = stego::extract(pixels)?;
    let sealed = envelope::deserialize(&frame)?;
    let plaintext = crypto::decrypt(&sealed, password)?;

    String::from_utf8(plaintext.to_vec())
        .map_err(|_| StegoError::Internal("plaintext is not valid UTF-8"))
}
