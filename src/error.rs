use thiserror::Error;

/// Failure modes of the steganographic codec.
///
/// The component APIs (`crypto`, `envelope`, `stego`) report the distinct
/// variants. The top-level decode path deliberately collapses everything
/// into [`StegoError::DecodeFailed`] so a caller cannot tell a wrong
/// password apart from a corrupted carrier image.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The frame plus its terminator does not fit in the pixel buffer.
    /// Reported before any pixel is touched.
    #[error("message needs {needed} pixels but image provides {available}")]
    Capacity { needed: usize, available: usize },

    /// AEAD tag verification failed: wrong password or tampered payload.
    #[error("authentication failed: wrong password or tampered payload")]
    Authentication,

    /// The extracted frame is not a structurally valid envelope.
    #[error("embedded payload is not a valid envelope")]
    FrameFormat,

    /// The pixel stream ended before a zero-byte terminator was found.
    #[error("no terminated payload found in pixel data")]
    TruncatedPayload,

    /// Generic decode failure presented to callers of `decode_message`.
    #[error("failed to decode message; check the password and try again")]
    DecodeFailed,

    /// Unexpected internal failure (RNG unavailable, cipher misuse).
    #[error("internal codec error: {0}")]
    Internal(&'static str),
}
