//! Cryptographic primitives for the payload codec.
//!
//! Provides key derivation, authenticated encryption, and the entropy
//! source abstraction.

pub mod aead;
pub mod kdf;

pub use aead::{decrypt, encrypt, encrypt_with};
pub use kdf::{PBKDF2_ITERATIONS, derive_key};

use crate::error::StegoError;

/// Length of the salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the nonce (12 bytes for AES-256-GCM).
pub const NONCE_LEN: usize = 12;
/// Length of the encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM authentication tag appended to the ciphertext.
pub const TAG_LEN: usize = 16;

/// Source of cryptographically secure random bytes.
///
/// Encryption draws salt and nonce material through this trait so tests
/// can substitute deterministic values for reproducible envelopes.
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), StegoError>;
}

/// Entropy source backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), StegoError> {
        getrandom::fill(buf).map_err(|_| StegoError::Internal("OS random generator unavailable"))
    }
}
