use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};
use zeroize::Zeroizing;

use super::{EntropySource, NONCE_LEN, OsEntropy, PBKDF2_ITERATIONS, SALT_LEN, derive_key};
use crate::envelope::Envelope;
use crate::error::StegoError;

/// Encrypt plaintext under a password, drawing salt and nonce from the
/// OS random generator.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Envelope, StegoError> {
    encrypt_with(plaintext, password, &mut OsEntropy)
}

/// Encrypt plaintext under a password with an explicit entropy source.
///
/// Draws 16 salt bytes, then 12 nonce bytes. A fresh salt/nonce pair per
/// call means the same (message, password) never produces the same
/// envelope twice under a real entropy source.
pub fn encrypt_with<E: EntropySource>(
    plaintext: &[u8],
    password: &str,
    entropy: &mut E,
) -> Result<Envelope, StegoError> {
    let mut salt = [0u8; SALT_LEN];
    entropy.fill(&mut salt)?;

    let mut iv = [0u8; NONCE_LEN];
    entropy.fill(&mut iv)?;

    let key = Zeroizing::new(derive_key(password, &salt, PBKDF2_ITERATIONS));
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_ref()));

    let data = cipher
        .encrypt(Nonce::from_slice(&iv), plaintext)
        .map_err(|_| StegoError::Internal("encryption failed"))?;

    Ok(Envelope { salt, iv, data })
}

/// Decrypt an envelope under a password.
///
/// Rederives the key from the envelope's salt and opens with its nonce.
/// Tag verification is the sole integrity check: a wrong password and a
/// tampered ciphertext both fail as [`StegoError::Authentication`].
pub fn decrypt(envelope: &Envelope, password: &str) -> Result<Zeroizing<Vec<u8>>, StegoError> {
    let key = Zeroizing::new(derive_key(password, &envelope.salt, PBKDF2_ITERATIONS));
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_ref()));

    let plaintext = cipher
        .decrypt(Nonce::from_slice(&envelope.iv), envelope.data.as_slice())
        .map_err(|_| StegoError::Authentication)?;

    Ok(Zeroizing::new(plaintext))
}
