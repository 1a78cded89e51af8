use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use super::KEY_LEN;

/// Fixed iteration count for PBKDF2-HMAC-SHA256.
///
/// High enough to make offline brute force of short passwords expensive;
/// identical on encrypt and decrypt so the same (password, salt) pair
/// always yields the same key.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 256-bit key from a password and salt.
///
/// Deterministic, pure function of its inputs. An empty password is
/// accepted; password policy is not this layer's concern.
pub fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}
