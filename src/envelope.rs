//! The encryption envelope and its frame encoding.
//!
//! An [`Envelope`] is the record produced by one encryption: salt, nonce
//! and tagged ciphertext. For embedding it is serialized into a frame, a
//! compact JSON object of decimal byte arrays:
//!
//! ```text
//! {"salt":[..16 values..],"iv":[..12 values..],"data":[..]}
//! ```
//!
//! The frame is pure ASCII, so every character occupies one byte and maps
//! losslessly through the one-bit-per-pixel embedding scheme. Framing is a
//! transport convenience, not a security boundary; integrity comes solely
//! from the AEAD tag inside `data`.

use serde::{Deserialize, Serialize};

use crate::crypto::{NONCE_LEN, SALT_LEN};
use crate::error::StegoError;

/// Output of one authenticated encryption.
///
/// `data` is the ciphertext with the 16-byte GCM tag appended. `salt` and
/// `iv` are not secret; they are carried alongside so decryption can
/// rederive the key and open the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; NONCE_LEN],
    pub data: Vec<u8>,
}

/// Serialize an envelope into frame bytes.
pub fn serialize(envelope: &Envelope) -> Result<Vec<u8>, StegoError> {
    serde_json::to_vec(envelope).map_err(|_| StegoError::Internal("envelope serialization failed"))
}

/// Parse frame bytes back into an envelope.
///
/// The fixed-size `salt` and `iv` fields make serde reject wrong lengths,
/// so any structural defect (truncation, missing field, bad type) comes
/// back as [`StegoError::FrameFormat`].
pub fn deserialize(frame: &[u8]) -> Result<Envelope, StegoError> {
    serde_json::from_slice(frame).map_err(|_| StegoError::FrameFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Envelope {
        Envelope {
            salt: [1u8; SALT_LEN],
            iv: [2u8; NONCE_LEN],
            data: vec![0, 127, 255],
        }
    }

    #[test]
    fn frame_roundtrip() {
        let envelope = sample();
        let frame = serialize(&envelope).unwrap();

        assert_eq!(deserialize(&frame).unwrap(), envelope);
    }

    #[test]
    fn frame_wire_format_is_stable() {
        let envelope = Envelope {
            salt: [0u8; SALT_LEN],
            iv: [1u8; NONCE_LEN],
            data: vec![42, 255],
        };

        let frame = serialize(&envelope).unwrap();

        assert_eq!(
            String::from_utf8(frame).unwrap(),
            "{\"salt\":[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],\
             \"iv\":[1,1,1,1,1,1,1,1,1,1,1,1],\
             \"data\":[42,255]}"
        );
    }

    #[test]
    fn frame_is_ascii() {
        let frame = serialize(&sample()).unwrap();

        assert!(frame.iter().all(u8::is_ascii));
    }

    #[test]
    fn truncated_frame_fails() {
        let frame = serialize(&sample()).unwrap();

        assert!(matches!(
            deserialize(&frame[..frame.len() - 1]),
            Err(StegoError::FrameFormat)
        ));
    }

    #[test]
    fn wrong_salt_length_fails() {
        let frame = b"{\"salt\":[1,2,3],\"iv\":[1,1,1,1,1,1,1,1,1,1,1,1],\"data\":[5]}";

        assert!(matches!(deserialize(frame), Err(StegoError::FrameFormat)));
    }

    #[test]
    fn missing_field_fails() {
        let frame = b"{\"salt\":[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0],\"data\":[5]}";

        assert!(matches!(deserialize(frame), Err(StegoError::FrameFormat)));
    }

    #[test]
    fn non_json_frame_fails() {
        assert!(matches!(
            deserialize(b"not an envelope"),
            Err(StegoError::FrameFormat)
        ));
    }
}
