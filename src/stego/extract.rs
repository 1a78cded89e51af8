use super::BYTES_PER_PIXEL;
use crate::error::StegoError;

/// Read frame bytes back out of the buffer's channel-0 LSBs.
///
/// Bits accumulate least-significant first, mirroring [`super::embed`].
/// A completed zero byte is the terminator and is excluded from the
/// output. Running out of pixels before seeing a terminator means the
/// buffer carries no complete payload.
pub fn extract(pixels: &[u8]) -> Result<Vec<u8>, StegoError> {
    let mut frame = Vec::new();
    let mut acc = 0u8;
    let mut bits = 0;

    for pixel in pixels.chunks_exact(BYTES_PER_PIXEL) {
        acc |= (pixel[0] & 1) << bits;
        bits += 1;

        if bits == 8 {
            if acc == 0 {
                return Ok(frame);
            }
            frame.push(acc);
            acc = 0;
            bits = 0;
        }
    }

    Err(StegoError::TruncatedPayload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::embed;

    #[test]
    fn extract_without_terminator_fails() {
        // All-ones LSBs never form a zero byte.
        let pixels = vec![0xFFu8; 64 * 4];

        assert!(matches!(
            extract(&pixels),
            Err(StegoError::TruncatedPayload)
        ));
    }

    #[test]
    fn extract_from_empty_buffer_fails() {
        assert!(matches!(extract(&[]), Err(StegoError::TruncatedPayload)));
    }

    #[test]
    fn partial_final_byte_is_ignored() {
        // 12 pixels: one full byte of ones, then 4 dangling bits. No
        // terminator completes, so the payload is truncated.
        let mut pixels = vec![0u8; 12 * 4];
        for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[0] = 1;
        }

        assert!(matches!(
            extract(&pixels),
            Err(StegoError::TruncatedPayload)
        ));
    }

    #[test]
    fn trailing_partial_pixel_group_is_ignored() {
        let mut pixels = vec![0xFFu8; 24 * 4];
        embed(&mut pixels, b"hi").unwrap();

        // Append a ragged non-pixel tail; extraction must not read it.
        pixels.extend_from_slice(&[0xFF, 0xFF, 0xFF]);

        assert_eq!(extract(&pixels).unwrap(), b"hi");
    }

    #[test]
    fn stops_at_first_terminator() {
        let mut pixels = vec![0xFFu8; 64 * 4];
        embed(&mut pixels, b"ab").unwrap();

        // Garbage after the terminator is never reached.
        assert_eq!(extract(&pixels).unwrap(), b"ab");
    }

    #[test]
    fn bit_order_is_lsb_first() {
        // 0x01 embeds as a set LSB in the first pixel, clear in the next
        // seven.
        let mut pixels = vec![0u8; 16 * 4];
        embed(&mut pixels, &[0x01]).unwrap();

        assert_eq!(pixels[0] & 1, 1);
        for j in 1..8 {
            assert_eq!(pixels[j * BYTES_PER_PIXEL] & 1, 0);
        }
        assert_eq!(extract(&pixels).unwrap(), [0x01]);
    }
}
