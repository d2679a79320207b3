// farm/utils/start_time.rs

use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_START_OFFSET, START_TIME_ENCODED_LEN},
    errors::FarmError,
};

/// Decodes the start offset carried by the funding instruction.
/// The payload is exactly three big-endian bytes.
pub fn decode_start_offset(data: &[u8]) -> Result<u64> {
    if data.len() != START_TIME_ENCODED_LEN {
        return err!(FarmError::MalformedStartTime);
    }

    Ok(data
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte)))
}

/// Builds the funding payload for clients that link against the program crate.
pub fn encode_start_offset(offset: u64) -> Result<[u8; START_TIME_ENCODED_LEN]> {
    if offset > MAX_START_OFFSET {
        return err!(FarmError::MalformedStartTime);
    }

    let bytes = offset.to_be_bytes();
    let mut encoded = [0u8; START_TIME_ENCODED_LEN];
    encoded.copy_from_slice(&bytes[bytes.len() - START_TIME_ENCODED_LEN..]);
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_big_endian() {
        assert_eq!(decode_start_offset(&[0x00, 0x01, 0x00]).unwrap(), 256);
        assert_eq!(decode_start_offset(&[0x01, 0x02, 0x03]).unwrap(), 0x010203);
        assert_eq!(
            decode_start_offset(&[0xff, 0xff, 0xff]).unwrap(),
            MAX_START_OFFSET
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        for data in [&[][..], &[0x01][..], &[0x00, 0x01][..], &[0, 0, 1, 0][..]] {
            assert_eq!(
                decode_start_offset(data).unwrap_err(),
                error!(FarmError::MalformedStartTime)
            );
        }
    }

    #[test]
    fn encode_is_bounded() {
        assert_eq!(encode_start_offset(256).unwrap(), [0x00, 0x01, 0x00]);
        assert_eq!(
            encode_start_offset(MAX_START_OFFSET).unwrap(),
            [0xff, 0xff, 0xff]
        );
        assert_eq!(
            encode_start_offset(MAX_START_OFFSET + 1).unwrap_err(),
            error!(FarmError::MalformedStartTime)
        );
    }
}
