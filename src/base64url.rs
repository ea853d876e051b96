//! Base64url ([RFC 4648 § 5]) helpers for the integer members of a JWK.
//!
//! JWKs carry `n` and `e` as base64url with the trailing `=` padding
//! stripped ([RFC 7518 § 6.3.1]). Decoding restores the padding and then
//! decodes with the URL-safe alphabet, so characters of the standard alphabet
//! (`+`, `/`) and lengths that cannot be padded to a multiple of four are
//! rejected. Non-zero bits left over in the final symbol are ignored.
//!
//! [RFC 4648 § 5]: https://datatracker.ietf.org/doc/html/rfc4648#section-5
//! [RFC 7518 § 6.3.1]: https://datatracker.ietf.org/doc/html/rfc7518#section-6.3.1

use base64::{
    alphabet,
    engine::{general_purpose, GeneralPurpose, GeneralPurposeConfig},
    DecodeError, Engine,
};
use num_bigint::BigUint;

/// Padded URL-safe decoder that tolerates non-canonical trailing bits.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Number of `=` characters needed to bring `len` up to a multiple of four.
#[inline]
fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Decode base64url data, with or without padding.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let pad = padding_len(s.len());
    let mut padded = String::with_capacity(s.len() + pad);
    padded.push_str(s);
    padded.extend(core::iter::repeat('=').take(pad));
    URL_SAFE_LENIENT.decode(padded)
}

/// Decode base64url data as an unsigned big-endian integer.
///
/// An empty string decodes to zero.
pub fn decode_uint(s: &str) -> Result<BigUint, DecodeError> {
    decode(s).map(|bytes| BigUint::from_bytes_be(&bytes))
}

/// Encode an unsigned integer as unpadded base64url of its minimal
/// big-endian representation.
pub fn encode_uint(n: &BigUint) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(n.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{ToPrimitive, Zero};

    #[test]
    fn test_padding_len() {
        assert_eq!(padding_len(0), 0);
        assert_eq!(padding_len(2), 2);
        assert_eq!(padding_len(3), 1);
        assert_eq!(padding_len(4), 0);
        assert_eq!(padding_len(342), 2);
    }

    #[test]
    fn test_decode_exponent() {
        assert_eq!(decode("AQAB").unwrap(), [0x01u8, 0x00, 0x01]);
        assert_eq!(decode_uint("AQAB").unwrap().to_u64(), Some(65537));
    }

    #[test]
    fn test_decode_restores_padding() {
        assert_eq!(decode("AQ").unwrap(), [0x01u8]);
        assert_eq!(decode("AQ==").unwrap(), [0x01u8]);
        assert_eq!(decode("AQI").unwrap(), [0x01u8, 0x02]);
    }

    #[test]
    fn test_decode_ignores_trailing_bits() {
        // "AR" leaves 0b0001 unused after the first byte
        assert_eq!(decode("AR").unwrap(), [0x01u8]);
        assert_eq!(decode_uint("AR").unwrap().to_u64(), Some(1));
        assert_eq!(decode("AQB").unwrap(), [0x01u8, 0x00]);
        assert_eq!(decode("AQD").unwrap(), [0x01u8, 0x00]);
        assert_eq!(decode_uint("AQAC").unwrap().to_u64(), Some(65538));
    }

    #[test]
    fn test_decode_url_alphabet() {
        assert_eq!(decode("-_8").unwrap(), [0xfbu8, 0xff]);
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        assert!(decode("+/8").is_err());
        assert!(decode("ab+c").is_err());
        assert!(decode("ab/c").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert!(decode("A").is_err());
        assert!(decode("AQABA").is_err());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("AQ AB").is_err());
        assert!(decode("AQ\nAB").is_err());
        assert!(decode("!!!!").is_err());
    }

    #[test]
    fn test_empty_is_zero() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode_uint("").unwrap().is_zero());
        assert!(decode_uint("AAAA").unwrap().is_zero());
    }

    #[test]
    fn test_leading_zero_bytes_are_ignored() {
        assert_eq!(decode_uint("AAEAAQ").unwrap().to_u64(), Some(65537));
    }

    #[test]
    fn test_encode_uint() {
        assert_eq!(encode_uint(&BigUint::from(65537u32)), "AQAB");
        assert_eq!(encode_uint(&BigUint::from(0xfbffu32)), "-_8");
    }
}
