//! Property-based tests.

use base64ct::{Base64UrlUnpadded, Encoding};
use jwk2pem::{
    base64url, pkcs8::DecodePublicKey, BigUint, Converter, Jwk, OutputEncoding, PublicKeyParts,
    RsaPublicKey,
};
use proptest::prelude::*;

prop_compose! {
    // Odd modulus with the top bit set, so it is always wider than `e`.
    fn modulus()(bytes in proptest::collection::vec(any::<u8>(), 8..=64)) -> BigUint {
        let mut bytes = bytes;
        bytes[0] |= 0x80;
        if let Some(last) = bytes.last_mut() {
            *last |= 1;
        }
        BigUint::from_bytes_be(&bytes)
    }
}

prop_compose! {
    fn exponent()(
        e in prop_oneof![Just(3u64), Just(65537u64), (1u64..1 << 32).prop_map(|e| e * 2 + 1)]
    ) -> BigUint {
        BigUint::from(e)
    }
}

fn jwk(n: &BigUint, e: &BigUint) -> Jwk {
    Jwk::from(&RsaPublicKey::new_unchecked(n.clone(), e.clone()))
}

proptest! {
    #[test]
    fn base64url_roundtrip(bytes in any::<Vec<u8>>()) {
        let encoded = Base64UrlUnpadded::encode_string(&bytes);
        prop_assert_eq!(base64url::decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn decode_uint_is_big_endian(bytes in any::<Vec<u8>>()) {
        let encoded = Base64UrlUnpadded::encode_string(&bytes);
        prop_assert_eq!(base64url::decode_uint(&encoded).unwrap(), BigUint::from_bytes_be(&bytes));
    }

    #[test]
    fn convert_roundtrip(n in modulus(), e in exponent()) {
        let jwk = jwk(&n, &e);
        let converter = Converter::new().with_encoding(OutputEncoding::Der);

        let der = converter.convert(&jwk).unwrap();
        prop_assert_eq!(&converter.convert(&jwk).unwrap(), &der);

        let key = RsaPublicKey::from_public_key_der(&der).unwrap();
        prop_assert_eq!(key.n(), &n);
        prop_assert_eq!(key.e(), &e);
    }

    #[test]
    fn even_exponent_rejected(n in modulus(), e in exponent()) {
        let e = e + BigUint::from(1u8);
        prop_assert!(Converter::new().convert(&jwk(&n, &e)).is_err());
    }
}
