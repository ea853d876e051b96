#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! ## JWK to `SubjectPublicKeyInfo` PEM
//!
//! ```
//! use jwk2pem::{Converter, Jwk};
//!
//! let jwk = Jwk::from_json(r#"{
//!     "kty": "RSA",
//!     "kid": "example",
//!     "use": "sig",
//!     "alg": "RS256",
//!     "n": "t5PtjDjIlTB3_YhCa9SyjKQ69cfoSPM_i9_TzPY8LXnan_nF6fg_LWCes7KujhwpoATKcjddhSq11jAFrZaJSCR1Ue1c46mFpfN3l6PXjcg-nO7_Asp7Xw5VMQ4jfNDp7Kr1y4dgsh9ECLPgKk4_dyqTshqBnBsPPl0jRUr4hUnsai--bqf6K1Ca2zPdZvzNksRuT_5F4jyaW_0QuX7-eW360M-0-HfckWxIluC_E0dxhSVBQyfQ6ekpnKwxPoyKgaVhXyBS2mrIGx_7Kpk7yFz1aJYeKLnX5JE7jVhj0iVdqOQdWQ5R93WsDs23qeFwpir_PtkHbGkJcaLcT7W5WQ",
//!     "e": "AQAB"
//! }"#)?;
//!
//! let pem = Converter::new().convert(&jwk)?;
//! let pem = String::from_utf8(pem).expect("PEM is ASCII");
//! assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
//! assert!(pem.ends_with("WQIDAQAB\n-----END PUBLIC KEY-----\n"));
//! # Ok::<(), jwk2pem::Error>(())
//! ```
//!
//! ## PKCS#1 RSA Key Encoding
//!
//! Some consumers expect the legacy PKCS#1 structure instead. You can
//! recognize PEM encoded PKCS#1 keys because they have "RSA * KEY" in the
//! type label:
//!
//! ```text
//! -----BEGIN RSA PUBLIC KEY-----
//! ```
//!
//! ```
//! use jwk2pem::{Converter, KeyFormat};
//!
//! let pem = Converter::new()
//!     .with_format(KeyFormat::Pkcs1)
//!     .convert_json(r#"{"n": "scLT5PUGFyk", "e": "AQAB"}"#)?;
//! assert!(pem.starts_with(b"-----BEGIN RSA PUBLIC KEY-----\n"));
//! # Ok::<(), jwk2pem::Error>(())
//! ```
//!
//! ## Reading the result back
//!
//! [`RsaPublicKey`] implements the `pkcs8` and `pkcs1` decoding traits, so
//! a converted key can be parsed again. Note that [`pkcs1`] and [`pkcs8`] are
//! re-exported from the toplevel of the crate:
//!
//! ```
//! use jwk2pem::{pkcs8::DecodePublicKey, Converter, Jwk, RsaPublicKey};
//!
//! let jwk = Jwk::from_json(r#"{"n": "scLT5PUGFyk", "e": "AQAB"}"#)?;
//! let pem = String::from_utf8(Converter::new().convert(&jwk)?).expect("PEM is ASCII");
//! let key = RsaPublicKey::from_public_key_pem(&pem).expect("valid SPKI");
//! assert_eq!(key, RsaPublicKey::try_from(&jwk)?);
//! # Ok::<(), jwk2pem::Error>(())
//! ```

pub use num_bigint::BigUint;

pub mod base64url;
pub mod errors;
pub mod jwk;
pub mod traits;

mod convert;
mod encoding;
mod key;

pub use pkcs1;
pub use pkcs8;

pub use crate::{
    convert::{Converter, KeyFormat, OutputEncoding, Validation},
    errors::{Error, Result},
    jwk::{Jwk, JwkSet},
    key::{check_public, RsaPublicKey},
    traits::PublicKeyParts,
};
