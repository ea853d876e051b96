//! JSON Web Key documents ([RFC 7517]) carrying RSA public keys ([RFC 7518 § 6.3.1]).
//!
//! [RFC 7517]: https://datatracker.ietf.org/doc/html/rfc7517
//! [RFC 7518 § 6.3.1]: https://datatracker.ietf.org/doc/html/rfc7518#section-6.3.1

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::base64url;
use crate::errors::{Error, Result};
use crate::key::RsaPublicKey;
use crate::traits::PublicKeyParts;

/// An RSA public JSON Web Key.
///
/// Only the `n` and `e` members are interpreted. Every other member (`kty`,
/// `kid`, `alg`, `use`, `x5c`, ...) is kept verbatim in [`Jwk::extra`] and
/// never checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    /// Modulus, base64url encoded.
    pub n: String,

    /// Public exponent, base64url encoded.
    pub e: String,

    /// Members this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Jwk {
    /// Parse a single JWK from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse either a single JWK or a JWK Set, selecting one key.
    ///
    /// For a JWK Set, `kid` picks the key; without it the set must hold
    /// exactly one key. For a single JWK, `kid` is not consulted.
    pub fn from_document(json: &str, kid: Option<&str>) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if value.get("keys").is_some() {
            let set: JwkSet = serde_json::from_value(value)?;
            set.select(kid)
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    /// The key identifier, if present as a string.
    pub fn kid(&self) -> Option<&str> {
        self.extra.get("kid").and_then(Value::as_str)
    }

    /// Decode the modulus `n`.
    pub fn modulus(&self) -> Result<BigUint> {
        base64url::decode_uint(&self.n).map_err(|source| Error::Decode { member: "n", source })
    }

    /// Decode the public exponent `e`.
    pub fn exponent(&self) -> Result<BigUint> {
        base64url::decode_uint(&self.e).map_err(|source| Error::Decode { member: "e", source })
    }
}

impl TryFrom<&Jwk> for RsaPublicKey {
    type Error = Error;

    fn try_from(jwk: &Jwk) -> Result<Self> {
        RsaPublicKey::new(jwk.modulus()?, jwk.exponent()?)
    }
}

impl From<&RsaPublicKey> for Jwk {
    fn from(key: &RsaPublicKey) -> Self {
        let mut extra = Map::new();
        extra.insert("kty".into(), Value::String("RSA".into()));
        Self {
            n: base64url::encode_uint(key.n()),
            e: base64url::encode_uint(key.e()),
            extra,
        }
    }
}

/// A JWK Set ([RFC 7517 § 5]).
///
/// Keys are held as raw JSON objects so that sets mixing in non-RSA keys
/// still parse; a key is only interpreted once selected.
///
/// [RFC 7517 § 5]: https://datatracker.ietf.org/doc/html/rfc7517#section-5
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JwkSet {
    /// Member keys.
    pub keys: Vec<Map<String, Value>>,
}

impl JwkSet {
    /// Parse a JWK Set from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the set holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Find the key with the given `kid`.
    pub fn find(&self, kid: &str) -> Result<Jwk> {
        let key = self
            .keys
            .iter()
            .find(|key| key.get("kid").and_then(Value::as_str) == Some(kid))
            .ok_or_else(|| Error::KeyNotFound { kid: kid.into() })?;
        Ok(serde_json::from_value(Value::Object(key.clone()))?)
    }

    /// Select a key by `kid`, or the only key when no `kid` is given.
    pub fn select(&self, kid: Option<&str>) -> Result<Jwk> {
        match (kid, self.keys.as_slice()) {
            (Some(kid), _) => self.find(kid),
            (None, [key]) => Ok(serde_json::from_value(Value::Object(key.clone()))?),
            (None, keys) => Err(Error::AmbiguousKeySet { count: keys.len() }),
        }
    }
}
