//! Error types.

use std::path::PathBuf;

/// Alias for [`core::result::Result`] with the `jwk2pem` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A key member is not valid base64url.
    #[error("invalid base64url in `{member}`: {source}")]
    Decode {
        /// Name of the JWK member that failed to decode.
        member: &'static str,
        /// Underlying decoder error.
        source: base64::DecodeError,
    },

    /// Invalid modulus.
    #[error("invalid modulus")]
    InvalidModulus,

    /// Invalid exponent.
    #[error("invalid exponent")]
    InvalidExponent,

    /// Public exponent too small.
    #[error("public exponent too small")]
    PublicExponentTooSmall,

    /// Public exponent too large.
    #[error("public exponent too large")]
    PublicExponentTooLarge,

    /// Modulus too large.
    #[error("modulus too large")]
    ModulusTooLarge,

    /// The input is not a JSON Web Key (or JWK Set).
    #[error("malformed JWK document: {0}")]
    Json(#[from] serde_json::Error),

    /// No key with the requested `kid` in a JWK Set.
    #[error("no key with kid `{kid}` in key set")]
    KeyNotFound {
        /// Requested key identifier.
        kid: String,
    },

    /// A JWK Set holds several keys and none was selected.
    #[error("key set holds {count} keys, select one by kid")]
    AmbiguousKeySet {
        /// Number of keys in the set.
        count: usize,
    },

    /// `SubjectPublicKeyInfo` encoding or decoding failed.
    #[error("SubjectPublicKeyInfo encoding error: {0}")]
    Encoding(#[from] spki::Error),

    /// PKCS#1 encoding failed.
    #[error("PKCS#1 encoding error: {0}")]
    Pkcs1(#[from] pkcs1::Error),

    /// Reading the key document failed.
    #[error("failed to read {}: {source}", display_path(.path))]
    Read {
        /// Source, when the input is a file.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the encoded key failed.
    #[error("failed to write {}: {source}", display_path(.path))]
    Io {
        /// Destination, when the sink is a file.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` when the decoded numbers do not form a usable RSA
    /// public key.
    pub fn is_invalid_key(&self) -> bool {
        matches!(
            self,
            Error::InvalidModulus
                | Error::InvalidExponent
                | Error::PublicExponentTooSmall
                | Error::PublicExponentTooLarge
                | Error::ModulusTooLarge
        )
    }

    pub(crate) fn io(path: Option<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path, source }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "stream".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_family() {
        assert!(Error::InvalidModulus.is_invalid_key());
        assert!(Error::InvalidExponent.is_invalid_key());
        assert!(Error::PublicExponentTooSmall.is_invalid_key());
        assert!(Error::PublicExponentTooLarge.is_invalid_key());
        assert!(Error::ModulusTooLarge.is_invalid_key());
        assert!(!Error::KeyNotFound { kid: "k1".into() }.is_invalid_key());
    }

    #[test]
    fn io_message_names_path() {
        let err = Error::io(
            Some(PathBuf::from("/tmp/sa.pub")),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write /tmp/sa.pub: denied");

        let err = Error::io(None, std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(err.to_string(), "failed to write stream: pipe");

        let err = Error::Read {
            path: None,
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"),
        };
        assert_eq!(err.to_string(), "failed to read stream: eof");
    }
}
