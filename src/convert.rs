//! JWK to PEM conversion.

use std::io::Write;
use std::path::Path;

use pkcs1::EncodeRsaPublicKey;
use pkcs8::der::{self, pem};
use pkcs8::{EncodePublicKey, LineEnding};
use tempfile::NamedTempFile;

use crate::errors::{Error, Result};
use crate::jwk::Jwk;
use crate::key::RsaPublicKey;
use crate::traits::PublicKeyParts;

/// Structure of the encoded public key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyFormat {
    /// X.509 `SubjectPublicKeyInfo`, PEM label `PUBLIC KEY`.
    #[default]
    Spki,
    /// PKCS#1 `RSAPublicKey`, PEM label `RSA PUBLIC KEY`.
    Pkcs1,
}

impl KeyFormat {
    /// Type label used in the PEM header and footer.
    pub fn pem_label(self) -> &'static str {
        match self {
            KeyFormat::Spki => "PUBLIC KEY",
            KeyFormat::Pkcs1 => "RSA PUBLIC KEY",
        }
    }
}

/// Container the encoded key is wrapped in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputEncoding {
    /// RFC 7468 text, 64 columns.
    #[default]
    Pem,
    /// Raw DER.
    Der,
}

/// How the decoded numbers are checked before encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Reject key material that cannot be an RSA public key, see
    /// [`RsaPublicKey::new_with_max_size`].
    #[default]
    Strict,
    /// Encode whatever numbers were given.
    ///
    /// Output that would fail [`Validation::Strict`] cannot be read back with
    /// [`RsaPublicKey::from_public_key_der`](pkcs8::DecodePublicKey) or its
    /// PEM counterpart, which apply the same checks; parse it with
    /// [`pkcs1::RsaPublicKey`] instead.
    Permissive,
}

/// Converts JSON Web Keys into encoded public keys.
///
/// A converter is plain configuration; every call is independent and the
/// same input always yields byte-identical output.
///
/// ```
/// use jwk2pem::{Converter, Jwk};
///
/// let jwk = Jwk::from_json(r#"{"kty": "RSA", "n": "scLT5PUGFyk", "e": "AQAB"}"#)?;
/// let pem = Converter::new().convert(&jwk)?;
/// assert!(pem.starts_with(b"-----BEGIN PUBLIC KEY-----\n"));
/// # Ok::<(), jwk2pem::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    format: KeyFormat,
    encoding: OutputEncoding,
    line_ending: LineEnding,
    validation: Validation,
    max_size: usize,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            format: KeyFormat::Spki,
            encoding: OutputEncoding::Pem,
            line_ending: LineEnding::LF,
            validation: Validation::Strict,
            max_size: RsaPublicKey::MAX_SIZE,
        }
    }
}

impl Converter {
    /// SubjectPublicKeyInfo PEM with LF line endings and strict validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key structure.
    pub fn with_format(mut self, format: KeyFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output container.
    pub fn with_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the PEM line ending. Ignored for DER output.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Set the validation policy.
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Set the largest accepted modulus, in bits. Only enforced by
    /// [`Validation::Strict`].
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Decode the JWK into a public key, applying the validation policy.
    pub fn public_key(&self, jwk: &Jwk) -> Result<RsaPublicKey> {
        let n = jwk.modulus()?;
        let e = jwk.exponent()?;
        tracing::debug!(kid = jwk.kid(), bits = n.bits(), e = %e, "decoded JWK");

        match self.validation {
            Validation::Strict => RsaPublicKey::new_with_max_size(n, e, self.max_size),
            Validation::Permissive => Ok(RsaPublicKey::new_unchecked(n, e)),
        }
    }

    /// Convert a JWK into the configured encoding.
    pub fn convert(&self, jwk: &Jwk) -> Result<Vec<u8>> {
        let key = self.public_key(jwk)?;
        self.convert_key(&key)
    }

    /// Convert a JWK given as JSON text.
    pub fn convert_json(&self, json: &str) -> Result<Vec<u8>> {
        self.convert(&Jwk::from_json(json)?)
    }

    /// Encode an already constructed public key.
    pub fn convert_key(&self, key: &RsaPublicKey) -> Result<Vec<u8>> {
        let body = match self.format {
            KeyFormat::Spki => key.to_public_key_der()?.into_vec(),
            KeyFormat::Pkcs1 => key.to_pkcs1_der()?.into_vec(),
        };
        let encoded = match self.encoding {
            OutputEncoding::Der => body,
            OutputEncoding::Pem => {
                pem::encode_string(self.format.pem_label(), self.line_ending, &body)
                    .map_err(|err| spki::Error::from(der::Error::from(err)))?
                    .into_bytes()
            }
        };
        tracing::debug!(
            format = ?self.format,
            encoding = ?self.encoding,
            len = encoded.len(),
            "encoded public key"
        );
        Ok(encoded)
    }

    /// Convert a JWK and write the result to `sink`.
    ///
    /// Nothing is written unless the conversion succeeds.
    pub fn write_to<W: Write>(&self, jwk: &Jwk, mut sink: W) -> Result<()> {
        let encoded = self.convert(jwk)?;
        sink.write_all(&encoded)
            .and_then(|()| sink.flush())
            .map_err(|err| Error::io(None, err))
    }

    /// Convert a JWK and write the result to the file at `path`.
    ///
    /// The file is replaced atomically: a temporary file in the same
    /// directory is written, synced and renamed over `path`. On failure the
    /// previous contents, if any, are left untouched.
    pub fn write_file(&self, jwk: &Jwk, path: impl AsRef<Path>) -> Result<()> {
        let encoded = self.convert(jwk)?;
        write_atomic(path.as_ref(), &encoded)
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let io_err = |err: std::io::Error| Error::io(Some(path.to_path_buf()), err);

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    // public material, readable like any other .pub file
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_err)?;
    }

    tmp.persist(path).map_err(|err| io_err(err.error))?;
    tracing::debug!(path = %path.display(), len = contents.len(), "wrote public key");
    Ok(())
}
