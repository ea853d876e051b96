//! Accessors shared by public key representations.

use num_bigint::BigUint;

/// The two numbers making up an RSA public key.
pub trait PublicKeyParts {
    /// Modulus `n`.
    fn n(&self) -> &BigUint;

    /// Public exponent `e`.
    fn e(&self) -> &BigUint;

    /// Modulus size in bytes, i.e. the length of `n` without leading zeros.
    fn size(&self) -> usize {
        (self.bits() + 7) / 8
    }

    /// Modulus size in bits.
    fn bits(&self) -> usize {
        self.n().bits()
    }
}
