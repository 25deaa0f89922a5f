//! McEliece Key Encapsulation Mechanism
//!
//! Code-based KEM built on binary Goppa codes. This module carries the key
//! material types and public-key generation for the McEliece-8192128
//! parameter set; the heavy lifting (field arithmetic, support derivation,
//! matrix reduction) lives in `pqcrypt_algorithms::code`.
//!
//! Downstream consumers treat the public key strictly as an opaque byte
//! blob of fixed length; nothing outside this crate may depend on its
//! internal row/column layout.

mod keygen;


use alloc::vec::Vec;
use core::fmt;

use crate::error::{Error, Result};
use pqcrypt_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// McEliece-8192128 KEM (NIST security level 5)
pub struct McEliece8192128;

/// Public key: the byte-packed T submatrix of the systematic parity check
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct McEliecePublicKey(pub(crate) Vec<u8>);

/// Secret key blob; begins with the Goppa polynomial coefficients
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct McElieceSecretKey(pub(crate) Vec<u8>);

impl McEliecePublicKey {
    /// Create a new public key from bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the length of the public key
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the public key is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Export the public key to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// Get a reference to the inner bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Create from a byte slice, checking the expected length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != McEliece8192128::PUBLIC_KEY_BYTES {
            return Err(Error::InvalidKey {
                key_type: "McEliece public",
                reason: "unexpected length",
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl McElieceSecretKey {
    /// Create a new secret key from bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the length of the secret key
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the secret key is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Export the secret key to bytes with zeroization
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }

    /// Get a reference to the inner bytes (internal use only)
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Create from a byte slice; must at least cover the polynomial section
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < McEliece8192128::SECRET_POLY_BYTES {
            return Err(Error::InvalidKey {
                key_type: "McEliece secret",
                reason: "too short for the Goppa polynomial",
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

// Secret keys compare in constant time.
impl PartialEq for McElieceSecretKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for McElieceSecretKey {}

// Redacted: the key bytes must never reach logs or panic messages.
impl fmt::Debug for McElieceSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McElieceSecretKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}
