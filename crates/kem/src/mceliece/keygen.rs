//! Public-key generation for McEliece-8192128
//!
//! The core engine is deterministic and fails when the permuted code does
//! not admit a systematic parity-check matrix. The retry policy lives
//! here, outside the engine: draw a fresh permutation seed and run the
//! whole attempt again, up to a fixed bound.

use alloc::vec;

use super::{McEliece8192128, McEliecePublicKey, McElieceSecretKey};
use crate::error::{Error, Result};
use pqcrypt_algorithms::code::{generate_public_key, GF2M13};
use pqcrypt_algorithms::error::Error as PrimitiveError;
use pqcrypt_params::pqc::mceliece::MCELIECE_8192128;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

impl McEliece8192128 {
    /// Public key size in bytes
    pub const PUBLIC_KEY_BYTES: usize = MCELIECE_8192128.public_key_size;
    /// Goppa polynomial section of the secret key, in bytes
    pub const SECRET_POLY_BYTES: usize = MCELIECE_8192128.secret_poly_size;
    /// Entries of the permutation seed array (2^m)
    pub const PERM_ENTRIES: usize = MCELIECE_8192128.perm_entries();
    /// Fresh permutation seeds tried before key generation gives up.
    ///
    /// A random instance is systematic with probability roughly 0.29, so
    /// 64 attempts make an overall failure astronomically unlikely.
    pub const KEYGEN_MAX_ATTEMPTS: usize = 64;

    /// Returns the KEM algorithm name
    pub fn name() -> &'static str {
        "McEliece-8192128"
    }

    /// One deterministic generation attempt.
    ///
    /// * `goppa_poly` - the 256-byte coefficient section of the secret key
    /// * `perm` - 8192 seed words, overwritten with the derived secret
    ///   permutation
    /// * `pk` - 1357824-byte output buffer, written only on success
    ///
    /// Fails with a `Processing` primitive error when the instance has no
    /// systematic form; the caller retries with a fresh `perm`. For fixed
    /// inputs the output is bit-identical on every run.
    pub fn public_key_into(goppa_poly: &[u8], perm: &mut [u32], pk: &mut [u8]) -> Result<()> {
        generate_public_key(
            &GF2M13,
            MCELIECE_8192128.n,
            MCELIECE_8192128.t,
            goppa_poly,
            perm,
            pk,
        )?;
        Ok(())
    }

    /// Generate the public key for a secret key, retrying with fresh
    /// permutation seeds from the CSPRNG until an instance is systematic.
    pub fn generate_public_key<R: CryptoRng + RngCore>(
        rng: &mut R,
        secret_key: &McElieceSecretKey,
    ) -> Result<McEliecePublicKey> {
        if secret_key.len() < Self::SECRET_POLY_BYTES {
            return Err(Error::InvalidKey {
                key_type: "McEliece secret",
                reason: "too short for the Goppa polynomial",
            });
        }
        let poly = Zeroizing::new(secret_key.as_bytes()[..Self::SECRET_POLY_BYTES].to_vec());

        let mut perm = Zeroizing::new(vec![0u32; Self::PERM_ENTRIES]);
        let mut pk = vec![0u8; Self::PUBLIC_KEY_BYTES];

        for _ in 0..Self::KEYGEN_MAX_ATTEMPTS {
            for word in perm.iter_mut() {
                *word = rng.next_u32();
            }
            match Self::public_key_into(&poly, &mut perm, &mut pk) {
                Ok(()) => return Ok(McEliecePublicKey(pk)),
                Err(Error::Primitive(PrimitiveError::Processing { .. })) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(Error::KeyGeneration {
            algorithm: "McEliece-8192128",
            details: "no systematic parity-check matrix within the attempt budget",
        })
    }
}
