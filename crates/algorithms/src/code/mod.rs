//! Code-Based Cryptography Primitives
//!
//! Mathematical primitives for code-based cryptosystems in the Classic
//! McEliece family: binary extension-field arithmetic, constant-time
//! support derivation, Goppa polynomial evaluation, and dense bit-matrix
//! reduction to systematic form.
//!
//! The top-level operation is [`generate_public_key`], which turns a secret
//! Goppa polynomial and a secret permutation seed into the byte-packed
//! public key of the code. It is deterministic, allocation-per-call, and
//! has exactly one failure mode: the randomly permuted code may not admit
//! a systematic parity-check matrix, in which case the caller retries with
//! a fresh seed.

pub mod gf;
pub mod goppa;
pub mod matrix;
pub mod sort;
pub mod support;

pub use gf::{BinaryField, Gf, GF2M13};
pub use goppa::{reciprocals, GoppaPoly};
pub use matrix::DenseMatrix;
pub use support::{derive_support, validate_support};

use crate::error::{Error, Result};
use zeroize::Zeroizing;

/// Generate the public key of a binary Goppa code.
///
/// * `goppa_poly` - 2t bytes, t little-endian coefficients of the secret
///   monic degree-t polynomial, consumed start to end
/// * `perm` - 2^m seed words, overwritten in place with the derived
///   permutation; secret-key material after the call
/// * `pk` - output buffer of `m*t * ceil((n - m*t)/8)` bytes, written only
///   on success
///
/// The run time depends only on the parameters (m, n, t), never on the
/// secret values.
pub fn generate_public_key(
    field: &BinaryField,
    n: usize,
    t: usize,
    goppa_poly: &[u8],
    perm: &mut [u32],
    pk: &mut [u8],
) -> Result<()> {
    let m = field.m() as usize;
    if n % 8 != 0 {
        return Err(Error::param("n", "code length must be a multiple of 8"));
    }
    if m * t >= n {
        return Err(Error::param("t", "parity rows must not fill the code length"));
    }

    let g = GoppaPoly::from_le_bytes(field, t, goppa_poly)?;
    let support = Zeroizing::new(derive_support(field, n, perm)?);
    let mut inv = Zeroizing::new(reciprocals(field, &g, support.as_slice()));

    let mut mat = DenseMatrix::zeroed(m * t, n)?;
    mat.fill_parity_check(field, support.as_slice(), inv.as_mut_slice())?;
    mat.reduce_to_systematic()?;
    mat.extract_public_key(pk)?;

    Ok(())
}
