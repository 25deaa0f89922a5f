//! Goppa polynomial evaluation
//!
//! The secret polynomial is monic of degree t with coefficients in GF(2^m).
//! Key generation needs the reciprocal 1/g(L[i]) at every support point;
//! evaluation is Horner's rule over the field, and inversion uses the
//! constant-time field inverse.

use alloc::vec::Vec;

use super::gf::{BinaryField, Gf};
use crate::error::{Error, Result};
use pqcrypt_internal::endian::u16_from_le_bytes;

/// A monic Goppa polynomial of degree t
#[derive(Clone, Debug)]
pub struct GoppaPoly {
    coeffs: Vec<Gf>,
}

impl GoppaPoly {
    /// Load the t secret coefficients from 2t little-endian bytes.
    ///
    /// Each coefficient is masked to the low m bits; the leading
    /// coefficient is fixed to 1.
    pub fn from_le_bytes(field: &BinaryField, t: usize, bytes: &[u8]) -> Result<Self> {
        if t == 0 {
            return Err(Error::param("t", "polynomial degree must be positive"));
        }
        if bytes.len() != 2 * t {
            return Err(Error::Length {
                context: "goppa polynomial",
                expected: 2 * t,
                actual: bytes.len(),
            });
        }

        let mut coeffs = Vec::with_capacity(t + 1);
        for chunk in bytes.chunks_exact(2) {
            coeffs.push(field.load(u16_from_le_bytes(chunk)));
        }
        coeffs.push(Gf::ONE);

        Ok(GoppaPoly { coeffs })
    }

    /// Degree of the polynomial (t)
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficients in ascending order, the monic leading term last
    pub fn coeffs(&self) -> &[Gf] {
        &self.coeffs
    }

    /// Evaluate at `x` by Horner's rule
    pub fn eval(&self, field: &BinaryField, x: Gf) -> Gf {
        let mut iter = self.coeffs.iter().rev();
        let mut acc = iter.next().copied().unwrap_or(Gf::ZERO);
        for &c in iter {
            acc = field.mul(acc, x) ^ c;
        }
        acc
    }
}

/// Compute `1 / g(L[i])` for every support point.
///
/// If g has a root in the support, the corresponding entry is 0 (the
/// convention of the field inverse); the all-zero matrix column this
/// produces surfaces later as a non-systematic reduction failure rather
/// than a distinct error.
pub fn reciprocals(field: &BinaryField, g: &GoppaPoly, support: &[Gf]) -> Vec<Gf> {
    support
        .iter()
        .map(|&x| field.inv(g.eval(field, x)))
        .collect()
}
