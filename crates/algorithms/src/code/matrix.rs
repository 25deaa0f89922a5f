//! Dense bit-matrix construction and systematic-form reduction
//!
//! The parity-check matrix is one contiguous byte arena with explicit row
//! stride, not nested containers: Gaussian elimination scans whole rows at
//! byte granularity, and the flat layout keeps that scan cache-friendly.
//! Column c of a row lives at byte c/8, bit c%8.
//!
//! Elimination is branchless. Every candidate row is combined under an
//! arithmetic mask whether or not it changes anything, so the time and
//! access pattern are fixed by the dimensions alone and leak nothing about
//! the secret code. Do not shortcut zero-mask rows.

use alloc::vec::Vec;

use super::gf::{BinaryField, Gf};
use crate::error::{Error, Result};
use pqcrypt_internal::constant_time::ct_bit_mask;

/// A dense binary matrix, row-major and byte-packed
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    stride: usize,
    data: Vec<u8>,
}

impl DenseMatrix {
    /// Allocate an all-zero matrix. The column count must be a multiple of
    /// 8 and at least the row count.
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::param("matrix", "dimensions must be positive"));
        }
        if cols % 8 != 0 {
            return Err(Error::param("matrix", "column count must be a multiple of 8"));
        }
        if rows > cols {
            return Err(Error::param("matrix", "more rows than columns"));
        }
        let stride = cols / 8;
        Ok(DenseMatrix {
            rows,
            cols,
            stride,
            data: alloc::vec![0u8; rows * stride],
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One packed row
    pub fn row(&self, r: usize) -> &[u8] {
        &self.data[r * self.stride..(r + 1) * self.stride]
    }

    /// Single bit at (r, c), as 0 or 1
    pub fn bit(&self, r: usize, c: usize) -> u8 {
        (self.row(r)[c / 8] >> (c % 8)) & 1
    }

    /// Bit-slice the reciprocal buffer into the parity-check matrix.
    ///
    /// Layer i of the Goppa parity check wants `L[j]^i / g(L[j])` at every
    /// position j. Rather than re-evaluating g per layer, `inv` starts as
    /// `1/g(L[j])` and is multiplied by `L[j]` in place between layers,
    /// which yields the next layer's values directly. Row `i*m + k` holds
    /// bit k of layer i; eight consecutive positions pack into one byte
    /// with position j+7 in the most significant bit.
    ///
    /// `inv` is consumed: on return it holds the layer-t values.
    pub fn fill_parity_check(
        &mut self,
        field: &BinaryField,
        support: &[Gf],
        inv: &mut [Gf],
    ) -> Result<()> {
        let m = field.m() as usize;
        if support.len() != self.cols || inv.len() != self.cols {
            return Err(Error::Length {
                context: "parity-check fill",
                expected: self.cols,
                actual: support.len().min(inv.len()),
            });
        }
        if self.rows % m != 0 {
            return Err(Error::param("matrix", "row count must be a multiple of m"));
        }
        let t = self.rows / m;

        for layer in 0..t {
            for j in (0..self.cols).step_by(8) {
                for k in 0..m {
                    let mut b = 0u8;
                    for d in (0..8).rev() {
                        b <<= 1;
                        b |= inv[j + d].bit(k);
                    }
                    self.data[(layer * m + k) * self.stride + j / 8] = b;
                }
            }

            for (v, &l) in inv.iter_mut().zip(support.iter()) {
                *v = field.mul(*v, l);
            }
        }

        Ok(())
    }

    /// Reduce in place to systematic form `[I | T]` over GF(2).
    ///
    /// Pivots are taken in fixed physical order, never searched for by
    /// content. Each step first absorbs every lower row under a mask to
    /// force the pivot bit, then checks it, then clears the pivot column
    /// from every other row, again under masks. The absorb and clear
    /// passes always touch every row and every byte.
    ///
    /// The pivot check is the engine's only failure: if a pivot cannot be
    /// made 1, the matrix admits no systematic form in this column order
    /// and the whole generation attempt must be retried with a fresh seed.
    pub fn reduce_to_systematic(&mut self) -> Result<()> {
        let stride = self.stride;

        for i in 0..(self.rows + 7) / 8 {
            for j in 0..8 {
                let row = i * 8 + j;
                if row >= self.rows {
                    break;
                }

                for k in (row + 1)..self.rows {
                    let mask =
                        ct_bit_mask((self.data[row * stride + i] ^ self.data[k * stride + i]) >> j);
                    for c in 0..stride {
                        self.data[row * stride + c] ^= self.data[k * stride + c] & mask;
                    }
                }

                if (self.data[row * stride + i] >> j) & 1 == 0 {
                    return Err(Error::Processing {
                        operation: "gaussian elimination",
                        details: "matrix is not reducible to systematic form",
                    });
                }

                for k in 0..self.rows {
                    if k != row {
                        let mask = ct_bit_mask(self.data[k * stride + i] >> j);
                        for c in 0..stride {
                            self.data[k * stride + c] ^= self.data[row * stride + c] & mask;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Bytes per row of the serialized public key
    pub fn pk_row_bytes(&self) -> usize {
        (self.cols - self.rows + 7) / 8
    }

    /// Copy the `T` submatrix (everything after the identity columns) into
    /// `pk`, row-major. When the row count is a multiple of 8 this is a
    /// straight byte copy; otherwise each output byte is stitched from two
    /// neighbors with a bit shift.
    pub fn extract_public_key(&self, pk: &mut [u8]) -> Result<()> {
        let prb = self.pk_row_bytes();
        if pk.len() != self.rows * prb {
            return Err(Error::Length {
                context: "public key buffer",
                expected: self.rows * prb,
                actual: pk.len(),
            });
        }

        let tail = self.rows / 8;
        let shift = self.rows % 8;

        for r in 0..self.rows {
            let row = self.row(r);
            let out = &mut pk[r * prb..(r + 1) * prb];
            if shift == 0 {
                out.copy_from_slice(&row[tail..tail + prb]);
            } else {
                for (c, byte) in out.iter_mut().enumerate() {
                    let mut b = row[tail + c] >> shift;
                    if tail + c + 1 < row.len() {
                        b |= row[tail + c + 1] << (8 - shift);
                    }
                    *byte = b;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::goppa::{reciprocals, GoppaPoly};
    use crate::code::support::derive_support;

    const GF8: BinaryField = BinaryField::new(3, 0xB);

    fn pow(field: &BinaryField, x: Gf, e: usize) -> Gf {
        let mut acc = Gf::ONE;
        for _ in 0..e {
            acc = field.mul(acc, x);
        }
        acc
    }

    fn toy_support() -> Vec<Gf> {
        let mut perm = [6u32, 1, 4, 7, 2, 5, 0, 3];
        derive_support(&GF8, 8, &mut perm).unwrap()
    }

    fn build(field: &BinaryField, g: &GoppaPoly, support: &[Gf]) -> DenseMatrix {
        let m = field.m() as usize;
        let mut inv = reciprocals(field, g, support);
        let mut mat = DenseMatrix::zeroed(m * g.degree(), support.len()).unwrap();
        mat.fill_parity_check(field, support, &mut inv).unwrap();
        mat
    }

    /// Plain unpacked reference: entry (i*m + k, j) is bit k of
    /// L_j^i / g(L_j), computed from scratch per layer.
    fn reference_bits(field: &BinaryField, g: &GoppaPoly, support: &[Gf]) -> Vec<Vec<u8>> {
        let m = field.m() as usize;
        let rows = m * g.degree();
        let mut bits = alloc::vec![alloc::vec![0u8; support.len()]; rows];
        for (j, &l) in support.iter().enumerate() {
            let recip = field.inv(g.eval(field, l));
            for i in 0..g.degree() {
                let h = field.mul(pow(field, l, i), recip);
                for k in 0..m {
                    bits[i * m + k][j] = h.bit(k);
                }
            }
        }
        bits
    }

    /// Reference reduction by Gauss-Jordan with row swaps. Returns the T
    /// submatrix bits, or None when the leading square block is singular.
    fn reference_reduce(mut bits: Vec<Vec<u8>>) -> Option<Vec<Vec<u8>>> {
        let rows = bits.len();
        let cols = bits[0].len();
        for col in 0..rows {
            let pivot = (col..rows).find(|&r| bits[r][col] == 1)?;
            bits.swap(col, pivot);
            for r in 0..rows {
                if r != col && bits[r][col] == 1 {
                    for c in 0..cols {
                        bits[r][c] ^= bits[col][c];
                    }
                }
            }
        }
        Some(bits.iter().map(|row| row[rows..].to_vec()).collect())
    }

    #[test]
    fn layered_fill_matches_direct_evaluation() {
        let support = toy_support();
        let g = GoppaPoly::from_le_bytes(&GF8, 2, &[3, 0, 5, 0]).unwrap();
        let mat = build(&GF8, &g, &support);
        let expected = reference_bits(&GF8, &g, &support);
        for r in 0..mat.rows() {
            for c in 0..mat.cols() {
                assert_eq!(mat.bit(r, c), expected[r][c], "bit ({}, {})", r, c);
            }
        }
    }

    /// Exhaustive toy-parameter cross-check: for every monic degree-2
    /// polynomial over GF(8), the engine and an independent naive
    /// reduction must agree both on success and, bit for bit, on the
    /// serialized T submatrix.
    #[test]
    fn toy_roundtrip_against_reference() {
        let support = toy_support();
        let mut successes = 0;
        let mut failures = 0;

        for g0 in 0..8u8 {
            for g1 in 0..8u8 {
                let g = GoppaPoly::from_le_bytes(&GF8, 2, &[g0, 0, g1, 0]).unwrap();
                let mut mat = build(&GF8, &g, &support);
                let reference = reference_reduce(reference_bits(&GF8, &g, &support));

                match mat.reduce_to_systematic() {
                    Ok(()) => {
                        let t_bits = reference.expect("reference must also succeed");
                        successes += 1;

                        // identity block, bit by bit
                        for r in 0..mat.rows() {
                            for c in 0..mat.rows() {
                                assert_eq!(mat.bit(r, c), u8::from(r == c));
                            }
                        }

                        // serialized T submatrix
                        let prb = mat.pk_row_bytes();
                        let mut pk = alloc::vec![0u8; mat.rows() * prb];
                        mat.extract_public_key(&mut pk).unwrap();
                        for r in 0..mat.rows() {
                            for (b, &bit) in t_bits[r].iter().enumerate() {
                                let byte = pk[r * prb + b / 8];
                                assert_eq!((byte >> (b % 8)) & 1, bit, "row {} bit {}", r, b);
                            }
                        }
                    }
                    Err(_) => {
                        assert!(reference.is_none(), "reference must also fail");
                        failures += 1;
                    }
                }
            }
        }

        assert!(successes > 0, "no polynomial produced a systematic matrix");
        assert!(failures > 0, "no polynomial exercised the failure path");
    }

    #[test]
    fn degenerate_polynomial_fails_without_output() {
        // g = (x - L0)(x - L1) shares its roots with the first two support
        // points, so the first two matrix columns are zero and the very
        // first pivot fails.
        let support = toy_support();
        let (a, b) = (support[0], support[1]);
        let g0 = GF8.mul(a, b).0 as u8;
        let g1 = (a ^ b).0 as u8;
        let g = GoppaPoly::from_le_bytes(&GF8, 2, &[g0, 0, g1, 0]).unwrap();

        let mut mat = build(&GF8, &g, &support);
        let err = mat.reduce_to_systematic().unwrap_err();
        assert!(matches!(err, Error::Processing { .. }));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(DenseMatrix::zeroed(0, 8).is_err());
        assert!(DenseMatrix::zeroed(4, 12).is_err());
        assert!(DenseMatrix::zeroed(16, 8).is_err());

        let mut mat = DenseMatrix::zeroed(6, 8).unwrap();
        let support = toy_support();
        let mut inv = alloc::vec![Gf::ZERO; 4];
        assert!(mat
            .fill_parity_check(&GF8, &support, &mut inv)
            .is_err());

        let mut pk = alloc::vec![0u8; 3];
        assert!(mat.extract_public_key(&mut pk).is_err());
    }
}
