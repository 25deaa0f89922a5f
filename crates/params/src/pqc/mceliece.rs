//! Constants for Classic McEliece key encapsulation mechanism

/// Structure containing McEliece code parameters
///
/// The scheme is built on a binary Goppa code of length `n` over GF(2^m)
/// with a degree-`t` Goppa polynomial. The parity-check matrix has
/// `m * t` rows; in systematic form the non-identity submatrix is the
/// public key.
pub struct McElieceParams {
    /// Extension degree m of the field GF(2^m)
    pub m: usize,

    /// Reduction polynomial of the field, including the x^m term
    pub field_poly: u32,

    /// Code length
    pub n: usize,

    /// Error correction capability (degree of the Goppa polynomial)
    pub t: usize,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Secret Goppa polynomial size in bytes (t coefficients, 2 bytes each)
    pub secret_poly_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

impl McElieceParams {
    /// Number of rows of the parity-check matrix (m * t)
    pub const fn pk_rows(&self) -> usize {
        self.m * self.t
    }

    /// Bytes per public-key row after the identity columns are dropped
    pub const fn pk_row_bytes(&self) -> usize {
        (self.n - self.pk_rows() + 7) / 8
    }

    /// Number of entries of the permutation seed array (2^m)
    pub const fn perm_entries(&self) -> usize {
        1 << self.m
    }
}

/// McEliece-8192128 parameters (NIST security level 5)
///
/// Field polynomial x^13 + x^4 + x^3 + x + 1.
pub const MCELIECE_8192128: McElieceParams = McElieceParams {
    m: 13,
    field_poly: 0x201B,
    n: 8192,
    t: 128,
    public_key_size: 1_357_824,
    secret_poly_size: 256,
    ciphertext_size: 240,
    shared_secret_size: 32,
};
