//! Arithmetic over binary extension fields GF(2^m)
//!
//! Elements are stored in the low `m` bits of a `u16`. All field operations
//! run in constant time: multiplication is a shift-and-mask carry-less
//! product followed by reduction with the field polynomial, and inversion is
//! a fixed square-and-multiply chain raising to 2^m - 2. No operation
//! branches on, or indexes memory by, element values.

use core::ops::{BitXor, BitXorAssign};
use pqcrypt_params::pqc::mceliece::MCELIECE_8192128;
use zeroize::Zeroize;

/// A single field element, valid in the low `m` bits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct Gf(pub u16);

impl Gf {
    /// The additive identity
    pub const ZERO: Gf = Gf(0);
    /// The multiplicative identity
    pub const ONE: Gf = Gf(1);

    /// Bit `k` of the element, as 0 or 1
    #[inline]
    pub fn bit(self, k: usize) -> u8 {
        ((self.0 >> k) & 1) as u8
    }
}

// Addition in characteristic 2 is XOR.
impl BitXor for Gf {
    type Output = Gf;

    #[inline]
    fn bitxor(self, rhs: Gf) -> Gf {
        Gf(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Gf {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Gf) {
        self.0 ^= rhs.0;
    }
}

/// A binary extension field GF(2^m), fixed by its reduction polynomial
///
/// `poly` holds the full reduction polynomial including the x^m term, so
/// GF(2^13) with x^13 + x^4 + x^3 + x + 1 is `BinaryField::new(13, 0x201B)`.
#[derive(Clone, Copy, Debug)]
pub struct BinaryField {
    m: u32,
    poly: u32,
}

/// The field GF(2^13) used by the McEliece-8192128 parameter set
pub const GF2M13: BinaryField = BinaryField::new(
    MCELIECE_8192128.m as u32,
    MCELIECE_8192128.field_poly,
);

impl BinaryField {
    /// Construct a field from its extension degree and reduction polynomial.
    ///
    /// Panics if `m` is outside 2..=15 or `poly` is not monic of degree
    /// exactly `m`. Both arguments are public parameters, never secrets.
    pub const fn new(m: u32, poly: u32) -> Self {
        assert!(m >= 2 && m <= 15);
        assert!(poly >> m == 1);
        BinaryField { m, poly }
    }

    /// Extension degree m
    #[inline]
    pub const fn m(&self) -> u32 {
        self.m
    }

    /// Mask covering the valid low m bits of an element
    #[inline]
    pub const fn mask(&self) -> u16 {
        ((1u32 << self.m) - 1) as u16
    }

    /// Load a raw value as a field element, discarding out-of-range bits
    #[inline]
    pub fn load(&self, raw: u16) -> Gf {
        Gf(raw & self.mask())
    }

    /// Field multiplication
    pub fn mul(&self, a: Gf, b: Gf) -> Gf {
        let a = u32::from(a.0);
        let b = u32::from(b.0);

        // Carry-less product, one conditional-by-mask addend per bit of b.
        let mut acc = 0u32;
        for i in 0..self.m {
            acc ^= (a << i) * ((b >> i) & 1);
        }

        // Fold the high bits down with the reduction polynomial. The x^m
        // term of `poly` clears bit i on each step.
        let mut i = 2 * self.m - 2;
        while i >= self.m {
            acc ^= (self.poly << (i - self.m)) * ((acc >> i) & 1);
            i -= 1;
        }

        Gf(acc as u16)
    }

    /// Field squaring
    #[inline]
    pub fn sq(&self, a: Gf) -> Gf {
        self.mul(a, a)
    }

    /// Field inversion, with `inv(0) == 0` by convention
    ///
    /// Computes a^(2^m - 2) by a fixed square-and-multiply chain, so the
    /// operation count does not depend on the element.
    pub fn inv(&self, a: Gf) -> Gf {
        let mut out = a;
        for _ in 0..self.m - 2 {
            out = self.mul(self.sq(out), a);
        }
        self.sq(out)
    }

    /// Reverse the low m bits of an element
    pub fn bitrev(&self, a: Gf) -> Gf {
        let mut out = 0u16;
        for k in 0..self.m {
            out |= ((a.0 >> k) & 1) << (self.m - 1 - k);
        }
        Gf(out)
    }
}
