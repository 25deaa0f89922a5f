//! Secret support derivation from a permutation seed
//!
//! The caller supplies one 32-bit seed word per field element. Each word is
//! combined with its index into a 63-bit composite key, the keys are run
//! through the constant-time sorting network, and the rank order that falls
//! out is the secret permutation. The first `n` entries, bit-reversed,
//! become the code support. The seed array is overwritten in place with the
//! derived permutation and must be treated as secret-key material afterward.

use alloc::vec::Vec;

use super::gf::{BinaryField, Gf};
use super::sort::sort_u64;
use crate::error::{Error, Result};

/// Derive the support sequence for the first `n` code positions.
///
/// `perm` must hold exactly 2^m words. On return it contains the derived
/// permutation (low m bits per entry). Fails if `n` exceeds the field size
/// or if the truncated permutation repeats an element within the first `n`
/// positions.
pub fn derive_support(field: &BinaryField, n: usize, perm: &mut [u32]) -> Result<Vec<Gf>> {
    let domain = 1usize << field.m();
    if perm.len() != domain {
        return Err(Error::Length {
            context: "permutation seed",
            expected: domain,
            actual: perm.len(),
        });
    }
    if n > domain {
        return Err(Error::param(
            "n",
            "code length exceeds the field size",
        ));
    }

    // 63-bit composite keys: seed in the high bits, index as tie-break.
    let mut keys: Vec<u64> = perm
        .iter()
        .enumerate()
        .map(|(i, &seed)| (u64::from(seed) << 31) | i as u64)
        .collect();
    sort_u64(&mut keys);

    for (entry, key) in perm.iter_mut().zip(keys.iter()) {
        *entry = (*key as u32) & u32::from(field.mask());
    }

    let support: Vec<Gf> = perm[..n]
        .iter()
        .map(|&entry| field.bitrev(Gf(entry as u16)))
        .collect();

    // The index tie-break makes the full-domain rank order unique, but
    // nothing above re-checks distinctness after truncating the sorted keys
    // to m bits. Validate instead of trusting that argument.
    validate_support(field, &support)?;

    Ok(support)
}

/// Check that every support element is distinct.
///
/// A repeated element would silently define an invalid Goppa code, so this
/// is enforced before any matrix is built.
pub fn validate_support(field: &BinaryField, support: &[Gf]) -> Result<()> {
    let mut seen = alloc::vec![false; 1usize << field.m()];
    for elem in support {
        let idx = usize::from(elem.0);
        if seen[idx] {
            return Err(Error::param(
                "support",
                "duplicate field element in support",
            ));
        }
        seen[idx] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::gf::GF2M13;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    const GF8: BinaryField = BinaryField::new(3, 0xB);

    #[test]
    fn equal_seeds_keep_index_order() {
        // With all seed words equal, the index tie-break leaves the
        // identity permutation, so the support is just the bit-reversal
        // of 0, 1, 2, ...
        let mut perm = [7u32; 8];
        let support = derive_support(&GF8, 8, &mut perm).unwrap();
        for (i, &elem) in support.iter().enumerate() {
            assert_eq!(elem, GF8.bitrev(Gf(i as u16)));
            assert_eq!(perm[i], i as u32);
        }
    }

    #[test]
    fn random_seed_yields_bijection() {
        let mut rng = ChaChaRng::seed_from_u64(11);
        let mut perm: Vec<u32> = (0..8192).map(|_| rng.gen()).collect();
        let support = derive_support(&GF2M13, 8192, &mut perm).unwrap();

        // Brute-force bijection check over the whole domain.
        let mut seen = vec![false; 8192];
        for elem in &support {
            assert!(!seen[usize::from(elem.0)]);
            seen[usize::from(elem.0)] = true;
        }
        assert!(seen.iter().all(|&s| s));

        // The overwritten seed array is itself a permutation.
        let mut ranks: Vec<u32> = perm.to_vec();
        ranks.sort_unstable();
        for (i, &r) in ranks.iter().enumerate() {
            assert_eq!(r, i as u32);
        }
    }

    #[test]
    fn truncated_support_is_distinct() {
        let mut rng = ChaChaRng::seed_from_u64(12);
        for _ in 0..10 {
            let mut perm: Vec<u32> = (0..8192).map(|_| rng.gen()).collect();
            let support = derive_support(&GF2M13, 512, &mut perm).unwrap();
            assert_eq!(support.len(), 512);
            validate_support(&GF2M13, &support).unwrap();
        }
    }

    #[test]
    fn rejects_duplicates() {
        let support = [Gf(3), Gf(5), Gf(3)];
        assert!(validate_support(&GF8, &support).is_err());

        let distinct = [Gf(3), Gf(5), Gf(4)];
        validate_support(&GF8, &distinct).unwrap();
    }

    #[test]
    fn rejects_bad_shapes() {
        let mut short = [0u32; 4];
        assert!(derive_support(&GF8, 8, &mut short).is_err());

        let mut perm = [0u32; 8];
        assert!(derive_support(&GF8, 9, &mut perm).is_err());
    }
}
