//! Constant-time sorting network for 63-bit keys
//!
//! Batcher's odd-even merge sort over `u64` keys. The comparison schedule
//! depends only on the slice length, and each compare-exchange is a
//! branchless masked swap, so the memory access pattern and running time
//! are independent of the key values. Used to derive the secret support
//! permutation, which must not leak through timing.

/// Branchless compare-exchange: leaves the smaller key at index `a`.
///
/// The swap mask comes from the sign of the 64-bit difference, which is
/// only correct for keys below 2^63.
#[inline]
fn minmax(keys: &mut [u64], a: usize, b: usize) {
    let x = keys[a];
    let y = keys[b];
    let swap = 0u64.wrapping_sub(y.wrapping_sub(x) >> 63);
    let delta = (x ^ y) & swap;
    keys[a] = x ^ delta;
    keys[b] = y ^ delta;
}

/// Sort keys ascending with a data-independent comparison schedule.
///
/// The length must be a power of two and every key must fit in 63 bits.
pub fn sort_u64(keys: &mut [u64]) {
    let n = keys.len();
    if n < 2 {
        return;
    }
    assert!(n.is_power_of_two(), "sorting network requires power-of-two length");

    let mut p = 1;
    while p < n {
        let mut k = p;
        while k >= 1 {
            let mut j = k % p;
            while j + k < n {
                let span = core::cmp::min(k, n - j - k);
                for i in 0..span {
                    if (i + j) / (2 * p) == (i + j + k) / (2 * p) {
                        minmax(keys, i + j, i + j + k);
                    }
                }
                j += 2 * k;
            }
            k /= 2;
        }
        p *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    #[test]
    fn matches_std_sort() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        for &n in &[2usize, 8, 16, 64, 256, 1024, 8192] {
            let mut keys: Vec<u64> = (0..n).map(|_| rng.gen::<u64>() >> 1).collect();
            let mut expected = keys.clone();
            expected.sort_unstable();
            sort_u64(&mut keys);
            assert_eq!(keys, expected, "length {}", n);
        }
    }

    #[test]
    fn sorts_edge_patterns() {
        let mut already = vec![1u64, 2, 3, 4];
        sort_u64(&mut already);
        assert_eq!(already, [1, 2, 3, 4]);

        let mut reversed: Vec<u64> = (0..64).rev().collect();
        sort_u64(&mut reversed);
        let expected: Vec<u64> = (0..64).collect();
        assert_eq!(reversed, expected);

        let mut equal = vec![5u64; 16];
        sort_u64(&mut equal);
        assert_eq!(equal, vec![5u64; 16]);

        let mut tiny = vec![9u64];
        sort_u64(&mut tiny);
        assert_eq!(tiny, [9]);
    }

    #[test]
    fn minmax_orders_pair() {
        let mut keys = [7u64, 3];
        minmax(&mut keys, 0, 1);
        assert_eq!(keys, [3, 7]);
        minmax(&mut keys, 0, 1);
        assert_eq!(keys, [3, 7]);
    }
}
