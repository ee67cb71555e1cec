use crate::base::base_primes;
use crate::partition::{segment_bounds, segment_count};
use crate::segment::SegmentSieve;

/// Sequential baseline: one worker walks the segment stream in order.
///
/// Exercises the same base-prime / partition / segment-sieve pipeline as the
/// parallel strategies, with a single reused buffer and a plain accumulator.
pub fn count_primes(n: u64, segment_len: u64) -> u64 {
    let base = base_primes(n);
    let mut sieve = SegmentSieve::with_capacity(segment_len.min(n.saturating_add(1)) as usize);

    let mut count = 0;
    for k in 0..segment_count(n, segment_len) {
        let (low, high) = segment_bounds(n, segment_len, k);
        count += sieve.count_range(low, high, &base);
    }

    // Primes <= sqrt(n) are never covered by any segment; add them once here.
    count + base.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::DEFAULT_SEGMENT_LEN;

    #[test]
    fn test_known_prime_counts() {
        assert_eq!(count_primes(0, DEFAULT_SEGMENT_LEN), 0);
        assert_eq!(count_primes(1, DEFAULT_SEGMENT_LEN), 0);
        assert_eq!(count_primes(2, DEFAULT_SEGMENT_LEN), 1);
        assert_eq!(count_primes(10, DEFAULT_SEGMENT_LEN), 4);
        assert_eq!(count_primes(100, DEFAULT_SEGMENT_LEN), 25);
        assert_eq!(count_primes(1000, DEFAULT_SEGMENT_LEN), 168);
        assert_eq!(count_primes(10_000, DEFAULT_SEGMENT_LEN), 1229);
        assert_eq!(count_primes(100_000, DEFAULT_SEGMENT_LEN), 9592);
    }

    #[test]
    fn test_segment_length_does_not_change_count() {
        for len in [1, 2, 13, 100, 1 << 20] {
            assert_eq!(count_primes(10_000, len), 1229, "len={len}");
        }
    }

    #[test]
    fn test_prime_and_composite_bounds() {
        // n itself prime vs composite around the same point
        assert_eq!(count_primes(997, 64), 168);
        assert_eq!(count_primes(996, 64), 167);
        // perfect square bound: sqrt boundary lands exactly on 31*31
        assert_eq!(count_primes(961, 64), 162);
    }
}
