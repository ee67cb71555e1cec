//! Partitioning of the residual range (sqrt(n), n] into units of work.
//!
//! Two policies: a static equal split (one contiguous interval per rank, used
//! by the distributed strategy) and a dynamic stream of fixed-length segments
//! (pulled from a shared cursor, used by the shared-memory strategy). Both
//! cover (sqrt(n), n] exactly, with no gaps and no overlaps, for any worker
//! count.

/// Segment length used by the variants that take no explicit length argument.
pub const DEFAULT_SEGMENT_LEN: u64 = 100_000;

/// Static equal split: the interval assigned to `rank` out of `world` ranks.
///
/// low(r)  = sqrt(n) + 1 + r * (n - sqrt(n)) / world
/// high(r) = sqrt(n) + (r + 1) * (n - sqrt(n)) / world
///
/// Integer-division rounding is absorbed by the later ranks, so
/// high(world - 1) = n exactly and consecutive ranks are contiguous. When
/// n - sqrt(n) < world some ranks get an empty interval (low > high).
pub fn static_interval(n: u64, world: u64, rank: u64) -> (u64, u64) {
    let sqrt_n = n.isqrt();
    let span = (n - sqrt_n) as u128;
    let low = sqrt_n + 1 + (rank as u128 * span / world as u128) as u64;
    let high = sqrt_n + ((rank as u128 + 1) * span / world as u128) as u64;
    (low, high)
}

/// Number of segments of length `segment_len` needed to cover (sqrt(n), n].
pub fn segment_count(n: u64, segment_len: u64) -> u64 {
    let sqrt_n = n.isqrt();
    (n - sqrt_n).div_ceil(segment_len)
}

/// Bounds of segment `index`: [sqrt(n) + index * len + 1, min(.. + len, n)].
pub fn segment_bounds(n: u64, segment_len: u64, index: u64) -> (u64, u64) {
    let sqrt_n = n.isqrt();
    let low = sqrt_n + 1 + index * segment_len;
    let high = (low + segment_len - 1).min(n);
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reconstruct coverage rank by rank and check it is exactly (sqrt(n), n].
    fn assert_static_split_covers(n: u64, world: u64) {
        let sqrt_n = n.isqrt();
        let mut next = sqrt_n + 1;
        for rank in 0..world {
            let (low, high) = static_interval(n, world, rank);
            assert!(low >= sqrt_n + 1, "n={n} world={world} rank={rank}");
            if low > high {
                // Empty interval; must not shift coverage
                assert_eq!(high, low - 1, "n={n} world={world} rank={rank}");
            }
            assert_eq!(low, next, "gap or overlap at n={n} world={world} rank={rank}");
            next = high + 1;
        }
        assert_eq!(next, n + 1, "last rank must end at n={n} (world={world})");
    }

    #[test]
    fn test_static_split_exact_coverage() {
        for n in [0, 1, 2, 3, 4, 10, 100, 101, 997, 10_000, 123_457] {
            for world in [1, 2, 3, 4, 7, 16, 24] {
                assert_static_split_covers(n, world);
            }
        }
    }

    #[test]
    fn test_static_split_more_workers_than_numbers() {
        // n = 2: residual range is just [2, 2]; with 4 ranks, three get
        // empty intervals and exactly one rank owns 2.
        let owners: Vec<u64> = (0..4)
            .filter(|&r| {
                let (low, high) = static_interval(2, 4, r);
                low <= 2 && 2 <= high
            })
            .collect();
        assert_eq!(owners.len(), 1);
        assert_static_split_covers(2, 4);
    }

    #[test]
    fn test_segment_stream_exact_coverage() {
        for n in [0u64, 1, 2, 10, 100, 101, 10_000] {
            for len in [1, 2, 3, 7, 100, 1_000_000] {
                let sqrt_n = n.isqrt();
                let mut next = sqrt_n + 1;
                for k in 0..segment_count(n, len) {
                    let (low, high) = segment_bounds(n, len, k);
                    assert_eq!(low, next, "n={n} len={len} k={k}");
                    assert!(low <= high, "n={n} len={len} k={k}");
                    assert!(high <= n);
                    next = high + 1;
                }
                assert_eq!(next, n + 1, "stream must end at n={n} (len={len})");
            }
        }
    }

    #[test]
    fn test_segment_stream_trivial_bounds() {
        // No residual range below n = 2
        assert_eq!(segment_count(0, 100), 0);
        assert_eq!(segment_count(1, 100), 0);
        assert_eq!(segment_count(2, 100), 1);
        assert_eq!(segment_bounds(2, 100, 0), (2, 2));
    }

    #[test]
    fn test_boundary_numbers_attributed_once() {
        // sqrt(n)+1 and n itself each belong to exactly one interval.
        let n: u64 = 10_000;
        let sqrt_n = n.isqrt();
        for world in [1, 3, 8] {
            for target in [sqrt_n + 1, n] {
                let owners = (0..world)
                    .filter(|&r| {
                        let (low, high) = static_interval(n, world, r);
                        low <= target && target <= high
                    })
                    .count();
                assert_eq!(owners, 1, "target={target} world={world}");
            }
        }
    }
}
