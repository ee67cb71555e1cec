use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crate::base::base_primes;
use crate::partition::{segment_bounds, segment_count};
use crate::segment::SegmentSieve;

/// Shared-memory strategy: a fixed pool of threads draining a segment stream.
///
/// The only shared mutable state is the segment cursor and the reduction
/// total, both atomics. Each thread owns one segment buffer sized for
/// `segment_len`, pulls the next unprocessed segment index with `fetch_add`,
/// and accumulates locally; the local sum is added to the shared total once,
/// when the thread runs out of segments. Dynamic draw order balances load
/// when segment cost varies, and leaves the total unchanged because the
/// segments are disjoint and addition commutes.
pub fn count_primes(n: u64, segment_len: u64, num_threads: usize) -> u64 {
    let base = base_primes(n);
    let total_segments = segment_count(n, segment_len);

    let next_segment = AtomicU64::new(0);
    let total = AtomicU64::new(0);

    thread::scope(|scope| {
        for _ in 0..num_threads.max(1) {
            let base = &base;
            let next_segment = &next_segment;
            let total = &total;

            scope.spawn(move || {
                let mut sieve =
                    SegmentSieve::with_capacity(segment_len.min(n.saturating_add(1)) as usize);
                let mut local_count = 0;

                loop {
                    let k = next_segment.fetch_add(1, Ordering::Relaxed);
                    if k >= total_segments {
                        break;
                    }
                    let (low, high) = segment_bounds(n, segment_len, k);
                    local_count += sieve.count_range(low, high, base);
                }

                total.fetch_add(local_count, Ordering::Relaxed);
            });
        }
    });

    // All threads are joined at scope exit, so this read sees every
    // contribution. Base primes are added exactly once, here.
    total.load(Ordering::Relaxed) + base.len() as u64
}

/// Thread count supplied by the execution environment, not the CLI.
pub fn num_threads_from_env() -> usize {
    std::env::var("PSIEVE_NUM_THREADS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&t| t > 0)
        .unwrap_or_else(|| {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(4)
        })
}
