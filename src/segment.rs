/// Sieve over one interval [low, high] using precomputed base primes.
///
/// Owns a reusable scratch buffer so a worker can process many segments
/// without reallocating. The buffer is fully overwritten at the start of
/// every pass and is never read before being written, which is what makes
/// reuse across iterations safe.
pub struct SegmentSieve {
    is_prime: Vec<bool>,
}

impl SegmentSieve {
    /// An empty sieve; the buffer grows on first use.
    pub fn new() -> Self {
        SegmentSieve { is_prime: vec![] }
    }

    /// A sieve preallocated for intervals up to `capacity` numbers long.
    pub fn with_capacity(capacity: usize) -> Self {
        SegmentSieve {
            is_prime: vec![false; capacity],
        }
    }

    /// Count the primes in [low, high].
    ///
    /// For each base prime p the first marked multiple is
    /// max(p*p, ceil(low / p) * p): multiples below p*p were already caught
    /// by a smaller base prime, and p*p is the first composite that was not.
    /// An empty interval (low > high) counts 0 without touching the buffer.
    pub fn count_range(&mut self, low: u64, high: u64, base_primes: &[u64]) -> u64 {
        if low > high {
            return 0;
        }

        let len = (high - low + 1) as usize;
        if self.is_prime.len() < len {
            self.is_prime.resize(len, false);
        }

        let is_prime = &mut self.is_prime[..len];
        is_prime.fill(true);

        for &p in base_primes {
            // Base primes are ascending, so once p*p > high no later prime
            // has a multiple left to mark. Written division-side to stay
            // safe for p near 2^32.
            if p > high / p {
                break;
            }

            let mut multiple = (p * p).max(low.div_ceil(p) * p);
            while multiple <= high {
                is_prime[(multiple - low) as usize] = false;
                multiple += p;
            }
        }

        is_prime.iter().filter(|&&prime| prime).count() as u64
    }
}
