/// Base primes: all primes <= sqrt(n), computed with a plain sieve.
///
/// These are sufficient to eliminate every composite in (sqrt(n), n], so the
/// segmented strategies share this one list read-only across all workers.
/// - Time complexity: O(sqrt(n) log log sqrt(n))
/// - Space complexity: O(sqrt(n))
/// - Returns a strictly increasing Vec; empty for n < 4 (sqrt < 2)
pub fn base_primes(n: u64) -> Vec<u64> {
    let sqrt_n = n.isqrt();
    if sqrt_n < 2 {
        return vec![];
    }

    let mut is_prime = vec![true; (sqrt_n + 1) as usize];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p: u64 = 2;
    while p * p <= sqrt_n {
        if is_prime[p as usize] {
            let mut multiple = p * p;
            while multiple <= sqrt_n {
                is_prime[multiple as usize] = false;
                multiple += p;
            }
        }
        p += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(num, _)| num as u64)
        .collect()
}
