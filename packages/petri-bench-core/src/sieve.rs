//! Sieve of Eratosthenes.

/// Returns all primes `<= limit` in ascending order.
///
/// # Panics
/// If `limit` is `usize::MAX`; `BenchConfig::validate` rejects that limit.
pub fn prime_sieve(limit: usize) -> Vec<usize> {
    let mut sieve = vec![true; limit + 1];
    sieve[0] = false;
    if limit > 0 {
        sieve[1] = false;
    }

    let mut i = 2;
    while i * i <= limit {
        if sieve[i] {
            let mut j = i * i;
            while j <= limit {
                sieve[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    sieve
        .into_iter()
        .enumerate()
        .filter_map(|(index, is_prime)| is_prime.then_some(index))
        .collect()
}
