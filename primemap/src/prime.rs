//! Primality helpers used to size the slot array.
//!
//! Capacities stay small enough (doubling from a floor of 53) that trial
//! division is the right tool; a sieve would be wasted machinery here.

/// Returns true if `n` is prime.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`.
///
/// Deterministic and total for every `n` a table will request: the next prime
/// above any `usize` the resize policy can produce exists well before overflow
/// (Bertrand's postulate bounds the gap by `n` itself).
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        let primes = [2, 3, 5, 7, 11, 13, 53, 107, 151, 163];
        for p in primes {
            assert!(is_prime(p), "{p} should be prime");
        }
        for n in [0, 1, 4, 9, 49, 106, 121, 169] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn next_prime_at_or_above() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(53), 53);
        assert_eq!(next_prime(54), 59);
        assert_eq!(next_prime(106), 107);
        assert_eq!(next_prime(212), 223);
    }

    #[test]
    fn next_prime_is_minimal() {
        for n in 2..2_000 {
            let p = next_prime(n);
            assert!(p >= n);
            assert!(is_prime(p));
            for between in n..p {
                assert!(!is_prime(between));
            }
        }
    }
}
