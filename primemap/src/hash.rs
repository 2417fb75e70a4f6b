//! Polynomial rolling hash and the double-hashing probe sequence.

use crate::config::Config;

/// Hashes `key` as `sum(prime^(L-1-i) * byte_i) mod modulus`, evaluated in
/// Horner form with a reduction after every term so the accumulator stays
/// below `modulus * prime + 255` no matter how long the key is.
pub(crate) fn poly_hash(key: &str, prime: u64, modulus: u64) -> u64 {
    let m = u128::from(modulus);
    let p = u128::from(prime);
    let mut acc: u128 = 0;
    for byte in key.bytes() {
        acc = (acc * p + u128::from(byte)) % m;
    }
    acc as u64
}

/// The sequence of candidate slot indices for a key, one per collision.
///
/// Attempt `a` lands on `(h1 + a * (h2 + 1)) mod capacity` where `h1` and
/// `h2` come from `poly_hash` with the two configured primes. Both hashes are
/// computed once up front; advancing is a single add-and-wrap.
pub(crate) struct ProbeSeq {
    index: usize,
    stride: usize,
    capacity: usize,
}

impl ProbeSeq {
    pub(crate) fn new(key: &str, config: &Config, capacity: usize) -> Self {
        let h1 = poly_hash(key, config.hash_prime_a, capacity as u64) as usize;
        let h2 = poly_hash(key, config.hash_prime_b, capacity as u64) as usize;
        // (h2 + 1) mod capacity is still zero when h2 == capacity - 1, and a
        // zero stride would pin every attempt to the same index.
        let stride = match (h2 + 1) % capacity {
            0 => 1,
            s => s,
        };
        Self {
            index: h1,
            stride,
            capacity,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn advance(&mut self) {
        self.index = (self.index + self.stride) % self.capacity;
    }
}
