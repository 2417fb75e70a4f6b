use thiserror::Error;

use crate::prime::is_prime;

/// Tunables for a [`StringMap`](crate::StringMap), passed at creation time.
///
/// Every field has a documented default; a table keeps the config it was
/// created with, so resizes always use the creating call's thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Logical size the first slot array is derived from, and the floor no
    /// shrink ever goes below. Default 53.
    pub initial_base_size: usize,
    /// Grow when `count * 100 / capacity` exceeds this. Default 70.
    pub grow_at: usize,
    /// Shrink when `count * 100 / capacity` falls below this. Default 10.
    pub shrink_at: usize,
    /// Base size is multiplied (grow) or divided (shrink) by this. Default 2.
    pub resize_factor: usize,
    /// First hashing prime. Must exceed the byte alphabet of ASCII keys so
    /// single-character keys cannot collide systematically. Default 151.
    pub hash_prime_a: u64,
    /// Second hashing prime, for the probe stride. Default 163.
    pub hash_prime_b: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_base_size: 53,
            grow_at: 70,
            shrink_at: 10,
            resize_factor: 2,
            hash_prime_a: 151,
            hash_prime_b: 163,
        }
    }
}

/// Rejected [`Config`] values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial base size must be at least 1")]
    ZeroInitialSize,
    #[error("resize factor must be at least 2, got {0}")]
    ResizeFactorTooSmall(usize),
    #[error("load thresholds must satisfy shrink < grow < 100, got shrink={shrink} grow={grow}")]
    ThresholdsOutOfOrder { shrink: usize, grow: usize },
    #[error("hash primes must be distinct, got {0} twice")]
    EqualPrimes(u64),
    #[error("hash prime {0} is not prime")]
    NotPrime(u64),
    #[error("hash prime {0} does not exceed the 128-character key alphabet")]
    PrimeTooSmall(u64),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_base_size == 0 {
            return Err(ConfigError::ZeroInitialSize);
        }
        if self.resize_factor < 2 {
            return Err(ConfigError::ResizeFactorTooSmall(self.resize_factor));
        }
        // grow_at must leave headroom: at 100 a table could fill completely,
        // and a full array gives an insert probe no empty slot to settle in
        if self.shrink_at >= self.grow_at || self.grow_at >= 100 {
            return Err(ConfigError::ThresholdsOutOfOrder {
                shrink: self.shrink_at,
                grow: self.grow_at,
            });
        }
        if self.hash_prime_a == self.hash_prime_b {
            return Err(ConfigError::EqualPrimes(self.hash_prime_a));
        }
        for p in [self.hash_prime_a, self.hash_prime_b] {
            if !is_prime(p as usize) {
                return Err(ConfigError::NotPrime(p));
            }
            if p <= 128 {
                return Err(ConfigError::PrimeTooSmall(p));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_configs() {
        let base = Config::default();

        let cfg = Config {
            initial_base_size: 0,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroInitialSize));

        let cfg = Config {
            resize_factor: 1,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ResizeFactorTooSmall(1)));

        let cfg = Config {
            grow_at: 10,
            shrink_at: 70,
            ..base
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThresholdsOutOfOrder { .. })
        ));

        let cfg = Config {
            grow_at: 100,
            ..base
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ThresholdsOutOfOrder { .. })
        ));

        let cfg = Config {
            hash_prime_a: 163,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EqualPrimes(163)));

        let cfg = Config {
            hash_prime_a: 150,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NotPrime(150)));

        let cfg = Config {
            hash_prime_a: 13,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::PrimeTooSmall(13)));
    }
}
