//! Key generation parameters.

use std::time::Duration;

pub const DEFAULT_PUBLIC_EXPONENT: u32 = 65537;
/// Bit length of the replacement exponent drawn when 65537 shares a factor with the totient.
pub const FALLBACK_EXPONENT_BITS: u64 = 16;
/// Composite-error bound of 2^-100.
pub const DEFAULT_CERTAINTY: u32 = 100;
pub const MIN_MODULUS_BITS: u64 = 16;
/// Largest content size the sizing policy accepts, plus its margin.
pub const MAX_MODULUS_BITS: u64 = 1024 * 8 + 24;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    pub public_exponent: u32,
    pub fallback_exponent_bits: u64,
    pub certainty: u32,
    pub min_bits: u64,
    pub max_bits: u64,
    pub timeout: Duration,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
            fallback_exponent_bits: FALLBACK_EXPONENT_BITS,
            certainty: DEFAULT_CERTAINTY,
            min_bits: MIN_MODULUS_BITS,
            max_bits: MAX_MODULUS_BITS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl KeyGenConfig {
    pub fn with_public_exponent(mut self, e: u32) -> Self {
        self.public_exponent = e;
        self
    }

    pub fn with_certainty(mut self, certainty: u32) -> Self {
        self.certainty = certainty;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
