use std::time::Duration;

use log::{debug, trace, warn};
use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::cancel::CancelToken;
use crate::config::{KeyGenConfig, MIN_MODULUS_BITS};
use crate::error::{Result, RsaError};
use crate::keys::KeyPair;
use crate::number_theory::{abs_diff, gcd, mod_inverse};
use crate::primality::MillerRabinTest;
use crate::rsa::prime::PrimeGenerator;

/// Every value produced while building a key pair, factors included.
///
/// Only meant for checking generated keys; regular callers get a [`KeyPair`].
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct KeyComponents {
    pub p: BigUint,
    pub q: BigUint,
    pub n: BigUint,
    pub totient: BigUint,
    pub e: BigUint,
    pub d: BigUint,
}

impl KeyComponents {
    pub fn into_key_pair(self) -> KeyPair {
        KeyPair::from_parts(self.e, self.d, self.n)
    }
}

/// RSA key pair generation service
#[derive(Debug, Clone, Default)]
pub struct KeyPairGenerator {
    config: KeyGenConfig,
}

impl KeyPairGenerator {
    pub fn new(config: KeyGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Checks that `bit_length` is a usable modulus size.
    ///
    /// `MIN_MODULUS_BITS` holds even when the configured floor is lower:
    /// below it the two primes cannot be far enough apart and the search
    /// for `q` never ends.
    pub fn validate_bit_length(&self, bit_length: u64) -> Result<()> {
        if bit_length < self.config.min_bits.max(MIN_MODULUS_BITS) {
            return Err(RsaError::InvalidKeySize {
                bits: bit_length,
                reason: "too small to find a coprime public exponent",
            });
        }
        if bit_length > self.config.max_bits {
            return Err(RsaError::InvalidKeySize {
                bits: bit_length,
                reason: "exceeds the maximum accepted size",
            });
        }
        if bit_length % 2 != 0 {
            return Err(RsaError::InvalidKeySize {
                bits: bit_length,
                reason: "must be even so p and q have equal length",
            });
        }
        Ok(())
    }

    /// Generates a key pair whose modulus is the product of two
    /// `bit_length / 2`-bit primes at least 2^(bit_length / 4 - 1) apart.
    pub fn generate_keypair<R>(
        &self,
        bit_length: u64,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> Result<KeyPair>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        self.generate_components(bit_length, rng, cancel)
            .map(KeyComponents::into_key_pair)
    }

    #[doc(hidden)]
    pub fn generate_components<R>(
        &self,
        bit_length: u64,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> Result<KeyComponents>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        self.validate_bit_length(bit_length)?;
        debug!("Generating {}-bit RSA key pair", bit_length);

        let primes = PrimeGenerator::new(MillerRabinTest, self.config.certainty);
        let half_bits = bit_length / 2;
        let min_distance_bits = bit_length / 4;
        let one = BigUint::one();

        let p = primes.generate_strong_prime(half_bits, rng, cancel)?;
        debug!("Generated p ({} bits)", p.bits());

        let q = loop {
            let candidate = primes.generate_strong_prime(half_bits, rng, cancel)?;
            if candidate != p && abs_diff(&p, &candidate).bits() >= min_distance_bits {
                break candidate;
            }
            trace!("q rejected: too close to p");
        };
        debug!("Generated q ({} bits)", q.bits());

        let n = &p * &q;
        let totient = (&p - &one) * (&q - &one);

        let mut e = BigUint::from(self.config.public_exponent);
        while gcd(&totient, &e) != one {
            debug!("Public exponent {} shares a factor with the totient, drawing a new one", e);
            e = primes.generate_strong_prime(self.config.fallback_exponent_bits, rng, cancel)?;
        }

        let d = mod_inverse(&e, &totient).ok_or_else(|| {
            RsaError::GenerationFailed(
                "public exponent has no inverse modulo the totient".to_string(),
            )
        })?;
        debug!("Key generation complete: n has {} bits", n.bits());

        Ok(KeyComponents { p, q, n, totient, e, d })
    }

    /// Runs generation on the blocking pool, bounded by the configured timeout.
    ///
    /// On expiry the search is cancelled and stops after its current
    /// primality test; the caller gets `GenerationTimedOut` right away.
    pub async fn generate_keypair_async(&self, bit_length: u64) -> Result<KeyPair> {
        self.validate_bit_length(bit_length)?;

        let timeout = self.config.timeout;
        let cancel = CancelToken::with_timeout(timeout);
        let search_cancel = cancel.clone();
        let generator = self.clone();

        let task = tokio::task::spawn_blocking(move || {
            generator.generate_keypair(bit_length, &mut OsRng, &search_cancel)
        });

        match tokio::time::timeout(timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(RsaError::GenerationFailed(join_error.to_string())),
            Err(_) => {
                cancel.cancel();
                warn!("{}-bit key pair generation timed out after {:?}", bit_length, timeout);
                Err(RsaError::GenerationTimedOut(timeout))
            }
        }
    }
}

/// Generates a key pair with default settings from the OS random source.
pub fn generate_key_pair(bit_length: u64) -> Result<KeyPair> {
    KeyPairGenerator::default().generate_keypair(bit_length, &mut OsRng, &CancelToken::new())
}

/// Async generation with default settings, giving up after `timeout`.
pub async fn generate_key_pair_with_timeout(bit_length: u64, timeout: Duration) -> Result<KeyPair> {
    KeyPairGenerator::new(KeyGenConfig::default().with_timeout(timeout))
        .generate_keypair_async(bit_length)
        .await
}
