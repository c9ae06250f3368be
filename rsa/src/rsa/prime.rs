use log::trace;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::cancel::CancelToken;
use crate::config::DEFAULT_CERTAINTY;
use crate::error::{Result, RsaError};
use crate::primality::{MillerRabinTest, PrimalityTest};

/// Draws probable primes of an exact bit length.
pub struct PrimeGenerator<T: PrimalityTest = MillerRabinTest> {
    test: T,
    certainty: u32,
}

impl Default for PrimeGenerator<MillerRabinTest> {
    fn default() -> Self {
        Self::new(MillerRabinTest, DEFAULT_CERTAINTY)
    }
}

impl<T: PrimalityTest> PrimeGenerator<T> {
    pub fn new(test: T, certainty: u32) -> Self {
        Self { test, certainty }
    }

    pub fn certainty(&self) -> u32 {
        self.certainty
    }

    /// Acceptance predicate for generated primes: one primality test at the
    /// configured certainty, nothing stronger.
    pub fn is_strong_prime(&self, candidate: &BigUint) -> bool {
        self.test.is_probably_prime(candidate, self.certainty)
    }

    /// Returns a probable prime with exactly `bit_length` bits.
    ///
    /// The token is checked before every candidate draw, so a cancelled or
    /// expired search returns after at most one more primality test.
    pub fn generate_strong_prime<R>(
        &self,
        bit_length: u64,
        rng: &mut R,
        cancel: &CancelToken,
    ) -> Result<BigUint>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if bit_length < 2 {
            return Err(RsaError::InvalidKeySize {
                bits: bit_length,
                reason: "a prime needs at least 2 bits",
            });
        }

        let mut rejected = 0u64;
        loop {
            cancel.check()?;
            let candidate = random_candidate(bit_length, rng)?;
            if self.is_strong_prime(&candidate) {
                trace!("{}-bit prime found after {} rejected candidates", bit_length, rejected);
                return Ok(candidate);
            }
            rejected += 1;
        }
    }
}

/// Uniform odd integer with the top bit set, read from a fallible source.
fn random_candidate<R>(bit_length: u64, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let byte_len = bit_length.div_ceil(8) as usize;
    let mut bytes = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut bytes)?;

    // clear the bits above bit_length in the leading byte
    let excess = (byte_len as u64 * 8 - bit_length) as u32;
    bytes[0] &= 0xffu8 >> excess;

    let mut candidate = BigUint::from_bytes_be(&bytes);
    candidate.set_bit(bit_length - 1, true);
    candidate.set_bit(0, true);
    Ok(candidate)
}
