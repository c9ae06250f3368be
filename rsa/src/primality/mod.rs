pub(crate) mod miller_rabin;
pub use miller_rabin::MillerRabinTest;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Odd primes below 256, used to settle small inputs and to discard most
/// composites before any modular exponentiation.
const SMALL_PRIMES: [u32; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Interface for a probabilistic primality test.
/// Uses the template method: a fixed public API, one iteration is overridden.
pub trait PrimalityTest {
    /// Returns true if `n` is probably prime, with the probability of a
    /// composite slipping through bounded by 2^-certainty.
    fn is_probably_prime(&self, n: &BigUint, certainty: u32) -> bool {
        if let Some(decided) = screen_small_factors(n) {
            return decided;
        }
        let iterations = certainty_to_iterations(certainty, self.error_bits_per_iteration());
        for _ in 0..iterations {
            if !self.run_iteration(n) {
                return false;
            }
        }
        true
    }

    /// Bits of certainty gained by one passing iteration.
    fn error_bits_per_iteration(&self) -> u32 {
        1
    }

    /// A single iteration of the test, called only for odd n > 256.
    fn run_iteration(&self, n: &BigUint) -> bool;
}

/// Settles `n` by trial division when that is conclusive.
fn screen_small_factors(n: &BigUint) -> Option<bool> {
    if let Some(small) = n.to_u32() {
        if small < 2 {
            return Some(false);
        }
        if small == 2 {
            return Some(true);
        }
        if small <= 256 {
            let odd = small % 2 == 1;
            return Some(odd && SMALL_PRIMES.iter().all(|p| small == *p || small % p != 0));
        }
    }
    if !n.bit(0) {
        return Some(false);
    }
    if SMALL_PRIMES.iter().any(|p| (n % *p).is_zero()) {
        return Some(false);
    }
    None
}

fn certainty_to_iterations(certainty: u32, bits_per_iteration: u32) -> u32 {
    // error per iteration is at most 2^-bits_per_iteration,
    // so k iterations give 2^-(k * bits_per_iteration)
    let bits = bits_per_iteration.max(1);
    certainty.div_ceil(bits).max(1)
}
