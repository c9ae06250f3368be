use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::thread_rng;

/// Miller–Rabin test; each passing round cuts the error bound by a factor of 4.
pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn error_bits_per_iteration(&self) -> u32 {
        2
    }

    fn run_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u8);

        if *n <= BigUint::from(3u8) {
            return *n == two || *n == BigUint::from(3u8);
        }
        if !n.bit(0) {
            return false;
        }

        let upper = n - &one;

        // n - 1 = 2^s * d, d odd
        let s = upper.trailing_zeros().unwrap_or(0);
        let d = &upper >> s;

        // witness a in [2, n-2]
        let mut rng = thread_rng();
        let a = rng.gen_biguint_range(&two, &upper);
        let mut x = a.modpow(&d, n);

        if x == one || x == upper {
            return true;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);

            if x == upper {
                return true;
            }

            if x == one {
                return false;
            }
        }

        false
    }
}
