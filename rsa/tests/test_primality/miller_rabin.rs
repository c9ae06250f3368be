use num_bigint::BigUint;
use num_traits::{FromPrimitive, One};
use quickcheck::quickcheck;
use textbook_rsa::primality::{MillerRabinTest, PrimalityTest};

const CERTAINTY: u32 = 100;

#[test]
fn test_miller_rabin_on_primes() {
    let test = MillerRabinTest;
    let primes = [2u32, 3, 5, 7, 17, 31, 61, 257, 65537, 2147483647];

    for &p in &primes {
        let n = BigUint::from_u32(p).unwrap();
        assert!(test.is_probably_prime(&n, CERTAINTY), "MR failed on prime {}", p);
    }
}

#[test]
fn test_miller_rabin_on_composites() {
    let test = MillerRabinTest;
    let composites = [4u32, 9, 15, 25, 27, 35, 65535, 66049];

    for &n in &composites {
        let n = BigUint::from_u32(n).unwrap();
        assert!(!test.is_probably_prime(&n, CERTAINTY), "MR failed on composite {}", n);
    }
}

#[test]
fn test_miller_rabin_rejects_carmichael() {
    let test = MillerRabinTest;
    let carmichaels = [561u32, 1105, 1729, 2465, 2821, 6601, 41041, 825265];

    for &n in &carmichaels {
        let n = BigUint::from_u32(n).unwrap();
        assert!(!test.is_probably_prime(&n, CERTAINTY), "MR accepted Carmichael number {}", n);
    }
}

#[test]
fn test_miller_rabin_on_small_n() {
    let test = MillerRabinTest;
    let values = [0u32, 1];

    for &v in &values {
        let n = BigUint::from_u32(v).unwrap();
        assert!(!test.is_probably_prime(&n, CERTAINTY), "MR incorrectly passed n = {}", v);
    }
}

#[test]
fn test_miller_rabin_large_cases() {
    let test = MillerRabinTest;

    let prime = BigUint::parse_bytes(b"32416190071", 10).unwrap();
    let composite = &prime * 11u32;
    // 2^89 - 1 is a Mersenne prime, 2^89 + 1 is divisible by 3
    let m89 = (BigUint::one() << 89u32) - 1u32;

    assert!(test.is_probably_prime(&prime, CERTAINTY), "MR failed on large prime");
    assert!(!test.is_probably_prime(&composite, CERTAINTY), "MR failed on large composite");
    assert!(test.is_probably_prime(&m89, CERTAINTY));
    assert!(!test.is_probably_prime(&(&m89 + 2u32), CERTAINTY));
}

#[test]
fn test_semiprime_of_large_factors() {
    // both factors lie above the trial division table
    let p = BigUint::from_u32(65537).unwrap();
    let q = BigUint::from_u32(2147483647).unwrap();
    assert!(!MillerRabinTest.is_probably_prime(&(&p * &q), CERTAINTY));
}

quickcheck! {
    fn prop_miller_rabin_rejects_odd_composites(a: u16, b: u16) -> bool {
        if a < 3 || b < 3 { return true; }
        let n = (a as u64) * (b as u64);
        if n % 2 == 0 { return true; }
        !MillerRabinTest.is_probably_prime(&BigUint::from(n), CERTAINTY)
    }

    fn prop_miller_rabin_agrees_with_trial_division(n: u32) -> bool {
        let n = n % 100_000;
        let is_prime = n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0);
        MillerRabinTest.is_probably_prime(&BigUint::from(n), CERTAINTY) == is_prime
    }
}
