//! RSA key value types

use num_bigint::BigUint;

/// RSA public key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    pub(crate) e: BigUint, // Public exponent
    pub(crate) n: BigUint, // Modulus
}

impl PublicKey {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        PublicKey { e, n }
    }

    /// Get the public exponent
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Get the modulus
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn bit_size(&self) -> u64 {
        self.n.bits()
    }
}

/// RSA private key
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrivateKey {
    pub(crate) d: BigUint, // Private exponent
    pub(crate) n: BigUint, // Modulus (same as public)
}

impl PrivateKey {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        PrivateKey { d, n }
    }

    /// Get the private exponent
    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    /// Get the modulus
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn bit_size(&self) -> u64 {
        self.n.bits()
    }
}

/// Public and private halves sharing one modulus.
///
/// Only key generation builds pairs, so the shared `n` always comes from the
/// same product of primes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub(crate) public_key: PublicKey,
    pub(crate) private_key: PrivateKey,
}

impl KeyPair {
    pub(crate) fn from_parts(e: BigUint, d: BigUint, n: BigUint) -> Self {
        KeyPair {
            public_key: PublicKey { e, n: n.clone() },
            private_key: PrivateKey { d, n },
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public_key, self.private_key)
    }
}
