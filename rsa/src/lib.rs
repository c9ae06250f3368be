//! # Textbook RSA
//!
//! Key pair generation, encryption and decryption over arbitrary-precision
//! integers, plus the text forms used to store keys and ciphertext.
//!
//! Encryption is raw modular exponentiation: no padding, no randomisation and
//! no splitting of long messages. A message must be smaller than the modulus.
//!
//! ## Example
//!
//! ```rust
//! use textbook_rsa::{codec, generate_key_pair};
//!
//! let pair = generate_key_pair(512).unwrap();
//! let hex = textbook_rsa::encrypt_bytes(b"hello", pair.public_key()).unwrap();
//! let plain = textbook_rsa::decrypt_hex(&hex, pair.private_key()).unwrap();
//! assert_eq!(plain, b"hello");
//!
//! let text = pair.public_key().to_string();
//! assert_eq!(textbook_rsa::PublicKey::parse(&text).as_ref(), Some(pair.public_key()));
//! # let _ = codec::ciphertext_from_hex(&hex).unwrap();
//! ```

pub mod cancel;
pub mod codec;
pub mod config;
pub mod error;
pub mod keys;
pub mod number_theory;
pub mod primality;
pub mod rsa;
pub mod sizing;

pub use cancel::CancelToken;
pub use config::KeyGenConfig;
pub use error::{Result, RsaError};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use rsa::{
    decrypt, decrypt_hex, encrypt, encrypt_bytes, generate_key_pair,
    generate_key_pair_with_timeout, KeyPairGenerator, PrimeGenerator,
};
