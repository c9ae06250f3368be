//! Text and byte forms of keys, messages and ciphertext.
//!
//! Keys travel as `"<exponent>:<modulus>"` in decimal. Ciphertext travels as
//! lowercase hexadecimal without prefix or padding. Plaintext bytes map to an
//! integer big-endian; leading zero bytes do not survive the round trip.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{Result, RsaError};
use crate::keys::{PrivateKey, PublicKey};

const KEY_SEPARATOR: char = ':';

/// Interprets `bytes` as a big-endian unsigned integer.
pub fn bytes_to_message(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Minimal big-endian bytes of `message`; zero maps to no bytes at all.
pub fn message_to_bytes(message: &BigUint) -> Vec<u8> {
    if message.is_zero() {
        return Vec::new();
    }
    message.to_bytes_be()
}

/// Recovered bytes read as UTF-8, with invalid sequences replaced.
pub fn message_to_text(message: &BigUint) -> String {
    String::from_utf8_lossy(&message_to_bytes(message)).into_owned()
}

pub fn text_to_message(text: &str) -> BigUint {
    bytes_to_message(text.as_bytes())
}

/// Lowercase hex, no prefix, no leading zero nibble.
pub fn ciphertext_to_hex(ciphertext: &BigUint) -> String {
    let encoded = hex::encode(ciphertext.to_bytes_be());
    match encoded.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => encoded,
    }
}

pub fn ciphertext_from_hex(text: &str) -> Result<BigUint> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RsaError::InvalidFormat("empty ciphertext".to_string()));
    }
    // hex::decode wants whole bytes
    let decoded = if text.len() % 2 == 1 {
        hex::decode(format!("0{}", text))
    } else {
        hex::decode(text)
    };
    decoded
        .map(|bytes| BigUint::from_bytes_be(&bytes))
        .map_err(|e| RsaError::InvalidFormat(format!("ciphertext is not hexadecimal: {}", e)))
}

fn parse_decimal(field: &str) -> Result<BigUint> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RsaError::InvalidFormat(format!(
            "'{}' is not a decimal integer",
            field
        )));
    }
    BigUint::parse_bytes(field.as_bytes(), 10)
        .ok_or_else(|| RsaError::InvalidFormat(format!("'{}' is not a decimal integer", field)))
}

fn split_key_text(text: &str) -> Result<(BigUint, BigUint)> {
    let fields: Vec<&str> = text.trim().split(KEY_SEPARATOR).collect();
    match fields.as_slice() {
        [exponent, modulus] => Ok((parse_decimal(exponent)?, parse_decimal(modulus)?)),
        _ => Err(RsaError::InvalidFormat(format!(
            "expected 2 fields separated by '{}', found {}",
            KEY_SEPARATOR,
            fields.len()
        ))),
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.e, KEY_SEPARATOR, self.n)
    }
}

impl FromStr for PublicKey {
    type Err = RsaError;

    fn from_str(s: &str) -> Result<Self> {
        let (e, n) = split_key_text(s)?;
        Ok(PublicKey::new(e, n))
    }
}

impl PublicKey {
    /// Parses `"e:n"`, giving `None` for anything malformed.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// Modulus size in whole bytes, for display.
    pub fn size(&self) -> u64 {
        self.n.bits() / 8
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.d, KEY_SEPARATOR, self.n)
    }
}

impl FromStr for PrivateKey {
    type Err = RsaError;

    fn from_str(s: &str) -> Result<Self> {
        let (d, n) = split_key_text(s)?;
        Ok(PrivateKey::new(d, n))
    }
}

impl PrivateKey {
    /// Parses `"d:n"`, giving `None` for anything malformed.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// Modulus size in whole bytes, for display.
    pub fn size(&self) -> u64 {
        self.n.bits() / 8
    }
}
