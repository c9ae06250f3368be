use num_bigint::BigUint;

use crate::codec::{bytes_to_message, ciphertext_from_hex, ciphertext_to_hex, message_to_bytes};
use crate::error::{Result, RsaError};
use crate::keys::{PrivateKey, PublicKey};

/// Textbook RSA encryption: `message^e mod n`.
///
/// No padding and no chunking; a message that does not fit below `n` is refused.
pub fn encrypt(message: &BigUint, key: &PublicKey) -> Result<BigUint> {
    if message >= &key.n {
        return Err(RsaError::MessageTooLarge);
    }
    Ok(message.modpow(&key.e, &key.n))
}

/// Textbook RSA decryption: `ciphertext^d mod n`.
pub fn decrypt(ciphertext: &BigUint, key: &PrivateKey) -> Result<BigUint> {
    if ciphertext >= &key.n {
        return Err(RsaError::CiphertextTooLarge);
    }
    Ok(ciphertext.modpow(&key.d, &key.n))
}

/// Encrypts raw content (e.g. a file) and returns the ciphertext in hex text form.
pub fn encrypt_bytes(plaintext: &[u8], key: &PublicKey) -> Result<String> {
    let c = encrypt(&bytes_to_message(plaintext), key)?;
    Ok(ciphertext_to_hex(&c))
}

/// Parses hex ciphertext text and returns the recovered plaintext bytes.
pub fn decrypt_hex(ciphertext: &str, key: &PrivateKey) -> Result<Vec<u8>> {
    let c = ciphertext_from_hex(ciphertext)?;
    let m = decrypt(&c, key)?;
    Ok(message_to_bytes(&m))
}

impl PublicKey {
    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint> {
        encrypt(message, self)
    }
}

impl PrivateKey {
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint> {
        decrypt(ciphertext, self)
    }
}
