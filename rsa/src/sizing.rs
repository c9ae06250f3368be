//! Key size policy used by callers before asking for a key pair.
//!
//! This is caller policy, not part of the cryptographic contract: the margin
//! added to the file size is a fixed allowance and is not derived from
//! anything.

use crate::error::{Result, RsaError};

/// Smallest modulus the dynamic rule hands out.
pub const DYNAMIC_FLOOR_BITS: u64 = 2048;
/// Extra bits on top of the content size.
pub const DYNAMIC_MARGIN_BITS: u64 = 24;
/// Largest content, and largest key entered in bytes, in bits.
pub const MAX_CONTENT_BITS: u64 = 1024 * 8;
pub const MAX_KEY_BYTES: u64 = MAX_CONTENT_BITS / 8;
pub const DEFAULT_KEY_BYTES: u64 = 256;

/// Modulus size for a key requested in bytes.
pub fn static_key_bits(key_bytes: u64) -> Result<u64> {
    if key_bytes > MAX_KEY_BYTES {
        return Err(RsaError::InvalidKeySize {
            bits: key_bytes.saturating_mul(8),
            reason: "exceeds the maximum accepted size",
        });
    }
    Ok(key_bytes * 8)
}

/// Modulus size tailored to content of `content_bytes` bytes.
pub fn dynamic_key_bits(content_bytes: u64) -> Result<u64> {
    let content_bits = content_bytes.saturating_mul(8);
    if content_bits < DYNAMIC_FLOOR_BITS {
        Ok(DYNAMIC_FLOOR_BITS)
    } else if content_bits > MAX_CONTENT_BITS {
        Err(RsaError::InvalidKeySize {
            bits: content_bits,
            reason: "content is too large for a single key",
        })
    } else {
        Ok(content_bits + DYNAMIC_MARGIN_BITS)
    }
}
