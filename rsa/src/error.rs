//! Error types for the RSA library

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RsaError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsaError {
    #[error("Invalid key size: {bits} bits ({reason})")]
    InvalidKeySize { bits: u64, reason: &'static str },

    #[error("Message must be smaller than the modulus (n)")]
    MessageTooLarge,

    #[error("Ciphertext must be smaller than the modulus (n)")]
    CiphertextTooLarge,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Key pair generation timed out after {0:?}")]
    GenerationTimedOut(Duration),

    #[error("Key pair generation was cancelled")]
    GenerationCancelled,

    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Key pair generation failed: {0}")]
    GenerationFailed(String),
}

impl From<rand::Error> for RsaError {
    fn from(e: rand::Error) -> Self {
        RsaError::RandomnessUnavailable(e.to_string())
    }
}
