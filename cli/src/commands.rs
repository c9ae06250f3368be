//! Command handlers. Each one reads its inputs, calls into `textbook_rsa` and
//! persists the result through the [`ArtifactStore`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use textbook_rsa::sizing::{dynamic_key_bits, static_key_bits, DEFAULT_KEY_BYTES};
use textbook_rsa::{decrypt_hex, encrypt_bytes, KeyGenConfig, KeyPairGenerator};

use crate::error::{CliError, Result};
use crate::storage::{ArtifactStore, Folder, StoredKey};

/// How the modulus size of a new key pair is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySize {
    /// Fixed size given in bytes.
    Bytes(u64),
    /// Sized to hold the content of the given file.
    FitFile(PathBuf),
}

impl Default for KeySize {
    fn default() -> Self {
        KeySize::Bytes(DEFAULT_KEY_BYTES)
    }
}

impl KeySize {
    pub fn bit_length(&self) -> Result<u64> {
        match self {
            KeySize::Bytes(bytes) => Ok(static_key_bits(*bytes)?),
            KeySize::FitFile(path) => {
                let len = fs::metadata(path).map_err(|e| CliError::io(path, e))?.len();
                debug!("Sizing key for {} ({} bytes)", path.display(), len);
                Ok(dynamic_key_bits(len)?)
            }
        }
    }
}

/// Summary of a stored key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInfo {
    pub kind: &'static str,
    pub size_bytes: u64,
    pub bits: u64,
}

pub async fn keygen(
    store: &ArtifactStore,
    name: &str,
    size: &KeySize,
    timeout: Duration,
) -> Result<(PathBuf, PathBuf)> {
    let bits = size.bit_length()?;
    info!("Generating a {}-bit key pair '{}'", bits, name);

    let generator = KeyPairGenerator::new(KeyGenConfig::default().with_timeout(timeout));
    let pair = generator.generate_keypair_async(bits).await?;

    let paths = store.save_key_pair(name, &pair)?;
    info!("Key pair '{}' saved", name);
    Ok(paths)
}

pub fn encrypt(
    store: &ArtifactStore,
    key_name: &str,
    input: &Path,
    out_name: Option<&str>,
) -> Result<PathBuf> {
    let public_key = match store.read_key_file(key_name)? {
        StoredKey::Public(key) => key,
        StoredKey::Private(_) => {
            return Err(CliError::InvalidArgument(format!(
                "{} is a private key, encryption needs a public key",
                key_name
            )))
        }
    };

    let content = fs::read(input).map_err(|e| CliError::io(input, e))?;
    debug!("Encrypting {} bytes from {}", content.len(), input.display());
    let ciphertext = encrypt_bytes(&content, &public_key)?;

    let name = output_name(input, out_name)?;
    store.save_encrypted(&name, &ciphertext)
}

pub fn decrypt(
    store: &ArtifactStore,
    key_name: &str,
    input: &Path,
    out_name: Option<&str>,
) -> Result<PathBuf> {
    let private_key = match store.read_key_file(key_name)? {
        StoredKey::Private(key) => key,
        StoredKey::Public(_) => {
            return Err(CliError::InvalidArgument(format!(
                "{} is a public key, decryption needs a private key",
                key_name
            )))
        }
    };

    let hex = fs::read_to_string(input).map_err(|e| CliError::io(input, e))?;
    let plain = decrypt_hex(&hex, &private_key)?;
    let text = String::from_utf8_lossy(&plain);

    let name = output_name(input, out_name)?;
    store.save_decrypted(&name, &text)
}

pub fn list(store: &ArtifactStore, folder: Folder) -> Result<Vec<String>> {
    store.list(folder)
}

pub fn info(store: &ArtifactStore, key_name: &str) -> Result<KeyInfo> {
    Ok(match store.read_key_file(key_name)? {
        StoredKey::Public(key) => KeyInfo {
            kind: "public",
            size_bytes: key.size(),
            bits: key.bit_size(),
        },
        StoredKey::Private(key) => KeyInfo {
            kind: "private",
            size_bytes: key.size(),
            bits: key.bit_size(),
        },
    })
}

fn output_name(input: &Path, explicit: Option<&str>) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CliError::InvalidArgument(format!("cannot derive a name from {}", input.display()))
        })
}
