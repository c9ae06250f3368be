//! Artifact storage: key pairs, encrypted and decrypted files as UTF-8 text
//! under one base directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};
use textbook_rsa::{KeyPair, PrivateKey, PublicKey};

use crate::error::{CliError, Result};

const FILE_EXTENSION: &str = "txt";
pub const PUBLIC_MARKER: &str = "Public";
pub const PRIVATE_MARKER: &str = "Private";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folder {
    KeyPair,
    Encrypted,
    Decrypted,
}

impl Folder {
    pub fn dir_name(self) -> &'static str {
        match self {
            Folder::KeyPair => "KeyPair",
            Folder::Encrypted => "Encrypted",
            Folder::Decrypted => "Decrypted",
        }
    }
}

/// A key read back from the key pair folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredKey {
    Public(PublicKey),
    Private(PrivateKey),
}

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    base_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_of(&self, folder: Folder, name: &str) -> PathBuf {
        self.base_dir
            .join(folder.dir_name())
            .join(format!("{}.{}", name, FILE_EXTENSION))
    }

    pub fn save_text(&self, folder: Folder, name: &str, text: &str) -> Result<PathBuf> {
        validate_name(name)?;
        let dir = self.base_dir.join(folder.dir_name());
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                error!("Failed to create directory: {}", dir.display());
                CliError::io(&dir, e)
            })?;
            debug!("Created directory: {}", dir.display());
        }

        let path = self.path_of(folder, name);
        fs::write(&path, text.as_bytes()).map_err(|e| CliError::io(&path, e))?;
        debug!("Saved file: {}", path.display());
        Ok(path)
    }

    pub fn read_text(&self, folder: Folder, name: &str) -> Result<String> {
        validate_name(name)?;
        let path = self.path_of(folder, name);
        let text = fs::read_to_string(&path).map_err(|e| CliError::io(&path, e))?;
        debug!("Read file: {}", path.display());
        Ok(text)
    }

    /// File stems in `folder`; a folder that was never written is empty.
    pub fn list(&self, folder: Folder) -> Result<Vec<String>> {
        let dir = self.base_dir.join(folder.dir_name());
        if !dir.exists() {
            debug!("Folder does not exist: {}", dir.display());
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| CliError::io(&dir, e))? {
            let path = entry.map_err(|e| CliError::io(&dir, e))?.path();
            if path.is_file() {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Writes `<name>_Public` and `<name>_Private` as two separate files.
    pub fn save_key_pair(&self, name: &str, pair: &KeyPair) -> Result<(PathBuf, PathBuf)> {
        let public = self.save_text(
            Folder::KeyPair,
            &format!("{}_{}", name, PUBLIC_MARKER),
            &pair.public_key().to_string(),
        )?;
        let private = self.save_text(
            Folder::KeyPair,
            &format!("{}_{}", name, PRIVATE_MARKER),
            &pair.private_key().to_string(),
        )?;
        Ok((public, private))
    }

    /// Reads a key file, telling public from private by the name marker.
    pub fn read_key_file(&self, name: &str) -> Result<StoredKey> {
        let kind = if name.contains(PUBLIC_MARKER) {
            PUBLIC_MARKER
        } else if name.contains(PRIVATE_MARKER) {
            PRIVATE_MARKER
        } else {
            return Err(CliError::UnknownKeyKind(name.to_string()));
        };

        let text = self.read_text(Folder::KeyPair, name)?;
        let key = if kind == PUBLIC_MARKER {
            PublicKey::parse(&text).map(StoredKey::Public)
        } else {
            PrivateKey::parse(&text).map(StoredKey::Private)
        };
        key.ok_or_else(|| CliError::MalformedKey(name.to_string()))
    }

    pub fn save_encrypted(&self, name: &str, ciphertext_hex: &str) -> Result<PathBuf> {
        self.save_text(Folder::Encrypted, &format!("{}_Encrypted", name), ciphertext_hex)
    }

    pub fn save_decrypted(&self, name: &str, text: &str) -> Result<PathBuf> {
        self.save_text(Folder::Decrypted, &format!("{}_Decrypted", name), text)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArgument("name must not be empty".to_string()));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CliError::InvalidArgument(format!(
            "name must not contain path separators: {}",
            name
        )));
    }
    Ok(())
}
