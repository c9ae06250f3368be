//! Command line front end for `textbook_rsa`: generates key pairs, encrypts
//! and decrypts files, and keeps the results as text files under one base
//! directory.

pub mod commands;
pub mod error;
pub mod storage;

pub use error::{CliError, Result};
pub use storage::{ArtifactStore, Folder, StoredKey};
