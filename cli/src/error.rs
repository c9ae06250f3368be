//! Error types for the command line front end

use std::io;
use std::path::PathBuf;

use textbook_rsa::RsaError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Rsa(#[from] RsaError),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Key file name must contain 'Public' or 'Private': {0}")]
    UnknownKeyKind(String),

    #[error("Key file {0} is not in '<exponent>:<modulus>' form")]
    MalformedKey(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            CliError::NotFound(path)
        } else {
            CliError::Io { path, source }
        }
    }
}
