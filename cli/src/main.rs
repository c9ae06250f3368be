use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use dencryptor::commands::{self, KeySize};
use dencryptor::{ArtifactStore, Folder, Result};

#[derive(Parser, Debug)]
#[command(name = "dencryptor", version, about = "Textbook RSA file encryptor")]
struct Cli {
    /// Directory holding the KeyPair, Encrypted and Decrypted folders
    #[arg(long, default_value = "Dencryptor", env = "DENCRYPTOR_HOME")]
    base_dir: PathBuf,

    /// Key generation time limit in seconds
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a key pair and save both halves
    Keygen {
        #[arg(long)]
        name: String,
        /// Key size in bytes
        #[arg(long, conflicts_with = "fit")]
        bytes: Option<u64>,
        /// Size the key to hold this file
        #[arg(long)]
        fit: Option<PathBuf>,
    },
    /// Encrypt a file with a stored public key
    Encrypt {
        #[arg(long)]
        key: String,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Decrypt a hex ciphertext file with a stored private key
    Decrypt {
        #[arg(long)]
        key: String,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// List stored artifacts
    List {
        #[arg(value_enum)]
        folder: FolderArg,
    },
    /// Show the size of a stored key
    Info {
        #[arg(long)]
        key: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FolderArg {
    Keys,
    Encrypted,
    Decrypted,
}

impl From<FolderArg> for Folder {
    fn from(arg: FolderArg) -> Self {
        match arg {
            FolderArg::Keys => Folder::KeyPair,
            FolderArg::Encrypted => Folder::Encrypted,
            FolderArg::Decrypted => Folder::Decrypted,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = ArtifactStore::new(cli.base_dir);
    log::debug!("Using base directory {}", store.base_dir().display());

    match cli.command {
        Command::Keygen { name, bytes, fit } => {
            let size = match (bytes, fit) {
                (_, Some(path)) => KeySize::FitFile(path),
                (Some(bytes), None) => KeySize::Bytes(bytes),
                (None, None) => KeySize::default(),
            };
            let timeout = Duration::from_secs(cli.timeout_secs);
            let (public, private) = commands::keygen(&store, &name, &size, timeout).await?;
            println!("{}", public.display());
            println!("{}", private.display());
        }
        Command::Encrypt { key, input, name } => {
            let path = commands::encrypt(&store, &key, &input, name.as_deref())?;
            println!("{}", path.display());
        }
        Command::Decrypt { key, input, name } => {
            let path = commands::decrypt(&store, &key, &input, name.as_deref())?;
            println!("{}", path.display());
        }
        Command::List { folder } => {
            for name in commands::list(&store, folder.into())? {
                println!("{}", name);
            }
        }
        Command::Info { key } => {
            let info = commands::info(&store, &key)?;
            println!("{} key, {} bytes ({} bits)", info.kind, info.size_bytes, info.bits);
        }
    }
    Ok(())
}
