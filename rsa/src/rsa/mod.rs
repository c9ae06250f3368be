pub mod cipher;
pub mod keygen;
pub mod prime;

pub use cipher::{decrypt, decrypt_hex, encrypt, encrypt_bytes};
pub use keygen::{
    generate_key_pair, generate_key_pair_with_timeout, KeyComponents, KeyPairGenerator,
};
pub use prime::PrimeGenerator;
