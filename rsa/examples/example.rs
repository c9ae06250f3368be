use std::time::Duration;

use textbook_rsa::codec::{bytes_to_message, ciphertext_to_hex, message_to_text};
use textbook_rsa::sizing::dynamic_key_bits;
use textbook_rsa::{decrypt, encrypt, generate_key_pair_with_timeout, PublicKey, RsaError};

#[tokio::main]
async fn main() -> Result<(), RsaError> {
    env_logger::init();

    let content = b"hello";

    // 1) Key size tailored to the content, generated under a 15 s limit
    let bits = dynamic_key_bits(content.len() as u64)?;
    let pair = generate_key_pair_with_timeout(bits, Duration::from_secs(15)).await?;
    println!("Generated a {}-byte key pair", pair.public_key().size());

    // 2) Key text form, as stored in key files
    let public_text = pair.public_key().to_string();
    let public = PublicKey::parse(&public_text)
        .ok_or_else(|| RsaError::InvalidFormat(public_text.clone()))?;
    println!("Public key: {}...", &public_text[..public_text.len().min(40)]);

    // 3) Encrypt -> hex -> decrypt
    let c = encrypt(&bytes_to_message(content), &public)?;
    println!("Ciphertext: {}", ciphertext_to_hex(&c));
    let m = decrypt(&c, pair.private_key())?;
    println!("Decrypted: {}", message_to_text(&m));

    // 4) Oversized messages are refused, not split
    let too_big = public.modulus() + 1u32;
    match encrypt(&too_big, &public) {
        Err(e) => println!("Refused as expected: {}", e),
        Ok(_) => println!("unexpected success"),
    }

    Ok(())
}
