use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use quickcheck::quickcheck;
use textbook_rsa::codec::{bytes_to_message, message_to_bytes, message_to_text};
use textbook_rsa::{
    decrypt, decrypt_hex, encrypt, encrypt_bytes, generate_key_pair, PrivateKey, PublicKey,
    RsaError,
};

// p = 11, q = 13: n = 143, phi = 120, e = 7, d = 103
fn tiny_keys() -> (PublicKey, PrivateKey) {
    let n = BigUint::from(143u32);
    (
        PublicKey::new(BigUint::from(7u32), n.clone()),
        PrivateKey::new(BigUint::from(103u32), n),
    )
}

#[test]
fn test_hello_round_trip_512() {
    let pair = generate_key_pair(512).unwrap();
    let message = bytes_to_message(b"hello");

    let encrypted = encrypt(&message, pair.public_key()).unwrap();
    let decrypted = decrypt(&encrypted, pair.private_key()).unwrap();

    assert_eq!(message_to_text(&decrypted), "hello");
}

#[test]
fn test_hello_through_hex_text() {
    let pair = generate_key_pair(512).unwrap();
    let hex = encrypt_bytes(b"hello", pair.public_key()).unwrap();
    assert_eq!(decrypt_hex(&hex, pair.private_key()).unwrap(), b"hello".to_vec());
}

#[test]
fn test_boundary_on_small_modulus() {
    let (public, private) = tiny_keys();
    let n = public.modulus().clone();

    let below = &n - 1u32;
    let c = encrypt(&below, &public).unwrap();
    assert_eq!(decrypt(&c, &private).unwrap(), below);

    assert_eq!(encrypt(&n, &public), Err(RsaError::MessageTooLarge));
    assert_eq!(encrypt(&(&n + 1u32), &public), Err(RsaError::MessageTooLarge));
}

#[test]
fn test_boundary_on_generated_modulus() {
    let pair = generate_key_pair(128).unwrap();
    let n = pair.public_key().modulus().clone();

    let below = &n - 1u32;
    let c = pair.public_key().encrypt(&below).unwrap();
    assert_eq!(pair.private_key().decrypt(&c).unwrap(), below);
    assert_eq!(pair.public_key().encrypt(&n), Err(RsaError::MessageTooLarge));
    assert_eq!(pair.private_key().decrypt(&n), Err(RsaError::CiphertextTooLarge));
}

#[test]
fn test_encrypt_zero_and_one() {
    let (public, private) = tiny_keys();
    let zero = BigUint::zero();
    let one = BigUint::one();

    assert_eq!(decrypt(&encrypt(&zero, &public).unwrap(), &private).unwrap(), zero);
    assert_eq!(decrypt(&encrypt(&one, &public).unwrap(), &private).unwrap(), one);
}

#[test]
fn test_encrypt_decrypt_random_messages() {
    let pair = generate_key_pair(256).unwrap();
    let n = pair.public_key().modulus();
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let m = rng.gen_biguint_range(&BigUint::from(2u32), n);
        let c = encrypt(&m, pair.public_key()).unwrap();
        assert!(&c < n);
        assert_eq!(decrypt(&c, pair.private_key()).unwrap(), m);
    }
}

#[test]
fn test_encrypt_deterministic() {
    let pair = generate_key_pair(256).unwrap();
    let m = BigUint::from(123u32);

    let c1 = encrypt(&m, pair.public_key()).unwrap();
    let c2 = encrypt(&m, pair.public_key()).unwrap();
    assert_eq!(c1, c2, "textbook RSA without padding is deterministic");
}

#[test]
fn test_leading_zero_bytes_are_lost() {
    let pair = generate_key_pair(256).unwrap();
    let content = [0u8, 0, b'h', b'i'];

    let hex = encrypt_bytes(&content, pair.public_key()).unwrap();
    let recovered = decrypt_hex(&hex, pair.private_key()).unwrap();

    assert_eq!(recovered, b"hi".to_vec());
    assert_ne!(recovered, content.to_vec());
}

#[test]
fn test_content_larger_than_modulus_is_not_chunked() {
    let pair = generate_key_pair(64).unwrap();
    let content = vec![0xabu8; 16];
    assert_eq!(encrypt_bytes(&content, pair.public_key()), Err(RsaError::MessageTooLarge));
}

#[test]
fn test_malformed_ciphertext_text() {
    let pair = generate_key_pair(64).unwrap();
    assert!(matches!(
        decrypt_hex("12g4", pair.private_key()),
        Err(RsaError::InvalidFormat(_))
    ));
}

#[test]
fn test_wrong_key_does_not_recover_message() {
    let a = generate_key_pair(256).unwrap();
    let b = generate_key_pair(256).unwrap();
    let m = bytes_to_message(b"secret");

    let c = encrypt(&m, a.public_key()).unwrap();
    match decrypt(&c, b.private_key()) {
        Ok(other) => assert_ne!(other, m),
        Err(e) => assert_eq!(e, RsaError::CiphertextTooLarge),
    }
}

quickcheck! {
    fn prop_bytes_round_trip(content: Vec<u8>) -> bool {
        let (public, private) = tiny_keys();
        let m = bytes_to_message(&content);
        if m.is_zero() || m >= *public.modulus() {
            return true;
        }
        let c = encrypt(&m, &public).unwrap();
        message_to_bytes(&decrypt(&c, &private).unwrap()) == message_to_bytes(&m)
    }
}
