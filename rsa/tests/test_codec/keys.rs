use num_bigint::BigUint;
use quickcheck::quickcheck;
use textbook_rsa::{generate_key_pair, PrivateKey, PublicKey, RsaError};

#[test]
fn test_parse_public_key() {
    let key = PublicKey::parse("65537:119").unwrap();
    assert_eq!(key.exponent(), &BigUint::from(65537u32));
    assert_eq!(key.modulus(), &BigUint::from(119u32));
}

#[test]
fn test_missing_field_is_absent() {
    assert!(PublicKey::parse("65537").is_none());
    assert!(PrivateKey::parse("65537").is_none());
}

#[test]
fn test_garbage_is_absent() {
    assert!(PublicKey::parse("garbage").is_none());
    assert!(PublicKey::parse("a:b").is_none());
    assert!(PrivateKey::parse("12:3x").is_none());
}

#[test]
fn test_from_str_reports_invalid_format() {
    let result: Result<PublicKey, RsaError> = "65537".parse();
    assert!(matches!(result, Err(RsaError::InvalidFormat(_))));
}

#[test]
fn test_text_form_is_exponent_colon_modulus() {
    let public = PublicKey::new(BigUint::from(65537u32), BigUint::from(119u32));
    let private = PrivateKey::new(BigUint::from(77u32), BigUint::from(119u32));
    assert_eq!(public.to_string(), "65537:119");
    assert_eq!(private.to_string(), "77:119");
}

#[test]
fn test_generated_keys_round_trip() {
    let pair = generate_key_pair(512).unwrap();
    let public_text = pair.public_key().to_string();
    let private_text = pair.private_key().to_string();

    assert_eq!(PublicKey::parse(&public_text).as_ref(), Some(pair.public_key()));
    assert_eq!(PrivateKey::parse(&private_text).as_ref(), Some(pair.private_key()));
    assert!(!public_text.ends_with('\n'));
}

#[test]
fn test_size_in_bytes() {
    let pair = generate_key_pair(512).unwrap();
    let bits = pair.public_key().modulus().bits();
    assert_eq!(pair.public_key().size(), bits / 8);
    assert_eq!(pair.private_key().size(), pair.public_key().size());
}

quickcheck! {
    fn prop_public_key_text_round_trip(e: u64, n: u64) -> bool {
        let key = PublicKey::new(BigUint::from(e), BigUint::from(n));
        PublicKey::parse(&key.to_string()) == Some(key)
    }

    fn prop_parse_never_panics(text: String) -> bool {
        let _ = PublicKey::parse(&text);
        let _ = PrivateKey::parse(&text);
        true
    }
}
