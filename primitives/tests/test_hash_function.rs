use primitives::hash_function::{
    Blake2bHasher, HashAlgorithm, HashFunction, Sha256Hasher, UnsupportedAlgorithmError,
    Xxh3Hasher,
};

#[test]
fn test_known_digests() {
    assert_eq!(
        hex::encode(Sha256Hasher.digest(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex::encode(Blake2bHasher.digest(b"abc")),
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
         7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
    );
}

#[test]
fn test_hexdigest() {
    assert_eq!(
        Sha256Hasher.hexdigest(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    for algorithm in HashAlgorithm::ALL {
        let hasher = algorithm.hasher();
        assert_eq!(hasher.hexdigest(b"x"), hex::encode(hasher.digest(b"x")));
    }
}

#[test]
fn test_output_lengths() {
    assert_eq!(Sha256Hasher.digest(b"").len(), 32);
    assert_eq!(Blake2bHasher.digest(b"").len(), 64);
    assert_eq!(Xxh3Hasher.digest(b"").len(), 16);
}

#[test]
fn test_deterministic() {
    for algorithm in HashAlgorithm::ALL {
        let hasher = algorithm.hasher();
        assert_eq!(hasher.digest(b"payload"), hasher.digest(b"payload"));
        assert_ne!(hasher.digest(b"payload"), hasher.digest(b"payloae"));
    }
}

#[test]
fn test_parse_algorithm() {
    assert_eq!("sha256".parse(), Ok(HashAlgorithm::Sha256));
    assert_eq!("SHA-256".parse(), Ok(HashAlgorithm::Sha256));
    assert_eq!("blake2b".parse(), Ok(HashAlgorithm::Blake2b));
    assert_eq!(" BLAKE2 ".parse(), Ok(HashAlgorithm::Blake2b));
    assert_eq!("xxh3".parse(), Ok(HashAlgorithm::Xxh3));
    assert_eq!(
        "md5".parse::<HashAlgorithm>(),
        Err(UnsupportedAlgorithmError("md5".to_owned()))
    );
}

#[test]
fn test_names_match_display() {
    for algorithm in HashAlgorithm::ALL {
        assert_eq!(algorithm.hasher().name(), algorithm.to_string());
        assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
    }
    assert!(HashAlgorithm::Sha256.is_cryptographic());
    assert!(!HashAlgorithm::Xxh3.is_cryptographic());
}
