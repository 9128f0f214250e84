use std::sync::Arc;

use chain::block::block::{Block, BlockError};
use primitives::hash_function::{Blake2bHasher, HashFunction, Sha256Hasher};

fn sha256() -> Arc<dyn HashFunction> {
    Arc::new(Sha256Hasher)
}

#[test]
fn test_hash_is_computed_on_construction() {
    let block = Block::new(1, "0".to_owned(), 1_000, "payload".to_owned(), sha256()).unwrap();
    assert_eq!(block.hash, block.calculate_hash());
    assert_eq!(block.get_hash().len(), 64);
    assert_eq!(block.calculate_hash(), block.calculate_hash());
}

#[test]
fn test_hash_is_digest_of_concatenated_fields() {
    let block = Block::new(3, "ab".to_owned(), 42, "data".to_owned(), sha256()).unwrap();
    let expected = hex::encode(Sha256Hasher.digest(b"3ab42data"));
    assert_eq!(block.hash, expected);
}

#[test]
fn test_concatenation_is_ambiguous() {
    // Known weakness of the plain concatenation: shifting characters between index and
    // previous hash yields the same hashed message.
    let a = Block::new(1, "23".to_owned(), 7, "x".to_owned(), sha256()).unwrap();
    let b = Block::new(12, "3".to_owned(), 7, "x".to_owned(), sha256()).unwrap();
    assert_eq!(a.hash, b.hash);
}

#[test]
fn test_same_fields_same_hash() {
    let a = Block::new(1, "0".to_owned(), 5, "tx".to_owned(), sha256()).unwrap();
    let b = Block::new(1, "0".to_owned(), 5, "tx".to_owned(), sha256()).unwrap();
    assert_eq!(a.hash, b.hash);
    let c = Block::new(1, "0".to_owned(), 5, "tx".to_owned(), Arc::new(Blake2bHasher)).unwrap();
    assert_ne!(a.hash, c.hash);
    assert_eq!(c.hash.len(), 128);
    assert_eq!(c.hash_function().name(), "BLAKE2");
}

#[test]
fn test_empty_previous_hash_is_rejected() {
    let res = Block::new(1, String::new(), 5, "tx".to_owned(), sha256());
    assert_eq!(res.unwrap_err(), BlockError::EmptyPreviousHash);
}

#[test]
fn test_mutation_changes_recalculated_hash() {
    let mut block = Block::new(1, "0".to_owned(), 5, "tx".to_owned(), sha256()).unwrap();
    block.data = "tampered".to_owned();
    assert_ne!(block.hash, block.calculate_hash());
}

#[test]
fn test_timestamp_utc() {
    let block = Block::new(0, "0".to_owned(), 1_700_000_000_123, String::new(), sha256()).unwrap();
    let utc = block.timestamp_utc().unwrap();
    assert_eq!(utc.timestamp_millis(), 1_700_000_000_123);
}

#[test]
fn test_display_and_serialize() {
    let block = Block::new(2, "ff".to_owned(), 9, "tx".to_owned(), sha256()).unwrap();
    assert!(block.to_string().starts_with("Block(index: 2, previous hash: ff, hash: "));
    let json: serde_json::Value = serde_json::to_value(&block).unwrap();
    assert_eq!(json["index"], 2);
    assert_eq!(json["data"], "tx");
    assert_eq!(json["algorithm"], "SHA256");
    assert_eq!(json["hash"], block.hash.as_str());
}
