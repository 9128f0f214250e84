use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chain::chain::Chain;
use chain::shared::SharedChain;
use primitives::hash_function::Blake2bHasher;

/// Several writers append concurrently; the chain must neither fork nor lose blocks.
#[test]
fn test_concurrent_appends() {
    let shared = SharedChain::new(Chain::new(Arc::new(Blake2bHasher)).unwrap());
    let writers = 4;
    let iterations = 25;

    let handles: Vec<_> = (0..writers)
        .map(|w| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..iterations {
                    shared.append(format!("writer {w} entry {i}")).unwrap();
                    assert!(shared.is_chain_valid());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(shared.len(), writers * iterations + 1);
    assert!(!shared.is_empty());
    assert_eq!(shared.validate(), Ok(()));
    let (indices, previous): (HashSet<u64>, HashSet<String>) = shared.with_chain(|chain| {
        chain
            .iter()
            .map(|b| (b.index, b.previous_hash.clone()))
            .unzip()
    });
    assert_eq!(indices.len(), shared.len());
    assert_eq!(previous.len(), shared.len());

    let chain = shared.try_into_inner().unwrap();
    assert_eq!(chain.get_latest_block().index, 100);
}

#[test]
fn test_latest_block_and_handles() {
    let shared: SharedChain = Chain::new(Arc::new(Blake2bHasher)).unwrap().into();
    let block = shared.append("Transaction 1: Alice pays Bob 10 BTC").unwrap();
    assert_eq!(shared.latest_block().hash, block.hash);

    let other = shared.clone();
    let shared = shared.try_into_inner().unwrap_err();
    drop(other);
    assert!(shared.try_into_inner().is_ok());
}
