//! Corpus generation for benchmark workloads.
//!
//! Keys come from the OS entropy source; plaintexts only need
//! coverage, not unpredictability, so they use the cheaper thread-local
//! generator. Every run draws a fresh corpus, so benchmark numbers are
//! comparable in aggregate, never byte-for-byte.

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::device::{BLOCK_SIZE, KEY_SIZE};

/// Generate `n` independent 10-byte keys from a cryptographically
/// secure source.
pub fn generate_keys(n: usize) -> Vec<[u8; KEY_SIZE]> {
    (0..n)
        .map(|_| {
            let mut key = [0u8; KEY_SIZE];
            OsRng.fill_bytes(&mut key);
            key
        })
        .collect()
}

/// Generate `n` independent 8-byte plaintext blocks.
pub fn generate_plaintexts(n: usize) -> Vec<[u8; BLOCK_SIZE]> {
    let mut rng = rand::thread_rng();

    (0..n)
        .map(|_| {
            let mut block = [0u8; BLOCK_SIZE];
            rng.fill(&mut block[..]);
            block
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_counts() {
        assert_eq!(generate_keys(0).len(), 0);
        assert_eq!(generate_keys(17).len(), 17);
        assert_eq!(generate_plaintexts(33).len(), 33);
    }

    #[test]
    fn keys_are_not_all_identical() {
        // Uniqueness is not guaranteed, but 32 identical 10-byte draws
        // would indicate a broken entropy source.
        let keys = generate_keys(32);
        assert!(keys.iter().any(|k| k != &keys[0]));
    }
}
