//! End-to-end benchmark runs against an in-memory device.

use present80_harness::output::json;
use present80_harness::{
    BenchConfig, BenchmarkEngine, BenchmarkResult, CipherClient, InMemoryBus, BLOCK_SIZE, KEY_SIZE,
};

fn rotate_cipher(key: &[u8; KEY_SIZE], block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = *block;
    for (i, b) in out.iter_mut().enumerate() {
        *b = b.wrapping_mul(2).wrapping_add(key[i]);
    }
    out
}

fn engine(keys: usize, plaintexts: usize) -> BenchmarkEngine<InMemoryBus> {
    BenchmarkEngine::new(
        CipherClient::new(InMemoryBus::new(rotate_cipher)),
        BenchConfig::new().total_keys(keys).total_plaintexts(plaintexts),
    )
}

#[test]
fn run_reports_the_full_cross_product() {
    let result = engine(8, 16).run().unwrap();

    assert_eq!(result.total_key, 8);
    assert_eq!(result.total_plaintext, 16);
    assert_eq!(result.total_encryption, 128);
}

#[test]
fn unit_conversions_agree_across_the_result() {
    let result = engine(4, 8).run().unwrap();

    let avg = result.avg_encryption_time;
    assert!((avg.us * 1e3 - avg.ns).abs() < 1e-6);
    assert!((avg.ms * 1e6 - avg.ns).abs() < 1e-3);
    assert!((avg.s * 1e9 - avg.ns).abs() < 1.0);

    let total = result.total_time;
    assert!((total.s * 1e9 - total.ns).abs() < 1.0);
}

#[test]
fn fresh_corpora_keep_the_operation_count_stable() {
    let e = engine(6, 9);
    assert_eq!(e.run().unwrap().total_encryption, 54);
    assert_eq!(e.run().unwrap().total_encryption, 54);
}

#[test]
fn json_mode_payload_round_trips() {
    let result = engine(3, 5).run().unwrap();

    let payload = json::to_json(&result).unwrap();
    assert!(!payload.contains('\n'));

    let parsed: BenchmarkResult = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed.total_encryption, 15);
    assert_eq!(parsed.avg_encryption_time.ns, result.avg_encryption_time.ns);
}
