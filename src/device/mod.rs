//! Register-device boundary.
//!
//! The cipher lives behind two file-like register endpoints: a key
//! endpoint accepting exactly [`KEY_SIZE`] bytes at offset 0, and an
//! encrypt endpoint accepting exactly [`BLOCK_SIZE`] bytes at offset 0
//! and yielding [`BLOCK_SIZE`] bytes when read back at the same offset
//! immediately after a write. The harness never looks past this
//! boundary; the cipher itself is an opaque black box.

mod client;
mod endpoint;

pub use client::{CipherClient, CipherSession};
pub use endpoint::{
    CipherFn, FileEndpoint, InMemoryBus, InMemoryEndpoint, MiscDeviceBus, RegisterBus,
    RegisterEndpoint,
};

/// Key register width in bytes.
pub const KEY_SIZE: usize = 10;

/// Cipher block width in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Default path of the key register device.
pub const KEY_DEVICE_PATH: &str = "/dev/present80_key";

/// Default path of the encrypt register device.
pub const ENCRYPT_DEVICE_PATH: &str = "/dev/present80_encrypt";
