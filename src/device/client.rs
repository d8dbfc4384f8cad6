//! Protocol client for the key-set and encrypt operations.
//!
//! The key persists in the device across subsequent encryptions; that
//! state is global to the endpoint, not scoped to a caller. The client
//! therefore holds explicit handles; concurrent callers sharing one
//! device must serialize on their side.

use crate::device::{RegisterBus, RegisterEndpoint, BLOCK_SIZE, KEY_SIZE};
use crate::error::HarnessError;

/// Client over a register bus.
///
/// One-shot operations open and close the endpoint around a single
/// command; [`CipherClient::session`] keeps both endpoints open for
/// the timing-critical path.
#[derive(Debug, Clone)]
pub struct CipherClient<B: RegisterBus> {
    bus: B,
}

impl<B: RegisterBus> CipherClient<B> {
    /// Client over the given bus.
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Set the cipher key: open the key endpoint, write the 10 bytes
    /// at offset 0, close the endpoint.
    ///
    /// Fails with [`HarnessError::InvalidKeyLength`] before any device
    /// I/O if `key` is not exactly [`KEY_SIZE`] bytes.
    pub fn set_key(&self, key: &[u8]) -> Result<(), HarnessError> {
        validate_key(key)?;
        let mut endpoint = self.bus.open_key()?;
        endpoint.write_at(key, 0)
    }

    /// Encrypt one block: open the encrypt endpoint, write the 8-byte
    /// plaintext at offset 0, read back exactly 8 bytes from offset 0,
    /// close the endpoint.
    ///
    /// Fails with [`HarnessError::InvalidBlockLength`] before any
    /// device I/O if `plaintext` is not exactly [`BLOCK_SIZE`] bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<[u8; BLOCK_SIZE], HarnessError> {
        validate_block(plaintext)?;
        let mut endpoint = self.bus.open_encrypt()?;
        write_then_read(&mut endpoint, plaintext)
    }

    /// Open both endpoints and keep them open across many operations.
    pub fn session(&self) -> Result<CipherSession<B::Endpoint>, HarnessError> {
        Ok(CipherSession {
            key: self.bus.open_key()?,
            encrypt: self.bus.open_encrypt()?,
        })
    }
}

/// Both register endpoints held open for repeated use.
///
/// Dropping the session closes both endpoints.
pub struct CipherSession<E: RegisterEndpoint> {
    key: E,
    encrypt: E,
}

impl<E: RegisterEndpoint> CipherSession<E> {
    /// Set the cipher key on the held key endpoint.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), HarnessError> {
        validate_key(key)?;
        self.key.write_at(key, 0)
    }

    /// Encrypt one block on the held encrypt endpoint.
    ///
    /// The read happens strictly after the write completes; the device
    /// holds at most one pending result.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<[u8; BLOCK_SIZE], HarnessError> {
        validate_block(plaintext)?;
        write_then_read(&mut self.encrypt, plaintext)
    }
}

fn validate_key(key: &[u8]) -> Result<(), HarnessError> {
    if key.len() != KEY_SIZE {
        return Err(HarnessError::InvalidKeyLength { len: key.len() });
    }
    Ok(())
}

fn validate_block(block: &[u8]) -> Result<(), HarnessError> {
    if block.len() != BLOCK_SIZE {
        return Err(HarnessError::InvalidBlockLength { len: block.len() });
    }
    Ok(())
}

fn write_then_read<E: RegisterEndpoint>(
    endpoint: &mut E,
    plaintext: &[u8],
) -> Result<[u8; BLOCK_SIZE], HarnessError> {
    endpoint.write_at(plaintext, 0)?;

    let mut ciphertext = [0u8; BLOCK_SIZE];
    endpoint.read_at(&mut ciphertext, 0)?;
    Ok(ciphertext)
}
