//! Error taxonomy for the harness.
//!
//! Every failure surfaces as a distinguishable condition so that a
//! comparative run can report partial results instead of aborting
//! wholesale. Nothing here retries automatically.

use std::io;

use crate::device::{BLOCK_SIZE, KEY_SIZE};

/// Errors produced by the harness.
#[derive(Debug)]
pub enum HarnessError {
    /// Caller supplied a key whose length is not [`KEY_SIZE`] bytes.
    ///
    /// Raised before any device I/O happens, so the endpoint state is
    /// untouched.
    InvalidKeyLength {
        /// Actual length of the rejected key.
        len: usize,
    },

    /// Caller supplied a plaintext block whose length is not
    /// [`BLOCK_SIZE`] bytes. Raised before any device I/O happens.
    InvalidBlockLength {
        /// Actual length of the rejected block.
        len: usize,
    },

    /// Open, write, or read failed at the register-device boundary.
    ///
    /// Fatal to the current run; propagated to the caller unchanged.
    EndpointUnavailable(io::Error),

    /// A candidate implementation's build/start action failed.
    ///
    /// Isolates only that candidate from a comparison; other
    /// candidates keep running.
    BuildFailed {
        /// Name of the candidate whose build failed.
        name: String,
        /// Captured stderr or I/O error description.
        detail: String,
    },

    /// An external tool (size dump or benchmark subprocess) produced
    /// output that does not match the expected structure. Fatal to
    /// that single measurement.
    MalformedToolOutput(String),
}

impl HarnessError {
    /// Wrap an I/O error from the device boundary.
    pub fn endpoint(err: io::Error) -> Self {
        HarnessError::EndpointUnavailable(err)
    }
}

impl From<io::Error> for HarnessError {
    /// I/O errors reaching the harness uncontextualized come from the
    /// device boundary; subprocess I/O failures are mapped explicitly
    /// at their call sites.
    fn from(err: io::Error) -> Self {
        HarnessError::EndpointUnavailable(err)
    }
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::InvalidKeyLength { len } => {
                write!(f, "invalid key length: expected {} bytes, got {}", KEY_SIZE, len)
            }
            HarnessError::InvalidBlockLength { len } => {
                write!(
                    f,
                    "invalid block length: expected {} bytes, got {}",
                    BLOCK_SIZE, len
                )
            }
            HarnessError::EndpointUnavailable(e) => {
                write!(f, "register endpoint unavailable: {}", e)
            }
            HarnessError::BuildFailed { name, detail } => {
                write!(f, "build failed for {}: {}", name, detail)
            }
            HarnessError::MalformedToolOutput(detail) => {
                write!(f, "malformed tool output: {}", detail)
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HarnessError::EndpointUnavailable(e) => Some(e),
            _ => None,
        }
    }
}
