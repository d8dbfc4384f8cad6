//! Conformance runner: replays fixed vectors through the protocol
//! client and reports pass/fail.
//!
//! A mismatch is a normal, expected outcome: it is reported as FAIL
//! alongside PASS and never aborts the run. Device errors, by
//! contrast, are errors and propagate immediately.

use crate::device::{CipherClient, RegisterBus, BLOCK_SIZE, KEY_SIZE};
use crate::error::HarnessError;

/// A fixed `(key, plaintext, expected ciphertext)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConformanceVector {
    /// Cipher key, 10 bytes.
    pub key: [u8; KEY_SIZE],
    /// Plaintext block, 8 bytes.
    pub plaintext: [u8; BLOCK_SIZE],
    /// Ciphertext the implementation must produce.
    pub ciphertext: [u8; BLOCK_SIZE],
}

/// Known-answer vectors for the PRESENT-80 cipher.
pub const VECTORS: [ConformanceVector; 4] = [
    ConformanceVector {
        key: [0x00; KEY_SIZE],
        plaintext: [0x00; BLOCK_SIZE],
        ciphertext: [0x55, 0x79, 0xc1, 0x38, 0x7b, 0x22, 0x84, 0x45],
    },
    ConformanceVector {
        key: [0xff; KEY_SIZE],
        plaintext: [0x00; BLOCK_SIZE],
        ciphertext: [0xe7, 0x2c, 0x46, 0xc0, 0xf5, 0x94, 0x50, 0x49],
    },
    ConformanceVector {
        key: [0xff; KEY_SIZE],
        plaintext: [0xff; BLOCK_SIZE],
        ciphertext: [0x33, 0x33, 0xdc, 0xd3, 0x21, 0x32, 0x10, 0xd2],
    },
    ConformanceVector {
        key: [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x11, 0x22, 0x33, 0x44],
        plaintext: [0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xc0, 0xde],
        ciphertext: [0x31, 0xf6, 0x9a, 0xa9, 0x60, 0x4e, 0x98, 0x5f],
    },
];

/// Progress of a single vector through the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorState {
    /// Not yet attempted.
    Pending,
    /// Key written to the key register.
    KeySet,
    /// Ciphertext read back from the encrypt register.
    Encrypted,
    /// Observed ciphertext matched byte for byte.
    Pass,
    /// Observed ciphertext differed (or had the wrong length).
    Fail,
}

/// Outcome of one vector.
#[derive(Debug, Clone)]
pub struct VectorOutcome {
    /// The vector that was replayed.
    pub vector: ConformanceVector,
    /// Terminal state, `Pass` or `Fail` after a completed run.
    pub state: VectorState,
    /// Ciphertext read back from the device.
    pub observed: Option<Vec<u8>>,
}

impl VectorOutcome {
    fn new(vector: ConformanceVector) -> Self {
        Self {
            vector,
            state: VectorState::Pending,
            observed: None,
        }
    }

    fn key_set(&mut self) {
        self.state = VectorState::KeySet;
    }

    fn encrypted(&mut self, observed: Vec<u8>) {
        self.observed = Some(observed);
        self.state = VectorState::Encrypted;
    }

    fn judge(&mut self) {
        // Exact byte comparison; a length mismatch is a FAIL, not an
        // error.
        let matched = self
            .observed
            .as_deref()
            .map(|observed| observed == &self.vector.ciphertext[..])
            .unwrap_or(false);

        self.state = if matched {
            VectorState::Pass
        } else {
            VectorState::Fail
        };
    }

    /// Whether the vector passed.
    pub fn passed(&self) -> bool {
        self.state == VectorState::Pass
    }
}

/// Outcomes of a full conformance run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    /// One outcome per vector, in replay order.
    pub outcomes: Vec<VectorOutcome>,
}

impl ConformanceReport {
    /// Number of vectors attempted.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of vectors that passed.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of vectors that failed.
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }
}

/// Replay `vectors` in order through `client`.
///
/// Endpoints are opened once and reused across all vectors. Every
/// vector is attempted regardless of earlier failures; only a device
/// error stops the run.
pub fn run_vectors<B: RegisterBus>(
    client: &CipherClient<B>,
    vectors: &[ConformanceVector],
) -> Result<ConformanceReport, HarnessError> {
    let mut session = client.session()?;
    let mut outcomes = Vec::with_capacity(vectors.len());

    for vector in vectors {
        let mut outcome = VectorOutcome::new(*vector);

        session.set_key(&vector.key)?;
        outcome.key_set();

        let observed = session.encrypt(&vector.plaintext)?;
        outcome.encrypted(observed.to_vec());

        outcome.judge();
        outcomes.push(outcome);
    }

    Ok(ConformanceReport { outcomes })
}
