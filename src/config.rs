//! Configuration for benchmark and comparison runs.
//!
//! Corpus sizes and repetition counts are parameters rather than
//! constants; the defaults match the workloads the kernel modules were
//! originally measured with.

/// Configuration for a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of keys in the corpus (default: 1,000).
    pub total_keys: usize,

    /// Number of plaintext blocks in the corpus (default: 1,000).
    ///
    /// The workload is the full cross product, so the run performs
    /// `total_keys * total_plaintexts` encryptions.
    pub total_plaintexts: usize,
}

impl BenchConfig {
    /// Create a configuration with the default corpus sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of keys to generate.
    pub fn total_keys(mut self, n: usize) -> Self {
        self.total_keys = n;
        self
    }

    /// Set the number of plaintext blocks to generate.
    pub fn total_plaintexts(mut self, n: usize) -> Self {
        self.total_plaintexts = n;
        self
    }

    /// Total number of encryption operations in the run.
    pub fn total_encryptions(&self) -> usize {
        self.total_keys * self.total_plaintexts
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            total_keys: 1_000,
            total_plaintexts: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_product_count() {
        let config = BenchConfig::new().total_keys(100).total_plaintexts(40);
        assert_eq!(config.total_encryptions(), 4_000);
    }

    #[test]
    fn defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.total_keys, 1_000);
        assert_eq!(config.total_plaintexts, 1_000);
    }
}
