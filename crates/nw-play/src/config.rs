//! Configuration for a play session.

/// Configuration for a play session.
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// RNG seed for reproducible epilogue draws. `None` seeds from the
    /// thread RNG so unseeded runs see varying outcomes.
    pub seed: Option<u64>,
}

impl PlayConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unseeded() {
        assert_eq!(PlayConfig::default().seed, None);
    }

    #[test]
    fn with_seed() {
        assert_eq!(PlayConfig::default().with_seed(123).seed, Some(123));
    }
}
