//! Hill-climbing configuration.

/// Configuration for [`hill_climb`](super::hill_climb).
///
/// The stopping rule is fixed (stop at the first neighborhood with no
/// strictly improving swap), so the only knob is the random source.
///
/// # Examples
///
/// ```
/// use u_search::local_search::HillClimbConfig;
///
/// let config = HillClimbConfig::default().with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillClimbConfig {
    /// Random seed for the starting tour (None for a fresh random seed).
    pub seed: Option<u64>,
}

impl HillClimbConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unseeded() {
        assert_eq!(HillClimbConfig::default().seed, None);
    }

    #[test]
    fn test_with_seed() {
        assert_eq!(HillClimbConfig::default().with_seed(7).seed, Some(7));
    }
}
