//! Configuration for the in-memory store.

/// Configuration parameters for [`super::InMemoryStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of trips held at once.
    /// Inserts beyond this fail with `StoreError::Full`.
    pub max_trips: usize,
}

impl StoreConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_trips: usize) -> Self {
        Self { max_trips }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { max_trips: 10_000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        assert_eq!(StoreConfig::default().max_trips, 10_000);
    }

    #[test]
    fn custom_config() {
        assert_eq!(StoreConfig::new(5).max_trips, 5);
    }
}
