//! Configuration for a prophecy session.

/// Configuration for a prophecy session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Number of cards laid out by the initial draw.
    pub initial_draw: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_draw: 3,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the size of the initial draw.
    pub fn with_initial_draw(mut self, n: usize) -> Self {
        self.initial_draw = n;
        self
    }
}
