//! Configuration for rolling dice.

/// Configuration for a dice roller.
#[derive(Debug, Clone, Default)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether pools rolled from this config spend Edge.
    pub edge: bool,
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set whether pools spend Edge, making sixes explode.
    pub fn with_edge(mut self, edge: bool) -> Self {
        self.edge = edge;
        self
    }
}
