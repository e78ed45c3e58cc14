use crate::ports::Oracle;

/// Application context holding dependencies for command execution.
pub struct AppContext<O: Oracle> {
    oracle: O,
}

impl<O: Oracle> AppContext<O> {
    /// Create a new application context.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Get a reference to the language model client.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}
