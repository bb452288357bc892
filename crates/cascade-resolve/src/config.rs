//! Resolver Configuration

/// Default recursion bound for a single resolution call
pub const MAX_DEPTH: usize = 256;

/// Resolver configuration options
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Recursion depth at which a lookup gives up and reports a miss.
    /// Only circular class references reach it in practice.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}
