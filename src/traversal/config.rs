//! Traversal configuration.

/// Configuration for graph reachability.
///
/// # Examples
///
/// ```
/// use u_dispatch::traversal::TraversalConfig;
///
/// let config = TraversalConfig::default().with_max_depth(2).with_strict(true);
/// assert_eq!(config.max_depth, 2);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Maximum number of hops from the origin. 0 yields an empty result.
    pub max_depth: usize,
    /// Fail on dangling links instead of skipping them.
    pub strict: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            strict: false,
        }
    }
}

impl TraversalConfig {
    /// Sets the maximum number of hops.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets whether dangling links are errors.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
