//! Configuration for route planning.
//!
//! # Example
//!
//! ```
//! use pick_types::RouteConfig;
//!
//! let config = RouteConfig::default()
//!     .with_safety_radius(45.0)
//!     .with_max_expansions(10_000);
//!
//! assert!(config.validate().is_empty());
//! ```

/// Default distance within which a worker blocks a node, in floor-plan units.
pub const DEFAULT_SAFETY_RADIUS: f64 = 30.0;

/// Configuration for collision-aware route planning.
///
/// Defaults:
/// - Safety radius: [`DEFAULT_SAFETY_RADIUS`]
/// - No expansion limit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouteConfig {
    /// A node is occupied when a worker is strictly closer than this.
    safety_radius: f64,
    /// Maximum nodes a single search may dequeue.
    max_expansions: Option<usize>,
}

impl RouteConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            safety_radius: DEFAULT_SAFETY_RADIUS,
            max_expansions: None,
        }
    }

    /// Sets the safety radius.
    ///
    /// A radius of zero disables occupancy avoidance entirely.
    #[must_use]
    pub const fn with_safety_radius(mut self, radius: f64) -> Self {
        self.safety_radius = radius;
        self
    }

    /// Sets the maximum number of nodes a single search may expand.
    ///
    /// A search that reaches the limit fails with
    /// [`RoutingError::ExpansionLimit`](crate::RoutingError::ExpansionLimit).
    #[must_use]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Removes the expansion limit.
    #[must_use]
    pub const fn without_max_expansions(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// Returns the safety radius.
    #[must_use]
    pub const fn safety_radius(&self) -> f64 {
        self.safety_radius
    }

    /// Returns the expansion limit, if set.
    #[must_use]
    pub const fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Validates the configuration.
    ///
    /// Returns a list of issues, empty when the configuration is usable.
    ///
    /// # Example
    ///
    /// ```
    /// use pick_types::RouteConfig;
    ///
    /// let config = RouteConfig::default().with_safety_radius(-1.0);
    /// assert_eq!(config.validate().len(), 1);
    /// ```
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.safety_radius.is_finite() || self.safety_radius < 0.0 {
            issues.push(format!(
                "Safety radius must be finite and non-negative, got {}",
                self.safety_radius
            ));
        }

        if self.max_expansions == Some(0) {
            issues.push("Expansion limit must be positive".to_string());
        }

        issues
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self::new()
    }
}
