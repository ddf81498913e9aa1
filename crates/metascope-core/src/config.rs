//! Catalog configuration.

/// Configuration for building a [`Catalog`](crate::catalog::Catalog).
///
/// Member names are always checked: two members of one class may share a
/// name only when both are callables with different signatures.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Allow a class to be registered again, replacing the earlier metadata.
    /// When false, a second registration is an error.
    pub allow_reregistration: bool,
}

impl CatalogConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether re-registering a class replaces it.
    pub fn allow_reregistration(mut self, allow: bool) -> Self {
        self.allow_reregistration = allow;
        self
    }
}
