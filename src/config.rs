//! Process-wide configuration that is read once at start up and shared by
//! every request.

use crate::pagination::PaginationConfig;

/// Switches for features that can be turned on or off without a new build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Whether clients may create new spenders via `POST /spenders`.
    pub enable_create_spender: bool,
}

/// The configuration for the REST server.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// The feature flags.
    pub feature_flags: FeatureFlags,
    /// The config that controls how transaction history is paged.
    pub pagination: PaginationConfig,
}

impl AppConfig {
    /// Create a config with the default pagination settings.
    pub fn new(feature_flags: FeatureFlags) -> Self {
        Self {
            feature_flags,
            pagination: PaginationConfig::default(),
        }
    }
}
