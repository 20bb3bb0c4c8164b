use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for a [`StructuredResolver`](crate::StructuredResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Import path of the repository root, e.g. `example.com/repo`.
    pub root_prefix: String,
    /// Directory prepended to resolved package paths. Empty keeps labels at
    /// their import-path location.
    #[serde(default)]
    pub path_root: String,
}

impl ResolverConfig {
    pub fn new(root_prefix: impl Into<String>, path_root: impl Into<String>) -> Self {
        Self {
            root_prefix: root_prefix.into(),
            path_root: path_root.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_prefix.is_empty() {
            return Err(ConfigError::EmptyRootPrefix);
        }
        if self.root_prefix.ends_with('/') {
            return Err(ConfigError::TrailingSlash(self.root_prefix.clone()));
        }
        Ok(())
    }
}
