//! Bazel label value produced by the resolvers.

use serde::{Deserialize, Serialize};

/// Name of the conventional primary library target of a Go package.
pub const DEFAULT_LIB_NAME: &str = "go_default_library";

/// A build target identifier: package path plus target name.
///
/// `relative` labels refer to the caller's own package and render without
/// a package path, so `pkg` is ignored for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub pkg: String,
    pub name: String,
    pub relative: bool,
}

impl Label {
    pub fn new(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pkg: pkg.into(),
            name: name.into(),
            relative: false,
        }
    }

    /// The primary library target of `pkg`.
    pub fn default_lib(pkg: impl Into<String>) -> Self {
        Self::new(pkg, DEFAULT_LIB_NAME)
    }

    /// A target in the caller's own package.
    pub fn relative(name: impl Into<String>) -> Self {
        Self {
            pkg: String::new(),
            name: name.into(),
            relative: true,
        }
    }

    pub fn is_default_lib(&self) -> bool {
        self.name == DEFAULT_LIB_NAME
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.relative {
            return write!(f, ":{}", self.name);
        }

        let base = self.pkg.rsplit('/').next().unwrap_or_default();
        if !self.pkg.is_empty() && base == self.name {
            write!(f, "//{}", self.pkg)
        } else {
            write!(f, "//{}:{}", self.pkg, self.name)
        }
    }
}
