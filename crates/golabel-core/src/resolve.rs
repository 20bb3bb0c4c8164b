//! Import path resolution.
//!
//! Defines the [`LabelResolver`] trait the rule generator calls for every Go
//! import it finds, and [`StructuredResolver`], which maps imports inside the
//! current repository onto a directory-per-package label layout.

use std::borrow::Cow;

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::label::{Label, DEFAULT_LIB_NAME};
use crate::path;

/// Maps a Go import path, seen in a file under `dir`, to the label that
/// provides it.
pub trait LabelResolver: Send + Sync {
    /// `dir` is the slash-separated, repository-relative directory of the
    /// importing file. Empty means the repository root.
    fn resolve(&self, import_path: &str, dir: &str) -> Result<Label, ResolveError>;
}

/// Resolves imports within the repository identified by `root_prefix`.
///
/// Package `root_prefix/a/b` resolves to `//<path_root>/a/b:go_default_library`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredResolver {
    root_prefix: String,
    path_root: String,
}

impl StructuredResolver {
    pub fn new(root_prefix: impl Into<String>, path_root: impl Into<String>) -> Self {
        Self {
            root_prefix: root_prefix.into(),
            path_root: path_root.into(),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.root_prefix.clone(), config.path_root.clone())
    }

    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    pub fn path_root(&self) -> &str {
        &self.path_root
    }

    /// `path_root` with exactly one trailing slash, or empty.
    fn package_root(&self) -> Cow<'_, str> {
        if self.path_root.is_empty() || self.path_root.ends_with('/') {
            Cow::Borrowed(self.path_root.as_str())
        } else {
            Cow::Owned(format!("{}/", self.path_root))
        }
    }
}

impl LabelResolver for StructuredResolver {
    fn resolve(&self, import_path: &str, dir: &str) -> Result<Label, ResolveError> {
        let import_path: Cow<'_, str> = if path::is_relative(import_path) {
            Cow::Owned(path::join(&[&self.root_prefix, dir, import_path]))
        } else {
            Cow::Borrowed(import_path)
        };

        if import_path == self.root_prefix {
            tracing::trace!(%import_path, "resolved repository root package");
            return Ok(Label::default_lib(""));
        }

        let prefix = format!("{}/", self.root_prefix);
        let Some(pkg) = import_path.strip_prefix(prefix.as_str()) else {
            tracing::debug!(
                %import_path,
                root_prefix = %self.root_prefix,
                "import path is outside the repository"
            );
            return Err(ResolveError::OutOfNamespace {
                import_path: import_path.to_string(),
                root_prefix: self.root_prefix.clone(),
            });
        };

        // Generated proto packages live at their import path, never under path_root.
        if pkg.starts_with("proto") {
            tracing::trace!(%import_path, pkg, "resolved proto package");
            return Ok(Label::default_lib(pkg));
        }

        if pkg == dir {
            tracing::trace!(%import_path, dir, "resolved caller's own package");
            return Ok(Label::relative(DEFAULT_LIB_NAME));
        }

        let label = Label::default_lib(format!("{}{pkg}", self.package_root()));
        tracing::trace!(%import_path, pkg = %label.pkg, "resolved package");
        Ok(label)
    }
}
