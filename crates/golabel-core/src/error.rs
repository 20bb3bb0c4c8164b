#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("import path {import_path:?} does not start with root prefix {root_prefix:?}")]
    OutOfNamespace {
        import_path: String,
        root_prefix: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("root prefix cannot be empty")]
    EmptyRootPrefix,

    #[error("root prefix must not end with a slash: {0:?}")]
    TrailingSlash(String),
}
