pub mod config;
pub mod error;
pub mod label;
pub mod path;
pub mod resolve;

pub use config::ResolverConfig;
pub use error::{ConfigError, ResolveError};
pub use label::{Label, DEFAULT_LIB_NAME};
pub use resolve::{LabelResolver, StructuredResolver};
