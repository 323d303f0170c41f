//! Lookupd Domain Layer
pub mod config;
pub mod errors;
pub mod lookup;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{ResolveError, StoreError};
pub use lookup::LookupRecord;
pub use validators::{is_valid_domain, is_valid_ipv4};
