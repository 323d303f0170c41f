use lookupd_domain::{ResolveError, StoreError};
use thiserror::Error;

/// Outcome classification for a failed lookup. The API layer maps each
/// variant onto a status code; the display strings are the user-visible
/// messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Domain must be provided")]
    EmptyDomain,

    #[error("Domain must be a valid domain name")]
    InvalidDomain,

    /// The domain does not exist, or resolution succeeded with zero
    /// addresses (treated identically).
    #[error("Domain not found")]
    NotFound,

    /// Transient resolution fault (timeout, no answer, no nameservers,
    /// unclassified). `ResolveError::NotFound` never reaches this variant.
    #[error(transparent)]
    Resolver(ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
