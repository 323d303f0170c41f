use thiserror::Error;

/// Typed resolution faults. Every fault from the underlying resolver maps
/// into exactly one of these; anything unclassified lands in `Other`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Domain not found")]
    NotFound,

    #[error("DNS lookup timed out")]
    Timeout,

    #[error("No answer from DNS server")]
    NoAnswer,

    #[error("No name servers are available")]
    NoNameservers,

    #[error("{0}")]
    Other(String),
}

/// History store faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("History store unavailable: {0}")]
    Unavailable(String),
}
