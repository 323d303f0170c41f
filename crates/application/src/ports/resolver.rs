use async_trait::async_trait;
use lookupd_domain::ResolveError;
use std::net::Ipv4Addr;

/// A-record resolution port.
///
/// Implementations issue the query against their configured upstream
/// servers under a bounded timeout and map every underlying fault into a
/// `ResolveError` variant. A successful result may be empty; callers must
/// treat an empty result identically to `ResolveError::NotFound`.
#[async_trait]
pub trait ARecordResolver: Send + Sync {
    async fn resolve_a(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ResolveError>;
}
