use lookupd_domain::validators::is_valid_domain;
use lookupd_domain::{LookupRecord, ResolveError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::errors::LookupError;
use crate::ports::{ARecordResolver, HistoryRepository};

/// Orchestrates one lookup: validate the domain, resolve A records, persist
/// the result, return the persisted record.
pub struct LookupDomainUseCase {
    resolver: Arc<dyn ARecordResolver>,
    history: Arc<dyn HistoryRepository>,
}

impl LookupDomainUseCase {
    pub fn new(resolver: Arc<dyn ARecordResolver>, history: Arc<dyn HistoryRepository>) -> Self {
        Self { resolver, history }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        client_ip: IpAddr,
    ) -> Result<LookupRecord, LookupError> {
        if domain.is_empty() {
            return Err(LookupError::EmptyDomain);
        }
        if !is_valid_domain(domain) {
            debug!(domain = %domain, "Rejected malformed domain");
            return Err(LookupError::InvalidDomain);
        }

        let addresses = match self.resolver.resolve_a(domain).await {
            Ok(addresses) => addresses,
            Err(ResolveError::NotFound) => return Err(LookupError::NotFound),
            Err(e) => {
                warn!(domain = %domain, error = %e, "Resolution failed");
                return Err(LookupError::Resolver(e));
            }
        };

        // An empty answer set means the record cannot exist.
        if addresses.is_empty() {
            return Err(LookupError::NotFound);
        }

        let record = LookupRecord::new(domain, addresses, client_ip);
        let persisted = self.history.append(record).await?;

        info!(
            domain = %domain,
            addresses = persisted.addresses.len(),
            client_ip = %client_ip,
            "Lookup resolved and recorded"
        );

        Ok(persisted)
    }
}
