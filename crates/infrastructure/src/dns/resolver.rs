use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError as HickoryError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use lookupd_application::ports::ARecordResolver;
use lookupd_domain::config::DnsConfig;
use lookupd_domain::ResolveError;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// A-record resolver backed by hickory-resolver.
///
/// Queries the configured upstream servers on port 53; with no servers
/// configured, the system resolver configuration is used, falling back to
/// the library's public defaults when it cannot be read.
pub struct HickoryAResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryAResolver {
    pub fn from_config(cfg: &DnsConfig) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_millis(cfg.query_timeout_ms);
        opts.attempts = cfg.attempts;

        let upstream_ips: Vec<IpAddr> = cfg
            .upstream_servers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        let config = if upstream_ips.is_empty() {
            match read_system_conf() {
                Ok((config, _)) => {
                    debug!("Using system resolver configuration");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "Could not read system resolver config, using defaults");
                    ResolverConfig::default()
                }
            }
        } else {
            ResolverConfig::from_parts(
                None,
                vec![],
                NameServerConfigGroup::from_ips_clear(&upstream_ips, 53, true),
            )
        };

        info!(
            upstream_servers = upstream_ips.len(),
            timeout_ms = cfg.query_timeout_ms,
            attempts = cfg.attempts,
            "DNS resolver created"
        );

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl ARecordResolver for HickoryAResolver {
    #[instrument(skip(self))]
    async fn resolve_a(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
        match self.resolver.ipv4_lookup(domain).await {
            Ok(lookup) => {
                let addresses: Vec<Ipv4Addr> = lookup.iter().map(|a| a.0).collect();
                debug!(domain = %domain, count = addresses.len(), "A lookup answered");
                Ok(addresses)
            }
            Err(e) => Err(map_error(e)),
        }
    }
}

/// Collapses hickory's fault surface into the typed variants the
/// application layer matches on. Anything unrecognized lands in `Other`.
fn map_error(err: HickoryError) -> ResolveError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => ResolveError::NotFound,
            // Domain exists but holds no A records.
            _ => ResolveError::NoAnswer,
        },
        ResolveErrorKind::Timeout => ResolveError::Timeout,
        ResolveErrorKind::NoConnections => ResolveError::NoNameservers,
        _ => ResolveError::Other(err.to_string()),
    }
}
