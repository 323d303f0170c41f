use std::net::{IpAddr, Ipv4Addr};

/// One successfully resolved lookup.
///
/// `id` and `created_at` are assigned by the history store at append time;
/// both are `None` until the record has been persisted. A record is only
/// ever built from a resolution that yielded at least one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRecord {
    pub id: Option<i64>,
    pub domain: String,
    pub addresses: Vec<Ipv4Addr>,
    pub client_ip: IpAddr,
    pub created_at: Option<i64>,
}

impl LookupRecord {
    pub fn new(domain: impl Into<String>, addresses: Vec<Ipv4Addr>, client_ip: IpAddr) -> Self {
        Self {
            id: None,
            domain: domain.into(),
            addresses,
            client_ip,
            created_at: None,
        }
    }
}
