use lookupd_domain::LookupRecord;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct LookupParams {
    pub domain: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressDto {
    pub ip: String,
}

/// Response shape shared by the lookup and history endpoints.
#[derive(Serialize, Debug, Clone)]
pub struct QueryResponse {
    pub addresses: Vec<AddressDto>,
    pub client_ip: String,
    pub created_at: i64,
    pub domain: String,
}

impl From<LookupRecord> for QueryResponse {
    fn from(record: LookupRecord) -> Self {
        Self {
            addresses: record
                .addresses
                .iter()
                .map(|ip| AddressDto { ip: ip.to_string() })
                .collect(),
            client_ip: record.client_ip.to_string(),
            created_at: record.created_at.unwrap_or_default(),
            domain: record.domain,
        }
    }
}
