pub mod meta;
pub mod query;
pub mod validate;

pub use meta::{AppDetails, HealthCheck};
pub use query::{AddressDto, LookupParams, QueryResponse};
pub use validate::{ValidateIpRequest, ValidateIpResponse};
