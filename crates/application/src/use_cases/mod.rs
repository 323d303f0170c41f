pub mod get_history;
pub mod lookup_domain;
pub mod validate_ip;

pub use get_history::GetHistoryUseCase;
pub use lookup_domain::LookupDomainUseCase;
pub use validate_ip::ValidateIpUseCase;
