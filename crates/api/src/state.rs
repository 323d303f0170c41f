use lookupd_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase, ValidateIpUseCase};
use lookupd_domain::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupDomainUseCase>,
    pub validate_ip: Arc<ValidateIpUseCase>,
    pub get_history: Arc<GetHistoryUseCase>,
    pub config: Arc<Config>,
}
