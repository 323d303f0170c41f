//! Dependency wiring: adapters behind ports, use cases into app state.

use lookupd_api::AppState;
use lookupd_application::ports::{ARecordResolver, HistoryRepository};
use lookupd_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase, ValidateIpUseCase};
use lookupd_domain::Config;
use lookupd_infrastructure::{HickoryAResolver, SqliteHistoryRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    let resolver: Arc<dyn ARecordResolver> = Arc::new(HickoryAResolver::from_config(&config.dns));
    let history: Arc<dyn HistoryRepository> = Arc::new(SqliteHistoryRepository::new(pool));

    AppState {
        lookup: Arc::new(LookupDomainUseCase::new(resolver, Arc::clone(&history))),
        validate_ip: Arc::new(ValidateIpUseCase::new()),
        get_history: Arc::new(GetHistoryUseCase::new(history)),
        config: Arc::new(config.clone()),
    }
}
