#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum::{Extension, Router};
use lookupd_api::{create_router, AppState};
use lookupd_application::ports::{ARecordResolver, HistoryRepository};
use lookupd_application::use_cases::{GetHistoryUseCase, LookupDomainUseCase, ValidateIpUseCase};
use lookupd_domain::{Config, LookupRecord, ResolveError, StoreError};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const CLIENT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 4321);

// ============================================================================
// Mock ports
// ============================================================================

#[derive(Clone, Default)]
pub struct MockResolver {
    responses: Arc<RwLock<HashMap<String, Result<Vec<Ipv4Addr>, ResolveError>>>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_addresses(&self, domain: &str, addresses: Vec<Ipv4Addr>) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Ok(addresses));
    }

    pub async fn set_error(&self, domain: &str, error: ResolveError) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Err(error));
    }
}

#[async_trait]
impl ARecordResolver for MockResolver {
    async fn resolve_a(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
        self.responses
            .read()
            .await
            .get(domain)
            .cloned()
            .unwrap_or(Err(ResolveError::NotFound))
    }
}

#[derive(Clone, Default)]
pub struct MockHistoryRepository {
    records: Arc<RwLock<Vec<LookupRecord>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn append(&self, mut record: LookupRecord) -> Result<LookupRecord, StoreError> {
        if *self.unavailable.read().await {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        let mut records = self.records.write().await;
        let next_id = records.len() as i64 + 1;
        record.id = Some(next_id);
        // Distinct timestamps so descending order is observable.
        record.created_at = Some(1_700_000_000 + next_id);
        records.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<LookupRecord>, StoreError> {
        if *self.unavailable.read().await {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        let records = self.records.read().await;
        let mut out: Vec<LookupRecord> = records.clone();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        out.truncate(limit as usize);
        Ok(out)
    }
}

// ============================================================================
// Test app wiring
// ============================================================================

pub fn test_app(resolver: MockResolver, history: MockHistoryRepository) -> Router {
    let resolver: Arc<dyn ARecordResolver> = Arc::new(resolver);
    let history: Arc<dyn HistoryRepository> = Arc::new(history);

    let state = AppState {
        lookup: Arc::new(LookupDomainUseCase::new(resolver, Arc::clone(&history))),
        validate_ip: Arc::new(ValidateIpUseCase::new()),
        get_history: Arc::new(GetHistoryUseCase::new(history)),
        config: Arc::new(Config::default()),
    };

    // oneshot requests never go through a real accept loop, so the
    // connect-info extension is injected directly.
    create_router(state).layer(Extension(ConnectInfo(SocketAddr::from(CLIENT_ADDR))))
}
