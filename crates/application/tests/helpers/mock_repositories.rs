#![allow(dead_code)]

use async_trait::async_trait;
use lookupd_application::ports::{ARecordResolver, HistoryRepository};
use lookupd_domain::{LookupRecord, ResolveError, StoreError};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock ARecordResolver
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

// ============================================================================
// Mock HistoryRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockHistoryRepository {
    records: Arc<RwLock<Vec<LookupRecord>>>,
    unavailable: Arc<RwLock<bool>>,
    clock: Arc<RwLock<i64>>,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    /// Advances the mock clock so successive appends get distinct,
    /// increasing timestamps.
    pub async fn tick(&self) {
        *self.clock.write().await += 1;
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn all(&self) -> Vec<LookupRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl HistoryRepository for MockHistoryRepository {
    async fn append(&self, mut record: LookupRecord) -> Result<LookupRecord, StoreError> {
        if *self.unavailable.read().await {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        let mut records = self.records.write().await;
        record.id = Some(records.len() as i64 + 1);
        record.created_at = Some(*self.clock.read().await);
        records.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<LookupRecord>, StoreError> {
        if *self.unavailable.read().await {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }

        let records = self.records.read().await;
        let mut out: Vec<LookupRecord> = records.clone();
        // created_at descending, ties broken by newest insertion (id).
        out.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.cmp(&a.id))
        });
        out.truncate(limit as usize);
        Ok(out)
    }
}
