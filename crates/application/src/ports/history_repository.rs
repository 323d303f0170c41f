use async_trait::async_trait;
use lookupd_domain::{LookupRecord, StoreError};

/// Persistent ordered log of successful lookups.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Persists a record atomically, assigning `id` and `created_at` at
    /// write time (never reusing a timestamp computed earlier), and returns
    /// the persisted form.
    async fn append(&self, record: LookupRecord) -> Result<LookupRecord, StoreError>;

    /// Returns up to `limit` records, strictly descending by `created_at`,
    /// ties broken newest-inserted-first.
    async fn recent(&self, limit: u32) -> Result<Vec<LookupRecord>, StoreError>;
}
