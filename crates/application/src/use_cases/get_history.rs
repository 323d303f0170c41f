use lookupd_domain::{LookupRecord, StoreError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::HistoryRepository;

/// History reads are bounded regardless of what the caller asks for.
const MAX_LIMIT: u32 = 20;

pub struct GetHistoryUseCase {
    history: Arc<dyn HistoryRepository>,
}

impl GetHistoryUseCase {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, limit: u32) -> Result<Vec<LookupRecord>, StoreError> {
        self.history.recent(limit.min(MAX_LIMIT)).await
    }
}
