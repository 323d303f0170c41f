use async_trait::async_trait;
use chrono::Utc;
use lookupd_application::ports::HistoryRepository;
use lookupd_domain::{LookupRecord, StoreError};
use sqlx::{Row, SqlitePool};
use std::net::Ipv4Addr;
use tracing::{debug, instrument};

/// SQLite-backed lookup history.
///
/// Addresses are stored as a JSON array of dotted-quad strings so the
/// sequence survives the round trip in order.
pub struct SqliteHistoryRepository {
    pool: SqlitePool,
}

impl SqliteHistoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn encode_addresses(addresses: &[Ipv4Addr]) -> Result<String, StoreError> {
    let strings: Vec<String> = addresses.iter().map(ToString::to_string).collect();
    serde_json::to_string(&strings).map_err(|e| StoreError::Unavailable(e.to_string()))
}

fn decode_addresses(raw: &str) -> Result<Vec<Ipv4Addr>, StoreError> {
    let strings: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| StoreError::Unavailable(format!("corrupt history row: {e}")))?;
    strings
        .iter()
        .map(|s| {
            s.parse()
                .map_err(|e| StoreError::Unavailable(format!("corrupt history row: {e}")))
        })
        .collect()
}

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    #[instrument(skip(self, record), fields(domain = %record.domain))]
    async fn append(&self, record: LookupRecord) -> Result<LookupRecord, StoreError> {
        // Assigned per call, at write time. A constant computed at process
        // start would pin every row to the same second.
        let created_at = Utc::now().timestamp();
        let addresses = encode_addresses(&record.addresses)?;

        let result = sqlx::query(
            "INSERT INTO lookup_history (domain, client_ip, addresses, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&record.domain)
        .bind(record.client_ip.to_string())
        .bind(&addresses)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        debug!(id = result.last_insert_rowid(), "Lookup appended to history");

        Ok(LookupRecord {
            id: Some(result.last_insert_rowid()),
            created_at: Some(created_at),
            ..record
        })
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: u32) -> Result<Vec<LookupRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, domain, client_ip, addresses, created_at
             FROM lookup_history
             ORDER BY created_at DESC, id DESC
             LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let raw_addresses: String = row
                .try_get("addresses")
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            let raw_client_ip: String = row
                .try_get("client_ip")
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;

            records.push(LookupRecord {
                id: Some(
                    row.try_get("id")
                        .map_err(|e| StoreError::Unavailable(e.to_string()))?,
                ),
                domain: row
                    .try_get("domain")
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?,
                addresses: decode_addresses(&raw_addresses)?,
                client_ip: raw_client_ip
                    .parse()
                    .map_err(|e| StoreError::Unavailable(format!("corrupt history row: {e}")))?,
                created_at: Some(
                    row.try_get("created_at")
                        .map_err(|e| StoreError::Unavailable(e.to_string()))?,
                ),
            });
        }

        Ok(records)
    }
}
