use lookupd_domain::Config;
use lookupd_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(config: &Config) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", config.database.path);

    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        max_connections = config.database.max_connections,
        "Database initialized"
    );

    Ok(pool)
}
