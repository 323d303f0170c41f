//! # lookupd
//!
//! Entry point for the DNS lookup HTTP service.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use lookupd_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "lookupd")]
#[command(version)]
#[command(about = "HTTP API for DNS A-record lookups with history")]
struct Cli {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// SQLite database path
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind,
        database_path: cli.database,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let pool = bootstrap::init_database(&config).await?;
    let state = di::build_state(&config, pool);

    server::start_web_server(state, &config).await
}
