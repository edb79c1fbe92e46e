use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use aquaweb::config::Config;
use aquaweb::pool::PoolState;
use aquaweb::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    let pool = Arc::new(RwLock::new(PoolState::demo()));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::select! {
        res = server::listener::run(cfg, pool, shutdown_rx) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    }

    Ok(())
}
