use anyhow::Context;
use clap::Parser;
use property_watch::app::watchlist_api;
use property_watch::utils::{logger, validation::Validate};
use property_watch::{ServerArgs, StoreConfig, SupabaseStore, WatchlistService};
use std::sync::Arc;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    logger::init_logger(args.verbose, args.json_logs);
    tracing::info!("Starting property-watch watchlist service");

    // 缺少儲存端憑證時不啟動
    let store_config = StoreConfig::from_env().context("Record store credentials are required")?;
    store_config
        .validate()
        .context("Invalid record store configuration")?;
    tracing::debug!("Store config: {:?}", store_config);

    let store = Arc::new(SupabaseStore::new(&store_config));
    let app = watchlist_api::router(WatchlistService::new(store));

    let addr = args.bind_addr(DEFAULT_PORT)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
