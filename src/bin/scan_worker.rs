use anyhow::Context;
use clap::Parser;
use property_watch::app::scan_api;
use property_watch::utils::{logger, validation::Validate};
use property_watch::{
    HtmlListingExtractor, ScanConfig, ScanWorker, ServerArgs, StoreConfig, SupabaseStore,
};
use std::sync::Arc;

const DEFAULT_PORT: u16 = 8001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    logger::init_logger(args.verbose, args.json_logs);
    tracing::info!("Starting property-watch scan worker");

    let store_config = StoreConfig::from_env().context("Record store credentials are required")?;
    store_config
        .validate()
        .context("Invalid record store configuration")?;

    let scan_config = ScanConfig::from_env();
    scan_config
        .validate()
        .context("Invalid listing source configuration")?;
    tracing::debug!("Scan config: {:?}", scan_config);

    let extractor = HtmlListingExtractor::new(&scan_config.selectors)?;
    let store = Arc::new(SupabaseStore::new(&store_config));
    let worker = ScanWorker::new(store, Arc::new(extractor), scan_config);
    let app = scan_api::router(worker);

    let addr = args.bind_addr(DEFAULT_PORT)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
