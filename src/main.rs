use cronos_wallet_sync::config::AppConfig;
use cronos_wallet_sync::explorer::ExplorerClient;
use cronos_wallet_sync::models::TxLogKind;
use cronos_wallet_sync::pipeline::SyncPipeline;
use cronos_wallet_sync::store::SheetsClient;
use log::{error, info, LevelFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logger first so config failures are reported; RUST_LOG overrides,
    // the configured level is applied once config is loaded
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    log::set_max_level(LevelFilter::Info);

    // Fail fast on bad config before any network call
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {}", e);
            return Err(e.into());
        }
    };
    if let Ok(level) = config.logging.level.parse() {
        log::set_max_level(level);
    }

    info!("Starting Cronos wallet transaction sync");

    let explorer = ExplorerClient::new(&config.explorer);
    let store = SheetsClient::new(&config.store)?;

    // One full cycle: external transactions, then internal, sequentially
    for kind in [TxLogKind::External, TxLogKind::Internal] {
        let pipeline = SyncPipeline::new(&explorer, &store, &config.explorer.address, kind);
        pipeline.run().await?;
    }

    Ok(())
}
