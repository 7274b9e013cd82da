//! Stock Sync - supplier stock to Ozon and Yandex Market
//!
//! Downloads the supplier stock sheet once, then updates each selected
//! marketplace in turn.

use clap::{Parser, ValueEnum};
use stock_sync::config::{self, MarketConfig, OzonConfig};
use stock_sync::market::MarketClient;
use stock_sync::ozon::OzonClient;
use stock_sync::{
    sync_market, sync_ozon, ErrorKind, InventoryRecord, InventorySource, SyncError, SyncReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Marketplace {
    Ozon,
    Market,
    All,
}

/// Push supplier stock levels and prices to Ozon and Yandex Market
#[derive(Parser, Debug)]
#[command(name = "stock_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// Which marketplace to update
    #[arg(short, long, value_enum, default_value_t = Marketplace::All)]
    marketplace: Marketplace,

    /// URL of the supplier stock archive (default: STOCK_URL or the supplier site)
    #[arg(long)]
    stock_url: Option<String>,

    /// Reconcile and log without sending any updates
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    config::load_dotenv();

    let args = Args::parse();
    log::info!("Starting stock_sync...");
    if args.dry_run {
        log::info!("Dry run: no updates will be sent");
    }

    if let Err(e) = run(&args).await {
        report_failure(&e);
        std::process::exit(1);
    }

    log::info!("Sync completed successfully.");
}

async fn run(args: &Args) -> Result<(), SyncError> {
    // Read credentials before downloading anything.
    let ozon = match args.marketplace {
        Marketplace::Ozon | Marketplace::All => Some(OzonConfig::from_env()?),
        Marketplace::Market => None,
    };
    let market = match args.marketplace {
        Marketplace::Market | Marketplace::All => Some(MarketConfig::from_env()?),
        Marketplace::Ozon => None,
    };

    let url = args
        .stock_url
        .clone()
        .unwrap_or_else(config::stock_url_from_env);
    let records = InventorySource::new(url).fetch().await?;

    if let Some(config) = ozon {
        run_ozon(&config, &records, args.dry_run).await?;
    }
    if let Some(config) = market {
        run_market(&config, &records, args.dry_run).await?;
    }
    Ok(())
}

async fn run_ozon(
    config: &OzonConfig,
    records: &[InventoryRecord],
    dry_run: bool,
) -> Result<(), SyncError> {
    let client = OzonClient::from_config(config);
    let report = sync_ozon(&client, records, dry_run).await?;
    log_report(&report);
    Ok(())
}

async fn run_market(
    config: &MarketConfig,
    records: &[InventoryRecord],
    dry_run: bool,
) -> Result<(), SyncError> {
    let client = MarketClient::from_config(config);
    for report in sync_market(&client, &config.scopes(), records, dry_run).await? {
        log_report(&report);
    }
    Ok(())
}

fn log_report(report: &SyncReport) {
    log::info!(
        "{}: {} offers, {} stock entries ({} in stock), {} prices, {} requests",
        report.scope,
        report.offers,
        report.stocks_sent,
        report.in_stock,
        report.prices_sent,
        report.requests
    );
}

fn report_failure(error: &SyncError) {
    match error.kind() {
        ErrorKind::Timeout => log::error!("Request timed out: {}", error),
        ErrorKind::Connection => log::error!("Connection failed: {}", error),
        ErrorKind::Config => log::error!("{}", error),
        _ => log::error!("Sync failed: {}", error),
    }
}
