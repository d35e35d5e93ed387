use asset_cio::domain::ports::AssetServiceRef;
use asset_cio::infrastructure::in_memory::InMemoryAssetService;
use asset_cio::interfaces::csv::cash_in_out_reader::CashInOutReader;
use asset_cio::interfaces::http;
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Cash withdrawal API", long_about = None)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "ASSET_CIO_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// CSV file of cash-in-out records to load at startup
    #[arg(long, env = "ASSET_CIO_SEED")]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let service = InMemoryAssetService::new();
    if let Some(seed) = cli.seed {
        let file = File::open(&seed)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot open seed file {}", seed.display()))?;
        let records = CashInOutReader::new(file)
            .read_all()
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot load seed file {}", seed.display()))?;
        tracing::info!(count = records.len(), "seed records loaded");
        service.load(records).await;
    }

    let service: AssetServiceRef = Arc::new(service);
    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot bind {}", cli.bind))?;
    http::serve(listener, service).await.into_diagnostic()?;

    Ok(())
}
