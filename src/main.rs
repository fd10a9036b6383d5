use anyhow::Result;
use clap::Parser;
use tracing::info;

use logboard::config::Config;
use logboard::fetch::{entry_bounds, RecordFetcher};
use logboard::presentation::ChartData;
use logboard::query::{QueryEngine, QueryParams};

#[derive(Parser)]
#[command(name = "logboard")]
#[command(about = "Fetch API-monitoring log records and emit dashboard views as JSON")]
struct Args {
    #[arg(short, long, default_value = "config/config.toml")]
    config: String,

    /// Override the configured log endpoint
    #[arg(short, long)]
    endpoint: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("logboard={}", level))
        .init();

    info!("Starting logboard");

    let mut config = Config::from_file_with_env(&args.config).await?;
    if let Some(endpoint) = args.endpoint {
        config.api.endpoint = endpoint;
        config.validate()?;
    }

    let fetcher = RecordFetcher::new(config.api.clone())?;
    let records = fetcher.fetch_records().await?;

    if let Some((first, last)) = entry_bounds(&records) {
        info!("Record store spans timestamps {} to {}", first, last);
    }

    let engine = QueryEngine::new(records, config.display_offset());

    let params = QueryParams {
        range: config.default_date_range()?,
        page_size: config.query.default_page_size,
        ..Default::default()
    };
    let output = engine.run(&params);

    let views = serde_json::json!({
        "totalCount": output.total_count,
        "summary": output.summary,
        "page": output.page,
        "chart": ChartData::from_buckets(&output.chart),
    });
    println!("{}", serde_json::to_string_pretty(&views)?);

    info!("Logboard done");
    Ok(())
}
