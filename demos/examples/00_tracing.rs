use std::time::Duration;

use dalal::Dalal;
use dalal_demos::common::get_connector;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,dalal=trace,dalal_http=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dalal = Dalal::builder()
        .with_connector(get_connector()?)
        .provider_timeout(Duration::from_secs(5))
        .build()?;

    let nifty = dalal.nifty().await?;
    tracing::info!(value = nifty.nifty_value, change_pct = nifty.change_pct, "index snapshot");

    let chart = dalal.forecast_chart("ENERGY_NTPC").await?;
    tracing::info!(rows = chart.rows.len(), dropped = chart.dropped.len(), "forecast chart");

    Ok(())
}
