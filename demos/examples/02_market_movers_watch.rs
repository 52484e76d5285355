use std::time::Duration;

use dalal::Dalal;
use dalal_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dalal = Dalal::builder()
        .with_connector(get_connector()?)
        .poll_interval(Duration::from_millis(200))
        .poll_jitter_percent(10)
        .build()?;

    // Poll market movers a few times, then stop the task.
    let (handle, mut rx) = dalal.watch_market_movers()?;
    for tick in 1..=3 {
        let Some(movers) = rx.recv().await else {
            break;
        };
        println!(
            "tick {tick}: {} gainers, {} losers (session {})",
            movers.gainers.len(),
            movers.losers.len(),
            movers.date.as_deref().unwrap_or("n/a")
        );
        for tile in dalal::heatmap_tiles(&movers) {
            println!("  {:<18} {:>8} {}", tile.symbol, tile.label(), tile.tier.color());
        }
    }
    handle.stop().await;
    println!("polling stopped");

    Ok(())
}
