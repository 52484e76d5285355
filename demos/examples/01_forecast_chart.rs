use dalal::{AnalysisSession, Dalal};
use dalal_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector (mock in CI when DALAL_DEMOS_USE_MOCK is set).
    let connector = get_connector()?;

    // 2. Build the router and wrap it in a session for the stock detail view.
    let dalal = Dalal::builder().with_connector(connector).build()?;
    let session = AnalysisSession::new(dalal);

    // 3. Select a stock and run the analysis for that selection.
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "ENERGY_NTPC".to_string());
    println!("Analysing {symbol}...");
    let Some(analysis) = session.select_and_run(symbol).await? else {
        println!("selection changed before the analysis finished");
        return Ok(());
    };

    // 4. Print the decision and the merged chart rows.
    let d = &analysis.decision;
    println!(
        "signal={:?} direction={:?} sentiment={:?} ({:.3})",
        d.signal, d.forecast_direction, d.sentiment_label, d.sentiment_score
    );
    let lines = analysis.chart.lines();
    print!("{:<12}", "date");
    for line in &lines {
        print!("{:>16}", line.label);
    }
    println!();
    for row in &analysis.chart.rows {
        print!("{:<12}", row.date.format("%Y-%m-%d"));
        for line in &lines {
            match row.get(&line.key) {
                Some(v) => print!("{v:>16.2}"),
                None => print!("{:>16}", "-"),
            }
        }
        println!();
    }
    for dropped in &analysis.chart.dropped {
        println!("dropped {} point {:?}: {}", dropped.series, dropped.date, dropped.reason);
    }

    // 5. News behind the sentiment score, if sentiment was available.
    if let Some(err) = &analysis.sentiment_error {
        for cause in err.clone().flatten() {
            eprintln!("sentiment unavailable: {cause}");
        }
    }
    for item in &analysis.news {
        println!("[{:+.2}] {}", item.sentiment_score, item.title);
    }

    Ok(())
}
