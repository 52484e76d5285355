use dalal::Dalal;
use dalal_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dalal = Dalal::builder().with_connector(get_connector()?).build()?;

    let portfolio = dalal.portfolio().await?;
    for h in &portfolio.holdings {
        println!(
            "{:<18} qty {:>6} avg {:>10.2} ltp {:>10.2} P/L {:>+10.2} ({:+.2}%)",
            h.symbol, h.quantity, h.avg_cost, h.ltp, h.profit_loss, h.profit_loss_pct
        );
    }
    let t = &portfolio.totals;
    let fmt = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
    println!(
        "invested {} current {} P/L {} ({}%)",
        fmt(t.total_invested),
        fmt(t.total_current_value),
        fmt(t.total_profit_loss),
        fmt(t.profit_loss_pct())
    );

    Ok(())
}
