use dalal::Dalal;
use dalal_demos::common::get_connector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dalal = Dalal::builder().with_connector(get_connector()?).build()?;

    let top = dalal.top_stocks().await?;
    println!("{:<18} {:>10} {:>10} {:>8}", "symbol", "return %", "vol %", "sharpe");
    for m in &top.top_10 {
        println!(
            "{:<18} {:>10.2} {:>10.2} {:>8.2}",
            m.symbol, m.annual_return, m.volatility, m.sharpe
        );
    }

    if let Some(mb) = dalal.most_bought().await? {
        println!("most bought: {mb:?}");
    }

    let insights = dalal.market_insights().await?;
    let b = &insights.breadth;
    println!(
        "breadth: {} up / {} down / {} flat",
        b.advancers, b.decliners, b.unchanged
    );

    Ok(())
}
