use dalal_core::{Holding, Portfolio, PortfolioTotals};

use super::SESSION_DMY;

fn holding(symbol: &str, quantity: f64, avg_cost: f64, ltp: f64, prev: f64) -> Holding {
    let invested = quantity * avg_cost;
    let current_value = quantity * ltp;
    let profit_loss = current_value - invested;
    Holding {
        symbol: symbol.to_string(),
        quantity,
        avg_cost,
        ltp,
        invested,
        current_value,
        profit_loss,
        profit_loss_pct: profit_loss / invested * 100.0,
        today_pl: quantity * (ltp - prev),
    }
}

pub fn portfolio() -> Portfolio {
    let holdings = vec![
        holding("ENERGY_NTPC", 40.0, 280.0, 309.4, 306.1),
        holding("IT_INFY", 10.0, 1_480.0, 1_522.6, 1_541.0),
        holding("AUTO_TATAMOTORS", 15.0, 810.0, 781.5, 742.3),
    ];
    let sum = |f: fn(&Holding) -> f64| holdings.iter().map(f).sum::<f64>();
    let totals = PortfolioTotals {
        total_invested: Some(sum(|h| h.invested)),
        total_current_value: Some(sum(|h| h.current_value)),
        total_profit_loss: Some(sum(|h| h.profit_loss)),
        total_today_pl: Some(sum(|h| h.today_pl)),
        date: Some(SESSION_DMY.to_string()),
    };
    Portfolio { holdings, totals }
}
