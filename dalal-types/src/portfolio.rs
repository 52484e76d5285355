//! Wire types for the holdings endpoint.

use serde::{Deserialize, Serialize};

/// One position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Symbol held.
    pub symbol: String,
    /// Units held.
    pub quantity: f64,
    /// Average acquisition cost per unit.
    pub avg_cost: f64,
    /// Last traded price.
    pub ltp: f64,
    /// Amount invested.
    pub invested: f64,
    /// Current market value.
    pub current_value: f64,
    /// `current_value - invested`.
    pub profit_loss: f64,
    /// Profit or loss relative to `invested`, in percent.
    pub profit_loss_pct: f64,
    /// Change in value since the previous session.
    #[serde(default)]
    pub today_pl: f64,
}

/// Portfolio-wide totals. The backend sends `{}` when it has no data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    /// Sum of invested amounts.
    #[serde(default)]
    pub total_invested: Option<f64>,
    /// Sum of current values.
    #[serde(default)]
    pub total_current_value: Option<f64>,
    /// Sum of profit/loss.
    #[serde(default)]
    pub total_profit_loss: Option<f64>,
    /// Sum of today's profit/loss.
    #[serde(default)]
    pub total_today_pl: Option<f64>,
    /// Session date.
    #[serde(default)]
    pub date: Option<String>,
}

impl PortfolioTotals {
    /// Total profit/loss relative to the invested amount, in percent.
    ///
    /// `None` when either total is missing or nothing is invested.
    #[must_use]
    pub fn profit_loss_pct(&self) -> Option<f64> {
        let invested = self.total_invested?;
        let pl = self.total_profit_loss?;
        (invested != 0.0).then(|| pl / invested * 100.0)
    }
}

/// Holdings and their totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Positions.
    #[serde(default)]
    pub holdings: Vec<Holding>,
    /// Totals over `holdings`.
    #[serde(default)]
    pub totals: PortfolioTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_totals_object_parses() {
        let p: Portfolio = serde_json::from_str(r#"{"holdings": [], "totals": {}}"#).unwrap();
        assert_eq!(p, Portfolio::default());
        assert_eq!(p.totals.profit_loss_pct(), None);
    }

    #[test]
    fn profit_loss_pct_from_totals() {
        let t = PortfolioTotals {
            total_invested: Some(418.0),
            total_profit_loss: Some(-71.0),
            ..PortfolioTotals::default()
        };
        let pct = t.profit_loss_pct().unwrap();
        assert!((pct - (-16.985_645_933_014_354)).abs() < 1e-9);
    }
}
