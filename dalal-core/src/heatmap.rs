use serde::Serialize;

use crate::MarketMovers;

/// Colour bucket for a heatmap tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatTier {
    /// Up 4% or more.
    StrongGain,
    /// Up, under 4%.
    Gain,
    /// Unchanged.
    Flat,
    /// Down, less than 4%.
    Loss,
    /// Down 4% or more.
    StrongLoss,
}

impl HeatTier {
    /// Percent move at which a tile switches to the strong tier.
    pub const STRONG_PCT: f64 = 4.0;

    /// Bucket a percent change. `NaN` falls through to [`HeatTier::StrongLoss`].
    #[must_use]
    pub fn from_pct(pct: f64) -> Self {
        if pct >= Self::STRONG_PCT {
            Self::StrongGain
        } else if pct > 0.0 {
            Self::Gain
        } else if pct == 0.0 {
            Self::Flat
        } else if pct > -Self::STRONG_PCT {
            Self::Loss
        } else {
            Self::StrongLoss
        }
    }

    /// Background colour for the tier.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::StrongGain => "#15803D",
            Self::Gain => "#22C55E",
            Self::Flat => "#6B7280",
            Self::Loss => "#EF4444",
            Self::StrongLoss => "#B91C1C",
        }
    }
}

/// One tile on the movers heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTile {
    /// Symbol shown on the tile.
    pub symbol: String,
    /// Percent change against the previous session.
    pub pct_change: f64,
    /// Colour bucket of `pct_change`.
    pub tier: HeatTier,
}

impl HeatmapTile {
    /// Percent change with an explicit sign and two decimals, e.g. `+1.23%`.
    #[must_use]
    pub fn label(&self) -> String {
        let sign = if self.pct_change < 0.0 { '-' } else { '+' };
        format!("{sign}{:.2}%", self.pct_change.abs())
    }
}

/// Tiles for every gainer followed by every loser, in upstream order.
#[must_use]
pub fn heatmap_tiles(movers: &MarketMovers) -> Vec<HeatmapTile> {
    movers
        .gainers
        .iter()
        .chain(&movers.losers)
        .map(|m| HeatmapTile {
            symbol: m.symbol.clone(),
            pct_change: m.pct_change,
            tier: HeatTier::from_pct(m.pct_change),
        })
        .collect()
}
