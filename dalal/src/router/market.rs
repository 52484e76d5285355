use crate::Dalal;
use crate::router::macros::dalal_router_method;
use dalal_core::{
    Capability, DalalError, HeatmapTile, MarketInsights, MarketMovers, MostBought,
    NiftyHistoryPoint, NiftySnapshot, StockSnapshot, heatmap_tiles,
};

impl Dalal {
    dalal_router_method! {
        /// Fetch the latest NIFTY 50 level and change.
        method: nifty() -> NiftySnapshot,
        accessor: as_nifty_provider,
        capability: Capability::Nifty,
        not_found: "nifty snapshot",
        call: nifty
    }

    dalal_router_method! {
        /// Fetch the NIFTY 50 history, oldest first.
        method: nifty_history() -> Vec<NiftyHistoryPoint>,
        accessor: as_nifty_history_provider,
        capability: Capability::NiftyHistory,
        not_found: "nifty history",
        call: nifty_history
    }

    dalal_router_method! {
        /// Fetch the latest snapshot for a stock symbol.
        method: stock(symbol) -> StockSnapshot,
        accessor: as_stock_provider,
        capability: Capability::Stock,
        not_found: "stock",
        call: stock
    }

    dalal_router_method! {
        /// Fetch the top gainers and losers of the latest session.
        method: market_movers() -> MarketMovers,
        accessor: as_market_movers_provider,
        capability: Capability::MarketMovers,
        not_found: "market movers",
        call: market_movers
    }

    dalal_router_method! {
        /// Fetch the session's most bought stock.
        ///
        /// `Ok(None)` means the backend answered but had nothing to report.
        method: most_bought() -> Option<MostBought>,
        accessor: as_most_bought_provider,
        capability: Capability::MostBought,
        not_found: "most bought",
        call: most_bought
    }

    dalal_router_method! {
        /// Fetch market breadth, sector averages and momentum.
        method: market_insights() -> MarketInsights,
        accessor: as_market_insights_provider,
        capability: Capability::MarketInsights,
        not_found: "market insights",
        call: market_insights
    }

    /// Fetch market movers and map them to heatmap tiles, gainers first.
    ///
    /// # Errors
    /// Propagates any error from [`Dalal::market_movers`].
    pub async fn heatmap(&self) -> Result<Vec<HeatmapTile>, DalalError> {
        let movers = self.market_movers().await?;
        Ok(heatmap_tiles(&movers))
    }
}
