use crate::Dalal;
use crate::router::macros::dalal_router_method;
use dalal_core::{Capability, Portfolio};

impl Dalal {
    dalal_router_method! {
        /// Fetch the user's holdings and portfolio totals.
        method: portfolio() -> Portfolio,
        accessor: as_portfolio_provider,
        capability: Capability::Portfolio,
        not_found: "portfolio",
        call: portfolio
    }
}
