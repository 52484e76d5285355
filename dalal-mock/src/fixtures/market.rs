use dalal_core::{
    Breadth, MarketInsights, MarketMovers, MomentumRow, MostBought, Mover, NiftyHistoryPoint,
    NiftySnapshot, SectorStat, StockSnapshot,
};

use super::SESSION_DMY;

pub fn nifty() -> NiftySnapshot {
    NiftySnapshot {
        nifty_value: 21_710.8,
        change_pct: 0.24,
        date: SESSION_DMY.to_string(),
    }
}

pub fn nifty_history() -> Vec<NiftyHistoryPoint> {
    [
        ("Mon, 01 Jan 2024 00:00:00 GMT", Some(21_741.9)),
        ("Tue, 02 Jan 2024 00:00:00 GMT", Some(21_665.8)),
        ("Wed, 03 Jan 2024 00:00:00 GMT", Some(21_517.3)),
        ("Thu, 04 Jan 2024 00:00:00 GMT", Some(21_658.6)),
        ("Fri, 05 Jan 2024 00:00:00 GMT", Some(21_710.8)),
    ]
    .into_iter()
    .map(|(date, nifty)| NiftyHistoryPoint {
        date: date.to_string(),
        nifty,
    })
    .collect()
}

// (symbol, last, previous)
const CLOSES: [(&str, f64, f64); 6] = [
    ("AUTO_TATAMOTORS", 781.5, 742.3),
    ("BANK_HDFCBANK", 1_668.2, 1_672.9),
    ("ENERGY_NTPC", 309.4, 306.1),
    ("FMCG_ITC", 468.3, 468.3),
    ("IT_INFY", 1_522.6, 1_541.0),
    ("IT_WIPRO", 462.7, 485.9),
];

fn pct(last: f64, prev: f64) -> f64 {
    ((last - prev) / prev * 10_000.0).round() / 100.0
}

pub fn stock(symbol: &str) -> Option<StockSnapshot> {
    let (sym, last, prev) = CLOSES.iter().find(|(s, _, _)| *s == symbol)?;
    Some(StockSnapshot {
        symbol: (*sym).to_string(),
        latest_value: *last,
        change: ((last - prev) * 100.0).round() / 100.0,
        change_pct: pct(*last, *prev),
        date: SESSION_DMY.to_string(),
    })
}

fn movers_sorted() -> Vec<Mover> {
    let mut all: Vec<Mover> = CLOSES
        .iter()
        .map(|(s, last, prev)| Mover {
            symbol: (*s).to_string(),
            ltp: *last,
            pct_change: pct(*last, *prev),
        })
        .collect();
    all.sort_by(|a, b| b.pct_change.total_cmp(&a.pct_change));
    all
}

pub fn market_movers() -> MarketMovers {
    let all = movers_sorted();
    let mut losers: Vec<Mover> = all.iter().rev().take(3).cloned().collect();
    losers.retain(|m| m.pct_change < 0.0);
    MarketMovers {
        date: Some(SESSION_DMY.to_string()),
        gainers: all.into_iter().filter(|m| m.pct_change > 0.0).take(3).collect(),
        losers,
    }
}

pub fn most_bought() -> Option<MostBought> {
    let top = movers_sorted().into_iter().next()?;
    Some(MostBought {
        date: Some(SESSION_DMY.to_string()),
        symbol: top.symbol,
        ltp: top.ltp,
        pct_change: top.pct_change,
    })
}

pub fn market_insights() -> MarketInsights {
    let all = movers_sorted();
    let count = |f: fn(f64) -> bool| {
        u32::try_from(all.iter().filter(|m| f(m.pct_change)).count()).unwrap_or(u32::MAX)
    };
    let advancers = count(|p| p > 0.0);
    let decliners = count(|p| p < 0.0);
    MarketInsights {
        date: Some(SESSION_DMY.to_string()),
        breadth: Breadth {
            advancers,
            decliners,
            unchanged: count(|p| p == 0.0),
            adv_decl_ratio: (decliners > 0).then(|| f64::from(advancers) / f64::from(decliners)),
        },
        sectors: vec![
            sector("AUTO", 1, 0, 0, 5.28),
            sector("BANK", 0, 1, 0, -0.28),
            sector("ENERGY", 1, 0, 0, 1.08),
            sector("FMCG", 0, 0, 1, 0.0),
            sector("IT", 0, 2, 0, -2.98),
        ],
        momentum: vec![
            momentum("AUTO_TATAMOTORS", 6.1, 11.4),
            momentum("ENERGY_NTPC", 2.3, 7.9),
            momentum("FMCG_ITC", 0.4, 1.2),
        ],
    }
}

fn sector(name: &str, advancers: u32, decliners: u32, unchanged: u32, avg_move: f64) -> SectorStat {
    SectorStat {
        sector: name.to_string(),
        advancers,
        decliners,
        unchanged,
        avg_move,
    }
}

fn momentum(symbol: &str, pct_5d: f64, pct_20d: f64) -> MomentumRow {
    MomentumRow {
        symbol: symbol.to_string(),
        pct_5d,
        pct_20d,
        momentum_score: (0.6f64.mul_add(pct_5d, 0.4 * pct_20d) * 100.0).round() / 100.0,
    }
}
