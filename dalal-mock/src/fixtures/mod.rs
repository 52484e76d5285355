pub mod analytics;
pub mod market;
pub mod portfolio;

/// Session date every fixture is anchored to.
pub const SESSION: &str = "2024-01-05";
/// `SESSION` in the backend's day-first snapshot format.
pub const SESSION_DMY: &str = "05-01-2024";

/// Symbols with fixture data, in the order the backend lists its price files.
pub const SYMBOLS: [&str; 6] = [
    "AUTO_TATAMOTORS",
    "BANK_HDFCBANK",
    "ENERGY_NTPC",
    "FMCG_ITC",
    "IT_INFY",
    "IT_WIPRO",
];
