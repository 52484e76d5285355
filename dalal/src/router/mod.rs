pub mod analytics;
pub mod macros;
pub mod market;
pub mod poll;
pub mod portfolio;
pub mod session;

pub mod util;
