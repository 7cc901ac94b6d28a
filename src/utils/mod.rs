//! Shared helpers for amounts, percentages and timestamps

pub mod currency;
pub mod math;
pub mod time;
