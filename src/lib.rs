//! Lightning channel balance, forwarding volume and fee reports for lnd
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod rpc;
pub mod types;
pub mod utils;
