pub mod connection;
pub mod get;
pub mod list;
