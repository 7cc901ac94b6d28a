//! Core data model
//!
//! - `channel`: channel snapshots fetched from the node
//! - `forwarding`: forwarding events fetched from the node
//! - `short_channel_id`: packed channel identifier codec

pub mod channel;
pub mod forwarding;
pub mod short_channel_id;

pub use channel::{ChannelRecord, Sat};
pub use forwarding::{ForwardingEvent, MSAT_PER_SAT};
pub use short_channel_id::{format_channel_id, parse_channel_id, ShortChannelId};
