//! Short channel ID codec
//!
//! A channel identifier packs the funding transaction's location into 64 bits:
//! block height (24 bits), transaction index within the block (24 bits) and
//! funding output index (16 bits), high to low.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BLOCK_HEIGHT_SHIFT: u32 = 40;
const TX_INDEX_SHIFT: u32 = 16;
const BLOCK_HEIGHT_MASK: u64 = 0xff_ffff;
const TX_INDEX_MASK: u64 = 0xff_ffff;
const OUTPUT_INDEX_MASK: u64 = 0xffff;

/// Decoded form of a packed channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShortChannelId {
    pub block_height: u32,
    pub tx_index: u32,
    pub output_index: u16,
}

impl ShortChannelId {
    pub fn new(block_height: u32, tx_index: u32, output_index: u16) -> Self {
        Self {
            block_height,
            tx_index,
            output_index,
        }
    }

    /// Unpack a 64-bit channel identifier
    pub fn decode(id: u64) -> Self {
        Self {
            block_height: ((id >> BLOCK_HEIGHT_SHIFT) & BLOCK_HEIGHT_MASK) as u32,
            tx_index: ((id >> TX_INDEX_SHIFT) & TX_INDEX_MASK) as u32,
            output_index: (id & OUTPUT_INDEX_MASK) as u16,
        }
    }

    /// Pack into the 64-bit wire form. Components wider than their field are masked.
    pub fn encode(&self) -> u64 {
        ((self.block_height as u64 & BLOCK_HEIGHT_MASK) << BLOCK_HEIGHT_SHIFT)
            | ((self.tx_index as u64 & TX_INDEX_MASK) << TX_INDEX_SHIFT)
            | self.output_index as u64
    }
}

impl From<u64> for ShortChannelId {
    fn from(id: u64) -> Self {
        Self::decode(id)
    }
}

impl From<ShortChannelId> for u64 {
    fn from(scid: ShortChannelId) -> Self {
        scid.encode()
    }
}

/// Table form: `{height:>7}:{tx:04}:{output}`
impl fmt::Display for ShortChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>7}:{:04}:{:1}",
            self.block_height, self.tx_index, self.output_index
        )
    }
}

impl FromStr for ShortChannelId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidChannelIdentifier(s.to_string());

        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let block_height = parse_segment(parts[0], BLOCK_HEIGHT_MASK).ok_or_else(invalid)?;
        let tx_index = parse_segment(parts[1], TX_INDEX_MASK).ok_or_else(invalid)?;
        let output_index = parse_segment(parts[2], OUTPUT_INDEX_MASK).ok_or_else(invalid)?;

        Ok(Self::new(
            block_height as u32,
            tx_index as u32,
            output_index as u16,
        ))
    }
}

/// Unsigned decimal digits only, no wider than `max`
fn parse_segment(segment: &str, max: u64) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<u64>().ok().filter(|&v| v <= max)
}

/// Render a packed identifier in table form
pub fn format_channel_id(id: u64) -> String {
    ShortChannelId::decode(id).to_string()
}

/// Parse `bbbbbb:iiii:p` into a packed identifier
pub fn parse_channel_id(s: &str) -> AppResult<u64> {
    s.parse::<ShortChannelId>().map(|scid| scid.encode())
}
