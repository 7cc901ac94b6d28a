//! Integration Tests Module
//!
//! End-to-end tests that drive the fetch → aggregate → render pipeline
//! against an in-memory node.

pub mod aggregation_properties;
pub mod report_pipeline;
pub mod two_channel_scenario;
