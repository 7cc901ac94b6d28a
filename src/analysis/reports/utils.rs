//! Utility functions for report formatting
//!
//! Provides shared table helpers used across all report formatters.

use crate::errors::AppResult;
use serde::Serialize;

/// Dashed separator matching the width of a table header
///
/// # Examples
///
/// ```
/// # use lnd_balance_report::analysis::reports::utils::separator;
/// assert_eq!(separator(" Num | Id"), "---------");
/// ```
pub fn separator(title: &str) -> String {
    "-".repeat(title.len())
}

/// Push a header line and its separator
pub fn push_header(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&separator(title));
    output.push('\n');
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| crate::errors::AppError::InvalidData(format!("JSON export failed: {}", e)))
}
