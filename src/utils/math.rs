//! Percentage helpers with zero-denominator guards
//!
//! Ratios shown in the reports are never NaN or infinite: a non-positive
//! denominator yields 0.

/// Calculate `part / total * 100`, returning 0.0 if total is not positive.
///
/// # Examples
/// ```
/// use lnd_balance_report::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(50, 100), 50.0);
/// assert_eq!(safe_percentage(300, 100), 300.0);
/// assert_eq!(safe_percentage(50, 0), 0.0);
/// assert_eq!(safe_percentage(50, -10), 0.0);
/// ```
#[inline]
pub fn safe_percentage(part: i64, total: i64) -> f64 {
    if total <= 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Round a percentage for display, half away from zero.
///
/// # Examples
/// ```
/// use lnd_balance_report::utils::math::round_percentage;
///
/// assert_eq!(round_percentage(59.5), 60);
/// assert_eq!(round_percentage(-0.5), -1);
/// assert_eq!(round_percentage(f64::NAN), 0);
/// ```
#[inline]
pub fn round_percentage(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}
