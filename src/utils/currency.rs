//! Amount conversion utilities between millisatoshis and satoshis

use rust_decimal::Decimal;

use crate::types::{Sat, MSAT_PER_SAT};

/// Convert a millisatoshi amount to whole satoshis, truncating the remainder.
///
/// # Examples
/// ```
/// use lnd_balance_report::utils::currency::msat_to_sat;
///
/// assert_eq!(msat_to_sat(10_000_999), 10_000);
/// assert_eq!(msat_to_sat(999), 0);
/// ```
pub fn msat_to_sat(msat: u64) -> Sat {
    (msat / MSAT_PER_SAT) as Sat
}

/// Convert a millisatoshi amount to an exact decimal satoshi value.
///
/// # Examples
/// ```
/// use lnd_balance_report::utils::currency::msat_to_sat_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(msat_to_sat_decimal(500), Decimal::new(5, 1));
/// assert_eq!(msat_to_sat_decimal(150_000), Decimal::from(150));
/// ```
pub fn msat_to_sat_decimal(msat: u64) -> Decimal {
    Decimal::from(msat) / Decimal::from(MSAT_PER_SAT)
}
