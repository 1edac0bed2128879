//! Energy-savings estimates for upgrading to a higher SEER rating.
//!
//! Cooling energy use is inversely proportional to SEER, so moving from
//! `current` to `new` saves `1 - current / new` of the cooling bill.

use serde::Serialize;

/// SEER ratings offered on current equipment.
pub const STANDARD_SEER_RATINGS: &[f64] = &[13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 20.0, 22.0, 24.0, 26.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsRow {
    pub seer: f64,
    /// Percent saved on cooling energy, one decimal place
    pub savings_percent: f64,
}

/// Percent saved moving from `current_seer` to `new_seer`, rounded to one decimal.
///
/// Returns 0 when `new_seer` is not an upgrade or either rating is not positive.
pub fn savings_percent(current_seer: f64, new_seer: f64) -> f64 {
    if current_seer.is_nan()
        || current_seer <= 0.0
        || new_seer.is_nan()
        || new_seer <= current_seer
    {
        return 0.0;
    }
    let percent = (1.0 - current_seer / new_seer) * 100.0;
    (percent * 10.0).round() / 10.0
}

/// Savings for every standard rating above `current_seer`.
pub fn savings_table(current_seer: f64) -> Vec<SavingsRow> {
    STANDARD_SEER_RATINGS
        .iter()
        .filter(|&&seer| seer > current_seer)
        .map(|&seer| SavingsRow {
            seer,
            savings_percent: savings_percent(current_seer, seer),
        })
        .collect()
}
