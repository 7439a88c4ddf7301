//! Flat per-interval amounts.
//!
//! Sales bonus and travel pay are added once per interval after the hours
//! have been priced. Neither depends on how long the interval was.

use rust_decimal::Decimal;

use crate::models::CompensationProfile;

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Calculates the sales bonus for an interval.
///
/// The bonus is `sales_amount × bonus_percentage / 100` when the profile is
/// bonus-eligible and a sales amount was recorded, and zero otherwise.
///
/// # Examples
///
/// ```
/// use earnings_engine::calculation::calculate_sales_bonus;
/// use earnings_engine::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile {
///     hourly_rate: Decimal::from(40),
///     is_eligible_for_bonus: true,
///     bonus_percentage: Decimal::from(10),
///     ..CompensationProfile::default()
/// };
///
/// assert_eq!(calculate_sales_bonus(&profile, Some(Decimal::from(1000))), Decimal::from(100));
/// assert_eq!(calculate_sales_bonus(&profile, None), Decimal::ZERO);
/// ```
pub fn calculate_sales_bonus(profile: &CompensationProfile, sales_amount: Option<Decimal>) -> Decimal {
    match sales_amount {
        Some(sales) if profile.is_eligible_for_bonus => {
            sales * profile.bonus_percentage / PERCENT
        }
        _ => Decimal::ZERO,
    }
}

/// Returns the flat travel amount owed for an interval.
///
/// Non-positive travel rates pay nothing.
pub fn calculate_travel_pay(profile: &CompensationProfile) -> Decimal {
    if profile.travel_rate_per_shift > Decimal::ZERO {
        profile.travel_rate_per_shift
    } else {
        Decimal::ZERO
    }
}
