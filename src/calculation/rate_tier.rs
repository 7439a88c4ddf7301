//! Overtime tier resolution.
//!
//! This module selects the pay multiplier for a slice of non-premium time
//! from the hours already worked outside the premium window in the same
//! interval.
//!
//! ## Tier Structure
//!
//! With an overtime threshold of `T` hours:
//! - Until `T` hours have been worked: regular, 100%
//! - The next 2 hours: overtime tier 1, 125%
//! - Anything after that: overtime tier 2, 150%

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationProfile, PayBucket};

/// Length of overtime tier 1 in hours. Fixed, regardless of the profile's threshold.
pub const OVERTIME_TIER_2_OFFSET_HOURS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Multiplier for regular hours (100%).
pub const REGULAR_MULTIPLIER: Decimal = Decimal::ONE;

/// Multiplier for overtime tier 1 (125%).
pub const OVERTIME_TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Multiplier for overtime tier 2 (150%).
pub const OVERTIME_TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(150, 0, 0, false, 2);

/// The bucket and multiplier that apply to a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// The bucket the slice is recorded in.
    pub bucket: PayBucket,
    /// The factor applied to the hourly rate.
    pub multiplier: Decimal,
}

/// Resolves the overtime tier for a slice.
///
/// `hours_worked_before_slice` is the non-premium time already worked in
/// the interval, not counting the slice being priced. The whole slice is
/// paid at the tier this returns, even if the slice itself carries the
/// total across a tier boundary.
///
/// # Arguments
///
/// * `hours_worked_before_slice` - Non-premium hours accumulated so far
/// * `profile` - The profile supplying the overtime threshold
///
/// # Examples
///
/// ```
/// use earnings_engine::calculation::resolve_tier;
/// use earnings_engine::models::{CompensationProfile, PayBucket};
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile::with_hourly_rate(Decimal::from(40));
///
/// assert_eq!(resolve_tier(Decimal::from(7), &profile).bucket, PayBucket::Regular);
/// assert_eq!(resolve_tier(Decimal::from(8), &profile).bucket, PayBucket::OvertimeTier1);
/// assert_eq!(resolve_tier(Decimal::from(9), &profile).bucket, PayBucket::OvertimeTier1);
/// assert_eq!(resolve_tier(Decimal::from(10), &profile).bucket, PayBucket::OvertimeTier2);
/// ```
pub fn resolve_tier(hours_worked_before_slice: Decimal, profile: &CompensationProfile) -> RateTier {
    let threshold = profile.overtime_threshold_hours;

    if hours_worked_before_slice < threshold {
        RateTier {
            bucket: PayBucket::Regular,
            multiplier: REGULAR_MULTIPLIER,
        }
    } else if hours_worked_before_slice < threshold + OVERTIME_TIER_2_OFFSET_HOURS {
        RateTier {
            bucket: PayBucket::OvertimeTier1,
            multiplier: OVERTIME_TIER_1_MULTIPLIER,
        }
    } else {
        RateTier {
            bucket: PayBucket::OvertimeTier2,
            multiplier: OVERTIME_TIER_2_MULTIPLIER,
        }
    }
}
