//! Earnings breakdown model.
//!
//! This module contains the [`PayBucket`] categories worked time is priced
//! into and the [`EarningsBreakdown`] value the engine returns for every
//! interval.

use std::ops::AddAssign;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category a slice of worked time is paid under.
///
/// # Example
///
/// ```
/// use earnings_engine::models::PayBucket;
///
/// assert_eq!(serde_json::to_string(&PayBucket::OvertimeTier1).unwrap(), "\"overtime_tier1\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBucket {
    /// Non-premium hours up to the overtime threshold (100%).
    Regular,
    /// First two non-premium hours past the threshold (125%).
    OvertimeTier1,
    /// Non-premium hours beyond the first two overtime hours (150%).
    OvertimeTier2,
    /// Hours inside the Friday-evening to Saturday-evening window (150%).
    Sabbath,
}

impl PayBucket {
    /// All buckets in reporting order.
    pub const ALL: [PayBucket; 4] = [
        PayBucket::Regular,
        PayBucket::OvertimeTier1,
        PayBucket::OvertimeTier2,
        PayBucket::Sabbath,
    ];
}

impl std::fmt::Display for PayBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayBucket::Regular => write!(f, "Regular"),
            PayBucket::OvertimeTier1 => write!(f, "Overtime Tier 1"),
            PayBucket::OvertimeTier2 => write!(f, "Overtime Tier 2"),
            PayBucket::Sabbath => write!(f, "Sabbath"),
        }
    }
}

/// Hours and pay per bucket for one interval, plus the flat amounts.
///
/// `total_earnings` always equals the sum of the four bucket pays plus
/// `bonus_pay` and `travel_pay`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Hours paid at the first overtime tier.
    pub overtime1_hours: Decimal,
    /// Pay for first-tier overtime hours.
    pub overtime1_pay: Decimal,
    /// Hours paid at the second overtime tier.
    pub overtime2_hours: Decimal,
    /// Pay for second-tier overtime hours.
    pub overtime2_pay: Decimal,
    /// Hours worked inside the premium window.
    pub sabbath_hours: Decimal,
    /// Pay for premium window hours.
    pub sabbath_pay: Decimal,
    /// Sales bonus.
    pub bonus_pay: Decimal,
    /// Flat travel amount.
    pub travel_pay: Decimal,
    /// Sum of every pay component above.
    pub total_earnings: Decimal,
}

impl EarningsBreakdown {
    /// Returns a breakdown with every field set to zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the hours recorded in the given bucket.
    pub fn hours(&self, bucket: PayBucket) -> Decimal {
        match bucket {
            PayBucket::Regular => self.regular_hours,
            PayBucket::OvertimeTier1 => self.overtime1_hours,
            PayBucket::OvertimeTier2 => self.overtime2_hours,
            PayBucket::Sabbath => self.sabbath_hours,
        }
    }

    /// Returns the pay recorded in the given bucket.
    pub fn pay(&self, bucket: PayBucket) -> Decimal {
        match bucket {
            PayBucket::Regular => self.regular_pay,
            PayBucket::OvertimeTier1 => self.overtime1_pay,
            PayBucket::OvertimeTier2 => self.overtime2_pay,
            PayBucket::Sabbath => self.sabbath_pay,
        }
    }

    /// Adds hours and pay to a bucket. Does not touch `total_earnings`.
    pub(crate) fn credit(&mut self, bucket: PayBucket, hours: Decimal, pay: Decimal) {
        let (bucket_hours, bucket_pay) = match bucket {
            PayBucket::Regular => (&mut self.regular_hours, &mut self.regular_pay),
            PayBucket::OvertimeTier1 => (&mut self.overtime1_hours, &mut self.overtime1_pay),
            PayBucket::OvertimeTier2 => (&mut self.overtime2_hours, &mut self.overtime2_pay),
            PayBucket::Sabbath => (&mut self.sabbath_hours, &mut self.sabbath_pay),
        };
        *bucket_hours += hours;
        *bucket_pay += pay;
    }

    /// Total hours across all four buckets.
    pub fn total_hours(&self) -> Decimal {
        PayBucket::ALL.iter().map(|b| self.hours(*b)).sum()
    }

    /// Total pay across all four buckets, excluding bonus and travel.
    pub fn bucket_pay_total(&self) -> Decimal {
        PayBucket::ALL.iter().map(|b| self.pay(*b)).sum()
    }
}

impl AddAssign<&EarningsBreakdown> for EarningsBreakdown {
    fn add_assign(&mut self, other: &EarningsBreakdown) {
        self.regular_hours += other.regular_hours;
        self.regular_pay += other.regular_pay;
        self.overtime1_hours += other.overtime1_hours;
        self.overtime1_pay += other.overtime1_pay;
        self.overtime2_hours += other.overtime2_hours;
        self.overtime2_pay += other.overtime2_pay;
        self.sabbath_hours += other.sabbath_hours;
        self.sabbath_pay += other.sabbath_pay;
        self.bonus_pay += other.bonus_pay;
        self.travel_pay += other.travel_pay;
        self.total_earnings += other.total_earnings;
    }
}
