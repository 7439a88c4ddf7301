//! Earnings aggregation across many work intervals.
//!
//! The aggregator prices every interval against a caller-owned profile table
//! and reduces the results into an [`EarningsSummary`]. Intervals whose
//! profile cannot be found contribute nothing and are reported as
//! [`DegradedCondition::UnresolvedProfile`].

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::DegradedCondition;
use crate::models::{CompensationProfile, EarningsBreakdown, PayPeriod, WorkInterval};

use super::shift_slicer::compute_earnings;

/// Totals over a collection of work intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Sum of `total_earnings` over every interval with a known profile.
    pub total_earnings: Decimal,
    /// Number of distinct start dates among intervals with a known profile.
    pub distinct_days_worked: usize,
    /// Field-wise sum of the breakdowns of every interval with a known profile.
    pub totals: EarningsBreakdown,
    /// Number of intervals whose profile was found.
    pub intervals_priced: usize,
    /// Degraded conditions met, in input order.
    pub conditions: Vec<DegradedCondition>,
}

impl EarningsSummary {
    /// Returns true if every interval was priced without a degraded condition.
    pub fn is_clean(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Sums earnings over a collection of intervals.
///
/// An interval whose profile is missing from `profiles_by_id` adds zero and
/// its date is not counted as worked. An empty or inverted interval with a
/// known profile still counts its start date; it is priced at zero and
/// reported as a degraded condition.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use earnings_engine::calculation::aggregate;
/// use earnings_engine::models::{CompensationProfile, WorkInterval};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let id = Uuid::from_u128(1);
/// let profiles = HashMap::from([(id, CompensationProfile::with_hourly_rate(Decimal::from(30)))]);
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let intervals = vec![
///     WorkInterval::new(at("2026-01-12 09:00:00"), at("2026-01-12 13:00:00"), id),
///     WorkInterval::new(at("2026-01-12 14:00:00"), at("2026-01-12 16:00:00"), id),
///     WorkInterval::new(at("2026-01-13 09:00:00"), at("2026-01-13 10:00:00"), Uuid::nil()),
/// ];
///
/// let summary = aggregate(&intervals, &profiles);
/// assert_eq!(summary.total_earnings, Decimal::from(180));
/// assert_eq!(summary.distinct_days_worked, 1);
/// assert_eq!(summary.conditions.len(), 1);
/// ```
pub fn aggregate(
    intervals: &[WorkInterval],
    profiles_by_id: &HashMap<Uuid, CompensationProfile>,
) -> EarningsSummary {
    aggregate_matching(intervals, profiles_by_id, |_| true)
}

/// Sums earnings over the intervals whose work date lies inside `period`.
///
/// Intervals outside the period are ignored entirely. Condition indices
/// still refer to positions in `intervals`.
pub fn aggregate_period(
    intervals: &[WorkInterval],
    profiles_by_id: &HashMap<Uuid, CompensationProfile>,
    period: &PayPeriod,
) -> EarningsSummary {
    aggregate_matching(intervals, profiles_by_id, |interval| {
        period.contains_date(interval.work_date())
    })
}

fn aggregate_matching<F>(
    intervals: &[WorkInterval],
    profiles_by_id: &HashMap<Uuid, CompensationProfile>,
    include: F,
) -> EarningsSummary
where
    F: Fn(&WorkInterval) -> bool,
{
    let mut summary = EarningsSummary::default();
    let mut days_worked: HashSet<NaiveDate> = HashSet::new();

    for (index, interval) in intervals.iter().enumerate() {
        if !include(interval) {
            continue;
        }

        let Some(profile) = profiles_by_id.get(&interval.compensation_profile_id) else {
            debug!(
                index,
                profile_id = %interval.compensation_profile_id,
                "Skipping interval with unknown compensation profile"
            );
            summary.conditions.push(DegradedCondition::UnresolvedProfile {
                index,
                profile_id: interval.compensation_profile_id,
            });
            continue;
        };

        if !interval.is_valid() {
            summary
                .conditions
                .push(DegradedCondition::InvertedOrEmptyInterval { index });
        }

        let breakdown = compute_earnings(interval, Some(profile));
        summary.total_earnings += breakdown.total_earnings;
        summary.totals += &breakdown;
        summary.intervals_priced += 1;
        days_worked.insert(interval.work_date());
    }

    summary.distinct_days_worked = days_worked.len();
    summary
}
