//! Interval slicing and pricing.
//!
//! This module walks a work interval in slices of at most one wall-clock
//! hour. Each slice is classified by the instant it starts at: slices that
//! start inside the premium window are paid at the Sabbath rate, all others
//! are paid at the overtime tier reached by the non-premium hours worked
//! before them. Bonus and travel pay are added once the hours are priced.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::models::{
    AuditStep, CompensationProfile, EarningsBreakdown, PayBucket, WorkInterval, hours_between,
};

use super::allowances::{calculate_sales_bonus, calculate_travel_pay};
use super::premium_window::{SABBATH_MULTIPLIER, is_premium_window};
use super::rate_tier::{RateTier, resolve_tier};

/// A piece of a work interval no longer than one hour.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::TimeSlice;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let slice = TimeSlice {
///     start: NaiveDateTime::parse_from_str("2026-01-16 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2026-01-16 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     hours: Decimal::new(5, 1), // 0.5 hours
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// The start of the slice. Decides the slice's classification.
    pub start: NaiveDateTime,
    /// The end of the slice.
    pub end: NaiveDateTime,
    /// The slice length in fractional hours.
    pub hours: Decimal,
}

/// Splits a time range into consecutive slices of at most one hour.
///
/// Every slice but the last is exactly one hour long, starting from `start`
/// (not aligned to the top of the clock hour). An empty or inverted range
/// yields no slices.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::slice_interval;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-15 09:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 11:45:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let slices = slice_interval(start, end);
/// assert_eq!(slices.len(), 3);
/// assert_eq!(slices[0].hours, Decimal::ONE);
/// assert_eq!(slices[1].hours, Decimal::ONE);
/// assert_eq!(slices[2].hours, Decimal::new(5, 1)); // 0.5 hours
/// ```
pub fn slice_interval(start: NaiveDateTime, end: NaiveDateTime) -> Vec<TimeSlice> {
    let mut slices = Vec::new();
    let mut pointer = start;

    while pointer < end {
        let slice_end = (pointer + Duration::hours(1)).min(end);
        slices.push(TimeSlice {
            start: pointer,
            end: slice_end,
            hours: hours_between(pointer, slice_end),
        });
        pointer = slice_end;
    }

    slices
}

/// A slice together with the pricing decision made for it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PricedSlice {
    slice: TimeSlice,
    tier: RateTier,
    /// Non-premium hours worked before the slice; `None` for premium slices.
    hours_worked_before: Option<Decimal>,
    amount: Decimal,
}

/// Why an interval was priced at zero without being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    MissingProfile,
    EmptyInterval,
}

fn skip_reason(interval: &WorkInterval, profile: Option<&CompensationProfile>) -> Option<SkipReason> {
    if profile.is_none() {
        Some(SkipReason::MissingProfile)
    } else if !interval.is_valid() {
        Some(SkipReason::EmptyInterval)
    } else {
        None
    }
}

/// Walks the interval and prices every slice, reporting each one to `on_slice`.
fn price_interval<F>(interval: &WorkInterval, profile: &CompensationProfile, mut on_slice: F) -> EarningsBreakdown
where
    F: FnMut(&PricedSlice),
{
    let mut breakdown = EarningsBreakdown::zero();
    let mut non_premium_hours = Decimal::ZERO;

    for slice in slice_interval(interval.start, interval.end) {
        let (tier, hours_worked_before) = if is_premium_window(slice.start) {
            let tier = RateTier {
                bucket: PayBucket::Sabbath,
                multiplier: SABBATH_MULTIPLIER,
            };
            (tier, None)
        } else {
            (resolve_tier(non_premium_hours, profile), Some(non_premium_hours))
        };

        let amount = slice.hours * profile.hourly_rate * tier.multiplier;
        breakdown.credit(tier.bucket, slice.hours, amount);

        if hours_worked_before.is_some() {
            non_premium_hours += slice.hours;
        }

        trace!(
            slice_start = %slice.start,
            bucket = %tier.bucket,
            hours = %slice.hours,
            amount = %amount,
            "Priced slice"
        );

        on_slice(&PricedSlice {
            slice,
            tier,
            hours_worked_before,
            amount,
        });
    }

    breakdown.bonus_pay = calculate_sales_bonus(profile, interval.sales_amount);
    breakdown.travel_pay = calculate_travel_pay(profile);
    breakdown.total_earnings =
        breakdown.bucket_pay_total() + breakdown.bonus_pay + breakdown.travel_pay;

    breakdown
}

/// Computes the earnings owed for one work interval.
///
/// A missing profile or an interval that does not start before it ends
/// yields an all-zero breakdown, bonus and travel included. This is not an
/// error.
///
/// # Arguments
///
/// * `interval` - The worked interval
/// * `profile` - The profile the interval is paid under, if it could be found
///
/// # Examples
///
/// ## 10-hour Sunday shift
///
/// ```
/// use earnings_engine::calculation::compute_earnings;
/// use earnings_engine::models::{CompensationProfile, WorkInterval};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let profile = CompensationProfile::with_hourly_rate(Decimal::from(40));
/// // 2026-01-18 is a Sunday
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2026-01-18 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-18 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     Uuid::nil(),
/// );
///
/// let breakdown = compute_earnings(&interval, Some(&profile));
/// assert_eq!(breakdown.regular_hours, Decimal::from(8));
/// assert_eq!(breakdown.overtime1_hours, Decimal::from(2));
/// assert_eq!(breakdown.total_earnings, Decimal::from(420)); // 8 × 40 + 2 × 50
/// ```
///
/// ## Missing profile
///
/// ```
/// use earnings_engine::calculation::compute_earnings;
/// use earnings_engine::models::{EarningsBreakdown, WorkInterval};
/// use chrono::NaiveDateTime;
/// use uuid::Uuid;
///
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2026-01-18 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-18 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     Uuid::nil(),
/// );
///
/// assert_eq!(compute_earnings(&interval, None), EarningsBreakdown::zero());
/// ```
pub fn compute_earnings(
    interval: &WorkInterval,
    profile: Option<&CompensationProfile>,
) -> EarningsBreakdown {
    match (skip_reason(interval, profile), profile) {
        (None, Some(profile)) => price_interval(interval, profile, |_| {}),
        (reason, _) => {
            debug!(
                start = %interval.start,
                end = %interval.end,
                reason = ?reason,
                "Interval priced at zero"
            );
            EarningsBreakdown::zero()
        }
    }
}

/// The breakdown for an interval together with the audit trail explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCalculation {
    /// The earnings breakdown, identical to [`compute_earnings`]'s result.
    pub breakdown: EarningsBreakdown,
    /// One step per priced slice, then one per non-zero flat amount.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the earnings for an interval and records every pricing decision.
///
/// Skipped intervals produce a single step explaining why they were priced at zero.
///
/// # Example
///
/// ```
/// use earnings_engine::calculation::calculate_shift;
/// use earnings_engine::models::{CompensationProfile, WorkInterval};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let profile = CompensationProfile::with_hourly_rate(Decimal::from(40));
/// // 2026-01-16 is a Friday
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2026-01-16 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-16 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     Uuid::nil(),
/// );
///
/// let calculation = calculate_shift(&interval, Some(&profile));
/// assert_eq!(calculation.audit_steps.len(), 4);
/// assert_eq!(calculation.audit_steps[0].rule_id, "regular_slice");
/// assert_eq!(calculation.audit_steps[2].rule_id, "sabbath_slice");
/// ```
pub fn calculate_shift(
    interval: &WorkInterval,
    profile: Option<&CompensationProfile>,
) -> ShiftCalculation {
    let profile = match (skip_reason(interval, profile), profile) {
        (None, Some(profile)) => profile,
        (reason, _) => {
            return ShiftCalculation {
                breakdown: compute_earnings(interval, profile),
                audit_steps: vec![skipped_interval_step(interval, reason)],
            };
        }
    };

    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let breakdown = price_interval(interval, profile, |priced| {
        audit_steps.push(slice_step(step_number, priced, profile.hourly_rate));
        step_number += 1;
    });

    if breakdown.bonus_pay > Decimal::ZERO {
        audit_steps.push(bonus_step(step_number, interval, profile, breakdown.bonus_pay));
        step_number += 1;
    }

    if breakdown.travel_pay > Decimal::ZERO {
        audit_steps.push(travel_step(step_number, breakdown.travel_pay));
    }

    ShiftCalculation {
        breakdown,
        audit_steps,
    }
}

fn rule_id(bucket: PayBucket) -> &'static str {
    match bucket {
        PayBucket::Regular => "regular_slice",
        PayBucket::OvertimeTier1 => "overtime_tier_1_slice",
        PayBucket::OvertimeTier2 => "overtime_tier_2_slice",
        PayBucket::Sabbath => "sabbath_slice",
    }
}

fn slice_step(step_number: u32, priced: &PricedSlice, hourly_rate: Decimal) -> AuditStep {
    let PricedSlice {
        slice,
        tier,
        hours_worked_before,
        amount,
    } = priced;

    let context = match hours_worked_before {
        Some(before) => format!(
            "{} non-premium hours worked before slice",
            before.normalize()
        ),
        None => format!("{} falls inside the premium window", slice.start),
    };

    AuditStep {
        step_number,
        rule_id: rule_id(tier.bucket).to_string(),
        rule_name: tier.bucket.to_string(),
        input: serde_json::json!({
            "slice_start": slice.start.to_string(),
            "slice_end": slice.end.to_string(),
            "hours": slice.hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "hours_worked_before": hours_worked_before.map(|h| h.normalize().to_string())
        }),
        output: serde_json::json!({
            "bucket": tier.bucket,
            "multiplier": tier.multiplier.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{}: {} hours × ${} × {} = ${}",
            context,
            slice.hours.normalize(),
            hourly_rate.normalize(),
            tier.multiplier.normalize(),
            amount.normalize()
        ),
    }
}

fn bonus_step(
    step_number: u32,
    interval: &WorkInterval,
    profile: &CompensationProfile,
    bonus: Decimal,
) -> AuditStep {
    let sales = interval.sales_amount.unwrap_or_default();
    AuditStep {
        step_number,
        rule_id: "sales_bonus".to_string(),
        rule_name: "Sales Bonus".to_string(),
        input: serde_json::json!({
            "sales_amount": sales.normalize().to_string(),
            "bonus_percentage": profile.bonus_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": bonus.normalize().to_string()
        }),
        reasoning: format!(
            "${} in sales × {}% = ${}",
            sales.normalize(),
            profile.bonus_percentage.normalize(),
            bonus.normalize()
        ),
    }
}

fn travel_step(step_number: u32, travel: Decimal) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "travel_pay".to_string(),
        rule_name: "Travel Pay".to_string(),
        input: serde_json::json!({
            "travel_rate_per_shift": travel.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": travel.normalize().to_string()
        }),
        reasoning: format!("Flat travel rate of ${} per shift", travel.normalize()),
    }
}

fn skipped_interval_step(interval: &WorkInterval, reason: Option<SkipReason>) -> AuditStep {
    let (rule_id, rule_name, reasoning) = match reason {
        Some(SkipReason::MissingProfile) => (
            "missing_profile",
            "Missing Profile",
            format!(
                "No compensation profile {} supplied - interval earns nothing",
                interval.compensation_profile_id
            ),
        ),
        _ => (
            "empty_interval",
            "Empty Interval",
            format!(
                "Interval {} to {} does not start before it ends - interval earns nothing",
                interval.start, interval.end
            ),
        ),
    };

    AuditStep {
        step_number: 1,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "start": interval.start.to_string(),
            "end": interval.end.to_string(),
            "compensation_profile_id": interval.compensation_profile_id.to_string()
        }),
        output: serde_json::json!({
            "amount": "0"
        }),
        reasoning,
    }
}
