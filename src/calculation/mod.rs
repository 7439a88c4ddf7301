//! Calculation logic for the Shift Earnings Engine.
//!
//! This module contains premium window detection, overtime tier resolution,
//! the flat bonus and travel amounts, hour-by-hour slicing and pricing of a
//! single work interval, and aggregation across many intervals.

mod aggregator;
mod allowances;
mod premium_window;
mod rate_tier;
mod shift_slicer;

pub use aggregator::{EarningsSummary, aggregate, aggregate_period};
pub use allowances::{calculate_sales_bonus, calculate_travel_pay};
pub use premium_window::{
    PREMIUM_WINDOW_FRIDAY_START_HOUR, PREMIUM_WINDOW_SATURDAY_END_HOUR, SABBATH_MULTIPLIER,
    is_premium_window,
};
pub use rate_tier::{
    OVERTIME_TIER_1_MULTIPLIER, OVERTIME_TIER_2_MULTIPLIER, OVERTIME_TIER_2_OFFSET_HOURS,
    REGULAR_MULTIPLIER, RateTier, resolve_tier,
};
pub use shift_slicer::{ShiftCalculation, TimeSlice, calculate_shift, compute_earnings, slice_interval};
