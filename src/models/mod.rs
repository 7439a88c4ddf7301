//! Core data models for the Shift Earnings Engine.
//!
//! This module contains the plain data the engine consumes and produces.

mod audit;
mod breakdown;
mod pay_period;
mod profile;
mod work_interval;

pub use audit::AuditStep;
pub use breakdown::{EarningsBreakdown, PayBucket};
pub use pay_period::PayPeriod;
pub use profile::{CompensationProfile, DEFAULT_OVERTIME_THRESHOLD_HOURS};
pub use work_interval::WorkInterval;

pub(crate) use work_interval::hours_between;
