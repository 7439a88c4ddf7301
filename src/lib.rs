//! Shift Earnings Engine
//!
//! This crate computes gross earnings for worked time intervals under a
//! compensation policy that layers tiered overtime on top of a fixed
//! Friday-evening to Saturday-evening premium window ("Sabbath" pay), and
//! aggregates those earnings across many intervals for reporting.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
