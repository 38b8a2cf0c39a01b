//! Monthly wage computation engine for shift-working residential-care
//! guides.
//!
//! Reports logged against a civil date are resolved onto 08:00-to-08:00
//! work-days, decomposed into typed segments (work, standby, vacation,
//! sick, travel, escort), chained across short gaps, and tiered by
//! cumulative minutes into a month's wage totals. [`engine`] is the
//! entry point most callers want; [`config`] is a YAML-fixture loader for
//! tests and local tooling, not production use.

#![warn(missing_docs)]

pub mod chain_wage;
pub mod config;
pub mod constants;
pub mod daily_map;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;
pub mod monthly_aggregator;
pub mod segment_builder;
pub mod time_model;
