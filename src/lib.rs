//! Daily time-accounting engine for personal timecards
//!
//! This crate turns a day's clock-in/clock-out entries, the user's work
//! settings and per-day calendar metadata into a breakdown of standard time,
//! excess time, null time and four kinds of overtime. It also exposes the
//! engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
