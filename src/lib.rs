//! # loglens
//!
//! Environment-driven configuration for the loglens log-analysis service.
//!
//! Reads typed settings (API credentials, model names, analysis engine,
//! cache and rate limits) from the process environment or any explicit
//! name/value mapping, optionally seeded from a `.env` file, and validates
//! the handful of settings the service cannot start without.

pub mod config;
pub mod error;
pub mod telemetry;
