//! Test support shared by the report service test suites.
//!
//! Provides unified logging initialization, helpers for signing arbitrary
//! claim sets, and assertions for the 401 rejection contract.

pub mod logging;
pub mod rejection;
pub mod tokens;
