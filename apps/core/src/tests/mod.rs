//! Test Module
//!
//! ## Test Categories
//! - `assistant_tests`: intent priority, fallback, custom catalogs
//! - `roi_tests`: savings formula, validation, unknown crop policy
//! - `preferences_tests`: theme and language persistence
//! - `integration_tests`: chat and calculator flows end to end

pub mod assistant_tests;
pub mod preferences_tests;
