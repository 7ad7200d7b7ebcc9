//! ROI estimation for the savings calculator.
//!
//! water savings = monthly water cost × 12 × 40%
//! yield value   = acres × 25 000 × crop multiplier × 30%
//!
//! Both parts are rounded to whole currency units before summing, so the
//! total is always exactly their sum. Amounts that do not fit in a `u64`
//! are rejected as invalid input rather than saturated.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::crops::{CropCatalog, CropProfile};
use crate::error::EstimateError;
use crate::models::EstimateInput;

/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Share of water spend saved by smart irrigation
pub const WATER_SAVINGS_RATE: f64 = 0.40;
/// Base crop value per acre, in rupees
pub const BASE_VALUE_PER_ACRE: f64 = 25_000.0;
/// Expected yield increase
pub const YIELD_INCREASE_RATE: f64 = 0.30;

/// What to do with a crop identifier missing from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCropPolicy {
    /// Fail with `EstimateError::UnknownCrop`
    #[default]
    Reject,
    /// Substitute the catalog's first crop and log a warning
    UseDefault,
}

/// Projected annual savings, in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub water_savings: u64,
    pub yield_increase_value: u64,
    pub total_savings: u64,
}

pub struct RoiEstimator<'a> {
    catalog: &'a CropCatalog,
    policy: UnknownCropPolicy,
}

impl Default for RoiEstimator<'static> {
    fn default() -> Self {
        Self::new(CropCatalog::builtin())
    }
}

impl<'a> RoiEstimator<'a> {
    pub fn new(catalog: &'a CropCatalog) -> Self {
        Self {
            catalog,
            policy: UnknownCropPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnknownCropPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> UnknownCropPolicy {
        self.policy
    }

    /// Compute the savings projection for a validated input
    pub fn estimate(&self, input: &EstimateInput) -> Result<EstimateResult, EstimateError> {
        input.check()?;
        let crop = self.resolve_crop(&input.crop_identifier)?;

        let water_savings =
            round_currency(input.monthly_water_cost * MONTHS_PER_YEAR * WATER_SAVINGS_RATE)?;
        let yield_increase_value = round_currency(
            input.land_size_acres * BASE_VALUE_PER_ACRE * crop.yield_multiplier * YIELD_INCREASE_RATE,
        )?;
        let total_savings = water_savings
            .checked_add(yield_increase_value)
            .ok_or_else(out_of_range)?;

        let result = EstimateResult {
            water_savings,
            yield_increase_value,
            total_savings,
        };

        debug!(
            crop = %crop.identifier,
            acres = input.land_size_acres,
            total = result.total_savings,
            "ROI estimate computed"
        );

        Ok(result)
    }

    fn resolve_crop(&self, identifier: &str) -> Result<&'a CropProfile, EstimateError> {
        match self.catalog.find(identifier) {
            Some(crop) => Ok(crop),
            None => match self.policy {
                UnknownCropPolicy::Reject => Err(EstimateError::UnknownCrop(identifier.to_string())),
                UnknownCropPolicy::UseDefault => {
                    let crop = self
                        .catalog
                        .default_profile()
                        .ok_or_else(|| EstimateError::UnknownCrop(identifier.to_string()))?;
                    warn!(
                        requested = identifier,
                        substituted = %crop.identifier,
                        "unknown crop, using default profile"
                    );
                    Ok(crop)
                }
            },
        }
    }
}

/// Estimate savings with the built-in crop catalog and strict crop lookup
pub fn estimate_roi(
    land_size_acres: f64,
    monthly_water_cost: f64,
    crop_identifier: &str,
) -> Result<EstimateResult, EstimateError> {
    RoiEstimator::default().estimate(&EstimateInput::new(
        land_size_acres,
        monthly_water_cost,
        crop_identifier,
    ))
}

/// Largest amount representable in whole rupees. `u64::MAX as f64` rounds up to 2^64.
const MAX_CURRENCY: f64 = u64::MAX as f64;

/// Round half away from zero; inputs are non-negative after validation.
fn round_currency(amount: f64) -> Result<u64, EstimateError> {
    let rounded = amount.round().max(0.0);
    if rounded >= MAX_CURRENCY {
        return Err(out_of_range());
    }
    Ok(rounded as u64)
}

fn out_of_range() -> EstimateError {
    EstimateError::InvalidInput("estimated savings exceed the supported range".to_string())
}
