//! # ROI Module
//!
//! Deterministic savings projection for the ROI calculator page.
//!
//! ## Components
//! - `crops`: static crop profile catalog
//! - `estimator`: the savings formula and its validation

pub mod crops;
pub mod estimator;

pub use crops::{CropCatalog, CropProfile};
pub use estimator::{estimate_roi, EstimateResult, RoiEstimator, UnknownCropPolicy};
