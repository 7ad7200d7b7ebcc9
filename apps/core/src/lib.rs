//! RKD IntelliTech core.
//!
//! The two computations behind the smart farming site, the rule-based
//! assistant and the ROI estimator, plus the user preferences the UI
//! shell persists.

pub mod assistant;
pub mod config;
pub mod error;
pub mod fs_manager;
pub mod models;
pub mod preferences;
pub mod roi;

pub use assistant::{respond, Conversation, Intent, IntentResponder};
pub use error::{AppError, EstimateError};
pub use models::{ConversationMessage, EstimateInput, Sender};
pub use roi::{estimate_roi, EstimateResult, RoiEstimator, UnknownCropPolicy};

#[cfg(test)]
mod tests;
