use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::EstimateError;

/// Who authored a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Represents a single message within a chat conversation.
///
/// Messages are created on every send and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    /// Strictly increasing identifier within its conversation.
    pub id: u64,
    /// The author of the message.
    pub sender: Sender,
    /// The text content of the message.
    pub text: String,
    /// When the message was created.
    pub sent_at: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn new(id: u64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

/// Inputs to the ROI estimator as entered in the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInput {
    /// Cultivated land in acres. Must be strictly positive.
    #[validate(range(exclusive_min = 0.0))]
    pub land_size_acres: f64,
    /// Current monthly spend on water. Must not be negative.
    #[validate(range(min = 0.0))]
    pub monthly_water_cost: f64,
    /// Identifier of the primary crop (e.g. "wheat").
    #[validate(length(min = 1))]
    pub crop_identifier: String,
}

impl EstimateInput {
    pub fn new(
        land_size_acres: f64,
        monthly_water_cost: f64,
        crop_identifier: impl Into<String>,
    ) -> Self {
        Self {
            land_size_acres,
            monthly_water_cost,
            crop_identifier: crop_identifier.into(),
        }
    }

    /// Checks the numeric bounds of the input.
    ///
    /// Range rules do not reject NaN, so finiteness is checked first.
    pub fn check(&self) -> Result<(), EstimateError> {
        if !self.land_size_acres.is_finite() {
            return Err(EstimateError::InvalidInput(format!(
                "land size must be a finite number, got {}",
                self.land_size_acres
            )));
        }
        if !self.monthly_water_cost.is_finite() {
            return Err(EstimateError::InvalidInput(format!(
                "monthly water cost must be a finite number, got {}",
                self.monthly_water_cost
            )));
        }
        self.validate()?;
        Ok(())
    }
}
