//! Canned replies for the farming assistant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::intent::Intent;
use crate::error::AppError;

/// Suggested questions shown under the chat input
pub const QUICK_PROMPTS: &[&str] = &[
    "How does smart irrigation work?",
    "What are the pricing plans?",
    "How to install IoT sensors?",
    "Government scheme information",
    "Technical support",
];

/// First message of every conversation
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your RKD IntelliTech assistant. How can I help you today?";

const DEFAULT_REPLIES: &[(Intent, &str)] = &[
    (
        Intent::Greeting,
        "Hello! Welcome to RKD IntelliTech. I'm here to help you with all your smart farming questions.",
    ),
    (
        Intent::Pricing,
        "Our IoT farming solutions start from ₹25,000 per acre. This includes sensors, controllers, and mobile app access. Would you like to know more about specific packages?",
    ),
    (
        Intent::Irrigation,
        "Smart irrigation uses soil moisture sensors and weather data to automatically water your crops only when needed. This can save up to 40% water while increasing yields by 30%.",
    ),
    (
        Intent::Sensors,
        "Our IoT sensors are easy to install with plug-and-play technology. Installation typically takes under 2 hours and includes soil moisture sensors, weather stations, and pump controllers.",
    ),
    (
        Intent::Schemes,
        "There are several government schemes available for farmers including PM-KISAN (₹6,000/year), Crop Insurance, and Credit Card facilities. I can help you find relevant schemes for your state.",
    ),
    (
        Intent::Support,
        "We provide 24/7 technical support through phone, chat, and field visits. Our experts speak local languages and understand regional farming practices.",
    ),
    (
        Intent::Benefits,
        "Key benefits include: 40% water savings, 30% yield increase, automated irrigation, real-time monitoring, weather alerts, and expert support in local languages.",
    ),
    (
        Intent::States,
        "We currently serve farmers across all Indian states with localized support in regional languages. Each state has specific crop recommendations and government schemes.",
    ),
    (
        Intent::Crops,
        "Our system works with all major crops including wheat, rice, cotton, sugarcane, vegetables, and fruits. The AI adapts to your specific crop requirements.",
    ),
    (
        Intent::Fallback,
        "I understand you're asking about farming solutions. Could you be more specific? You can ask about pricing, irrigation, sensors, government schemes, or technical support.",
    ),
];

/// Ordered mapping from intent to reply.
///
/// A fallback reply is always present, so every lookup succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ResponseCatalog {
    replies: BTreeMap<Intent, String>,
    fallback: String,
}

/// Unchecked wire form of a catalog
#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    replies: BTreeMap<Intent, String>,
    fallback: String,
}

impl TryFrom<RawCatalog> for ResponseCatalog {
    type Error = AppError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let fallback = std::iter::once((Intent::Fallback, raw.fallback));
        Self::new(raw.replies.into_iter().chain(fallback))
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        let replies: BTreeMap<Intent, String> = DEFAULT_REPLIES
            .iter()
            .filter(|(intent, _)| *intent != Intent::Fallback)
            .map(|(intent, reply)| (*intent, reply.to_string()))
            .collect();

        let fallback = DEFAULT_REPLIES
            .iter()
            .find(|(intent, _)| *intent == Intent::Fallback)
            .map(|(_, reply)| reply.to_string())
            .unwrap_or_default();

        Self { replies, fallback }
    }
}

impl ResponseCatalog {
    /// Build a catalog from `(intent, reply)` pairs.
    ///
    /// Fails if no `Intent::Fallback` reply is supplied or a reply is blank.
    pub fn new<I, R>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (Intent, R)>,
        R: Into<String>,
    {
        let mut replies = BTreeMap::new();
        let mut fallback = None;

        for (intent, reply) in entries {
            let reply = reply.into();
            if reply.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "reply for intent '{}' is empty",
                    intent
                )));
            }
            if intent == Intent::Fallback {
                fallback = Some(reply);
            } else {
                replies.insert(intent, reply);
            }
        }

        let fallback = fallback
            .ok_or_else(|| AppError::Config("response catalog has no fallback reply".to_string()))?;

        Ok(Self { replies, fallback })
    }

    /// Whether a reply is registered for `intent`
    pub fn contains(&self, intent: Intent) -> bool {
        intent == Intent::Fallback || self.replies.contains_key(&intent)
    }

    /// The reply bound to `intent`, or the fallback reply
    pub fn reply(&self, intent: Intent) -> &str {
        self.replies
            .get(&intent)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// The reply used when no rule matches
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Number of entries, fallback included
    pub fn len(&self) -> usize {
        self.replies.len() + 1
    }

    /// A catalog always holds its fallback reply
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate `(intent, reply)` in intent priority order, fallback last
    pub fn iter(&self) -> impl Iterator<Item = (Intent, &str)> {
        self.replies
            .iter()
            .map(|(intent, reply)| (*intent, reply.as_str()))
            .chain(std::iter::once((Intent::Fallback, self.fallback.as_str())))
    }
}
