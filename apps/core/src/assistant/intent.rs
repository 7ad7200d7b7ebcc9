//! Intent matching using ordered keyword rules.
//!
//! Rules are evaluated top to bottom and the first rule whose keywords
//! appear in the lowercased input wins. No scoring is involved: when an
//! utterance touches several topics, rule order is the tie-break.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use super::catalog::ResponseCatalog;
use crate::error::AppError;

/// Topic a user utterance is about.
///
/// Declaration order is the default matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (hello, hi, hey)
    Greeting,
    /// Pricing and plans
    Pricing,
    /// Smart irrigation and water usage
    Irrigation,
    /// Sensor hardware and installation
    Sensors,
    /// Government schemes and subsidies
    Schemes,
    /// Technical support and contact
    Support,
    /// Benefits of the platform
    Benefits,
    /// Regions served
    States,
    /// Supported crops
    Crops,
    /// Nothing matched
    Fallback,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Intent {
    /// Every intent, in default priority order.
    pub const ALL: [Intent; 10] = [
        Intent::Greeting,
        Intent::Pricing,
        Intent::Irrigation,
        Intent::Sensors,
        Intent::Schemes,
        Intent::Support,
        Intent::Benefits,
        Intent::States,
        Intent::Crops,
        Intent::Fallback,
    ];

    /// Returns the catalog key for the intent
    pub fn key(&self) -> &'static str {
        match self {
            Intent::Greeting => "hello",
            Intent::Pricing => "pricing",
            Intent::Irrigation => "irrigation",
            Intent::Sensors => "sensors",
            Intent::Schemes => "schemes",
            Intent::Support => "support",
            Intent::Benefits => "benefits",
            Intent::States => "states",
            Intent::Crops => "crops",
            Intent::Fallback => "default",
        }
    }

    /// Looks an intent up by its catalog key
    pub fn from_key(key: &str) -> Option<Intent> {
        Intent::ALL.into_iter().find(|intent| intent.key() == key)
    }
}

/// A keyword set bound to an intent.
///
/// The rule is satisfied when the normalized input contains any keyword
/// as a substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: Vec<String>,
}

impl IntentRule {
    /// Create a rule; keywords are lowercased so they line up with normalized input.
    pub fn new<I, K>(intent: Intent, keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Self {
            intent,
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Returns the first keyword found in `normalized`, if any
    fn first_hit(&self, normalized: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| normalized.contains(keyword))
    }
}

/// Outcome of classifying one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMatch {
    /// Selected intent
    pub intent: Intent,
    /// Keyword that satisfied the rule, `None` for the fallback
    pub matched_keyword: Option<String>,
}

static DEFAULT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        IntentRule::new(Intent::Greeting, ["hello", "hi", "hey"]),
        IntentRule::new(Intent::Pricing, ["price", "cost", "plan"]),
        IntentRule::new(Intent::Irrigation, ["irrigation", "water"]),
        IntentRule::new(Intent::Sensors, ["sensor", "install", "setup"]),
        IntentRule::new(Intent::Schemes, ["scheme", "government", "subsidy"]),
        IntentRule::new(Intent::Support, ["support", "help", "contact"]),
        IntentRule::new(Intent::Benefits, ["benefit", "advantage", "why"]),
        IntentRule::new(Intent::States, ["state", "location", "area"]),
        IntentRule::new(Intent::Crops, ["crop", "wheat", "rice", "cotton"]),
    ]
});

static DEFAULT_RESPONDER: LazyLock<IntentResponder> = LazyLock::new(IntentResponder::default);

/// Maps free text to exactly one canned reply
#[derive(Debug, Clone)]
pub struct IntentResponder {
    rules: Vec<IntentRule>,
    catalog: ResponseCatalog,
}

impl Default for IntentResponder {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
            catalog: ResponseCatalog::default(),
        }
    }
}

impl IntentResponder {
    /// Build a responder from custom rules and replies.
    ///
    /// Every rule intent must have a reply in the catalog, otherwise
    /// `respond` could not stay total.
    pub fn new(rules: Vec<IntentRule>, catalog: ResponseCatalog) -> Result<Self, AppError> {
        if let Some(rule) = rules.iter().find(|r| !catalog.contains(r.intent)) {
            return Err(AppError::Config(format!(
                "no reply registered for intent '{}'",
                rule.intent
            )));
        }
        Ok(Self { rules, catalog })
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// The reply catalog backing this responder
    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    /// Classify an utterance. Empty or unmatched input yields the fallback.
    pub fn classify(&self, text: &str) -> IntentMatch {
        let normalized = text.to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.first_hit(&normalized) {
                debug!(intent = %rule.intent, keyword, "intent rule matched");
                return IntentMatch {
                    intent: rule.intent,
                    matched_keyword: Some(keyword.to_string()),
                };
            }
        }

        debug!("no intent rule matched, using fallback");
        IntentMatch {
            intent: Intent::Fallback,
            matched_keyword: None,
        }
    }

    /// Produce the reply for an utterance
    pub fn respond(&self, text: &str) -> &str {
        let matched = self.classify(text);
        self.catalog.reply(matched.intent)
    }
}

/// Reply to `text` with the built-in rules and catalog
pub fn respond(text: &str) -> &'static str {
    let responder: &'static IntentResponder = &DEFAULT_RESPONDER;
    responder.respond(text)
}
