//! Static translation lookup and the persisted language preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

use super::store::PreferenceStore;
use crate::error::AppError;

/// Storage key for the persisted language state
pub const LANGUAGE_STORAGE_KEY: &str = "language-storage";

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pa,
    Hi,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Pa, Locale::Hi];

    /// Returns the language code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pa => "pa",
            Locale::Hi => "hi",
        }
    }

    /// Native name shown in the language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Pa => "ਪੰਜਾਬੀ",
            Locale::Hi => "हिन्दी",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::Pa => PA,
            Locale::Hi => HI,
        }
    }

    /// Translation for `key`, if this locale has one
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| AppError::Validation(format!("unsupported language '{}'", s)))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageState {
    current_language: Locale,
}

/// Language preference backed by an injected store
pub struct LanguageStore<S: PreferenceStore> {
    store: S,
    current: Locale,
}

impl<S: PreferenceStore> LanguageStore<S> {
    /// Load the persisted language, defaulting to English
    pub fn load(store: S) -> Result<Self, AppError> {
        let current = match store.get(LANGUAGE_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<LanguageState>(&raw) {
                Ok(state) => state.current_language,
                Err(e) => {
                    warn!("Discarding unreadable language state: {}", e);
                    Locale::default()
                }
            },
            None => Locale::default(),
        };

        Ok(Self { store, current })
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn set_language(&mut self, locale: Locale) -> Result<(), AppError> {
        self.current = locale;
        let raw = serde_json::to_string(&LanguageState {
            current_language: locale,
        })?;
        self.store.set(LANGUAGE_STORAGE_KEY, &raw)?;
        info!("Language set to {}", locale);
        Ok(())
    }

    /// Translate `key` for the current language, echoing the key when missing
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.current.lookup(key).unwrap_or(key)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.roi", "ROI Calculator"),
    ("nav.hardware", "Hardware"),
    ("nav.map", "Success Stories"),
    ("nav.solution", "Solution"),
    ("nav.app", "Mobile App"),
    ("roi.title", "Calculate Your Savings"),
    ("roi.subtitle", "See how much you can save with smart farming"),
    ("roi.land.label", "Land Size (Acres)"),
    ("roi.water.label", "Monthly Water Cost (₹)"),
    ("roi.crop.label", "Primary Crop"),
    ("roi.calculate", "Calculate Savings"),
    ("roi.result.title", "Your Projected Annual Savings"),
    ("roi.result.water", "Water Cost Reduction"),
    ("roi.result.yield", "Increased Yield Value"),
    ("roi.result.total", "Total Annual Savings"),
    ("status.optimal", "Optimal"),
    ("status.low", "Low"),
    ("status.critical", "Critical"),
    ("status.good", "Good"),
    ("status.warning", "Warning"),
    ("status.none", "No Alerts"),
    ("crop.wheat", "Wheat"),
    ("crop.rice", "Rice"),
    ("crop.cotton", "Cotton"),
    ("crop.sugarcane", "Sugarcane"),
    ("crop.maize", "Maize"),
];

const PA: &[(&str, &str)] = &[
    ("nav.home", "ਘਰ"),
    ("nav.roi", "ROI ਕੈਲਕੁਲੇਟਰ"),
    ("nav.hardware", "ਹਾਰਡਵੇਅਰ"),
    ("nav.map", "ਸਫਲਤਾ ਦੀਆਂ ਕਹਾਣੀਆਂ"),
    ("nav.solution", "ਹੱਲ"),
    ("nav.app", "ਮੋਬਾਈਲ ਐਪ"),
    ("roi.title", "ਆਪਣੀ ਬਚਤ ਦੀ ਗਣਨਾ ਕਰੋ"),
    ("roi.subtitle", "ਦੇਖੋ ਕਿ ਤੁਸੀਂ ਸਮਾਰਟ ਖੇਤੀ ਨਾਲ ਕਿੰਨੀ ਬਚਤ ਕਰ ਸਕਦੇ ਹੋ"),
    ("roi.land.label", "ਜ਼ਮੀਨ ਦਾ ਆਕਾਰ (ਏਕੜ)"),
    ("roi.water.label", "ਮਾਸਿਕ ਪਾਣੀ ਦੀ ਲਾਗਤ (₹)"),
    ("roi.crop.label", "ਮੁੱਖ ਫਸਲ"),
    ("roi.calculate", "ਬਚਤ ਦੀ ਗਣਨਾ ਕਰੋ"),
    ("roi.result.title", "ਤੁਹਾਡੀ ਅਨੁਮਾਨਿਤ ਸਾਲਾਨਾ ਬਚਤ"),
    ("roi.result.water", "ਪਾਣੀ ਦੀ ਲਾਗਤ ਵਿੱਚ ਕਮੀ"),
    ("roi.result.yield", "ਵਧੀ ਹੋਈ ਪੈਦਾਵਾਰ ਦਾ ਮੁੱਲ"),
    ("roi.result.total", "ਕੁੱਲ ਸਾਲਾਨਾ ਬਚਤ"),
    ("status.optimal", "ਸਰਵੋਤਮ"),
    ("status.low", "ਘੱਟ"),
    ("status.critical", "ਗੰਭੀਰ"),
    ("status.good", "ਚੰਗਾ"),
    ("status.warning", "ਚੇਤਾਵਨੀ"),
    ("status.none", "ਕੋਈ ਅਲਰਟ ਨਹੀਂ"),
    ("crop.wheat", "ਕਣਕ"),
    ("crop.rice", "ਚਾਵਲ"),
    ("crop.cotton", "ਕਪਾਹ"),
    ("crop.sugarcane", "ਗੰਨਾ"),
    ("crop.maize", "ਮੱਕੀ"),
];

const HI: &[(&str, &str)] = &[
    ("nav.home", "होम"),
    ("nav.roi", "ROI कैलकुलेटर"),
    ("nav.hardware", "हार्डवेयर"),
    ("nav.map", "सफलता की कहानियां"),
    ("nav.solution", "समाधान"),
    ("nav.app", "मोबाइल ऐप"),
    ("roi.title", "अपनी बचत की गणना करें"),
    ("roi.subtitle", "देखें कि स्मार्ट खेती से आप कितनी बचत कर सकते हैं"),
    ("roi.land.label", "भूमि का आकार (एकड़)"),
    ("roi.water.label", "मासिक पानी की लागत (₹)"),
    ("roi.crop.label", "मुख्य फसल"),
    ("roi.calculate", "बचत की गणना करें"),
    ("roi.result.title", "आपकी अनुमानित वार्षिक बचत"),
    ("roi.result.water", "पानी की लागत में कमी"),
    ("roi.result.yield", "बढ़ी हुई उत्पादन का मूल्य"),
    ("roi.result.total", "कुल वार्षिक बचत"),
    ("status.optimal", "उत्तम"),
    ("status.low", "कम"),
    ("status.critical", "गंभीर"),
    ("status.good", "अच्छा"),
    ("status.warning", "चेतावनी"),
    ("status.none", "कोई अलर्ट नहीं"),
    ("crop.wheat", "गेहूं"),
    ("crop.rice", "चावल"),
    ("crop.cotton", "कपास"),
    ("crop.sugarcane", "गन्ना"),
    ("crop.maize", "मक्का"),
];
