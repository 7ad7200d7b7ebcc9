//! Light/dark theme preference.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::store::PreferenceStore;
use crate::error::AppError;

/// Storage key for the persisted theme state
pub const THEME_STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// CSS class the UI shell applies to the document root, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeState {
    is_dark: Option<bool>,
}

/// Theme preference backed by an injected store
pub struct ThemeStore<S: PreferenceStore> {
    store: S,
    is_dark: Option<bool>,
}

impl<S: PreferenceStore> ThemeStore<S> {
    /// Load the persisted theme, if any
    pub fn load(store: S) -> Result<Self, AppError> {
        let state = match store.get(THEME_STORAGE_KEY)? {
            Some(raw) => serde_json::from_str::<ThemeState>(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable theme state: {}", e);
                ThemeState::default()
            }),
            None => ThemeState::default(),
        };

        Ok(Self {
            store,
            is_dark: state.is_dark,
        })
    }

    /// Current theme; light until something is stored or initialized
    pub fn theme(&self) -> Theme {
        if self.is_dark.unwrap_or(false) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether a preference has been stored
    pub fn is_set(&self) -> bool {
        self.is_dark.is_some()
    }

    /// Apply the stored preference, or adopt the system one when nothing is stored
    pub fn initialize(&mut self, system_prefers_dark: bool) -> Result<Theme, AppError> {
        if self.is_dark.is_none() {
            self.set_dark(system_prefers_dark)?;
        }
        Ok(self.theme())
    }

    pub fn set_dark(&mut self, is_dark: bool) -> Result<(), AppError> {
        self.is_dark = Some(is_dark);
        let raw = serde_json::to_string(&ThemeState {
            is_dark: self.is_dark,
        })?;
        self.store.set(THEME_STORAGE_KEY, &raw)?;
        info!("Theme set to {:?}", self.theme());
        Ok(())
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) -> Result<Theme, AppError> {
        let next = !self.theme().is_dark();
        self.set_dark(next)?;
        Ok(self.theme())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
