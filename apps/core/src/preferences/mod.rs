//! # Preferences Module
//!
//! User preferences owned by the UI shell: theme and language.
//! Persistence goes through the `PreferenceStore` port so the shell can
//! choose file-backed or in-memory storage. The assistant and the ROI
//! estimator never read these.

pub mod i18n;
pub mod store;
pub mod theme;

pub use i18n::{LanguageStore, Locale};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore, SharedStore};
pub use theme::{Theme, ThemeStore};
