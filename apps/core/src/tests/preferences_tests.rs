//! Preferences Tests
//!
//! Theme and language state persisted through the file-backed store.

use crate::fs_manager::PortablePathManager;
use crate::preferences::{
    JsonFileStore, LanguageStore, Locale, MemoryStore, PreferenceStore, SharedStore, Theme,
    ThemeStore,
};
use tempfile::tempdir;

#[cfg(test)]
mod file_backed_tests {
    use super::*;

    #[test]
    fn test_theme_and_language_share_one_file() {
        let dir = tempdir().unwrap();
        let paths = PortablePathManager::new(dir.path().join("data"));
        paths.init().unwrap();

        {
            let store = SharedStore::new(JsonFileStore::open(paths.preferences_file()).unwrap());
            let mut themes = ThemeStore::load(store.clone()).unwrap();
            let mut languages = LanguageStore::load(store).unwrap();

            themes.set_dark(true).unwrap();
            languages.set_language(Locale::Pa).unwrap();
        }

        let store = SharedStore::new(JsonFileStore::open(paths.preferences_file()).unwrap());
        let themes = ThemeStore::load(store.clone()).unwrap();
        let languages = LanguageStore::load(store).unwrap();

        assert_eq!(themes.theme(), Theme::Dark);
        assert_eq!(languages.current(), Locale::Pa);
        assert_eq!(languages.t("roi.result.total"), "ਕੁੱਲ ਸਾਲਾਨਾ ਬਚਤ");
    }

    #[test]
    fn test_fresh_install_defaults() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("preferences.json")).unwrap();
        let shared = SharedStore::new(store);

        let mut themes = ThemeStore::load(shared.clone()).unwrap();
        let languages = LanguageStore::load(shared).unwrap();

        assert!(!themes.is_set());
        assert_eq!(themes.initialize(true).unwrap(), Theme::Dark);
        assert_eq!(languages.current(), Locale::En);
        assert_eq!(languages.t("nav.roi"), "ROI Calculator");
    }

    #[test]
    fn test_unknown_language_in_storage_falls_back() {
        let mut store = MemoryStore::new();
        store
            .set("language-storage", r#"{"currentLanguage":"fr"}"#)
            .unwrap();

        let languages = LanguageStore::load(store).unwrap();
        assert_eq!(languages.current(), Locale::En);
    }

    #[test]
    fn test_crop_labels_translated_in_every_locale() {
        let mut languages = LanguageStore::load(MemoryStore::new()).unwrap();

        for locale in Locale::ALL {
            languages.set_language(locale).unwrap();
            for crop in crate::roi::CropCatalog::builtin().profiles() {
                let key = crop.label_key();
                assert_ne!(languages.t(&key), key, "{} missing {}", locale, key);
            }
        }
    }
}
