use std::sync::Arc;

use folio_core::i18n::Language;
use folio_core::preferences::{Preferences, Theme};

use super::LocalStorage;
use crate::error::StoreError;

pub const LANGUAGE_KEY: &str = "language";
pub const THEME_KEY: &str = "theme";

/// Persists [`Preferences`] under the same keys the browser used.
///
/// Values are stored as their plain codes (`"es"`, `"dark"`). Anything
/// unrecognised reads back as the default.
pub struct PreferenceStore {
    storage: Arc<LocalStorage>,
}

impl PreferenceStore {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }

    pub async fn load(&self) -> Result<Preferences, StoreError> {
        let language = match self.storage.get_item(LANGUAGE_KEY).await? {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored language preference");
                Language::default()
            }),
            None => Language::default(),
        };

        let theme = match self.storage.get_item(THEME_KEY).await? {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Ignoring stored theme preference");
                Theme::default()
            }),
            None => Theme::default(),
        };

        Ok(Preferences { language, theme })
    }

    pub async fn save_language(&self, language: Language) -> Result<(), StoreError> {
        self.storage.set_item(LANGUAGE_KEY, language.code()).await
    }

    pub async fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.storage.set_item(THEME_KEY, theme.code()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_storage_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(Arc::new(LocalStorage::open(dir.path()).unwrap()));
        assert_eq!(store.load().await.unwrap(), Preferences::default());
    }

    #[tokio::test]
    async fn saved_values_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(Arc::new(LocalStorage::open(dir.path()).unwrap()));

        store.save_language(Language::En).await.unwrap();
        store.save_theme(Theme::Light).await.unwrap();

        let prefs = store.load().await.unwrap();
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[tokio::test]
    async fn garbage_values_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(LocalStorage::open(dir.path()).unwrap());
        storage.set_item(LANGUAGE_KEY, "klingon").await.unwrap();

        let store = PreferenceStore::new(storage);
        assert_eq!(store.load().await.unwrap().language, Language::Es);
    }
}
