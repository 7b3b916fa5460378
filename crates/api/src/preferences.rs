//! Process-wide visitor preferences.
//!
//! [`PreferencesContext`] is built once at startup from persisted values and
//! handed to whoever needs the current language or theme. Every change is
//! written through to local storage before it becomes visible.

use std::sync::RwLock;

use folio_core::i18n::Language;
use folio_core::preferences::{Preferences, Theme, UpdatePreferences};
use folio_db::local::PreferenceStore;
use folio_db::StoreError;
use tokio::sync::Mutex;

pub struct PreferencesContext {
    store: PreferenceStore,
    current: RwLock<Preferences>,
    /// Held across read-persist-publish so changes never interleave.
    change: Mutex<()>,
}

impl PreferencesContext {
    /// Read the persisted preferences (defaults where nothing is stored).
    pub async fn load(store: PreferenceStore) -> Result<Self, StoreError> {
        let current = store.load().await?;
        tracing::debug!(language = %current.language, theme = %current.theme, "Preferences loaded");
        Ok(Self {
            store,
            current: RwLock::new(current),
            change: Mutex::new(()),
        })
    }

    pub fn get(&self) -> Preferences {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn language(&self) -> Language {
        self.get().language
    }

    pub async fn set_language(&self, language: Language) -> Result<Preferences, StoreError> {
        let _change = self.change.lock().await;
        self.apply_language(language).await
    }

    /// Flip between the two languages.
    pub async fn toggle_language(&self) -> Result<Preferences, StoreError> {
        let _change = self.change.lock().await;
        self.apply_language(self.language().toggle()).await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<Preferences, StoreError> {
        let _change = self.change.lock().await;
        self.apply_theme(theme).await
    }

    /// Apply whichever fields are present.
    pub async fn update(&self, update: UpdatePreferences) -> Result<Preferences, StoreError> {
        let _change = self.change.lock().await;
        if let Some(language) = update.language {
            self.apply_language(language).await?;
        }
        if let Some(theme) = update.theme {
            self.apply_theme(theme).await?;
        }
        Ok(self.get())
    }

    async fn apply_language(&self, language: Language) -> Result<Preferences, StoreError> {
        self.store.save_language(language).await?;
        Ok(self.publish(|prefs| prefs.language = language))
    }

    async fn apply_theme(&self, theme: Theme) -> Result<Preferences, StoreError> {
        self.store.save_theme(theme).await?;
        Ok(self.publish(|prefs| prefs.theme = theme))
    }

    fn publish(&self, f: impl FnOnce(&mut Preferences)) -> Preferences {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        f(&mut guard);
        *guard
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use folio_db::local::LocalStorage;

    use super::*;

    async fn context(dir: &tempfile::TempDir) -> PreferencesContext {
        let storage = Arc::new(LocalStorage::open(dir.path()).unwrap());
        PreferencesContext::load(PreferenceStore::new(storage))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn language_survives_recreation() {
        let dir = tempfile::tempdir().unwrap();

        let first = context(&dir).await;
        assert_eq!(first.language(), Language::Es);
        first.set_language(Language::En).await.unwrap();
        drop(first);

        assert_eq!(context(&dir).await.language(), Language::En);
    }

    #[tokio::test]
    async fn toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;

        assert_eq!(ctx.toggle_language().await.unwrap().language, Language::En);
        assert_eq!(ctx.toggle_language().await.unwrap().language, Language::Es);
        assert_eq!(context(&dir).await.language(), Language::Es);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_toggles_each_flip_once() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Arc::new(context(&dir).await);

        let toggles: Vec<_> = (0..6)
            .map(|_| {
                let ctx = ctx.clone();
                tokio::spawn(async move { ctx.toggle_language().await.unwrap() })
            })
            .collect();
        for toggle in toggles {
            toggle.await.unwrap();
        }

        // An even number of flips lands back on the starting language.
        assert_eq!(ctx.language(), Language::Es);
        assert_eq!(context(&dir).await.language(), Language::Es);
    }

    #[tokio::test]
    async fn partial_update_keeps_other_field() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir).await;

        let prefs = ctx
            .update(UpdatePreferences {
                language: None,
                theme: Some(Theme::Light),
            })
            .await
            .unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::Es);
    }
}
