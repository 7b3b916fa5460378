//! Localised notices on top of the bus.

use std::sync::Arc;

use folio_core::i18n::{text, TextKey};
use folio_events::{Notice, NoticeBus};

use crate::preferences::PreferencesContext;

/// Publishes notices whose titles follow the current site language.
#[derive(Clone)]
pub struct Notifier {
    bus: Arc<NoticeBus>,
    preferences: Arc<PreferencesContext>,
}

impl Notifier {
    pub fn new(bus: Arc<NoticeBus>, preferences: Arc<PreferencesContext>) -> Self {
        Self { bus, preferences }
    }

    pub fn bus(&self) -> &Arc<NoticeBus> {
        &self.bus
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        text(key, self.preferences.language())
    }

    pub fn success(&self, title: TextKey, description: impl Into<String>) -> Notice {
        let notice = Notice::success(self.text(title), description);
        self.bus.publish(notice.clone());
        notice
    }

    pub fn error(&self, title: TextKey, description: impl Into<String>) -> Notice {
        let notice = Notice::error(self.text(title), description);
        self.bus.publish(notice.clone());
        notice
    }
}
