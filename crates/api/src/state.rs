use std::sync::Arc;

use folio_core::message::ContactMessage;
use folio_core::project::Project;
use folio_core::seed::default_projects;
use folio_core::testimonial::Testimonial;
use folio_db::local::{
    LocalListBackend, LocalStorage, PreferenceStore, MESSAGES_KEY, PROJECTS_KEY,
    TESTIMONIALS_KEY,
};
use folio_db::remote::{AuthClient, RemoteClient, RemoteTable, StorageClient};
use folio_db::{Backend, StoreError};
use folio_events::{EmailDelivery, NoticeBus};

use crate::config::{ServerConfig, StorageMode};
use crate::entities::EntityStore;
use crate::middleware::session::SessionGate;
use crate::notify::Notifier;
use crate::preferences::PreferencesContext;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub projects: Arc<EntityStore<Project>>,
    pub testimonials: Arc<EntityStore<Testimonial>>,
    pub messages: Arc<EntityStore<ContactMessage>>,
    pub preferences: Arc<PreferencesContext>,
    pub notifier: Notifier,
    pub gate: Arc<SessionGate>,
    pub email: Arc<EmailDelivery>,
    /// Image uploads; `None` without a hosted backend.
    pub storage: Option<Arc<StorageClient>>,
}

impl AppState {
    /// Wire stores, clients and the notice bus from configuration.
    ///
    /// Stores start unloaded; call [`load_all`](Self::load_all) before
    /// serving.
    pub async fn build(config: ServerConfig) -> Result<Self, StoreError> {
        let local = Arc::new(LocalStorage::open(&config.data_dir)?);
        let preferences = Arc::new(PreferencesContext::load(PreferenceStore::new(
            Arc::clone(&local),
        ))
        .await?);
        let bus = Arc::new(NoticeBus::default());
        let notifier = Notifier::new(bus, Arc::clone(&preferences));

        let remote = config.backend.clone().map(RemoteClient::new);

        let (projects, testimonials, messages): (
            Arc<dyn Backend<Project>>,
            Arc<dyn Backend<Testimonial>>,
            Arc<dyn Backend<ContactMessage>>,
        ) = match (config.storage_mode, &remote) {
            (StorageMode::Remote, Some(client)) => (
                Arc::new(RemoteTable::new(client.clone())),
                Arc::new(RemoteTable::new(client.clone())),
                Arc::new(RemoteTable::new(client.clone())),
            ),
            (StorageMode::Remote, None) => {
                return Err(StoreError::Unsupported("remote (no BACKEND_URL)"));
            }
            (StorageMode::Local, _) => (
                Arc::new(LocalListBackend::new(
                    Arc::clone(&local),
                    PROJECTS_KEY,
                    default_projects(),
                )),
                Arc::new(LocalListBackend::new(
                    Arc::clone(&local),
                    TESTIMONIALS_KEY,
                    Vec::new(),
                )),
                Arc::new(LocalListBackend::new(
                    Arc::clone(&local),
                    MESSAGES_KEY,
                    Vec::new(),
                )),
            ),
        };

        Ok(Self {
            projects: Arc::new(EntityStore::new(projects, notifier.clone())),
            testimonials: Arc::new(EntityStore::new(testimonials, notifier.clone())),
            messages: Arc::new(EntityStore::new(messages, notifier.clone())),
            preferences,
            notifier,
            gate: Arc::new(SessionGate::new(remote.clone().map(AuthClient::new))),
            email: Arc::new(EmailDelivery::new(config.email.clone())),
            storage: remote.map(|client| Arc::new(StorageClient::new(client))),
            config: Arc::new(config),
        })
    }

    /// Initial fetch for every store.
    pub async fn load_all(&self) {
        tokio::join!(
            self.projects.load(),
            self.testimonials.load(),
            self.messages.load(),
        );
    }

    pub fn stores_loaded(&self) -> bool {
        self.projects.is_loaded() && self.testimonials.is_loaded() && self.messages.is_loaded()
    }
}
