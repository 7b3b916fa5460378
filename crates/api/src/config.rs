use std::path::PathBuf;
use std::str::FromStr;

use folio_db::remote::RemoteConfig;
use folio_events::EmailConfig;

/// Which persistence adapter backs the entity stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// JSON lists under `DATA_DIR`.
    #[default]
    Local,
    /// Tables on the hosted backend.
    Remote,
}

impl FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(StorageMode::Local),
            "remote" => Ok(StorageMode::Remote),
            other => Err(format!("unknown storage mode '{other}'")),
        }
    }
}

/// Log output format for the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except the
/// hosted backend credentials, which `remote` mode requires.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage_mode: StorageMode,
    /// Directory for local key-value storage (lists and preferences).
    pub data_dir: PathBuf,
    /// Directory holding the built site (`index.html`, `404.html`, assets).
    pub site_dir: PathBuf,
    /// Hosted backend; also needed for admin auth and image uploads.
    pub backend: Option<RemoteConfig>,
    pub email: EmailConfig,
    /// Analytics measurement id passed through to the landing page.
    pub analytics_id: Option<String>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_MODE`         | `local`                    |
    /// | `DATA_DIR`             | `./data`                   |
    /// | `SITE_DIR`             | `./site`                   |
    /// | `BACKEND_URL`          | — (required when remote)   |
    /// | `BACKEND_KEY`          | — (required when remote)   |
    /// | `ANALYTICS_ID`         | —                          |
    /// | `LOG_FORMAT`           | `pretty` (`json`)          |
    ///
    /// Email variables are documented on [`EmailConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let storage_mode: StorageMode = std::env::var("STORAGE_MODE")
            .unwrap_or_else(|_| "local".into())
            .parse()
            .unwrap_or_else(|e| panic!("STORAGE_MODE: {e}"));

        let backend = match (non_empty("BACKEND_URL"), non_empty("BACKEND_KEY")) {
            (Some(url), Some(key)) => Some(RemoteConfig::new(url, key)),
            _ => None,
        };
        if storage_mode == StorageMode::Remote && backend.is_none() {
            panic!("STORAGE_MODE=remote requires BACKEND_URL and BACKEND_KEY");
        }

        let log_format = match non_empty("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage_mode,
            data_dir: non_empty("DATA_DIR")
                .unwrap_or_else(|| "./data".into())
                .into(),
            site_dir: non_empty("SITE_DIR")
                .unwrap_or_else(|| "./site".into())
                .into(),
            backend,
            email: EmailConfig::from_env(),
            analytics_id: non_empty("ANALYTICS_ID"),
            log_format,
        }
    }
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
