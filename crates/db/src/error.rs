/// Errors from any persistence adapter.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The hosted backend answered with a non-2xx status.
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The hosted backend accepted an insert but returned no row.
    #[error("Backend returned no row")]
    EmptyResponse,

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be parsed back.
    #[error("Stored data under '{key}' is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Operation not supported by the {0} backend")]
    Unsupported(&'static str),
}

impl StoreError {
    /// Whether the backend rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, StoreError::Backend { status: 401 | 403, .. })
    }
}
