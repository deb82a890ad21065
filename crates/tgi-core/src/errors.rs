/// Core error type for the service.
///
/// Adapter crates map their specific errors into this type so the HTTP layer
/// can handle failures consistently (404 for lookups that miss, 500 for
/// everything unexpected).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    /// The handle resolved to neither a user nor a chat.
    #[error("Entity not found in Telegram database")]
    NotFound,

    /// Any other failure from the platform client, message preserved for
    /// diagnostics.
    #[error("{0}")]
    Platform(String),

    /// Unexpected fault in formatting/routing; never leaked to clients.
    #[error("internal error: {0}")]
    Internal(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the "not found" class: these surface as HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
