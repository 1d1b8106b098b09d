use thiserror::Error;

/// Terminal failure of a batch fetch, classified into the two kinds the
/// service surfaces to callers.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The catalog rejected our credentials somewhere along the way.
    #[error("Failed to authenticate with the card catalog: {0}. Verify the configured API key.")]
    Authentication(String),

    /// Any other terminal fetch failure.
    #[error("{0}")]
    Fetch(String),
}

impl FetchError {
    /// Whether an error message carries the catalog's authorization
    /// signature.
    #[must_use]
    pub fn is_auth_message(message: &str) -> bool {
        let message = message.to_lowercase();
        message.contains("unauthorized") || message.contains("api key")
    }

    /// Classify a terminal failure. `saw_auth_error` is set when any earlier
    /// request in the same fetch failed with the authorization signature.
    #[must_use]
    pub fn classify(saw_auth_error: bool, message: String) -> Self {
        if saw_auth_error || Self::is_auth_message(&message) {
            Self::Authentication(message)
        } else {
            Self::Fetch(message)
        }
    }
}
