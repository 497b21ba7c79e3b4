use thiserror::Error;

/// Errors that can occur while talking to the meal provider
#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport failure or non-success HTTP status
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected envelope
    #[error("Malformed response from {url}: {message}")]
    Parse { url: String, message: String },

    /// Lookup by id returned no record
    #[error("No meal with id {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FeedError {
    pub(crate) fn parse(url: impl Into<String>, message: impl ToString) -> Self {
        FeedError::Parse {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
