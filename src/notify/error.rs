use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP client initialization failed: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },
    #[error("Telegram request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("Telegram returned non-JSON response: {excerpt}")]
    NonJson { excerpt: String },
    #[error("Telegram API error: {description}")]
    Api { description: String },
}

impl NotifyError {
    pub(crate) fn client(source: reqwest::Error) -> Self {
        Self::Client { source }
    }

    pub(crate) fn request(source: reqwest::Error) -> Self {
        Self::Request { source }
    }
}
