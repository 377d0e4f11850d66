//! Telegram Bot API delivery of a plain-text report.

mod error;

pub use error::NotifyError;

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

const PREVIEW_CHARS: usize = 500;
const BODY_EXCERPT_CHARS: usize = 200;

/// Posts messages through `sendMessage`.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
}

impl TelegramNotifier {
    pub fn new(timeout: Duration) -> Result<Self, NotifyError> {
        Self::with_api_base(DEFAULT_API_BASE, timeout)
    }

    /// Same as [`TelegramNotifier::new`] against another Bot API endpoint.
    pub fn with_api_base(api_base: impl Into<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(NotifyError::client)?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Sends `text` to `chat_id` with link previews disabled.
    pub fn send_message(&self, bot_token: &str, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{bot_token}/sendMessage", self.api_base);
        debug!(chat_id, chars = text.chars().count(), "posting Telegram message");
        let body = self
            .client
            .post(url)
            .form(&[
                ("chat_id", chat_id),
                ("text", text),
                ("disable_web_page_preview", "true"),
            ])
            .send()
            .and_then(|response| response.text())
            .map_err(NotifyError::request)?;
        interpret_response(&body)
    }
}

/// Accepts a Bot API body only if it is JSON with `"ok": true`.
pub fn interpret_response(body: &str) -> Result<(), NotifyError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| NotifyError::NonJson {
        excerpt: body.chars().take(BODY_EXCERPT_CHARS).collect(),
    })?;
    if value.get("ok").and_then(serde_json::Value::as_bool) == Some(true) {
        return Ok(());
    }
    let description = value
        .get("description")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());
    Err(NotifyError::Api { description })
}

/// `text`, cut to its first 500 characters plus `...` when longer.
pub fn text_preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
