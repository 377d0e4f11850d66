use std::time::Duration;

/// Connection parameters for [`probe_mailbox`](crate::smtp::probe_mailbox).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub port: u16,
    /// Bounds the connection attempt and every read and write. Zero disables
    /// the deadline.
    pub timeout: Duration,
    /// Sent verbatim in `EHLO`/`HELO`.
    pub helo_host: String,
    /// Sent verbatim as the envelope sender.
    pub mail_from: String,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            port: 25,
            timeout: Duration::from_secs(6),
            helo_host: "localhost".to_string(),
            mail_from: "no-reply@example.com".to_string(),
        }
    }
}
