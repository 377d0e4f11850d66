use std::fmt;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStage {
    Connect,
    Greeting,
    Ehlo,
    Helo,
    MailFrom,
    RcptTo,
}

impl fmt::Display for AttemptStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connect => "connect",
            Self::Greeting => "greeting",
            Self::Ehlo => "EHLO",
            Self::Helo => "HELO",
            Self::MailFrom => "MAIL FROM",
            Self::RcptTo => "RCPT TO",
        })
    }
}

/// A raw SMTP reply. `code` is `None` when the server answered with a line that
/// does not start with a three-digit status code.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpReply {
    pub code: Option<u16>,
    pub message: String,
}

impl SmtpReply {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    pub fn is_positive_completion(&self) -> bool {
        self.code.is_some_and(|code| (200..300).contains(&code))
    }

    pub fn is_permanent_failure(&self) -> bool {
        self.code.is_some_and(|code| (500..600).contains(&code))
    }

    /// Any 4xx or 5xx reply.
    pub fn is_failure(&self) -> bool {
        self.code.is_some_and(|code| code >= 400)
    }
}

impl fmt::Display for SmtpReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code} {}", self.message),
            None => write!(f, "<no code> {}", self.message),
        }
    }
}

/// Outcome of the SMTP stage for one address.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmtpResult {
    /// The stage was disabled or not reached.
    Skipped,
    Accepted,
    Rejected,
    Unknown,
}

impl SmtpResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a `RCPT TO` reply: 2xx accepted, 5xx rejected, anything else
    /// (including a codeless reply) unknown.
    pub fn from_rcpt_reply(reply: &SmtpReply) -> Self {
        if reply.is_positive_completion() {
            Self::Accepted
        } else if reply.is_permanent_failure() {
            Self::Rejected
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for SmtpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the interrogation of a single MX host.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Accepted { reply: SmtpReply },
    Rejected { reply: SmtpReply },
    /// `RCPT TO` answered with a temporary, unexpected or codeless reply.
    Inconclusive { reply: SmtpReply },
    /// `MAIL FROM` answered 4xx/5xx; the next host is tried.
    MailFromRefused { reply: SmtpReply },
    Unreachable { message: String },
    ProtocolError { stage: AttemptStage, message: String },
}

impl AttemptOutcome {
    /// Whether this outcome ends the probe.
    pub fn is_definitive(&self) -> bool {
        matches!(
            self,
            Self::Accepted { .. } | Self::Rejected { .. } | Self::Inconclusive { .. }
        )
    }

    /// The probe result carried by a definitive outcome.
    pub fn verdict(&self) -> Option<SmtpResult> {
        if !self.is_definitive() {
            return None;
        }
        Some(match self {
            Self::Accepted { .. } => SmtpResult::Accepted,
            Self::Rejected { .. } => SmtpResult::Rejected,
            _ => SmtpResult::Unknown,
        })
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAttempt {
    pub host: String,
    pub address: Option<String>,
    pub outcome: AttemptOutcome,
}

/// Result of [`probe_mailbox`](crate::smtp::probe_mailbox) with the per-host trail.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub result: SmtpResult,
    pub attempts: Vec<HostAttempt>,
}
