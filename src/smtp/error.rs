use std::io;

use thiserror::Error;

use super::types::{AttemptStage, SmtpReply};

/// A fault that ends the conversation with one host.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection to {host} failed: {source}")]
    Connect {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error during {stage}: {source}")]
    Io {
        stage: AttemptStage,
        #[source]
        source: io::Error,
    },
    #[error("unexpected reply during {stage}: {reply}")]
    UnexpectedReply {
        stage: AttemptStage,
        reply: SmtpReply,
    },
}

impl ProbeError {
    pub(crate) fn io(stage: AttemptStage, source: io::Error) -> Self {
        Self::Io { stage, source }
    }

    pub fn stage(&self) -> AttemptStage {
        match self {
            Self::Connect { .. } => AttemptStage::Connect,
            Self::Io { stage, .. } | Self::UnexpectedReply { stage, .. } => *stage,
        }
    }
}
