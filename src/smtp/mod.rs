//! Minimal SMTP acceptance probe (`EHLO`/`HELO`, `MAIL FROM`, `RCPT TO`).
//!
//! [`probe_mailbox`] walks the MX hosts in order and stops at the first
//! definitive `RCPT TO` reply. Transport and protocol faults move on to the next
//! host; running out of hosts yields [`SmtpResult::Unknown`]. No message is ever
//! sent.

mod connector;
mod error;
mod options;
mod probe;
mod session;
mod types;

pub use connector::{SmtpConnector, TcpConnector};
pub use error::ProbeError;
pub use options::ProbeOptions;
pub use probe::probe_mailbox;
pub use types::{AttemptOutcome, AttemptStage, HostAttempt, ProbeReport, SmtpReply, SmtpResult};
