#![forbid(unsafe_code)]
//! mxcheck_lib : existence du domaine, résolution MX et sonde SMTP (RCPT TO)

pub mod check;
pub mod dns;
pub mod mx;
pub mod normalizer;
#[cfg(feature = "with-notify")]
pub mod notify;
pub mod smtp;

pub use check::{
    CheckError, CheckOptions, CheckState, Checker, DomainStatus, EmailCheckResult, mx_preview,
    render_line,
};
pub use dns::{
    AddressFamily, DEFAULT_FALLBACK_NAMESERVERS, DnsError, DnsFailure, DomainPresence,
    LookupAddress, PresenceRule, ResolverSettings, build_resolver, check_domain_presence,
    domain_exists,
};
pub use mx::{LookupMx, MxRecord, resolve_mx_hosts, resolve_mx_records};
pub use normalizer::{EmailAddress, Emails, extract_email, extract_emails};
pub use smtp::{
    AttemptOutcome, AttemptStage, HostAttempt, ProbeOptions, ProbeReport, SmtpConnector,
    SmtpReply, SmtpResult, TcpConnector, probe_mailbox,
};

#[cfg(test)]
pub(crate) mod test_support;
