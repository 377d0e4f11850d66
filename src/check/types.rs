use std::fmt;

use crate::smtp::SmtpResult;

/// Outcome of the DNS stage for one address.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainStatus {
    DomainAbsent,
    NoMx,
    Valid,
}

impl DomainStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DomainAbsent => "domain_absent",
            Self::NoMx => "no_mx",
            Self::Valid => "valid",
        }
    }

    /// Human-readable description, for logs.
    pub fn describe(self) -> &'static str {
        match self {
            Self::DomainAbsent => "the domain does not exist",
            Self::NoMx => "the domain publishes no mail exchanger",
            Self::Valid => "the domain has at least one mail exchanger",
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a check in the per-address pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Start,
    DnsChecked,
    MxChecked,
    SmtpChecked,
    Done,
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::DnsChecked => "dns_checked",
            Self::MxChecked => "mx_checked",
            Self::SmtpChecked => "smtp_checked",
            Self::Done => "done",
        })
    }
}

/// The verdict for one address.
///
/// Only the orchestrator builds these, so an absent domain or a domain without
/// MX always carries no hosts and a skipped SMTP stage, and a valid one always
/// carries at least one host.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCheckResult {
    email: String,
    status: DomainStatus,
    domain: String,
    mx_hosts: Vec<String>,
    smtp_result: SmtpResult,
}

impl EmailCheckResult {
    pub(crate) fn domain_absent(email: &str, domain: &str) -> Self {
        Self::terminal(email, domain, DomainStatus::DomainAbsent)
    }

    pub(crate) fn no_mx(email: &str, domain: &str) -> Self {
        Self::terminal(email, domain, DomainStatus::NoMx)
    }

    pub(crate) fn valid(
        email: &str,
        domain: &str,
        mx_hosts: Vec<String>,
        smtp_result: SmtpResult,
    ) -> Self {
        debug_assert!(!mx_hosts.is_empty(), "valid result without MX host");
        Self {
            email: email.to_string(),
            status: DomainStatus::Valid,
            domain: domain.to_string(),
            mx_hosts,
            smtp_result,
        }
    }

    fn terminal(email: &str, domain: &str, status: DomainStatus) -> Self {
        Self {
            email: email.to_string(),
            status,
            domain: domain.to_string(),
            mx_hosts: Vec::new(),
            smtp_result: SmtpResult::Skipped,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> DomainStatus {
        self.status
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn mx_hosts(&self) -> &[String] {
        &self.mx_hosts
    }

    pub fn smtp_result(&self) -> SmtpResult {
        self.smtp_result
    }
}
