//! Per-address pipeline: domain existence, MX resolution, then the optional
//! SMTP probe.

mod options;
pub mod report;
mod types;

pub use options::CheckOptions;
pub use report::{MX_PREVIEW_LIMIT, mx_preview, render_line};
pub use types::{CheckState, DomainStatus, EmailCheckResult};

use std::thread;

use thiserror::Error;
use tracing::debug;
use trust_dns_resolver::Resolver;

use crate::dns::{DnsError, LookupAddress, build_resolver, check_domain_presence};
use crate::mx::{LookupMx, resolve_mx_hosts};
use crate::normalizer::EmailAddress;
use crate::smtp::{ProbeOptions, SmtpConnector, SmtpResult, TcpConnector, probe_mailbox};

#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Dns(#[from] DnsError),
}

/// Runs checks with a resolver and an SMTP connector shared by every address.
pub struct Checker<R = Resolver, C = TcpConnector> {
    resolver: R,
    connector: C,
    options: CheckOptions,
    probe: ProbeOptions,
}

impl Checker {
    /// Builds the system resolver once for the whole run.
    pub fn new(options: CheckOptions) -> Result<Self, CheckError> {
        let resolver = build_resolver(&options.resolver_settings())?;
        Ok(Self::with_parts(resolver, TcpConnector, options))
    }
}

impl<R, C> Checker<R, C>
where
    R: LookupAddress + LookupMx,
    C: SmtpConnector,
{
    pub fn with_parts(resolver: R, connector: C, options: CheckOptions) -> Self {
        let probe = options.probe_options();
        Self {
            resolver,
            connector,
            options,
            probe,
        }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    pub fn check(&self, address: &EmailAddress) -> EmailCheckResult {
        let email = address.as_str();
        let domain = address.domain();
        let mut mx_hosts = Vec::new();
        let mut smtp_result = SmtpResult::Skipped;
        let mut state = CheckState::Start;

        loop {
            debug!(%email, %state, "check step");
            state = match state {
                CheckState::Start => {
                    let rule = check_domain_presence(&self.resolver, domain);
                    debug!(%email, ?rule, "domain presence decided");
                    if !rule.presence().is_present() {
                        return finish(EmailCheckResult::domain_absent(email, domain));
                    }
                    CheckState::DnsChecked
                }
                CheckState::DnsChecked => {
                    mx_hosts = resolve_mx_hosts(&self.resolver, domain);
                    if mx_hosts.is_empty() {
                        return finish(EmailCheckResult::no_mx(email, domain));
                    }
                    CheckState::MxChecked
                }
                CheckState::MxChecked => {
                    if !self.options.smtp_enabled {
                        return finish(EmailCheckResult::valid(
                            email,
                            domain,
                            mx_hosts,
                            SmtpResult::Skipped,
                        ));
                    }
                    CheckState::SmtpChecked
                }
                CheckState::SmtpChecked => {
                    let report = probe_mailbox(&self.connector, email, &mx_hosts, &self.probe);
                    for attempt in &report.attempts {
                        debug!(%email, host = %attempt.host, outcome = ?attempt.outcome, "SMTP attempt");
                    }
                    smtp_result = report.result;
                    CheckState::Done
                }
                CheckState::Done => {
                    return finish(EmailCheckResult::valid(
                        email,
                        domain,
                        mx_hosts,
                        smtp_result,
                    ));
                }
            };
        }
    }

    /// Checks `addresses` in order, handing each result to `on_result`, and
    /// returns how many were checked. The configured delay separates
    /// consecutive checks.
    pub fn check_all<I, F>(&self, addresses: I, mut on_result: F) -> usize
    where
        I: IntoIterator<Item = EmailAddress>,
        F: FnMut(EmailCheckResult),
    {
        let mut checked = 0;
        for address in addresses {
            if checked > 0 && !self.options.delay.is_zero() {
                thread::sleep(self.options.delay);
            }
            on_result(self.check(&address));
            checked += 1;
        }
        checked
    }
}

fn finish(result: EmailCheckResult) -> EmailCheckResult {
    debug!(
        email = result.email(),
        status = %result.status(),
        smtp = %result.smtp_result(),
        "{}",
        result.status().describe()
    );
    result
}

#[cfg(test)]
mod tests;
