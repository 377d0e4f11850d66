use std::net::IpAddr;
use std::time::Duration;

use crate::dns::{DEFAULT_FALLBACK_NAMESERVERS, ResolverSettings};
use crate::smtp::ProbeOptions;

/// Settings shared by every check of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Budget of each DNS query.
    pub dns_timeout: Duration,
    /// Budget of the SMTP connection and of each command.
    pub smtp_timeout: Duration,
    pub helo_host: String,
    pub mail_from: String,
    pub smtp_enabled: bool,
    pub smtp_port: u16,
    /// Pause between two consecutive checks.
    pub delay: Duration,
    pub fallback_nameservers: Vec<IpAddr>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        let probe = ProbeOptions::default();
        Self {
            dns_timeout: Duration::from_secs(4),
            smtp_timeout: probe.timeout,
            helo_host: probe.helo_host,
            mail_from: probe.mail_from,
            smtp_enabled: true,
            smtp_port: probe.port,
            delay: Duration::ZERO,
            fallback_nameservers: DEFAULT_FALLBACK_NAMESERVERS.to_vec(),
        }
    }
}

impl CheckOptions {
    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            timeout: self.dns_timeout,
            fallback_nameservers: self.fallback_nameservers.clone(),
        }
    }

    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            port: self.smtp_port,
            timeout: self.smtp_timeout,
            helo_host: self.helo_host.clone(),
            mail_from: self.mail_from.clone(),
        }
    }
}
