use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use tracing::debug;
use trust_dns_resolver::Resolver;
use trust_dns_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use trust_dns_resolver::proto::rr::RecordType;
use trust_dns_resolver::system_conf::read_system_conf;

use super::{DnsError, DnsFailure};

/// Public recursive resolvers used when no system configuration is available.
pub const DEFAULT_FALLBACK_NAMESERVERS: [IpAddr; 2] = [
    IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)),
    IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
];

const DNS_PORT: u16 = 53;

/// Resolver construction parameters.
///
/// `timeout` bounds each request sent to one nameserver; requests are neither
/// retried nor cached. Names are always queried fully qualified, so no search
/// domain is appended, but a lookup that moves on to the next configured
/// nameserver spends up to one `timeout` per nameserver tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub timeout: Duration,
    pub fallback_nameservers: Vec<IpAddr>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(4),
            fallback_nameservers: DEFAULT_FALLBACK_NAMESERVERS.to_vec(),
        }
    }
}

impl ResolverSettings {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Configuration pointing at `fallback_nameservers` over UDP and TCP.
    pub fn fallback_config(&self) -> ResolverConfig {
        ResolverConfig::from_parts(
            None,
            Vec::new(),
            NameServerConfigGroup::from_ips_clear(&self.fallback_nameservers, DNS_PORT, true),
        )
    }

    pub(crate) fn apply(&self, opts: &mut ResolverOpts) {
        opts.timeout = self.timeout;
        opts.attempts = 1;
        opts.cache_size = 0;
    }
}

/// Builds a synchronous resolver from the system configuration, or from the
/// fallback nameservers when the system provides none.
pub fn build_resolver(settings: &ResolverSettings) -> Result<Resolver, DnsError> {
    let (config, mut opts) = match read_system_conf() {
        Ok((config, opts)) if !config.name_servers().is_empty() => (config, opts),
        Ok(_) => {
            debug!("system resolver configuration lists no nameserver, using fallback");
            (settings.fallback_config(), ResolverOpts::default())
        }
        Err(err) => {
            debug!(error = %err, "system resolver configuration unavailable, using fallback");
            (settings.fallback_config(), ResolverOpts::default())
        }
    };
    settings.apply(&mut opts);
    Resolver::new(config, opts).map_err(DnsError::resolver_init)
}

/// Converts `domain` to the ASCII form sent on the wire.
pub fn to_ascii_domain(domain: &str) -> Result<String, DnsFailure> {
    let trimmed = domain.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(DnsFailure::Other("domain is empty".to_string()));
    }
    idna::domain_to_ascii(trimmed)
        .map_err(|err| DnsFailure::Other(format!("domain IDNA conversion failed: {err}")))
}

/// `domain` with exactly one trailing dot, which keeps the resolver from
/// trying search-list suffixes.
pub(crate) fn fully_qualified(domain: &str) -> String {
    format!("{}.", domain.trim_end_matches('.'))
}

/// Address record family probed for existence.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// `A` records.
    V4,
    /// `AAAA` records.
    V6,
}

impl AddressFamily {
    pub fn record_type(self) -> RecordType {
        match self {
            Self::V4 => RecordType::A,
            Self::V6 => RecordType::AAAA,
        }
    }
}

pub trait LookupAddress {
    /// Returns the number of address records of `family` held by `domain`.
    fn count_address_records(
        &self,
        domain: &str,
        family: AddressFamily,
    ) -> Result<usize, DnsFailure>;
}

impl LookupAddress for Resolver {
    fn count_address_records(
        &self,
        domain: &str,
        family: AddressFamily,
    ) -> Result<usize, DnsFailure> {
        let lookup = Resolver::lookup(self, fully_qualified(domain), family.record_type())?;
        Ok(lookup.iter().count())
    }
}
