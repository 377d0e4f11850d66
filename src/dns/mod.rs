//! Domain existence checks over A/AAAA records.
//!
//! [`build_resolver`] prefers the system resolver configuration and falls back
//! to [`DEFAULT_FALLBACK_NAMESERVERS`]. [`check_domain_presence`] reports which
//! [`PresenceRule`] decided the outcome; only an NXDOMAIN answer ever makes a
//! domain absent.

mod error;
mod existence;
mod resolver;

pub use error::{DnsError, DnsFailure};
pub use existence::{DomainPresence, PresenceRule, check_domain_presence, domain_exists};
pub use resolver::{
    AddressFamily, DEFAULT_FALLBACK_NAMESERVERS, LookupAddress, ResolverSettings,
    build_resolver, to_ascii_domain,
};
pub(crate) use resolver::fully_qualified;
