use tracing::debug;

use super::resolver::{AddressFamily, LookupAddress, to_ascii_domain};

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainPresence {
    Present,
    Absent,
}

impl DomainPresence {
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// The branch that decided a domain's presence.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceRule {
    /// A lookup of this family returned at least one record.
    Answered(AddressFamily),
    /// A lookup of this family returned NXDOMAIN.
    Nonexistent(AddressFamily),
    /// Neither family gave an answer nor an NXDOMAIN. The domain is assumed to
    /// exist and the MX stage has the final word.
    PresentOnInconclusive,
}

impl PresenceRule {
    pub fn presence(self) -> DomainPresence {
        match self {
            Self::Answered(_) | Self::PresentOnInconclusive => DomainPresence::Present,
            Self::Nonexistent(_) => DomainPresence::Absent,
        }
    }
}

/// Resolves `A` then, unless it answered or returned NXDOMAIN, `AAAA`.
pub fn check_domain_presence<R>(resolver: &R, domain: &str) -> PresenceRule
where
    R: LookupAddress + ?Sized,
{
    let ascii = match to_ascii_domain(domain) {
        Ok(ascii) => ascii,
        Err(failure) => {
            debug!(domain, %failure, "cannot query domain, treating as inconclusive");
            return PresenceRule::PresentOnInconclusive;
        }
    };

    for family in [AddressFamily::V4, AddressFamily::V6] {
        match resolver.count_address_records(&ascii, family) {
            Ok(count) if count > 0 => return PresenceRule::Answered(family),
            Ok(_) => debug!(domain = %ascii, ?family, "empty address answer"),
            Err(failure) if failure.is_nonexistent() => {
                return PresenceRule::Nonexistent(family);
            }
            Err(failure) => debug!(domain = %ascii, ?family, %failure, "address lookup inconclusive"),
        }
    }

    PresenceRule::PresentOnInconclusive
}

pub fn domain_exists<R>(resolver: &R, domain: &str) -> bool
where
    R: LookupAddress + ?Sized,
{
    check_domain_presence(resolver, domain)
        .presence()
        .is_present()
}
