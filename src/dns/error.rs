use thiserror::Error;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};
use trust_dns_resolver::proto::error::ProtoErrorKind;
use trust_dns_resolver::proto::op::ResponseCode;

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
}

impl DnsError {
    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }
}

/// Why a single DNS query produced no usable answer.
///
/// Only [`DnsFailure::NxDomain`] is authoritative; every other variant is an
/// inconclusive signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsFailure {
    #[error("domain does not exist (NXDOMAIN)")]
    NxDomain,
    #[error("no records in answer")]
    NoAnswer,
    #[error("no nameserver available")]
    NoNameservers,
    #[error("query timed out")]
    Timeout,
    #[error("lookup failed: {0}")]
    Other(String),
}

impl DnsFailure {
    pub fn is_nonexistent(&self) -> bool {
        matches!(self, Self::NxDomain)
    }

    pub(crate) fn from_resolve_error(err: &ResolveError) -> Self {
        match err.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. }
                if *response_code == ResponseCode::NXDomain =>
            {
                Self::NxDomain
            }
            ResolveErrorKind::NoRecordsFound { .. } => Self::NoAnswer,
            ResolveErrorKind::NoConnections => Self::NoNameservers,
            ResolveErrorKind::Timeout => Self::Timeout,
            ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
                Self::Timeout
            }
            _ => Self::Other(err.to_string()),
        }
    }
}

impl From<ResolveError> for DnsFailure {
    fn from(err: ResolveError) -> Self {
        Self::from_resolve_error(&err)
    }
}
