use tracing::debug;
use trust_dns_resolver::Resolver;

use super::MxRecord;
use crate::dns::{DnsFailure, fully_qualified, to_ascii_domain};

pub trait LookupMx {
    /// Raw MX answer for `domain`, in resolver order.
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DnsFailure>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DnsFailure> {
        let lookup = Resolver::mx_lookup(self, fully_qualified(domain))?;
        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
            .collect())
    }
}

/// MX records of `domain` with normalized exchanges, ascending by preference.
///
/// Records sharing a preference keep the order the resolver returned them in.
/// Exchanges that normalize to nothing (such as the null MX `.`) are dropped.
pub fn resolve_mx_records<R>(resolver: &R, domain: &str) -> Vec<MxRecord>
where
    R: LookupMx + ?Sized,
{
    let ascii = match to_ascii_domain(domain) {
        Ok(ascii) => ascii,
        Err(failure) => {
            debug!(domain, %failure, "cannot query MX");
            return Vec::new();
        }
    };

    let answer = match resolver.lookup_mx(&ascii) {
        Ok(records) => records,
        Err(failure) => {
            debug!(domain = %ascii, %failure, "MX lookup failed");
            return Vec::new();
        }
    };

    let mut records: Vec<MxRecord> = answer
        .into_iter()
        .filter_map(|record| {
            let exchange = normalize_exchange(&record.exchange);
            (!exchange.is_empty()).then(|| MxRecord::new(record.preference, exchange))
        })
        .collect();
    records.sort_by_key(|record| record.preference);
    records
}

/// Exchange hostnames of `domain`, most preferred first.
pub fn resolve_mx_hosts<R>(resolver: &R, domain: &str) -> Vec<String>
where
    R: LookupMx + ?Sized,
{
    resolve_mx_records(resolver, domain)
        .into_iter()
        .map(|record| record.exchange)
        .collect()
}

pub(crate) fn normalize_exchange(exchange: &str) -> String {
    exchange.trim().trim_end_matches('.').to_ascii_lowercase()
}
