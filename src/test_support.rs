use std::cell::RefCell;
use std::collections::HashMap;

use crate::dns::{AddressFamily, DnsFailure, LookupAddress};
use crate::mx::{LookupMx, MxRecord};

type Answer<T> = Result<T, DnsFailure>;

/// In-memory resolver. Unconfigured names answer [`DnsFailure::NoAnswer`].
#[derive(Default)]
pub(crate) struct StubResolver {
    addresses: HashMap<(String, AddressFamily), Answer<usize>>,
    mx: HashMap<String, Answer<Vec<MxRecord>>>,
    queries: RefCell<Vec<String>>,
}

impl StubResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_address(
        mut self,
        domain: &str,
        family: AddressFamily,
        answer: Answer<usize>,
    ) -> Self {
        self.addresses.insert((domain.to_string(), family), answer);
        self
    }

    pub(crate) fn with_mx(mut self, domain: &str, answer: Answer<Vec<MxRecord>>) -> Self {
        self.mx.insert(domain.to_string(), answer);
        self
    }

    /// Queries issued so far, formatted as `"<TYPE> <name>"`.
    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl LookupAddress for StubResolver {
    fn count_address_records(
        &self,
        domain: &str,
        family: AddressFamily,
    ) -> Result<usize, DnsFailure> {
        self.queries
            .borrow_mut()
            .push(format!("{} {domain}", family.record_type()));
        self.addresses
            .get(&(domain.to_string(), family))
            .cloned()
            .unwrap_or(Err(DnsFailure::NoAnswer))
    }
}

impl LookupMx for StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, DnsFailure> {
        self.queries.borrow_mut().push(format!("MX {domain}"));
        self.mx
            .get(domain)
            .cloned()
            .unwrap_or(Err(DnsFailure::NoAnswer))
    }
}
