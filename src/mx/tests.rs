use super::{MxRecord, resolve_mx_hosts, resolve_mx_records, resolver};
use crate::dns::DnsFailure;
use crate::test_support::StubResolver;

#[test]
fn hosts_are_ordered_by_preference() {
    let stub = StubResolver::new().with_mx(
        "example.test",
        Ok(vec![
            MxRecord::new(20, "b.mx.test."),
            MxRecord::new(10, "a.mx.test."),
        ]),
    );
    assert_eq!(
        resolve_mx_hosts(&stub, "example.test"),
        vec!["a.mx.test", "b.mx.test"]
    );
}

#[test]
fn equal_preferences_keep_answer_order() {
    let stub = StubResolver::new().with_mx(
        "example.test",
        Ok(vec![
            MxRecord::new(10, "zeta.mx.test"),
            MxRecord::new(5, "primary.mx.test"),
            MxRecord::new(10, "alpha.mx.test"),
            MxRecord::new(10, "mid.mx.test"),
        ]),
    );
    assert_eq!(
        resolve_mx_hosts(&stub, "example.test"),
        vec![
            "primary.mx.test",
            "zeta.mx.test",
            "alpha.mx.test",
            "mid.mx.test"
        ]
    );
}

#[test]
fn records_keep_preference_for_diagnostics() {
    let stub = StubResolver::new().with_mx(
        "example.test",
        Ok(vec![MxRecord::new(30, "MX3.Example.TEST.")]),
    );
    assert_eq!(
        resolve_mx_records(&stub, "example.test"),
        vec![MxRecord::new(30, "mx3.example.test")]
    );
}

#[test]
fn null_mx_is_dropped() {
    let stub = StubResolver::new().with_mx("nomail.test", Ok(vec![MxRecord::new(0, ".")]));
    assert!(resolve_mx_hosts(&stub, "nomail.test").is_empty());
}

#[test]
fn lookup_failures_yield_empty_list() {
    for failure in [
        DnsFailure::NxDomain,
        DnsFailure::NoAnswer,
        DnsFailure::NoNameservers,
        DnsFailure::Timeout,
        DnsFailure::Other("servfail".to_string()),
    ] {
        let stub = StubResolver::new().with_mx("broken.test", Err(failure));
        assert!(resolve_mx_hosts(&stub, "broken.test").is_empty());
    }
}

#[test]
fn normalize_exchange_trims_dot_and_lowercases() {
    let out = resolver::normalize_exchange("Mail.EXAMPLE.com.");
    assert_eq!(out, "mail.example.com");
}
