use std::cell::RefCell;
use std::io::{self, Cursor, Read, Write};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use super::{CheckOptions, Checker, DomainStatus, EmailCheckResult};
use crate::dns::{AddressFamily, DnsFailure};
use crate::mx::MxRecord;
use crate::normalizer::EmailAddress;
use crate::smtp::{SmtpConnector, SmtpResult};
use crate::test_support::StubResolver;

struct Transcript(Cursor<&'static [u8]>);

impl Read for Transcript {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Answers every host with the same transcript and records connections.
#[derive(Default)]
struct FixedConnector {
    transcript: Option<&'static str>,
    connected: RefCell<Vec<String>>,
}

impl FixedConnector {
    fn answering(transcript: &'static str) -> Self {
        Self {
            transcript: Some(transcript),
            ..Self::default()
        }
    }

    fn connections(&self) -> Vec<String> {
        self.connected.borrow().clone()
    }
}

impl SmtpConnector for FixedConnector {
    type Stream = Transcript;

    fn connect(
        &self,
        host: &str,
        port: u16,
        _timeout: Duration,
    ) -> io::Result<(Self::Stream, SocketAddr)> {
        self.connected.borrow_mut().push(host.to_string());
        match self.transcript {
            Some(script) => Ok((
                Transcript(Cursor::new(script.as_bytes())),
                SocketAddr::from((Ipv4Addr::LOCALHOST, port)),
            )),
            None => Err(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")),
        }
    }
}

const ACCEPTING: &str = "220 hi\r\n250 hello\r\n250 OK\r\n250 OK\r\n221 bye\r\n";

fn address(raw: &str) -> EmailAddress {
    EmailAddress::parse(raw).expect("valid test address")
}

fn mx(records: &[(u16, &str)]) -> Result<Vec<MxRecord>, DnsFailure> {
    Ok(records
        .iter()
        .map(|(pref, host)| MxRecord::new(*pref, host.to_string()))
        .collect())
}

fn resolver_with_mail() -> StubResolver {
    StubResolver::new()
        .with_address("example.com", AddressFamily::V4, Ok(1))
        .with_mx(
            "example.com",
            mx(&[(20, "mx2.example.com."), (10, "MX1.example.com.")]),
        )
}

fn assert_terminal_invariants(result: &EmailCheckResult) {
    match result.status() {
        DomainStatus::DomainAbsent | DomainStatus::NoMx => {
            assert!(result.mx_hosts().is_empty());
            assert_eq!(result.smtp_result(), SmtpResult::Skipped);
        }
        DomainStatus::Valid => assert!(!result.mx_hosts().is_empty()),
    }
}

#[test]
fn nxdomain_yields_domain_absent_without_mx_query() {
    let resolver =
        StubResolver::new().with_address("gone.test", AddressFamily::V4, Err(DnsFailure::NxDomain));
    let connector = FixedConnector::answering(ACCEPTING);
    let checker = Checker::with_parts(resolver, connector, CheckOptions::default());

    let result = checker.check(&address("user@gone.test"));

    assert_eq!(result.status(), DomainStatus::DomainAbsent);
    assert_eq!(result.email(), "user@gone.test");
    assert_eq!(result.domain(), "gone.test");
    assert_terminal_invariants(&result);
    assert_eq!(checker.resolver.queries(), vec!["A gone.test"]);
    assert!(checker.connector.connections().is_empty());
}

#[test]
fn missing_mx_yields_no_mx() {
    let resolver = StubResolver::new()
        .with_address("bare.test", AddressFamily::V4, Ok(1))
        .with_mx("bare.test", Ok(Vec::new()));
    let checker = Checker::with_parts(resolver, FixedConnector::default(), CheckOptions::default());

    let result = checker.check(&address("user@bare.test"));

    assert_eq!(result.status(), DomainStatus::NoMx);
    assert_terminal_invariants(&result);
    assert!(checker.connector.connections().is_empty());
}

#[test]
fn inconclusive_dns_with_failing_mx_is_no_mx() {
    let resolver = StubResolver::new()
        .with_address("flaky.test", AddressFamily::V4, Err(DnsFailure::Timeout))
        .with_address("flaky.test", AddressFamily::V6, Err(DnsFailure::Timeout))
        .with_mx("flaky.test", Err(DnsFailure::Timeout));
    let checker = Checker::with_parts(resolver, FixedConnector::default(), CheckOptions::default());

    let result = checker.check(&address("user@flaky.test"));

    assert_eq!(result.status(), DomainStatus::NoMx);
    assert_eq!(
        checker.resolver.queries(),
        vec!["A flaky.test", "AAAA flaky.test", "MX flaky.test"]
    );
}

#[test]
fn disabled_smtp_never_probes() {
    let options = CheckOptions {
        smtp_enabled: false,
        ..CheckOptions::default()
    };
    let checker = Checker::with_parts(
        resolver_with_mail(),
        FixedConnector::answering(ACCEPTING),
        options,
    );

    let result = checker.check(&address("User@Example.com"));

    assert_eq!(result.status(), DomainStatus::Valid);
    assert_eq!(result.mx_hosts(), ["mx1.example.com", "mx2.example.com"]);
    assert_eq!(result.smtp_result(), SmtpResult::Skipped);
    assert!(checker.connector.connections().is_empty());
}

#[test]
fn enabled_smtp_probes_preferred_host_first() {
    let checker = Checker::with_parts(
        resolver_with_mail(),
        FixedConnector::answering(ACCEPTING),
        CheckOptions::default(),
    );

    let result = checker.check(&address("user@example.com"));

    assert_eq!(result.status(), DomainStatus::Valid);
    assert_eq!(result.smtp_result(), SmtpResult::Accepted);
    assert_eq!(checker.connector.connections(), vec!["mx1.example.com"]);
}

#[test]
fn unreachable_hosts_leave_valid_with_unknown() {
    let checker = Checker::with_parts(
        resolver_with_mail(),
        FixedConnector::default(),
        CheckOptions::default(),
    );

    let result = checker.check(&address("user@example.com"));

    assert_eq!(result.status(), DomainStatus::Valid);
    assert_eq!(result.smtp_result(), SmtpResult::Unknown);
    assert_eq!(
        checker.connector.connections(),
        vec!["mx1.example.com", "mx2.example.com"]
    );
}

#[test]
fn repeated_checks_agree() {
    let options = CheckOptions {
        smtp_enabled: false,
        ..CheckOptions::default()
    };
    let checker = Checker::with_parts(resolver_with_mail(), FixedConnector::default(), options);
    let target = address("user@example.com");
    assert_eq!(checker.check(&target), checker.check(&target));
}

#[test]
fn check_all_preserves_order_and_counts() {
    let resolver = resolver_with_mail()
        .with_address("gone.test", AddressFamily::V4, Err(DnsFailure::NxDomain));
    let options = CheckOptions {
        smtp_enabled: false,
        ..CheckOptions::default()
    };
    let checker = Checker::with_parts(resolver, FixedConnector::default(), options);
    let mut seen = Vec::new();

    let checked = checker.check_all(
        vec![address("a@example.com"), address("b@gone.test"), address("c@example.com")],
        |result| seen.push((result.email().to_string(), result.status())),
    );

    assert_eq!(checked, 3);
    assert_eq!(
        seen,
        vec![
            ("a@example.com".to_string(), DomainStatus::Valid),
            ("b@gone.test".to_string(), DomainStatus::DomainAbsent),
            ("c@example.com".to_string(), DomainStatus::Valid),
        ]
    );
}

#[test]
fn delay_separates_checks() {
    let options = CheckOptions {
        smtp_enabled: false,
        delay: Duration::from_millis(40),
        ..CheckOptions::default()
    };
    let checker = Checker::with_parts(resolver_with_mail(), FixedConnector::default(), options);
    let addresses = vec![
        address("a@example.com"),
        address("b@example.com"),
        address("c@example.com"),
    ];

    let started = Instant::now();
    checker.check_all(addresses, |_| {});
    assert!(started.elapsed() >= Duration::from_millis(80));
}

#[test]
fn no_delay_after_last_check() {
    let options = CheckOptions {
        smtp_enabled: false,
        delay: Duration::from_secs(5),
        ..CheckOptions::default()
    };
    let checker = Checker::with_parts(resolver_with_mail(), FixedConnector::default(), options);

    let started = Instant::now();
    let checked = checker.check_all([address("a@example.com")], |_| {});
    assert_eq!(checked, 1);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn default_options() {
    let options = CheckOptions::default();
    assert_eq!(options.dns_timeout, Duration::from_secs(4));
    assert_eq!(options.smtp_timeout, Duration::from_secs(6));
    assert_eq!(options.helo_host, "localhost");
    assert_eq!(options.mail_from, "no-reply@example.com");
    assert!(options.smtp_enabled);
    assert_eq!(options.smtp_port, 25);
    assert_eq!(options.delay, Duration::ZERO);
    assert_eq!(options.resolver_settings().timeout, options.dns_timeout);
    assert_eq!(options.probe_options().port, 25);
}

#[test]
fn status_strings() {
    assert_eq!(DomainStatus::DomainAbsent.to_string(), "domain_absent");
    assert_eq!(DomainStatus::NoMx.as_str(), "no_mx");
    assert_eq!(DomainStatus::Valid.as_str(), "valid");
    assert_ne!(DomainStatus::Valid.describe(), DomainStatus::Valid.as_str());
}
