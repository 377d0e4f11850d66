use proptest::prelude::*;

use super::{extract_email, extract_emails};

proptest! {
    #[test]
    fn lines_without_at_yield_nothing(line in "[^@]*") {
        prop_assert!(extract_email(&line).is_none());
    }

    #[test]
    fn wrapped_mixed_case_addresses_are_lowercased(
        local in "[A-Za-z0-9_%+-]{1,16}",
        domain in "[A-Za-z0-9]{1,12}\\.[A-Za-z]{2,6}",
        prefix in "[<\\[(\"']{0,2}",
        suffix in "[>\\])\"'.,;:]{0,2}",
    ) {
        let raw = format!("{prefix}{local}@{domain}{suffix}");
        let email = extract_email(&raw).expect("address should be extracted");
        prop_assert_eq!(email.as_str(), format!("{local}@{domain}").to_lowercase());
    }
}

#[test]
fn extract_emails_keeps_order_and_drops_noise() {
    let lines = [
        "first@example.com",
        "no address here",
        "",
        "Second <SECOND@example.org>",
        "third@example.net;",
    ];
    let emails: Vec<String> = extract_emails(lines)
        .map(|email| email.into_string())
        .collect();
    assert_eq!(
        emails,
        vec![
            "first@example.com",
            "second@example.org",
            "third@example.net"
        ]
    );
}

#[test]
fn extract_emails_is_restartable() {
    let lines = vec!["a@example.com".to_string(), "b@example.com".to_string()];
    let iter = extract_emails(lines.iter());
    let first: Vec<_> = iter.clone().collect();
    let second: Vec<_> = iter.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}
