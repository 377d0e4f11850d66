use std::sync::LazyLock;

use regex::Regex;

use super::types::EmailAddress;

/// Characters stripped from both ends of a candidate address.
const WRAPPING_PUNCTUATION: &[char] = &[
    '"', '\'', '<', '>', '[', ']', '(', ')', '{', '}', '.', ',', ';', ':',
];

static ANGLE_ADDR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([^<>]*)>").expect("angle-addr pattern is a valid regex")
});

/// Extracts and normalizes the address contained in `raw`.
///
/// Accepts a bare address, a `Display Name <addr>` form, or an address buried
/// in surrounding text and punctuation. Returns `None` when no usable
/// `local@domain` can be found; malformed input is never an error.
pub fn extract_email(raw: &str) -> Option<EmailAddress> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }
    let candidate = bare_address(line)
        .trim()
        .trim_matches(WRAPPING_PUNCTUATION);
    EmailAddress::parse(candidate)
}

fn bare_address(line: &str) -> &str {
    if let Some(inner) = ANGLE_ADDR
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|inner| !inner.is_empty())
    {
        return inner;
    }
    line.split_whitespace()
        .find(|token| token.contains('@'))
        .unwrap_or(line)
}

/// Lazily normalizes every line of `lines`, dropping the ones without an address.
///
/// The returned iterator is `Clone` whenever the underlying line iterator is, so
/// the sequence can be replayed.
pub fn extract_emails<I>(lines: I) -> Emails<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Emails {
        lines: lines.into_iter(),
    }
}

#[derive(Debug, Clone)]
pub struct Emails<I> {
    lines: I,
}

impl<I> Iterator for Emails<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = EmailAddress;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .by_ref()
            .find_map(|line| extract_email(line.as_ref()))
    }
}
