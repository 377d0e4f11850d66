use std::fmt;

/// A normalized, lowercase `local@domain` address.
///
/// Only constructed through [`EmailAddress::parse`], which guarantees exactly one
/// `@` with a non-empty part on each side.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[cfg_attr(feature = "with-serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    value: String,
    #[cfg_attr(feature = "with-serde", serde(skip))]
    at: usize,
}

impl EmailAddress {
    /// Parses an already-bare address. Returns `None` unless the input holds
    /// exactly one `@` with non-empty local and domain parts.
    pub fn parse(candidate: &str) -> Option<Self> {
        let (local, domain) = candidate.split_once('@')?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return None;
        }
        let local = local.to_lowercase();
        let domain = domain.to_lowercase();
        let at = local.len();
        Some(Self {
            value: format!("{local}@{domain}"),
            at,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn local(&self) -> &str {
        &self.value[..self.at]
    }

    pub fn domain(&self) -> &str {
        &self.value[self.at + 1..]
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
