//! Extraction of bare `local@domain` addresses from free-text lines.
//!
//! [`extract_email`] filters a single line; [`extract_emails`] adapts any line
//! iterator into a lazy iterator of [`EmailAddress`] values, in input order.

mod extract;
mod types;

pub use extract::{Emails, extract_email, extract_emails};
pub use types::EmailAddress;

#[cfg(test)]
mod tests;
