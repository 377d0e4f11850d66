//! DNS MX resolution.
//!
//! [`resolve_mx_hosts`] returns the exchange hostnames of a domain ordered by
//! preference; any lookup failure yields an empty list.

mod resolver;
mod types;

pub use resolver::{LookupMx, resolve_mx_hosts, resolve_mx_records};
pub use types::MxRecord;

#[cfg(test)]
mod tests;
