use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use mxcheck_lib::{Checker, EmailAddress, extract_emails};
use tracing::info;

use crate::{EXIT_INPUT, EXIT_OK};
use crate::args::CheckFlags;
use crate::output::{Format, ReportWriter};

/// Reads `path` and keeps the addresses found on its lines, in order.
pub fn read_addresses(path: &Path) -> Result<Vec<EmailAddress>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(extract_emails(content.lines()).collect())
}

pub fn run(input: &Path, flags: &CheckFlags) -> Result<u8> {
    let format = Format::parse(&flags.format)?;
    let addresses = read_addresses(input)?;
    if addresses.is_empty() {
        eprintln!("No valid emails found in input");
        return Ok(EXIT_INPUT);
    }

    let checker = Checker::new(flags.check_options()).context("initialise DNS resolver")?;
    info!(count = addresses.len(), smtp = checker.options().smtp_enabled, "checking addresses");

    let mut report = ReportWriter::new(format, io::stdout().lock());
    let mut write_error = None;
    checker.check_all(addresses, |result| {
        if write_error.is_none() {
            if let Err(err) = report.write(&result) {
                write_error = Some(err);
            }
        }
    });
    if let Some(err) = write_error {
        return Err(err.context("write report"));
    }
    report.into_inner().flush().context("flush stdout")?;
    Ok(EXIT_OK)
}
