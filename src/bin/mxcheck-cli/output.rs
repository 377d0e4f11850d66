use std::io::Write;

use anyhow::{Result, bail};
use mxcheck_lib::{EmailCheckResult, render_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    #[cfg(feature = "with-serde")]
    Ndjson,
    #[cfg(feature = "with-csv")]
    Csv,
}

impl Format {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "human" => Ok(Self::Human),
            "ndjson" => {
                #[cfg(feature = "with-serde")]
                {
                    Ok(Self::Ndjson)
                }
                #[cfg(not(feature = "with-serde"))]
                {
                    bail!("format=ndjson nécessite la feature 'with-serde'")
                }
            }
            "csv" => {
                #[cfg(feature = "with-csv")]
                {
                    Ok(Self::Csv)
                }
                #[cfg(not(feature = "with-csv"))]
                {
                    bail!("format=csv nécessite la feature 'with-csv'")
                }
            }
            other => bail!("unknown --format '{other}', use: human|ndjson|csv"),
        }
    }
}

/// Writes one record per result and flushes it immediately.
pub struct ReportWriter<W: Write> {
    format: Format,
    out: W,
    #[cfg(feature = "with-csv")]
    header_written: bool,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(format: Format, out: W) -> Self {
        Self {
            format,
            out,
            #[cfg(feature = "with-csv")]
            header_written: false,
        }
    }

    pub fn write(&mut self, result: &EmailCheckResult) -> Result<()> {
        match self.format {
            Format::Human => writeln!(self.out, "{}", render_line(result))?,
            #[cfg(feature = "with-serde")]
            Format::Ndjson => {
                serde_json::to_writer(&mut self.out, result)?;
                self.out.write_all(b"\n")?;
            }
            #[cfg(feature = "with-csv")]
            Format::Csv => self.write_csv(result)?,
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(feature = "with-csv")]
    fn write_csv(&mut self, result: &EmailCheckResult) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut self.out);
        if !self.header_written {
            wtr.write_record(["email", "status", "domain", "mx_hosts", "smtp"])?;
            self.header_written = true;
        }
        // hôtes MX séparés par ';' pour rester dans une seule colonne
        let mx_hosts = result.mx_hosts().join(";");
        wtr.write_record([
            result.email(),
            result.status().as_str(),
            result.domain(),
            mx_hosts.as_str(),
            result.smtp_result().as_str(),
        ])?;
        wtr.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_human_and_rejects_unknown() {
        assert_eq!(Format::parse("human").expect("human"), Format::Human);
        let err = Format::parse("xml").expect_err("unknown format");
        assert!(err.to_string().contains("human|ndjson|csv"));
    }

    #[cfg(not(feature = "with-serde"))]
    #[test]
    fn ndjson_requires_serde_feature() {
        let err = Format::parse("ndjson").expect_err("feature missing");
        assert!(err.to_string().contains("with-serde"));
    }
}
