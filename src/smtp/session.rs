use std::io::{self, BufRead, BufReader, Read, Write};

use super::types::SmtpReply;

/// Longest reply line accepted, terminator included.
const MAX_LINE: usize = 8192;

pub(crate) struct SmtpSession<S: Read + Write> {
    reader: BufReader<S>,
}

impl<S: Read + Write> SmtpSession<S> {
    pub(crate) fn new(stream: S) -> Self {
        Self {
            reader: BufReader::new(stream),
        }
    }

    pub(crate) fn send_command(&mut self, command: &str) -> io::Result<()> {
        let mut line = command.as_bytes().to_vec();
        line.extend_from_slice(b"\r\n");
        let stream = self.reader.get_mut();
        stream.write_all(&line)?;
        stream.flush()
    }

    /// Sends `command` and reads the reply to it.
    pub(crate) fn command(&mut self, command: &str) -> io::Result<SmtpReply> {
        self.send_command(command)?;
        self.read_reply()
    }

    /// Sends `QUIT` and drains the reply, ignoring failures.
    pub(crate) fn quit(&mut self) {
        if let Err(err) = self.command("QUIT") {
            tracing::trace!(error = %err, "QUIT not acknowledged");
        }
    }

    /// Reads a possibly multi-line reply.
    ///
    /// A line without a leading three-digit code ends the reply and yields a
    /// codeless [`SmtpReply`]. Lines over [`MAX_LINE`] bytes are rejected.
    pub(crate) fn read_reply(&mut self) -> io::Result<SmtpReply> {
        let mut code = None;
        let mut message_lines = Vec::new();
        loop {
            let mut raw = Vec::new();
            let bytes = (&mut self.reader)
                .take(MAX_LINE as u64 + 1)
                .read_until(b'\n', &mut raw)?;
            if bytes == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed while reading reply",
                ));
            }
            if raw.len() > MAX_LINE {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("SMTP reply line longer than {MAX_LINE} bytes"),
                ));
            }
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\r', '\n']);

            let Some(parsed_code) = parse_code(line) else {
                message_lines.push(line.to_string());
                return Ok(SmtpReply {
                    code: None,
                    message: message_lines.join("\n"),
                });
            };
            if let Some(existing) = code {
                if existing != parsed_code {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("inconsistent SMTP reply codes: {existing} vs {parsed_code}"),
                    ));
                }
            } else {
                code = Some(parsed_code);
            }

            let continuation = line.as_bytes().get(3).copied() == Some(b'-');
            message_lines.push(line.get(4..).unwrap_or_default().to_string());
            if !continuation {
                break;
            }
        }
        Ok(SmtpReply {
            code,
            message: message_lines.join("\n"),
        })
    }
}

/// Leading three-digit code; whatever follows the digits is not checked.
fn parse_code(line: &str) -> Option<u16> {
    let digits = line.get(..3)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
