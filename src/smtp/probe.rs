use std::io::{Read, Write};

use tracing::{debug, warn};

use super::connector::SmtpConnector;
use super::error::ProbeError;
use super::options::ProbeOptions;
use super::session::SmtpSession;
use super::types::{AttemptOutcome, AttemptStage, HostAttempt, ProbeReport, SmtpReply, SmtpResult};

/// Asks each host in `mx_hosts`, in order, whether it accepts `recipient`.
///
/// The first `RCPT TO` reply decides the result. A codeless or temporary
/// reply yields [`SmtpResult::Unknown`] without trying further hosts. A host
/// that is unreachable, misbehaves or refuses `MAIL FROM` is skipped.
pub fn probe_mailbox<C>(
    connector: &C,
    recipient: &str,
    mx_hosts: &[String],
    options: &ProbeOptions,
) -> ProbeReport
where
    C: SmtpConnector + ?Sized,
{
    let mut attempts = Vec::with_capacity(mx_hosts.len());

    for host in mx_hosts {
        let (stream, peer) = match connector.connect(host, options.port, options.timeout) {
            Ok(connected) => connected,
            Err(source) => {
                let err = ProbeError::Connect {
                    host: host.clone(),
                    source,
                };
                debug!(%host, error = %err, "MX host unreachable");
                attempts.push(HostAttempt {
                    host: host.clone(),
                    address: None,
                    outcome: AttemptOutcome::Unreachable {
                        message: err.to_string(),
                    },
                });
                continue;
            }
        };

        let mut session = SmtpSession::new(stream);
        let outcome = match run_transaction(&mut session, recipient, options) {
            Ok(outcome) => {
                session.quit();
                outcome
            }
            Err(err) => {
                debug!(%host, stage = %err.stage(), error = %err, "SMTP conversation aborted");
                AttemptOutcome::ProtocolError {
                    stage: err.stage(),
                    message: err.to_string(),
                }
            }
        };

        let result = outcome.verdict();
        attempts.push(HostAttempt {
            host: host.clone(),
            address: Some(peer.to_string()),
            outcome,
        });
        if let Some(result) = result {
            debug!(%host, %recipient, %result, "RCPT TO verdict");
            return ProbeReport { result, attempts };
        }
    }

    if !mx_hosts.is_empty() {
        warn!(%recipient, hosts = mx_hosts.len(), "no MX host gave a RCPT TO verdict");
    }
    ProbeReport {
        result: SmtpResult::Unknown,
        attempts,
    }
}

fn run_transaction<S: Read + Write>(
    session: &mut SmtpSession<S>,
    recipient: &str,
    options: &ProbeOptions,
) -> Result<AttemptOutcome, ProbeError> {
    let greeting = session
        .read_reply()
        .map_err(|err| ProbeError::io(AttemptStage::Greeting, err))?;
    if !greeting.is_positive_completion() {
        return Err(ProbeError::UnexpectedReply {
            stage: AttemptStage::Greeting,
            reply: greeting,
        });
    }

    greet(session, &options.helo_host)?;

    let mail_from = exchange(
        session,
        AttemptStage::MailFrom,
        &format!("MAIL FROM:<{}>", options.mail_from),
    )?;
    if mail_from.is_failure() {
        return Ok(AttemptOutcome::MailFromRefused { reply: mail_from });
    }

    let reply = exchange(session, AttemptStage::RcptTo, &format!("RCPT TO:<{recipient}>"))?;
    Ok(match SmtpResult::from_rcpt_reply(&reply) {
        SmtpResult::Accepted => AttemptOutcome::Accepted { reply },
        SmtpResult::Rejected => AttemptOutcome::Rejected { reply },
        SmtpResult::Unknown | SmtpResult::Skipped => AttemptOutcome::Inconclusive { reply },
    })
}

/// `EHLO`, falling back to `HELO`. A refused `HELO` does not end the
/// conversation; the server gets to answer `MAIL FROM` anyway.
fn greet<S: Read + Write>(session: &mut SmtpSession<S>, helo_host: &str) -> Result<(), ProbeError> {
    let ehlo = exchange(session, AttemptStage::Ehlo, &format!("EHLO {helo_host}"))?;
    if ehlo.is_positive_completion() {
        return Ok(());
    }
    let helo = exchange(session, AttemptStage::Helo, &format!("HELO {helo_host}"))?;
    if !helo.is_positive_completion() {
        debug!(reply = %helo, "HELO refused, continuing");
    }
    Ok(())
}

fn exchange<S: Read + Write>(
    session: &mut SmtpSession<S>,
    stage: AttemptStage,
    command: &str,
) -> Result<SmtpReply, ProbeError> {
    session
        .command(command)
        .map_err(|err| ProbeError::io(stage, err))
}
