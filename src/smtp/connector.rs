use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Opens the transport to one MX host.
pub trait SmtpConnector {
    type Stream: Read + Write;

    /// Connects to `host:port`, returning the stream and the peer address.
    fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> io::Result<(Self::Stream, SocketAddr)>;
}

/// Plain TCP; addresses come from the system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl SmtpConnector for TcpConnector {
    type Stream = TcpStream;

    fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> io::Result<(TcpStream, SocketAddr)> {
        let deadline = (!timeout.is_zero()).then_some(timeout);
        let mut last_err = None;
        for addr in (host, port).to_socket_addrs()? {
            let attempt = match deadline {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => {
                    stream.set_read_timeout(deadline)?;
                    stream.set_write_timeout(deadline)?;
                    return Ok((stream, addr));
                }
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                "no socket address available",
            )
        }))
    }
}
