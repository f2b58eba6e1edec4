//! # Network (TCP) Transport
//!
//! Sends raw ESC/POS bytes to a printer's raw print port (9100 on most
//! Epson and compatible network printers).
//!
//! ## Finding the Printer
//!
//! ```bash
//! # Look for the printer's address on the local network
//! $ arp -a | grep -i printer
//! ```
//!
//! ## Chunked Writes
//!
//! Writes are split into chunks (4096 bytes by default) so one large job
//! does not hand the socket a single huge buffer.

use std::io::{self, Write};
use std::net::{IpAddr, SocketAddr, TcpStream, ToSocketAddrs};

use tracing::{debug, info};

use crate::error::EscposError;
use crate::printer::PrinterConfig;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// # Network Printer Transport
///
/// ## Example
///
/// ```no_run
/// use std::io::Write;
/// use escpos_ir::printer::PrinterConfig;
/// use escpos_ir::transport::NetworkTransport;
///
/// let mut transport = NetworkTransport::connect("192.168.1.50", &PrinterConfig::default())?;
/// transport.write_all(&[0x1B, b'@'])?;
/// transport.flush()?;
/// # Ok::<(), escpos_ir::EscposError>(())
/// ```
pub struct NetworkTransport {
    stream: TcpStream,
    peer: SocketAddr,
    chunk_size: usize,
}

impl NetworkTransport {
    /// Connect to `host`, which is `HOST:PORT` or just `HOST`.
    ///
    /// Without a port, the profile's port is used. Every resolved address is
    /// tried in turn with the profile's connect timeout.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The address does not resolve
    /// - No resolved address accepts a connection within the timeout
    pub fn connect(host: &str, config: &PrinterConfig) -> Result<Self, EscposError> {
        let target = with_default_port(host, config.port);

        let addrs: Vec<SocketAddr> = target
            .to_socket_addrs()
            .map_err(|e| {
                EscposError::Transport(format!("Unable to resolve TCP address {}: {}", target, e))
            })?
            .collect();
        if addrs.is_empty() {
            return Err(EscposError::Transport(format!(
                "Unable to resolve TCP address {}: no addresses",
                target
            )));
        }

        let mut last_error = None;
        for addr in addrs {
            debug!(%addr, timeout_ms = config.connect_timeout_ms, "dialing printer");
            match TcpStream::connect_timeout(&addr, config.connect_timeout()) {
                Ok(stream) => {
                    stream.set_write_timeout(config.write_timeout())?;
                    stream.set_nodelay(true)?;
                    info!(%addr, printer = %config.name, "connected");
                    return Ok(Self {
                        stream,
                        peer: addr,
                        chunk_size: CHUNK_SIZE,
                    });
                }
                Err(e) => {
                    debug!(%addr, error = %e, "connect failed");
                    last_error = Some(e);
                }
            }
        }

        Err(EscposError::Transport(format!(
            "Unable to dial TCP address {}: {}",
            target,
            last_error.map(|e| e.to_string()).unwrap_or_default()
        )))
    }

    /// Address of the connected printer.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }
}

impl Write for NetworkTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = buf.len().min(self.chunk_size);
        self.stream.write(&buf[..len])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}

/// Append `port` to `host` unless it already names one.
///
/// Bare IPv6 addresses are bracketed.
pub fn with_default_port(host: &str, port: u16) -> String {
    if host.parse::<SocketAddr>().is_ok() {
        return host.to_string();
    }
    if let Ok(ip) = host.parse::<IpAddr>() {
        return SocketAddr::new(ip, port).to_string();
    }
    match host.rsplit_once(':') {
        Some((name, p)) if !name.is_empty() && p.parse::<u16>().is_ok() => host.to_string(),
        _ => format!("{}:{}", host, port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_with_default_port() {
        assert_eq!(with_default_port("printer.local", 9100), "printer.local:9100");
        assert_eq!(with_default_port("printer.local:9101", 9100), "printer.local:9101");
        assert_eq!(with_default_port("10.0.0.7", 9100), "10.0.0.7:9100");
        assert_eq!(with_default_port("10.0.0.7:515", 9100), "10.0.0.7:515");
        assert_eq!(with_default_port("::1", 9100), "[::1]:9100");
        assert_eq!(with_default_port("[::1]:9200", 9100), "[::1]:9200");
    }

    #[test]
    fn test_unresolvable_host() {
        let result = NetworkTransport::connect("no such host!", &PrinterConfig::default());
        assert!(matches!(result, Err(EscposError::Transport(_))));
    }

    #[test]
    fn test_streams_bytes_in_chunks() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).unwrap();
            received
        });

        let payload: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        {
            let mut transport =
                NetworkTransport::connect(&addr.to_string(), &PrinterConfig::default()).unwrap();
            assert_eq!(transport.peer_addr(), addr);
            transport.set_chunk_size(1000);
            transport.write_all(&payload).unwrap();
            transport.flush().unwrap();
        }

        assert_eq!(server.join().unwrap(), payload);
    }
}
