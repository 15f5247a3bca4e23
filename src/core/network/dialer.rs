//! TCP Dialer Abstraction
//!
//! The checker opens TCP connections through the [`Dialer`] trait so that its
//! branching can be exercised without real sockets. [`TcpDialer`] is the
//! production implementation; see `mock::MockDialer` for the test double.

use crate::core::network::types::DialError;
use std::time::Duration;
use tokio::net::TcpStream;

/// An open connection returned by a [`Dialer`]
///
/// Dropping the value closes the underlying socket.
pub trait Connection: Send {
    /// Remote end of the connection, for logging
    fn remote(&self) -> String;
}

impl Connection for TcpStream {
    fn remote(&self) -> String {
        self.peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

#[async_trait::async_trait]
pub trait Dialer: Send + Sync {
    /// Open a TCP connection to `addr` (`host:port`), giving up after `timeout`
    ///
    /// The network family is always TCP, so it is not a parameter.
    async fn dial(&self, addr: &str, timeout: Duration) -> Result<Box<dyn Connection>, DialError>;
}

/// Production dialer backed by tokio's `TcpStream`
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpDialer;

impl TcpDialer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Dialer for TcpDialer {
    async fn dial(&self, addr: &str, timeout: Duration) -> Result<Box<dyn Connection>, DialError> {
        match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => Ok(Box::new(stream)),
            Ok(Err(source)) => Err(DialError::Connect {
                addr: addr.to_string(),
                source,
            }),
            Err(_elapsed) => Err(DialError::Timeout {
                addr: addr.to_string(),
                timeout,
            }),
        }
    }
}
