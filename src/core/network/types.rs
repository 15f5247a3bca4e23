// Core types for reachability checks
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Check strategy selected per host list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    /// Raw TCP connect-and-close probe (named after the manual `telnet host port` check)
    Telnet,
    /// HTTP GET with status code classification
    Http,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Telnet => "telnet",
            ConnectionType::Http => "http",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionType {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "telnet" => Ok(ConnectionType::Telnet),
            "http" => Ok(ConnectionType::Http),
            other => Err(CheckError::UnknownConnectionType(other.to_string())),
        }
    }
}

/// TCP dial failures; both variants name the target address
#[derive(Debug, thiserror::Error)]
pub enum DialError {
    #[error("error connecting to {addr} : {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error connecting to {addr} : timed out after {timeout:?}")]
    Timeout { addr: String, timeout: Duration },
}

/// Web client failures
#[derive(Debug, thiserror::Error)]
pub enum WebClientError {
    #[error("failed to create http client : {0}")]
    Client(#[source] isahc::Error),
    #[error("error building request for url : {url} : {source}")]
    Request {
        url: String,
        #[source]
        source: isahc::http::Error,
    },
    #[error("error connecting to {url} : {source}")]
    Transport {
        url: String,
        #[source]
        source: isahc::Error,
    },
    #[error("unable to connect to : {url}")]
    Unreachable { url: String },
}

/// Per-host check failure
///
/// Every variant is caught by the runner and recorded against the host; none of
/// them aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("URL : {0} is not valid...must be in the format <protocol>://<hostname> like https://example.com")]
    InvalidUrl(String),
    #[error(transparent)]
    Dial(#[from] DialError),
    #[error("failed to get response from host : {host} got error : {source}")]
    Request {
        host: String,
        #[source]
        source: WebClientError,
    },
    #[error("got back {status} http status code from host : {host}")]
    UnexpectedStatus { status: u16, host: String },
    #[error("encountered unknown connection type : {0}...not implemented")]
    UnknownConnectionType(String),
}

/// Group of hosts checked with the same strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGroup {
    pub conn_type: ConnectionType,
    /// Parsed entries, empty strings included
    pub hosts: Vec<String>,
}
