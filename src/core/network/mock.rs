//! Deterministic test doubles for the dialer and web client
//!
//! Defaults mirror the canned fixtures used across the test suite:
//! - `localhost:33333` is the only reachable TCP address
//! - `http://throwerror.com` fails at the transport level
//! - `http://giveme500.com` answers 502
//! - every other URL answers 200

use crate::core::network::dialer::{Connection, Dialer};
use crate::core::network::types::{DialError, WebClientError};
use crate::core::network::web_client::WebClient;
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const MOCK_REACHABLE_ADDR: &str = "localhost:33333";
pub const MOCK_ERROR_URL: &str = "http://throwerror.com";
pub const MOCK_BAD_GATEWAY_URL: &str = "http://giveme500.com";

#[derive(Debug)]
pub struct MockConnection {
    addr: String,
}

impl Connection for MockConnection {
    fn remote(&self) -> String {
        self.addr.clone()
    }
}

/// Dialer that succeeds only for addresses registered as reachable
#[derive(Debug)]
pub struct MockDialer {
    reachable: HashSet<String>,
    calls: AtomicUsize,
    last_timeout: Mutex<Option<Duration>>,
}

impl Default for MockDialer {
    fn default() -> Self {
        Self::empty().with_reachable(MOCK_REACHABLE_ADDR)
    }
}

impl MockDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dialer with no reachable addresses at all
    pub fn empty() -> Self {
        Self {
            reachable: HashSet::new(),
            calls: AtomicUsize::new(0),
            last_timeout: Mutex::new(None),
        }
    }

    pub fn with_reachable(mut self, addr: &str) -> Self {
        self.reachable.insert(addr.to_string());
        self
    }

    /// Number of dial attempts made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Timeout passed to the most recent dial
    pub fn last_timeout(&self) -> Option<Duration> {
        self.last_timeout.lock().ok().and_then(|timeout| *timeout)
    }
}

#[async_trait::async_trait]
impl Dialer for MockDialer {
    async fn dial(&self, addr: &str, timeout: Duration) -> Result<Box<dyn Connection>, DialError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_timeout.lock() {
            *last = Some(timeout);
        }
        if self.reachable.contains(addr) {
            return Ok(Box::new(MockConnection {
                addr: addr.to_string(),
            }));
        }
        Err(DialError::Connect {
            addr: addr.to_string(),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockResponse {
    Status(u16),
    Unreachable,
}

/// Web client answering from a fixed URL → response table
#[derive(Debug)]
pub struct MockWebClient {
    responses: HashMap<String, MockResponse>,
    default_status: u16,
    calls: AtomicUsize,
}

impl Default for MockWebClient {
    fn default() -> Self {
        Self::empty()
            .with_response(MOCK_ERROR_URL, MockResponse::Unreachable)
            .with_response(MOCK_BAD_GATEWAY_URL, MockResponse::Status(502))
    }
}

impl MockWebClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client answering 200 for every URL
    pub fn empty() -> Self {
        Self {
            responses: HashMap::new(),
            default_status: 200,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Number of GET requests made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl WebClient for MockWebClient {
    async fn get(&self, url: &str) -> Result<u16, WebClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some(MockResponse::Status(status)) => Ok(*status),
            Some(MockResponse::Unreachable) => Err(WebClientError::Unreachable {
                url: url.to_string(),
            }),
            None => Ok(self.default_status),
        }
    }
}
