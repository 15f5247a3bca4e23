//! Connection Dispatcher
//!
//! Routes a single host entry to the check matching its connection type and
//! classifies the outcome:
//! - `telnet`: TCP dial with a 5 second timeout, connection closed straight away
//! - `http`: URL validation, then GET and status code classification
//!
//! Checks hold no state between calls; the same inputs always produce the same
//! outcome against the same network.

use crate::config::defaults::DIAL_TIMEOUT;
use crate::core::logger::Logger;
use crate::core::network::{
    dialer::Dialer,
    types::{CheckError, ConnectionType},
    url::is_valid_url,
    web_client::WebClient,
};

/// Whether an HTTP status code proves the host is reachable
///
/// 1xx-3xx count as reachable, and so do 401 and 403: a host rejecting our
/// credentials is still up and speaking HTTP. Everything else is a failure.
pub fn is_reachable_status(status: u16) -> bool {
    matches!(status, 100..=399 | 401 | 403)
}

/// Check a host whose connection type is still a raw tag
///
/// Unknown tags fail this host only, with `CheckError::UnknownConnectionType`.
pub async fn can_connect(
    host: &str,
    conn_type: &str,
    dialer: &dyn Dialer,
    client: &dyn WebClient,
    logger: &Logger,
) -> Result<(), CheckError> {
    logger.check_start(host, conn_type);
    let conn_type: ConnectionType = conn_type.parse()?;
    dispatch(host, conn_type, dialer, client, logger).await
}

/// Check a single host with the given strategy
///
/// # Returns
/// * `Ok(())` - Host is reachable
/// * `Err(CheckError)` - Validation, transport or status failure for this host
pub async fn check_host(
    host: &str,
    conn_type: ConnectionType,
    dialer: &dyn Dialer,
    client: &dyn WebClient,
    logger: &Logger,
) -> Result<(), CheckError> {
    logger.check_start(host, conn_type.as_str());
    dispatch(host, conn_type, dialer, client, logger).await
}

async fn dispatch(
    host: &str,
    conn_type: ConnectionType,
    dialer: &dyn Dialer,
    client: &dyn WebClient,
    logger: &Logger,
) -> Result<(), CheckError> {
    match conn_type {
        ConnectionType::Telnet => check_tcp(host, dialer, logger).await,
        ConnectionType::Http => check_http(host, client, logger).await,
    }
}

async fn check_tcp(host: &str, dialer: &dyn Dialer, logger: &Logger) -> Result<(), CheckError> {
    let conn = dialer.dial(host, DIAL_TIMEOUT).await?;
    logger.trace(
        "Checker",
        "tcp_connected",
        &format!("connected to {}, closing connection", conn.remote()),
    );
    drop(conn);
    Ok(())
}

async fn check_http(host: &str, client: &dyn WebClient, logger: &Logger) -> Result<(), CheckError> {
    if !is_valid_url(host) {
        return Err(CheckError::InvalidUrl(host.to_string()));
    }

    let status = client.get(host).await.map_err(|source| CheckError::Request {
        host: host.to_string(),
        source,
    })?;
    logger.debug(
        "Checker",
        "http_response",
        &format!("got {} response from {}", status, host),
    );

    if is_reachable_status(status) {
        Ok(())
    } else {
        Err(CheckError::UnexpectedStatus {
            status,
            host: host.to_string(),
        })
    }
}
