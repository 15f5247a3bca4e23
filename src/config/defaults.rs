// Hardcoded defaults shared by config loading and the checkers

use std::time::Duration;

/// Comma-separated `host:port` list for TCP checks
pub const TELNET_HOSTS_VAR: &str = "TELNET_HOSTS";
/// Comma-separated URL list for HTTP checks
pub const HTTP_REQUESTS_VAR: &str = "HTTP_REQUESTS";
/// One of DEBUG|INFO|WARN|ERROR|FATAL|PANIC|TRACE, case-insensitive
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
/// Optional whole-request timeout for HTTP checks, in seconds (0 = unbounded)
pub const HTTP_TIMEOUT_VAR: &str = "HTTP_TIMEOUT_SECS";

/// TCP dial timeout for telnet checks
pub const DIAL_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP timeout used when `HTTP_TIMEOUT_SECS` is unset
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest accepted `HTTP_TIMEOUT_SECS` (one day); curl overflows on huge values
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 86_400;

/// Redirect hops followed before the last response is classified
pub const MAX_REDIRECTS: u32 = 10;
