use clap::Parser;

/// Hosts and log level are read from TELNET_HOSTS, HTTP_REQUESTS and LOG_LEVEL;
/// HTTP_TIMEOUT_SECS optionally bounds each HTTP check (0 = no timeout).
#[derive(Parser, Debug)]
#[command(name = "hostcheck")]
#[command(version = concat!("Ver:", env!("CARGO_PKG_VERSION")))]
#[command(about = "Check TCP and HTTP reachability of configured hosts")]
pub struct Cli {}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
