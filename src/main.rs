use hostcheck::cli::Cli;
use hostcheck::config::Config;
use hostcheck::core::network::{IsahcWebClient, TcpDialer};
use hostcheck::core::{run_checks, Logger};
use std::sync::Arc;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse_args();

    // Startup failures terminate abnormally, before any check runs, so they
    // can't be mistaken for the "some hosts unreachable" exit code.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => panic!("{}", e),
    };

    let logger = Arc::new(Logger::stdout(config.log_level));
    let client = match IsahcWebClient::new(config.http_timeout, Arc::clone(&logger)) {
        Ok(client) => client,
        Err(e) => panic!("{}", e),
    };
    let dialer = TcpDialer::new();

    let summary = run_checks(&config.host_groups(), &dialer, &client, &logger).await;

    std::process::exit(summary.exit_code());
}
