//! Run orchestration and reporting
//!
//! Checks every configured host in order, one at a time, and folds the outcomes
//! into a [`RunSummary`]. Per-host errors are logged and recorded here; they
//! never propagate out of [`run_checks`].

use crate::core::logger::Logger;
use crate::core::network::{
    checker::check_host,
    dialer::Dialer,
    types::HostGroup,
    web_client::WebClient,
};

/// Message prefix for each failed host in the final report
pub const FAILED_HOST_PREFIX: &str = "failed to connect to host";

/// Aggregate outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Reachable hosts, in check order
    pub succeeded: Vec<String>,
    /// Unreachable hosts, in check order
    pub failed: Vec<String>,
    /// Every parsed entry, skipped empty ones included
    pub total: usize,
}

impl RunSummary {
    pub fn all_reachable(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit code: 1 if any host failed, else 0
    pub fn exit_code(&self) -> i32 {
        if self.all_reachable() {
            0
        } else {
            1
        }
    }
}

/// Check every host of every group and report the results
pub async fn run_checks(
    groups: &[HostGroup],
    dialer: &dyn Dialer,
    client: &dyn WebClient,
    logger: &Logger,
) -> RunSummary {
    let mut summary = RunSummary {
        total: groups.iter().map(|group| group.hosts.len()).sum(),
        ..RunSummary::default()
    };

    for group in groups {
        for host in &group.hosts {
            if host.is_empty() {
                logger.warn(
                    "Runner",
                    "empty_host",
                    &format!("Host is empty string, won't try to connect : {}", host),
                );
                continue;
            }

            match check_host(host, group.conn_type, dialer, client, logger).await {
                Ok(()) => {
                    logger.debug(
                        "Runner",
                        "host_ok",
                        &format!("Successfully connected to hosts : {}", host),
                    );
                    summary.succeeded.push(host.clone());
                }
                Err(err) => {
                    logger.error(
                        "Runner",
                        "host_failed",
                        &format!("Failed to connect to host : {} with Error : {}", host, err),
                    );
                    summary.failed.push(host.clone());
                }
            }
        }
    }

    report(&summary, logger);
    summary
}

/// Log the summary line, each failed host and the exit decision
pub fn report(summary: &RunSummary, logger: &Logger) {
    logger.run_summary(summary.succeeded.len(), summary.failed.len(), summary.total);
    for host in &summary.failed {
        logger.info(
            "Runner",
            "failed_host",
            &format!("{} : {}", FAILED_HOST_PREFIX, host),
        );
    }

    if summary.all_reachable() {
        logger.debug(
            "Runner",
            "exit",
            "We were able to connect to all hosts, exiting 0",
        );
    } else {
        logger.debug(
            "Runner",
            "exit",
            &format!(
                "We could not connect to [{}] host(s) so exiting process with exit code 1",
                summary.failed.len()
            ),
        );
    }
}
