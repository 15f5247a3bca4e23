pub mod input;
pub mod log_level;
pub mod logger;
pub mod network;
pub mod runner;

pub use input::split_hosts;
pub use log_level::{validate_log_level, LogLevel, LogLevelError};
pub use logger::Logger;
pub use runner::{run_checks, RunSummary};
