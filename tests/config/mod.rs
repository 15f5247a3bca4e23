use crate::common::IsolatedEnv;
use hostcheck::config::{Config, ConfigError};
use hostcheck::core::network::ConnectionType;
use hostcheck::core::LogLevel;
use serial_test::serial;
use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

const BASE: [(&str, &str); 3] = [
    ("TELNET_HOSTS", "localhost:33333, db:5432"),
    ("HTTP_REQUESTS", "http://giveme500.com"),
    ("LOG_LEVEL", "debug"),
];

#[test]
fn test_loads_required_vars() {
    let config = Config::from_lookup(lookup_from(&BASE)).unwrap();

    assert_eq!(config.telnet_hosts, "localhost:33333, db:5432");
    assert_eq!(config.http_requests, "http://giveme500.com");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.http_timeout, Some(Duration::from_secs(5)));
}

#[test]
fn test_host_groups_parse_lists() {
    let config = Config::from_lookup(lookup_from(&BASE)).unwrap();
    let groups = config.host_groups();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].conn_type, ConnectionType::Telnet);
    assert_eq!(groups[0].hosts, vec!["localhost:33333", "db:5432"]);
    assert_eq!(groups[1].conn_type, ConnectionType::Http);
    assert_eq!(groups[1].hosts, vec!["http://giveme500.com"]);
}

#[test]
fn test_missing_or_empty_var_is_error() {
    for missing in ["TELNET_HOSTS", "HTTP_REQUESTS", "LOG_LEVEL"] {
        let vars: Vec<(&str, &str)> = BASE.iter().copied().filter(|(k, _)| *k != missing).collect();
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("missing required environment variable {}", missing)
        );

        let mut vars = vars.clone();
        vars.push((missing, ""));
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(name) if name == missing));
    }
}

#[test]
fn test_whitespace_host_list_is_present() {
    let mut vars = BASE.to_vec();
    vars[0] = ("TELNET_HOSTS", " ");
    let config = Config::from_lookup(lookup_from(&vars)).unwrap();

    assert_eq!(config.host_groups()[0].hosts, vec![""]);
}

#[test]
fn test_invalid_log_level_is_error() {
    let mut vars = BASE.to_vec();
    vars[2] = ("LOG_LEVEL", "blah");
    let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    assert_eq!(
        err.to_string(),
        "loglevel : BLAH not valid, must be one of : DEBUG ERROR FATAL INFO PANIC TRACE WARN"
    );
}

#[test]
fn test_http_timeout_override() {
    let cases = [
        ("30", Some(Duration::from_secs(30))),
        (" 2 ", Some(Duration::from_secs(2))),
        ("0", None),
        ("", Some(Duration::from_secs(5))),
    ];

    for (value, expected) in cases {
        let mut vars = BASE.to_vec();
        vars.push(("HTTP_TIMEOUT_SECS", value));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.http_timeout, expected, "value: {:?}", value);
    }
}

#[test]
fn test_http_timeout_rejects_garbage() {
    let mut vars = BASE.to_vec();
    vars.push(("HTTP_TIMEOUT_SECS", "soon"));
    let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();

    assert_eq!(
        err.to_string(),
        "HTTP_TIMEOUT_SECS : soon is not a valid number of seconds"
    );
}

#[test]
fn test_http_timeout_rejects_out_of_range() {
    for value in ["86401", "18446744073709551615"] {
        let mut vars = BASE.to_vec();
        vars.push(("HTTP_TIMEOUT_SECS", value));
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "value: {}", value);
        assert_eq!(
            err.to_string(),
            format!("HTTP_TIMEOUT_SECS : {} is not a valid number of seconds", value)
        );
    }

    // The ceiling itself is accepted
    let mut vars = BASE.to_vec();
    vars.push(("HTTP_TIMEOUT_SECS", "86400"));
    let config = Config::from_lookup(lookup_from(&vars)).unwrap();
    assert_eq!(config.http_timeout, Some(Duration::from_secs(86_400)));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    let env = IsolatedEnv::new();
    env.set("TELNET_HOSTS", "localhost:33333");
    env.set("HTTP_REQUESTS", "http://anothertest.com");
    env.set("LOG_LEVEL", "Warn");
    env.set("HTTP_TIMEOUT_SECS", "0");

    let config = Config::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.http_timeout, None);
}

#[test]
#[serial]
fn test_from_env_missing_var() {
    let env = IsolatedEnv::new();
    env.set("TELNET_HOSTS", "localhost:33333");
    env.set("LOG_LEVEL", "info");

    let err = Config::from_env().unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required environment variable HTTP_REQUESTS"
    );
}
