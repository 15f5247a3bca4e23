//! Host list parsing for comma-delimited environment values.

/// Delimiter between host entries in `TELNET_HOSTS` / `HTTP_REQUESTS`
pub const HOST_DELIMITER: char = ',';

/// Split a delimited host list into trimmed entries
///
/// Empty pieces are kept as empty strings so the runner can skip them with a
/// warning. An empty input therefore yields `[""]`, not an empty list.
///
/// # Examples
/// - `"a, b ,c"` → `["a", "b", "c"]`
/// - `"a,,b"` → `["a", "", "b"]`
/// - `""` → `[""]`
pub fn split_hosts(input: &str) -> Vec<String> {
    input
        .split(HOST_DELIMITER)
        .map(|piece| piece.trim().to_string())
        .collect()
}
