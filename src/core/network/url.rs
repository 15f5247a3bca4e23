//! URL validation for HTTP checks

use url::Url;

/// Check whether `candidate` is an absolute URL with a scheme and a host
///
/// Used as a gate before any HTTP request is made.
///
/// # Examples
/// - `https://validurl.com:443/path/to/my/resource` → `true`
/// - `http://localhost:8080` → `true`
/// - `invalidurl.com` → `false` (no scheme)
/// - `localhost:8080` → `false` (parses as scheme `localhost` with no host)
/// - `mailto:ops@example.com` → `false` (no host)
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
