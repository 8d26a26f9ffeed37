//! URL helpers.

use ::url::{Host, Url};

/// Whether `url` is an absolute URL pointing at `localhost`.
///
/// Bare host names without a scheme are not URLs and return `false`.
pub fn is_localhost(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.host(), Some(Host::Domain(host)) if host == "localhost"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_loopback_is_not_localhost_name() {
        assert!(!is_localhost("http://127.0.0.1:2000"));
    }

    #[test]
    fn test_localhost_without_port() {
        assert!(is_localhost("http://localhost"));
        assert!(is_localhost("http://LOCALHOST/api"));
    }

    #[test]
    fn test_localhost_subdomain() {
        assert!(!is_localhost("http://localhost.example.com"));
    }
}
