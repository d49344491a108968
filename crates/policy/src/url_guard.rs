//! Allow-list check applied before a URL is handed to the OS opener.

use thiserror::Error;
use url::Url;

/// Hosts that may be opened over https, together with their subdomains.
pub const ALLOWED_HOSTS: &[&str] = &[
    "github.com",
    "drrakendu78.github.io",
    "discord.gg",
    "discord.com",
    "star-citizen-characters.com",
    "www.star-citizen-characters.com",
    "leonick.se",
    "api.github.com",
    "api.allorigins.win",
    "multitool.onivoid.fr",
    "erkul.games",
    "www.erkul.games",
    "uexcorp.space",
    "maps.adi.sc",
    "adi.sc",
];

/// Store deep links skip the host checks entirely. Matched case-sensitively.
pub const STORE_SCHEME_PREFIX: &str = "ms-windows-store://";

const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlRejection {
    #[error("Malformed URL: {0}")]
    Malformed(String),

    #[error("Scheme not allowed: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Plain http is only allowed for loopback, got host: {0}")]
    InsecureHost(String),

    #[error("Host not allowed: {0}")]
    HostNotAllowed(String),
}

/// Why a URL was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTarget {
    StoreLink,
    Loopback(String),
    AllowedHost(String),
}

pub fn evaluate_url(url: &str) -> Result<UrlTarget, UrlRejection> {
    if url.starts_with(STORE_SCHEME_PREFIX) {
        return Ok(UrlTarget::StoreLink);
    }

    let parsed = Url::parse(url).map_err(|e| UrlRejection::Malformed(e.to_string()))?;

    let scheme = parsed.scheme();
    if scheme != "https" && scheme != "http" {
        return Err(UrlRejection::UnsupportedScheme(scheme.to_string()));
    }

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(UrlRejection::MissingHost)?
        .to_ascii_lowercase();

    if scheme == "http" {
        if LOOPBACK_HOSTS.contains(&host.as_str()) {
            return Ok(UrlTarget::Loopback(host));
        }
        return Err(UrlRejection::InsecureHost(host));
    }

    if is_allowed_host(&host) {
        Ok(UrlTarget::AllowedHost(host))
    } else {
        Err(UrlRejection::HostNotAllowed(host))
    }
}

pub fn is_allowed_url(url: &str) -> bool {
    evaluate_url(url).is_ok()
}

/// The string to hand to the OS opener. Web targets are re-serialized from
/// the parsed URL so the opener gets exactly what was checked.
pub fn approved_url(url: &str) -> Result<String, UrlRejection> {
    match evaluate_url(url)? {
        UrlTarget::StoreLink => Ok(url.to_string()),
        UrlTarget::Loopback(_) | UrlTarget::AllowedHost(_) => Url::parse(url)
            .map(String::from)
            .map_err(|e| UrlRejection::Malformed(e.to_string())),
    }
}

/// Each entry is matched on its own, so subdomain-shaped entries such as
/// `api.github.com` also admit their own subdomains.
fn is_allowed_host(host: &str) -> bool {
    ALLOWED_HOSTS.iter().any(|&entry| {
        host == entry
            || host
                .strip_suffix(entry)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_hosts() {
        assert!(is_allowed_url("https://github.com/x"));
        assert!(is_allowed_url("https://discord.gg/xeczPncUY4"));
        assert!(is_allowed_url("https://www.star-citizen-characters.com/character/42"));
        assert!(is_allowed_url("https://maps.adi.sc/"));
        assert!(is_allowed_url("https://drrakendu78.github.io/TradSC/translations.json"));
    }

    #[test]
    fn test_subdomains_of_entries() {
        assert!(is_allowed_url("https://gist.github.com/abc"));
        assert!(is_allowed_url("https://sub.api.github.com"));
        assert!(is_allowed_url("https://cdn.uexcorp.space/img.png"));
    }

    #[test]
    fn test_host_is_case_insensitive() {
        assert!(is_allowed_url("https://GitHub.COM/drrakendu78"));
    }

    #[test]
    fn test_unknown_hosts_rejected() {
        assert!(!is_allowed_url("https://evil.com"));
        assert_eq!(
            evaluate_url("https://evil.com"),
            Err(UrlRejection::HostNotAllowed("evil.com".into()))
        );
    }

    #[test]
    fn test_suffix_must_be_a_label_boundary() {
        assert!(!is_allowed_url("https://evilgithub.com"));
        assert!(!is_allowed_url("https://notadi.sc"));
        assert!(!is_allowed_url("https://github.com.evil.com"));
    }

    #[test]
    fn test_http_only_for_loopback() {
        assert!(is_allowed_url("http://127.0.0.1:3000"));
        assert!(is_allowed_url("http://localhost:1420/"));
        assert!(!is_allowed_url("http://example.com"));
        assert!(!is_allowed_url("http://github.com"));
        assert!(matches!(
            evaluate_url("http://github.com"),
            Err(UrlRejection::InsecureHost(_))
        ));
    }

    #[test]
    fn test_loopback_over_https_is_not_listed() {
        assert!(!is_allowed_url("https://localhost"));
    }

    #[test]
    fn test_store_links_bypass_host_checks() {
        assert!(is_allowed_url("ms-windows-store://pdp/?productid=9NBLGGH4NNS1"));
        assert_eq!(
            evaluate_url("ms-windows-store://anything"),
            Ok(UrlTarget::StoreLink)
        );
    }

    #[test]
    fn test_store_prefix_is_case_sensitive() {
        assert!(!is_allowed_url("MS-WINDOWS-STORE://pdp/?productid=1"));
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert!(!is_allowed_url("file:///etc/passwd"));
        assert!(!is_allowed_url("javascript:alert(1)"));
        assert!(!is_allowed_url("ftp://github.com/"));
        assert!(matches!(
            evaluate_url("mailto:someone@github.com"),
            Err(UrlRejection::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_approved_url_is_the_parsed_form() {
        assert_eq!(
            approved_url(" https://github.com/dr\nrakendu78\t ").unwrap(),
            "https://github.com/drrakendu78"
        );
        assert_eq!(approved_url("https://GitHub.com").unwrap(), "https://github.com/");
        assert_eq!(
            approved_url("ms-windows-store://pdp/?productid=9NBLGGH4NNS1").unwrap(),
            "ms-windows-store://pdp/?productid=9NBLGGH4NNS1"
        );
        assert!(approved_url("https://evil.com").is_err());
    }

    #[test]
    fn test_malformed_input_fails_closed() {
        assert!(!is_allowed_url("not a url"));
        assert!(!is_allowed_url(""));
        assert!(matches!(
            evaluate_url("not a url"),
            Err(UrlRejection::Malformed(_))
        ));
    }
}
