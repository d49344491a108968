use regex::Regex;
use std::fmt::Display;
use std::sync::OnceLock;

pub const ACCESS_DENIED_MESSAGE: &str = "Accès refusé. Essayez de relancer l'application en tant qu'administrateur ou d'utiliser un dossier hors 'Program Files'.";

fn access_denied_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"(?i)Accès refusé|Access is denied|os error 5|Permission denied|Permission refusée",
            )
            .ok()
        })
        .as_ref()
}

fn protected_path_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i):\\Program Files( \(x86\))?\\").ok())
        .as_ref()
}

/// Replaces permission-denial errors with an actionable hint. Anything else
/// is returned as its plain string form.
pub fn to_friendly_message(error: impl Display) -> String {
    let msg = error.to_string();
    match access_denied_pattern() {
        Some(re) if re.is_match(&msg) => ACCESS_DENIED_MESSAGE.to_string(),
        _ => msg,
    }
}

pub fn is_permission_denied(error: impl Display) -> bool {
    access_denied_pattern().is_some_and(|re| re.is_match(&error.to_string()))
}

/// Whether `path` lives under a Windows `Program Files` directory.
///
/// Advisory only: answers `false` if the pattern is unavailable.
pub fn is_protected_path(path: &str) -> bool {
    protected_path_pattern().is_some_and(|re| re.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_signatures_map_to_hint() {
        for raw in [
            "Accès refusé. (os error 5)",
            "Access is denied.",
            "Failed to remove dir: os error 5",
            "Permission denied (os error 13)",
            "Permission refusée",
            "ACCESS IS DENIED",
            "accès REFUSÉ",
        ] {
            assert_eq!(to_friendly_message(raw), ACCESS_DENIED_MESSAGE, "input: {raw}");
            assert!(is_permission_denied(raw));
        }
    }

    #[test]
    fn test_other_messages_pass_through() {
        assert_eq!(to_friendly_message("disk full"), "disk full");
        assert_eq!(to_friendly_message(""), "");
        assert!(!is_permission_denied("file not found"));
    }

    #[test]
    fn test_accepts_any_display() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        assert_eq!(to_friendly_message(err), ACCESS_DENIED_MESSAGE);
        assert_eq!(to_friendly_message(42), "42");
    }

    #[test]
    fn test_protected_paths() {
        assert!(is_protected_path(r"C:\Program Files\Roberts Space Industries\StarCitizen\LIVE"));
        assert!(is_protected_path(r"D:\Program Files (x86)\RSI\StarCitizen"));
        assert!(is_protected_path(r"c:\program files\rsi\"));
    }

    #[test]
    fn test_unprotected_paths() {
        assert!(!is_protected_path(r"E:\Games\StarCitizen\LIVE"));
        assert!(!is_protected_path(r"C:\Program FilesX\foo"));
        assert!(!is_protected_path("/home/user/StarCitizen"));
        assert!(!is_protected_path(""));
    }
}
