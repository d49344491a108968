use multitool_core::{Notification, Notifier};
use multitool_policy::is_protected_path;
use tracing::debug;

pub const PROTECTED_PATH_TITLE: &str = "Chemin protégé";
pub const PROTECTED_PATH_MESSAGE: &str =
    "Certaines opérations peuvent nécessiter l'administrateur.";

/// Warns before working under a protected install directory without elevation.
/// Returns whether a warning was dispatched.
pub fn advise_protected_path<N>(path: &str, elevated: bool, notifier: &N) -> bool
where
    N: Notifier + ?Sized,
{
    if elevated || !is_protected_path(path) {
        return false;
    }
    debug!("Protected path without elevation: {}", path);
    notifier.notify(Notification::warning(
        PROTECTED_PATH_TITLE,
        PROTECTED_PATH_MESSAGE,
    ));
    true
}
