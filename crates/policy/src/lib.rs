pub mod fs_permissions;
pub mod url_guard;

pub use fs_permissions::{
    is_permission_denied, is_protected_path, to_friendly_message, ACCESS_DENIED_MESSAGE,
};
pub use url_guard::{
    approved_url, evaluate_url, is_allowed_url, UrlRejection, UrlTarget, ALLOWED_HOSTS,
};
