pub mod advisory;
pub mod external;
pub mod invoke;
pub mod registry;
pub mod safe;

pub use advisory::advise_protected_path;
pub use external::{open_external, OPEN_EXTERNAL_COMMAND};
pub use invoke::{
    invoke_action_with_toast, invoke_delete_with_toast, invoke_with_toast, Continuation,
    InvokeOptions, ERROR_TITLE, FALLBACK_ERROR_MESSAGE, SUCCESS_TITLE,
};
pub use registry::{CommandHandler, CommandRegistry};
pub use safe::{safe_invoke, DetachedBridge};
