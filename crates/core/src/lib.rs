pub mod error;
pub mod traits;
pub mod types;

pub use error::BridgeError;
pub use traits::{CommandBridge, Notifier};
pub use types::{CommandOutcome, CommandRequest, Notification, SuccessMessage, Variant};
