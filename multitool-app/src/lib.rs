pub mod commands;
pub mod config;
pub mod elevation;
pub mod handlers;
pub mod logging;
pub mod notifier;

pub use config::{Config, RunMode};
pub use handlers::build_registry;
pub use notifier::ConsoleNotifier;
