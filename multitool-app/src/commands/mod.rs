pub mod classify;
pub mod fs;
pub mod links;
