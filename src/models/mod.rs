pub mod intent;
pub mod log_entry;

pub use intent::{Intent, Language};
pub use log_entry::LogEntry;
