pub mod config;
pub mod refusal;

// Re-export commonly used types for convenience.
pub use config::ResponderConfig;
pub use refusal::{RefusalCategory, RefusalResponder, RefusalResponse};
