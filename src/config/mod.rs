//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::{validate_base_url, ConfigError};
pub use types::{ApiErrorPolicy, Config, DisplayConfig, LookupConfig, DEFAULT_BASE_URL};
