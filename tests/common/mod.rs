//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use breachwatch::config::{ApiErrorPolicy, LookupConfig};
use breachwatch::lookup::LookupController;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// Lookup settings pointing at `base_url`.
pub fn lookup_config(base_url: &str) -> LookupConfig {
    LookupConfig {
        base_url: base_url.to_string(),
        ..LookupConfig::default()
    }
}

/// Controller backed by the real HTTP client, talking to `mock`.
pub fn controller_for(mock: &MockBackend, policy: ApiErrorPolicy) -> LookupController {
    let config = LookupConfig {
        api_errors: policy,
        ..lookup_config(&mock.base_url())
    };
    LookupController::from_config(&config, tokio::runtime::Handle::current())
        .expect("Failed to build controller")
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A breach record in wire format.
pub fn breach_json(name: &str, pwn_count: u64) -> serde_json::Value {
    serde_json::json!({
        "Name": name,
        "Title": name,
        "Domain": format!("{}.com", name.to_lowercase()),
        "BreachDate": "2019-01-15",
        "Description": format!("{} was breached.", name),
        "DataClasses": ["Email addresses", "Passwords"],
        "PwnCount": pwn_count,
        "IsVerified": true,
        "IsSensitive": false
    })
}

/// Poll `check` until it returns true or `timeout` elapses.
pub async fn wait_until(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}
