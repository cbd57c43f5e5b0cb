//! Check whether an email address appears in known data breaches.
//!
//! - `breach` - Wire model of the lookup service
//! - `lookup` - HTTP client, workflow state and the lookup controller
//! - `report` - Turns workflow state into a display-ready report
//! - `ui` - Interactive terminal front end
//! - `config` - TOML configuration

pub mod breach;
pub mod config;
pub mod logging;
pub mod lookup;
pub mod mvi;
pub mod report;
pub mod ui;
