//! Core types for durable-viewer
//!
//! Domain records shared by the listing client, the HTTP layer and the CLI.

pub mod config;
pub mod constants;
mod credentials;
pub mod env_config;
mod records;

pub use config::ViewerConfig;
pub use constants::*;
pub use credentials::*;
pub use records::*;
