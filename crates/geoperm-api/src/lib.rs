//! geoperm-api: HTTP API layer
//!
//! This crate provides the HTTP layer of the distributor permission
//! service:
//! - REST endpoints via Axum
//! - Server configuration (file + environment)
//! - Logging setup
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                geoperm-api                   │
//! ├─────────────────────────────────────────────┤
//! │  http/      - HTTP REST endpoints           │
//! │  config.rs  - Configuration management      │
//! │  logging.rs - tracing-subscriber setup      │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod logging;

pub use config::ServerConfig;
