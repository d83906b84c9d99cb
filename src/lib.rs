//! # Docker-Client-RS
//!
//! Message layer for the Docker Engine API. Request bodies are modeled as
//! immutable value objects produced by validating fluent builders, with the
//! daemon's wire field names mapped declaratively through serde.
//!
//! ## Features
//!
//! - **Wire Compatible**: serializes to the exact field names the daemon
//!   expects (`Name`, `Driver`, `IPAM`, `Options`, `CheckDuplicate`, ...)
//! - **Builder Construction**: value objects are only reachable through
//!   their builders; once built they never change
//! - **Lenient Setters**: invalid input (empty names, empty option keys) is
//!   discarded and the previous value retained, so optional chained calls
//!   never need guarding at call sites
//! - **Independent Snapshots**: a builder can be reused; every `build` call
//!   produces a value sharing no mutable state with the builder
//!
//! ## Quick Start
//!
//! ```rust
//! use docker_client_rs::{NetworkConfig, Result};
//!
//! fn request_body() -> Result<String> {
//!     let config = NetworkConfig::builder()
//!         .with_name("frontend")
//!         .with_driver("bridge")
//!         .add_option("com.docker.network.bridge.enable_icc", "true")
//!         .check_duplicate(true)
//!         .build();
//!     config.to_json()
//! }
//! # request_body().unwrap();
//! ```

#![warn(clippy::all)]

pub mod models;
pub mod utils;

// Re-export main types
pub use models::{Ipam, IpamBuilder, IpamConfig, NetworkConfig, NetworkConfigBuilder};
pub use utils::error::{Error, Result};
pub use utils::types::Builder;
