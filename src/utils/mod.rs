//! Shared utilities for the message layer

pub mod error;
pub mod types;
