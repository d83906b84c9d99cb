//! Message types exchanged with the Docker daemon
//!
//! Every type here follows the same pattern: an immutable value object,
//! reachable only through its builder, serialized with the daemon's exact
//! wire field names.

pub mod ipam;
pub mod network;

// Re-export commonly used types

pub use ipam::{Ipam, IpamBuilder, IpamConfig};
pub use network::{NetworkConfig, NetworkConfigBuilder};

use tracing::trace;

/// Assign `value` to `slot` unless it is empty.
///
/// Returns whether the value was accepted; the builders' public setters
/// discard the flag to keep the silent-ignore contract.
fn assign_text(slot: &mut Option<String>, field: &'static str, value: String) -> bool {
    if value.is_empty() {
        trace!(field, "discarding empty value for message field");
        return false;
    }
    *slot = Some(value);
    true
}

#[cfg(test)]
mod tests;
