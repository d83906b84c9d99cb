//! Network creation messages (`POST /networks/create`)
//!
//! `NetworkConfig` is the request body for creating a network. It is built
//! through [`NetworkConfigBuilder`], which validates input field by field
//! and silently retains the previous value when a setter receives something
//! unusable (an empty name, an empty option key). Callers therefore never
//! need to guard chained setter calls; see the builder docs for the exact
//! accept/ignore rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use super::assign_text;
use super::ipam::Ipam;
use crate::utils::error::Result;
use crate::utils::types::Builder;

/// Request body for creating a network
///
/// Immutable once built. Unknown wire keys are ignored when decoding a
/// body, and only the five declared fields are ever encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network name
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Driver selecting the network implementation (e.g. `bridge`)
    #[serde(rename = "Driver", skip_serializing_if = "Option::is_none")]
    driver: Option<String>,
    /// Address-management policy for the network
    #[serde(rename = "IPAM", skip_serializing_if = "Option::is_none")]
    ipam: Option<Ipam>,
    /// Driver-specific options; empty by default, never absent
    #[serde(rename = "Options", default)]
    options: BTreeMap<String, String>,
    /// Ask the daemon to reject networks with duplicate names
    #[serde(rename = "CheckDuplicate", default)]
    check_duplicate: bool,
}

impl NetworkConfig {
    /// Create a new builder
    pub fn builder() -> NetworkConfigBuilder {
        NetworkConfigBuilder::new()
    }

    /// Network name, if one was set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Network driver, if one was set
    pub fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }

    /// Address-management policy, if one was set
    pub fn ipam(&self) -> Option<&Ipam> {
        self.ipam.as_ref()
    }

    /// Driver-specific options
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Whether the daemon should reject duplicate names
    pub fn check_duplicate(&self) -> bool {
        self.check_duplicate
    }

    /// Encode this message as a JSON request body
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a message from a JSON body; unknown keys are ignored
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Builder for [`NetworkConfig`]
///
/// Setters consume and return the builder for chaining. `build` borrows,
/// so a builder can produce any number of snapshots; each one copies the
/// accumulated state and is unaffected by later builder mutation.
#[derive(Debug, Clone, Default)]
pub struct NetworkConfigBuilder {
    name: Option<String>,
    driver: Option<String>,
    ipam: Option<Ipam>,
    options: BTreeMap<String, String>,
    check_duplicate: bool,
}

impl NetworkConfigBuilder {
    /// Create a builder with an empty options map and the flag cleared
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the network name; an empty value is discarded
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let _ = assign_text(&mut self.name, "name", name.into());
        self
    }

    /// Set the network driver; an empty value is discarded
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        let _ = assign_text(&mut self.driver, "driver", driver.into());
        self
    }

    /// Set the address-management policy
    pub fn with_ipam(mut self, ipam: Ipam) -> Self {
        self.ipam = Some(ipam);
        self
    }

    /// Insert or overwrite a driver option
    ///
    /// An empty key is discarded and the map left untouched; the value is
    /// stored verbatim, without validation.
    pub fn add_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() {
            trace!("discarding network option with empty key");
        } else {
            self.options.insert(key, value.into());
        }
        self
    }

    /// Set whether the daemon should reject duplicate names
    pub fn check_duplicate(mut self, check: bool) -> Self {
        self.check_duplicate = check;
        self
    }

    /// Build a [`NetworkConfig`] from the current state
    ///
    /// Never fails: an unset name is legal here and the caller's
    /// responsibility to avoid. The options map is copied, so the snapshot
    /// is independent of the builder.
    pub fn build(&self) -> NetworkConfig {
        NetworkConfig {
            name: self.name.clone(),
            driver: self.driver.clone(),
            ipam: self.ipam.clone(),
            options: self.options.clone(),
            check_duplicate: self.check_duplicate,
        }
    }
}

impl Builder<NetworkConfig> for NetworkConfigBuilder {
    fn build(self) -> NetworkConfig {
        NetworkConfigBuilder::build(&self)
    }
}
