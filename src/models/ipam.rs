//! IPAM (IP address management) messages
//!
//! Nested inside [`NetworkConfig`](super::NetworkConfig) to describe how
//! addresses are allocated on the network. Same construction contract as
//! the parent message: builder-only, lenient setters, immutable once built.

use serde::{Deserialize, Serialize};

use super::assign_text;
use crate::utils::types::Builder;

/// Address-management policy for a network
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ipam {
    /// IPAM driver (e.g. `default`)
    #[serde(rename = "Driver", skip_serializing_if = "Option::is_none")]
    driver: Option<String>,
    /// Address pools; empty by default, never absent
    #[serde(rename = "Config", default)]
    config: Vec<IpamConfig>,
}

impl Ipam {
    /// Create a new builder
    pub fn builder() -> IpamBuilder {
        IpamBuilder::new()
    }

    /// IPAM driver, if one was set
    pub fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }

    /// Configured address pools
    pub fn config(&self) -> &[IpamConfig] {
        &self.config
    }
}

/// Builder for [`Ipam`]
#[derive(Debug, Clone, Default)]
pub struct IpamBuilder {
    driver: Option<String>,
    config: Vec<IpamConfig>,
}

impl IpamBuilder {
    /// Create a builder with no driver and an empty pool list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the IPAM driver; an empty value is discarded
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        let _ = assign_text(&mut self.driver, "driver", driver.into());
        self
    }

    /// Append an address pool
    pub fn add_config(mut self, config: IpamConfig) -> Self {
        self.config.push(config);
        self
    }

    /// Build an [`Ipam`] from the current state
    pub fn build(&self) -> Ipam {
        Ipam {
            driver: self.driver.clone(),
            config: self.config.clone(),
        }
    }
}

impl Builder<Ipam> for IpamBuilder {
    fn build(self) -> Ipam {
        IpamBuilder::build(&self)
    }
}

/// One address pool inside an IPAM policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpamConfig {
    /// Subnet in CIDR notation
    #[serde(rename = "Subnet", skip_serializing_if = "Option::is_none")]
    subnet: Option<String>,
    /// Range to allocate container addresses from
    #[serde(rename = "IPRange", skip_serializing_if = "Option::is_none")]
    ip_range: Option<String>,
    /// Gateway address for the subnet
    #[serde(rename = "Gateway", skip_serializing_if = "Option::is_none")]
    gateway: Option<String>,
}

impl IpamConfig {
    /// Create a pool from its three address fields; empty strings are
    /// treated as unset
    pub fn create(
        subnet: impl Into<String>,
        ip_range: impl Into<String>,
        gateway: impl Into<String>,
    ) -> Self {
        let mut pool = Self::default();
        let _ = assign_text(&mut pool.subnet, "subnet", subnet.into());
        let _ = assign_text(&mut pool.ip_range, "ip_range", ip_range.into());
        let _ = assign_text(&mut pool.gateway, "gateway", gateway.into());
        pool
    }

    /// Subnet in CIDR notation, if set
    pub fn subnet(&self) -> Option<&str> {
        self.subnet.as_deref()
    }

    /// Allocation range, if set
    pub fn ip_range(&self) -> Option<&str> {
        self.ip_range.as_deref()
    }

    /// Gateway address, if set
    pub fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }
}
