//! Subnets and external IPs

use crate::ManagedResource;

/// A private network inside the workspace
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Subnet {
    pub name: String,
    /// CIDR block (e.g. "10.0.0.0/24")
    pub cidr: String,
    /// Gateway address, assigned by the control plane
    pub gateway_ip: String,
    pub routes: Vec<Route>,
}

/// Static route through an ExternalIP
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    pub destination: String,
    pub via_external_ip: String,
}

/// A public address claim
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExternalIp {
    pub name: String,
    /// Upstream gateway, assigned by the control plane
    pub gateway_ip: String,
    /// Public address, assigned by the control plane
    pub ip: String,
    pub reserved: bool,
}

impl ManagedResource for Subnet {
    const KIND: &'static str = "Subnet";

    fn name(&self) -> &str {
        &self.name
    }

    fn absorb_server_fields(&mut self, observed: &Self) {
        self.gateway_ip = observed.gateway_ip.clone();
        self.routes = observed.routes.clone();
    }
}

impl ManagedResource for ExternalIp {
    const KIND: &'static str = "ExternalIP";

    fn name(&self) -> &str {
        &self.name
    }

    fn absorb_server_fields(&mut self, observed: &Self) {
        self.ip = observed.ip.clone();
        self.gateway_ip = observed.gateway_ip.clone();
    }
}
