//! Compute instances

use crate::ManagedResource;

/// A virtual machine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compute {
    pub name: String,
    /// Allow IAM users of the workspace to log in
    pub iam_enabled: bool,
    /// Image reference (e.g. "ubuntu-22.04")
    pub image: String,
    /// Initial login user
    pub username: String,
    /// Instance type (e.g. "m1.small")
    pub size: String,
    /// Subnet the instance is attached to
    pub subnet: String,
    /// Power state, reported by the control plane
    pub powered_on: bool,
    /// Attached volumes, in boot order
    pub volumes: Vec<Volume>,
    /// Linked ExternalIP name, empty for none
    pub external_ip: String,
}

/// A disk attached to an instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Volume {
    /// Ephemeral disk on the hypervisor
    LocalDisk { name: String, size: String },
    /// Existing PersistentVolumeClaim
    PersistentVolumeClaim { name: String },
    /// Network-attached disk
    RemoteDisk {
        name: String,
        size: String,
        tier: String,
    },
}

impl ManagedResource for Compute {
    const KIND: &'static str = "Compute";

    fn name(&self) -> &str {
        &self.name
    }

    fn absorb_server_fields(&mut self, observed: &Self) {
        self.powered_on = observed.powered_on;
    }
}
