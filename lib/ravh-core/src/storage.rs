//! Persistent volume claims

use crate::ManagedResource;

/// Block storage claim
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pvc {
    pub name: String,
    /// Size with unit (e.g. "100Gi")
    pub size: String,
    /// Storage tier
    pub tier: String,
}

impl ManagedResource for Pvc {
    const KIND: &'static str = "PersistentVolumeClaim";

    fn name(&self) -> &str {
        &self.name
    }

    // Every attribute of a claim is caller-controlled.
    fn absorb_server_fields(&mut self, _observed: &Self) {}
}
