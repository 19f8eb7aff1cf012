/// Core `v1` resources served by the control plane

pub mod persistent_volume_claim;

pub use persistent_volume_claim::{PersistentVolumeClaim, PvcDefaults};
