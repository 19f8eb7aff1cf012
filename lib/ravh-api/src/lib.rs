//! Wire documents exchanged with the ravh machine control plane
//!
//! The control plane speaks Kubernetes-shaped JSON (`apiVersion`, `kind`,
//! `metadata`, `spec`). This library defines those documents:
//! - Instance: compute instance as returned by list/get (`compute.cafebazaar.cloud/v1alpha1`)
//! - InstanceClaim: flattened create request for an instance (`compute.ravh.ir/v1`)
//! - Subnet: private network with routes (`networking.cafebazaar.cloud/v1alpha1`)
//! - ExternalIP: public address claim (`networking.cafebazaar.cloud/v1alpha1`)
//! - PersistentVolumeClaim: block storage claim (core `v1`)

pub mod cafebazaar;
pub mod corev1;
pub mod list;
pub mod ravh;
pub mod volume;

pub use cafebazaar::{ExternalIP, Instance, Subnet};
pub use corev1::{PersistentVolumeClaim, PvcDefaults};
pub use list::ItemList;
pub use ravh::InstanceClaim;
pub use volume::VolumeSpec;
