use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::volume::VolumeSpec;

/// Instance is the read shape of a compute instance.
///
/// List, get and patch operate on this document. Creation goes through
/// [`crate::InstanceClaim`], which flattens the nested groups below.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "compute.cafebazaar.cloud",
    version = "v1alpha1",
    kind = "Instance",
    plural = "instances",
    namespaced,
    derive = "Default",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSpec {
    /// Boot configuration
    #[serde(default)]
    pub template: InstanceTemplate,

    /// Network attachments
    #[serde(default)]
    pub networking: InstanceNetworking,

    /// Attached volumes, in boot order
    #[serde(default)]
    pub volumes: Vec<VolumeSpec>,

    /// Current power state. Owned by the control plane.
    #[serde(default, skip_serializing)]
    pub powered_on: bool,
}

/// Image, flavor and login user of an instance
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstanceTemplate {
    /// Image reference (e.g. "ubuntu-22.04")
    #[serde(default)]
    pub image: String,

    /// Initial login user
    #[serde(default)]
    pub username: String,

    /// Instance size (e.g. "m1.small")
    #[serde(default)]
    pub flavor: String,
}

/// Network attachments of an instance
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InstanceNetworking {
    /// Name of the subnet the primary interface is attached to
    #[serde(default)]
    pub subnet: String,

    /// Name of the linked ExternalIP, empty when the instance has none
    #[serde(rename = "externalIP", default)]
    pub external_ip: String,
}
