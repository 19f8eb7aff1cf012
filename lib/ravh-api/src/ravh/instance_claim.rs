use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::volume::VolumeSpec;

/// InstanceClaim asks the control plane to provision an instance.
///
/// Unlike [`crate::Instance`], the spec is flat: image, flavor and
/// network links sit directly under `spec`. Only creation accepts it;
/// the resulting instance is read back through the `instances` endpoint.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "compute.ravh.ir",
    version = "v1",
    kind = "InstanceClaim",
    plural = "instanceclaims",
    namespaced,
    derive = "Default",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct InstanceClaimSpec {
    /// Image reference
    pub image: String,

    /// Initial login user
    #[serde(default)]
    pub username: String,

    /// Instance size
    pub flavor: String,

    /// Subnet for the primary interface
    #[serde(default)]
    pub subnet: String,

    /// ExternalIP to link, empty for none
    #[serde(rename = "externalIP", default)]
    pub external_ip: String,

    /// Volumes to attach, in boot order
    #[serde(default)]
    pub volumes: Vec<VolumeSpec>,
}
