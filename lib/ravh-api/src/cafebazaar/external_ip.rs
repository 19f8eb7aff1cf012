use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ExternalIP claims a public address for a workspace
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "networking.cafebazaar.cloud",
    version = "v1alpha1",
    kind = "ExternalIP",
    plural = "externalips",
    namespaced,
    derive = "Default",
    derive = "PartialEq"
)]
pub struct ExternalIPSpec {
    /// Keep the address allocated when nothing is attached to it
    #[serde(default)]
    pub reserved: bool,

    /// Allocated public address. Owned by the control plane.
    #[serde(default, skip_serializing)]
    pub ip: String,

    /// Upstream gateway for the address. Owned by the control plane.
    #[serde(rename = "gatewayIP", default, skip_serializing)]
    pub gateway_ip: String,
}
