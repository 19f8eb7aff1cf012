use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Subnet is a private network inside a workspace
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "networking.cafebazaar.cloud",
    version = "v1alpha1",
    kind = "Subnet",
    plural = "subnets",
    namespaced,
    derive = "Default",
    derive = "PartialEq"
)]
pub struct SubnetSpec {
    /// CIDR block (e.g. "10.0.0.0/24")
    #[serde(default)]
    pub cidr: String,

    /// Gateway address picked by the control plane once the subnet is up
    #[serde(rename = "gatewayIP", default, skip_serializing)]
    pub gateway_ip: String,

    /// Static routes, in evaluation order
    #[serde(default)]
    pub routes: Vec<SubnetRoute>,
}

/// Route out of a subnet through an ExternalIP
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubnetRoute {
    /// Destination CIDR
    #[serde(default)]
    pub destination: String,

    /// Name of the ExternalIP used as next hop
    #[serde(rename = "viaExternalIP", default)]
    pub via_external_ip: String,
}
