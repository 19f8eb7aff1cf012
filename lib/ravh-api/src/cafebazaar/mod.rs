/// Resources served under the cafebazaar.cloud API groups

pub mod external_ip;
pub mod instance;
pub mod subnet;

pub use external_ip::ExternalIP;
pub use instance::Instance;
pub use subnet::Subnet;

/// API group for compute instances as read back from the control plane
pub const COMPUTE_GROUP: &str = "compute.cafebazaar.cloud";
/// API group for subnets and external IPs
pub const NETWORKING_GROUP: &str = "networking.cafebazaar.cloud";
/// API version shared by both groups
pub const API_VERSION: &str = "v1alpha1";
