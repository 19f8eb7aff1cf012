/// Resources served under the ravh.ir API groups

pub mod instance_claim;

pub use instance_claim::InstanceClaim;

/// API group for instance creation requests
pub const COMPUTE_GROUP: &str = "compute.ravh.ir";
/// API version for instance creation requests
pub const API_VERSION: &str = "v1";
