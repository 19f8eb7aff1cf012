//! Resource model and shared plumbing for the ravh client
//!
//! This library provides:
//! - The resource model (Compute, Subnet, ExternalIp, Pvc) callers work with
//! - Immutable connection configuration
//! - The error type shared by every client
//! - Structural JSON Patch diffing used by updates

pub mod compute;
pub mod config;
pub mod error;
pub mod network;
pub mod patch;
pub mod resource;
pub mod storage;

pub use compute::{Compute, Volume};
pub use config::ConnectionConfig;
pub use error::{ClientError, Result};
pub use network::{ExternalIp, Route, Subnet};
pub use patch::compute_patch;
pub use resource::ManagedResource;
pub use storage::Pvc;
