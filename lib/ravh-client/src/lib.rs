//! Typed CRUD clients for the ravh machine control plane
//!
//! This library provides:
//! - An authenticated HTTP transport with a fixed per-request timeout
//! - One codec per resource kind, mapping the model to wire documents
//! - A generic client contract with read-after-write reconciliation
//! - A facade owning one transport shared by all per-kind clients

pub mod client;
pub mod codec;
pub mod resource_client;
pub mod transport;

pub use client::RavhClient;
pub use codec::{Codec, ComputeCodec, ExternalIpCodec, PvcCodec, SubnetCodec};
pub use resource_client::{
    ComputeClient, ExternalIpClient, KindClient, PvcClient, ResourceClient, SubnetClient,
};
pub use transport::{Transport, TransportConfig};

pub use ravh_core::{
    ClientError, Compute, ConnectionConfig, ExternalIp, ManagedResource, Pvc, Result, Route,
    Subnet, Volume,
};
