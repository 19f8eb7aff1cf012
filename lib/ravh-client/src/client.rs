//! Facade over the per-kind clients

use crate::resource_client::{ComputeClient, ExternalIpClient, PvcClient, SubnetClient};
use crate::transport::{Transport, TransportConfig};
use ravh_core::{ConnectionConfig, Result};
use std::sync::Arc;
use tracing::debug;

/// RavhClient owns one transport and one connection configuration and
/// exposes a client per resource kind on top of them
pub struct RavhClient {
    config: Arc<ConnectionConfig>,
    compute: ComputeClient,
    subnets: SubnetClient,
    external_ips: ExternalIpClient,
    pvcs: PvcClient,
}

impl RavhClient {
    /// Create a client with the default transport configuration
    pub fn new(config: ConnectionConfig, token: &str) -> Result<Self> {
        Self::with_transport_config(config, token, TransportConfig::default())
    }

    pub fn with_transport_config(
        config: ConnectionConfig,
        token: &str,
        transport_config: TransportConfig,
    ) -> Result<Self> {
        let transport = Arc::new(Transport::with_config(token, transport_config)?);
        let config = Arc::new(config);

        debug!(
            "Connecting to {} (zone {}, workspace {})",
            config.host(),
            config.zone(),
            config.workspace()
        );

        Ok(Self {
            compute: ComputeClient::new(transport.clone(), config.clone()),
            subnets: SubnetClient::new(transport.clone(), config.clone()),
            external_ips: ExternalIpClient::new(transport.clone(), config.clone()),
            pvcs: PvcClient::new(transport, config.clone()),
            config,
        })
    }

    /// Get the connection configuration
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn compute(&self) -> &ComputeClient {
        &self.compute
    }

    pub fn subnets(&self) -> &SubnetClient {
        &self.subnets
    }

    /// ExternalIPs support list and create only
    pub fn external_ips(&self) -> &ExternalIpClient {
        &self.external_ips
    }

    pub fn pvcs(&self) -> &PvcClient {
        &self.pvcs
    }
}
