//! Connection configuration shared by every resource client

use crate::{ClientError, Result};

/// Environment variable holding the control plane URL
pub const ENV_HOST: &str = "RAVH_HOST";
/// Environment variable holding the workspace name
pub const ENV_WORKSPACE: &str = "RAVH_WORKSPACE";
/// Environment variable holding the workspace identifier
pub const ENV_WORKSPACE_ID: &str = "RAVH_WORKSPACE_ID";
/// Environment variable holding the availability zone
pub const ENV_ZONE: &str = "RAVH_ZONE";

/// Where the control plane lives and which workspace to operate on.
///
/// Built once and shared read-only by every client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    host: String,
    workspace: String,
    workspace_id: String,
    zone: String,
}

impl ConnectionConfig {
    pub fn new(
        host: impl Into<String>,
        workspace: impl Into<String>,
        workspace_id: impl Into<String>,
        zone: impl Into<String>,
    ) -> Result<Self> {
        let host = host.into().trim_end_matches('/').to_string();
        let workspace = workspace.into();
        let zone = zone.into();

        if host.is_empty() {
            return Err(ClientError::InvalidConfiguration("host is empty".to_string()));
        }
        if workspace.is_empty() {
            return Err(ClientError::InvalidConfiguration("workspace is empty".to_string()));
        }
        if zone.is_empty() {
            return Err(ClientError::InvalidConfiguration("zone is empty".to_string()));
        }

        Ok(Self {
            host,
            workspace,
            workspace_id: workspace_id.into(),
            zone,
        })
    }

    /// Load from `RAVH_HOST`, `RAVH_WORKSPACE`, `RAVH_WORKSPACE_ID` and `RAVH_ZONE`
    pub fn from_env() -> Result<Self> {
        Self::new(
            required_env(ENV_HOST)?,
            required_env(ENV_WORKSPACE)?,
            std::env::var(ENV_WORKSPACE_ID).unwrap_or_default(),
            required_env(ENV_ZONE)?,
        )
    }

    /// Control plane base URL, without trailing slash
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }
}

fn required_env(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ClientError::InvalidConfiguration(format!("{} is not set", key)))
}
