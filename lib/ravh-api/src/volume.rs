use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One entry of an instance's volume list.
///
/// The wire format has no type tag: every entry carries all three groups
/// and exactly one of them has a non-empty `name`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSpec {
    /// Ephemeral disk on the hypervisor
    #[serde(default)]
    pub local_disk: LocalDiskSpec,

    /// Reference to a PersistentVolumeClaim in the same workspace
    #[serde(default)]
    pub pvc: ClaimRefSpec,

    /// Network-attached disk
    #[serde(default)]
    pub remote_disk: RemoteDiskSpec,
}

/// Local disk attributes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocalDiskSpec {
    #[serde(default)]
    pub name: String,
    /// Size with unit (e.g. "20Gi")
    #[serde(default)]
    pub size: String,
}

/// Claim reference attributes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClaimRefSpec {
    /// Name of the PersistentVolumeClaim
    #[serde(default)]
    pub name: String,
}

/// Remote disk attributes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RemoteDiskSpec {
    #[serde(default)]
    pub name: String,
    /// Size with unit (e.g. "100Gi")
    #[serde(default)]
    pub size: String,
    /// Storage tier
    #[serde(default)]
    pub tier: String,
}

impl VolumeSpec {
    /// Entry with only the local disk group populated
    pub fn local_disk(name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            local_disk: LocalDiskSpec {
                name: name.into(),
                size: size.into(),
            },
            ..Default::default()
        }
    }

    /// Entry with only the claim reference populated
    pub fn pvc(name: impl Into<String>) -> Self {
        Self {
            pvc: ClaimRefSpec { name: name.into() },
            ..Default::default()
        }
    }

    /// Entry with only the remote disk group populated
    pub fn remote_disk(
        name: impl Into<String>,
        size: impl Into<String>,
        tier: impl Into<String>,
    ) -> Self {
        Self {
            remote_disk: RemoteDiskSpec {
                name: name.into(),
                size: size.into(),
                tier: tier.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_groups_serialized() {
        let value = serde_json::to_value(VolumeSpec::pvc("data")).unwrap();
        assert_eq!(
            value,
            json!({
                "localDisk": { "name": "", "size": "" },
                "pvc": { "name": "data" },
                "remoteDisk": { "name": "", "size": "", "tier": "" },
            })
        );
    }

    #[test]
    fn test_missing_groups_default_to_empty() {
        let spec: VolumeSpec =
            serde_json::from_value(json!({ "localDisk": { "name": "root", "size": "20Gi" } }))
                .unwrap();
        assert_eq!(spec, VolumeSpec::local_disk("root", "20Gi"));
        assert!(spec.pvc.name.is_empty());
        assert!(spec.remote_disk.name.is_empty());
    }
}
