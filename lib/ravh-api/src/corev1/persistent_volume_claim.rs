//! PersistentVolumeClaim documents with the control plane's fixed defaults

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{PersistentVolumeClaimSpec, VolumeResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

pub use k8s_openapi::api::core::v1::PersistentVolumeClaim;

/// Request key holding the claim size
pub const STORAGE_REQUEST: &str = "storage";

/// Fixed claim attributes the control plane expects on every request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PvcDefaults {
    pub storage_class: &'static str,
    pub access_mode: &'static str,
    pub volume_mode: &'static str,
}

impl Default for PvcDefaults {
    fn default() -> Self {
        Self {
            storage_class: "general-purpose",
            access_mode: "ReadWriteOnce",
            volume_mode: "Block",
        }
    }
}

impl PvcDefaults {
    /// Build a claim document with these defaults and the given size
    pub fn claim(
        &self,
        name: impl Into<String>,
        size: impl Into<String>,
        annotations: BTreeMap<String, String>,
    ) -> PersistentVolumeClaim {
        let requests = BTreeMap::from([(STORAGE_REQUEST.to_string(), Quantity(size.into()))]);

        PersistentVolumeClaim {
            metadata: ObjectMeta {
                name: Some(name.into()),
                annotations: (!annotations.is_empty()).then_some(annotations),
                ..Default::default()
            },
            spec: Some(PersistentVolumeClaimSpec {
                access_modes: Some(vec![self.access_mode.to_string()]),
                storage_class_name: Some(self.storage_class.to_string()),
                volume_mode: Some(self.volume_mode.to_string()),
                resources: Some(VolumeResourceRequirements {
                    requests: Some(requests),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// Requested size of a claim, if any
pub fn requested_size(claim: &PersistentVolumeClaim) -> Option<&str> {
    claim
        .spec
        .as_ref()?
        .resources
        .as_ref()?
        .requests
        .as_ref()?
        .get(STORAGE_REQUEST)
        .map(|quantity| quantity.0.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claim_carries_defaults() {
        let claim = PvcDefaults::default().claim("data", "100Gi", BTreeMap::new());
        let value = serde_json::to_value(&claim).unwrap();

        assert_eq!(value["apiVersion"], "v1");
        assert_eq!(value["kind"], "PersistentVolumeClaim");
        assert_eq!(value["metadata"], json!({ "name": "data" }));
        assert_eq!(value["spec"]["storageClassName"], "general-purpose");
        assert_eq!(value["spec"]["accessModes"], json!(["ReadWriteOnce"]));
        assert_eq!(value["spec"]["volumeMode"], "Block");
        assert_eq!(value["spec"]["resources"]["requests"]["storage"], "100Gi");
    }

    #[test]
    fn test_requested_size() {
        let claim = PvcDefaults::default().claim("data", "5Gi", BTreeMap::new());
        assert_eq!(requested_size(&claim), Some("5Gi"));
        assert_eq!(requested_size(&PersistentVolumeClaim::default()), None);
    }
}
