//! Structural diffing between two wire documents

use json_patch::Patch;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::Result;

/// Content type for RFC 6902 patch bodies
pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Compute the RFC 6902 patch turning `old` into `new`.
///
/// Both documents are serialized first; the diff runs on the resulting
/// JSON trees and knows nothing about resource kinds.
pub fn compute_patch<T: Serialize + ?Sized>(old: &T, new: &T) -> Result<Patch> {
    let old = serde_json::to_value(old)?;
    let new = serde_json::to_value(new)?;
    let patch = diff_values(&old, &new);

    debug!("Computed patch with {} operations", patch.0.len());
    Ok(patch)
}

/// Diff two already serialized documents
pub fn diff_values(old: &Value, new: &Value) -> Patch {
    json_patch::diff(old, new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply(old: &Value, patch: &Patch) -> Value {
        let mut doc = old.clone();
        json_patch::patch(&mut doc, &patch.0).unwrap();
        doc
    }

    fn ops(patch: &Patch) -> Vec<(String, String)> {
        serde_json::to_value(patch)
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|op| {
                (
                    op["op"].as_str().unwrap().to_string(),
                    op["path"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    }

    fn subnet(cidr: &str, routes: Value) -> Value {
        json!({
            "apiVersion": "networking.cafebazaar.cloud/v1alpha1",
            "kind": "Subnet",
            "metadata": { "name": "sub1" },
            "spec": { "cidr": cidr, "routes": routes }
        })
    }

    #[test]
    fn test_identical_documents_produce_empty_patch() {
        let doc = subnet("10.0.0.0/24", json!([]));
        let patch = compute_patch(&doc, &doc).unwrap();
        assert!(patch.0.is_empty());
    }

    #[test]
    fn test_scalar_change_touches_only_that_path() {
        let routes = json!([{ "destination": "0.0.0.0/0", "viaExternalIP": "eip1" }]);
        let old = subnet("10.0.0.0/24", routes.clone());
        let new = subnet("10.0.1.0/24", routes);

        let patch = compute_patch(&old, &new).unwrap();
        assert_eq!(ops(&patch), vec![("replace".to_string(), "/spec/cidr".to_string())]);
        assert_eq!(apply(&old, &patch), new);
    }

    #[test]
    fn test_array_element_added_and_removed() {
        let one = json!([{ "destination": "0.0.0.0/0", "viaExternalIP": "eip1" }]);
        let two = json!([
            { "destination": "0.0.0.0/0", "viaExternalIP": "eip1" },
            { "destination": "192.168.0.0/16", "viaExternalIP": "eip2" }
        ]);
        let old = subnet("10.0.0.0/24", one);
        let new = subnet("10.0.0.0/24", two);

        let grow = compute_patch(&old, &new).unwrap();
        assert_eq!(ops(&grow), vec![("add".to_string(), "/spec/routes/1".to_string())]);
        assert_eq!(apply(&old, &grow), new);

        let shrink = compute_patch(&new, &old).unwrap();
        assert_eq!(ops(&shrink), vec![("remove".to_string(), "/spec/routes/1".to_string())]);
        assert_eq!(apply(&new, &shrink), old);
    }

    #[test]
    fn test_nested_object_change() {
        let old = json!({
            "metadata": { "name": "vm1", "annotations": { "compute.ravh.ir/iam-enabled": "false" } },
            "spec": { "template": { "image": "ubuntu-22.04", "flavor": "m1.small" } }
        });
        let new = json!({
            "metadata": { "name": "vm1", "annotations": { "compute.ravh.ir/iam-enabled": "true" } },
            "spec": { "template": { "image": "ubuntu-22.04", "flavor": "m1.large" } }
        });

        let patch = compute_patch(&old, &new).unwrap();
        let mut paths: Vec<String> = ops(&patch).into_iter().map(|(_, path)| path).collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                "/metadata/annotations/compute.ravh.ir~1iam-enabled".to_string(),
                "/spec/template/flavor".to_string(),
            ]
        );
        assert_eq!(apply(&old, &patch), new);
    }

    #[test]
    fn test_added_and_removed_fields() {
        let old = json!({ "spec": { "reserved": true, "legacy": "x" } });
        let new = json!({ "spec": { "reserved": true, "tier": "ssd" } });

        let patch = compute_patch(&old, &new).unwrap();
        assert_eq!(apply(&old, &patch), new);
        assert_eq!(patch.0.len(), 2);
    }
}
