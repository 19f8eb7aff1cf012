//! Conversion between the resource model and wire documents
//!
//! Each kind has a codec that knows its wire types and how they map onto
//! the model. URLs are derived from the wire type's group, version and
//! plural, so a codec never spells out a path by hand.

pub mod compute;
pub mod external_ip;
pub mod pvc;
pub mod subnet;

pub use compute::ComputeCodec;
pub use external_ip::ExternalIpCodec;
pub use pvc::PvcCodec;
pub use subnet::SubnetCodec;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use ravh_core::{ConnectionConfig, ManagedResource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Kind-specific mapping between model and wire documents
pub trait Codec: Send + Sync + 'static {
    type Resource: ManagedResource;

    /// Document returned by list and targeted by patch and delete
    type Wire: kube::Resource<DynamicType = ()> + Serialize + DeserializeOwned + Send + Sync;

    /// Document accepted by create
    type CreateWire: kube::Resource<DynamicType = ()> + Serialize + Send + Sync;

    /// Whether get, update and delete exist for this kind
    const ITEM_OPERATIONS: bool = true;

    fn decode(wire: Self::Wire) -> Self::Resource;

    fn encode(resource: &Self::Resource) -> Self::Wire;

    fn encode_create(resource: &Self::Resource) -> Self::CreateWire;
}

/// Collection URL for the wire type `K`:
/// `{host}/machine/v1/{zone}/apis/{group}%2F{version}/namespaces/{workspace}/{plural}`
///
/// Core types (empty group) use `api` in place of the group.
pub fn collection_url<K>(config: &ConnectionConfig) -> String
where
    K: kube::Resource<DynamicType = ()>,
{
    let group = K::group(&());
    let group = if group.is_empty() { "api" } else { group.as_ref() };

    format!(
        "{}/machine/v1/{}/apis/{}%2F{}/namespaces/{}/{}",
        config.host(),
        config.zone(),
        group,
        K::version(&()),
        config.workspace(),
        K::plural(&()),
    )
}

/// URL of a single item of the wire type `K`
pub fn item_url<K>(config: &ConnectionConfig, name: &str) -> String
where
    K: kube::Resource<DynamicType = ()>,
{
    format!("{}/{}", collection_url::<K>(config), name)
}

pub(crate) fn metadata_name(metadata: &ObjectMeta) -> String {
    metadata.name.clone().unwrap_or_default()
}

pub(crate) fn annotation<'a>(metadata: &'a ObjectMeta, key: &str) -> Option<&'a str> {
    metadata
        .annotations
        .as_ref()
        .and_then(|annotations| annotations.get(key))
        .map(String::as_str)
}

pub(crate) fn annotations<const N: usize>(
    pairs: [(&str, String); N],
) -> Option<BTreeMap<String, String>> {
    let map: BTreeMap<String, String> = pairs
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key.to_string(), value))
        .collect();

    (!map.is_empty()).then_some(map)
}
