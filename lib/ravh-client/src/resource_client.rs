//! Generic CRUD contract and its per-kind instantiations

use crate::codec::{self, Codec, ComputeCodec, ExternalIpCodec, PvcCodec, SubnetCodec};
use crate::transport::Transport;
use async_trait::async_trait;
use ravh_api::ItemList;
use ravh_core::{compute_patch, ClientError, ConnectionConfig, ManagedResource, Result};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// CRUD operations over one resource kind.
///
/// `create` and `update` write, then read the resource back and copy the
/// server-assigned attributes into the caller's value. If the write
/// succeeds but the read-back fails, the error is returned and the caller's
/// value keeps whatever it had before.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    type Resource: ManagedResource;

    /// Every item of the collection; empty when there are none
    async fn list(&self) -> Result<Vec<Self::Resource>>;

    /// Look up one item by name, failing with [`ClientError::NotFound`]
    async fn get(&self, name: &str) -> Result<Self::Resource>;

    async fn create(&self, resource: &mut Self::Resource) -> Result<()>;

    async fn update(&self, resource: &mut Self::Resource) -> Result<()>;

    /// Delete by name. Whatever the control plane answers for a missing
    /// item is returned as is.
    async fn delete(&self, resource: &Self::Resource) -> Result<()>;
}

/// [`ResourceClient`] for the kind described by codec `C`
pub struct KindClient<C: Codec> {
    transport: Arc<Transport>,
    config: Arc<ConnectionConfig>,
    codec: PhantomData<fn() -> C>,
}

pub type ComputeClient = KindClient<ComputeCodec>;
pub type SubnetClient = KindClient<SubnetCodec>;
pub type ExternalIpClient = KindClient<ExternalIpCodec>;
pub type PvcClient = KindClient<PvcCodec>;

impl<C: Codec> KindClient<C> {
    pub fn new(transport: Arc<Transport>, config: Arc<ConnectionConfig>) -> Self {
        Self {
            transport,
            config,
            codec: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        codec::collection_url::<C::Wire>(&self.config)
    }

    pub fn create_url(&self) -> String {
        codec::collection_url::<C::CreateWire>(&self.config)
    }

    pub fn item_url(&self, name: &str) -> String {
        codec::item_url::<C::Wire>(&self.config, name)
    }

    fn kind() -> &'static str {
        <C::Resource as ManagedResource>::KIND
    }

    fn require_item_operations(operation: &str) {
        if !C::ITEM_OPERATIONS {
            unimplemented!("{} does not support {}", Self::kind(), operation);
        }
    }

    /// List and scan for `name`. Single-item GETs are not used: the
    /// control plane does not serve them consistently for every kind.
    async fn find(&self, name: &str) -> Result<C::Resource> {
        self.list()
            .await?
            .into_iter()
            .find(|resource| resource.name() == name)
            .ok_or_else(|| ClientError::NotFound {
                kind: Self::kind(),
                name: name.to_string(),
            })
    }

    async fn read_back(&self, resource: &mut C::Resource) -> Result<()> {
        let observed = self.find(resource.name()).await?;
        resource.absorb_server_fields(&observed);
        Ok(())
    }
}

#[async_trait]
impl<C: Codec> ResourceClient for KindClient<C> {
    type Resource = C::Resource;

    async fn list(&self) -> Result<Vec<C::Resource>> {
        let body = self.transport.get(&self.collection_url()).await?;
        let list: ItemList<C::Wire> = serde_json::from_slice(&body)?;
        let items: Vec<C::Resource> = list.into_items().into_iter().map(C::decode).collect();

        debug!("Listed {} {} items", items.len(), Self::kind());
        Ok(items)
    }

    async fn get(&self, name: &str) -> Result<C::Resource> {
        Self::require_item_operations("get");
        self.find(name).await
    }

    async fn create(&self, resource: &mut C::Resource) -> Result<()> {
        let document = C::encode_create(resource);
        self.transport.post(&self.create_url(), &document).await?;
        info!("Created {} {}", Self::kind(), resource.name());

        self.read_back(resource).await
    }

    async fn update(&self, resource: &mut C::Resource) -> Result<()> {
        Self::require_item_operations("update");

        let current = self.find(resource.name()).await?;
        let patch = compute_patch(&C::encode(&current), &C::encode(resource))?;
        self.transport
            .patch(&self.item_url(resource.name()), &patch)
            .await?;
        info!(
            "Patched {} {} ({} operations)",
            Self::kind(),
            resource.name(),
            patch.0.len()
        );

        self.read_back(resource).await
    }

    async fn delete(&self, resource: &C::Resource) -> Result<()> {
        Self::require_item_operations("delete");

        self.transport.delete(&self.item_url(resource.name())).await?;
        info!("Deleted {} {}", Self::kind(), resource.name());
        Ok(())
    }
}
