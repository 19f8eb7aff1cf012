use anyhow::{Context, Result};
use ravh_client::{ConnectionConfig, ManagedResource, RavhClient, ResourceClient};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the bearer token
const ENV_TOKEN: &str = "RAVH_TOKEN";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting ravh-inventory...");

    let config = ConnectionConfig::from_env().context("loading connection configuration")?;
    let token = std::env::var(ENV_TOKEN).with_context(|| format!("{} is not set", ENV_TOKEN))?;
    let client = RavhClient::new(config, &token)?;

    info!(
        "Workspace {} in zone {} at {}",
        client.config().workspace(),
        client.config().zone(),
        client.config().host()
    );

    let instances = inventory(client.compute()).await?;
    let subnets = inventory(client.subnets()).await?;
    let external_ips = inventory(client.external_ips()).await?;
    let pvcs = inventory(client.pvcs()).await?;

    for instance in &instances {
        debug!(
            "Instance {}: {} on {} (powered on: {}, {} volumes)",
            instance.name,
            instance.size,
            instance.subnet,
            instance.powered_on,
            instance.volumes.len()
        );
    }
    for subnet in &subnets {
        debug!("Subnet {}: {} via gateway {}", subnet.name, subnet.cidr, subnet.gateway_ip);
    }
    for eip in &external_ips {
        debug!("ExternalIP {}: {} (reserved: {})", eip.name, eip.ip, eip.reserved);
    }
    for pvc in &pvcs {
        debug!("PersistentVolumeClaim {}: {} {}", pvc.name, pvc.size, pvc.tier);
    }

    Ok(())
}

async fn inventory<C: ResourceClient>(client: &C) -> Result<Vec<C::Resource>> {
    let items = client
        .list()
        .await
        .with_context(|| format!("listing {}", <C::Resource as ManagedResource>::KIND))?;

    info!(
        "Found {} {} resources",
        items.len(),
        <C::Resource as ManagedResource>::KIND
    );
    Ok(items)
}
