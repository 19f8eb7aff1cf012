//! Compute instances: read as `Instance`, created as `InstanceClaim`

use super::{annotation, annotations, metadata_name, Codec};
use ravh_api::cafebazaar::instance::{InstanceNetworking, InstanceSpec, InstanceTemplate};
use ravh_api::ravh::instance_claim::InstanceClaimSpec;
use ravh_api::{Instance, InstanceClaim, VolumeSpec};
use ravh_core::{Compute, Volume};
use tracing::debug;

/// Annotation carrying the IAM login flag
pub const IAM_ENABLED_ANNOTATION: &str = "compute.ravh.ir/iam-enabled";

pub struct ComputeCodec;

impl Codec for ComputeCodec {
    type Resource = Compute;
    type Wire = Instance;
    type CreateWire = InstanceClaim;

    fn decode(wire: Instance) -> Compute {
        let name = metadata_name(&wire.metadata);
        let iam_enabled = annotation(&wire.metadata, IAM_ENABLED_ANNOTATION) == Some("true");
        let spec = wire.spec;

        Compute {
            name,
            iam_enabled,
            image: spec.template.image,
            username: spec.template.username,
            size: spec.template.flavor,
            subnet: spec.networking.subnet,
            powered_on: spec.powered_on,
            volumes: decode_volumes(spec.volumes),
            external_ip: spec.networking.external_ip,
        }
    }

    fn encode(compute: &Compute) -> Instance {
        let mut instance = Instance::new(
            &compute.name,
            InstanceSpec {
                template: InstanceTemplate {
                    image: compute.image.clone(),
                    username: compute.username.clone(),
                    flavor: compute.size.clone(),
                },
                networking: InstanceNetworking {
                    subnet: compute.subnet.clone(),
                    external_ip: compute.external_ip.clone(),
                },
                volumes: encode_volumes(&compute.volumes),
                powered_on: compute.powered_on,
            },
        );
        instance.metadata.annotations = iam_annotations(compute.iam_enabled);
        instance
    }

    fn encode_create(compute: &Compute) -> InstanceClaim {
        let mut claim = InstanceClaim::new(
            &compute.name,
            InstanceClaimSpec {
                image: compute.image.clone(),
                username: compute.username.clone(),
                flavor: compute.size.clone(),
                subnet: compute.subnet.clone(),
                external_ip: compute.external_ip.clone(),
                volumes: encode_volumes(&compute.volumes),
            },
        );
        claim.metadata.annotations = iam_annotations(compute.iam_enabled);
        claim
    }
}

fn iam_annotations(enabled: bool) -> Option<std::collections::BTreeMap<String, String>> {
    annotations([(IAM_ENABLED_ANNOTATION, enabled.to_string())])
}

/// Rebuild tagged volumes from wire entries.
///
/// The first group with a non-empty name decides the variant, checked in
/// the order local disk, claim, remote disk. Entries with no name at all
/// are dropped.
pub fn decode_volumes(specs: Vec<VolumeSpec>) -> Vec<Volume> {
    specs
        .into_iter()
        .filter_map(|spec| {
            if !spec.local_disk.name.is_empty() {
                Some(Volume::LocalDisk {
                    name: spec.local_disk.name,
                    size: spec.local_disk.size,
                })
            } else if !spec.pvc.name.is_empty() {
                Some(Volume::PersistentVolumeClaim {
                    name: spec.pvc.name,
                })
            } else if !spec.remote_disk.name.is_empty() {
                Some(Volume::RemoteDisk {
                    name: spec.remote_disk.name,
                    size: spec.remote_disk.size,
                    tier: spec.remote_disk.tier,
                })
            } else {
                debug!("Skipping volume entry without a name");
                None
            }
        })
        .collect()
}

/// Emit one wire entry per volume with only its own group populated
pub fn encode_volumes(volumes: &[Volume]) -> Vec<VolumeSpec> {
    volumes
        .iter()
        .map(|volume| match volume {
            Volume::LocalDisk { name, size } => VolumeSpec::local_disk(name, size),
            Volume::PersistentVolumeClaim { name } => VolumeSpec::pvc(name),
            Volume::RemoteDisk { name, size, tier } => VolumeSpec::remote_disk(name, size, tier),
        })
        .collect()
}
