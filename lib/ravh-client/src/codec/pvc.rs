use super::{annotation, annotations, metadata_name, Codec};
use ravh_api::corev1::persistent_volume_claim::requested_size;
use ravh_api::{PersistentVolumeClaim, PvcDefaults};
use ravh_core::Pvc;

/// Annotation carrying the storage tier of a claim
pub const TIER_ANNOTATION: &str = "storage.ravh.ir/tier";

pub struct PvcCodec;

impl Codec for PvcCodec {
    type Resource = Pvc;
    type Wire = PersistentVolumeClaim;
    type CreateWire = PersistentVolumeClaim;

    fn decode(wire: PersistentVolumeClaim) -> Pvc {
        Pvc {
            name: metadata_name(&wire.metadata),
            size: requested_size(&wire).unwrap_or_default().to_string(),
            tier: annotation(&wire.metadata, TIER_ANNOTATION)
                .unwrap_or_default()
                .to_string(),
        }
    }

    fn encode(pvc: &Pvc) -> PersistentVolumeClaim {
        PvcDefaults::default().claim(
            &pvc.name,
            &pvc.size,
            annotations([(TIER_ANNOTATION, pvc.tier.clone())]).unwrap_or_default(),
        )
    }

    fn encode_create(pvc: &Pvc) -> PersistentVolumeClaim {
        Self::encode(pvc)
    }
}
