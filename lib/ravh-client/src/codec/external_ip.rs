use super::{metadata_name, Codec};
use ravh_api::cafebazaar::external_ip::ExternalIPSpec;
use ravh_api::ExternalIP;
use ravh_core::ExternalIp;

/// ExternalIPs can only be listed and created
pub struct ExternalIpCodec;

impl Codec for ExternalIpCodec {
    type Resource = ExternalIp;
    type Wire = ExternalIP;
    type CreateWire = ExternalIP;

    const ITEM_OPERATIONS: bool = false;

    fn decode(wire: ExternalIP) -> ExternalIp {
        ExternalIp {
            name: metadata_name(&wire.metadata),
            gateway_ip: wire.spec.gateway_ip,
            ip: wire.spec.ip,
            reserved: wire.spec.reserved,
        }
    }

    fn encode(external_ip: &ExternalIp) -> ExternalIP {
        ExternalIP::new(
            &external_ip.name,
            ExternalIPSpec {
                reserved: external_ip.reserved,
                ip: external_ip.ip.clone(),
                gateway_ip: external_ip.gateway_ip.clone(),
            },
        )
    }

    fn encode_create(external_ip: &ExternalIp) -> ExternalIP {
        Self::encode(external_ip)
    }
}
