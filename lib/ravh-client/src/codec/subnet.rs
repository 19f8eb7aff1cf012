use super::{metadata_name, Codec};
use ravh_api::cafebazaar::subnet::{SubnetRoute, SubnetSpec};
use ravh_core::{Route, Subnet};

pub struct SubnetCodec;

impl Codec for SubnetCodec {
    type Resource = Subnet;
    type Wire = ravh_api::Subnet;
    type CreateWire = ravh_api::Subnet;

    fn decode(wire: ravh_api::Subnet) -> Subnet {
        Subnet {
            name: metadata_name(&wire.metadata),
            cidr: wire.spec.cidr,
            gateway_ip: wire.spec.gateway_ip,
            routes: wire
                .spec
                .routes
                .into_iter()
                .map(|route| Route {
                    destination: route.destination,
                    via_external_ip: route.via_external_ip,
                })
                .collect(),
        }
    }

    fn encode(subnet: &Subnet) -> ravh_api::Subnet {
        ravh_api::Subnet::new(
            &subnet.name,
            SubnetSpec {
                cidr: subnet.cidr.clone(),
                gateway_ip: subnet.gateway_ip.clone(),
                routes: subnet
                    .routes
                    .iter()
                    .map(|route| SubnetRoute {
                        destination: route.destination.clone(),
                        via_external_ip: route.via_external_ip.clone(),
                    })
                    .collect(),
            },
        )
    }

    fn encode_create(subnet: &Subnet) -> ravh_api::Subnet {
        Self::encode(subnet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_omits_gateway() {
        let subnet = Subnet {
            name: "sub1".to_string(),
            cidr: "10.0.0.0/24".to_string(),
            gateway_ip: "10.0.0.1".to_string(),
            routes: vec![Route {
                destination: "0.0.0.0/0".to_string(),
                via_external_ip: "eip1".to_string(),
            }],
        };

        let value = serde_json::to_value(SubnetCodec::encode_create(&subnet)).unwrap();
        assert_eq!(
            value,
            json!({
                "apiVersion": "networking.cafebazaar.cloud/v1alpha1",
                "kind": "Subnet",
                "metadata": { "name": "sub1" },
                "spec": {
                    "cidr": "10.0.0.0/24",
                    "routes": [{ "destination": "0.0.0.0/0", "viaExternalIP": "eip1" }]
                }
            })
        );
    }

    #[test]
    fn test_round_trip_without_server_fields() {
        let subnet = Subnet {
            name: "sub1".to_string(),
            cidr: "10.0.0.0/24".to_string(),
            gateway_ip: String::new(),
            routes: vec![
                Route {
                    destination: "0.0.0.0/0".to_string(),
                    via_external_ip: "eip1".to_string(),
                },
                Route {
                    destination: "192.168.0.0/16".to_string(),
                    via_external_ip: "eip2".to_string(),
                },
            ],
        };

        let wire: ravh_api::Subnet =
            serde_json::from_value(serde_json::to_value(SubnetCodec::encode(&subnet)).unwrap())
                .unwrap();
        assert_eq!(SubnetCodec::decode(wire), subnet);
    }
}
