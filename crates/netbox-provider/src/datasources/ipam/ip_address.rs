//! `netbox_ip_address`

use crate::datasources::{ObjectDataSource, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    optional_string, reference_id, reference_name, tags_from_api,
};
use netbox_client::{Endpoint, IPAddress, LinkedId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct IpAddressDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpAddressModel {
    pub id: Option<String>,
    pub address: Option<String>,
    pub vrf: Option<String>,
    pub vrf_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub assigned_object_type: Option<String>,
    pub assigned_object_id: Option<String>,
    pub nat_inside: Option<String>,
    pub nat_inside_id: Option<String>,
    pub dns_name: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for IpAddressDataSource {
    type Object = IPAddress;
    type Model = IpAddressModel;

    const TYPE_SUFFIX: &'static str = "ip_address";
    const RESOURCE: ResourceName = ResourceName::new("IP Address", "IP Addresses");
    const ENDPOINT: Endpoint = Endpoint::IpAddresses;
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("address", "address")])];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about an IP address in Netbox. Identify \
             the address using `id` or `address`.",
        )
        .attribute("id", lookup_string("Unique identifier for the IP address."))
        .attribute("address", lookup_string("IPv4 or IPv6 address with mask (e.g. `10.0.0.1/24`)."))
        .attribute("vrf", computed_string("Name of the VRF."))
        .attribute("vrf_id", computed_string("ID of the VRF."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("status", computed_string("Operational status (e.g. `active`, `dhcp`)."))
        .attribute("role", computed_string("Functional role (e.g. `loopback`, `vip`)."))
        .attribute(
            "assigned_object_type",
            computed_string("Content type of the assigned object (e.g. `dcim.interface`)."),
        )
        .attribute("assigned_object_id", computed_string("ID of the assigned object."))
        .attribute("nat_inside", computed_string("Inside address for NAT."))
        .attribute("nat_inside_id", computed_string("ID of the inside address for NAT."))
        .attribute("dns_name", computed_string("Hostname or FQDN."))
        .attribute("description", computed_string("Description of the IP address."))
        .attribute("comments", computed_string("Comments about the IP address."))
        .attribute("tags", tags_attribute("IP address"))
        .attribute("custom_fields", custom_fields_attribute("IP address"))
    }

    fn map(ip: &IPAddress) -> IpAddressModel {
        IpAddressModel {
            id: id_string(ip.id),
            address: non_empty(&ip.address),
            vrf: reference_name(&ip.vrf),
            vrf_id: reference_id(&ip.vrf),
            tenant: reference_name(&ip.tenant),
            tenant_id: reference_id(&ip.tenant),
            status: choice_value(&ip.status),
            role: choice_value(&ip.role),
            assigned_object_type: optional_string(&ip.assigned_object_type),
            assigned_object_id: ip.assigned_object_id.map(|id| id.to_string()),
            nat_inside: ip
                .nat_inside
                .linked_id()
                .and(ip.nat_inside.as_ref())
                .and_then(|nat| non_empty(&nat.address)),
            nat_inside_id: reference_id(&ip.nat_inside),
            dns_name: non_empty(&ip.dns_name),
            description: non_empty(&ip.description),
            comments: non_empty(&ip.comments),
            tags: tags_from_api(&ip.tags),
            custom_fields: custom_fields_from_api(&ip.custom_fields),
        }
    }
}
