//! `netbox_ip_addresses`

use crate::datasources::query::{FilterKey, ListDataSource};
use crate::lookup::ResourceName;
use netbox_client::{CustomFields, Endpoint, IPAddress};

#[derive(Debug, Default)]
pub struct IpAddressesDataSource;

impl ListDataSource for IpAddressesDataSource {
    type Object = IPAddress;

    const TYPE_SUFFIX: &'static str = "ip_addresses";
    const RESOURCE: ResourceName = ResourceName::new("IP Address", "IP Addresses");
    const ENDPOINT: Endpoint = Endpoint::IpAddresses;
    const FILTERS: &'static [FilterKey] = &[
        FilterKey::any("address"),
        FilterKey::any("status"),
        FilterKey::any("role"),
        FilterKey::any("tenant"),
        FilterKey::ids("tenant_id"),
        FilterKey::any("vrf"),
        FilterKey::ids("vrf_id"),
        FilterKey::any("dns_name"),
        FilterKey::any("description"),
        FilterKey::any("tag"),
        FilterKey::single("q"),
    ];
    const LABELS: &'static str = "addresses";
    const LABEL: &'static str = "address";
    const LABELS_DESCRIPTION: &'static str =
        "List of IP address strings (with prefix length) that match the query.";

    fn id(address: &IPAddress) -> u64 {
        address.id
    }

    fn label(address: &IPAddress) -> String {
        address.address.clone()
    }

    fn custom_fields(address: &IPAddress) -> &CustomFields {
        &address.custom_fields
    }
}
