//! `netbox_prefixes`
//!
//! `within` and `contains` take a single CIDR each.

use crate::datasources::query::{FilterKey, ListDataSource};
use crate::lookup::ResourceName;
use netbox_client::{CustomFields, Endpoint, Prefix};

#[derive(Debug, Default)]
pub struct PrefixesDataSource;

impl ListDataSource for PrefixesDataSource {
    type Object = Prefix;

    const TYPE_SUFFIX: &'static str = "prefixes";
    const RESOURCE: ResourceName = ResourceName::new("Prefix", "Prefixes");
    const ENDPOINT: Endpoint = Endpoint::Prefixes;
    const FILTERS: &'static [FilterKey] = &[
        FilterKey::any("prefix"),
        FilterKey::any("status"),
        FilterKey::any("role"),
        FilterKey::any("tenant"),
        FilterKey::ids("tenant_id"),
        FilterKey::any("vrf"),
        FilterKey::ids("vrf_id"),
        FilterKey::any("site"),
        FilterKey::ids("site_id"),
        FilterKey::any("description"),
        FilterKey::any("tag"),
        FilterKey::single("within"),
        FilterKey::single("contains"),
        FilterKey::single("q"),
    ];
    const LABELS: &'static str = "cidrs";
    const LABEL: &'static str = "prefix";
    const LABELS_DESCRIPTION: &'static str =
        "List of prefixes in CIDR notation (e.g. 192.0.2.0/24) that match the query.";

    fn id(prefix: &Prefix) -> u64 {
        prefix.id
    }

    fn label(prefix: &Prefix) -> String {
        prefix.prefix.clone()
    }

    fn custom_fields(prefix: &Prefix) -> &CustomFields {
        &prefix.custom_fields
    }
}
