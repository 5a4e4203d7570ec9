//! `netbox_interfaces`

use crate::datasources::query::{FilterKey, ListDataSource};
use crate::lookup::ResourceName;
use netbox_client::{CustomFields, Endpoint, Interface};

#[derive(Debug, Default)]
pub struct InterfacesDataSource;

impl ListDataSource for InterfacesDataSource {
    type Object = Interface;

    const TYPE_SUFFIX: &'static str = "interfaces";
    const RESOURCE: ResourceName = ResourceName::new("Interface", "Interfaces");
    const ENDPOINT: Endpoint = Endpoint::Interfaces;
    const FILTERS: &'static [FilterKey] = &[
        FilterKey::any("name"),
        FilterKey::any("name__ic"),
        FilterKey::any("device"),
        FilterKey::ids("device_id"),
        FilterKey::any("site"),
        FilterKey::ids("site_id"),
        FilterKey::any("type"),
        FilterKey::boolean("enabled"),
        FilterKey::any("tag"),
        FilterKey::single("q"),
    ];
    const LABELS: &'static str = "names";
    const LABEL: &'static str = "name";
    const LABELS_DESCRIPTION: &'static str = "List of interface names that match the query.";

    fn id(interface: &Interface) -> u64 {
        interface.id
    }

    fn label(interface: &Interface) -> String {
        interface.name.clone()
    }

    fn custom_fields(interface: &Interface) -> &CustomFields {
        &interface.custom_fields
    }
}
