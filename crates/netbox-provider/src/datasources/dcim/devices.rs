//! `netbox_devices`

use crate::datasources::query::{FilterKey, ListDataSource};
use crate::lookup::ResourceName;
use netbox_client::{CustomFields, Device, Endpoint};

#[derive(Debug, Default)]
pub struct DevicesDataSource;

impl ListDataSource for DevicesDataSource {
    type Object = Device;

    const TYPE_SUFFIX: &'static str = "devices";
    const RESOURCE: ResourceName = ResourceName::new("Device", "Devices");
    const ENDPOINT: Endpoint = Endpoint::Devices;
    const FILTERS: &'static [FilterKey] = &[
        FilterKey::any("name"),
        FilterKey::any("name__ic"),
        FilterKey::any("serial"),
        FilterKey::any("status"),
        FilterKey::any("site"),
        FilterKey::any("tag"),
        FilterKey::single("q"),
    ];
    const LABELS: &'static str = "names";
    const LABEL: &'static str = "name";
    const LABELS_DESCRIPTION: &'static str = "Best-effort list of device names that match the query. \
         Unnamed devices appear as an empty string.";

    fn id(device: &Device) -> u64 {
        device.id
    }

    fn label(device: &Device) -> String {
        device.name.clone().unwrap_or_default()
    }

    fn custom_fields(device: &Device) -> &CustomFields {
        &device.custom_fields
    }
}
