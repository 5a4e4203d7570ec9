//! NetBox REST endpoints served by the data sources

use std::fmt;

/// A NetBox list/retrieve endpoint.
///
/// Each variant maps to `/api/<app>/<model>/` on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // Tenancy
    Tenants,
    TenantGroups,

    // DCIM
    Sites,
    SiteGroups,
    Regions,
    Locations,
    Racks,
    Manufacturers,
    DeviceRoles,
    DeviceTypes,
    Devices,
    Interfaces,

    // IPAM
    Aggregates,
    Asns,
    Prefixes,
    IpAddresses,
    Vlans,
    Vrfs,
    Roles,

    // Circuits
    Circuits,
    CircuitTypes,

    // Virtualization
    Clusters,
    VirtualMachines,
}

impl Endpoint {
    /// Path segment below `/api/`, without slashes
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Tenants => "tenancy/tenants",
            Endpoint::TenantGroups => "tenancy/tenant-groups",
            Endpoint::Sites => "dcim/sites",
            Endpoint::SiteGroups => "dcim/site-groups",
            Endpoint::Regions => "dcim/regions",
            Endpoint::Locations => "dcim/locations",
            Endpoint::Racks => "dcim/racks",
            Endpoint::Manufacturers => "dcim/manufacturers",
            Endpoint::DeviceRoles => "dcim/device-roles",
            Endpoint::DeviceTypes => "dcim/device-types",
            Endpoint::Devices => "dcim/devices",
            Endpoint::Interfaces => "dcim/interfaces",
            Endpoint::Aggregates => "ipam/aggregates",
            Endpoint::Asns => "ipam/asns",
            Endpoint::Prefixes => "ipam/prefixes",
            Endpoint::IpAddresses => "ipam/ip-addresses",
            Endpoint::Vlans => "ipam/vlans",
            Endpoint::Vrfs => "ipam/vrfs",
            Endpoint::Roles => "ipam/roles",
            Endpoint::Circuits => "circuits/circuits",
            Endpoint::CircuitTypes => "circuits/circuit-types",
            Endpoint::Clusters => "virtualization/clusters",
            Endpoint::VirtualMachines => "virtualization/virtual-machines",
        }
    }

    /// `/api/<path>/`
    pub fn list_path(self) -> String {
        format!("/api/{}/", self.path())
    }

    /// `/api/<path>/<id>/`
    pub fn object_path(self, id: u64) -> String {
        format!("/api/{}/{}/", self.path(), id)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
