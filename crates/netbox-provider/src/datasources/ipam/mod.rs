//! IPAM data sources

mod aggregate;
mod asn;
mod ip_address;
mod ip_addresses;
mod prefix;
mod prefixes;
mod role;
mod vlan;
mod vrf;

pub use aggregate::{AggregateDataSource, AggregateModel};
pub use asn::{AsnDataSource, AsnModel};
pub use ip_address::{IpAddressDataSource, IpAddressModel};
pub use ip_addresses::IpAddressesDataSource;
pub use prefix::{PrefixDataSource, PrefixModel};
pub use prefixes::PrefixesDataSource;
pub use role::{RoleDataSource, RoleModel};
pub use vlan::{VlanDataSource, VlanModel};
pub use vrf::{VrfDataSource, VrfModel};
