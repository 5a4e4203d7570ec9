//! DCIM data sources

mod device;
mod device_role;
mod device_type;
mod devices;
mod interface;
mod interfaces;
mod location;
mod manufacturer;
mod rack;
mod region;
mod site;
mod site_group;

pub use device::{DeviceDataSource, DeviceModel};
pub use device_role::{DeviceRoleDataSource, DeviceRoleModel};
pub use device_type::{DeviceTypeDataSource, DeviceTypeModel};
pub use devices::DevicesDataSource;
pub use interface::{InterfaceDataSource, InterfaceModel};
pub use interfaces::InterfacesDataSource;
pub use location::{LocationDataSource, LocationModel};
pub use manufacturer::{ManufacturerDataSource, ManufacturerModel};
pub use rack::{RackDataSource, RackModel};
pub use region::{RegionDataSource, RegionModel};
pub use site::{SiteDataSource, SiteModel};
pub use site_group::{SiteGroupDataSource, SiteGroupModel};

#[cfg(test)]
mod devices_test;
#[cfg(test)]
mod interface_test;
