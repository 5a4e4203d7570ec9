//! Data sources
//!
//! Single-object data sources implement [`ObjectDataSource`] and are served by
//! the generic [`LookupDataSource`], which runs the shared template:
//! criteria → lookup → disambiguation → mapping → state.
//! List queries (`netbox_devices` and friends) implement [`ListDataSource`]
//! and are served by [`QueryDataSource`].

pub mod circuits;
pub mod dcim;
pub mod ipam;
pub mod query;
pub mod tenancy;
pub mod virtualization;

use crate::error::LookupError;
use crate::framework::{
    Attribute, AttributeType, ConfigureRequest, ConfigureResponse, DataSource, MetadataRequest,
    MetadataResponse, ReadRequest, ReadResponse, Schema,
};
use crate::lookup::{self, Criteria, LookupKey, LookupSpec, ResourceName};
use crate::provider::SharedClient;
use netbox_client::{Endpoint, NetBoxClientTrait, NetBoxObject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use query::{FilterKey, FilterModel, ListDataSource, QueryDataSource};

/// Constructor registered with the provider
pub type DataSourceFactory = fn() -> Box<dyn DataSource>;

/// Every data source the provider exposes
pub fn all() -> Vec<DataSourceFactory> {
    vec![
        lookup_factory::<tenancy::TenantDataSource>,
        lookup_factory::<tenancy::TenantGroupDataSource>,
        lookup_factory::<dcim::SiteDataSource>,
        lookup_factory::<dcim::SiteGroupDataSource>,
        lookup_factory::<dcim::RegionDataSource>,
        lookup_factory::<dcim::LocationDataSource>,
        lookup_factory::<dcim::RackDataSource>,
        lookup_factory::<dcim::ManufacturerDataSource>,
        lookup_factory::<dcim::DeviceRoleDataSource>,
        lookup_factory::<dcim::DeviceTypeDataSource>,
        lookup_factory::<dcim::DeviceDataSource>,
        lookup_factory::<dcim::InterfaceDataSource>,
        query_factory::<dcim::DevicesDataSource>,
        query_factory::<dcim::InterfacesDataSource>,
        lookup_factory::<ipam::AggregateDataSource>,
        lookup_factory::<ipam::AsnDataSource>,
        lookup_factory::<ipam::PrefixDataSource>,
        query_factory::<ipam::PrefixesDataSource>,
        lookup_factory::<ipam::IpAddressDataSource>,
        query_factory::<ipam::IpAddressesDataSource>,
        lookup_factory::<ipam::VlanDataSource>,
        lookup_factory::<ipam::VrfDataSource>,
        lookup_factory::<ipam::RoleDataSource>,
        lookup_factory::<circuits::CircuitDataSource>,
        lookup_factory::<circuits::CircuitTypeDataSource>,
        lookup_factory::<virtualization::ClusterDataSource>,
        lookup_factory::<virtualization::VirtualMachineDataSource>,
        query_factory::<virtualization::VirtualMachinesDataSource>,
    ]
}

fn lookup_factory<D: ObjectDataSource>() -> Box<dyn DataSource> {
    Box::new(LookupDataSource::<D>::default())
}

fn query_factory<D: ListDataSource>() -> Box<dyn DataSource> {
    Box::new(QueryDataSource::<D>::default())
}

/// A data source that resolves exactly one NetBox object
#[async_trait::async_trait]
pub trait ObjectDataSource: Default + Send + Sync + 'static {
    /// Remote object as decoded from NetBox
    type Object: DeserializeOwned + NetBoxObject + Send;
    /// Flat state model
    type Model: Serialize + Send;

    /// Appended to the provider type name: `netbox_<suffix>`
    const TYPE_SUFFIX: &'static str;
    const RESOURCE: ResourceName;
    const ENDPOINT: Endpoint;
    /// Lookup keys, highest priority first
    const KEYS: &'static [LookupKey];

    fn schema() -> Schema;

    fn map(object: &Self::Object) -> Self::Model;

    /// Rewrite criteria for the selected key before fetching (e.g. turn a
    /// referenced object's name into its ID)
    async fn prepare(
        &self,
        _client: &dyn NetBoxClientTrait,
        _key: LookupKey,
        criteria: Criteria,
    ) -> Result<Criteria, LookupError> {
        Ok(criteria)
    }

    fn lookup_spec() -> LookupSpec {
        LookupSpec {
            resource: Self::RESOURCE,
            endpoint: Self::ENDPOINT,
            keys: Self::KEYS,
        }
    }
}

/// Generic data source driving an [`ObjectDataSource`]
#[derive(Default)]
pub struct LookupDataSource<D: ObjectDataSource> {
    inner: D,
    client: Option<SharedClient>,
}

impl<D: ObjectDataSource> LookupDataSource<D> {
    async fn lookup(&self, client: &dyn NetBoxClientTrait, criteria: Criteria) -> Result<D::Object, LookupError> {
        let spec = D::lookup_spec();
        let key = lookup::select_key(&spec, &criteria)?;
        let criteria = self.inner.prepare(client, key, criteria).await?;
        lookup::fetch(client, &spec, key, &criteria).await
    }
}

#[async_trait::async_trait]
impl<D: ObjectDataSource> DataSource for LookupDataSource<D> {
    fn metadata(&self, req: &MetadataRequest, resp: &mut MetadataResponse) {
        resp.type_name = format!("{}_{}", req.provider_type_name, D::TYPE_SUFFIX);
    }

    fn schema(&self) -> Schema {
        D::schema()
    }

    fn configure(&mut self, req: &ConfigureRequest, resp: &mut ConfigureResponse) {
        if let Some(client) = client_from_provider_data(req, resp) {
            self.client = Some(client);
        }
    }

    async fn read(&self, req: &ReadRequest, resp: &mut ReadResponse) {
        let Some(client) = self.client.as_deref() else {
            resp.diagnostics.push(unconfigured_client());
            return;
        };

        let criteria = Criteria::from_config(&req.config, D::KEYS);
        let object = match self.lookup(client, criteria).await {
            Ok(object) => object,
            Err(e) => {
                debug!("{} lookup failed: {}", D::RESOURCE.noun(), e);
                resp.diagnostics.push(e.to_diagnostic());
                return;
            }
        };

        debug!("Read {} {} ({})", D::RESOURCE.noun(), object.id(), object.url());
        resp.set_state(&D::map(&object));
    }
}

/// Take the shared client out of the provider data.
///
/// `None` without a diagnostic while the provider is not configured yet.
pub(crate) fn client_from_provider_data(
    req: &ConfigureRequest,
    resp: &mut ConfigureResponse,
) -> Option<SharedClient> {
    let data = req.provider_data.as_ref()?;
    match data.downcast_ref::<SharedClient>() {
        Some(client) => Some(SharedClient::clone(client)),
        None => {
            resp.diagnostics.add_error(
                "Unexpected Data Source Configure Type",
                format!(
                    "Expected {}, got: {}. Please report this issue to the provider developers.",
                    std::any::type_name::<SharedClient>(),
                    data.type_name()
                ),
            );
            None
        }
    }
}

pub(crate) fn unconfigured_client() -> crate::framework::Diagnostic {
    crate::framework::Diagnostic::error(
        "Unconfigured NetBox Client",
        "Expected a configured NetBox client. Please report this issue to the provider developers.",
    )
}

// Schema shorthands shared by the resource modules

pub(crate) fn lookup_string(description: &str) -> Attribute {
    Attribute::lookup(AttributeType::String, description)
}

pub(crate) fn lookup_int(description: &str) -> Attribute {
    Attribute::lookup(AttributeType::Int64, description)
}

pub(crate) fn computed_string(description: &str) -> Attribute {
    Attribute::computed(AttributeType::String, description)
}

pub(crate) fn computed_int(description: &str) -> Attribute {
    Attribute::computed(AttributeType::Int64, description)
}

pub(crate) fn computed_float(description: &str) -> Attribute {
    Attribute::computed(AttributeType::Float64, description)
}

pub(crate) fn computed_bool(description: &str) -> Attribute {
    Attribute::computed(AttributeType::Bool, description)
}

#[cfg(test)]
#[path = "datasources_test.rs"]
mod datasources_test;
