//! Virtualization data sources: `netbox_cluster`, `netbox_virtual_machine`,
//! `netbox_virtual_machines`

use super::query::{FilterKey, ListDataSource};
use super::{ObjectDataSource, computed_float, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    reference_id, reference_name, required_reference_id, required_reference_name, tags_from_api,
};
use netbox_client::{Cluster, CustomFields, Endpoint, VirtualMachine};
use serde::{Deserialize, Serialize};

const BY_ID_NAME: &[LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("name", "name")])];

#[derive(Debug, Default)]
pub struct ClusterDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterModel {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub cluster_type: Option<String>,
    pub type_id: Option<String>,
    pub group: Option<String>,
    pub group_id: Option<String>,
    pub status: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for ClusterDataSource {
    type Object = Cluster;
    type Model = ClusterModel;

    const TYPE_SUFFIX: &'static str = "cluster";
    const RESOURCE: ResourceName = ResourceName::new("Cluster", "Clusters");
    const ENDPOINT: Endpoint = Endpoint::Clusters;
    const KEYS: &'static [LookupKey] = BY_ID_NAME;

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a virtualization cluster in Netbox. \
             Identify the cluster using `id` or `name`.",
        )
        .attribute("id", lookup_string("Unique identifier for the cluster."))
        .attribute("name", lookup_string("Name of the cluster."))
        .attribute("type", computed_string("Name of the cluster type."))
        .attribute("type_id", computed_string("ID of the cluster type."))
        .attribute("group", computed_string("Name of the cluster group."))
        .attribute("group_id", computed_string("ID of the cluster group."))
        .attribute("status", computed_string("Operational status of the cluster."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("site", computed_string("Name of the site."))
        .attribute("site_id", computed_string("ID of the site."))
        .attribute("description", computed_string("Description of the cluster."))
        .attribute("comments", computed_string("Comments about the cluster."))
        .attribute("tags", tags_attribute("cluster"))
        .attribute("custom_fields", custom_fields_attribute("cluster"))
    }

    fn map(cluster: &Cluster) -> ClusterModel {
        ClusterModel {
            id: id_string(cluster.id),
            name: non_empty(&cluster.name),
            cluster_type: required_reference_name(&cluster.cluster_type),
            type_id: required_reference_id(&cluster.cluster_type),
            group: reference_name(&cluster.group),
            group_id: reference_id(&cluster.group),
            status: choice_value(&cluster.status),
            tenant: reference_name(&cluster.tenant),
            tenant_id: reference_id(&cluster.tenant),
            site: reference_name(&cluster.site),
            site_id: reference_id(&cluster.site),
            description: non_empty(&cluster.description),
            comments: non_empty(&cluster.comments),
            tags: tags_from_api(&cluster.tags),
            custom_fields: custom_fields_from_api(&cluster.custom_fields),
        }
    }
}

#[derive(Debug, Default)]
pub struct VirtualMachineDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachineModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub cluster: Option<String>,
    pub cluster_id: Option<String>,
    pub role: Option<String>,
    pub role_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub platform: Option<String>,
    pub platform_id: Option<String>,
    pub vcpus: Option<f64>,
    pub memory: Option<u64>,
    pub disk: Option<u64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for VirtualMachineDataSource {
    type Object = VirtualMachine;
    type Model = VirtualMachineModel;

    const TYPE_SUFFIX: &'static str = "virtual_machine";
    const RESOURCE: ResourceName = ResourceName::new("Virtual Machine", "Virtual Machines");
    const ENDPOINT: Endpoint = Endpoint::VirtualMachines;
    // VM names are unique per cluster only
    const KEYS: &'static [LookupKey] = BY_ID_NAME;

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a virtual machine in Netbox. \
             Identify the virtual machine using `id` or `name`.",
        )
        .attribute("id", lookup_string("Unique identifier for the virtual machine."))
        .attribute("name", lookup_string("Name of the virtual machine."))
        .attribute("status", computed_string("Operational status of the virtual machine."))
        .attribute("site", computed_string("Name of the site."))
        .attribute("site_id", computed_string("ID of the site."))
        .attribute("cluster", computed_string("Name of the cluster."))
        .attribute("cluster_id", computed_string("ID of the cluster."))
        .attribute("role", computed_string("Name of the device role."))
        .attribute("role_id", computed_string("ID of the device role."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("platform", computed_string("Name of the platform."))
        .attribute("platform_id", computed_string("ID of the platform."))
        .attribute("vcpus", computed_float("Number of virtual CPUs."))
        .attribute("memory", computed_int("Memory in MB."))
        .attribute("disk", computed_int("Disk space in MB."))
        .attribute("description", computed_string("Description of the virtual machine."))
        .attribute("comments", computed_string("Comments about the virtual machine."))
        .attribute("tags", tags_attribute("virtual machine"))
        .attribute("custom_fields", custom_fields_attribute("virtual machine"))
    }

    fn map(vm: &VirtualMachine) -> VirtualMachineModel {
        VirtualMachineModel {
            id: id_string(vm.id),
            name: non_empty(&vm.name),
            status: choice_value(&vm.status),
            site: reference_name(&vm.site),
            site_id: reference_id(&vm.site),
            cluster: reference_name(&vm.cluster),
            cluster_id: reference_id(&vm.cluster),
            role: reference_name(&vm.role),
            role_id: reference_id(&vm.role),
            tenant: reference_name(&vm.tenant),
            tenant_id: reference_id(&vm.tenant),
            platform: reference_name(&vm.platform),
            platform_id: reference_id(&vm.platform),
            vcpus: vm.vcpus,
            memory: vm.memory,
            disk: vm.disk,
            description: non_empty(&vm.description),
            comments: non_empty(&vm.comments),
            tags: tags_from_api(&vm.tags),
            custom_fields: custom_fields_from_api(&vm.custom_fields),
        }
    }
}

#[derive(Debug, Default)]
pub struct VirtualMachinesDataSource;

impl ListDataSource for VirtualMachinesDataSource {
    type Object = VirtualMachine;

    const TYPE_SUFFIX: &'static str = "virtual_machines";
    const RESOURCE: ResourceName = ResourceName::new("Virtual Machine", "Virtual Machines");
    const ENDPOINT: Endpoint = Endpoint::VirtualMachines;
    const FILTERS: &'static [FilterKey] = &[
        FilterKey::any("name"),
        FilterKey::any("name__ic"),
        FilterKey::any("status"),
        FilterKey::any("cluster"),
        FilterKey::any("site"),
        FilterKey::any("tag"),
        FilterKey::single("q"),
    ];
    const LABELS: &'static str = "names";
    const LABEL: &'static str = "name";
    const LABELS_DESCRIPTION: &'static str =
        "Best-effort list of virtual machine names that match the query.";

    fn id(vm: &VirtualMachine) -> u64 {
        vm.id
    }

    fn label(vm: &VirtualMachine) -> String {
        vm.name.clone()
    }

    fn custom_fields(vm: &VirtualMachine) -> &CustomFields {
        &vm.custom_fields
    }
}
