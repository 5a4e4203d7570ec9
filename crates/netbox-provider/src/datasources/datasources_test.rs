//! Unit tests for the data source registry and the shared read template

#[cfg(test)]
mod tests {
    use crate::datasources::{ObjectDataSource, all, circuits, dcim, ipam, tenancy, virtualization};
    use crate::framework::{
        AttributeType, ConfigureRequest, ConfigureResponse, DataSource, MetadataRequest,
        MetadataResponse, ProviderData, Schema,
    };
    use crate::lookup::LookupKey;
    use crate::test_utils::{configure, error_summaries, mock, read};
    use netbox_client::Endpoint;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::collections::BTreeSet;

    /// Endpoint read by each single-object data source
    const ENDPOINTS: &[(&str, Endpoint)] = &[
        ("netbox_tenant", Endpoint::Tenants),
        ("netbox_tenant_group", Endpoint::TenantGroups),
        ("netbox_site", Endpoint::Sites),
        ("netbox_site_group", Endpoint::SiteGroups),
        ("netbox_region", Endpoint::Regions),
        ("netbox_location", Endpoint::Locations),
        ("netbox_rack", Endpoint::Racks),
        ("netbox_manufacturer", Endpoint::Manufacturers),
        ("netbox_device_role", Endpoint::DeviceRoles),
        ("netbox_device_type", Endpoint::DeviceTypes),
        ("netbox_device", Endpoint::Devices),
        ("netbox_interface", Endpoint::Interfaces),
        ("netbox_aggregate", Endpoint::Aggregates),
        ("netbox_asn", Endpoint::Asns),
        ("netbox_prefix", Endpoint::Prefixes),
        ("netbox_ip_address", Endpoint::IpAddresses),
        ("netbox_vlan", Endpoint::Vlans),
        ("netbox_vrf", Endpoint::Vrfs),
        ("netbox_role", Endpoint::Roles),
        ("netbox_circuit", Endpoint::Circuits),
        ("netbox_circuit_type", Endpoint::CircuitTypes),
        ("netbox_cluster", Endpoint::Clusters),
        ("netbox_virtual_machine", Endpoint::VirtualMachines),
    ];

    /// Data sources driven by `filter` blocks
    const LIST_QUERIES: &[&str] = &[
        "netbox_devices",
        "netbox_interfaces",
        "netbox_ip_addresses",
        "netbox_prefixes",
        "netbox_virtual_machines",
    ];

    fn type_name(ds: &dyn DataSource) -> String {
        let req = MetadataRequest {
            provider_type_name: "netbox".to_string(),
        };
        let mut resp = MetadataResponse::default();
        ds.metadata(&req, &mut resp);
        resp.type_name
    }

    fn lookup_data_sources() -> Vec<(String, Box<dyn DataSource>)> {
        all()
            .into_iter()
            .map(|factory| factory())
            .map(|ds| (type_name(ds.as_ref()), ds))
            .filter(|(name, _)| !LIST_QUERIES.contains(&name.as_str()))
            .collect()
    }

    fn value_fits(ty: &AttributeType, value: &Value) -> bool {
        match (ty, value) {
            (_, Value::Null) => true,
            (AttributeType::String, Value::String(_)) => true,
            (AttributeType::Int64, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (AttributeType::Float64, Value::Number(_)) => true,
            (AttributeType::Bool, Value::Bool(_)) => true,
            (AttributeType::List(elem) | AttributeType::Set(elem), Value::Array(items)) => {
                items.iter().all(|item| value_fits(elem, item))
            }
            (AttributeType::Object(fields), Value::Object(map)) => {
                map.len() == fields.len()
                    && fields
                        .iter()
                        .all(|(name, ty)| map.get(name).is_some_and(|v| value_fits(ty, v)))
            }
            _ => false,
        }
    }

    fn assert_state_matches_schema(name: &str, schema: &Schema, state: &Value) {
        let object = state.as_object().unwrap();
        let state_keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
        let schema_keys: BTreeSet<&str> = schema.attributes.keys().map(String::as_str).collect();
        assert_eq!(state_keys, schema_keys, "{}", name);

        for (attr, definition) in &schema.attributes {
            assert!(
                value_fits(&definition.ty, &object[attr]),
                "{}.{} = {} does not fit {:?}",
                name,
                attr,
                object[attr],
                definition.ty
            );
        }
    }

    #[test]
    fn test_type_names_are_provider_prefixed() {
        let names: Vec<String> = all().into_iter().map(|f| type_name(f().as_ref())).collect();
        assert_eq!(names.len(), ENDPOINTS.len() + LIST_QUERIES.len());
        for name in &names {
            assert!(name.starts_with("netbox_"), "{}", name);
        }
        for list in LIST_QUERIES {
            assert!(names.contains(&list.to_string()), "{}", list);
        }
    }

    #[test]
    fn test_list_queries_share_the_filter_block_shape() {
        for factory in all() {
            let ds = factory();
            let name = type_name(ds.as_ref());
            if !LIST_QUERIES.contains(&name.as_str()) {
                continue;
            }
            let schema = ds.schema();
            let suffix = name.trim_start_matches("netbox_");

            assert!(schema.blocks.contains_key("filter"), "{}", name);
            assert!(schema.attributes.contains_key("ids"), "{}", name);
            assert!(schema.attributes.contains_key(suffix), "{}", name);
            assert_eq!(schema.attributes.len(), 3, "{}", name);
            for (attr, definition) in &schema.attributes {
                assert!(definition.computed, "{}.{}", name, attr);
            }
        }
    }

    #[test]
    fn test_endpoint_table_covers_the_registry() {
        let registered: BTreeSet<String> = lookup_data_sources().into_iter().map(|(n, _)| n).collect();
        let table: BTreeSet<String> = ENDPOINTS.iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(registered, table);
    }

    #[test]
    fn test_lookup_attributes_are_optional_and_computed() {
        for (name, ds) in lookup_data_sources() {
            let schema = ds.schema();
            let lookups = schema.lookup_attributes();
            assert!(lookups.contains(&"id"), "{} has no id lookup", name);

            for (attr, definition) in &schema.attributes {
                assert!(!definition.required, "{}.{} must not be required", name, attr);
                assert!(definition.computed, "{}.{} must be computed", name, attr);
            }
            for attr in schema.computed_only_attributes() {
                assert!(!lookups.contains(&attr), "{}.{}", name, attr);
            }
            assert!(schema.attributes.contains_key("tags"), "{}", name);
            assert!(schema.attributes.contains_key("custom_fields"), "{}", name);
        }
    }

    fn assert_keys_are_lookup_attributes<D: ObjectDataSource>() {
        let schema = D::schema();
        let lookups = schema.lookup_attributes();
        assert_eq!(D::KEYS.first(), Some(&LookupKey::Id), "{}", D::TYPE_SUFFIX);
        for key in D::KEYS {
            for attr in key.attributes() {
                assert!(
                    lookups.contains(&attr),
                    "netbox_{}: key attribute '{}' is not a lookup attribute",
                    D::TYPE_SUFFIX,
                    attr
                );
            }
        }
    }

    #[test]
    fn test_every_key_attribute_is_a_lookup_attribute() {
        let checks: &[fn()] = &[
            assert_keys_are_lookup_attributes::<tenancy::TenantDataSource>,
            assert_keys_are_lookup_attributes::<tenancy::TenantGroupDataSource>,
            assert_keys_are_lookup_attributes::<dcim::SiteDataSource>,
            assert_keys_are_lookup_attributes::<dcim::SiteGroupDataSource>,
            assert_keys_are_lookup_attributes::<dcim::RegionDataSource>,
            assert_keys_are_lookup_attributes::<dcim::LocationDataSource>,
            assert_keys_are_lookup_attributes::<dcim::RackDataSource>,
            assert_keys_are_lookup_attributes::<dcim::ManufacturerDataSource>,
            assert_keys_are_lookup_attributes::<dcim::DeviceRoleDataSource>,
            assert_keys_are_lookup_attributes::<dcim::DeviceTypeDataSource>,
            assert_keys_are_lookup_attributes::<dcim::DeviceDataSource>,
            assert_keys_are_lookup_attributes::<dcim::InterfaceDataSource>,
            assert_keys_are_lookup_attributes::<ipam::AggregateDataSource>,
            assert_keys_are_lookup_attributes::<ipam::AsnDataSource>,
            assert_keys_are_lookup_attributes::<ipam::PrefixDataSource>,
            assert_keys_are_lookup_attributes::<ipam::IpAddressDataSource>,
            assert_keys_are_lookup_attributes::<ipam::VlanDataSource>,
            assert_keys_are_lookup_attributes::<ipam::VrfDataSource>,
            assert_keys_are_lookup_attributes::<ipam::RoleDataSource>,
            assert_keys_are_lookup_attributes::<circuits::CircuitDataSource>,
            assert_keys_are_lookup_attributes::<circuits::CircuitTypeDataSource>,
            assert_keys_are_lookup_attributes::<virtualization::ClusterDataSource>,
            assert_keys_are_lookup_attributes::<virtualization::VirtualMachineDataSource>,
        ];
        for check in checks {
            check();
        }
        assert_eq!(checks.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_configure_without_provider_data_is_silent() {
        for factory in all() {
            let mut ds = factory();
            let mut resp = ConfigureResponse::default();
            ds.configure(&ConfigureRequest::default(), &mut resp);
            assert!(resp.diagnostics.is_empty());
        }
    }

    #[test]
    fn test_configure_rejects_foreign_provider_data() {
        for factory in all() {
            let mut ds = factory();
            let req = ConfigureRequest {
                provider_data: Some(ProviderData::new(42u32)),
            };
            let mut resp = ConfigureResponse::default();
            ds.configure(&req, &mut resp);

            let errors: Vec<_> = resp.diagnostics.errors().collect();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].summary, "Unexpected Data Source Configure Type");
            assert!(errors[0].detail.contains("got: u32"), "{}", errors[0].detail);
        }
    }

    #[tokio::test]
    async fn test_read_by_id_writes_every_schema_attribute() {
        for (name, mut ds) in lookup_data_sources() {
            let endpoint = ENDPOINTS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, e)| *e)
                .unwrap();
            let mock = mock();
            mock.add_fixture(endpoint, 3);
            configure(ds.as_mut(), &mock);

            let first = read(ds.as_ref(), json!({"id": "3"})).await;
            assert!(first.diagnostics.is_empty(), "{}: {:?}", name, first.diagnostics);
            let state = first.state.unwrap();

            assert_state_matches_schema(&name, &ds.schema(), &state);
            assert_eq!(state["id"], json!("3"), "{}", name);
            assert_eq!(state["description"], Value::Null, "{}", name);
            assert_eq!(state["tags"], Value::Null, "{}", name);
            assert_eq!(state["custom_fields"], Value::Null, "{}", name);

            // Same remote object, same state
            let second = read(ds.as_ref(), json!({"id": "3"})).await;
            assert_eq!(second.state, Some(state), "{}", name);
            assert_eq!(mock.request_count(), 2, "{}", name);
        }
    }

    #[tokio::test]
    async fn test_unknown_id_reports_not_found_for_every_resource() {
        for (name, mut ds) in lookup_data_sources() {
            let mock = mock();
            configure(ds.as_mut(), &mock);

            let resp = read(ds.as_ref(), json!({"id": "404"})).await;

            let summaries = error_summaries(&resp);
            assert_eq!(summaries.len(), 1, "{}", name);
            assert!(summaries[0].ends_with("Not Found"), "{}: {}", name, summaries[0]);
            assert!(resp.state.is_none(), "{}", name);
        }
    }

    #[tokio::test]
    async fn test_tags_and_custom_fields_are_mapped() {
        let mock = mock();
        let helpers = mock.helpers();
        let mut tenant = helpers.fixture(Endpoint::Tenants, 1);
        tenant["tags"] = json!([helpers.tag(1, "Production")]);
        tenant["custom_fields"] = json!({"owner": "ops", "unused": null, "cost_center": 42});
        mock.insert(Endpoint::Tenants, tenant);

        let mut ds = all()[0]();
        configure(ds.as_mut(), &mock);
        let resp = read(ds.as_ref(), json!({"slug": "tenant-1"})).await;

        let state = resp.state.unwrap();
        assert_eq!(state["tags"], json!([{"name": "Production", "slug": "production"}]));
        assert_eq!(
            state["custom_fields"],
            json!([
                {"name": "cost_center", "type": "integer", "value": "42"},
                {"name": "owner", "type": "text", "value": "ops"},
            ])
        );
    }

    #[tokio::test]
    async fn test_ambiguous_name_writes_no_state() {
        let mock = mock();
        let helpers = mock.helpers();
        for id in [1, 2] {
            let mut tenant = helpers.fixture(Endpoint::Tenants, id);
            tenant["name"] = json!("Shared");
            mock.insert(Endpoint::Tenants, tenant);
        }

        let mut ds = all()[0]();
        configure(ds.as_mut(), &mock);
        let resp = read(ds.as_ref(), json!({"name": "Shared"})).await;

        assert_eq!(error_summaries(&resp), vec!["Multiple Tenants Found"]);
        assert!(resp.state.is_none());
    }

    #[tokio::test]
    async fn test_read_before_configure_is_an_error() {
        for factory in all() {
            let ds = factory();
            let resp = read(ds.as_ref(), json!({"id": "1"})).await;
            assert_eq!(error_summaries(&resp), vec!["Unconfigured NetBox Client"]);
            assert!(resp.state.is_none());
        }
    }
}
