//! Unit tests for lookup module

#[cfg(test)]
mod tests {
    use crate::error::LookupError;
    use crate::lookup::*;
    use netbox_client::{Endpoint, MockNetBoxClient, Tenant};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TENANT: ResourceName = ResourceName::new("Tenant", "Tenants");
    const TENANT_KEYS: &[LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];
    const SPEC: LookupSpec = LookupSpec {
        resource: TENANT,
        endpoint: Endpoint::Tenants,
        keys: TENANT_KEYS,
    };

    fn criteria(config: serde_json::Value) -> Criteria {
        Criteria::from_config(&config, TENANT_KEYS)
    }

    #[test]
    fn test_from_config_skips_empty_and_stringifies_numbers() {
        let c = criteria(json!({"id": 7, "slug": "", "name": "ACME", "group": "x"}));
        assert_eq!(c.get("id"), Some("7"));
        assert_eq!(c.get("slug"), None);
        assert_eq!(c.get("name"), Some("ACME"));
        assert_eq!(c.get("group"), None);
    }

    #[test]
    fn test_id_takes_priority_over_other_keys() {
        let c = criteria(json!({"id": "3", "slug": "acme", "name": "ACME"}));
        assert_eq!(select_key(&SPEC, &c).unwrap(), LookupKey::Id);

        let c = criteria(json!({"slug": "acme", "name": "ACME"}));
        assert_eq!(
            select_key(&SPEC, &c).unwrap(),
            LookupKey::Filter(&[("slug", "slug")])
        );
    }

    #[tokio::test]
    async fn test_missing_identifier_makes_no_request() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        let err = resolve::<Tenant>(&mock, &SPEC, &criteria(json!({"name": null})))
            .await
            .unwrap_err();

        assert_eq!(err.summary(), "Missing Tenant Identifier");
        assert_eq!(
            err.to_string(),
            "Either 'id', 'slug', or 'name' must be specified to identify the tenant."
        );
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_id_is_reported_without_request() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        let err = resolve::<Tenant>(&mock, &SPEC, &criteria(json!({"id": "abc"})))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::InvalidId { ref value, .. } if value == "abc"));
        assert_eq!(err.summary(), "Invalid Tenant ID");
        assert_eq!(err.to_string(), "Tenant ID must be a number, got: abc");
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_by_id_uses_retrieve() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.add_fixture(Endpoint::Tenants, 5);

        let tenant: Tenant = resolve(&mock, &SPEC, &criteria(json!({"id": "5", "name": "other"})))
            .await
            .unwrap();
        assert_eq!(tenant.id, 5);
        assert_eq!(mock.requests(), vec!["/api/tenancy/tenants/5/".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        let err = resolve::<Tenant>(&mock, &SPEC, &criteria(json!({"id": "9"})))
            .await
            .unwrap_err();

        assert_eq!(err.summary(), "Tenant Not Found");
        assert_eq!(err.to_string(), "No tenant found with id: 9");
    }

    #[tokio::test]
    async fn test_zero_matches_echo_searched_value() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.add_fixture(Endpoint::Tenants, 1);

        let err = resolve::<Tenant>(&mock, &SPEC, &criteria(json!({"slug": "acme"})))
            .await
            .unwrap_err();

        assert_eq!(err.summary(), "Tenant Not Found");
        assert_eq!(err.to_string(), "No tenant found with slug: acme");
        assert_eq!(mock.requests(), vec!["/api/tenancy/tenants/?slug=acme".to_string()]);
    }

    #[tokio::test]
    async fn test_multiple_matches_report_count_and_suggest_id() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        for id in [1, 2] {
            let mut tenant = mock.helpers().fixture(Endpoint::Tenants, id);
            tenant["name"] = json!("ACME");
            mock.insert(Endpoint::Tenants, tenant);
        }

        let err = resolve::<Tenant>(&mock, &SPEC, &criteria(json!({"name": "ACME"})))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::MultipleFound { count: 2, .. }));
        assert_eq!(err.summary(), "Multiple Tenants Found");
        assert_eq!(
            err.to_string(),
            "Found 2 tenants with name: ACME. Use 'id' to select a single tenant."
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_wrapped() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.fail_next("connection refused");

        let err = resolve::<Tenant>(&mock, &SPEC, &criteria(json!({"slug": "acme"})))
            .await
            .unwrap_err();

        assert_eq!(err.summary(), "Error reading tenant");
        assert_eq!(
            err.to_string(),
            "Could not read tenant: NetBox API error: connection refused"
        );
    }

    #[tokio::test]
    async fn test_reference_id_accepts_number_or_name() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.add_fixture(Endpoint::Devices, 12);
        let device = ResourceName::new("Device", "Devices");

        let by_id = resolve_reference_id(&mock, Endpoint::Devices, device, "42")
            .await
            .unwrap();
        assert_eq!(by_id, 42);
        assert_eq!(mock.request_count(), 0);

        let by_name = resolve_reference_id(&mock, Endpoint::Devices, device, "device-12")
            .await
            .unwrap();
        assert_eq!(by_name, 12);

        let err = resolve_reference_id(&mock, Endpoint::Devices, device, "nope")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No device found with name: nope");
    }

    #[test]
    fn test_resource_names_keep_acronyms() {
        let ip = ResourceName::new("IP Address", "IP Addresses");
        assert_eq!(ip.noun(), "IP address");
        assert_eq!(ip.plural_noun(), "IP addresses");

        let vlan = ResourceName::new("VLAN", "VLANs");
        assert_eq!(vlan.noun(), "VLAN");
        assert_eq!(vlan.plural_noun(), "VLANs");

        assert_eq!(ResourceName::new("Device Type", "Device Types").noun(), "device type");
    }
}
