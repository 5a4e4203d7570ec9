//! Unit tests for the netbox_devices data source

#[cfg(test)]
mod tests {
    use crate::datasources::QueryDataSource;
    use crate::datasources::dcim::DevicesDataSource;
    use crate::test_utils::{configure, error_summaries, mock, read};
    use netbox_client::{Endpoint, MockNetBoxClient};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn configured(mock: &MockNetBoxClient) -> QueryDataSource<DevicesDataSource> {
        let mut ds = QueryDataSource::<DevicesDataSource>::default();
        let resp = configure(&mut ds, mock);
        assert!(!resp.diagnostics.has_error());
        ds
    }

    fn add_device(mock: &MockNetBoxClient, id: u64, edit: impl FnOnce(&mut Value)) {
        let mut device = mock.helpers().fixture(Endpoint::Devices, id);
        edit(&mut device);
        mock.insert(Endpoint::Devices, device);
    }

    fn strings(state: &Value, key: &str) -> Vec<String> {
        state[key]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_all_pages_are_collected_in_server_order() {
        let mock = mock();
        for id in 1..=250 {
            mock.add_fixture(Endpoint::Devices, id);
        }
        let ds = configured(&mock);

        let resp = read(
            &ds,
            json!({"filter": [{"name": "status", "values": ["active"]}]}),
        )
        .await;

        assert!(resp.diagnostics.is_empty(), "{:?}", resp.diagnostics);
        let state = resp.state.unwrap();
        let ids = strings(&state, "ids");
        let expected: Vec<String> = (1..=250).map(|id: u64| id.to_string()).collect();
        assert_eq!(ids, expected);
        assert_eq!(strings(&state, "names")[249], "device-250");

        assert_eq!(
            mock.requests(),
            vec![
                "/api/dcim/devices/?status=active&limit=100&offset=0".to_string(),
                "/api/dcim/devices/?status=active&limit=100&offset=100".to_string(),
                "/api/dcim/devices/?status=active&limit=100&offset=200".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_exact_multiple_of_page_size_stops_at_count() {
        let mock = mock();
        for id in 1..=200 {
            mock.add_fixture(Endpoint::Devices, id);
        }
        let ds = configured(&mock);

        let resp = read(&ds, json!({"filter": [{"name": "site", "values": ["site-1"]}]})).await;

        assert_eq!(strings(resp.state.as_ref().unwrap(), "ids").len(), 200);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_outputs_keep_filters_and_summaries() {
        let mock = mock();
        add_device(&mock, 7, |_| {});
        add_device(&mock, 8, |d| d["name"] = Value::Null);
        add_device(&mock, 9, |d| d["status"] = json!({"value": "offline", "label": "Offline"}));
        let ds = configured(&mock);

        let config = json!({"filter": [{"name": "status", "values": ["active"]}]});
        let resp = read(&ds, config.clone()).await;
        let state = resp.state.unwrap();

        assert_eq!(state["filter"], config["filter"]);
        assert_eq!(strings(&state, "ids"), vec!["7", "8"]);
        assert_eq!(strings(&state, "names"), vec!["device-7", ""]);
        assert_eq!(
            state["devices"],
            json!([
                {"id": "7", "name": "device-7"},
                {"id": "8", "name": ""},
            ])
        );
    }

    #[tokio::test]
    async fn test_no_matches_yields_empty_lists() {
        let mock = mock();
        mock.add_fixture(Endpoint::Devices, 1);
        let ds = configured(&mock);

        let resp = read(&ds, json!({"filter": [{"name": "name", "values": ["nope"]}]})).await;

        let state = resp.state.unwrap();
        assert_eq!(state["ids"], json!([]));
        assert_eq!(state["names"], json!([]));
        assert_eq!(state["devices"], json!([]));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_custom_field_filters_are_applied_client_side() {
        let mock = mock();
        add_device(&mock, 1, |d| d["custom_fields"] = json!({"owner": "ops", "env": "prod"}));
        add_device(&mock, 2, |d| d["custom_fields"] = json!({"owner": null, "env": "prod"}));
        add_device(&mock, 3, |d| d["custom_fields"] = json!({"owner": "net", "env": "dev"}));
        add_device(&mock, 4, |_| {});
        let ds = configured(&mock);

        let resp = read(
            &ds,
            json!({"filter": [
                {"name": "status", "values": ["active"]},
                {"name": "custom_field", "values": ["owner"]},
            ]}),
        )
        .await;
        assert_eq!(strings(resp.state.as_ref().unwrap(), "ids"), vec!["1", "3"]);

        let resp = read(
            &ds,
            json!({"filter": [
                {"name": "name__ic", "values": ["device"]},
                {"name": "custom_field", "values": ["owner"]},
                {"name": "custom_field_value", "values": ["env=prod"]},
            ]}),
        )
        .await;
        assert_eq!(strings(resp.state.as_ref().unwrap(), "ids"), vec!["1"]);

        // Custom field keys never reach the server
        for request in mock.requests() {
            assert!(!request.contains("custom_field"), "{}", request);
        }
    }

    #[tokio::test]
    async fn test_missing_filters_are_rejected_without_requests() {
        let mock = mock();
        let ds = configured(&mock);

        for config in [json!({}), json!({"filter": []})] {
            let resp = read(&ds, config).await;
            assert_eq!(error_summaries(&resp), vec!["Missing filters"]);
            assert!(resp.state.is_none());
        }
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_filters_are_rejected_without_requests() {
        let mock = mock();
        let ds = configured(&mock);

        let cases = [
            (json!([{"name": "rack", "values": ["r1"]}]), "Unsupported filter"),
            (json!([{"name": "q", "values": ["a", "b"]}]), "Invalid filter values"),
            (json!([{"name": "q", "values": []}]), "Invalid filter values"),
            (
                json!([
                    {"name": "status", "values": ["active"]},
                    {"name": "custom_field_value", "values": ["env"]},
                ]),
                "Invalid filter values",
            ),
        ];

        for (filters, summary) in cases {
            let resp = read(&ds, json!({ "filter": filters })).await;
            assert_eq!(error_summaries(&resp), vec![summary], "{}", filters);
            assert!(resp.state.is_none());
        }
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_q_is_sent_as_a_single_search_term() {
        let mock = mock();
        mock.add_fixture(Endpoint::Devices, 1);
        mock.add_fixture(Endpoint::Devices, 2);
        let ds = configured(&mock);

        let resp = read(&ds, json!({"filter": [{"name": "q", "values": ["SN00002"]}]})).await;

        assert_eq!(strings(resp.state.as_ref().unwrap(), "ids"), vec!["2"]);
        assert_eq!(
            mock.requests(),
            vec!["/api/dcim/devices/?q=SN00002&limit=100&offset=0".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failure_mid_pagination_writes_no_state() {
        let mock = mock();
        for id in 1..=150 {
            mock.add_fixture(Endpoint::Devices, id);
        }
        mock.fail_after(1, "connection reset");
        let ds = configured(&mock);

        let resp = read(&ds, json!({"filter": [{"name": "status", "values": ["active"]}]})).await;

        assert_eq!(error_summaries(&resp), vec!["Error querying devices"]);
        assert!(resp.state.is_none());
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_read_is_an_error() {
        let ds = QueryDataSource::<DevicesDataSource>::default();
        let resp = read(&ds, json!({"filter": [{"name": "status", "values": ["active"]}]})).await;
        assert_eq!(error_summaries(&resp), vec!["Unconfigured NetBox Client"]);
    }
}
