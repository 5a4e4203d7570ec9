//! Unit tests for the netbox_interface data source

#[cfg(test)]
mod tests {
    use crate::datasources::LookupDataSource;
    use crate::datasources::dcim::InterfaceDataSource;
    use crate::test_utils::{configure, error_summaries, mock, read};
    use netbox_client::{Endpoint, MockNetBoxClient};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn setup() -> (MockNetBoxClient, LookupDataSource<InterfaceDataSource>) {
        let mock = mock();
        mock.add_fixture(Endpoint::Devices, 1);
        mock.add_fixture(Endpoint::Interfaces, 10);
        mock.add_fixture(Endpoint::Interfaces, 11);

        let mut ds = LookupDataSource::<InterfaceDataSource>::default();
        configure(&mut ds, &mock);
        (mock, ds)
    }

    #[tokio::test]
    async fn test_device_name_is_resolved_before_the_interface_lookup() {
        let (mock, ds) = setup();

        let resp = read(&ds, json!({"device": "device-1", "name": "eth10"})).await;

        assert!(resp.diagnostics.is_empty(), "{:?}", resp.diagnostics);
        let state = resp.state.unwrap();
        assert_eq!(state["id"], json!("10"));
        assert_eq!(state["device"], json!("1"));
        assert_eq!(state["device_name"], json!("device-1"));
        assert_eq!(state["type"], json!("1000base-t"));
        assert_eq!(state["mgmt_only"], json!(false));
        assert_eq!(state["description"], json!(null));
        assert_eq!(
            mock.requests(),
            vec![
                "/api/dcim/devices/?name=device-1".to_string(),
                "/api/dcim/interfaces/?device_id=1&name=eth10".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_numeric_device_skips_device_request() {
        let (mock, ds) = setup();

        let resp = read(&ds, json!({"device": "1", "name": "eth11"})).await;

        assert_eq!(resp.state.unwrap()["id"], json!("11"));
        assert_eq!(
            mock.requests(),
            vec!["/api/dcim/interfaces/?device_id=1&name=eth11".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_device_is_reported_as_missing_device() {
        let (mock, ds) = setup();

        let resp = read(&ds, json!({"device": "ghost", "name": "eth10"})).await;

        assert_eq!(error_summaries(&resp), vec!["Device Not Found"]);
        assert!(resp.state.is_none());
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_interface_on_known_device() {
        let (_mock, ds) = setup();

        let resp = read(&ds, json!({"device": "1", "name": "eth99"})).await;

        let errors: Vec<_> = resp.diagnostics.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].summary, "Interface Not Found");
        assert_eq!(errors[0].detail, "No interface found with device: 1, name: eth99");
    }

    #[tokio::test]
    async fn test_id_takes_priority_over_device_and_name() {
        let (mock, ds) = setup();

        let resp = read(&ds, json!({"id": "11", "device": "device-1", "name": "eth10"})).await;

        assert_eq!(resp.state.unwrap()["id"], json!("11"));
        assert_eq!(mock.requests(), vec!["/api/dcim/interfaces/11/".to_string()]);
    }

    #[tokio::test]
    async fn test_name_alone_is_not_an_identifier() {
        let (mock, ds) = setup();

        let resp = read(&ds, json!({"name": "eth10"})).await;

        let errors: Vec<_> = resp.diagnostics.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].summary, "Missing Interface Identifier");
        assert_eq!(
            errors[0].detail,
            "Either 'id' or 'device' and 'name' must be specified to identify the interface."
        );
        assert_eq!(mock.request_count(), 0);
    }
}
