// HTTP-level tests for `NetBoxClient` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use netbox_client::common::query::{get_object, list_all_pages, list_objects};
use netbox_client::{Endpoint, ListQuery, NetBoxClient, NetBoxClientTrait, NetBoxError, Tenant};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, NetBoxClient) {
    let server = MockServer::start().await;
    let client = NetBoxClient::from_reqwest(
        reqwest::Client::new(),
        format!("{}/", server.uri()),
        "0123456789abcdef".to_string(),
    );
    (server, client)
}

fn tenant(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("http://netbox/api/tenancy/tenants/{id}/"),
        "display": name,
        "name": name,
        "slug": name.to_lowercase(),
        "group": null,
        "description": "",
        "comments": "",
        "tags": [],
        "custom_fields": {},
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_retrieve_sends_token_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tenancy/tenants/7/"))
        .and(header("Authorization", "Token 0123456789abcdef"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tenant(7, "ACME")))
        .expect(1)
        .mount(&server)
        .await;

    let tenant: Tenant = get_object(&client, Endpoint::Tenants, 7).await.unwrap();
    assert_eq!(tenant.id, 7);
    assert_eq!(tenant.name, "ACME");
    assert_eq!(tenant.slug, "acme");
}

#[tokio::test]
async fn test_list_passes_filters_as_query_params() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tenancy/tenants/"))
        .and(query_param("slug", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [tenant(7, "ACME")],
        })))
        .mount(&server)
        .await;

    let page = list_objects::<Tenant>(
        &client,
        Endpoint::Tenants,
        &ListQuery::new().eq("slug", "acme"),
    )
    .await
    .unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].name, "ACME");
}

#[tokio::test]
async fn test_list_all_pages_walks_offsets() {
    let (server, client) = setup().await;

    let pages = [
        (0, vec![tenant(1, "a"), tenant(2, "b")], true),
        (2, vec![tenant(3, "c"), tenant(4, "d")], true),
        (4, vec![tenant(5, "e")], false),
    ];
    for (offset, results, has_next) in pages {
        Mock::given(method("GET"))
            .and(path("/api/tenancy/tenants/"))
            .and(query_param("limit", "2"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 5,
                "next": if has_next { json!("http://netbox/next") } else { json!(null) },
                "previous": null,
                "results": results,
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let tenants: Vec<Tenant> = list_all_pages(&client, Endpoint::Tenants, &ListQuery::new(), 2)
        .await
        .unwrap();

    let ids: Vec<u64> = tenants.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_validate_token_hits_status_endpoint() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"netbox-version": "4.1.0"})))
        .expect(1)
        .mount(&server)
        .await;

    client.validate_token().await.unwrap();
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/99/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "No Site matches the given query."})),
        )
        .mount(&server)
        .await;

    let err = client.retrieve(Endpoint::Sites, 99).await.unwrap_err();
    assert!(err.is_not_found(), "expected NotFound, got {err:?}");
}

#[tokio::test]
async fn test_403_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ipam/vlans/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&server)
        .await;

    let err = client
        .list(Endpoint::Vlans, &ListQuery::new().eq("vid", "100"))
        .await
        .unwrap_err();
    assert!(matches!(err, NetBoxError::Authentication(_)), "got {err:?}");
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/ipam/prefixes/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is locked"))
        .mount(&server)
        .await;

    let err = client
        .list(Endpoint::Prefixes, &ListQuery::new())
        .await
        .unwrap_err();
    match err {
        NetBoxError::Api(message) => {
            assert!(message.contains("500"), "{message}");
            assert!(message.contains("database is locked"), "{message}");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_oversized_page_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/tenancy/tenants/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": null,
            "previous": null,
            "results": [tenant(1, "a"), tenant(2, "b"), tenant(3, "c")],
        })))
        .mount(&server)
        .await;

    let err = list_all_pages::<Tenant>(&client, Endpoint::Tenants, &ListQuery::new(), 2)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "NetBox API error: Expected page size to be between 0 and 2, got 3"
    );
}
