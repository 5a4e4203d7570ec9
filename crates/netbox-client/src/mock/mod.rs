//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! Objects are stored as raw JSON per endpoint, in insertion order, and list
//! calls apply the same filter, offset and limit handling the server does for
//! the parameters the data sources send.
//!
//! - `filter.rs` - query parameter matching
//! - `helpers.rs` - JSON fixture builders for every endpoint

mod filter;
mod helpers;

pub use helpers::Helpers;

use crate::common::PaginatedResponse;
use crate::common::query::ListQuery;
use crate::endpoint::Endpoint;
use crate::error::NetBoxError;
use crate::netbox_trait::NetBoxClientTrait;
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Page size NetBox applies when the request carries no `limit`
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Mock NetBoxClient for testing
///
/// Clones share the same store, so a test can keep a handle while the code
/// under test owns another.
#[derive(Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    pub(crate) objects: Arc<Mutex<HashMap<Endpoint, Vec<Value>>>>,
    // Queued outcomes, consumed one per request; `None` lets a request through
    pub(crate) failures: Arc<Mutex<VecDeque<Option<String>>>>,
    pub(crate) requests: Arc<Mutex<Vec<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Store a raw JSON object under `endpoint` (for test setup)
    pub fn insert(&self, endpoint: Endpoint, object: Value) {
        lock(&self.objects).entry(endpoint).or_default().push(object);
    }

    /// Store a typed model under `endpoint` (for test setup)
    pub fn add<T: Serialize>(&self, endpoint: Endpoint, object: &T) -> Result<(), NetBoxError> {
        self.insert(endpoint, serde_json::to_value(object)?);
        Ok(())
    }

    /// Store the default fixture for `endpoint` and return it
    pub fn add_fixture(&self, endpoint: Endpoint, id: u64) -> Value {
        let object = self.helpers().fixture(endpoint, id);
        self.insert(endpoint, object.clone());
        object
    }

    /// Make the next request fail with `NetBoxError::Api(message)`
    pub fn fail_next(&self, message: impl Into<String>) {
        lock(&self.failures).push_back(Some(message.into()));
    }

    /// Let `successes` requests through, then fail the one after them
    pub fn fail_after(&self, successes: usize, message: impl Into<String>) {
        let mut failures = lock(&self.failures);
        failures.extend(std::iter::repeat_n(None, successes));
        failures.push_back(Some(message.into()));
    }

    /// Number of requests served so far, failed ones included
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Request log as `"<path>?<query>"` lines
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    /// Get helpers instance
    pub fn helpers(&self) -> Helpers {
        Helpers::new(self.base_url.clone())
    }

    fn record(&self, path: String, query: &str) -> Result<(), NetBoxError> {
        let line = if query.is_empty() {
            path
        } else {
            format!("{}?{}", path, query)
        };
        lock(&self.requests).push(line);

        match lock(&self.failures).pop_front().flatten() {
            Some(message) => Err(NetBoxError::Api(message)),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.record("/api/status/".to_string(), "")
    }

    async fn retrieve(&self, endpoint: Endpoint, id: u64) -> Result<Value, NetBoxError> {
        let path = endpoint.object_path(id);
        self.record(path.clone(), "")?;

        lock(&self.objects)
            .get(&endpoint)
            .and_then(|objects| {
                objects
                    .iter()
                    .find(|o| o.get("id").and_then(Value::as_u64) == Some(id))
            })
            .cloned()
            .ok_or_else(|| {
                NetBoxError::NotFound(format!(
                    "Resource not found: {} - {{\"detail\":\"No {} matches the given query.\"}}",
                    path, endpoint
                ))
            })
    }

    async fn list(
        &self,
        endpoint: Endpoint,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Value>, NetBoxError> {
        let path = endpoint.list_path();
        self.record(path.clone(), &query.to_query_string())?;

        let matching: Vec<Value> = lock(&self.objects)
            .get(&endpoint)
            .map(|objects| {
                objects
                    .iter()
                    .filter(|o| filter::matches(o, query))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let count = matching.len() as u64;
        let offset = query.get_offset().unwrap_or(0);
        let limit = query.get_limit().unwrap_or(DEFAULT_PAGE_LIMIT) as u64;
        let results: Vec<Value> = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();

        let end = offset + results.len() as u64;
        let next = (end < count).then(|| {
            format!(
                "{}{}?{}",
                self.base_url,
                path,
                query.clone().limit(limit as u32).offset(end).to_query_string()
            )
        });
        let previous = (offset > 0).then(|| {
            format!(
                "{}{}?{}",
                self.base_url,
                path,
                query
                    .clone()
                    .limit(limit as u32)
                    .offset(offset.saturating_sub(limit))
                    .to_query_string()
            )
        });

        Ok(PaginatedResponse {
            count,
            next,
            previous,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_pages_through_offset_and_limit() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        for id in 1..=5 {
            mock.add_fixture(Endpoint::Tenants, id);
        }

        let page = mock
            .list(Endpoint::Tenants, &ListQuery::new().limit(2).offset(2))
            .await
            .unwrap();
        assert_eq!(page.count, 5);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0]["id"], json!(3));
        assert!(page.next.is_some());
        assert!(page.previous.is_some());

        let last = mock
            .list(Endpoint::Tenants, &ListQuery::new().limit(2).offset(4))
            .await
            .unwrap();
        assert_eq!(last.results.len(), 1);
        assert!(last.next.is_none());
    }

    #[tokio::test]
    async fn test_retrieve_missing_object_is_not_found() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        let err = mock.retrieve(Endpoint::Sites, 99).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(mock.requests(), vec!["/api/dcim/sites/99/".to_string()]);
    }

    #[tokio::test]
    async fn test_fail_next_applies_to_one_request() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.add_fixture(Endpoint::Vrfs, 1);
        mock.fail_next("boom");

        let err = mock.retrieve(Endpoint::Vrfs, 1).await.unwrap_err();
        assert!(matches!(err, NetBoxError::Api(ref m) if m == "boom"));
        assert!(mock.retrieve(Endpoint::Vrfs, 1).await.is_ok());
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_fail_after_skips_successful_requests() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.add_fixture(Endpoint::Vrfs, 1);
        mock.fail_after(1, "second call");

        assert!(mock.retrieve(Endpoint::Vrfs, 1).await.is_ok());
        assert!(mock.retrieve(Endpoint::Vrfs, 1).await.is_err());
        assert!(mock.retrieve(Endpoint::Vrfs, 1).await.is_ok());
    }
}
