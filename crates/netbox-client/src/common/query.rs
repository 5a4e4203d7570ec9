//! Query utilities for NetBox API
//!
//! Provides the list filter builder, typed decoding helpers and the
//! offset/limit page loop.

use crate::common::PaginatedResponse;
use crate::endpoint::Endpoint;
use crate::error::NetBoxError;
use crate::netbox_trait::NetBoxClientTrait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Filters for a NetBox list call.
///
/// Multi-valued filters repeat the key (`name=a&name=b`), which NetBox ORs.
/// `limit` and `offset` are always rendered last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, String)>,
    limit: Option<u32>,
    offset: Option<u64>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter with one or more values
    pub fn filter<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.params.push((key.to_string(), value.into()));
        }
        self
    }

    /// Add a single-valued filter
    pub fn eq(self, key: &str, value: impl Into<String>) -> Self {
        self.filter(key, [value.into()])
    }

    /// Free-text search (`q`)
    pub fn q(self, term: impl Into<String>) -> Self {
        self.eq("q", term)
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Filter parameters, excluding `limit`/`offset`
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Every value supplied for `key`
    pub fn values(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn get_limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn get_offset(&self) -> Option<u64> {
        self.offset
    }

    /// Render as an encoded query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={}", limit));
        }
        if let Some(offset) = self.offset {
            pairs.push(format!("offset={}", offset));
        }
        pairs.join("&")
    }
}

/// Retrieve one object by ID and decode it
pub async fn get_object<T: DeserializeOwned>(
    client: &dyn NetBoxClientTrait,
    endpoint: Endpoint,
    id: u64,
) -> Result<T, NetBoxError> {
    let value = client.retrieve(endpoint, id).await?;
    serde_json::from_value(value).map_err(NetBoxError::Serialization)
}

/// Fetch one page of a list call and decode its results
pub async fn list_objects<T: DeserializeOwned>(
    client: &dyn NetBoxClientTrait,
    endpoint: Endpoint,
    query: &ListQuery,
) -> Result<PaginatedResponse<T>, NetBoxError> {
    let page = client.list(endpoint, query).await?;
    let results = page
        .results
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()?;

    Ok(PaginatedResponse {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results,
    })
}

/// Fetch every page of a list call using fixed-size offset pagination.
///
/// The loop stops on an empty page, once `offset` reaches the reported
/// `count`, or when the server reports no further page. A page larger than
/// `page_size` is rejected. The first error aborts the whole operation.
pub async fn list_all_pages<T: DeserializeOwned>(
    client: &dyn NetBoxClientTrait,
    endpoint: Endpoint,
    query: &ListQuery,
    page_size: u32,
) -> Result<Vec<T>, NetBoxError> {
    if page_size == 0 {
        return Err(NetBoxError::InvalidRequest(
            "page size must be greater than zero".to_string(),
        ));
    }

    let mut offset: u64 = 0;
    let mut results = Vec::new();

    loop {
        let page_query = query.clone().limit(page_size).offset(offset);
        debug!("Fetching {} page at offset {}", endpoint, offset);

        let page: PaginatedResponse<T> = list_objects(client, endpoint, &page_query).await?;
        let page_len = page.results.len();
        if page_len == 0 {
            break;
        }
        if page_len > page_size as usize {
            return Err(NetBoxError::Api(format!(
                "Expected page size to be between 0 and {}, got {}",
                page_size, page_len
            )));
        }

        results.extend(page.results);
        offset += page_len as u64;

        if offset >= page.count || page.next.is_none() {
            break;
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_repeats_multi_valued_keys() {
        let query = ListQuery::new()
            .filter("name", ["edge-1", "edge 2"])
            .eq("site", "dc1")
            .limit(100)
            .offset(200);

        assert_eq!(
            query.to_query_string(),
            "name=edge-1&name=edge%202&site=dc1&limit=100&offset=200"
        );
    }

    #[test]
    fn test_limit_and_offset_replace_previous_values() {
        let query = ListQuery::new().limit(10).offset(5).limit(50).offset(0);
        assert_eq!(query.to_query_string(), "limit=50&offset=0");
        assert_eq!(query.get_limit(), Some(50));
    }

    #[test]
    fn test_values_returns_every_value_for_key() {
        let query = ListQuery::new().filter("tag", ["a", "b"]).q("core");
        assert_eq!(query.values("tag"), vec!["a", "b"]);
        assert_eq!(query.values("q"), vec!["core"]);
        assert!(query.values("name").is_empty());
    }

    #[test]
    fn test_empty_query_renders_empty_string() {
        assert_eq!(ListQuery::new().to_query_string(), "");
    }
}
