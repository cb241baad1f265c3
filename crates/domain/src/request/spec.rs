//! Request specification type

use std::collections::BTreeMap;

use url::Url;
use uuid::Uuid;

use super::path::render_segments;
use super::{HttpMethod, QueryParam, QueryParams, RequestBody};
use crate::error::{DomainError, DomainResult};

/// Complete specification for an HTTP request relative to a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Unique identifier for this request
    pub id: Uuid,
    /// Human-readable name
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Path template relative to the base URL (e.g. `/pet/{petId}`)
    pub path: String,
    /// Values for `{name}` placeholders in `path`
    pub path_params: BTreeMap<String, String>,
    /// Query parameters
    pub query: QueryParams,
    /// Request body
    pub body: RequestBody,
}

impl RequestSpec {
    /// Creates a new request specification without parameters or body.
    #[must_use]
    pub fn new(name: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            method,
            path: path.into(),
            path_params: BTreeMap::new(),
            query: QueryParams::new(),
            body: RequestBody::none(),
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Post, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Put, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, HttpMethod::Delete, path)
    }

    /// Sets a path parameter (builder pattern).
    #[must_use]
    pub fn with_path_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path_params.insert(name.into(), value.to_string());
        self
    }

    /// Appends a query parameter (builder pattern).
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.add(QueryParam::new(key, value));
        self
    }

    /// Sets the body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Resolves the full URL against `base`.
    ///
    /// The base path is kept as a prefix. Each templated segment is
    /// percent-encoded on its own, and query parameters are appended in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder has no parameter or if the base URL
    /// cannot carry a path.
    pub fn resolve_url(&self, base: &Url) -> DomainResult<Url> {
        let segments = render_segments(&self.path, &self.path_params)?;

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| DomainError::InvalidUrl(format!("cannot be a base: {base}")))?;
            path.pop_if_empty();
            path.extend(segments.iter().map(String::as_str));
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in self.query.iter() {
                pairs.append_pair(&param.key, &param.value);
            }
        }

        Ok(url)
    }
}
