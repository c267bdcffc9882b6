//! Request descriptors, URL construction and header assembly.

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{Error, Result};

/// Per-request options: method, body, header overrides and query parameters.
///
/// Query keys are unique; entries whose value is `None` are left out of the URL.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method (GET by default).
    pub method: Method,
    /// Raw request body.
    pub body: Option<String>,
    /// Headers applied on top of the defaults.
    pub headers: HeaderMap,
    /// Query parameters.
    pub query: BTreeMap<String, Option<String>>,
}

impl RequestOptions {
    /// Create empty options (GET, no body, no overrides).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set a raw body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize a value as the JSON body.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        Ok(self.body(serde_json::to_string(body)?))
    }

    /// Add a header override.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), Some(value.to_string()));
        self
    }

    /// Add a query parameter that is dropped when `None`.
    pub fn query_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.query.insert(key.into(), value.map(|v| v.to_string()));
        self
    }

    /// Merge the fields of a serializable struct into the query parameters.
    ///
    /// `null` fields are dropped, strings are used as-is, arrays are
    /// comma-joined and every other value is stringified.
    pub fn query_from<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        let Value::Object(map) = serde_json::to_value(params)? else {
            return Err(Error::internal("query parameters must serialize to an object"));
        };
        for (key, value) in map {
            self.query.insert(key, query_value(value));
        }
        Ok(self)
    }
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|v| query_value(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// Join a base URL and an endpoint path with exactly one slash, then append
/// the non-`None` query parameters.
///
/// Parameters are form-urlencoded and appended with `?`, or with `&` when the
/// joined URL already has a query string.
pub fn build_url(base_url: &str, endpoint: &str, query: &BTreeMap<String, Option<String>>) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut appended = false;
    for (key, value) in query {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            appended = true;
        }
    }

    if appended {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&serializer.finish());
    }
    url
}

/// Build the headers for one request.
///
/// Order matters: `Content-Type: application/json` first, then the caller's
/// overrides (which replace defaults), then the bypass `Authorization`
/// header. The bypass header is applied last so it replaces any
/// caller-supplied `Authorization`.
pub fn assemble_headers(overrides: &HeaderMap, bypass_auth: Option<&HeaderValue>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.extend(overrides.clone());
    if let Some(auth) = bypass_auth {
        headers.insert(AUTHORIZATION, auth.clone());
    }
    headers
}

/// Format a bypass secret as a sensitive `Authorization` header value.
pub(crate) fn bearer(secret: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", secret))
        .map_err(|_| Error::Config("Invalid bypass secret".to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
