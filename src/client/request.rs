use http::Method;
use serde_json::Value;
use std::collections::HashMap;

use crate::utils::constants::JSONAPI_MEDIA_TYPE;

/// A client's internal request representation: everything needed to issue
/// one HTTP call against the backend. Built by [`crate::client::JsonApiClient`]
/// implementations, executed elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClientRequest {
    pub url: String,
    pub method: Method,
    pub headers: HashMap<String, String>,
    /// JSON:API document payload, `Null` for body-less requests.
    pub data: Value,
    /// Out-of-band information for the executing transport.
    pub meta: Value,
}

impl ApiClientRequest {
    /// A request descriptor with the JSON:API media type pre-set and no payload.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), JSONAPI_MEDIA_TYPE.to_string());
        Self {
            url: url.into(),
            method,
            headers,
            data: Value::Null,
            meta: Value::Null,
        }
    }
}
