// tests/common/mod.rs
use http::Method;
use serde_json::{json, Value};

use crate::client::{ApiClientRequest, JsonApiClient, JsonApiResource};

/// Minimal in-memory implementation of the JSON:API client contract.
///
/// Keeps no connection and performs no I/O; it only records what was
/// registered and builds request descriptors the way a real transport
/// would. The factory tests run against it.
#[derive(Debug, Default)]
pub struct RecordingClient {
    endpoint: String,
    defined: Vec<&'static str>,
}

impl RecordingClient {
    /// Resource type names registered via `define`, in registration order.
    pub fn defined_types(&self) -> &[&'static str] {
        &self.defined
    }
}

impl JsonApiClient for RecordingClient {
    fn connect(endpoint: impl Into<String>) -> Self {
        RecordingClient {
            endpoint: endpoint.into(),
            defined: Vec::new(),
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn define<R: JsonApiResource>(&mut self) {
        if !self.defined.contains(&R::TYPE) {
            self.defined.push(R::TYPE);
        }
    }

    fn build_request_create<R: JsonApiResource>(&self, resource: &R) -> ApiClientRequest {
        let mut request =
            ApiClientRequest::new(Method::POST, format!("{}/{}", self.endpoint, R::TYPE));
        request.data = json!({
            "data": {
                "type": R::TYPE,
                "id": resource.resource_id(),
                "attributes": attributes_of(resource),
            }
        });
        request
    }

    fn build_request_delete<R: JsonApiResource>(&self, resource: &R) -> ApiClientRequest {
        ApiClientRequest::new(
            Method::DELETE,
            format!("{}/{}/{}", self.endpoint, R::TYPE, resource.resource_id()),
        )
    }

    fn build_request_find<R: JsonApiResource>(&self) -> ApiClientRequest {
        ApiClientRequest::new(Method::GET, format!("{}/{}", self.endpoint, R::TYPE))
    }
}

/// Serialize a resource to its attributes object, dropping the id member
/// (JSON:API carries it next to `type`, not inside `attributes`).
fn attributes_of<R: JsonApiResource>(resource: &R) -> Value {
    let mut value = serde_json::to_value(resource).expect("resource serializes");
    if let Value::Object(ref mut map) = value {
        map.remove("id");
    }
    value
}

/// Install a compact tracing subscriber for test output. Safe to call from
/// every test; later calls are no-ops.
#[cfg(test)]
pub fn init_test_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}
