//! Capability contract of an external JSON:API client.
//!
//! The backend speaks JSON:API, and the client library that actually puts
//! documents on the wire is an external dependency. This module declares
//! the shape of that dependency so the rest of the crate can depend on it
//! through a trait instead of a concrete transport.

pub mod factory;
pub mod request;
pub mod resource;

pub use request::ApiClientRequest;
pub use resource::JsonApiResource;

/// Operations every JSON:API client implementation exposes.
///
/// `define` registers a resource type so the client knows how to
/// (de)serialize instances of it; the `build_request_*` operations map a
/// resource/type context to a concrete [`ApiClientRequest`]. Nothing here
/// performs I/O.
pub trait JsonApiClient: Sized {
    /// Construct a client bound to the given backend base URL.
    /// The URL is taken verbatim; validation is the implementation's job.
    fn connect(endpoint: impl Into<String>) -> Self;

    /// The backend base URL this client targets.
    fn endpoint(&self) -> &str;

    /// Register a resource type with the client.
    fn define<R: JsonApiResource>(&mut self);

    /// Build a request creating `resource` in its collection.
    fn build_request_create<R: JsonApiResource>(&self, resource: &R) -> ApiClientRequest;

    /// Build a request deleting `resource` by its identifier.
    fn build_request_delete<R: JsonApiResource>(&self, resource: &R) -> ApiClientRequest;

    /// Build a request fetching the collection of resource type `R`.
    fn build_request_find<R: JsonApiResource>(&self) -> ApiClientRequest;
}
