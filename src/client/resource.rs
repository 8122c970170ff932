use serde::{de::DeserializeOwned, Serialize};

/// A type that can be registered with a JSON:API client as a resource.
///
/// The serde bounds let client implementations move instances to and from
/// the wire; this crate itself never frames documents.
pub trait JsonApiResource: Serialize + DeserializeOwned {
    /// Collection name used in request paths and `data.type`, e.g. "tokens".
    const TYPE: &'static str;

    /// Resource identifier. Empty for create-only resources the backend
    /// never hands back by id.
    fn resource_id(&self) -> &str;
}
