//! Shared constants and invariants

/// Environment variable supplying the backend base URL.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// JSON:API media type, sent as Content-Type on every built request.
pub const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";
