use anyhow::Result;
use tracing::debug;

use crate::client::JsonApiClient;
use crate::config::Settings;
use crate::models::token::Token;

/// Build a JSON:API client from the process environment.
///
/// Reads the backend endpoint from `BACKEND_URL`, connects a client to it
/// and registers the Token resource. No network call happens here; every
/// call returns a fresh, independent instance.
pub fn api_client<C: JsonApiClient>() -> Result<C> {
    let settings = Settings::from_env()?;
    Ok(api_client_with(&settings))
}

/// Build a JSON:API client against already-loaded settings.
pub fn api_client_with<C: JsonApiClient>(settings: &Settings) -> C {
    debug!(endpoint = %settings.backend_url, "building JSON:API client");
    let mut client = C::connect(settings.backend_url.as_str());
    client.define::<Token>();
    client
}
