//! # Token Backend Client Library
//!
//! Provides the client-side pieces for talking to the token backend over
//! JSON:API: the Token resource model, the capability contract of a
//! JSON:API client, and a factory wiring a client to the configured
//! backend endpoint.
//!
//! Modules:
//! - `config` — backend endpoint settings
//! - `models` — JSON:API resource models (Token)
//! - `client` — client capability contract, request descriptor, factory
//!
//! This crate is a consumer of the client contract, not its implementer:
//! request execution, response parsing, retries and pagination live in
//! whatever transport implements [`client::JsonApiClient`].

pub mod client;
pub mod config;
pub mod models;
pub mod utils;

pub use crate::client::factory::{api_client, api_client_with};
pub use crate::client::{ApiClientRequest, JsonApiClient, JsonApiResource};
pub use crate::models::token::Token;
