use serde::{Deserialize, Serialize};

use crate::client::resource::JsonApiResource;

/// Login credential submission, POSTed to the backend's `tokens` collection.
///
/// A passive value object: created right before a request, discarded after.
/// Credentials are stored verbatim with no validation or normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Token {
    // Never assigned; create-only, but JSON:API still addresses resources by id.
    pub id: String,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Token {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            id: String::new(),
            email,
            password,
        }
    }
}

impl JsonApiResource for Token {
    const TYPE: &'static str = "tokens";

    fn resource_id(&self) -> &str {
        &self.id
    }
}
