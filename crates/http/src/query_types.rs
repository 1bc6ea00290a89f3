//! Request/query types (Deserialize)

use durable_viewer_core::Credentials;
use serde::Deserialize;

/// Login form body. Fields are optional so a missing one maps to `400`
/// instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(rename = "accountId")]
    pub account_id: Option<String>,
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

impl LoginForm {
    pub fn into_credentials(self) -> Option<Credentials> {
        let account_id = self.account_id.filter(|v| !v.is_empty())?;
        let api_key = self.api_key.filter(|v| !v.is_empty())?;
        Some(Credentials { account_id, api_key })
    }
}

#[derive(Debug, Deserialize)]
pub struct ObjectsQuery {
    #[serde(rename = "namespaceId")]
    pub namespace_id: Option<String>,
}

impl ObjectsQuery {
    pub fn namespace_id(&self) -> Option<&str> {
        self.namespace_id.as_deref().filter(|id| !id.is_empty())
    }
}
