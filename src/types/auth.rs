use serde::{Deserialize, Serialize};

/// Authentication settings of the master
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterAuthConfig {
    pub request_header: Option<RequestHeaderAuthenticationOptions>,
    pub webhook_token_authenticators: Vec<WebhookTokenAuthenticator>,
    pub oauth_metadata_file: String,
}

/// Front proxy authentication through request headers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestHeaderAuthenticationOptions {
    #[serde(rename = "clientCA")]
    pub client_ca: String,
    pub client_common_names: Vec<String>,
    pub username_headers: Vec<String>,
    pub group_headers: Vec<String>,
    pub extra_header_prefixes: Vec<String>,
}

/// Remote token authenticator reached through a kubeconfig-style file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookTokenAuthenticator {
    pub config_file: String,
    #[serde(rename = "cacheTTL")]
    pub cache_ttl: String,
}

impl WebhookTokenAuthenticator {
    pub fn new(config_file: impl Into<String>, cache_ttl: impl Into<String>) -> Self {
        Self {
            config_file: config_file.into(),
            cache_ttl: cache_ttl.into(),
        }
    }
}

/// OAuth 2.0 authorization server discovery document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OAuthMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub scopes_supported: Vec<String>,
    pub response_types_supported: Vec<String>,
    pub grant_types_supported: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_challenge_methods_supported: Vec<String>,
}
