use serde::{Deserialize, Serialize};

pub const AFFINITY_GENERATED_COOKIE: &str = "GENERATED_COOKIE";
pub const AFFINITY_CLIENT_IP: &str = "CLIENT_IP";

/// Advanced settings attached to a service port through the
/// `cloud.google.com/backend-config` service annotation.
///
/// Only the spec is retained; the reconciler resolves the referenced resource
/// before it hands a service port to the index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BackendConfig {
    pub spec: BackendConfigSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfigSpec {
    pub iap: Option<IapConfig>,
    pub cdn: Option<CdnConfig>,
    pub security_policy: Option<SecurityPolicyConfig>,
    pub timeout_sec: Option<i64>,
    pub connection_draining: Option<ConnectionDrainingConfig>,
    pub session_affinity: Option<SessionAffinityConfig>,
    pub custom_request_headers: Option<CustomRequestHeadersConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IapConfig {
    pub enabled: bool,
    pub oauthclient_credentials: Option<OAuthClientCredentials>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthClientCredentials {
    pub secret_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnConfig {
    pub enabled: bool,
    pub cache_policy: Option<CacheKeyPolicy>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheKeyPolicy {
    #[serde(default)]
    pub include_host: bool,
    #[serde(default)]
    pub include_protocol: bool,
    #[serde(default)]
    pub include_query_string: bool,
    pub query_string_blacklist: Option<Vec<String>>,
    pub query_string_whitelist: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SecurityPolicyConfig {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDrainingConfig {
    pub draining_timeout_sec: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAffinityConfig {
    pub affinity_type: Option<String>,
    pub affinity_cookie_ttl_sec: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomRequestHeadersConfig {
    #[serde(default)]
    pub headers: Vec<String>,
}
