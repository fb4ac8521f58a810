//! Client configuration.
//!
//! Provides [`ClientConfig`] for configuring a location client. Values can be
//! set through the typed builder or loaded from environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::{AwsRegion, Endpoint};
use crate::CoreResult;

/// Location client configuration.
///
/// # Examples
///
/// ```
/// use geostack_core::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.region.as_str(), "us-east-1");
/// assert!(config.validate_requests);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Region the client talks to.
    #[builder(default)]
    pub region: AwsRegion,

    /// Endpoint override (e.g. `"http://localhost:4566"`). When set, the
    /// per-operation host prefixes are not applied.
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,

    /// Whether schema constraints are checked before a request is sent.
    #[builder(default = true)]
    pub validate_requests: bool,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// Value of the `user-agent` header.
    #[builder(default = default_user_agent())]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            validate_requests: true,
            log_level: String::from("info"),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION` (then `DEFAULT_REGION`) | `us-east-1` |
    /// | `GEOSTACK_ENDPOINT_URL` | *(unset)* |
    /// | `GEOSTACK_VALIDATE_REQUESTS` | `true` |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// # Examples
    ///
    /// ```
    /// use geostack_core::ClientConfig;
    ///
    /// let config = ClientConfig::from_env();
    /// assert!(!config.region.as_str().is_empty());
    /// ```
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("AWS_REGION").or_else(|_| std::env::var("DEFAULT_REGION")) {
            config.region = AwsRegion::new(v);
        }
        if let Ok(v) = std::env::var("GEOSTACK_ENDPOINT_URL") {
            if !v.is_empty() {
                config.endpoint_url = Some(v);
            }
        }
        if let Ok(v) = std::env::var("GEOSTACK_VALIDATE_REQUESTS") {
            config.validate_requests = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Resolve the endpoint for an operation with the given host prefix.
    ///
    /// # Errors
    /// Returns an error if the endpoint override cannot be parsed or the
    /// region is not a valid hostname label.
    pub fn resolve_endpoint(&self, host_prefix: &str) -> CoreResult<Endpoint> {
        match &self.endpoint_url {
            Some(url) => Endpoint::parse(url),
            None => {
                let region = AwsRegion::parse(self.region.as_str())?;
                Ok(Endpoint::aws(&region, host_prefix))
            }
        }
    }
}

fn default_user_agent() -> String {
    format!("geostack/{}", env!("CARGO_PKG_VERSION"))
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region.as_str(), "us-east-1");
        assert!(config.endpoint_url.is_none());
        assert!(config.validate_requests);
        assert_eq!(config.log_level, "info");
        assert!(config.user_agent.starts_with("geostack/"));
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = ClientConfig::builder()
            .region(AwsRegion::new("eu-west-1"))
            .endpoint_url("http://127.0.0.1:9999")
            .validate_requests(false)
            .log_level("debug".into())
            .build();

        assert_eq!(config.region.as_str(), "eu-west-1");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://127.0.0.1:9999"));
        assert!(!config.validate_requests);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_resolve_prefixed_aws_endpoint() {
        let config = ClientConfig::default();
        let endpoint = config.resolve_endpoint("maps.").unwrap();
        assert_eq!(endpoint.to_string(), "https://maps.geo.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_should_ignore_host_prefix_with_endpoint_override() {
        let config = ClientConfig::builder()
            .endpoint_url("http://localhost:4566")
            .build();
        let endpoint = config.resolve_endpoint("routes.").unwrap();
        assert_eq!(endpoint.to_string(), "http://localhost:4566");
    }

    #[test]
    fn test_should_reject_invalid_region_on_resolve() {
        let config = ClientConfig::builder()
            .region(AwsRegion::new("Not A Region"))
            .build();
        assert!(matches!(
            config.resolve_endpoint("places."),
            Err(CoreError::InvalidRegion(_))
        ));
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = ClientConfig::default();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("validateRequests"));
        assert!(json.contains("userAgent"));
    }

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
    }
}
