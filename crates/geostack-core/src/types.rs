//! Region and endpoint types shared by the location client.

use std::fmt;

use crate::CoreError;

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Default region of the location service.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region without validation.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Create a region, rejecting identifiers that cannot appear in a hostname.
    ///
    /// # Errors
    /// Returns an error if the region is empty or contains anything other than
    /// lowercase ASCII letters, digits, and hyphens.
    pub fn parse(region: impl Into<String>) -> Result<Self, CoreError> {
        let region = region.into();
        let valid = !region.is_empty()
            && !region.starts_with('-')
            && !region.ends_with('-')
            && region
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if !valid {
            return Err(CoreError::InvalidRegion(region));
        }
        Ok(Self(region))
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved service endpoint: scheme plus authority, no trailing slash.
///
/// The location service splits its API across host prefixes (`tracking.`,
/// `maps.`, ...). A resolved endpoint already carries the prefix when the
/// default AWS hostname is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    scheme: String,
    authority: String,
}

impl Endpoint {
    /// Parse an endpoint URL of the form `scheme://authority[/]`.
    ///
    /// # Errors
    /// Returns an error if the URL does not parse, if the scheme is missing
    /// or not `http`/`https`, or if the URL carries a path or query.
    pub fn parse(url: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidEndpoint(url.to_owned());
        let uri: http::Uri = url.parse().map_err(|_| invalid())?;

        let scheme = uri
            .scheme_str()
            .filter(|s| *s == "http" || *s == "https")
            .ok_or_else(invalid)?;
        let authority = uri.authority().ok_or_else(invalid)?;
        if uri.path() != "/" || uri.query().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            scheme: scheme.to_owned(),
            authority: authority.as_str().to_owned(),
        })
    }

    /// The default AWS endpoint for a region and host prefix.
    #[must_use]
    pub fn aws(region: &AwsRegion, host_prefix: &str) -> Self {
        Self {
            scheme: "https".to_owned(),
            authority: format!("{host_prefix}geo.{region}.amazonaws.com"),
        }
    }

    /// URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host and optional port.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_region() {
        let region = AwsRegion::new("eu-west-1");
        assert_eq!(region.as_str(), "eu-west-1");
    }

    #[test]
    fn test_should_use_default_region() {
        let region = AwsRegion::default();
        assert_eq!(region.as_str(), "us-east-1");
    }

    #[test]
    fn test_should_reject_invalid_region() {
        assert!(AwsRegion::parse("").is_err());
        assert!(AwsRegion::parse("US-EAST-1").is_err());
        assert!(AwsRegion::parse("us east").is_err());
        assert!(AwsRegion::parse("-us-east-1").is_err());
        assert!(AwsRegion::parse("ap-southeast-2").is_ok());
    }

    #[test]
    fn test_should_build_aws_endpoint_with_host_prefix() {
        let endpoint = Endpoint::aws(&AwsRegion::new("eu-central-1"), "tracking.");
        assert_eq!(
            endpoint.to_string(),
            "https://tracking.geo.eu-central-1.amazonaws.com"
        );
    }

    #[test]
    fn test_should_parse_endpoint_url() {
        let endpoint = Endpoint::parse("http://localhost:4566/").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.authority(), "localhost:4566");

        let endpoint = Endpoint::parse("https://[::1]:8443").unwrap();
        assert_eq!(endpoint.to_string(), "https://[::1]:8443");
    }

    #[test]
    fn test_should_reject_malformed_endpoint() {
        assert!(Endpoint::parse("localhost:4566").is_err());
        assert!(Endpoint::parse("ftp://localhost").is_err());
        assert!(Endpoint::parse("http://").is_err());
        assert!(Endpoint::parse("http://localhost/prefix").is_err());
        assert!(Endpoint::parse("http://localhost?debug=1").is_err());
        assert!(Endpoint::parse("http://local host").is_err());
    }
}
