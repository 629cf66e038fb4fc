use std::collections::BTreeMap;

use http::{header::AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use lazy_static::lazy_static;
use serde::Deserialize;
use url::Url;

use crate::Error;

/// The public minibus service.
pub const DEFAULT_ENDPOINT: &str = "https://minibus.web3.storage";

lazy_static! {
    static ref DEFAULT_ENDPOINT_URL: Url =
        Url::parse(DEFAULT_ENDPOINT).expect("invalid default endpoint");
}

fn default_endpoint() -> Url {
    DEFAULT_ENDPOINT_URL.clone()
}

/// Configuration of a [crate::blockservice::BlockClient].
///
/// Can be deserialized, all fields are optional:
///
/// ```
/// let config: minibus_client::BlockClientConfig = serde_json::from_value(serde_json::json!({
///     "endpoint": "https://minibus.example",
///     "headers": { "Authorization": "Basic c2VjcmV0" }
/// })).unwrap();
/// ```
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BlockClientConfig {
    /// Origin of the storage service. Only scheme, host and port are used
    /// to address requests.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,

    /// Sent verbatim with every request, usually to authorize it.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for BlockClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            headers: BTreeMap::new(),
        }
    }
}

impl BlockClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            headers: BTreeMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Authorizes all requests with an API token.
    pub fn with_basic_auth(self, token: impl AsRef<str>) -> Self {
        self.with_header("Authorization", format!("Basic {}", token.as_ref()))
    }

    /// Checks the endpoint is something we can send requests to.
    pub fn validate(&self) -> Result<(), Error> {
        match self.endpoint.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidConfig(format!(
                    "unsupported scheme: {}",
                    scheme
                )))
            }
        }

        if !self.endpoint.has_host() {
            return Err(Error::InvalidConfig("endpoint has no host".to_string()));
        }

        Ok(())
    }

    /// Converts the configured headers, failing on invalid names or values.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::InvalidConfig(format!("invalid header name {}: {}", name, e)))?;
            let mut value = HeaderValue::from_str(value)
                .map_err(|e| Error::InvalidConfig(format!("invalid value for {}: {}", name, e)))?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }

        Ok(headers)
    }
}

impl std::fmt::Debug for BlockClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header values carry credentials.
        let headers: BTreeMap<&str, &str> = self
            .headers
            .keys()
            .map(|name| (name.as_str(), "redacted"))
            .collect();

        f.debug_struct("BlockClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("headers", &headers)
            .finish()
    }
}

impl TryFrom<Url> for BlockClientConfig {
    type Error = Error;

    /// Parses a config from an endpoint url, like `https://minibus.web3.storage`.
    /// Query and fragment are rejected, headers can't be expressed in the url.
    fn try_from(url: Url) -> Result<Self, Self::Error> {
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::InvalidConfig(
                "endpoint may not have query or fragment".to_string(),
            ));
        }

        let config = Self::new(url);
        config.validate()?;

        Ok(config)
    }
}
