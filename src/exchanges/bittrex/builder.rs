use crate::core::config::Credentials;
use crate::core::errors::BittrexError;
use crate::core::kernel::{
    HmacSha512Signer, NonceProvider, ReqwestRest, RestClientBuilder, RestClientConfig,
};
use crate::exchanges::bittrex::connector::BittrexConnector;
use reqwest::Client;
use std::sync::Arc;

/// Builder for creating Bittrex connectors
///
/// Everything the transport needs is fixed here, once, and shared by every
/// call the connector makes.
#[derive(Default)]
pub struct BittrexBuilder {
    credentials: Option<Credentials>,
    rest_config: RestClientConfig,
    http_client: Option<Client>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
}

impl BittrexBuilder {
    /// Create a new `BittrexBuilder` with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API credentials; without them only public endpoints work
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base URL for REST API
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.rest_config.base_url = base_url;
        self
    }

    /// Set REST request timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.rest_config = self.rest_config.with_timeout(timeout_seconds);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.rest_config = self.rest_config.with_user_agent(user_agent);
        self
    }

    /// Use a preconfigured HTTP client instead of building one
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn with_nonce_provider(mut self, nonce_provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(nonce_provider);
        self
    }

    /// Build only the REST transport
    pub fn build_rest(self) -> Result<ReqwestRest, BittrexError> {
        let mut builder = RestClientBuilder::new(self.rest_config);

        if let Some(credentials) = self.credentials {
            builder = builder.with_signer(Arc::new(HmacSha512Signer::new(credentials)));
        }
        if let Some(http_client) = self.http_client {
            builder = builder.with_http_client(http_client);
        }
        if let Some(nonce_provider) = self.nonce_provider {
            builder = builder.with_nonce_provider(nonce_provider);
        }

        builder.build()
    }

    /// Build the connector
    pub fn build(self) -> Result<BittrexConnector<ReqwestRest>, BittrexError> {
        Ok(BittrexConnector::new(self.build_rest()?))
    }
}

/// Create a connector for public and private endpoints
pub fn build_connector(
    credentials: Credentials,
) -> Result<BittrexConnector<ReqwestRest>, BittrexError> {
    BittrexBuilder::new().with_credentials(credentials).build()
}

/// Create a connector for public endpoints only
pub fn build_public_connector() -> Result<BittrexConnector<ReqwestRest>, BittrexError> {
    BittrexBuilder::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::BASE_URL;

    #[test]
    fn test_build_without_credentials() {
        let rest = BittrexBuilder::new().build_rest().unwrap();
        assert!(!rest.has_signer());
        assert_eq!(rest.config().base_url, BASE_URL);
    }

    #[test]
    fn test_build_with_credentials() {
        let rest = BittrexBuilder::new()
            .with_credentials(Credentials::new("test_key", "test_secret"))
            .build_rest()
            .unwrap();
        assert!(rest.has_signer());
    }

    #[test]
    fn test_builder_settings() {
        let rest = BittrexBuilder::new()
            .with_base_url("http://localhost:8080/Api/v2.0".to_string())
            .with_timeout(5)
            .with_user_agent("test-agent".to_string())
            .build_rest()
            .unwrap();

        let config = rest.config();
        assert_eq!(config.base_url, "http://localhost:8080/Api/v2.0");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_builder_invalid_base_url() {
        let result = BittrexBuilder::new()
            .with_base_url("::not a url".to_string())
            .build();
        assert!(matches!(result, Err(BittrexError::ConfigError(_))));
    }

    #[test]
    fn test_build_connector_helpers() {
        assert!(build_connector(Credentials::new("k", "s")).is_ok());
        assert!(build_public_connector().is_ok());
    }
}
