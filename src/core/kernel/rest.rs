use crate::core::config::ConfigError;
use crate::core::errors::BittrexError;
use crate::core::kernel::envelope::{decode_envelope, decode_result};
use crate::core::kernel::nonce::{IncreasingNonce, NonceProvider};
use crate::core::kernel::signer::Signer;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};
use url::Url;

/// Base URL of the v2.0 API
pub const BASE_URL: &str = "https://bittrex.com/Api/v2.0";

/// REST client trait for the two request shapes the API knows
///
/// Every call is a single GET whose response is unwrapped from the
/// `{success, message, result}` envelope.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Call `GET {base}/pub/{group}/{command}` without authentication
    ///
    /// # Arguments
    /// * `group` - Resource group, e.g. `markets`
    /// * `command` - Command within the group, e.g. `GetMarketSummaries`
    /// * `params` - Query parameters; on duplicate keys the last one wins
    ///
    /// # Returns
    /// The raw `result` payload
    async fn public_call(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, BittrexError>;

    /// Call `GET {base}/key/{group}/{command}` with `apikey`, `nonce` and an
    /// `apisign` header over the final URL
    ///
    /// # Returns
    /// The raw `result` payload
    async fn private_call(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, BittrexError>;

    /// Public call with the result deserialized to `T`
    async fn public_call_json<T: DeserializeOwned>(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<T, BittrexError> {
        let result = self.public_call(group, command, params).await?;
        decode_result(result)
    }

    /// Private call with the result deserialized to `T`
    async fn private_call_json<T: DeserializeOwned>(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<T, BittrexError> {
        let result = self.private_call(group, command, params).await?;
        decode_result(result)
    }
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL including the version prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self::new(BASE_URL.to_string())
    }
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout_seconds: 30,
            user_agent: concat!("bittrex-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    nonce_provider: Arc<dyn NonceProvider>,
    http_client: Option<Client>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
            nonce_provider: Arc::new(IncreasingNonce::new()),
            http_client: None,
        }
    }

    /// Set the signer for private calls
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Replace the default [`IncreasingNonce`] source
    pub fn with_nonce_provider(mut self, nonce_provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = nonce_provider;
        self
    }

    /// Use a preconfigured HTTP client.
    ///
    /// The client's own timeout and user agent apply; the ones in
    /// [`RestClientConfig`] are ignored.
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, BittrexError> {
        Url::parse(&self.config.base_url).map_err(|e| {
            ConfigError::InvalidConfiguration(format!(
                "Invalid base URL '{}': {}",
                self.config.base_url, e
            ))
        })?;

        let client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(Duration::from_secs(self.config.timeout_seconds))
                .user_agent(&self.config.user_agent)
                .build()
                .map_err(|e| {
                    ConfigError::InvalidConfiguration(format!(
                        "Failed to build HTTP client: {}",
                        e
                    ))
                })?,
        };

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
            nonce_provider: self.nonce_provider,
        })
    }
}

/// A fully prepared private request: the URL that will be sent and the
/// headers signed over it.
#[derive(Clone, Debug)]
pub struct SignedRequest {
    pub url: Url,
    pub headers: HashMap<String, String>,
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Create a new `ReqwestRest` with the default nonce source
    pub fn new(
        config: RestClientConfig,
        signer: Option<Arc<dyn Signer>>,
    ) -> Result<Self, BittrexError> {
        let mut builder = RestClientBuilder::new(config);
        if let Some(signer) = signer {
            builder = builder.with_signer(signer);
        }
        builder.build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// `{base}/{scope}/{group}/{command}`
    fn endpoint_url(&self, scope: &str, group: &str, command: &str) -> Result<Url, BittrexError> {
        let url = format!(
            "{}/{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            scope,
            group,
            command
        );
        Ok(Url::parse(&url)?)
    }

    /// Build the public request URL
    pub fn prepare_public_url(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, BittrexError> {
        let url = self.endpoint_url("pub", group, command)?;
        Ok(with_query(url, &canonical_params(params)))
    }

    /// Build and sign the private request URL.
    ///
    /// Fails with `AuthError` before touching the network when no signer is
    /// configured or the credentials are empty.
    pub fn prepare_private_request(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<SignedRequest, BittrexError> {
        let signer = self.signer.as_ref().ok_or_else(|| {
            BittrexError::AuthError(
                "Authentication required but no signer provided".to_string(),
            )
        })?;

        let mut query = canonical_params(params);
        let nonce = self.nonce_provider.next_nonce();
        query.extend(signer.auth_params(nonce)?);

        let url = with_query(self.endpoint_url("key", group, command)?, &query);
        let headers = signer.sign_request(&url)?;

        Ok(SignedRequest { url, headers })
    }

    /// Send the GET and unwrap the envelope
    #[instrument(skip_all, fields(path = %url.path()))]
    async fn execute(
        &self,
        url: Url,
        headers: HashMap<String, String>,
    ) -> Result<Value, BittrexError> {
        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(CACHE_CONTROL, "no-store")
            .header(CACHE_CONTROL, "must-revalidate");

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<Value, BittrexError> {
        let status = response.status();
        debug!(status = %status, "Received response");

        if status != StatusCode::OK {
            return Err(BittrexError::RequestError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        trace!("Response body: {}", String::from_utf8_lossy(&body));

        decode_envelope(&body)
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, params), fields(group = %group, command = %command, param_count = params.len()))]
    async fn public_call(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, BittrexError> {
        let url = self.prepare_public_url(group, command, params)?;
        self.execute(url, HashMap::new()).await
    }

    #[instrument(skip(self, params), fields(group = %group, command = %command, param_count = params.len()))]
    async fn private_call(
        &self,
        group: &str,
        command: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, BittrexError> {
        let SignedRequest { url, headers } =
            self.prepare_private_request(group, command, params)?;
        self.execute(url, headers).await
    }
}

/// Collect parameters into a key-sorted map; later duplicates overwrite earlier ones
fn canonical_params(params: &[(&str, &str)]) -> BTreeMap<String, String> {
    params
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Append `params` as an `application/x-www-form-urlencoded` query, in key order
fn with_query(mut url: Url, params: &BTreeMap<String, String>) -> Url {
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Credentials;
    use crate::core::kernel::nonce::FixedNonce;
    use crate::core::kernel::signer::{generate_signature, HmacSha512Signer, SIGNATURE_HEADER};

    fn rest(credentials: Option<Credentials>) -> ReqwestRest {
        let mut builder = RestClientBuilder::new(RestClientConfig::default())
            .with_nonce_provider(Arc::new(FixedNonce(1_234_567_890)));
        if let Some(credentials) = credentials {
            builder = builder.with_signer(Arc::new(HmacSha512Signer::new(credentials)));
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = RestClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = RestClientBuilder::new(RestClientConfig::new("not a url".to_string())).build();
        assert!(matches!(result, Err(BittrexError::ConfigError(_))));
    }

    #[test]
    fn test_public_url_without_params() {
        let url = rest(None)
            .prepare_public_url("markets", "GetMarketSummaries", &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://bittrex.com/Api/v2.0/pub/markets/GetMarketSummaries"
        );
    }

    #[test]
    fn test_public_url_sorted_and_last_write_wins() {
        let url = rest(None)
            .prepare_public_url(
                "market",
                "GetTicks",
                &[
                    ("tickInterval", "day"),
                    ("marketName", "BTC-LTC"),
                    ("tickInterval", "hour"),
                ],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://bittrex.com/Api/v2.0/pub/market/GetTicks?marketName=BTC-LTC&tickInterval=hour"
        );
    }

    #[test]
    fn test_query_values_are_form_encoded() {
        let url = rest(None)
            .prepare_public_url("market", "GetTicks", &[("marketName", "a b&c=d")])
            .unwrap();
        assert_eq!(url.query(), Some("marketName=a+b%26c%3Dd"));
    }

    #[test]
    fn test_private_request_shape_and_signature() {
        let rest = rest(Some(Credentials::new("my_key", "my_secret")));
        let signed = rest
            .prepare_private_request(
                "balance",
                "GetBalance",
                &[("currencyName", "BTC"), ("_", "99")],
            )
            .unwrap();

        assert_eq!(
            signed.url.as_str(),
            "https://bittrex.com/Api/v2.0/key/balance/GetBalance?_=99&apikey=my_key&currencyName=BTC&nonce=1234567890"
        );

        let expected = generate_signature("my_secret", signed.url.as_str()).unwrap();
        assert_eq!(signed.headers.get(SIGNATURE_HEADER), Some(&expected));
        assert_eq!(signed.headers.len(), 1);
    }

    #[test]
    fn test_private_request_is_reproducible_with_fixed_nonce() {
        let rest = rest(Some(Credentials::new("my_key", "my_secret")));
        let params = [("marketName", "BTC-LTC")];
        let first = rest
            .prepare_private_request("market", "GetOpenOrders", &params)
            .unwrap();
        let second = rest
            .prepare_private_request("market", "GetOpenOrders", &params)
            .unwrap();
        assert_eq!(first.url, second.url);
        assert_eq!(first.headers, second.headers);
    }

    #[test]
    fn test_injected_params_override_caller_values() {
        let rest = rest(Some(Credentials::new("my_key", "my_secret")));
        let signed = rest
            .prepare_private_request("balance", "GetBalances", &[("apikey", "x"), ("nonce", "1")])
            .unwrap();

        let pairs: Vec<(String, String)> = signed.url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("apikey".to_string(), "my_key".to_string()),
                ("nonce".to_string(), "1234567890".to_string()),
            ]
        );
    }

    #[test]
    fn test_signed_request_debug_has_no_secret() {
        let rest = rest(Some(Credentials::new("my_key", "my_secret")));
        let signed = rest
            .prepare_private_request("balance", "GetBalances", &[])
            .unwrap();
        let debug = format!("{:?}", signed);
        assert!(debug.contains(SIGNATURE_HEADER));
        assert!(!debug.contains("my_secret"));
    }

    #[test]
    fn test_private_request_without_signer() {
        let err = rest(None)
            .prepare_private_request("balance", "GetBalances", &[])
            .unwrap_err();
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_private_request_with_empty_credentials() {
        let err = rest(Some(Credentials::new("", "secret")))
            .prepare_private_request("balance", "GetBalances", &[])
            .unwrap_err();
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let rest = RestClientBuilder::new(RestClientConfig::new(format!("{}/", BASE_URL)))
            .build()
            .unwrap();
        let url = rest
            .prepare_public_url("currencies", "GetCurrencies", &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://bittrex.com/Api/v2.0/pub/currencies/GetCurrencies"
        );
    }

    #[test]
    fn test_debug_does_not_leak_signer() {
        let rest = rest(Some(Credentials::new("my_key", "my_secret")));
        let debug = format!("{:?}", rest);
        assert!(debug.contains("has_signer: true"));
        assert!(!debug.contains("my_secret"));
    }
}
