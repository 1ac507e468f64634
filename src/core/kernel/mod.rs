/// Transport kernel for the Bittrex v2.0 API
///
/// Everything that is the same for every endpoint lives here: building the
/// `pub`/`key` request URLs, signing private requests, sending the GET and
/// unwrapping the response envelope. Endpoint modules only marshal parameters
/// and pick a result type.
///
/// # Components
///
/// - `RestClient` / `ReqwestRest`: public and private call builders over reqwest
/// - `Signer` / `HmacSha512Signer`: `apikey` + `nonce` injection and the
///   `apisign` header
/// - `NonceProvider` / `IncreasingNonce`: per-request nonces
/// - `decode_envelope`: `{success, message, result}` handling
///
/// # Example
/// ```rust,no_run
/// use bittrex::core::config::Credentials;
/// use bittrex::core::kernel::*;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), bittrex::BittrexError> {
/// let signer = Arc::new(HmacSha512Signer::new(Credentials::new("key", "secret")));
/// let rest = RestClientBuilder::new(RestClientConfig::default())
///     .with_signer(signer)
///     .build()?;
///
/// let summaries = rest.public_call("markets", "GetMarketSummaries", &[]).await?;
/// let balance = rest
///     .private_call("balance", "GetBalance", &[("currencyName", "BTC")])
///     .await?;
/// # let _ = (summaries, balance);
/// # Ok(())
/// # }
/// ```
pub mod envelope;
pub mod nonce;
pub mod rest;
pub mod signer;

pub use envelope::{decode_envelope, decode_result, Envelope};
pub use nonce::{FixedNonce, IncreasingNonce, NonceProvider};
pub use rest::{
    ReqwestRest, RestClient, RestClientBuilder, RestClientConfig, SignedRequest, BASE_URL,
};
pub use signer::{HmacSha512Signer, Signer, SIGNATURE_HEADER};
