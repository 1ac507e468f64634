use crate::core::config::Credentials;
use crate::core::errors::BittrexError;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::collections::HashMap;
use url::Url;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "apisign";

/// Signer trait for request authentication
///
/// Signing is two-phase because the signature covers the final URL: the
/// transport first merges [`Signer::auth_params`] into the query, serializes
/// the URL, then asks [`Signer::sign_request`] for headers over that exact URL.
pub trait Signer: Send + Sync {
    /// Query parameters identifying the caller for this request
    ///
    /// # Arguments
    /// * `nonce` - Fresh per-request nonce
    fn auth_params(&self, nonce: u64) -> Result<Vec<(String, String)>, BittrexError>;

    /// Headers to attach, computed over the fully serialized request URL
    fn sign_request(&self, url: &Url) -> Result<HashMap<String, String>, BittrexError>;
}

/// HMAC-SHA512 signer keyed with the API secret
pub struct HmacSha512Signer {
    credentials: Credentials,
}

impl HmacSha512Signer {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    fn ensure_credentials(&self) -> Result<(), BittrexError> {
        if self.credentials.has_credentials() {
            Ok(())
        } else {
            Err(BittrexError::AuthError(
                "Cannot perform private api request without authentication keys".to_string(),
            ))
        }
    }
}

impl std::fmt::Debug for HmacSha512Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha512Signer").finish_non_exhaustive()
    }
}

impl Signer for HmacSha512Signer {
    fn auth_params(&self, nonce: u64) -> Result<Vec<(String, String)>, BittrexError> {
        self.ensure_credentials()?;

        Ok(vec![
            ("apikey".to_string(), self.credentials.api_key().to_string()),
            ("nonce".to_string(), nonce.to_string()),
        ])
    }

    fn sign_request(&self, url: &Url) -> Result<HashMap<String, String>, BittrexError> {
        self.ensure_credentials()?;

        let signature = generate_signature(self.credentials.api_secret(), url.as_str())?;

        let mut headers = HashMap::new();
        headers.insert(SIGNATURE_HEADER.to_string(), signature);
        Ok(headers)
    }
}

/// Hex-encoded HMAC-SHA512 of `message` keyed with `secret`
pub fn generate_signature(secret: &str, message: &str) -> Result<String, BittrexError> {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .map_err(|e| BittrexError::AuthError(format!("Invalid secret key: {}", e)))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
