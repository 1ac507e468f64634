use crate::core::errors::BittrexError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// The `{success, message, result}` wrapper around every response
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Value,
}

impl Envelope {
    /// Unwrap into the result payload, or an `ApiError` carrying the message
    pub fn into_result(self) -> Result<Value, BittrexError> {
        if self.success {
            Ok(self.result)
        } else {
            Err(BittrexError::api_error(self.message.unwrap_or_default()))
        }
    }
}

/// Decode the body of a 200 response into its result payload.
///
/// The HTTP status is checked by the transport before the body is read.
pub fn decode_envelope(body: &[u8]) -> Result<Value, BittrexError> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(BittrexError::DecodeError)?;
    envelope.into_result()
}

/// Deserialize a raw result payload into a typed record
pub fn decode_result<T: DeserializeOwned>(result: Value) -> Result<T, BittrexError> {
    serde_json::from_value(result).map_err(BittrexError::DeserializationError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_result() {
        let body = br#"{"success":true,"message":"","result":{"a":1}}"#;
        let result = decode_envelope(body).unwrap();
        assert_eq!(result, json!({"a": 1}));
    }

    #[test]
    fn test_failure_returns_api_error() {
        let body = br#"{"success":false,"message":"INVALID_MARKET"}"#;
        let err = decode_envelope(body).unwrap_err();
        assert_eq!(err.api_message(), Some("INVALID_MARKET"));
    }

    #[test]
    fn test_failure_with_null_message() {
        let body = br#"{"success":false,"message":null,"result":null}"#;
        let err = decode_envelope(body).unwrap_err();
        assert_eq!(err.api_message(), Some(""));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let err = decode_envelope(b"{\"success\":").unwrap_err();
        assert!(matches!(err, BittrexError::DecodeError(_)));

        let err = decode_envelope(br#"{"message":"no flag"}"#).unwrap_err();
        assert!(matches!(err, BittrexError::DecodeError(_)));
    }

    #[test]
    fn test_success_without_result_is_null() {
        let result = decode_envelope(br#"{"success":true}"#).unwrap();
        assert!(result.is_null());
    }

    #[test]
    fn test_decode_result_shape_mismatch() {
        #[derive(Debug, Deserialize)]
        struct Typed {
            a: u32,
        }

        let typed: Typed = decode_result(json!({"a": 7})).unwrap();
        assert_eq!(typed.a, 7);

        let err = decode_result::<Typed>(json!({"a": "seven"})).unwrap_err();
        assert!(matches!(err, BittrexError::DeserializationError(_)));
    }
}
