//! Shared helpers for the HTTP-level tests

#![allow(dead_code)]

use bittrex::core::config::Credentials;
use bittrex::core::kernel::{FixedNonce, ReqwestRest};
use bittrex::exchanges::bittrex::{BittrexBuilder, BittrexConnector};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::{MockServer, Request, ResponseTemplate};

pub const API_PREFIX: &str = "/Api/v2.0";
pub const TEST_KEY: &str = "test_api_key";
pub const TEST_SECRET: &str = "test_api_secret";
pub const TEST_NONCE: u64 = 1_500_000_000_123_456_789;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn base_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), API_PREFIX)
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_KEY, TEST_SECRET)
}

/// Builder pointed at the mock server with a fixed nonce
pub fn builder(server: &MockServer) -> BittrexBuilder {
    BittrexBuilder::new()
        .with_base_url(base_url(server))
        .with_timeout(5)
        .with_nonce_provider(Arc::new(FixedNonce(TEST_NONCE)))
}

pub fn private_rest(server: &MockServer) -> ReqwestRest {
    builder(server)
        .with_credentials(test_credentials())
        .build_rest()
        .expect("rest client should build")
}

pub fn public_rest(server: &MockServer) -> ReqwestRest {
    builder(server).build_rest().expect("rest client should build")
}

pub fn connector(server: &MockServer) -> BittrexConnector<ReqwestRest> {
    builder(server)
        .with_credentials(test_credentials())
        .build()
        .expect("connector should build")
}

pub fn success(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "",
        "result": result,
    }))
}

pub fn failure(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": false,
        "message": message,
        "result": null,
    }))
}

/// The URL string the client signed, rebuilt from what the server received
pub fn signing_input(server: &MockServer, request: &Request) -> String {
    match request.url.query() {
        Some(query) => format!("{}{}?{}", server.uri(), request.url.path(), query),
        None => format!("{}{}", server.uri(), request.url.path()),
    }
}

pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

pub fn query_keys(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect()
}

pub fn sample_order() -> Value {
    json!({
        "OrderId": "8925d746-bc9f-4684-b1aa-e507467aaa99",
        "MarketName": "BTC-LTC",
        "MarketCurrency": "LTC",
        "BuyOrSell": "Sell",
        "OrderType": "LIMIT",
        "Quantity": 1.5,
        "Rate": 0.25
    })
}

pub fn sample_open_order() -> Value {
    json!({
        "OrderUuid": "09aa5bb6-8232-41aa-9b78-a5a1093e0211",
        "Exchange": "BTC-LTC",
        "OrderType": "LIMIT_SELL",
        "Quantity": 5.0,
        "QuantityRemaining": 5.0,
        "Limit": 2.0,
        "CommissionPaid": 0.0,
        "Price": 0.0,
        "PricePerUnit": null,
        "Opened": "2014-07-09T03:55:48.77",
        "Closed": null,
        "CancelInitiated": false,
        "ImmediateOrCancel": false,
        "IsConditional": false,
        "Condition": null,
        "ConditionTarget": null
    })
}
