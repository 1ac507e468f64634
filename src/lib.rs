//! Async client for the Bittrex v2.0 REST API.
//!
//! Public endpoints are plain GETs under `/pub/`; private endpoints live under
//! `/key/`, carry `apikey` and `nonce` query parameters and an `apisign`
//! header holding the hex HMAC-SHA512 of the full request URL. Every response
//! is a `{success, message, result}` envelope which is unwrapped into either
//! the result payload or a [`BittrexError`].
//!
//! ```rust,no_run
//! use bittrex::{BittrexBuilder, Credentials, OrderPlacer, TradeRequest};
//!
//! # async fn example() -> Result<(), bittrex::BittrexError> {
//! let connector = BittrexBuilder::new()
//!     .with_credentials(Credentials::new("api_key", "api_secret"))
//!     .with_timeout(10)
//!     .build()?;
//!
//! let order = connector
//!     .trade_sell(&TradeRequest::limit("BTC-LTC", 1.0, 0.0125))
//!     .await?;
//! println!("placed {}", order.order_id);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::Credentials,
    errors::{BittrexError, Result},
    traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer},
    types::*,
};
pub use exchanges::bittrex::{BittrexBuilder, BittrexConnector};
