use crate::core::errors::BittrexError;
use crate::core::kernel::nonce::unix_nanos;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer};
use crate::core::types::{
    Balance, DepositAddress, OpenOrder, Order, OrderHistoryEntry, TickInterval, TradeRequest,
};
use async_trait::async_trait;
use serde_json::Value;

pub mod account;
pub mod market_data;
pub mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use trading::Trading;

/// Bittrex connector that composes all sub-trait implementations
pub struct BittrexConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub trading: Trading<R>,
    pub account: Account<R>,
}

impl<R: RestClient + Clone> BittrexConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            market: MarketData::new(rest.clone()),
            trading: Trading::new(rest.clone()),
            account: Account::new(rest),
        }
    }
}

/// Value for the `_` query parameter private calls carry to defeat caches
pub(crate) fn cache_buster() -> String {
    unix_nanos().to_string()
}

pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<(), BittrexError> {
    if value.trim().is_empty() {
        return Err(BittrexError::InvalidParameters(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(())
}

/// Rejects NaN and infinities, which have no decimal wire form
pub(crate) fn require_finite(name: &str, value: f64) -> Result<(), BittrexError> {
    if !value.is_finite() {
        return Err(BittrexError::InvalidParameters(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

// Implement traits for the connector by delegating to sub-components
#[async_trait]
impl<R: RestClient> MarketDataSource for BittrexConnector<R> {
    async fn get_markets(&self) -> Result<Value, BittrexError> {
        self.market.get_markets().await
    }

    async fn get_currencies(&self) -> Result<Value, BittrexError> {
        self.market.get_currencies().await
    }

    async fn get_market_summaries(&self) -> Result<Value, BittrexError> {
        self.market.get_market_summaries().await
    }

    async fn get_market_summary(&self, market_name: &str) -> Result<Value, BittrexError> {
        self.market.get_market_summary(market_name).await
    }

    async fn get_market_order_book(&self, market_name: &str) -> Result<Value, BittrexError> {
        self.market.get_market_order_book(market_name).await
    }

    async fn get_ticks(
        &self,
        market_name: &str,
        interval: TickInterval,
    ) -> Result<Value, BittrexError> {
        self.market.get_ticks(market_name, interval).await
    }

    async fn get_latest_tick(
        &self,
        market_name: &str,
        interval: TickInterval,
    ) -> Result<Value, BittrexError> {
        self.market.get_latest_tick(market_name, interval).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for BittrexConnector<R> {
    async fn trade_sell(&self, request: &TradeRequest) -> Result<Order, BittrexError> {
        self.trading.trade_sell(request).await
    }

    async fn trade_buy(&self, request: &TradeRequest) -> Result<Order, BittrexError> {
        self.trading.trade_buy(request).await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value, BittrexError> {
        self.trading.cancel_order(order_id).await
    }

    async fn get_open_orders(
        &self,
        market_name: Option<&str>,
    ) -> Result<Vec<OpenOrder>, BittrexError> {
        self.trading.get_open_orders(market_name).await
    }

    async fn get_order(&self, order_id: &str) -> Result<OpenOrder, BittrexError> {
        self.trading.get_order(order_id).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for BittrexConnector<R> {
    async fn get_balance(&self, currency_name: &str) -> Result<Value, BittrexError> {
        self.account.get_balance(currency_name).await
    }

    async fn get_balances(&self) -> Result<Vec<Balance>, BittrexError> {
        self.account.get_balances().await
    }

    async fn get_deposit_address(
        &self,
        currency_name: &str,
    ) -> Result<DepositAddress, BittrexError> {
        self.account.get_deposit_address(currency_name).await
    }

    async fn get_order_history(
        &self,
        market_name: Option<&str>,
    ) -> Result<Vec<OrderHistoryEntry>, BittrexError> {
        self.account.get_order_history(market_name).await
    }
}

impl<R: RestClient> ExchangeConnector for BittrexConnector<R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("marketName", "BTC-LTC").is_ok());
        let err = require_non_empty("marketName", "  ").unwrap_err();
        assert!(matches!(err, BittrexError::InvalidParameters(ref m) if m.contains("marketName")));
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("quantity", 0.000_000_01).is_ok());
        assert!(require_finite("target", 0.0).is_ok());
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = require_finite("rate", value).unwrap_err();
            assert!(matches!(err, BittrexError::InvalidParameters(ref m) if m.contains("rate")));
        }
    }

    #[test]
    fn test_cache_buster_is_numeric() {
        assert!(cache_buster().parse::<u64>().is_ok());
    }
}
