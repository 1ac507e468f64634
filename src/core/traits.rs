use crate::core::{
    errors::BittrexError,
    types::{Balance, DepositAddress, OpenOrder, Order, OrderHistoryEntry, TickInterval, TradeRequest},
};
use async_trait::async_trait;
use serde_json::Value;

/// Public market data. Results are passed through as raw JSON.
#[async_trait]
pub trait MarketDataSource {
    /// All markets listed on the exchange
    async fn get_markets(&self) -> Result<Value, BittrexError>;

    async fn get_currencies(&self) -> Result<Value, BittrexError>;

    /// 24h summaries for every market
    async fn get_market_summaries(&self) -> Result<Value, BittrexError>;

    async fn get_market_summary(&self, market_name: &str) -> Result<Value, BittrexError>;

    /// Both sides of the book for one market
    async fn get_market_order_book(&self, market_name: &str) -> Result<Value, BittrexError>;

    /// Candles for one market at the given interval
    async fn get_ticks(
        &self,
        market_name: &str,
        interval: TickInterval,
    ) -> Result<Value, BittrexError>;

    async fn get_latest_tick(
        &self,
        market_name: &str,
        interval: TickInterval,
    ) -> Result<Value, BittrexError>;
}

#[async_trait]
pub trait OrderPlacer {
    async fn trade_sell(&self, request: &TradeRequest) -> Result<Order, BittrexError>;

    async fn trade_buy(&self, request: &TradeRequest) -> Result<Order, BittrexError>;

    /// Cancel an open order by id
    async fn cancel_order(&self, order_id: &str) -> Result<Value, BittrexError>;

    /// Open orders, optionally restricted to one market
    async fn get_open_orders(&self, market_name: Option<&str>)
        -> Result<Vec<OpenOrder>, BittrexError>;

    async fn get_order(&self, order_id: &str) -> Result<OpenOrder, BittrexError>;
}

#[async_trait]
pub trait AccountInfo {
    /// Balance of a single currency, as raw JSON
    async fn get_balance(&self, currency_name: &str) -> Result<Value, BittrexError>;

    async fn get_balances(&self) -> Result<Vec<Balance>, BittrexError>;

    async fn get_deposit_address(&self, currency_name: &str)
        -> Result<DepositAddress, BittrexError>;

    /// Closed orders, optionally restricted to one market
    async fn get_order_history(
        &self,
        market_name: Option<&str>,
    ) -> Result<Vec<OrderHistoryEntry>, BittrexError>;
}

// Composite trait for callers that need the whole API surface
#[async_trait]
pub trait ExchangeConnector: MarketDataSource + OrderPlacer + AccountInfo {}
