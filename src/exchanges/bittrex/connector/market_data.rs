use super::require_non_empty;
use crate::core::errors::BittrexError;
use crate::core::kernel::RestClient;
use crate::core::traits::MarketDataSource;
use crate::core::types::TickInterval;
use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

/// Public market data endpoints
pub struct MarketData<R: RestClient> {
    rest: R,
}

impl<R: RestClient> MarketData<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    async fn market_call(
        &self,
        command: &str,
        market_name: &str,
        extra: &[(&str, &str)],
    ) -> Result<Value, BittrexError> {
        require_non_empty("marketName", market_name)?;

        let mut params = vec![("marketName", market_name)];
        params.extend_from_slice(extra);
        self.rest.public_call("market", command, &params).await
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_markets(&self) -> Result<Value, BittrexError> {
        self.rest.public_call("markets", "GetMarkets", &[]).await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_currencies(&self) -> Result<Value, BittrexError> {
        self.rest
            .public_call("currencies", "GetCurrencies", &[])
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_market_summaries(&self) -> Result<Value, BittrexError> {
        self.rest
            .public_call("markets", "GetMarketSummaries", &[])
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_market_summary(&self, market_name: &str) -> Result<Value, BittrexError> {
        self.market_call("GetMarketSummary", market_name, &[]).await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_market_order_book(&self, market_name: &str) -> Result<Value, BittrexError> {
        self.market_call("GetMarketOrderBook", market_name, &[("type", "both")])
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_ticks(
        &self,
        market_name: &str,
        interval: TickInterval,
    ) -> Result<Value, BittrexError> {
        self.market_call(
            "GetTicks",
            market_name,
            &[("tickInterval", interval.as_str())],
        )
        .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_latest_tick(
        &self,
        market_name: &str,
        interval: TickInterval,
    ) -> Result<Value, BittrexError> {
        self.market_call(
            "GetLatestTick",
            market_name,
            &[("tickInterval", interval.as_str())],
        )
        .await
    }
}
