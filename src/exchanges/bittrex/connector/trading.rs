use super::{cache_buster, require_finite, require_non_empty};
use crate::core::errors::BittrexError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderPlacer;
use crate::core::types::{OpenOrder, Order, TradeRequest};
use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

/// Order placement and order lookup endpoints
pub struct Trading<R: RestClient> {
    rest: R,
}

impl<R: RestClient> Trading<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    async fn place(&self, command: &str, request: &TradeRequest) -> Result<Order, BittrexError> {
        require_non_empty("marketName", &request.market_name)?;
        require_finite("quantity", request.quantity)?;
        require_finite("rate", request.rate)?;
        require_finite("target", request.target)?;

        let fields = request.to_params();
        let cache_buster = cache_buster();
        let mut params: Vec<(&str, &str)> = fields
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
            .collect();
        params.push(("_", cache_buster.as_str()));

        self.rest
            .private_call_json("market", command, &params)
            .await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for Trading<R> {
    #[instrument(skip(self, request), fields(exchange = "bittrex", market = %request.market_name, order_type = %request.order_type))]
    async fn trade_sell(&self, request: &TradeRequest) -> Result<Order, BittrexError> {
        self.place("TradeSell", request).await
    }

    #[instrument(skip(self, request), fields(exchange = "bittrex", market = %request.market_name, order_type = %request.order_type))]
    async fn trade_buy(&self, request: &TradeRequest) -> Result<Order, BittrexError> {
        self.place("TradeBuy", request).await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn cancel_order(&self, order_id: &str) -> Result<Value, BittrexError> {
        require_non_empty("orderId", order_id)?;

        let cache_buster = cache_buster();
        self.rest
            .private_call(
                "market",
                "TradeCancel",
                &[("orderId", order_id), ("_", cache_buster.as_str())],
            )
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_open_orders(
        &self,
        market_name: Option<&str>,
    ) -> Result<Vec<OpenOrder>, BittrexError> {
        let cache_buster = cache_buster();
        let mut params = vec![("_", cache_buster.as_str())];
        if let Some(market_name) = market_name {
            require_non_empty("marketName", market_name)?;
            params.push(("marketName", market_name));
        }

        self.rest
            .private_call_json("market", "GetOpenOrders", &params)
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_order(&self, order_id: &str) -> Result<OpenOrder, BittrexError> {
        require_non_empty("orderId", order_id)?;

        let cache_buster = cache_buster();
        self.rest
            .private_call_json(
                "orders",
                "GetOrder",
                &[("orderId", order_id), ("_", cache_buster.as_str())],
            )
            .await
    }
}
