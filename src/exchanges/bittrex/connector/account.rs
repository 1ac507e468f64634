use super::{cache_buster, require_non_empty};
use crate::core::errors::BittrexError;
use crate::core::kernel::RestClient;
use crate::core::traits::AccountInfo;
use crate::core::types::{Balance, DepositAddress, OrderHistoryEntry};
use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

/// Balance and account history endpoints
pub struct Account<R: RestClient> {
    rest: R,
}

impl<R: RestClient> Account<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for Account<R> {
    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_balance(&self, currency_name: &str) -> Result<Value, BittrexError> {
        require_non_empty("currencyName", currency_name)?;

        let cache_buster = cache_buster();
        self.rest
            .private_call(
                "balance",
                "GetBalance",
                &[("currencyName", currency_name), ("_", cache_buster.as_str())],
            )
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_balances(&self) -> Result<Vec<Balance>, BittrexError> {
        let cache_buster = cache_buster();
        self.rest
            .private_call_json("balance", "GetBalances", &[("_", cache_buster.as_str())])
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_deposit_address(
        &self,
        currency_name: &str,
    ) -> Result<DepositAddress, BittrexError> {
        require_non_empty("currencyName", currency_name)?;

        let cache_buster = cache_buster();
        self.rest
            .private_call_json(
                "balance",
                "GetDepositAddress",
                &[("currencyName", currency_name), ("_", cache_buster.as_str())],
            )
            .await
    }

    #[instrument(skip(self), fields(exchange = "bittrex"))]
    async fn get_order_history(
        &self,
        market_name: Option<&str>,
    ) -> Result<Vec<OrderHistoryEntry>, BittrexError> {
        let cache_buster = cache_buster();
        let mut params = vec![("_", cache_buster.as_str())];
        if let Some(market_name) = market_name {
            require_non_empty("marketName", market_name)?;
            params.push(("marketName", market_name));
        }

        self.rest
            .private_call_json("orders", "GetOrderHistory", &params)
            .await
    }
}
