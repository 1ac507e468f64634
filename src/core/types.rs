use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },
}

/// Generates the wire-string conversions shared by every API enum
macro_rules! wire_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// The exact string the API expects
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(TypesError::InvalidValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "LIMIT")]
    Limit,
    #[serde(rename = "MARKET")]
    Market,
}

wire_enum!(OrderType, "order type", {
    Limit => "LIMIT",
    Market => "MARKET",
});

/// Time in force, sent as `timeInEffect`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    #[serde(rename = "GOOD_TIL_CANCELLED")]
    GoodTilCancelled,
    #[serde(rename = "IMMEDIATE_OR_CANCEL")]
    ImmediateOrCancel,
    #[serde(rename = "FILL_OR_KILL")]
    FillOrKill,
}

wire_enum!(TimeInForce, "time in force", {
    GoodTilCancelled => "GOOD_TIL_CANCELLED",
    ImmediateOrCancel => "IMMEDIATE_OR_CANCEL",
    FillOrKill => "FILL_OR_KILL",
});

/// Conditional order trigger; `LessThan`/`GreaterThan` compare against `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionType {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "LESS_THAN")]
    LessThan,
    #[serde(rename = "GREATER_THAN")]
    GreaterThan,
}

wire_enum!(ConditionType, "condition type", {
    None => "NONE",
    LessThan => "LESS_THAN",
    GreaterThan => "GREATER_THAN",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickInterval {
    #[serde(rename = "oneMin")]
    OneMin,
    #[serde(rename = "fiveMin")]
    FiveMin,
    #[serde(rename = "thirtyMin")]
    ThirtyMin,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "day")]
    Day,
}

wire_enum!(TickInterval, "tick interval", {
    OneMin => "oneMin",
    FiveMin => "fiveMin",
    ThirtyMin => "thirtyMin",
    Hour => "hour",
    Day => "day",
});

/// Format a float as a query parameter value.
///
/// Uses the shortest representation that parses back to the same `f64` and
/// never switches to exponent notation, so `1e-8` becomes `"0.00000001"`.
pub fn format_float(value: f64) -> String {
    format!("{}", value)
}

/// Parameters of a `TradeBuy`/`TradeSell` call
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRequest {
    pub market_name: String,
    pub order_type: OrderType,
    pub quantity: f64,
    pub rate: f64,
    pub time_in_force: TimeInForce,
    pub condition_type: ConditionType,
    pub target: f64,
}

impl TradeRequest {
    /// Good-til-cancelled limit order without a condition
    pub fn limit(market_name: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            market_name: market_name.into(),
            order_type: OrderType::Limit,
            quantity,
            rate,
            time_in_force: TimeInForce::GoodTilCancelled,
            condition_type: ConditionType::None,
            target: 0.0,
        }
    }

    /// Immediate-or-cancel market order; `rate` bounds the fill price
    pub fn market(market_name: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            order_type: OrderType::Market,
            time_in_force: TimeInForce::ImmediateOrCancel,
            ..Self::limit(market_name, quantity, rate)
        }
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = time_in_force;
        self
    }

    /// Only place the order once the last price crosses `target`
    pub fn with_condition(mut self, condition_type: ConditionType, target: f64) -> Self {
        self.condition_type = condition_type;
        self.target = target;
        self
    }

    /// Query parameters in the API's naming
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("marketName", self.market_name.clone()),
            ("orderType", self.order_type.as_str().to_string()),
            ("quantity", format_float(self.quantity)),
            ("rate", format_float(self.rate)),
            ("timeInEffect", self.time_in_force.as_str().to_string()),
            ("conditionType", self.condition_type.as_str().to_string()),
            ("target", format_float(self.target)),
        ]
    }
}

/// Order acknowledgement returned by `TradeBuy`/`TradeSell`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub order_id: String,
    pub market_name: String,
    #[serde(default)]
    pub market_currency: Option<String>,
    #[serde(default)]
    pub buy_or_sell: Option<String>,
    pub order_type: String,
    pub quantity: Decimal,
    pub rate: Decimal,
}

/// Open or single order as returned by `GetOpenOrders` and `GetOrder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    pub order_uuid: String,
    pub exchange: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
    #[serde(default)]
    pub commission_paid: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    pub opened: String,
    #[serde(default)]
    pub closed: Option<String>,
    #[serde(default)]
    pub cancel_initiated: bool,
    #[serde(default)]
    pub immediate_or_cancel: bool,
    #[serde(default)]
    pub is_conditional: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

/// Filled or cancelled order from `GetOrderHistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderHistoryEntry {
    pub order_uuid: String,
    pub exchange: String,
    pub time_stamp: String,
    pub order_type: String,
    pub limit: Decimal,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    #[serde(default)]
    pub commission: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    #[serde(default)]
    pub is_conditional: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_target: Option<Decimal>,
    #[serde(default)]
    pub immediate_or_cancel: bool,
    #[serde(default)]
    pub closed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency: String,
    pub balance: Decimal,
    pub available: Decimal,
    pub pending: Decimal,
    #[serde(default)]
    pub crypto_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    pub currency: String,
    pub address: String,
}
