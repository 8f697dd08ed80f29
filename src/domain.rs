// ===============================
// src/domain.rs
// ===============================
use std::fmt;

use serde::Serialize;

use crate::error::CliError;

/// Pairs the CLI will trade; everything else is rejected before any request.
pub const APPROVED_SYMBOLS: [&str; 2] = ["ethusd", "btcusd"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderKind {
    #[serde(rename = "exchange limit")]
    Limit,
    #[serde(rename = "exchange stop limit")]
    StopLimit,
}

/// A validated order request. For stop-limit orders the trigger price equals
/// the limit price; the CLI does not model a stop/limit spread.
#[derive(Debug, Clone)]
pub struct OrderSpec {
    pub symbol: String,
    pub amount: f64,
    pub price: f64,
    pub side: Side,
    pub kind: OrderKind,
}

impl OrderSpec {
    pub fn total(&self) -> f64 {
        self.amount * self.price
    }

    pub fn is_stop(&self) -> bool {
        self.kind == OrderKind::StopLimit
    }
}

/// What to cancel: one order by id, or every open order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelTarget {
    ById(String),
    All,
}

impl CancelTarget {
    /// Exactly one of `order_id` / `all` must be supplied.
    pub fn from_args(order_id: Option<String>, all: bool) -> Result<Self, CliError> {
        match (order_id, all) {
            (Some(id), false) => Ok(CancelTarget::ById(id)),
            (None, true) => Ok(CancelTarget::All),
            (Some(_), true) => Err(CliError::Validation(
                "pass either an order id or --all, not both".to_string(),
            )),
            (None, false) => Err(CliError::Validation(
                "pass an order id or --all".to_string(),
            )),
        }
    }
}

pub fn validate_symbol(symbol: &str) -> Result<(), CliError> {
    if APPROVED_SYMBOLS.contains(&symbol) {
        Ok(())
    } else {
        Err(CliError::Validation(format!(
            "symbol {symbol} is not approved (allowed: {})",
            APPROVED_SYMBOLS.join(", ")
        )))
    }
}
