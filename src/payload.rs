// ===============================
// src/payload.rs
// ===============================
//
// One struct per private endpoint. Field declaration order is the JSON field
// order and therefore part of what gets signed; `request` and `nonce` always
// lead. Payloads travel in a header, not the request body.

use serde::Serialize;

use crate::domain::{OrderKind, OrderSpec, Side};

/// Fixed client tag attached to every new order.
pub const CLIENT_ORDER_ID: &str = "exchange-cli-v1";

/// Default number of past trades returned when `--limit` is not given.
pub const DEFAULT_TRADE_LIMIT: u32 = 5;

/// A signable request payload bound to its endpoint path.
pub trait ApiPayload: Serialize {
    const ENDPOINT: &'static str;
}

#[derive(Debug, Serialize)]
pub struct ActiveOrders {
    request: &'static str,
    nonce: String,
}

impl ActiveOrders {
    pub fn new(nonce: String) -> Self {
        Self {
            request: Self::ENDPOINT,
            nonce,
        }
    }
}

impl ApiPayload for ActiveOrders {
    const ENDPOINT: &'static str = "/v1/orders";
}

#[derive(Debug, Serialize)]
pub struct NewOrder {
    request: &'static str,
    nonce: String,
    client_order_id: &'static str,
    symbol: String,
    amount: f64,
    price: f64,
    side: Side,
    #[serde(rename = "type")]
    order_type: OrderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<f64>,
}

impl NewOrder {
    pub fn from_spec(nonce: String, spec: &OrderSpec) -> Self {
        Self {
            request: Self::ENDPOINT,
            nonce,
            client_order_id: CLIENT_ORDER_ID,
            symbol: spec.symbol.clone(),
            amount: spec.amount,
            price: spec.price,
            side: spec.side,
            order_type: spec.kind,
            // Stop trigger equals the limit price; the CLI does not model a
            // stop/limit spread.
            stop: spec.is_stop().then_some(spec.price),
        }
    }
}

impl ApiPayload for NewOrder {
    const ENDPOINT: &'static str = "/v1/order/new";
}

#[derive(Debug, Serialize)]
pub struct CancelOrder {
    request: &'static str,
    nonce: String,
    order_id: String,
}

impl CancelOrder {
    pub fn new(nonce: String, order_id: String) -> Self {
        Self {
            request: Self::ENDPOINT,
            nonce,
            order_id,
        }
    }
}

impl ApiPayload for CancelOrder {
    const ENDPOINT: &'static str = "/v1/order/cancel";
}

#[derive(Debug, Serialize)]
pub struct CancelAll {
    request: &'static str,
    nonce: String,
}

impl CancelAll {
    pub fn new(nonce: String) -> Self {
        Self {
            request: Self::ENDPOINT,
            nonce,
        }
    }
}

impl ApiPayload for CancelAll {
    const ENDPOINT: &'static str = "/v1/order/cancel/all";
}

#[derive(Debug, Serialize)]
pub struct PastTrades {
    request: &'static str,
    nonce: String,
    symbol: String,
    limit_trades: u32,
}

impl PastTrades {
    pub fn new(nonce: String, symbol: String, limit_trades: u32) -> Self {
        Self {
            request: Self::ENDPOINT,
            nonce,
            symbol,
            limit_trades,
        }
    }
}

impl ApiPayload for PastTrades {
    const ENDPOINT: &'static str = "/v1/mytrades";
}
