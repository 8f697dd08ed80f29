// ===============================
// src/client.rs
// ===============================
use reqwest::Client;

use crate::config::{Credentials, Settings};
use crate::domain::{CancelTarget, OrderSpec};
use crate::error::CliError;
use crate::payload::{ActiveOrders, ApiPayload, CancelAll, CancelOrder, NewOrder, PastTrades};
use crate::signer;

/// One-shot client for the exchange's private REST API. Every method signs a
/// payload, issues a single POST, and returns the raw response body.
pub struct ExchangeClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ExchangeClient {
    pub fn new(credentials: Credentials, settings: &Settings) -> Result<Self, CliError> {
        let http = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self {
            http,
            base_url: settings.api_url.clone(),
            credentials,
        })
    }

    pub async fn active_orders(&self) -> Result<String, CliError> {
        self.post(&ActiveOrders::new(signer::next_nonce())).await
    }

    pub async fn new_order(&self, spec: &OrderSpec) -> Result<String, CliError> {
        self.post(&NewOrder::from_spec(signer::next_nonce(), spec))
            .await
    }

    pub async fn cancel(&self, target: &CancelTarget) -> Result<String, CliError> {
        match target {
            CancelTarget::ById(id) => {
                self.post(&CancelOrder::new(signer::next_nonce(), id.clone()))
                    .await
            }
            CancelTarget::All => self.post(&CancelAll::new(signer::next_nonce())).await,
        }
    }

    pub async fn past_trades(&self, symbol: &str, limit: u32) -> Result<String, CliError> {
        self.post(&PastTrades::new(
            signer::next_nonce(),
            symbol.to_string(),
            limit,
        ))
        .await
    }

    /// The payload travels base64-encoded in a header; the POST body is empty.
    async fn post<P: ApiPayload>(&self, payload: &P) -> Result<String, CliError> {
        let signed = signer::sign(self.credentials.api_secret(), payload)?;
        let url = format!("{}{}", self.base_url, P::ENDPOINT);

        tracing::debug!(%url, "sending signed request");
        let rsp = self
            .http
            .post(&url)
            .header("Content-Type", "text/plain")
            .header("Content-Length", "0")
            .header("X-EXCHANGE-APIKEY", self.credentials.api_key())
            .header("X-EXCHANGE-PAYLOAD", &signed.b64)
            .header("X-EXCHANGE-SIGNATURE", &signed.signature)
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        let status = rsp.status();
        let body = rsp.text().await?;
        if !status.is_success() {
            tracing::warn!(%status, "exchange returned an error status");
            return Err(CliError::Exchange(body));
        }
        Ok(body)
    }
}
