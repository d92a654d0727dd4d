//! HTTP client for the credits API.
//!
//! Sibling billing services call the credits server over HTTP; this module
//! gives them a typed client covering the same five operations the server
//! exposes, so they never hand-build requests or parse error envelopes
//! themselves.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::models::{
    customer::BalanceResponse,
    transaction::{
        AdjustResponse, ConvertCurrencyRequest, ConvertCurrencyResponse, Transaction,
        UnitPriceRequest, UnitPriceResponse,
    },
};

/// Errors returned by the credits client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL could not be joined with an endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with an error envelope.
    #[error("api error ({status}): {code}: {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },
}

/// The `{"error": {code, message}}` envelope the server wraps failures in.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Typed HTTP client for the credits API.
#[derive(Debug, Clone)]
pub struct CreditsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CreditsClient {
    /// Create a client against the given base URL (e.g. `http://credits:3000/`).
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the stored balance for a (handle, application) pair.
    pub async fn get_balance(
        &self,
        handle: &str,
        application: &str,
    ) -> Result<BalanceResponse, ClientError> {
        let url = self.base_url.join("credits")?;
        let response = self
            .http
            .get(url)
            .query(&[("handle", handle), ("application", application)])
            .send()
            .await?;

        decode(response).await
    }

    /// Add credits to a customer's balance from a paid amount.
    pub async fn increase_credits(
        &self,
        transaction: &Transaction,
    ) -> Result<AdjustResponse, ClientError> {
        self.post("credits/increase", transaction).await
    }

    /// Remove credits from a customer's balance from a charged amount.
    pub async fn decrease_credits(
        &self,
        transaction: &Transaction,
    ) -> Result<AdjustResponse, ClientError> {
        self.post("credits/decrease", transaction).await
    }

    /// Convert a currency amount into credits without touching any balance.
    pub async fn convert_currency(
        &self,
        request: &ConvertCurrencyRequest,
    ) -> Result<ConvertCurrencyResponse, ClientError> {
        self.post("credits/convert", request).await
    }

    /// Fetch the price of a single credit.
    pub async fn get_unit_price(
        &self,
        request: &UnitPriceRequest,
    ) -> Result<UnitPriceResponse, ClientError> {
        self.post("credits/unit_price", request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        let response = self.http.post(url).json(body).send().await?;

        decode(response).await
    }
}

/// Decode a success body, or turn an error envelope into `ClientError::Api`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    // Non-2xx: the server sends the JSON error envelope; fall back to the
    // status text when the body is not one (e.g. a proxy error page).
    match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => Err(ClientError::Api {
            status,
            code: envelope.error.code,
            message: envelope.error.message,
        }),
        Err(_) => Err(ClientError::Api {
            status,
            code: "unknown".to_string(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        }),
    }
}
