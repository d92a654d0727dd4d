//! Credit management HTTP handlers.
//!
//! This module implements the credit-related API endpoints:
//! - GET /credits - Look up a customer's balance
//! - POST /credits/increase - Add credits from a paid amount
//! - POST /credits/decrease - Remove credits from a charged amount
//! - POST /credits/convert - Convert a currency amount into credits
//! - POST /credits/unit_price - Report the price of one credit

use crate::{
    error::AppError,
    models::{
        customer::{BalanceQuery, BalanceResponse},
        transaction::{
            AdjustResponse, ConvertCurrencyRequest, ConvertCurrencyResponse, Transaction,
            UnitPriceRequest, UnitPriceResponse,
        },
    },
    services::credit_service::CreditService,
};
use axum::{
    Json,
    extract::{Query, State},
};

/// Look up a customer's balance.
///
/// # Endpoint
///
/// `GET /credits?handle=test1&application=fuel`
///
/// # Response
///
/// - **Success (200 OK)**: Returns the stored balance
/// - **Error (400)**: Handle or application missing
/// - **Error (404)**: No record for the (handle, application) pair
///
/// ```json
/// {
///   "handle": "test1",
///   "application": "fuel",
///   "credits": 100
/// }
/// ```
pub async fn get_balance(
    State(service): State<CreditService>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = service
        .get_balance(&query.handle, &query.application)
        .await?;

    Ok(Json(balance))
}

/// Increase a customer's balance from a paid currency amount.
///
/// # Endpoint
///
/// `POST /credits/increase`
///
/// # Request Body
///
/// ```json
/// {
///   "handle": "test1",
///   "amount": 200,
///   "currency": "usd",
///   "application": "fuel"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{}` — the adjustment was applied
/// - **Error (400)**: Transaction failed validation
/// - **Error (404)**: No record for the (handle, application) pair;
///   the operation never creates one
pub async fn increase_credits(
    State(service): State<CreditService>,
    Json(transaction): Json<Transaction>,
) -> Result<Json<AdjustResponse>, AppError> {
    service.increase_credits(transaction).await?;

    Ok(Json(AdjustResponse {}))
}

/// Decrease a customer's balance from a charged currency amount.
///
/// # Endpoint
///
/// `POST /credits/decrease`
///
/// Same request and response shapes as the increase endpoint. There is no
/// balance floor: the resulting balance may be negative.
pub async fn decrease_credits(
    State(service): State<CreditService>,
    Json(transaction): Json<Transaction>,
) -> Result<Json<AdjustResponse>, AppError> {
    service.decrease_credits(transaction).await?;

    Ok(Json(AdjustResponse {}))
}

/// Convert a currency amount into credits without touching any balance.
///
/// # Endpoint
///
/// `POST /credits/convert`
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 100,
///   "currency": "usd"
/// }
/// ```
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "credits": 50
/// }
/// ```
///
/// A zero amount is valid and converts to zero credits.
pub async fn convert_currency(
    State(service): State<CreditService>,
    Json(request): Json<ConvertCurrencyRequest>,
) -> Result<Json<ConvertCurrencyResponse>, AppError> {
    let converted = service
        .convert_currency(request.amount, &request.currency)
        .await?;

    Ok(Json(converted))
}

/// Report how much one credit costs.
///
/// # Endpoint
///
/// `POST /credits/unit_price`
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "amount": 2,
///   "currency": "usd"
/// }
/// ```
pub async fn get_unit_price(
    State(service): State<CreditService>,
    Json(request): Json<UnitPriceRequest>,
) -> Result<Json<UnitPriceResponse>, AppError> {
    let price = service.get_unit_price(&request.currency).await?;

    Ok(Json(price))
}
