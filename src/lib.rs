//! Credits service library.
//!
//! Tracks a per-(customer, application) integer credit balance and exposes
//! operations to read it, adjust it by converting a paid currency amount
//! into credits at a configured rate, and report conversion rates. The HTTP
//! surface lives in `handlers`; the balance-mutation logic lives in
//! `services::credit_service`.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    Router,
    routing::{get, post},
};
use services::credit_service::CreditService;
use tower_http::trace::TraceLayer;

/// Build the HTTP router serving the credits API.
///
/// The credit service is the shared state: it carries the immutable
/// conversion rate and the connection pool that every handler needs.
pub fn router(service: CreditService) -> Router {
    Router::new()
        // Credit routes
        .route("/credits", get(handlers::credits::get_balance))
        .route(
            "/credits/increase",
            post(handlers::credits::increase_credits),
        )
        .route(
            "/credits/decrease",
            post(handlers::credits::decrease_credits),
        )
        .route("/credits/convert", post(handlers::credits::convert_currency))
        .route("/credits/unit_price", post(handlers::credits::get_unit_price))
        // Public health route
        .route("/health", get(handlers::health::health_check))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the credit service with all handlers via State extraction
        .with_state(service)
}
