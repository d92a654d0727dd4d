//! End-to-end tests driving a real server through the typed HTTP client.
//!
//! Each test serves the router on an ephemeral local port and exercises the
//! full path: client -> axum handlers -> credit service -> PostgreSQL.

use credits_web_server::{
    client::{ClientError, CreditsClient},
    models::transaction::{ConvertCurrencyRequest, Transaction, UnitPriceRequest},
    router,
    services::credit_service::CreditService,
};
use sqlx::PgPool;
use url::Url;

const RATE: u64 = 2;

/// Serve the app on 127.0.0.1:0 and return a client pointed at it.
async fn serve(pool: PgPool) -> (CreditsClient, CreditService) {
    let service = CreditService::new(pool, RATE);
    let app = router(service.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let base_url = Url::parse(&format!("http://{addr}/")).expect("base url");
    (CreditsClient::new(base_url), service)
}

fn transaction(handle: &str, amount: u64, application: &str) -> Transaction {
    Transaction {
        handle: handle.to_string(),
        amount,
        currency: "usd".to_string(),
        application: application.to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn balance_round_trips_over_http(pool: PgPool) {
    let (client, service) = serve(pool).await;
    service
        .create_customer("test1", "fuel", 100)
        .await
        .expect("seed");

    let balance = client.get_balance("test1", "fuel").await.expect("balance");

    assert_eq!(balance.handle, "test1");
    assert_eq!(balance.application, "fuel");
    assert_eq!(balance.credits, 100);
}

#[sqlx::test(migrations = "./migrations")]
async fn adjustments_apply_over_http(pool: PgPool) {
    let (client, service) = serve(pool).await;
    service
        .create_customer("test2", "cloudsim", -100)
        .await
        .expect("seed");

    // Rate 2: 200 cents -> 100 credits.
    client
        .increase_credits(&transaction("test2", 200, "cloudsim"))
        .await
        .expect("increase");
    let balance = client
        .get_balance("test2", "cloudsim")
        .await
        .expect("balance");
    assert_eq!(balance.credits, 0);

    client
        .decrease_credits(&transaction("test2", 200, "cloudsim"))
        .await
        .expect("decrease");
    let balance = client
        .get_balance("test2", "cloudsim")
        .await
        .expect("balance");
    assert_eq!(balance.credits, -100);
}

#[sqlx::test(migrations = "./migrations")]
async fn conversion_and_unit_price_over_http(pool: PgPool) {
    let (client, _service) = serve(pool).await;

    let converted = client
        .convert_currency(&ConvertCurrencyRequest {
            amount: 100,
            currency: "usd".to_string(),
        })
        .await
        .expect("convert");
    assert_eq!(converted.credits, 50);

    let price = client
        .get_unit_price(&UnitPriceRequest {
            currency: "usd".to_string(),
        })
        .await
        .expect("unit price");
    assert_eq!(price.amount, RATE);
    assert_eq!(price.currency, "usd");
}

#[sqlx::test(migrations = "./migrations")]
async fn error_envelope_decodes_into_client_error(pool: PgPool) {
    let (client, _service) = serve(pool).await;

    // Unknown pair: the 404 envelope surfaces as a typed API error.
    let err = client
        .increase_credits(&transaction("ghost", 10, "fuel"))
        .await
        .unwrap_err();
    match err {
        ClientError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(code, "customer_not_found");
            assert_eq!(message, "customer not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }

    // Validation failures come back as 400 with their specific codes.
    let err = client
        .increase_credits(&transaction("", 10, "fuel"))
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, code, .. } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(code, "handle_not_provided");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}
