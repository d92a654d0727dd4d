//! Credit service - Core business logic for customer credit balances.
//!
//! This service handles:
//! - Transaction validation
//! - Currency-to-credit conversion
//! - Atomic balance adjustments
//!
//! # Atomicity Guarantees
//!
//! Balance adjustments are a single `UPDATE … RETURNING` statement, so the
//! read-modify-write happens as one indivisible unit per row. Concurrent
//! adjustments against the same (handle, application) pair serialize on the
//! row; adjustments against different pairs never block each other.

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        customer::{BalanceResponse, Customer},
        transaction::{ConvertCurrencyResponse, Transaction, UnitPriceResponse},
    },
};

/// Convert a currency amount into whole credits, rounding up.
///
/// `rate` is how many minor currency units buy one credit and must be
/// non-zero (guaranteed by configuration validation at startup). Rounding
/// up means a customer never receives fractional credit for a partial-rate
/// payment, but also never receives less than the amount warrants:
/// `credits_for_amount(amount, rate) * rate >= amount` always holds.
pub fn credits_for_amount(amount: u64, rate: u64) -> u64 {
    amount.div_ceil(rate)
}

/// Stateless service orchestrating the credit operations.
///
/// Holds only an immutable conversion rate and a handle to the connection
/// pool, both injected at construction — all mutable state lives in the
/// database. Cloning is cheap (the pool is reference-counted), so the
/// service doubles as the Axum router state.
#[derive(Debug, Clone)]
pub struct CreditService {
    pool: DbPool,
    conversion_rate: u64,
}

impl CreditService {
    /// Create a service with the given pool and conversion rate.
    ///
    /// `conversion_rate` is in minor currency units per credit and must be
    /// greater than zero; `Config::from_env` enforces that before this
    /// constructor runs.
    pub fn new(pool: DbPool, conversion_rate: u64) -> Self {
        Self {
            pool,
            conversion_rate,
        }
    }

    /// The underlying connection pool (used by the health check).
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Look up the stored balance for a (handle, application) pair.
    ///
    /// The balance is returned verbatim — no conversion is applied.
    ///
    /// # Errors
    ///
    /// - `HandleNotProvided` / `MissingApplication`: empty identifier
    /// - `CustomerNotFound`: no record exists for the pair
    /// - `Database`: database error occurred
    pub async fn get_balance(
        &self,
        handle: &str,
        application: &str,
    ) -> Result<BalanceResponse, AppError> {
        if handle.is_empty() {
            tracing::debug!("no handle provided");
            return Err(AppError::HandleNotProvided);
        }
        if application.is_empty() {
            tracing::debug!("missing application");
            return Err(AppError::MissingApplication);
        }

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, handle, application, credits, created_at, updated_at
            FROM customers
            WHERE handle = $1 AND application = $2
            "#,
        )
        .bind(handle)
        .bind(application)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::CustomerNotFound)?;

        Ok(customer.into())
    }

    /// Increase a customer's balance from a paid currency amount.
    ///
    /// The amount is converted at the configured rate (rounding up) and
    /// added to the existing record. The record must already exist — this
    /// operation never creates one.
    ///
    /// # Errors
    ///
    /// - Validation errors from `Transaction::validate`
    /// - `CustomerNotFound`: no record for the (handle, application) pair
    /// - `Database`: database error occurred
    pub async fn increase_credits(&self, transaction: Transaction) -> Result<(), AppError> {
        transaction.validate()?;

        let value = credits_for_amount(transaction.amount, self.conversion_rate);

        self.adjust_credits(&transaction.handle, &transaction.application, value as i64)
            .await?;

        Ok(())
    }

    /// Decrease a customer's balance from a charged currency amount.
    ///
    /// Identical to `increase_credits` with a negated delta. There is no
    /// floor check: the resulting balance may be negative.
    pub async fn decrease_credits(&self, transaction: Transaction) -> Result<(), AppError> {
        transaction.validate()?;

        let value = credits_for_amount(transaction.amount, self.conversion_rate);

        self.adjust_credits(&transaction.handle, &transaction.application, -(value as i64))
            .await?;

        Ok(())
    }

    /// Convert a currency amount into credits without touching any balance.
    ///
    /// Only the currency format is checked; a zero amount is valid and
    /// converts to zero credits.
    pub async fn convert_currency(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<ConvertCurrencyResponse, AppError> {
        if currency.is_empty() || currency.len() > 3 {
            tracing::debug!("invalid currency format");
            return Err(AppError::InvalidCurrencyFormat);
        }

        Ok(ConvertCurrencyResponse {
            credits: credits_for_amount(amount, self.conversion_rate),
        })
    }

    /// Report how much one credit costs.
    ///
    /// The currency field of the response is always "usd": the requested
    /// code is format-checked but not used for a rate lookup, since no
    /// per-currency rate table exists.
    pub async fn get_unit_price(&self, currency: &str) -> Result<UnitPriceResponse, AppError> {
        if currency.is_empty() || currency.len() > 3 {
            tracing::debug!("invalid currency format");
            return Err(AppError::InvalidCurrencyFormat);
        }

        Ok(UnitPriceResponse {
            amount: self.conversion_rate,
            currency: "usd".to_string(),
        })
    }

    /// Create a new customer balance record.
    ///
    /// Records are created explicitly — balance adjustments never upsert.
    /// Exposed for administrative setup and test fixtures rather than as an
    /// HTTP endpoint.
    pub async fn create_customer(
        &self,
        handle: &str,
        application: &str,
        credits: i64,
    ) -> Result<Customer, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (handle, application, credits)
            VALUES ($1, $2, $3)
            RETURNING id, handle, application, credits, created_at, updated_at
            "#,
        )
        .bind(handle)
        .bind(application)
        .bind(credits)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Apply a signed delta to the stored balance, atomically.
    ///
    /// A single UPDATE both reads and writes the row, so concurrent
    /// adjustments against the same pair cannot lose an update. Zero rows
    /// updated means the pair has no record; that surfaces as
    /// `CustomerNotFound` rather than a silent no-op.
    async fn adjust_credits(
        &self,
        handle: &str,
        application: &str,
        delta: i64,
    ) -> Result<i64, AppError> {
        let credits = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE customers
            SET credits = credits + $1,
                updated_at = NOW()
            WHERE handle = $2 AND application = $3
            RETURNING credits
            "#,
        )
        .bind(delta)
        .bind(handle)
        .bind(application)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::CustomerNotFound)?;

        Ok(credits)
    }
}

#[cfg(test)]
mod tests {
    use super::credits_for_amount;

    #[test]
    fn exact_multiples_divide_evenly() {
        assert_eq!(credits_for_amount(100, 2), 50);
        assert_eq!(credits_for_amount(10, 2), 5);
        assert_eq!(credits_for_amount(7, 7), 1);
    }

    #[test]
    fn partial_payments_round_up() {
        assert_eq!(credits_for_amount(3, 2), 2);
        assert_eq!(credits_for_amount(1, 100), 1);
        assert_eq!(credits_for_amount(199, 100), 2);
    }

    #[test]
    fn zero_amount_converts_to_zero() {
        assert_eq!(credits_for_amount(0, 2), 0);
        assert_eq!(credits_for_amount(0, 1), 0);
    }

    #[test]
    fn conversion_never_under_credits() {
        for amount in 0..500u64 {
            for rate in 1..20u64 {
                let credits = credits_for_amount(amount, rate);
                assert!(credits * rate >= amount);
                // Rounds up to the nearest whole credit, never further.
                assert!(credits == 0 || (credits - 1) * rate < amount);
            }
        }
    }
}
