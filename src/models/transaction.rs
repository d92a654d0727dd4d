//! Transaction input and conversion request/response types.
//!
//! A `Transaction` is the transient input to the increase/decrease
//! operations. It is validated before use and never persisted as its own
//! entity — only its effect on the customer's balance is stored.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A request to turn a paid currency amount into a balance adjustment.
///
/// # JSON Example
///
/// ```json
/// {
///   "handle": "test1",
///   "amount": 200,
///   "currency": "usd",
///   "application": "fuel"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Handle of the customer whose balance is adjusted
    pub handle: String,

    /// Amount paid, in the currency's minor unit (e.g. cents for USD)
    pub amount: u64,

    /// ISO 4217 currency code in lowercase format
    pub currency: String,

    /// The application the credits are tracked for
    pub application: String,
}

impl Transaction {
    /// Check the transaction fields, reporting the first failure.
    ///
    /// Checks run in a fixed order — handle, amount, currency, application —
    /// so when several fields are invalid only the earliest failure is
    /// reported. The currency check is length-only (1 to 3 characters); it
    /// does not verify ISO 4217 membership or lowercase.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.handle.is_empty() {
            return Err(AppError::HandleNotProvided);
        }
        if self.amount == 0 {
            return Err(AppError::InvalidAmount);
        }
        if self.currency.is_empty() || self.currency.len() > 3 {
            return Err(AppError::InvalidCurrencyFormat);
        }
        if self.application.is_empty() {
            return Err(AppError::MissingApplication);
        }
        Ok(())
    }
}

/// Empty response body returned by the increase and decrease endpoints.
///
/// Serializes to `{}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdjustResponse {}

/// Request to convert a currency amount into credits without touching any balance.
///
/// Unlike `Transaction`, a zero amount is valid here and converts to zero
/// credits — only the currency format is checked.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertCurrencyRequest {
    /// Amount in the currency's minor unit
    pub amount: u64,

    /// ISO 4217 currency code in lowercase format
    pub currency: String,
}

/// Response for the currency conversion endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertCurrencyResponse {
    /// Whole-number credits the amount converts to, rounded up
    pub credits: u64,
}

/// Request for the price of a single credit.
#[derive(Debug, Serialize, Deserialize)]
pub struct UnitPriceRequest {
    /// ISO 4217 currency code in lowercase format
    pub currency: String,
}

/// Response for the unit price endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 2,
///   "currency": "usd"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct UnitPriceResponse {
    /// Minor currency units needed to obtain one credit
    pub amount: u64,

    /// Always "usd"; there is no per-currency rate table
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_transaction() -> Transaction {
        Transaction {
            handle: "test1".to_string(),
            amount: 10,
            currency: "usd".to_string(),
            application: "fuel".to_string(),
        }
    }

    #[test]
    fn valid_transaction_passes() {
        assert!(valid_transaction().validate().is_ok());
    }

    #[test]
    fn empty_handle_rejected() {
        let tx = Transaction {
            handle: String::new(),
            ..valid_transaction()
        };
        assert!(matches!(tx.validate(), Err(AppError::HandleNotProvided)));
    }

    #[test]
    fn zero_amount_rejected() {
        let tx = Transaction {
            amount: 0,
            ..valid_transaction()
        };
        assert!(matches!(tx.validate(), Err(AppError::InvalidAmount)));
    }

    #[test]
    fn empty_currency_rejected() {
        let tx = Transaction {
            currency: String::new(),
            ..valid_transaction()
        };
        assert!(matches!(tx.validate(), Err(AppError::InvalidCurrencyFormat)));
    }

    #[test]
    fn long_currency_rejected() {
        let tx = Transaction {
            currency: "novalid".to_string(),
            ..valid_transaction()
        };
        assert!(matches!(tx.validate(), Err(AppError::InvalidCurrencyFormat)));
    }

    #[test]
    fn three_letter_currency_accepted() {
        let tx = Transaction {
            currency: "eur".to_string(),
            ..valid_transaction()
        };
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn empty_application_rejected() {
        let tx = Transaction {
            application: String::new(),
            ..valid_transaction()
        };
        assert!(matches!(tx.validate(), Err(AppError::MissingApplication)));
    }

    #[test]
    fn first_failing_check_wins() {
        // Every field is invalid; the handle check runs first.
        let tx = Transaction {
            handle: String::new(),
            amount: 0,
            currency: String::new(),
            application: String::new(),
        };
        assert!(matches!(tx.validate(), Err(AppError::HandleNotProvided)));

        // With a handle present, the amount check is next.
        let tx = Transaction {
            handle: "test1".to_string(),
            amount: 0,
            currency: String::new(),
            application: String::new(),
        };
        assert!(matches!(tx.validate(), Err(AppError::InvalidAmount)));

        // Then currency, before application.
        let tx = Transaction {
            handle: "test1".to_string(),
            amount: 10,
            currency: String::new(),
            application: String::new(),
        };
        assert!(matches!(tx.validate(), Err(AppError::InvalidCurrencyFormat)));
    }
}
