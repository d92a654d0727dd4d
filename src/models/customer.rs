//! Customer data models and API request/response types.
//!
//! This module defines:
//! - `Customer`: Database entity representing a per-application credit balance
//! - `BalanceQuery`: Query parameters for looking a balance up
//! - `BalanceResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a customer balance record from the database.
///
/// # Database Table
///
/// Maps to the `customers` table. Each row tracks the credits one handle
/// can spend in one application; the (handle, application) pair is unique,
/// so the same handle may hold independent balances in several applications.
///
/// What counts as a "customer" is up to the applications — this model is
/// only a credit store, any relationship between customers and other
/// entities (users, organizations) is handled by the applications.
///
/// # Balance Storage
///
/// Credits are stored as a signed `i64` whole-number count. There is no
/// floor: a balance may go negative, and business-level limits are the
/// calling application's responsibility.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Customer {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Customer handle, scoped to `application` (not globally unique)
    pub handle: String,

    /// The application these credits are tracked for
    pub application: String,

    /// Current credit balance (signed, may be negative)
    pub credits: i64,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last balance adjustment
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for the balance lookup endpoint.
///
/// # Example
///
/// `GET /credits?handle=test1&application=fuel`
#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    /// Handle of the customer whose balance is requested
    pub handle: String,

    /// Application the balance is scoped to
    pub application: String,
}

/// Response body for the balance lookup endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "handle": "test1",
///   "application": "fuel",
///   "credits": 100
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Customer handle
    pub handle: String,

    /// Application the balance is scoped to
    pub application: String,

    /// Stored balance, returned verbatim with no conversion applied
    pub credits: i64,
}

/// Convert database Customer to API BalanceResponse.
///
/// This transformation removes the internal row id and timestamps.
impl From<Customer> for BalanceResponse {
    fn from(customer: Customer) -> Self {
        Self {
            handle: customer.handle,
            application: customer.application,
            credits: customer.credits,
        }
    }
}
