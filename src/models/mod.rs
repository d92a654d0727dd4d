//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Customer balance model
pub mod customer;
/// Transaction input and conversion request/response types
pub mod transaction;
