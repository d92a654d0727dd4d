//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, query params)
//! 2. Invokes the credit service
//! 3. Returns HTTP response (JSON, status code)

/// Credit management endpoints
pub mod credits;
/// Service health endpoint
pub mod health;
