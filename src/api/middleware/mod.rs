//! HTTP middleware for request processing and protection.
//!
//! Provides correlation id propagation, rate limiting, and observability
//! middleware.

pub mod rate_limit;
pub mod request_id;
pub mod tracing;
