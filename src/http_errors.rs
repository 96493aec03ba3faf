// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP error code mapping to provider reason codes.
//!
//! This module maps HTTP status codes returned by the Reg.ru API to the
//! standardized reasons in [`crate::status_reasons`], so that HTTP-level failures
//! are reported consistently regardless of whether the body carried an envelope.
//!
//! # Usage
//!
//! ```rust
//! use regru_dns::http_errors::map_http_error_to_reason;
//!
//! let (reason, message) = map_http_error_to_reason(401);
//! assert_eq!(reason, "AuthFailed");
//!
//! let (reason, message) = map_http_error_to_reason(500);
//! assert_eq!(reason, "RegistrarInternalError");
//! ```

use crate::status_reasons::{
    REASON_AUTH_FAILED, REASON_BAD_REQUEST, REASON_ENDPOINT_NOT_FOUND, REASON_GATEWAY_ERROR,
    REASON_RATE_LIMITED, REASON_REGISTRAR_INTERNAL_ERROR, REASON_REGISTRAR_UNREACHABLE,
};

/// Map HTTP status code to reason and message.
///
/// # Arguments
///
/// * `status_code` - HTTP status code (e.g., 400, 404, 500)
///
/// # Returns
///
/// A tuple of `(reason, message)`:
/// - `reason` - Constant from `status_reasons` module
/// - `message` - Human-readable explanation of the error
///
/// # HTTP Code Mapping
///
/// | HTTP Code | Reason | Meaning |
/// |-----------|--------|---------|
/// | 400 | `BadRequest` | Invalid request format |
/// | 401 | `AuthFailed` | Credentials rejected |
/// | 403 | `AuthFailed` | Client certificate or IP not allowed |
/// | 404 | `EndpointNotFound` | Wrong API path |
/// | 429 | `RateLimited` | Too many requests |
/// | 500 | `RegistrarInternalError` | Internal server error |
/// | 502 | `GatewayError` | Bad gateway |
/// | 503 | `GatewayError` | Service unavailable |
/// | 504 | `GatewayError` | Gateway timeout |
/// | Other | `RegistrarUnreachable` | Unexpected error |
///
/// # Example
///
/// ```rust
/// use regru_dns::http_errors::map_http_error_to_reason;
///
/// let (reason, message) = map_http_error_to_reason(503);
/// assert_eq!(reason, "GatewayError");
/// assert!(message.contains("503"));
/// ```
#[must_use]
pub fn map_http_error_to_reason(status_code: u16) -> (&'static str, String) {
    match status_code {
        400 => (
            REASON_BAD_REQUEST,
            "Invalid request to Reg.ru API (400)".into(),
        ),
        401 => (
            REASON_AUTH_FAILED,
            "Reg.ru authentication required (401)".into(),
        ),
        403 => (
            REASON_AUTH_FAILED,
            "Reg.ru authorization failed (403)".into(),
        ),
        404 => (
            REASON_ENDPOINT_NOT_FOUND,
            "Reg.ru API path not found (404)".into(),
        ),
        429 => (
            REASON_RATE_LIMITED,
            "Reg.ru API rate limit exceeded (429)".into(),
        ),
        500 => (
            REASON_REGISTRAR_INTERNAL_ERROR,
            "Reg.ru API internal error (500)".into(),
        ),
        502 => (
            REASON_GATEWAY_ERROR,
            "Bad gateway reaching Reg.ru API (502)".into(),
        ),
        503 => (
            REASON_GATEWAY_ERROR,
            "Reg.ru API service unavailable (503)".into(),
        ),
        504 => (
            REASON_GATEWAY_ERROR,
            "Gateway timeout reaching Reg.ru API (504)".into(),
        ),
        _ => (
            REASON_REGISTRAR_UNREACHABLE,
            format!("Unexpected HTTP error from Reg.ru API ({status_code})"),
        ),
    }
}
