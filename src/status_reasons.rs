// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Stable reason codes for provider errors.
//!
//! Reasons are programmatic identifiers in CamelCase that explain why an operation
//! failed. They are reported alongside the human-readable error message so that the
//! orchestrating tool (or a script wrapping the CLI) can branch on them without
//! parsing text.
//!
//! # Example
//!
//! ```text
//! Error: API error: DOMAIN_NOT_FOUND: Domain not found
//! Reason: RegistrarError
//! ```

// ============================================================================
// Caller Reasons
// ============================================================================

/// Provider configuration is incomplete or unusable.
///
/// Possible causes:
/// - `REGRU_API_USERNAME` or `REGRU_API_PASSWORD` not set
/// - only one of `cert_file` / `key_file` configured
/// - certificate or key file unreadable
/// - endpoint is not a valid URL
pub const REASON_CONFIGURATION_INVALID: &str = "ConfigurationInvalid";

/// Record description was rejected before contacting the registrar.
///
/// Covers unsupported record types and malformed MX values.
pub const REASON_INVALID_RECORD: &str = "InvalidRecord";

// ============================================================================
// Registrar Reasons
// ============================================================================

/// Registrar answered with a top-level failure result.
pub const REASON_REGISTRAR_ERROR: &str = "RegistrarError";

/// Registrar accepted the call but a per-domain result failed.
///
/// Partial success across a domain list is treated as failure.
pub const REASON_DOMAIN_RESULT_FAILED: &str = "DomainResultFailed";

/// Registrar response body could not be decoded.
pub const REASON_DECODE_FAILED: &str = "DecodeFailed";

// ============================================================================
// HTTP Reasons
// ============================================================================

/// Registrar rejected the request format (HTTP 400).
pub const REASON_BAD_REQUEST: &str = "BadRequest";

/// Registrar rejected the credentials or client certificate (HTTP 401/403).
pub const REASON_AUTH_FAILED: &str = "AuthFailed";

/// API path not found (HTTP 404). Usually a wrong endpoint.
pub const REASON_ENDPOINT_NOT_FOUND: &str = "EndpointNotFound";

/// Registrar is rate limiting the account (HTTP 429).
pub const REASON_RATE_LIMITED: &str = "RateLimited";

/// Registrar internal error (HTTP 500).
pub const REASON_REGISTRAR_INTERNAL_ERROR: &str = "RegistrarInternalError";

/// Gateway error between the client and the registrar (HTTP 502/503/504).
pub const REASON_GATEWAY_ERROR: &str = "GatewayError";

/// Registrar could not be reached or answered with an unexpected status.
pub const REASON_REGISTRAR_UNREACHABLE: &str = "RegistrarUnreachable";

/// Request exceeded the client timeout.
pub const REASON_REQUEST_TIMEOUT: &str = "RequestTimeout";
