// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for Reg.ru API calls and record lifecycle operations.
//!
//! Errors are split by origin:
//! - [`ValidationError`] - the caller's record description is wrong
//! - [`TransportError`] - the request never produced a usable HTTP exchange
//! - [`RemoteError`] - the registrar answered and reported a failure
//! - [`DecodeError`] - a payload could not be encoded or decoded
//! - [`ConfigError`] - the provider configuration is unusable
//!
//! [`RegruError`] composes all of them and is what every public operation returns.
//! Nothing in this crate retries or swallows an error; each one reaches the caller.

use crate::http_errors::map_http_error_to_reason;
use crate::status_reasons::{
    REASON_CONFIGURATION_INVALID, REASON_DECODE_FAILED, REASON_DOMAIN_RESULT_FAILED,
    REASON_INVALID_RECORD, REASON_REGISTRAR_ERROR, REASON_REGISTRAR_UNREACHABLE,
    REASON_REQUEST_TIMEOUT,
};
use thiserror::Error;

/// Errors caused by an invalid record description.
///
/// These are configuration mistakes on the caller's side and are never retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Record type is not one of A, AAAA, CNAME, MX, TXT
    #[error("invalid record type '{record_type}'")]
    UnsupportedRecordType {
        /// The record type as supplied by the caller
        record_type: String,
    },

    /// MX value did not split into exactly `priority mailserver`
    #[error("invalid MX record format '{value}', expected 'priority mailserver' (got {tokens} tokens)")]
    InvalidMxValue {
        /// The raw record value
        value: String,
        /// Number of whitespace-separated tokens found
        tokens: usize,
    },

    /// A required resource attribute is missing or empty
    #[error("missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Attribute name in the resource schema
        attribute: String,
    },
}

/// Errors where no usable response came back from the registrar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection could not be established or the request failed mid-flight
    #[error("HTTP request to {endpoint} failed: {reason}")]
    RequestFailed {
        /// Full URL of the call
        endpoint: String,
        /// Underlying client error
        reason: String,
    },

    /// Request exceeded the client timeout
    #[error("HTTP request to {endpoint} timed out after {timeout_ms}ms")]
    Timeout {
        /// Full URL of the call
        endpoint: String,
        /// Client timeout in milliseconds
        timeout_ms: u64,
    },

    /// Non-2xx response whose body is not a registrar envelope
    #[error("unexpected HTTP {status_code} from {endpoint}: {body}")]
    UnexpectedStatus {
        /// Full URL of the call
        endpoint: String,
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        body: String,
    },

    /// The configured endpoint cannot be used as a base URL
    #[error("invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Failures reported by the registrar itself.
///
/// The registrar's `error_code` and `error_text` are carried verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Non-2xx response carrying a parseable error envelope
    #[error("API HTTP {status_code}: {result}: {error_code}: {error_text}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Envelope `result` value
        result: String,
        /// Registrar error code
        error_code: String,
        /// Registrar error message
        error_text: String,
    },

    /// Top-level envelope result was not `success`
    #[error("API {result}: {error_code}: {error_text}")]
    ResultFailed {
        /// Envelope `result` value
        result: String,
        /// Registrar error code
        error_code: String,
        /// Registrar error message
        error_text: String,
    },

    /// A nested per-domain result was not `success`
    #[error("API {result} for domain '{dname}': {error_code}: {error_text}")]
    DomainFailed {
        /// Domain the nested result refers to
        dname: String,
        /// Nested `result` value
        result: String,
        /// Registrar error code
        error_code: String,
        /// Registrar error message
        error_text: String,
    },
}

/// Errors encoding a request or decoding a successful response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// 2xx response body is not a valid envelope
    #[error("malformed response from {endpoint}: {reason}")]
    MalformedEnvelope {
        /// Full URL of the call
        endpoint: String,
        /// Parser error
        reason: String,
    },

    /// Request could not be turned into form parameters
    #[error("failed to encode request: {reason}")]
    RequestEncoding {
        /// Serializer error or shape problem
        reason: String,
    },
}

/// Errors in provider configuration, detected before any request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required setting is absent or empty
    #[error("missing required parameter: {parameter}")]
    MissingParameter {
        /// Setting name in the provider schema
        parameter: String,
    },

    /// Only one half of the client certificate pair was configured
    #[error("mutual TLS requires both cert_file and key_file, only {present} was set")]
    IncompleteCertificatePair {
        /// The setting that was present
        present: String,
    },

    /// Certificate or key could not be loaded
    #[error("failed to load client certificate from '{path}': {reason}")]
    Certificate {
        /// File that failed to load
        path: String,
        /// Underlying error
        reason: String,
    },

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {reason}")]
    HttpClient {
        /// Underlying error
        reason: String,
    },
}

/// Composite error returned by every provider operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegruError {
    /// Invalid record description
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network or protocol-level failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Registrar reported a failure
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Payload encoding or decoding failure
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Unusable provider configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RegruError {
    /// Returns true if a caller could reasonably retry the operation later.
    ///
    /// This crate never retries on its own; the flag is informational.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(
                TransportError::RequestFailed { .. } | TransportError::Timeout { .. },
            ) => true,
            Self::Transport(TransportError::UnexpectedStatus { status_code, .. })
            | Self::Remote(RemoteError::HttpStatus { status_code, .. }) => *status_code >= 500,

            Self::Validation(_)
            | Self::Transport(TransportError::InvalidEndpoint { .. })
            | Self::Remote(
                RemoteError::ResultFailed { .. } | RemoteError::DomainFailed { .. },
            )
            | Self::Decode(_)
            | Self::Config(_) => false,
        }
    }

    /// Returns a stable CamelCase reason code for this error.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::Validation(_) => REASON_INVALID_RECORD,

            Self::Transport(TransportError::Timeout { .. }) => REASON_REQUEST_TIMEOUT,
            Self::Transport(TransportError::UnexpectedStatus { status_code, .. })
            | Self::Remote(RemoteError::HttpStatus { status_code, .. }) => {
                map_http_error_to_reason(*status_code).0
            }
            Self::Transport(TransportError::RequestFailed { .. }) => REASON_REGISTRAR_UNREACHABLE,
            Self::Transport(TransportError::InvalidEndpoint { .. }) | Self::Config(_) => {
                REASON_CONFIGURATION_INVALID
            }

            Self::Remote(RemoteError::ResultFailed { .. }) => REASON_REGISTRAR_ERROR,
            Self::Remote(RemoteError::DomainFailed { .. }) => REASON_DOMAIN_RESULT_FAILED,

            Self::Decode(_) => REASON_DECODE_FAILED,
        }
    }
}
