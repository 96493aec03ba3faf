// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reg.ru API client.
//!
//! This module provides the client used to talk to the Reg.ru HTTP API. It handles:
//!
//! - Building form-encoded requests for the `zone/*` actions
//! - Attaching API credentials to every call
//! - Optional mutual TLS with a client certificate
//! - Classifying responses into success, remote errors, transport errors and decode errors
//!
//! # Architecture
//!
//! [`RegruClient`] is a single client type parameterized by a [`TransportConfig`].
//! The basic transport uses password authentication only; the mutual TLS transport
//! additionally presents a client certificate. Both speak the same protocol.
//!
//! Every call is a single attempt with a fixed timeout; nothing is retried.
//!
//! # Example
//!
//! ```rust,no_run
//! use regru_dns::regru::{Credentials, RegruClient, TransportConfig, ZoneApi};
//!
//! # async fn example() -> Result<(), regru_dns::dns_errors::RegruError> {
//! let client = RegruClient::new(
//!     Credentials::new("test", "test"),
//!     None,
//!     &TransportConfig::Basic,
//! )?;
//!
//! let params = serde_json::json!({"domain_name": "example.com"});
//! let envelope = client.send(&params, &["zone", "get_resource_records"]).await?;
//! envelope.has_error()?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod records;
pub mod types;

pub use types::{
    CreateRecordRequest, DeleteRecordRequest, DomainName, RecordData, RecordType,
    ResponseEnvelope, ZoneRef,
};

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Identity};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::constants::{
    BASIC_REQUEST_TIMEOUT_SECS, DEFAULT_API_ENDPOINT, MTLS_REQUEST_TIMEOUT_SECS,
};
use crate::dns_errors::{ConfigError, RegruError};

/// API username and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// How the client connects to the registrar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportConfig {
    /// Password authentication only, short timeout
    Basic,
    /// Password authentication plus a client certificate
    MutualTls {
        /// PEM certificate chain
        cert_file: PathBuf,
        /// PEM private key
        key_file: PathBuf,
    },
}

impl TransportConfig {
    /// Request timeout used by this transport.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        match self {
            Self::Basic => Duration::from_secs(BASIC_REQUEST_TIMEOUT_SECS),
            Self::MutualTls { .. } => Duration::from_secs(MTLS_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// The one operation the record adapter needs from a registrar client.
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// Send `params` to the action at `path` (e.g. `["zone", "add_alias"]`).
    ///
    /// Returns the decoded envelope; the caller decides whether its result is a success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the response cannot be decoded.
    async fn send(&self, params: &Value, path: &[&str]) -> Result<ResponseEnvelope, RegruError>;
}

/// Client for the Reg.ru API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RegruClient {
    /// HTTP client for API requests
    client: Arc<HttpClient>,
    /// Credentials attached to every request
    credentials: Arc<Credentials>,
    /// Base endpoint, e.g. `https://api.reg.ru/api/regru2/`
    base_url: Url,
    /// Request timeout fixed at construction
    timeout: Duration,
}

impl RegruClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `credentials` - API username and password
    /// * `endpoint` - API endpoint; `None` or empty uses the production endpoint
    /// * `transport` - Basic or mutual TLS transport
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid, the certificate material cannot be
    /// loaded, or the HTTP client cannot be built.
    pub fn new(
        credentials: Credentials,
        endpoint: Option<&str>,
        transport: &TransportConfig,
    ) -> Result<Self, RegruError> {
        let endpoint = endpoint
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_API_ENDPOINT);
        let base_url = client::parse_endpoint(endpoint)?;
        let timeout = transport.timeout();

        let mut builder = HttpClient::builder().timeout(timeout);
        if let TransportConfig::MutualTls {
            cert_file,
            key_file,
        } = transport
        {
            debug!(
                cert_file = %cert_file.display(),
                key_file = %key_file.display(),
                "Loading client certificate"
            );
            builder = builder.identity(load_identity(cert_file, key_file)?);
        }

        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            reason: e.to_string(),
        })?;

        info!(
            endpoint = %base_url,
            mutual_tls = matches!(transport, TransportConfig::MutualTls { .. }),
            timeout = ?timeout,
            "Created Reg.ru API client"
        );

        Ok(Self {
            client: Arc::new(client),
            credentials: Arc::new(credentials),
            base_url,
            timeout,
        })
    }

    /// Base endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.base_url
    }

    /// Request timeout fixed at construction.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ZoneApi for RegruClient {
    async fn send(&self, params: &Value, path: &[&str]) -> Result<ResponseEnvelope, RegruError> {
        let url = client::build_api_url(&self.base_url, path)?;
        client::regru_request(&self.client, &self.credentials, &url, self.timeout, params).await
    }
}

/// Read the certificate chain and private key into a single client identity.
fn load_identity(cert_file: &Path, key_file: &Path) -> Result<Identity, ConfigError> {
    let read = |path: &Path| {
        std::fs::read(path).map_err(|e| ConfigError::Certificate {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    };

    let mut pem = read(cert_file)?;
    pem.push(b'\n');
    pem.extend_from_slice(&read(key_file)?);

    Identity::from_pem(&pem).map_err(|e| ConfigError::Certificate {
        path: cert_file.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
