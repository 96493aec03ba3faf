// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Provider configuration.
//!
//! Settings come from the orchestrator's provider block, with environment
//! variables as defaults:
//!
//! | Setting        | Environment variable   | Required |
//! |----------------|------------------------|----------|
//! | `api_username` | `REGRU_API_USERNAME`   | yes      |
//! | `api_password` | `REGRU_API_PASSWORD`   | yes      |
//! | `api_endpoint` | `REGRU_API_ENDPOINT`   | no       |
//! | `cert_file`    | `REGRU_CERT_FILE`      | with `key_file` |
//! | `key_file`     | `REGRU_KEY_FILE`       | with `cert_file` |
//!
//! Setting both `cert_file` and `key_file` selects mutual TLS; setting neither
//! selects the basic transport.

use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{
    DEFAULT_API_ENDPOINT, ENV_API_ENDPOINT, ENV_API_PASSWORD, ENV_API_USERNAME, ENV_CERT_FILE,
    ENV_KEY_FILE,
};
use crate::dns_errors::{ConfigError, RegruError};
use crate::regru::{Credentials, RegruClient, TransportConfig};

/// Provider settings used to build a [`RegruClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_username: String,
    pub api_password: String,
    pub api_endpoint: String,
    pub cert_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_username: String::new(),
            api_password: String::new(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            cert_file: None,
            key_file: None,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_username", &self.api_username)
            .field("api_password", &"<redacted>")
            .field("api_endpoint", &self.api_endpoint)
            .field("cert_file", &self.cert_file)
            .field("key_file", &self.key_file)
            .finish()
    }
}

impl ProviderConfig {
    /// Load settings from the process environment.
    ///
    /// Missing variables leave the field at its default; call [`Self::validate`]
    /// before use.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let config = Self {
            api_username: get(ENV_API_USERNAME).unwrap_or_default(),
            api_password: get(ENV_API_PASSWORD).unwrap_or_default(),
            api_endpoint: get(ENV_API_ENDPOINT)
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            cert_file: get(ENV_CERT_FILE).map(PathBuf::from),
            key_file: get(ENV_KEY_FILE).map(PathBuf::from),
        };

        debug!(config = ?config, "Loaded provider configuration");
        config
    }

    /// Check that the configuration can produce a client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] for an empty username or password, and
    /// [`ConfigError::IncompleteCertificatePair`] if only one certificate file is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_username.is_empty() {
            return Err(ConfigError::MissingParameter {
                parameter: "api_username".to_string(),
            });
        }
        if self.api_password.is_empty() {
            return Err(ConfigError::MissingParameter {
                parameter: "api_password".to_string(),
            });
        }
        self.transport().map(|_| ())
    }

    /// Transport selected by the certificate settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IncompleteCertificatePair`] if only one file is set.
    pub fn transport(&self) -> Result<TransportConfig, ConfigError> {
        match (&self.cert_file, &self.key_file) {
            (Some(cert_file), Some(key_file)) => Ok(TransportConfig::MutualTls {
                cert_file: cert_file.clone(),
                key_file: key_file.clone(),
            }),
            (None, None) => Ok(TransportConfig::Basic),
            (Some(_), None) => Err(ConfigError::IncompleteCertificatePair {
                present: "cert_file".to_string(),
            }),
            (None, Some(_)) => Err(ConfigError::IncompleteCertificatePair {
                present: "key_file".to_string(),
            }),
        }
    }

    /// Credentials carried by this configuration.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_username, &self.api_password)
    }

    /// Validate the configuration and build a client from it.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the client cannot be constructed.
    pub fn build_client(&self) -> Result<RegruClient, RegruError> {
        self.validate()?;
        RegruClient::new(
            self.credentials(),
            Some(&self.api_endpoint),
            &self.transport()?,
        )
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
