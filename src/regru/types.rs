// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Request and response types for the Reg.ru API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ACTION_ADD_AAAA, ACTION_ADD_ALIAS, ACTION_ADD_CNAME, ACTION_ADD_MX, ACTION_ADD_TXT,
    RESULT_SUCCESS,
};
use crate::dns_errors::{RemoteError, ValidationError};

/// DNS record types the provider can manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
}

impl RecordType {
    /// All supported record types.
    pub const ALL: [Self; 5] = [Self::A, Self::AAAA, Self::CNAME, Self::MX, Self::TXT];

    /// Canonical upper-case name of the type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::CNAME => "CNAME",
            Self::MX => "MX",
            Self::TXT => "TXT",
        }
    }

    /// Zone action that creates a record of this type.
    #[must_use]
    pub fn create_action(self) -> &'static str {
        match self {
            Self::A => ACTION_ADD_ALIAS,
            Self::AAAA => ACTION_ADD_AAAA,
            Self::CNAME => ACTION_ADD_CNAME,
            Self::MX => ACTION_ADD_MX,
            Self::TXT => ACTION_ADD_TXT,
        }
    }

    /// Whether the create action expects the zone as a `domains` list
    /// rather than a plain `domain_name` field.
    #[must_use]
    pub fn uses_domain_list(self) -> bool {
        matches!(self, Self::CNAME | Self::MX | Self::TXT)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    /// Parses a record type, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::AAAA),
            "CNAME" => Ok(Self::CNAME),
            "MX" => Ok(Self::MX),
            "TXT" => Ok(Self::TXT),
            _ => Err(ValidationError::UnsupportedRecordType {
                record_type: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Domain entry inside a `domains` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainName {
    pub dname: String,
}

impl DomainName {
    #[must_use]
    pub fn new(dname: impl Into<String>) -> Self {
        Self {
            dname: dname.into(),
        }
    }
}

/// How a request names the zone it targets.
///
/// Some actions accept a direct `domain_name`; others only accept a
/// one-element `domains` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ZoneRef {
    Direct { domain_name: String },
    Listed { domains: Vec<DomainName> },
}

impl ZoneRef {
    #[must_use]
    pub fn direct(zone: &str) -> Self {
        Self::Direct {
            domain_name: zone.to_string(),
        }
    }

    #[must_use]
    pub fn listed(zone: &str) -> Self {
        Self::Listed {
            domains: vec![DomainName::new(zone)],
        }
    }
}

/// Type-specific fields of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordData {
    /// A and AAAA
    Address { ipaddr: String },
    /// CNAME
    CanonicalName { canonical_name: String },
    /// MX
    MailExchange { priority: String, mail_server: String },
    /// TXT
    Text { text: String },
}

/// Parameters for one of the `zone/add_*` actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRecordRequest {
    #[serde(flatten)]
    pub zone: ZoneRef,
    pub subdomain: String,
    pub output_content_type: String,
    #[serde(flatten)]
    pub data: RecordData,
}

/// Parameters for `zone/remove_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteRecordRequest {
    pub domains: Vec<DomainName>,
    pub subdomain: String,
    pub content: String,
    pub record_type: String,
    pub output_content_type: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Top-level response wrapper returned by every Reg.ru call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub answer: Option<Answer>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_text: Option<String>,
}

/// Nested `answer` object; only the per-domain results matter here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub domains: Vec<DomainResult>,
}

/// Outcome for a single domain inside `answer.domains`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DomainResult {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub dname: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_text: Option<String>,
}

impl ResponseEnvelope {
    /// Overall success check.
    ///
    /// The top-level result and every nested domain result must be `success`.
    /// The first failure found is returned; a failed domain is reported even when
    /// the top-level result claims success.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::ResultFailed`] or [`RemoteError::DomainFailed`] carrying
    /// the registrar's error code and text.
    pub fn has_error(&self) -> Result<(), RemoteError> {
        if self.result != RESULT_SUCCESS {
            return Err(RemoteError::ResultFailed {
                result: self.result.clone(),
                error_code: self.error_code.clone().unwrap_or_default(),
                error_text: self.error_text.clone().unwrap_or_default(),
            });
        }

        let domains = self.answer.iter().flat_map(|answer| answer.domains.iter());
        for domain in domains {
            if domain.result != RESULT_SUCCESS {
                return Err(RemoteError::DomainFailed {
                    dname: domain.dname.clone(),
                    result: domain.result.clone(),
                    error_code: domain.error_code.clone().unwrap_or_default(),
                    error_text: domain.error_text.clone().unwrap_or_default(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
