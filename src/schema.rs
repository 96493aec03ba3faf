// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Declarative schema for the provider block and the `regru_dns_record` resource.
//!
//! The orchestrating tool registers these field definitions and passes resource
//! attributes back as a flat string map. [`RecordDescriptor::from_attributes`]
//! turns that map into the descriptor the lifecycle operations work on.

use std::collections::HashMap;

use crate::constants::{
    ATTR_NAME, ATTR_RECORD, ATTR_TYPE, ATTR_ZONE, DEFAULT_API_ENDPOINT, ENV_API_PASSWORD,
    ENV_API_USERNAME, ENV_CERT_FILE, ENV_KEY_FILE, RESOURCE_DNS_RECORD,
};
use crate::dns_errors::ValidationError;
use crate::record_resource::RecordDescriptor;

/// Definition of a single string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    /// Changing the value replaces the resource
    pub force_new: bool,
    /// Value must not appear in plans or logs
    pub sensitive: bool,
    /// Environment variable consulted when the field is not set
    pub env_default: Option<&'static str>,
    /// Literal default when neither the field nor the variable is set
    pub default: Option<&'static str>,
}

impl FieldSchema {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            force_new: false,
            sensitive: false,
            env_default: None,
            default: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    const fn env(mut self, var: &'static str) -> Self {
        self.env_default = Some(var);
        self
    }

    const fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }
}

/// Fields of the provider configuration block.
///
/// The certificate files are optional here; both or neither must be set.
pub const PROVIDER_SCHEMA: [FieldSchema; 5] = [
    FieldSchema::new("api_username", "API username for reg.ru")
        .required()
        .env(ENV_API_USERNAME),
    FieldSchema::new("api_password", "API password for reg.ru")
        .required()
        .sensitive()
        .env(ENV_API_PASSWORD),
    FieldSchema::new("api_endpoint", "reg.ru API endpoint").default_value(DEFAULT_API_ENDPOINT),
    FieldSchema::new("cert_file", "Path to the client SSL certificate file").env(ENV_CERT_FILE),
    FieldSchema::new("key_file", "Path to the client SSL key file").env(ENV_KEY_FILE),
];

/// Fields of the `regru_dns_record` resource. All are required and force replacement.
pub const DNS_RECORD_SCHEMA: [FieldSchema; 4] = [
    FieldSchema::new(ATTR_TYPE, "Record type: A, AAAA, CNAME, MX or TXT")
        .required()
        .force_new(),
    FieldSchema::new(ATTR_NAME, "Subdomain label, e.g. www or @")
        .required()
        .force_new(),
    FieldSchema::new(ATTR_RECORD, "Record content; MX uses 'priority mailserver'")
        .required()
        .force_new(),
    FieldSchema::new(ATTR_ZONE, "Domain the record belongs to")
        .required()
        .force_new(),
];

/// Resources this provider registers, by name.
#[must_use]
pub fn resources() -> Vec<(&'static str, &'static [FieldSchema])> {
    vec![(RESOURCE_DNS_RECORD, &DNS_RECORD_SCHEMA)]
}

impl RecordDescriptor {
    /// Build a descriptor from resource attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingAttribute`] if a required field is absent or empty.
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let get = |attribute: &str| {
            attributes
                .get(attribute)
                .filter(|value| !value.is_empty())
                .cloned()
                .ok_or_else(|| ValidationError::MissingAttribute {
                    attribute: attribute.to_string(),
                })
        };

        Ok(Self {
            record_type: get(ATTR_TYPE)?,
            name: get(ATTR_NAME)?,
            value: get(ATTR_RECORD)?,
            zone: get(ATTR_ZONE)?,
        })
    }

    /// Attribute map for this descriptor, keyed by schema field name.
    #[must_use]
    pub fn to_attributes(&self) -> HashMap<String, String> {
        HashMap::from([
            (ATTR_TYPE.to_string(), self.record_type.clone()),
            (ATTR_NAME.to_string(), self.name.clone()),
            (ATTR_RECORD.to_string(), self.value.clone()),
            (ATTR_ZONE.to_string(), self.zone.clone()),
        ])
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod schema_tests;
