// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Reg.ru DNS provider.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Registrar API Constants
// ============================================================================

/// Production endpoint of the Reg.ru API (version 2)
pub const DEFAULT_API_ENDPOINT: &str = "https://api.reg.ru/api/regru2/";

/// Path segment that prefixes every zone action (`zone/<action>`)
pub const ZONE_SERVICE: &str = "zone";

/// Value of the envelope `result` field that indicates success
pub const RESULT_SUCCESS: &str = "success";

/// Output format requested for every call
pub const OUTPUT_CONTENT_TYPE_PLAIN: &str = "plain";

/// Form parameter carrying the JSON payload for complex requests
pub const FORM_INPUT_DATA: &str = "input_data";

/// Form parameter declaring the payload format of `input_data`
pub const FORM_INPUT_FORMAT: &str = "input_format";

/// Payload format used for `input_data`
pub const INPUT_FORMAT_JSON: &str = "json";

/// Form parameter carrying the API username
pub const FORM_USERNAME: &str = "username";

/// Form parameter carrying the API password
pub const FORM_PASSWORD: &str = "password";

// ============================================================================
// Zone Actions
// ============================================================================

/// Action that creates an A record
pub const ACTION_ADD_ALIAS: &str = "add_alias";

/// Action that creates an AAAA record
pub const ACTION_ADD_AAAA: &str = "add_aaaa";

/// Action that creates a CNAME record
pub const ACTION_ADD_CNAME: &str = "add_cname";

/// Action that creates an MX record
pub const ACTION_ADD_MX: &str = "add_mx";

/// Action that creates a TXT record
pub const ACTION_ADD_TXT: &str = "add_txt";

/// Action that removes a record of any type
pub const ACTION_REMOVE_RECORD: &str = "remove_record";

// ============================================================================
// Transport Constants
// ============================================================================

/// Request timeout for the basic (password only) transport
pub const BASIC_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Request timeout for the mutual TLS transport
pub const MTLS_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Environment Variables
// ============================================================================

/// Environment variable holding the API username
pub const ENV_API_USERNAME: &str = "REGRU_API_USERNAME";

/// Environment variable holding the API password
pub const ENV_API_PASSWORD: &str = "REGRU_API_PASSWORD";

/// Environment variable overriding the API endpoint
pub const ENV_API_ENDPOINT: &str = "REGRU_API_ENDPOINT";

/// Environment variable holding the client certificate path
pub const ENV_CERT_FILE: &str = "REGRU_CERT_FILE";

/// Environment variable holding the client private key path
pub const ENV_KEY_FILE: &str = "REGRU_KEY_FILE";

// ============================================================================
// Resource Schema
// ============================================================================

/// Name under which the DNS record resource is registered
pub const RESOURCE_DNS_RECORD: &str = "regru_dns_record";

/// Record type attribute (`A`, `AAAA`, `CNAME`, `MX`, `TXT`)
pub const ATTR_TYPE: &str = "type";

/// Subdomain label attribute
pub const ATTR_NAME: &str = "name";

/// Record content attribute
pub const ATTR_RECORD: &str = "record";

/// Zone (domain) attribute
pub const ATTR_ZONE: &str = "zone";
