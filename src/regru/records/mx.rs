// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! MX record parameters.

use super::create_request;
use crate::dns_errors::ValidationError;
use crate::regru::types::{CreateRecordRequest, RecordData, RecordType};

/// Split an MX value of the form `priority mailserver`.
///
/// The value must contain exactly two whitespace-separated tokens. The
/// priority is kept as text; the registrar validates its range.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMxValue`] for any other token count.
pub fn parse_mx_value(value: &str) -> Result<(String, String), ValidationError> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    match tokens.as_slice() {
        [priority, mail_server] => Ok(((*priority).to_string(), (*mail_server).to_string())),
        _ => Err(ValidationError::InvalidMxValue {
            value: value.to_string(),
            tokens: tokens.len(),
        }),
    }
}

/// Build an `add_mx` request from a `priority mailserver` value.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMxValue`] if `value` is malformed.
pub fn build_mx_request(
    zone: &str,
    name: &str,
    value: &str,
) -> Result<CreateRecordRequest, ValidationError> {
    let (priority, mail_server) = parse_mx_value(value)?;

    Ok(create_request(
        RecordType::MX,
        zone,
        name,
        RecordData::MailExchange {
            priority,
            mail_server,
        },
    ))
}

#[cfg(test)]
#[path = "mx_tests.rs"]
mod mx_tests;
