// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Parameter builders for the Reg.ru zone actions.
//!
//! Each record type has its own submodule that knows the field names the
//! matching `zone/add_*` action expects. This module dispatches on the record
//! type and builds the `zone/remove_record` request shared by all types.

pub mod a;
pub mod cname;
pub mod mx;
pub mod txt;

use super::types::{
    CreateRecordRequest, DeleteRecordRequest, DomainName, RecordData, RecordType, ZoneRef,
};
use crate::constants::OUTPUT_CONTENT_TYPE_PLAIN;
use crate::dns_errors::ValidationError;
use tracing::debug;

/// Zone reference in the shape the create action for `record_type` expects.
///
/// A and AAAA take `domain_name`; CNAME, MX and TXT only accept a one-element
/// `domains` list.
#[must_use]
pub fn zone_ref_for(record_type: RecordType, zone: &str) -> ZoneRef {
    if record_type.uses_domain_list() {
        ZoneRef::listed(zone)
    } else {
        ZoneRef::direct(zone)
    }
}

/// Build the parameters for creating a record of `record_type`.
///
/// # Arguments
///
/// * `record_type` - Parsed record type
/// * `zone` - The domain the record belongs to (e.g., "example.com")
/// * `name` - Subdomain label (e.g., "www" or "@")
/// * `value` - Record content; its format depends on the type
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMxValue`] if an MX value is not `priority mailserver`.
pub fn build_create_request(
    record_type: RecordType,
    zone: &str,
    name: &str,
    value: &str,
) -> Result<CreateRecordRequest, ValidationError> {
    let request = match record_type {
        RecordType::A | RecordType::AAAA => {
            a::build_address_request(record_type, zone, name, value)
        }
        RecordType::CNAME => cname::build_cname_request(zone, name, value),
        RecordType::MX => mx::build_mx_request(zone, name, value)?,
        RecordType::TXT => txt::build_txt_request(zone, name, value),
    };

    debug!(
        record_type = %record_type,
        action = record_type.create_action(),
        zone = %zone,
        subdomain = %name,
        "Built create request"
    );

    Ok(request)
}

/// Build the parameters for `zone/remove_record`.
///
/// The record type is upper-cased but not validated; the registrar decides
/// whether it recognizes it.
#[must_use]
pub fn build_delete_request(
    record_type: &str,
    zone: &str,
    name: &str,
    value: &str,
) -> DeleteRecordRequest {
    DeleteRecordRequest {
        domains: vec![DomainName::new(zone)],
        subdomain: name.to_string(),
        content: value.to_string(),
        record_type: record_type.to_uppercase(),
        output_content_type: OUTPUT_CONTENT_TYPE_PLAIN.to_string(),
    }
}

/// Common create parameters with the type-specific `data` filled in.
pub(crate) fn create_request(
    record_type: RecordType,
    zone: &str,
    name: &str,
    data: RecordData,
) -> CreateRecordRequest {
    CreateRecordRequest {
        zone: zone_ref_for(record_type, zone),
        subdomain: name.to_string(),
        output_content_type: OUTPUT_CONTENT_TYPE_PLAIN.to_string(),
        data,
    }
}
