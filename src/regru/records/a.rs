// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! A and AAAA record parameters.

use super::create_request;
use crate::regru::types::{CreateRecordRequest, RecordData, RecordType};

/// Build an `add_alias` (A) or `add_aaaa` (AAAA) request.
///
/// Both actions take the address under `ipaddr` and the zone as `domain_name`.
/// The address is passed through as given; the registrar validates it.
#[must_use]
pub fn build_address_request(
    record_type: RecordType,
    zone: &str,
    name: &str,
    address: &str,
) -> CreateRecordRequest {
    create_request(
        record_type,
        zone,
        name,
        RecordData::Address {
            ipaddr: address.to_string(),
        },
    )
}
