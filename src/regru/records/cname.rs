// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CNAME record parameters.

use super::create_request;
use crate::regru::types::{CreateRecordRequest, RecordData, RecordType};

/// Build an `add_cname` request pointing `name` at `target`.
#[must_use]
pub fn build_cname_request(zone: &str, name: &str, target: &str) -> CreateRecordRequest {
    create_request(
        RecordType::CNAME,
        zone,
        name,
        RecordData::CanonicalName {
            canonical_name: target.to_string(),
        },
    )
}
