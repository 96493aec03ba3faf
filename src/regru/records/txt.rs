// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! TXT record parameters.

use super::create_request;
use crate::regru::types::{CreateRecordRequest, RecordData, RecordType};

/// Build an `add_txt` request. The text is sent verbatim, without quoting.
#[must_use]
pub fn build_txt_request(zone: &str, name: &str, text: &str) -> CreateRecordRequest {
    create_request(
        RecordType::TXT,
        zone,
        name,
        RecordData::Text {
            text: text.to_string(),
        },
    )
}
