// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Lifecycle operations for the `regru_dns_record` resource.
//!
//! A record moves through two states:
//!
//! ```text
//! Absent --create--> Present(identity) --delete--> Absent
//! ```
//!
//! Records are immutable. Any change to a field is a delete followed by a create.
//!
//! # Read does not reconcile
//!
//! [`read_record`] never contacts the registrar and returns the held state as-is.
//! Changes made to the zone outside this tool are therefore not detected.

use crate::constants::{ACTION_REMOVE_RECORD, ZONE_SERVICE};
use crate::dns_errors::RegruError;
use crate::regru::client::to_params;
use crate::regru::records::{build_create_request, build_delete_request};
use crate::regru::{RecordType, ZoneApi};
use std::fmt;
use tracing::{debug, error, info};

/// A DNS record as declared in configuration.
///
/// Fields are kept as the orchestrator supplied them; the type is only parsed
/// when the record is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    /// Record type, case-insensitive (`A`, `AAAA`, `CNAME`, `MX`, `TXT`)
    pub record_type: String,
    /// Subdomain label relative to the zone
    pub name: String,
    /// Record content; MX values are `priority mailserver`
    pub value: String,
    /// Domain the record belongs to
    pub zone: String,
}

impl RecordDescriptor {
    #[must_use]
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            zone: zone.into(),
        }
    }

    /// Identity reported to the orchestrator: `<name>.<zone>`.
    #[must_use]
    pub fn identity(&self) -> RecordId {
        RecordId(format!("{}.{}", self.name, self.zone))
    }
}

/// Opaque resource identity held by the orchestrator.
///
/// It cannot be resolved back into a registrar record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resource state as tracked by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    Absent,
    Present(RecordId),
}

/// Create the record at the registrar.
///
/// 1. Parse the record type and select its `zone/add_*` action
/// 2. Build the type-specific parameters
/// 3. Send them and require an all-success envelope
///
/// # Returns
///
/// The identity `<name>.<zone>` on success.
///
/// # Errors
///
/// - `Validation` for an unsupported type or malformed MX value (nothing is sent)
/// - `Transport`, `Remote` or `Decode` errors from the call, unchanged
pub async fn create_record<A>(api: &A, record: &RecordDescriptor) -> Result<RecordId, RegruError>
where
    A: ZoneApi + ?Sized,
{
    let record_type: RecordType = record.record_type.parse()?;
    let action = record_type.create_action();
    let request = build_create_request(record_type, &record.zone, &record.name, &record.value)?;

    info!(
        record_type = %record_type,
        action = action,
        zone = %record.zone,
        name = %record.name,
        "Creating DNS record"
    );

    let params = to_params(&request)?;
    let envelope = api.send(&params, &[ZONE_SERVICE, action]).await?;
    if let Err(e) = envelope.has_error() {
        error!(
            record_type = %record_type,
            zone = %record.zone,
            name = %record.name,
            error = %e,
            "Registrar rejected record creation"
        );
        return Err(e.into());
    }

    let id = record.identity();
    info!(id = %id, "Created DNS record");
    Ok(id)
}

/// Report the held state without contacting the registrar.
///
/// This never fails and never detects drift.
///
/// # Errors
///
/// None; the `Result` keeps the signature aligned with the other operations.
pub fn read_record(
    record: &RecordDescriptor,
    state: &ResourceState,
) -> Result<ResourceState, RegruError> {
    debug!(
        zone = %record.zone,
        name = %record.name,
        state = ?state,
        "Read is not reconciled against the registrar"
    );
    Ok(state.clone())
}

/// Remove the record from the registrar.
///
/// The record type is sent upper-cased and is not validated locally.
///
/// # Errors
///
/// `Transport`, `Remote` or `Decode` errors from the call, unchanged.
pub async fn delete_record<A>(api: &A, record: &RecordDescriptor) -> Result<(), RegruError>
where
    A: ZoneApi + ?Sized,
{
    let request = build_delete_request(
        &record.record_type,
        &record.zone,
        &record.name,
        &record.value,
    );

    info!(
        record_type = %request.record_type,
        zone = %record.zone,
        name = %record.name,
        "Deleting DNS record"
    );

    let params = to_params(&request)?;
    let envelope = api.send(&params, &[ZONE_SERVICE, ACTION_REMOVE_RECORD]).await?;
    if let Err(e) = envelope.has_error() {
        error!(
            zone = %record.zone,
            name = %record.name,
            error = %e,
            "Registrar rejected record deletion"
        );
        return Err(e.into());
    }

    info!(id = %record.identity(), "Deleted DNS record");
    Ok(())
}

#[cfg(test)]
#[path = "record_resource_tests.rs"]
mod record_resource_tests;
