// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use regru_dns::regru::{Credentials, RegruClient, TransportConfig};
use serde_json::Value;
use std::collections::HashMap;
use wiremock::{MockServer, Request};

pub const TEST_USERNAME: &str = "test";
pub const TEST_PASSWORD: &str = "test";

/// Build a basic-transport client pointed at the mock registrar.
pub fn client_for(server: &MockServer) -> RegruClient {
    RegruClient::new(
        Credentials::new(TEST_USERNAME, TEST_PASSWORD),
        Some(&format!("{}/api/regru2/", server.uri())),
        &TransportConfig::Basic,
    )
    .expect("client should build against mock server")
}

/// Decode a form-encoded request body.
pub fn form_fields(request: &Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Decode the `input_data` JSON payload of a request.
pub fn input_data(request: &Request) -> Value {
    let fields = form_fields(request);
    let raw = fields
        .get("input_data")
        .expect("request should carry input_data");
    serde_json::from_str(raw).expect("input_data should be JSON")
}

/// All requests the mock registrar has seen.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
}
