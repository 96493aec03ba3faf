// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP request handling for the Reg.ru API.
//!
//! This module turns a request payload into the form parameters the API expects,
//! performs exactly one HTTP call, and classifies the response. It never retries.

use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

use super::types::ResponseEnvelope;
use super::Credentials;
use crate::constants::{
    FORM_INPUT_DATA, FORM_INPUT_FORMAT, FORM_PASSWORD, FORM_USERNAME, INPUT_FORMAT_JSON,
};
use crate::dns_errors::{DecodeError, RegruError, RemoteError, TransportError};

/// Parse the configured endpoint into a base URL.
///
/// # Errors
///
/// Returns [`TransportError::InvalidEndpoint`] if the endpoint is not an absolute
/// URL that can carry a path.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, TransportError> {
    let url = Url::parse(endpoint).map_err(|e| TransportError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(TransportError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "endpoint cannot be a base URL".to_string(),
        });
    }

    Ok(url)
}

/// Append path segments to the base URL.
///
/// `https://api.reg.ru/api/regru2/` and `https://api.reg.ru/api/regru2` both give
/// `https://api.reg.ru/api/regru2/zone/add_alias` for `["zone", "add_alias"]`.
///
/// # Errors
///
/// Returns [`TransportError::InvalidEndpoint`] if the base cannot carry a path.
pub(crate) fn build_api_url(base: &Url, segments: &[&str]) -> Result<Url, TransportError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| TransportError::InvalidEndpoint {
            endpoint: base.to_string(),
            reason: "endpoint cannot be a base URL".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Serialize a typed request into the JSON object sent to the API.
///
/// # Errors
///
/// Returns [`DecodeError::RequestEncoding`] if serialization fails.
pub fn to_params<T: Serialize + ?Sized>(request: &T) -> Result<Value, DecodeError> {
    serde_json::to_value(request).map_err(|e| DecodeError::RequestEncoding {
        reason: e.to_string(),
    })
}

fn is_credential_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(FORM_USERNAME) || key.eq_ignore_ascii_case(FORM_PASSWORD)
}

/// Convert request parameters into form fields, without credentials.
///
/// If any top-level value is a list or an object the whole payload is sent as
/// JSON under `input_data` with `input_format=json`. Otherwise every scalar
/// becomes its own form field and nulls are dropped. Credential keys in the
/// payload are never copied; the caller attaches them separately.
///
/// # Errors
///
/// Returns [`DecodeError::RequestEncoding`] if `params` is not a JSON object.
pub(crate) fn encode_form(params: &Value) -> Result<Vec<(String, String)>, DecodeError> {
    let Value::Object(map) = params else {
        return Err(DecodeError::RequestEncoding {
            reason: format!("request must be a JSON object, got {params}"),
        });
    };

    let payload = map.iter().filter(|(key, _)| !is_credential_key(key));
    let has_complex_data = map.values().any(|v| v.is_array() || v.is_object());

    if has_complex_data {
        let payload: Map<String, Value> = payload
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let json_data =
            serde_json::to_string(&payload).map_err(|e| DecodeError::RequestEncoding {
                reason: e.to_string(),
            })?;

        return Ok(vec![
            (FORM_INPUT_FORMAT.to_string(), INPUT_FORMAT_JSON.to_string()),
            (FORM_INPUT_DATA.to_string(), json_data),
        ]);
    }

    Ok(payload
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key.clone(), s.clone())),
            other => Some((key.clone(), other.to_string())),
        })
        .collect())
}

/// Execute a single request against the Reg.ru API.
///
/// Credentials are always attached as `username` and `password` form fields.
///
/// # Arguments
/// * `client` - HTTP client (carries the timeout and any client certificate)
/// * `credentials` - API username and password
/// * `url` - Full URL of the action
/// * `timeout` - Client timeout, reported in timeout errors
/// * `params` - Request payload as a JSON object
///
/// # Errors
///
/// - [`TransportError`] if the request fails, times out, or a non-2xx body is not an envelope
/// - [`RemoteError::HttpStatus`] if a non-2xx body is an envelope
/// - [`DecodeError`] if the payload cannot be encoded or a 2xx body is not an envelope
pub(crate) async fn regru_request(
    client: &HttpClient,
    credentials: &Credentials,
    url: &Url,
    timeout: Duration,
    params: &Value,
) -> Result<ResponseEnvelope, RegruError> {
    let mut form = vec![
        (FORM_USERNAME.to_string(), credentials.username.clone()),
        (FORM_PASSWORD.to_string(), credentials.password.clone()),
    ];
    let payload = encode_form(params)?;
    debug!(
        url = %url,
        fields = ?payload.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>(),
        "Encoded request form"
    );
    form.extend(payload);

    info!(method = "POST", url = %url, "HTTP API request to Reg.ru");

    let response = client
        .post(url.clone())
        .form(&form)
        .send()
        .await
        .map_err(|e| transport_error(url, timeout, &e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(url, timeout, &e))?;

    if !status.is_success() {
        error!(
            url = %url,
            status = %status,
            body = %body,
            "HTTP API request failed"
        );
        return Err(match serde_json::from_str::<ResponseEnvelope>(&body) {
            Ok(envelope) => RemoteError::HttpStatus {
                status_code: status.as_u16(),
                result: envelope.result,
                error_code: envelope.error_code.unwrap_or_default(),
                error_text: envelope.error_text.unwrap_or_default(),
            }
            .into(),
            Err(_) => TransportError::UnexpectedStatus {
                endpoint: url.to_string(),
                status_code: status.as_u16(),
                body,
            }
            .into(),
        });
    }

    let envelope: ResponseEnvelope =
        serde_json::from_str(&body).map_err(|e| DecodeError::MalformedEnvelope {
            endpoint: url.to_string(),
            reason: e.to_string(),
        })?;

    info!(
        url = %url,
        status = %status,
        result = %envelope.result,
        "HTTP API request completed"
    );

    Ok(envelope)
}

fn transport_error(url: &Url, timeout: Duration, err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            endpoint: url.to_string(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    } else {
        TransportError::RequestFailed {
            endpoint: url.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
