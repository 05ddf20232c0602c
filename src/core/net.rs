// src/core/net.rs
//
// Blocking HTTP plumbing shared by the gateway: client setup and turning a
// response into JSON, bytes, or a GatewayError.

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::consts::USER_AGENT;
use crate::config::options::ApiOptions;
use crate::error::{GatewayError, Result};

pub fn build_client(api: &ApiOptions) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    // timeout(None) disables reqwest's 30s default
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(api.timeout)
        .build()?;
    Ok(client)
}

/// Pass 2xx responses through; anything else becomes `Status`, using the
/// body's `error` field as the message when the server sent one.
pub fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let code = status.as_u16();
    let body = resp.bytes().unwrap_or_default();
    let message = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {code}"));

    logd!("HTTP: {} {}", code, message);
    Err(GatewayError::Status { status: code, message })
}

pub fn read_json(resp: Response) -> Result<Value> {
    let resp = check_status(resp)?;
    let body = resp.bytes()?;
    if body.is_empty() {
        return Err(GatewayError::EmptyBody);
    }
    Ok(serde_json::from_slice(&body)?)
}

/// Raw body of a download. An empty body is an error.
pub fn read_blob(resp: Response) -> Result<Vec<u8>> {
    let resp = check_status(resp)?;
    let body = resp.bytes()?;
    if body.is_empty() {
        return Err(GatewayError::EmptyBody);
    }
    Ok(body.to_vec())
}
