//! Location input to HTTP request serialization.
//!
//! The input is serialized to a JSON object once. Every member bound to the
//! URI, query string, or headers by the shape schema is then moved out of the
//! object into its place; the members left over form the JSON body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use geostack_core::ClientConfig;
use geostack_location_model::operations::LocationInput;
use geostack_location_model::schema::{FieldKind, HttpBinding};
use geostack_location_model::validate::validate;
use http::header::{CONTENT_TYPE, HOST, HeaderValue, USER_AGENT};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Map, Value};

use crate::body::LocationBody;
use crate::error::SdkError;

/// Content type of JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything except unreserved characters (`A-Z a-z 0-9 - _ . ~`).
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the HTTP request for an operation input.
///
/// When `config.validate_requests` is set, the input is checked against its
/// schema first and nothing is built if a constraint fails.
///
/// # Errors
/// Returns [`SdkError::Validation`] for constraint violations and
/// [`SdkError::Construction`] when a label is missing or empty or the
/// endpoint cannot be resolved.
pub fn encode_request<I: LocationInput>(
    input: &I,
    config: &ClientConfig,
) -> Result<http::Request<LocationBody>, SdkError> {
    if config.validate_requests {
        validate(input)?;
    }

    let op = I::OPERATION;
    let endpoint = config.resolve_endpoint(op.host_prefix())?;

    let mut members = match serde_json::to_value(input) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(SdkError::Construction(format!("{op} input is not a structure"))),
        Err(e) => return Err(SdkError::Construction(e.to_string())),
    };

    let mut path = op.uri_template().to_owned();
    let mut query: Vec<(&str, String)> = Vec::new();
    let mut headers: Vec<(&str, String)> = Vec::new();
    let mut payload = None;

    for field in I::SCHEMA.fields {
        if field.binding == HttpBinding::Body {
            continue;
        }
        let value = members.remove(field.wire_name).filter(|v| !v.is_null());
        match field.binding {
            HttpBinding::Label => {
                let value = value.ok_or_else(|| {
                    SdkError::Construction(format!("label {} is missing", field.wire_name))
                })?;
                let text = scalar_to_string(field.wire_name, &value)?;
                if text.is_empty() {
                    return Err(SdkError::Construction(format!(
                        "label {} is empty",
                        field.wire_name
                    )));
                }
                let placeholder = format!("{{{}}}", field.wire_name);
                let encoded = utf8_percent_encode(&text, URI_ENCODE_SET).to_string();
                path = path.replace(&placeholder, &encoded);
            }
            HttpBinding::Query(name) => match value {
                Some(Value::Array(items)) => {
                    for item in &items {
                        query.push((name, scalar_to_string(field.wire_name, item)?));
                    }
                }
                Some(v) => query.push((name, scalar_to_string(field.wire_name, &v)?)),
                None => {}
            },
            HttpBinding::Header(name) => {
                if let Some(v) = value {
                    headers.push((name, scalar_to_string(field.wire_name, &v)?));
                }
            }
            HttpBinding::Payload => {
                payload = value
                    .map(|v| payload_bytes(field.wire_name, &field.member.kind, &v))
                    .transpose()?;
            }
            HttpBinding::Body => {}
        }
    }

    if path.contains('{') {
        return Err(SdkError::Construction(format!(
            "unresolved label in {path} for {op}"
        )));
    }

    let mut uri = format!("{}://{}{}", endpoint.scheme(), endpoint.authority(), path);
    if !query.is_empty() {
        let pairs: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{k}={}", utf8_percent_encode(v, URI_ENCODE_SET)))
            .collect();
        uri.push('?');
        uri.push_str(&pairs.join("&"));
    }

    let method = op.method();
    let (body, content_type) = match payload {
        Some(bytes) => (LocationBody::from_bytes(bytes), None),
        None if !members.is_empty() || carries_body(&method) => {
            let json = body_to_json(&members)?;
            (LocationBody::from_json(json), Some(JSON_CONTENT_TYPE))
        }
        None => (LocationBody::empty(), None),
    };

    let mut builder = http::Request::builder()
        .method(method)
        .uri(uri)
        .header(HOST, endpoint.authority())
        .header(USER_AGENT, config.user_agent.as_str());
    if let Some(ct) = content_type {
        builder = builder.header(CONTENT_TYPE, ct);
    }
    for (name, value) in headers {
        let hv = HeaderValue::from_str(&value)
            .map_err(|e| SdkError::Construction(format!("header {name}: {e}")))?;
        builder = builder.header(name, hv);
    }

    builder
        .body(body)
        .map_err(|e| SdkError::Construction(e.to_string()))
}

/// `POST`, `PUT` and `PATCH` always send a JSON document, even when empty.
fn carries_body(method: &http::Method) -> bool {
    *method == http::Method::POST || *method == http::Method::PUT || *method == http::Method::PATCH
}

fn body_to_json(members: &Map<String, Value>) -> Result<Vec<u8>, SdkError> {
    serde_json::to_vec(members).map_err(|e| SdkError::Construction(e.to_string()))
}

fn scalar_to_string(wire_name: &str, value: &Value) -> Result<String, SdkError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(SdkError::Construction(format!(
            "{wire_name} cannot be bound outside the body"
        ))),
    }
}

fn payload_bytes(wire_name: &str, kind: &FieldKind, value: &Value) -> Result<Vec<u8>, SdkError> {
    let text = scalar_to_string(wire_name, value)?;
    match kind {
        FieldKind::Blob => STANDARD
            .decode(text)
            .map_err(|e| SdkError::Construction(format!("{wire_name}: {e}"))),
        _ => Ok(text.into_bytes()),
    }
}
