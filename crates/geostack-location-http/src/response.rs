//! HTTP response to location output deserialization.
//!
//! Success responses decode into the operation's output shape: JSON outputs
//! through serde (unknown members are ignored, an empty body is the default
//! output), and the map resource outputs from the raw payload plus headers.
//! Any other status is dispatched to a [`LocationError`].

use bytes::Bytes;
use geostack_location_model::error::{LocationError, LocationErrorCode, ValidationExceptionField};
use geostack_location_model::output::{
    AssociateTrackerConsumerOutput, BatchDeleteDevicePositionHistoryOutput,
    BatchDeleteGeofenceOutput, BatchEvaluateGeofencesOutput, BatchGetDevicePositionOutput,
    BatchPutGeofenceOutput, BatchUpdateDevicePositionOutput, CalculateRouteMatrixOutput,
    CalculateRouteOutput, CreateGeofenceCollectionOutput, CreateMapOutput,
    CreatePlaceIndexOutput, CreateRouteCalculatorOutput, CreateTrackerOutput,
    DeleteGeofenceCollectionOutput, DeleteMapOutput, DeletePlaceIndexOutput,
    DeleteRouteCalculatorOutput, DeleteTrackerOutput, DescribeGeofenceCollectionOutput,
    DescribeMapOutput, DescribePlaceIndexOutput, DescribeRouteCalculatorOutput,
    DescribeTrackerOutput, DisassociateTrackerConsumerOutput, GetDevicePositionHistoryOutput,
    GetDevicePositionOutput, GetGeofenceOutput, GetMapGlyphsOutput, GetMapSpritesOutput,
    GetMapStyleDescriptorOutput, GetMapTileOutput, ListDevicePositionsOutput,
    ListGeofenceCollectionsOutput, ListGeofencesOutput, ListMapsOutput, ListPlaceIndexesOutput,
    ListRouteCalculatorsOutput, ListTagsForResourceOutput, ListTrackerConsumersOutput,
    ListTrackersOutput, PutGeofenceOutput, SearchPlaceIndexForPositionOutput,
    SearchPlaceIndexForTextOutput, TagResourceOutput, UntagResourceOutput,
    UpdateGeofenceCollectionOutput, UpdateMapOutput, UpdatePlaceIndexOutput,
    UpdateRouteCalculatorOutput, UpdateTrackerOutput,
};
use geostack_location_model::types::ValidationExceptionReason;
use http::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderMap};
use serde_json::Value;

use crate::error::SdkError;

/// Header carrying the error code.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Headers carrying the request id, in lookup order.
pub const REQUEST_ID_HEADERS: [&str; 2] = ["x-amzn-requestid", "x-amz-request-id"];

/// Trait for building a location output from a success response.
///
/// Each operation's Output type implements this trait.
pub trait FromLocationResponse: Sized {
    /// Decode the output from the response head and buffered body.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Response`] if the body is not a valid document for
    /// this output.
    fn from_location_response(parts: &http::response::Parts, body: Bytes) -> Result<Self, SdkError>;
}

/// Decode a complete response into an output or a service error.
///
/// # Errors
///
/// Returns [`SdkError::Service`] for any non-2xx status and
/// [`SdkError::Response`] when a success body cannot be decoded.
pub fn decode_response<O: FromLocationResponse>(
    response: http::Response<Bytes>,
) -> Result<O, SdkError> {
    let (parts, body) = response.into_parts();
    if parts.status.is_success() {
        O::from_location_response(&parts, body)
    } else {
        Err(SdkError::Service(decode_error(&parts, &body)))
    }
}

/// Build a [`LocationError`] from an error response.
///
/// The code is taken from the `x-amzn-ErrorType` header, then the body's
/// `__type`, then its `code`. Codes this client does not model fall back to
/// the HTTP status while the raw code is kept.
#[must_use]
pub fn decode_error(parts: &http::response::Parts, body: &[u8]) -> LocationError {
    let doc: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    let raw_code = header_str(&parts.headers, ERROR_TYPE_HEADER)
        .map(str::to_owned)
        .or_else(|| string_member(&doc, "__type"))
        .or_else(|| string_member(&doc, "code"));
    let message = string_member(&doc, "message")
        .or_else(|| string_member(&doc, "Message"))
        .unwrap_or_else(|| {
            parts
                .status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_owned()
        });

    let mut err = match raw_code {
        Some(raw) => LocationError::from_raw_code(&raw, message),
        None => LocationError::with_message(LocationErrorCode::from_status(parts.status), message),
    };
    if err.code == LocationErrorCode::Unknown {
        err.code = LocationErrorCode::from_status(parts.status);
    }
    err = err.with_status(parts.status);

    if let Some(id) = REQUEST_ID_HEADERS
        .iter()
        .find_map(|h| header_str(&parts.headers, h))
    {
        err = err.with_request_id(id);
    }

    if err.code == LocationErrorCode::ValidationException {
        let reason = string_member(&doc, "reason").map(ValidationExceptionReason::from);
        let field_list = doc
            .get("fieldList")
            .cloned()
            .and_then(|v| serde_json::from_value::<Vec<ValidationExceptionField>>(v).ok())
            .unwrap_or_default();
        err = err.with_validation_details(reason, field_list);
    }

    err
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
}

fn string_member(doc: &Value, name: &str) -> Option<String> {
    doc.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn decode_json<O: serde::de::DeserializeOwned + Default>(
    parts: &http::response::Parts,
    body: &[u8],
) -> Result<O, SdkError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    serde_json::from_slice(body).map_err(|e| SdkError::Response {
        status: parts.status,
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// JSON document outputs
// ---------------------------------------------------------------------------

/// Outputs whose whole response body is a JSON document.
macro_rules! impl_json_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromLocationResponse for $ty {
                fn from_location_response(
                    parts: &http::response::Parts,
                    body: Bytes,
                ) -> Result<Self, SdkError> {
                    decode_json(parts, &body)
                }
            }
        )+
    };
}

impl_json_response!(
    AssociateTrackerConsumerOutput,
    BatchDeleteDevicePositionHistoryOutput,
    BatchGetDevicePositionOutput,
    BatchUpdateDevicePositionOutput,
    CreateTrackerOutput,
    DeleteTrackerOutput,
    DescribeTrackerOutput,
    DisassociateTrackerConsumerOutput,
    GetDevicePositionOutput,
    GetDevicePositionHistoryOutput,
    ListDevicePositionsOutput,
    ListTrackerConsumersOutput,
    ListTrackersOutput,
    UpdateTrackerOutput,
    BatchDeleteGeofenceOutput,
    BatchEvaluateGeofencesOutput,
    BatchPutGeofenceOutput,
    CreateGeofenceCollectionOutput,
    DeleteGeofenceCollectionOutput,
    DescribeGeofenceCollectionOutput,
    GetGeofenceOutput,
    ListGeofenceCollectionsOutput,
    ListGeofencesOutput,
    PutGeofenceOutput,
    UpdateGeofenceCollectionOutput,
    CreateMapOutput,
    DeleteMapOutput,
    DescribeMapOutput,
    ListMapsOutput,
    UpdateMapOutput,
    CreatePlaceIndexOutput,
    DeletePlaceIndexOutput,
    DescribePlaceIndexOutput,
    ListPlaceIndexesOutput,
    SearchPlaceIndexForPositionOutput,
    SearchPlaceIndexForTextOutput,
    UpdatePlaceIndexOutput,
    CalculateRouteOutput,
    CalculateRouteMatrixOutput,
    CreateRouteCalculatorOutput,
    DeleteRouteCalculatorOutput,
    DescribeRouteCalculatorOutput,
    ListRouteCalculatorsOutput,
    UpdateRouteCalculatorOutput,
    ListTagsForResourceOutput,
    TagResourceOutput,
    UntagResourceOutput,
);

// ---------------------------------------------------------------------------
// Raw payload outputs
// ---------------------------------------------------------------------------

/// Map resource outputs: the body is the blob, metadata comes from headers.
macro_rules! impl_payload_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromLocationResponse for $ty {
                fn from_location_response(
                    parts: &http::response::Parts,
                    body: Bytes,
                ) -> Result<Self, SdkError> {
                    Ok(Self {
                        blob: body.into(),
                        cache_control: header_str(&parts.headers, CACHE_CONTROL.as_str())
                            .map(str::to_owned),
                        content_type: header_str(&parts.headers, CONTENT_TYPE.as_str())
                            .map(str::to_owned),
                    })
                }
            }
        )+
    };
}

impl_payload_response!(
    GetMapGlyphsOutput,
    GetMapSpritesOutput,
    GetMapStyleDescriptorOutput,
    GetMapTileOutput,
);
