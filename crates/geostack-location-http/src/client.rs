//! Location client and the transport boundary.
//!
//! [`LocationClient`] turns typed inputs into HTTP requests, hands them to an
//! [`HttpTransport`], and decodes what comes back. The transport owns the
//! network: connection reuse, signing, retries, and timeouts all live behind
//! it.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use geostack_core::ClientConfig;
use geostack_location_model::operations::LocationInput;
use geostack_location_model::{input, output};
use tracing::{Instrument, debug, debug_span};

use crate::body::LocationBody;
use crate::error::{SdkError, TransportError};
use crate::paginate::{PaginatedInput, Paginator};
use crate::request::encode_request;
use crate::response::{FromLocationResponse, decode_response};

/// Future returned by [`HttpTransport::send`].
pub type TransportFuture =
    Pin<Box<dyn Future<Output = Result<http::Response<Bytes>, TransportError>> + Send>>;

/// Trait that the HTTP dispatcher must implement.
///
/// The transport receives a fully built request and returns the buffered
/// response. This trait is the boundary between request marshalling and the
/// network.
pub trait HttpTransport: Send + Sync + 'static {
    /// Send a request and buffer its response.
    fn send(&self, request: http::Request<LocationBody>) -> TransportFuture;
}

/// Error returned by [`NotConnectedTransport`].
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("no HTTP transport is configured")]
pub struct NotConnected;

/// Default transport that fails every request.
#[derive(Debug, Clone, Default)]
pub struct NotConnectedTransport;

impl HttpTransport for NotConnectedTransport {
    fn send(&self, _request: http::Request<LocationBody>) -> TransportFuture {
        Box::pin(async {
            Err::<http::Response<Bytes>, _>(Box::new(NotConnected) as TransportError)
        })
    }
}

/// Typed client for the location service.
#[derive(Debug, Clone)]
pub struct LocationClient<T = NotConnectedTransport> {
    config: ClientConfig,
    transport: T,
}

impl Default for LocationClient {
    fn default() -> Self {
        Self::new(ClientConfig::default(), NotConnectedTransport)
    }
}

impl<T: HttpTransport> LocationClient<T> {
    /// Create a client over the given transport.
    #[must_use]
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate, encode, dispatch, and decode one call.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Validation`] before any I/O when the input breaks
    /// a schema constraint, [`SdkError::Service`] when the service rejects
    /// the call, and [`SdkError::Transport`] when no response arrives.
    pub async fn send<I>(&self, input: &I) -> Result<I::Output, SdkError>
    where
        I: LocationInput,
        I::Output: FromLocationResponse,
    {
        let op = I::OPERATION;
        let span = debug_span!("location_call", operation = %op);
        async move {
            let request = encode_request(input, &self.config)?;
            debug!(method = %request.method(), uri = %request.uri(), "dispatching location request");

            let response = self
                .transport
                .send(request)
                .await
                .map_err(SdkError::Transport)?;
            debug!(status = %response.status(), "received location response");

            let result = decode_response(response);
            if let Err(e) = &result {
                debug!(error = %e, "location call failed");
            }
            result
        }
        .instrument(span)
        .await
    }

    /// Page through a list operation, starting from `input`.
    pub fn paginate<I>(&self, input: I) -> Paginator<'_, T, I>
    where
        I: PaginatedInput,
        I::Output: FromLocationResponse,
    {
        Paginator::new(self, input)
    }
}

/// One typed method per operation.
macro_rules! client_operations {
    ($($method:ident($input:ident) -> $output:ident;)+) => {
        impl<T: HttpTransport> LocationClient<T> {
            $(
                #[doc = concat!("Send a `", stringify!($input), "`.")]
                ///
                /// # Errors
                ///
                /// See [`LocationClient::send`].
                pub async fn $method(
                    &self,
                    input: input::$input,
                ) -> Result<output::$output, SdkError> {
                    self.send(&input).await
                }
            )+
        }
    };
}

client_operations! {
    associate_tracker_consumer(AssociateTrackerConsumerInput) -> AssociateTrackerConsumerOutput;
    batch_delete_device_position_history(BatchDeleteDevicePositionHistoryInput) -> BatchDeleteDevicePositionHistoryOutput;
    batch_get_device_position(BatchGetDevicePositionInput) -> BatchGetDevicePositionOutput;
    batch_update_device_position(BatchUpdateDevicePositionInput) -> BatchUpdateDevicePositionOutput;
    create_tracker(CreateTrackerInput) -> CreateTrackerOutput;
    delete_tracker(DeleteTrackerInput) -> DeleteTrackerOutput;
    describe_tracker(DescribeTrackerInput) -> DescribeTrackerOutput;
    disassociate_tracker_consumer(DisassociateTrackerConsumerInput) -> DisassociateTrackerConsumerOutput;
    get_device_position(GetDevicePositionInput) -> GetDevicePositionOutput;
    get_device_position_history(GetDevicePositionHistoryInput) -> GetDevicePositionHistoryOutput;
    list_device_positions(ListDevicePositionsInput) -> ListDevicePositionsOutput;
    list_tracker_consumers(ListTrackerConsumersInput) -> ListTrackerConsumersOutput;
    list_trackers(ListTrackersInput) -> ListTrackersOutput;
    update_tracker(UpdateTrackerInput) -> UpdateTrackerOutput;
    batch_delete_geofence(BatchDeleteGeofenceInput) -> BatchDeleteGeofenceOutput;
    batch_evaluate_geofences(BatchEvaluateGeofencesInput) -> BatchEvaluateGeofencesOutput;
    batch_put_geofence(BatchPutGeofenceInput) -> BatchPutGeofenceOutput;
    create_geofence_collection(CreateGeofenceCollectionInput) -> CreateGeofenceCollectionOutput;
    delete_geofence_collection(DeleteGeofenceCollectionInput) -> DeleteGeofenceCollectionOutput;
    describe_geofence_collection(DescribeGeofenceCollectionInput) -> DescribeGeofenceCollectionOutput;
    get_geofence(GetGeofenceInput) -> GetGeofenceOutput;
    list_geofence_collections(ListGeofenceCollectionsInput) -> ListGeofenceCollectionsOutput;
    list_geofences(ListGeofencesInput) -> ListGeofencesOutput;
    put_geofence(PutGeofenceInput) -> PutGeofenceOutput;
    update_geofence_collection(UpdateGeofenceCollectionInput) -> UpdateGeofenceCollectionOutput;
    create_map(CreateMapInput) -> CreateMapOutput;
    delete_map(DeleteMapInput) -> DeleteMapOutput;
    describe_map(DescribeMapInput) -> DescribeMapOutput;
    get_map_glyphs(GetMapGlyphsInput) -> GetMapGlyphsOutput;
    get_map_sprites(GetMapSpritesInput) -> GetMapSpritesOutput;
    get_map_style_descriptor(GetMapStyleDescriptorInput) -> GetMapStyleDescriptorOutput;
    get_map_tile(GetMapTileInput) -> GetMapTileOutput;
    list_maps(ListMapsInput) -> ListMapsOutput;
    update_map(UpdateMapInput) -> UpdateMapOutput;
    create_place_index(CreatePlaceIndexInput) -> CreatePlaceIndexOutput;
    delete_place_index(DeletePlaceIndexInput) -> DeletePlaceIndexOutput;
    describe_place_index(DescribePlaceIndexInput) -> DescribePlaceIndexOutput;
    list_place_indexes(ListPlaceIndexesInput) -> ListPlaceIndexesOutput;
    search_place_index_for_position(SearchPlaceIndexForPositionInput) -> SearchPlaceIndexForPositionOutput;
    search_place_index_for_text(SearchPlaceIndexForTextInput) -> SearchPlaceIndexForTextOutput;
    update_place_index(UpdatePlaceIndexInput) -> UpdatePlaceIndexOutput;
    calculate_route(CalculateRouteInput) -> CalculateRouteOutput;
    calculate_route_matrix(CalculateRouteMatrixInput) -> CalculateRouteMatrixOutput;
    create_route_calculator(CreateRouteCalculatorInput) -> CreateRouteCalculatorOutput;
    delete_route_calculator(DeleteRouteCalculatorInput) -> DeleteRouteCalculatorOutput;
    describe_route_calculator(DescribeRouteCalculatorInput) -> DescribeRouteCalculatorOutput;
    list_route_calculators(ListRouteCalculatorsInput) -> ListRouteCalculatorsOutput;
    update_route_calculator(UpdateRouteCalculatorInput) -> UpdateRouteCalculatorOutput;
    list_tags_for_resource(ListTagsForResourceInput) -> ListTagsForResourceOutput;
    tag_resource(TagResourceInput) -> TagResourceOutput;
    untag_resource(UntagResourceInput) -> UntagResourceOutput;}
