//! Location operation catalogue.
//!
//! Every operation is declared once with its HTTP method, URI template, host
//! prefix, and input/output shapes. The table drives the operation enum, the
//! name lookup, and the [`LocationInput`] implementations.

use std::fmt;

use serde::Serialize;

use crate::input::{
    AssociateTrackerConsumerInput, BatchDeleteDevicePositionHistoryInput,
    BatchDeleteGeofenceInput, BatchEvaluateGeofencesInput, BatchGetDevicePositionInput,
    BatchPutGeofenceInput, BatchUpdateDevicePositionInput, CalculateRouteInput,
    CalculateRouteMatrixInput, CreateGeofenceCollectionInput, CreateMapInput,
    CreatePlaceIndexInput, CreateRouteCalculatorInput, CreateTrackerInput,
    DeleteGeofenceCollectionInput, DeleteMapInput, DeletePlaceIndexInput,
    DeleteRouteCalculatorInput, DeleteTrackerInput, DescribeGeofenceCollectionInput,
    DescribeMapInput, DescribePlaceIndexInput, DescribeRouteCalculatorInput,
    DescribeTrackerInput, DisassociateTrackerConsumerInput, GetDevicePositionHistoryInput,
    GetDevicePositionInput, GetGeofenceInput, GetMapGlyphsInput, GetMapSpritesInput,
    GetMapStyleDescriptorInput, GetMapTileInput, ListDevicePositionsInput,
    ListGeofenceCollectionsInput, ListGeofencesInput, ListMapsInput, ListPlaceIndexesInput,
    ListRouteCalculatorsInput, ListTagsForResourceInput, ListTrackerConsumersInput,
    ListTrackersInput, PutGeofenceInput, SearchPlaceIndexForPositionInput,
    SearchPlaceIndexForTextInput, TagResourceInput, UntagResourceInput,
    UpdateGeofenceCollectionInput, UpdateMapInput, UpdatePlaceIndexInput,
    UpdateRouteCalculatorInput, UpdateTrackerInput,
};
use crate::output::{
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
use crate::schema::Shape;

/// An operation input: knows its operation and the output it produces.
pub trait LocationInput: Shape + Serialize {
    /// Output shape returned by the operation.
    type Output: Shape;

    /// The operation this input belongs to.
    const OPERATION: LocationOperation;
}

macro_rules! location_operations {
    (
        $(
            $(#[$doc:meta])*
            $op:ident => $method:ident $uri:literal @ $prefix:literal, $input:ty => $output:ty;
        )+
    ) => {
        /// All location operations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LocationOperation {
            $(
                $(#[$doc])*
                $op,
            )+
        }

        impl LocationOperation {
            /// Every operation, in catalogue order.
            pub const ALL: &'static [Self] = &[$(Self::$op),+];

            /// Returns the AWS operation name string.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$op => stringify!($op),)+
                }
            }

            /// Parse an operation name string into a `LocationOperation`.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($op) => Some(Self::$op),)+
                    _ => None,
                }
            }

            /// HTTP method of the operation.
            #[must_use]
            pub fn method(&self) -> http::Method {
                match self {
                    $(Self::$op => http::Method::$method,)+
                }
            }

            /// URI template with `{Label}` placeholders.
            #[must_use]
            pub fn uri_template(&self) -> &'static str {
                match self {
                    $(Self::$op => $uri,)+
                }
            }

            /// Host prefix prepended to the regional endpoint.
            #[must_use]
            pub fn host_prefix(&self) -> &'static str {
                match self {
                    $(Self::$op => $prefix,)+
                }
            }
        }

        $(
            impl LocationInput for $input {
                type Output = $output;
                const OPERATION: LocationOperation = LocationOperation::$op;
            }
        )+
    };
}

location_operations! {
    // Tracking
    /// Associate a geofence collection with a tracker.
    AssociateTrackerConsumer => POST "/tracking/v0/trackers/{TrackerName}/consumers" @ "tracking.",
        AssociateTrackerConsumerInput => AssociateTrackerConsumerOutput;
    /// Delete the position history of several devices.
    BatchDeleteDevicePositionHistory => POST "/tracking/v0/trackers/{TrackerName}/delete-positions" @ "tracking.",
        BatchDeleteDevicePositionHistoryInput => BatchDeleteDevicePositionHistoryOutput;
    /// Get the latest positions of several devices.
    BatchGetDevicePosition => POST "/tracking/v0/trackers/{TrackerName}/get-positions" @ "tracking.",
        BatchGetDevicePositionInput => BatchGetDevicePositionOutput;
    /// Upload position updates for several devices.
    BatchUpdateDevicePosition => POST "/tracking/v0/trackers/{TrackerName}/positions" @ "tracking.",
        BatchUpdateDevicePositionInput => BatchUpdateDevicePositionOutput;
    /// Create a tracker.
    CreateTracker => POST "/tracking/v0/trackers" @ "tracking.",
        CreateTrackerInput => CreateTrackerOutput;
    /// Delete a tracker.
    DeleteTracker => DELETE "/tracking/v0/trackers/{TrackerName}" @ "tracking.",
        DeleteTrackerInput => DeleteTrackerOutput;
    /// Describe a tracker.
    DescribeTracker => GET "/tracking/v0/trackers/{TrackerName}" @ "tracking.",
        DescribeTrackerInput => DescribeTrackerOutput;
    /// Remove a geofence collection from a tracker.
    DisassociateTrackerConsumer => DELETE "/tracking/v0/trackers/{TrackerName}/consumers/{ConsumerArn}" @ "tracking.",
        DisassociateTrackerConsumerInput => DisassociateTrackerConsumerOutput;
    /// Get the latest position of a device.
    GetDevicePosition => GET "/tracking/v0/trackers/{TrackerName}/devices/{DeviceId}/positions/latest" @ "tracking.",
        GetDevicePositionInput => GetDevicePositionOutput;
    /// Get the position history of a device.
    GetDevicePositionHistory => POST "/tracking/v0/trackers/{TrackerName}/devices/{DeviceId}/list-positions" @ "tracking.",
        GetDevicePositionHistoryInput => GetDevicePositionHistoryOutput;
    /// List the latest positions of all devices of a tracker.
    ListDevicePositions => POST "/tracking/v0/trackers/{TrackerName}/list-positions" @ "tracking.",
        ListDevicePositionsInput => ListDevicePositionsOutput;
    /// List geofence collections associated with a tracker.
    ListTrackerConsumers => POST "/tracking/v0/trackers/{TrackerName}/list-consumers" @ "tracking.",
        ListTrackerConsumersInput => ListTrackerConsumersOutput;
    /// List trackers.
    ListTrackers => POST "/tracking/v0/list-trackers" @ "tracking.",
        ListTrackersInput => ListTrackersOutput;
    /// Update a tracker.
    UpdateTracker => PATCH "/tracking/v0/trackers/{TrackerName}" @ "tracking.",
        UpdateTrackerInput => UpdateTrackerOutput;

    // Geofencing
    /// Delete several geofences.
    BatchDeleteGeofence => POST "/geofencing/v0/collections/{CollectionName}/delete-geofences" @ "geofencing.",
        BatchDeleteGeofenceInput => BatchDeleteGeofenceOutput;
    /// Evaluate device positions against a collection's geofences.
    BatchEvaluateGeofences => POST "/geofencing/v0/collections/{CollectionName}/positions" @ "geofencing.",
        BatchEvaluateGeofencesInput => BatchEvaluateGeofencesOutput;
    /// Create or replace several geofences.
    BatchPutGeofence => POST "/geofencing/v0/collections/{CollectionName}/put-geofences" @ "geofencing.",
        BatchPutGeofenceInput => BatchPutGeofenceOutput;
    /// Create a geofence collection.
    CreateGeofenceCollection => POST "/geofencing/v0/collections" @ "geofencing.",
        CreateGeofenceCollectionInput => CreateGeofenceCollectionOutput;
    /// Delete a geofence collection.
    DeleteGeofenceCollection => DELETE "/geofencing/v0/collections/{CollectionName}" @ "geofencing.",
        DeleteGeofenceCollectionInput => DeleteGeofenceCollectionOutput;
    /// Describe a geofence collection.
    DescribeGeofenceCollection => GET "/geofencing/v0/collections/{CollectionName}" @ "geofencing.",
        DescribeGeofenceCollectionInput => DescribeGeofenceCollectionOutput;
    /// Get a geofence.
    GetGeofence => GET "/geofencing/v0/collections/{CollectionName}/geofences/{GeofenceId}" @ "geofencing.",
        GetGeofenceInput => GetGeofenceOutput;
    /// List geofence collections.
    ListGeofenceCollections => POST "/geofencing/v0/list-collections" @ "geofencing.",
        ListGeofenceCollectionsInput => ListGeofenceCollectionsOutput;
    /// List the geofences of a collection.
    ListGeofences => POST "/geofencing/v0/collections/{CollectionName}/list-geofences" @ "geofencing.",
        ListGeofencesInput => ListGeofencesOutput;
    /// Create or replace a geofence.
    PutGeofence => PUT "/geofencing/v0/collections/{CollectionName}/geofences/{GeofenceId}" @ "geofencing.",
        PutGeofenceInput => PutGeofenceOutput;
    /// Update a geofence collection.
    UpdateGeofenceCollection => PATCH "/geofencing/v0/collections/{CollectionName}" @ "geofencing.",
        UpdateGeofenceCollectionInput => UpdateGeofenceCollectionOutput;

    // Maps
    /// Create a map.
    CreateMap => POST "/maps/v0/maps" @ "maps.",
        CreateMapInput => CreateMapOutput;
    /// Delete a map.
    DeleteMap => DELETE "/maps/v0/maps/{MapName}" @ "maps.",
        DeleteMapInput => DeleteMapOutput;
    /// Describe a map.
    DescribeMap => GET "/maps/v0/maps/{MapName}" @ "maps.",
        DescribeMapInput => DescribeMapOutput;
    /// Get glyphs for a font stack.
    GetMapGlyphs => GET "/maps/v0/maps/{MapName}/glyphs/{FontStack}/{FontUnicodeRange}" @ "maps.",
        GetMapGlyphsInput => GetMapGlyphsOutput;
    /// Get a sprite sheet file.
    GetMapSprites => GET "/maps/v0/maps/{MapName}/sprites/{FileName}" @ "maps.",
        GetMapSpritesInput => GetMapSpritesOutput;
    /// Get the map style descriptor.
    GetMapStyleDescriptor => GET "/maps/v0/maps/{MapName}/style-descriptor" @ "maps.",
        GetMapStyleDescriptorInput => GetMapStyleDescriptorOutput;
    /// Get a vector or raster tile.
    GetMapTile => GET "/maps/v0/maps/{MapName}/tiles/{Z}/{X}/{Y}" @ "maps.",
        GetMapTileInput => GetMapTileOutput;
    /// List maps.
    ListMaps => POST "/maps/v0/list-maps" @ "maps.",
        ListMapsInput => ListMapsOutput;
    /// Update a map.
    UpdateMap => PATCH "/maps/v0/maps/{MapName}" @ "maps.",
        UpdateMapInput => UpdateMapOutput;

    // Places
    /// Create a place index.
    CreatePlaceIndex => POST "/places/v0/indexes" @ "places.",
        CreatePlaceIndexInput => CreatePlaceIndexOutput;
    /// Delete a place index.
    DeletePlaceIndex => DELETE "/places/v0/indexes/{IndexName}" @ "places.",
        DeletePlaceIndexInput => DeletePlaceIndexOutput;
    /// Describe a place index.
    DescribePlaceIndex => GET "/places/v0/indexes/{IndexName}" @ "places.",
        DescribePlaceIndexInput => DescribePlaceIndexOutput;
    /// List place indexes.
    ListPlaceIndexes => POST "/places/v0/list-indexes" @ "places.",
        ListPlaceIndexesInput => ListPlaceIndexesOutput;
    /// Reverse geocode a position.
    SearchPlaceIndexForPosition => POST "/places/v0/indexes/{IndexName}/search/position" @ "places.",
        SearchPlaceIndexForPositionInput => SearchPlaceIndexForPositionOutput;
    /// Geocode free-form text.
    SearchPlaceIndexForText => POST "/places/v0/indexes/{IndexName}/search/text" @ "places.",
        SearchPlaceIndexForTextInput => SearchPlaceIndexForTextOutput;
    /// Update a place index.
    UpdatePlaceIndex => PATCH "/places/v0/indexes/{IndexName}" @ "places.",
        UpdatePlaceIndexInput => UpdatePlaceIndexOutput;

    // Routes
    /// Calculate a route between two positions.
    CalculateRoute => POST "/routes/v0/calculators/{CalculatorName}/calculate/route" @ "routes.",
        CalculateRouteInput => CalculateRouteOutput;
    /// Calculate routes between sets of departure and destination positions.
    CalculateRouteMatrix => POST "/routes/v0/calculators/{CalculatorName}/calculate/route-matrix" @ "routes.",
        CalculateRouteMatrixInput => CalculateRouteMatrixOutput;
    /// Create a route calculator.
    CreateRouteCalculator => POST "/routes/v0/calculators" @ "routes.",
        CreateRouteCalculatorInput => CreateRouteCalculatorOutput;
    /// Delete a route calculator.
    DeleteRouteCalculator => DELETE "/routes/v0/calculators/{CalculatorName}" @ "routes.",
        DeleteRouteCalculatorInput => DeleteRouteCalculatorOutput;
    /// Describe a route calculator.
    DescribeRouteCalculator => GET "/routes/v0/calculators/{CalculatorName}" @ "routes.",
        DescribeRouteCalculatorInput => DescribeRouteCalculatorOutput;
    /// List route calculators.
    ListRouteCalculators => POST "/routes/v0/list-calculators" @ "routes.",
        ListRouteCalculatorsInput => ListRouteCalculatorsOutput;
    /// Update a route calculator.
    UpdateRouteCalculator => PATCH "/routes/v0/calculators/{CalculatorName}" @ "routes.",
        UpdateRouteCalculatorInput => UpdateRouteCalculatorOutput;

    // Tagging
    /// List the tags of a resource.
    ListTagsForResource => GET "/tags/{ResourceArn}" @ "metadata.",
        ListTagsForResourceInput => ListTagsForResourceOutput;
    /// Add tags to a resource.
    TagResource => POST "/tags/{ResourceArn}" @ "metadata.",
        TagResourceInput => TagResourceOutput;
    /// Remove tags from a resource.
    UntagResource => DELETE "/tags/{ResourceArn}" @ "metadata.",
        UntagResourceInput => UntagResourceOutput;
}

impl fmt::Display for LocationOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
