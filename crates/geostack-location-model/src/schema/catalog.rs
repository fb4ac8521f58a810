//! Schemas of every location shape.

use super::members as m;
use super::{FieldSchema as F, Member, Shape, ShapeSchema};
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
use crate::types::{
    BatchDeleteDevicePositionHistoryError, BatchDeleteGeofenceError, BatchEvaluateGeofencesError,
    BatchGetDevicePositionError, BatchItemError, BatchPutGeofenceError,
    BatchPutGeofenceRequestEntry, BatchPutGeofenceSuccess, BatchUpdateDevicePositionError,
    CalculateRouteCarModeOptions, CalculateRouteMatrixSummary, CalculateRouteSummary,
    CalculateRouteTruckModeOptions, Circle, DataSourceConfiguration, DevicePosition,
    DevicePositionUpdate, GeofenceGeometry, Leg, LegGeometry, ListDevicePositionsResponseEntry,
    ListGeofenceCollectionsResponseEntry, ListGeofenceResponseEntry, ListMapsResponseEntry,
    ListPlaceIndexesResponseEntry, ListRouteCalculatorsResponseEntry, ListTrackersResponseEntry,
    MapConfiguration, Place, PlaceGeometry, PositionalAccuracy, RouteMatrixEntry,
    RouteMatrixEntryError, SearchForPositionResult, SearchForTextResult,
    SearchPlaceIndexForPositionSummary, SearchPlaceIndexForTextSummary, Step, TimeZone,
    TruckDimensions, TruckWeight,
};

// Nested structure members.
const BATCH_ITEM_ERROR: Member = Member::structure(BatchItemError::SCHEMA);
const ACCURACY: Member = Member::structure(PositionalAccuracy::SCHEMA);
const DEVICE_POSITION_UPDATE: Member = Member::structure(DevicePositionUpdate::SCHEMA);
const DEVICE_POSITION_UPDATES: Member = Member::list(&DEVICE_POSITION_UPDATE).length(1, 10);
const DEVICE_POSITION: Member = Member::structure(DevicePosition::SCHEMA);
const DEVICE_POSITIONS: Member = Member::list(&DEVICE_POSITION);
const CIRCLE: Member = Member::structure(Circle::SCHEMA);
const LINEAR_RING: Member = Member::list(&m::POSITION).min_length(4);
const POLYGON: Member = Member::list(&LINEAR_RING).min_length(1);
const GEOMETRY: Member = Member::structure(GeofenceGeometry::SCHEMA);
const PUT_GEOFENCE_ENTRY: Member = Member::structure(BatchPutGeofenceRequestEntry::SCHEMA);
const PUT_GEOFENCE_ENTRIES: Member = Member::list(&PUT_GEOFENCE_ENTRY).length(1, 10);
const MAP_CONFIGURATION: Member = Member::structure(MapConfiguration::SCHEMA);
const DATA_SOURCE_CONFIGURATION: Member = Member::structure(DataSourceConfiguration::SCHEMA);
const PLACE_GEOMETRY: Member = Member::structure(PlaceGeometry::SCHEMA);
const TIME_ZONE: Member = Member::structure(TimeZone::SCHEMA);
const PLACE: Member = Member::structure(Place::SCHEMA);
const CAR_OPTIONS: Member = Member::structure(CalculateRouteCarModeOptions::SCHEMA);
const TRUCK_OPTIONS: Member = Member::structure(CalculateRouteTruckModeOptions::SCHEMA);
const TRUCK_DIMENSIONS: Member = Member::structure(TruckDimensions::SCHEMA);
const TRUCK_WEIGHT: Member = Member::structure(TruckWeight::SCHEMA);
const NON_NEGATIVE: Member = Member::double().range(0.0, f64::MAX);
const WAYPOINTS: Member = Member::list(&m::POSITION).length(0, 23);
const MATRIX_POSITIONS: Member = Member::list(&m::POSITION).length(1, 350);
const STEP: Member = Member::structure(Step::SCHEMA);
const LEG_GEOMETRY: Member = Member::structure(LegGeometry::SCHEMA);
const LEG: Member = Member::structure(Leg::SCHEMA);
const ROUTE_MATRIX_ENTRY_ERROR: Member = Member::structure(RouteMatrixEntryError::SCHEMA);
const ROUTE_MATRIX_ENTRY: Member = Member::structure(RouteMatrixEntry::SCHEMA);
const ROUTE_MATRIX_ROW: Member = Member::list(&ROUTE_MATRIX_ENTRY);

// List items.
const BATCH_DELETE_DEVICE_POSITION_HISTORY_ERROR_ITEM: Member =
    Member::structure(BatchDeleteDevicePositionHistoryError::SCHEMA);
const BATCH_GET_DEVICE_POSITION_ERROR_ITEM: Member =
    Member::structure(BatchGetDevicePositionError::SCHEMA);
const BATCH_UPDATE_DEVICE_POSITION_ERROR_ITEM: Member =
    Member::structure(BatchUpdateDevicePositionError::SCHEMA);
const LIST_DEVICE_POSITIONS_RESPONSE_ENTRY_ITEM: Member =
    Member::structure(ListDevicePositionsResponseEntry::SCHEMA);
const LIST_TRACKERS_RESPONSE_ENTRY_ITEM: Member =
    Member::structure(ListTrackersResponseEntry::SCHEMA);
const BATCH_DELETE_GEOFENCE_ERROR_ITEM: Member =
    Member::structure(BatchDeleteGeofenceError::SCHEMA);
const BATCH_EVALUATE_GEOFENCES_ERROR_ITEM: Member =
    Member::structure(BatchEvaluateGeofencesError::SCHEMA);
const BATCH_PUT_GEOFENCE_ERROR_ITEM: Member = Member::structure(BatchPutGeofenceError::SCHEMA);
const BATCH_PUT_GEOFENCE_SUCCESS_ITEM: Member = Member::structure(BatchPutGeofenceSuccess::SCHEMA);
const LIST_GEOFENCE_COLLECTIONS_RESPONSE_ENTRY_ITEM: Member =
    Member::structure(ListGeofenceCollectionsResponseEntry::SCHEMA);
const LIST_GEOFENCE_RESPONSE_ENTRY_ITEM: Member =
    Member::structure(ListGeofenceResponseEntry::SCHEMA);
const LIST_MAPS_RESPONSE_ENTRY_ITEM: Member = Member::structure(ListMapsResponseEntry::SCHEMA);
const LIST_PLACE_INDEXES_RESPONSE_ENTRY_ITEM: Member =
    Member::structure(ListPlaceIndexesResponseEntry::SCHEMA);
const SEARCH_FOR_POSITION_RESULT_ITEM: Member = Member::structure(SearchForPositionResult::SCHEMA);
const SEARCH_FOR_TEXT_RESULT_ITEM: Member = Member::structure(SearchForTextResult::SCHEMA);
const LIST_ROUTE_CALCULATORS_RESPONSE_ENTRY_ITEM: Member =
    Member::structure(ListRouteCalculatorsResponseEntry::SCHEMA);

macro_rules! shapes {
    ($($ty:ident => [$($field:expr),* $(,)?];)+) => {
        $(
            impl Shape for $ty {
                const SCHEMA: &'static ShapeSchema = &ShapeSchema {
                    name: stringify!($ty),
                    fields: &[$($field),*],
                };
            }
        )+

        /// Every registered schema, in declaration order.
        pub static REGISTRY: &[&ShapeSchema] = &[$(<$ty as Shape>::SCHEMA),+];
    };
}

shapes! {
    // -- Nested structures --------------------------------------------------
    BatchItemError => [
        F::body("Code", m::BATCH_ITEM_ERROR_CODE),
        F::body("Message", m::STRING),
    ];
    BatchDeleteDevicePositionHistoryError => [
        F::body("DeviceId", m::IDENTIFIER).required(),
        F::body("Error", BATCH_ITEM_ERROR).required(),
    ];
    BatchDeleteGeofenceError => [
        F::body("GeofenceId", m::IDENTIFIER).required(),
        F::body("Error", BATCH_ITEM_ERROR).required(),
    ];
    BatchEvaluateGeofencesError => [
        F::body("DeviceId", m::IDENTIFIER).required(),
        F::body("Error", BATCH_ITEM_ERROR).required(),
        F::body("SampleTime", m::TIMESTAMP).required(),
    ];
    BatchGetDevicePositionError => [
        F::body("DeviceId", m::IDENTIFIER).required(),
        F::body("Error", BATCH_ITEM_ERROR).required(),
    ];
    BatchPutGeofenceError => [
        F::body("GeofenceId", m::IDENTIFIER).required(),
        F::body("Error", BATCH_ITEM_ERROR).required(),
    ];
    BatchPutGeofenceSuccess => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("GeofenceId", m::IDENTIFIER).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    BatchUpdateDevicePositionError => [
        F::body("DeviceId", m::IDENTIFIER).required(),
        F::body("Error", BATCH_ITEM_ERROR).required(),
        F::body("SampleTime", m::TIMESTAMP).required(),
    ];
    PositionalAccuracy => [
        F::body("Horizontal", Member::double().range(0.0, 10_000_000.0)).required(),
    ];
    DevicePositionUpdate => [
        F::body("Accuracy", ACCURACY),
        F::body("DeviceId", m::IDENTIFIER).required(),
        F::body("Position", m::POSITION).required(),
        F::body("PositionProperties", m::POSITION_PROPERTIES),
        F::body("SampleTime", m::TIMESTAMP).required(),
    ];
    DevicePosition => [
        F::body("Accuracy", ACCURACY),
        F::body("DeviceId", m::IDENTIFIER),
        F::body("Position", m::POSITION).required(),
        F::body("PositionProperties", m::POSITION_PROPERTIES),
        F::body("ReceivedTime", m::TIMESTAMP).required(),
        F::body("SampleTime", m::TIMESTAMP).required(),
    ];
    ListDevicePositionsResponseEntry => [
        F::body("Accuracy", ACCURACY),
        F::body("DeviceId", m::IDENTIFIER).required(),
        F::body("Position", m::POSITION).required(),
        F::body("PositionProperties", m::POSITION_PROPERTIES),
        F::body("SampleTime", m::TIMESTAMP).required(),
    ];
    ListTrackersResponseEntry => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
        F::body("TrackerName", m::RESOURCE_NAME).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    Circle => [
        F::body("Center", m::POSITION).required(),
        F::body("Radius", NON_NEGATIVE).required(),
    ];
    GeofenceGeometry => [
        F::body("Circle", CIRCLE),
        F::body("Polygon", POLYGON),
    ];
    BatchPutGeofenceRequestEntry => [
        F::body("GeofenceId", m::IDENTIFIER).required(),
        F::body("Geometry", GEOMETRY).required(),
    ];
    ListGeofenceCollectionsResponseEntry => [
        F::body("CollectionName", m::RESOURCE_NAME).required(),
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    ListGeofenceResponseEntry => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("GeofenceId", m::IDENTIFIER).required(),
        F::body("Geometry", GEOMETRY).required(),
        F::body("Status", m::STRING).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    MapConfiguration => [
        F::body("Style", m::MAP_STYLE).required(),
    ];
    ListMapsResponseEntry => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("DataSource", m::STRING).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("MapName", m::RESOURCE_NAME).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    DataSourceConfiguration => [
        F::body("IntendedUse", m::INTENDED_USE),
    ];
    PlaceGeometry => [
        F::body("Point", m::POSITION),
    ];
    TimeZone => [
        F::body("Name", m::STRING).required(),
        F::body("Offset", m::INTEGER),
    ];
    Place => [
        F::body("AddressNumber", m::STRING),
        F::body("Country", m::STRING),
        F::body("Geometry", PLACE_GEOMETRY).required(),
        F::body("Interpolated", m::BOOLEAN),
        F::body("Label", m::STRING),
        F::body("Municipality", m::STRING),
        F::body("Neighborhood", m::STRING),
        F::body("PostalCode", m::STRING),
        F::body("Region", m::STRING),
        F::body("Street", m::STRING),
        F::body("SubRegion", m::STRING),
        F::body("TimeZone", TIME_ZONE),
    ];
    SearchForPositionResult => [
        F::body("Distance", NON_NEGATIVE).required(),
        F::body("Place", PLACE).required(),
    ];
    SearchForTextResult => [
        F::body("Distance", NON_NEGATIVE),
        F::body("Place", PLACE).required(),
        F::body("Relevance", Member::double().range(0.0, 1.0)),
    ];
    SearchPlaceIndexForPositionSummary => [
        F::body("DataSource", m::STRING).required(),
        F::body("Language", m::LANGUAGE),
        F::body("MaxResults", m::SEARCH_MAX_RESULTS),
        F::body("Position", m::POSITION).required(),
    ];
    SearchPlaceIndexForTextSummary => [
        F::body("BiasPosition", m::POSITION),
        F::body("DataSource", m::STRING).required(),
        F::body("FilterBBox", m::BOUNDING_BOX),
        F::body("FilterCountries", m::COUNTRY_CODES),
        F::body("Language", m::LANGUAGE),
        F::body("MaxResults", m::SEARCH_MAX_RESULTS),
        F::body("ResultBBox", m::BOUNDING_BOX),
        F::body("Text", m::STRING).required(),
    ];
    ListPlaceIndexesResponseEntry => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("DataSource", m::STRING).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("IndexName", m::RESOURCE_NAME).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    CalculateRouteCarModeOptions => [
        F::body("AvoidFerries", m::BOOLEAN),
        F::body("AvoidTolls", m::BOOLEAN),
    ];
    TruckDimensions => [
        F::body("Height", NON_NEGATIVE),
        F::body("Length", NON_NEGATIVE),
        F::body("Unit", m::DIMENSION_UNIT),
        F::body("Width", NON_NEGATIVE),
    ];
    TruckWeight => [
        F::body("Total", NON_NEGATIVE),
        F::body("Unit", m::WEIGHT_UNIT),
    ];
    CalculateRouteTruckModeOptions => [
        F::body("AvoidFerries", m::BOOLEAN),
        F::body("AvoidTolls", m::BOOLEAN),
        F::body("Dimensions", TRUCK_DIMENSIONS),
        F::body("Weight", TRUCK_WEIGHT),
    ];
    LegGeometry => [
        F::body("LineString", Member::list(&m::POSITION).min_length(2)),
    ];
    Step => [
        F::body("Distance", NON_NEGATIVE).required(),
        F::body("DurationSeconds", NON_NEGATIVE).required(),
        F::body("EndPosition", m::POSITION).required(),
        F::body("GeometryOffset", Member::integer().range(0.0, f64::MAX)),
        F::body("StartPosition", m::POSITION).required(),
    ];
    Leg => [
        F::body("Distance", NON_NEGATIVE).required(),
        F::body("DurationSeconds", NON_NEGATIVE).required(),
        F::body("EndPosition", m::POSITION).required(),
        F::body("Geometry", LEG_GEOMETRY),
        F::body("StartPosition", m::POSITION).required(),
        F::body("Steps", Member::list(&STEP)).required(),
    ];
    CalculateRouteSummary => [
        F::body("DataSource", m::STRING).required(),
        F::body("Distance", NON_NEGATIVE).required(),
        F::body("DistanceUnit", m::DISTANCE_UNIT).required(),
        F::body("DurationSeconds", NON_NEGATIVE).required(),
        F::body("RouteBBox", Member::list(&m::DOUBLE).length(4, 6)).required(),
    ];
    RouteMatrixEntryError => [
        F::body("Code", m::ROUTE_MATRIX_ERROR_CODE).required(),
        F::body("Message", m::STRING),
    ];
    RouteMatrixEntry => [
        F::body("Distance", NON_NEGATIVE),
        F::body("DurationSeconds", NON_NEGATIVE),
        F::body("Error", ROUTE_MATRIX_ENTRY_ERROR),
    ];
    CalculateRouteMatrixSummary => [
        F::body("DataSource", m::STRING).required(),
        F::body("DistanceUnit", m::DISTANCE_UNIT).required(),
        F::body("ErrorCount", Member::integer().range(0.0, 160_000.0)).required(),
        F::body("RouteCount", Member::integer().range(1.0, 160_000.0)).required(),
    ];
    ListRouteCalculatorsResponseEntry => [
        F::body("CalculatorName", m::RESOURCE_NAME).required(),
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("DataSource", m::STRING).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];

    // -- Tracking -----------------------------------------------------------
    AssociateTrackerConsumerInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::body("ConsumerArn", m::ARN).required(),
    ];
    AssociateTrackerConsumerOutput => [];
    BatchDeleteDevicePositionHistoryInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::body("DeviceIds", m::DEVICE_ID_BATCH).required(),
    ];
    BatchDeleteDevicePositionHistoryOutput => [
        F::body("Errors", Member::list(&BATCH_DELETE_DEVICE_POSITION_HISTORY_ERROR_ITEM)).required(),
    ];
    BatchGetDevicePositionInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::body("DeviceIds", m::DEVICE_ID_BATCH).required(),
    ];
    BatchGetDevicePositionOutput => [
        F::body("DevicePositions", DEVICE_POSITIONS).required(),
        F::body("Errors", Member::list(&BATCH_GET_DEVICE_POSITION_ERROR_ITEM)).required(),
    ];
    BatchUpdateDevicePositionInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::body("Updates", DEVICE_POSITION_UPDATES).required(),
    ];
    BatchUpdateDevicePositionOutput => [
        F::body("Errors", Member::list(&BATCH_UPDATE_DEVICE_POSITION_ERROR_ITEM)).required(),
    ];
    CreateTrackerInput => [
        F::body("TrackerName", m::RESOURCE_NAME).required(),
        F::body("Description", m::DESCRIPTION),
        F::body("KmsKeyId", m::KMS_KEY_ID),
        F::body("PositionFiltering", m::POSITION_FILTERING),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
        F::body("Tags", m::TAGS),
    ];
    CreateTrackerOutput => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("TrackerArn", m::ARN).required(),
        F::body("TrackerName", m::RESOURCE_NAME).required(),
    ];
    DeleteTrackerInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
    ];
    DeleteTrackerOutput => [];
    DescribeTrackerInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
    ];
    DescribeTrackerOutput => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("KmsKeyId", m::KMS_KEY_ID),
        F::body("PositionFiltering", m::POSITION_FILTERING),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
        F::body("Tags", m::TAGS),
        F::body("TrackerArn", m::ARN).required(),
        F::body("TrackerName", m::RESOURCE_NAME).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    DisassociateTrackerConsumerInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::label("ConsumerArn", m::ARN),
    ];
    DisassociateTrackerConsumerOutput => [];
    GetDevicePositionInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::label("DeviceId", m::IDENTIFIER),
    ];
    GetDevicePositionOutput => [
        F::body("Accuracy", ACCURACY),
        F::body("DeviceId", m::IDENTIFIER),
        F::body("Position", m::POSITION).required(),
        F::body("PositionProperties", m::POSITION_PROPERTIES),
        F::body("ReceivedTime", m::TIMESTAMP).required(),
        F::body("SampleTime", m::TIMESTAMP).required(),
    ];
    GetDevicePositionHistoryInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::label("DeviceId", m::IDENTIFIER),
        F::body("EndTimeExclusive", m::TIMESTAMP),
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
        F::body("StartTimeInclusive", m::TIMESTAMP),
    ];
    GetDevicePositionHistoryOutput => [
        F::body("DevicePositions", DEVICE_POSITIONS).required(),
        F::body("NextToken", m::STRING),
    ];
    ListDevicePositionsInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListDevicePositionsOutput => [
        F::body("Entries", Member::list(&LIST_DEVICE_POSITIONS_RESPONSE_ENTRY_ITEM)).required(),
        F::body("NextToken", m::STRING),
    ];
    ListTrackerConsumersInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListTrackerConsumersOutput => [
        F::body("ConsumerArns", Member::list(&m::ARN)).required(),
        F::body("NextToken", m::STRING),
    ];
    ListTrackersInput => [
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListTrackersOutput => [
        F::body("Entries", Member::list(&LIST_TRACKERS_RESPONSE_ENTRY_ITEM)).required(),
        F::body("NextToken", m::STRING),
    ];
    UpdateTrackerInput => [
        F::label("TrackerName", m::RESOURCE_NAME),
        F::body("Description", m::DESCRIPTION),
        F::body("PositionFiltering", m::POSITION_FILTERING),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
    ];
    UpdateTrackerOutput => [
        F::body("TrackerArn", m::ARN).required(),
        F::body("TrackerName", m::RESOURCE_NAME).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];

    // -- Geofencing ---------------------------------------------------------
    BatchDeleteGeofenceInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
        F::body("GeofenceIds", m::GEOFENCE_ID_BATCH).required(),
    ];
    BatchDeleteGeofenceOutput => [
        F::body("Errors", Member::list(&BATCH_DELETE_GEOFENCE_ERROR_ITEM)).required(),
    ];
    BatchEvaluateGeofencesInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
        F::body("DevicePositionUpdates", DEVICE_POSITION_UPDATES).required(),
    ];
    BatchEvaluateGeofencesOutput => [
        F::body("Errors", Member::list(&BATCH_EVALUATE_GEOFENCES_ERROR_ITEM)).required(),
    ];
    BatchPutGeofenceInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
        F::body("Entries", PUT_GEOFENCE_ENTRIES).required(),
    ];
    BatchPutGeofenceOutput => [
        F::body("Errors", Member::list(&BATCH_PUT_GEOFENCE_ERROR_ITEM)).required(),
        F::body("Successes", Member::list(&BATCH_PUT_GEOFENCE_SUCCESS_ITEM)).required(),
    ];
    CreateGeofenceCollectionInput => [
        F::body("CollectionName", m::RESOURCE_NAME).required(),
        F::body("Description", m::DESCRIPTION),
        F::body("KmsKeyId", m::KMS_KEY_ID),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
        F::body("Tags", m::TAGS),
    ];
    CreateGeofenceCollectionOutput => [
        F::body("CollectionArn", m::ARN).required(),
        F::body("CollectionName", m::RESOURCE_NAME).required(),
        F::body("CreateTime", m::TIMESTAMP).required(),
    ];
    DeleteGeofenceCollectionInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
    ];
    DeleteGeofenceCollectionOutput => [];
    DescribeGeofenceCollectionInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
    ];
    DescribeGeofenceCollectionOutput => [
        F::body("CollectionArn", m::ARN).required(),
        F::body("CollectionName", m::RESOURCE_NAME).required(),
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("KmsKeyId", m::KMS_KEY_ID),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
        F::body("Tags", m::TAGS),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    GetGeofenceInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
        F::label("GeofenceId", m::IDENTIFIER),
    ];
    GetGeofenceOutput => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("GeofenceId", m::IDENTIFIER).required(),
        F::body("Geometry", GEOMETRY).required(),
        F::body("Status", m::STRING).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    ListGeofenceCollectionsInput => [
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListGeofenceCollectionsOutput => [
        F::body("Entries", Member::list(&LIST_GEOFENCE_COLLECTIONS_RESPONSE_ENTRY_ITEM)).required(),
        F::body("NextToken", m::STRING),
    ];
    ListGeofencesInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListGeofencesOutput => [
        F::body("Entries", Member::list(&LIST_GEOFENCE_RESPONSE_ENTRY_ITEM)).required(),
        F::body("NextToken", m::STRING),
    ];
    PutGeofenceInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
        F::label("GeofenceId", m::IDENTIFIER),
        F::body("Geometry", GEOMETRY).required(),
    ];
    PutGeofenceOutput => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("GeofenceId", m::IDENTIFIER).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    UpdateGeofenceCollectionInput => [
        F::label("CollectionName", m::RESOURCE_NAME),
        F::body("Description", m::DESCRIPTION),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("PricingPlanDataSource", m::STRING),
    ];
    UpdateGeofenceCollectionOutput => [
        F::body("CollectionArn", m::ARN).required(),
        F::body("CollectionName", m::RESOURCE_NAME).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];

    // -- Maps ---------------------------------------------------------------
    CreateMapInput => [
        F::body("MapName", m::RESOURCE_NAME).required(),
        F::body("Configuration", MAP_CONFIGURATION).required(),
        F::body("Description", m::DESCRIPTION),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("Tags", m::TAGS),
    ];
    CreateMapOutput => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("MapArn", m::ARN).required(),
        F::body("MapName", m::RESOURCE_NAME).required(),
    ];
    DeleteMapInput => [
        F::label("MapName", m::RESOURCE_NAME),
    ];
    DeleteMapOutput => [];
    DescribeMapInput => [
        F::label("MapName", m::RESOURCE_NAME),
    ];
    DescribeMapOutput => [
        F::body("Configuration", MAP_CONFIGURATION).required(),
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("DataSource", m::STRING).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("MapArn", m::ARN).required(),
        F::body("MapName", m::RESOURCE_NAME).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("Tags", m::TAGS),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    GetMapGlyphsInput => [
        F::label("MapName", m::RESOURCE_NAME),
        F::label("FontStack", m::STRING),
        F::label("FontUnicodeRange", Member::string().pattern(r"^[0-9]+-[0-9]+\.pbf$")),
    ];
    GetMapGlyphsOutput => [
        F::payload("Blob", m::BLOB),
        F::header("CacheControl", "Cache-Control", m::STRING),
        F::header("ContentType", "Content-Type", m::STRING),
    ];
    GetMapSpritesInput => [
        F::label("MapName", m::RESOURCE_NAME),
        F::label("FileName", Member::string().pattern(r"^sprites(@2x)?\.(png|json)$")),
    ];
    GetMapSpritesOutput => [
        F::payload("Blob", m::BLOB),
        F::header("CacheControl", "Cache-Control", m::STRING),
        F::header("ContentType", "Content-Type", m::STRING),
    ];
    GetMapStyleDescriptorInput => [
        F::label("MapName", m::RESOURCE_NAME),
    ];
    GetMapStyleDescriptorOutput => [
        F::payload("Blob", m::BLOB),
        F::header("CacheControl", "Cache-Control", m::STRING),
        F::header("ContentType", "Content-Type", m::STRING),
    ];
    GetMapTileInput => [
        F::label("MapName", m::RESOURCE_NAME),
        F::label("X", Member::string().pattern(r"^\d+$")),
        F::label("Y", Member::string().pattern(r"^\d+$")),
        F::label("Z", Member::string().pattern(r"^\d+$")),
    ];
    GetMapTileOutput => [
        F::payload("Blob", m::BLOB),
        F::header("CacheControl", "Cache-Control", m::STRING),
        F::header("ContentType", "Content-Type", m::STRING),
    ];
    ListMapsInput => [
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListMapsOutput => [
        F::body("Entries", Member::list(&LIST_MAPS_RESPONSE_ENTRY_ITEM)).required(),
        F::body("NextToken", m::STRING),
    ];
    UpdateMapInput => [
        F::label("MapName", m::RESOURCE_NAME),
        F::body("Description", m::DESCRIPTION),
        F::body("PricingPlan", m::PRICING_PLAN),
    ];
    UpdateMapOutput => [
        F::body("MapArn", m::ARN).required(),
        F::body("MapName", m::RESOURCE_NAME).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];

    // -- Places -------------------------------------------------------------
    CreatePlaceIndexInput => [
        F::body("IndexName", m::RESOURCE_NAME).required(),
        F::body("DataSource", m::DATA_SOURCE).required(),
        F::body("DataSourceConfiguration", DATA_SOURCE_CONFIGURATION),
        F::body("Description", m::DESCRIPTION),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("Tags", m::TAGS),
    ];
    CreatePlaceIndexOutput => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("IndexArn", m::ARN).required(),
        F::body("IndexName", m::RESOURCE_NAME).required(),
    ];
    DeletePlaceIndexInput => [
        F::label("IndexName", m::RESOURCE_NAME),
    ];
    DeletePlaceIndexOutput => [];
    DescribePlaceIndexInput => [
        F::label("IndexName", m::RESOURCE_NAME),
    ];
    DescribePlaceIndexOutput => [
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("DataSource", m::STRING).required(),
        F::body("DataSourceConfiguration", DATA_SOURCE_CONFIGURATION).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("IndexArn", m::ARN).required(),
        F::body("IndexName", m::RESOURCE_NAME).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("Tags", m::TAGS),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    ListPlaceIndexesInput => [
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListPlaceIndexesOutput => [
        F::body("Entries", Member::list(&LIST_PLACE_INDEXES_RESPONSE_ENTRY_ITEM)).required(),
        F::body("NextToken", m::STRING),
    ];
    SearchPlaceIndexForPositionInput => [
        F::label("IndexName", m::RESOURCE_NAME),
        F::body("Language", m::LANGUAGE),
        F::body("MaxResults", m::SEARCH_MAX_RESULTS),
        F::body("Position", m::POSITION).required(),
    ];
    SearchPlaceIndexForPositionOutput => [
        F::body("Results", Member::list(&SEARCH_FOR_POSITION_RESULT_ITEM)).required(),
        F::body("Summary", Member::structure(SearchPlaceIndexForPositionSummary::SCHEMA)).required(),
    ];
    SearchPlaceIndexForTextInput => [
        F::label("IndexName", m::RESOURCE_NAME),
        F::body("BiasPosition", m::POSITION),
        F::body("FilterBBox", m::BOUNDING_BOX),
        F::body("FilterCountries", m::COUNTRY_CODES),
        F::body("Language", m::LANGUAGE),
        F::body("MaxResults", m::SEARCH_MAX_RESULTS),
        F::body("Text", Member::string().length(1, 200)).required(),
    ];
    SearchPlaceIndexForTextOutput => [
        F::body("Results", Member::list(&SEARCH_FOR_TEXT_RESULT_ITEM)).required(),
        F::body("Summary", Member::structure(SearchPlaceIndexForTextSummary::SCHEMA)).required(),
    ];
    UpdatePlaceIndexInput => [
        F::label("IndexName", m::RESOURCE_NAME),
        F::body("DataSourceConfiguration", DATA_SOURCE_CONFIGURATION),
        F::body("Description", m::DESCRIPTION),
        F::body("PricingPlan", m::PRICING_PLAN),
    ];
    UpdatePlaceIndexOutput => [
        F::body("IndexArn", m::ARN).required(),
        F::body("IndexName", m::RESOURCE_NAME).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];

    // -- Routes -------------------------------------------------------------
    CalculateRouteInput => [
        F::label("CalculatorName", m::RESOURCE_NAME),
        F::body("CarModeOptions", CAR_OPTIONS),
        F::body("DepartNow", m::BOOLEAN),
        F::body("DeparturePosition", m::POSITION).required(),
        F::body("DepartureTime", m::TIMESTAMP),
        F::body("DestinationPosition", m::POSITION).required(),
        F::body("DistanceUnit", m::DISTANCE_UNIT),
        F::body("IncludeLegGeometry", m::BOOLEAN),
        F::body("TravelMode", m::TRAVEL_MODE),
        F::body("TruckModeOptions", TRUCK_OPTIONS),
        F::body("WaypointPositions", WAYPOINTS),
    ];
    CalculateRouteOutput => [
        F::body("Legs", Member::list(&LEG)).required(),
        F::body("Summary", Member::structure(CalculateRouteSummary::SCHEMA)).required(),
    ];
    CalculateRouteMatrixInput => [
        F::label("CalculatorName", m::RESOURCE_NAME),
        F::body("CarModeOptions", CAR_OPTIONS),
        F::body("DepartNow", m::BOOLEAN),
        F::body("DeparturePositions", MATRIX_POSITIONS).required(),
        F::body("DepartureTime", m::TIMESTAMP),
        F::body("DestinationPositions", MATRIX_POSITIONS).required(),
        F::body("DistanceUnit", m::DISTANCE_UNIT),
        F::body("TravelMode", m::TRAVEL_MODE),
        F::body("TruckModeOptions", TRUCK_OPTIONS),
    ];
    CalculateRouteMatrixOutput => [
        F::body("RouteMatrix", Member::list(&ROUTE_MATRIX_ROW)).required(),
        F::body("SnappedDeparturePositions", m::POSITION_LIST),
        F::body("SnappedDestinationPositions", m::POSITION_LIST),
        F::body("Summary", Member::structure(CalculateRouteMatrixSummary::SCHEMA)).required(),
    ];
    CreateRouteCalculatorInput => [
        F::body("CalculatorName", m::RESOURCE_NAME).required(),
        F::body("DataSource", m::DATA_SOURCE).required(),
        F::body("Description", m::DESCRIPTION),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("Tags", m::TAGS),
    ];
    CreateRouteCalculatorOutput => [
        F::body("CalculatorArn", m::ARN).required(),
        F::body("CalculatorName", m::RESOURCE_NAME).required(),
        F::body("CreateTime", m::TIMESTAMP).required(),
    ];
    DeleteRouteCalculatorInput => [
        F::label("CalculatorName", m::RESOURCE_NAME),
    ];
    DeleteRouteCalculatorOutput => [];
    DescribeRouteCalculatorInput => [
        F::label("CalculatorName", m::RESOURCE_NAME),
    ];
    DescribeRouteCalculatorOutput => [
        F::body("CalculatorArn", m::ARN).required(),
        F::body("CalculatorName", m::RESOURCE_NAME).required(),
        F::body("CreateTime", m::TIMESTAMP).required(),
        F::body("DataSource", m::STRING).required(),
        F::body("Description", m::DESCRIPTION).required(),
        F::body("PricingPlan", m::PRICING_PLAN),
        F::body("Tags", m::TAGS),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];
    ListRouteCalculatorsInput => [
        F::body("MaxResults", m::LIST_MAX_RESULTS),
        F::body("NextToken", m::NEXT_TOKEN),
    ];
    ListRouteCalculatorsOutput => [
        F::body("Entries", Member::list(&LIST_ROUTE_CALCULATORS_RESPONSE_ENTRY_ITEM)).required(),
        F::body("NextToken", m::STRING),
    ];
    UpdateRouteCalculatorInput => [
        F::label("CalculatorName", m::RESOURCE_NAME),
        F::body("Description", m::DESCRIPTION),
        F::body("PricingPlan", m::PRICING_PLAN),
    ];
    UpdateRouteCalculatorOutput => [
        F::body("CalculatorArn", m::ARN).required(),
        F::body("CalculatorName", m::RESOURCE_NAME).required(),
        F::body("UpdateTime", m::TIMESTAMP).required(),
    ];

    // -- Tagging ------------------------------------------------------------
    ListTagsForResourceInput => [
        F::label("ResourceArn", m::ARN),
    ];
    ListTagsForResourceOutput => [
        F::body("Tags", m::TAGS),
    ];
    TagResourceInput => [
        F::label("ResourceArn", m::ARN),
        F::body("Tags", m::TAGS).required(),
    ];
    TagResourceOutput => [];
    UntagResourceInput => [
        F::label("ResourceArn", m::ARN),
        F::query("TagKeys", "tagKeys", m::TAG_KEYS).required(),
    ];
    UntagResourceOutput => [];
}
