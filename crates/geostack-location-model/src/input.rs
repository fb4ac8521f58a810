//! Location operation inputs.
//!
//! All input structs use `PascalCase` member names. Members bound to the URI
//! path, query string, or headers are serialized like body members; the HTTP
//! layer moves them to their binding using each input's schema. Optional
//! members are omitted when `None`, empty collections when empty.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    BatchPutGeofenceRequestEntry, CalculateRouteCarModeOptions, CalculateRouteTruckModeOptions,
    DataSourceConfiguration, DevicePositionUpdate, DistanceUnit, GeofenceGeometry,
    MapConfiguration, PositionFiltering, PricingPlan, TravelMode,
};

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Input for the `AssociateTrackerConsumer` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssociateTrackerConsumerInput {
    /// Tracker to associate with (URI label).
    pub tracker_name: String,
    /// ARN of the geofence collection that consumes the tracker's positions.
    pub consumer_arn: String,
}

/// Input for the `BatchDeleteDevicePositionHistory` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteDevicePositionHistoryInput {
    /// Tracker holding the history (URI label).
    pub tracker_name: String,
    /// Devices whose history is deleted.
    pub device_ids: Vec<String>,
}

/// Input for the `BatchGetDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchGetDevicePositionInput {
    /// Tracker holding the positions (URI label).
    pub tracker_name: String,
    /// Devices to look up.
    pub device_ids: Vec<String>,
}

/// Input for the `BatchUpdateDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdateDevicePositionInput {
    /// Tracker receiving the updates (URI label).
    pub tracker_name: String,
    /// Position updates, possibly several per device.
    pub updates: Vec<DevicePositionUpdate>,
}

/// Input for the `CreateTracker` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTrackerInput {
    /// Name of the new tracker.
    pub tracker_name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// KMS key used to encrypt stored positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// How incoming updates are filtered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_filtering: Option<PositionFiltering>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Data source backing the pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
    /// Tags applied to the tracker.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Input for the `DeleteTracker` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteTrackerInput {
    /// Tracker to delete (URI label).
    pub tracker_name: String,
}

/// Input for the `DescribeTracker` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTrackerInput {
    /// Tracker to describe (URI label).
    pub tracker_name: String,
}

/// Input for the `DisassociateTrackerConsumer` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisassociateTrackerConsumerInput {
    /// Tracker to disassociate from (URI label).
    pub tracker_name: String,
    /// Consumer to remove (URI label).
    pub consumer_arn: String,
}

/// Input for the `GetDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDevicePositionInput {
    /// Tracker holding the position (URI label).
    pub tracker_name: String,
    /// Device to look up (URI label).
    pub device_id: String,
}

/// Input for the `GetDevicePositionHistory` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDevicePositionHistoryInput {
    /// Tracker holding the history (URI label).
    pub tracker_name: String,
    /// Device to look up (URI label).
    pub device_id: String,
    /// Exclusive upper bound on sample time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_exclusive: Option<DateTime<Utc>>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Inclusive lower bound on sample time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_inclusive: Option<DateTime<Utc>>,
}

/// Input for the `ListDevicePositions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListDevicePositionsInput {
    /// Tracker to list (URI label).
    pub tracker_name: String,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `ListTrackerConsumers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTrackerConsumersInput {
    /// Tracker to list (URI label).
    pub tracker_name: String,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `ListTrackers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTrackersInput {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `UpdateTracker` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateTrackerInput {
    /// Tracker to update (URI label).
    pub tracker_name: String,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New position filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_filtering: Option<PositionFiltering>,
    /// New pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// New pricing plan data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
}

// ---------------------------------------------------------------------------
// Geofencing
// ---------------------------------------------------------------------------

/// Input for the `BatchDeleteGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteGeofenceInput {
    /// Collection holding the geofences (URI label).
    pub collection_name: String,
    /// Geofences to delete.
    pub geofence_ids: Vec<String>,
}

/// Input for the `BatchEvaluateGeofences` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchEvaluateGeofencesInput {
    /// Collection to evaluate against (URI label).
    pub collection_name: String,
    /// Positions to evaluate.
    pub device_position_updates: Vec<DevicePositionUpdate>,
}

/// Input for the `BatchPutGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchPutGeofenceInput {
    /// Collection receiving the geofences (URI label).
    pub collection_name: String,
    /// Geofences to create or replace.
    pub entries: Vec<BatchPutGeofenceRequestEntry>,
}

/// Input for the `CreateGeofenceCollection` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateGeofenceCollectionInput {
    /// Name of the new collection.
    pub collection_name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// KMS key used to encrypt geofences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Data source backing the pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
    /// Tags applied to the collection.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Input for the `DeleteGeofenceCollection` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteGeofenceCollectionInput {
    /// Collection to delete (URI label).
    pub collection_name: String,
}

/// Input for the `DescribeGeofenceCollection` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeGeofenceCollectionInput {
    /// Collection to describe (URI label).
    pub collection_name: String,
}

/// Input for the `GetGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetGeofenceInput {
    /// Collection holding the geofence (URI label).
    pub collection_name: String,
    /// Geofence to fetch (URI label).
    pub geofence_id: String,
}

/// Input for the `ListGeofenceCollections` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListGeofenceCollectionsInput {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `ListGeofences` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListGeofencesInput {
    /// Collection to list (URI label).
    pub collection_name: String,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `PutGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutGeofenceInput {
    /// Collection receiving the geofence (URI label).
    pub collection_name: String,
    /// Geofence identifier (URI label).
    pub geofence_id: String,
    /// Geofence geometry.
    pub geometry: GeofenceGeometry,
}

/// Input for the `UpdateGeofenceCollection` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateGeofenceCollectionInput {
    /// Collection to update (URI label).
    pub collection_name: String,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// New pricing plan data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Input for the `CreateMap` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMapInput {
    /// Name of the new map.
    pub map_name: String,
    /// Map style.
    pub configuration: MapConfiguration,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Tags applied to the map.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Input for the `DeleteMap` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteMapInput {
    /// Map to delete (URI label).
    pub map_name: String,
}

/// Input for the `DescribeMap` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeMapInput {
    /// Map to describe (URI label).
    pub map_name: String,
}

/// Input for the `GetMapGlyphs` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMapGlyphsInput {
    /// Map resource (URI label).
    pub map_name: String,
    /// Comma-separated font stack, e.g. `Noto Sans Regular,Arial Unicode MS Regular`.
    pub font_stack: String,
    /// Glyph range file, e.g. `0-255.pbf`.
    pub font_unicode_range: String,
}

/// Input for the `GetMapSprites` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMapSpritesInput {
    /// Map resource (URI label).
    pub map_name: String,
    /// Sprite file, e.g. `sprites@2x.png`.
    pub file_name: String,
}

/// Input for the `GetMapStyleDescriptor` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMapStyleDescriptorInput {
    /// Map resource (URI label).
    pub map_name: String,
}

/// Input for the `GetMapTile` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetMapTileInput {
    /// Map resource (URI label).
    pub map_name: String,
    /// Tile column.
    pub x: String,
    /// Tile row.
    pub y: String,
    /// Zoom level.
    pub z: String,
}

/// Input for the `ListMaps` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMapsInput {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `UpdateMap` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMapInput {
    /// Map to update (URI label).
    pub map_name: String,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Input for the `CreatePlaceIndex` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePlaceIndexInput {
    /// Name of the new index.
    pub index_name: String,
    /// Data provider, e.g. `Esri` or `Here`.
    pub data_source: String,
    /// How search results may be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_configuration: Option<DataSourceConfiguration>,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Tags applied to the index.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Input for the `DeletePlaceIndex` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeletePlaceIndexInput {
    /// Index to delete (URI label).
    pub index_name: String,
}

/// Input for the `DescribePlaceIndex` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribePlaceIndexInput {
    /// Index to describe (URI label).
    pub index_name: String,
}

/// Input for the `ListPlaceIndexes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListPlaceIndexesInput {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `SearchPlaceIndexForPosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchPlaceIndexForPositionInput {
    /// Index to search (URI label).
    pub index_name: String,
    /// Preferred result language (BCP 47).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// `[longitude, latitude]` to reverse geocode.
    pub position: Vec<f64>,
}

/// Input for the `SearchPlaceIndexForText` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchPlaceIndexForTextInput {
    /// Index to search (URI label).
    pub index_name: String,
    /// Rank results near this position.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bias_position: Vec<f64>,
    /// Only return results inside `[min_lon, min_lat, max_lon, max_lat]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_b_box: Vec<f64>,
    /// Only return results in these ISO 3166 alpha-3 countries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_countries: Vec<String>,
    /// Preferred result language (BCP 47).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Address, name, or other text to search for.
    pub text: String,
}

/// Input for the `UpdatePlaceIndex` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdatePlaceIndexInput {
    /// Index to update (URI label).
    pub index_name: String,
    /// New data source configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_configuration: Option<DataSourceConfiguration>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Input for the `CalculateRoute` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteInput {
    /// Calculator to use (URI label).
    pub calculator_name: String,
    /// Options for `TravelMode::Car`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_mode_options: Option<CalculateRouteCarModeOptions>,
    /// Use the current time as departure time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depart_now: Option<bool>,
    /// `[longitude, latitude]` of the start.
    pub departure_position: Vec<f64>,
    /// Departure time for traffic-aware routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
    /// `[longitude, latitude]` of the end.
    pub destination_position: Vec<f64>,
    /// Unit of returned distances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Return the geometry of each leg.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_leg_geometry: Option<bool>,
    /// Mode of travel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<TravelMode>,
    /// Options for `TravelMode::Truck`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_mode_options: Option<CalculateRouteTruckModeOptions>,
    /// Intermediate stops, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub waypoint_positions: Vec<Vec<f64>>,
}

/// Input for the `CalculateRouteMatrix` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteMatrixInput {
    /// Calculator to use (URI label).
    pub calculator_name: String,
    /// Options for `TravelMode::Car`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_mode_options: Option<CalculateRouteCarModeOptions>,
    /// Use the current time as departure time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depart_now: Option<bool>,
    /// Start positions, one matrix row each.
    pub departure_positions: Vec<Vec<f64>>,
    /// Departure time for traffic-aware routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,
    /// End positions, one matrix column each.
    pub destination_positions: Vec<Vec<f64>>,
    /// Unit of returned distances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Mode of travel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<TravelMode>,
    /// Options for `TravelMode::Truck`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_mode_options: Option<CalculateRouteTruckModeOptions>,
}

/// Input for the `CreateRouteCalculator` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRouteCalculatorInput {
    /// Name of the new calculator.
    pub calculator_name: String,
    /// Data provider, e.g. `Esri` or `Here`.
    pub data_source: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Tags applied to the calculator.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

/// Input for the `DeleteRouteCalculator` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteRouteCalculatorInput {
    /// Calculator to delete (URI label).
    pub calculator_name: String,
}

/// Input for the `DescribeRouteCalculator` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRouteCalculatorInput {
    /// Calculator to describe (URI label).
    pub calculator_name: String,
}

/// Input for the `ListRouteCalculators` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRouteCalculatorsInput {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Pagination token from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `UpdateRouteCalculator` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateRouteCalculatorInput {
    /// Calculator to update (URI label).
    pub calculator_name: String,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for the `ListTagsForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsForResourceInput {
    /// Resource ARN (URI label).
    pub resource_arn: String,
}

/// Input for the `TagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TagResourceInput {
    /// Resource ARN (URI label).
    pub resource_arn: String,
    /// Tags to add or overwrite.
    pub tags: HashMap<String, String>,
}

/// Input for the `UntagResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UntagResourceInput {
    /// Resource ARN (URI label).
    pub resource_arn: String,
    /// Tag keys to remove (repeated `tagKeys` query parameter).
    pub tag_keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::hash::{BuildHasher, RandomState};

    use super::*;
    use crate::types::Circle;

    #[test]
    fn test_should_omit_unset_optional_members() {
        let input = CreateTrackerInput {
            tracker_name: "fleetA".to_owned(),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"TrackerName":"fleetA"}"#);
    }

    #[test]
    fn test_should_take_ownership_of_collections() {
        let mut ids = vec!["g1".to_owned(), "g2".to_owned()];
        let input = BatchDeleteGeofenceInput {
            collection_name: "fences".to_owned(),
            geofence_ids: ids.clone(),
        };
        ids.push("g3".to_owned());
        assert_eq!(input.geofence_ids, vec!["g1", "g2"]);
    }

    #[test]
    fn test_should_compare_inputs_structurally() {
        let a = CalculateRouteInput {
            calculator_name: "calc".to_owned(),
            departure_position: vec![-123.1, 49.2],
            destination_position: vec![-122.9, 49.3],
            travel_mode: Some(TravelMode::Truck),
            ..Default::default()
        };
        let b = CalculateRouteInput {
            travel_mode: Some("Truck".into()),
            ..a.clone()
        };
        assert_eq!(a, b);
        let c = CalculateRouteInput {
            travel_mode: Some(TravelMode::Car),
            ..a.clone()
        };
        assert_ne!(a, c);
    }

    #[test]
    fn test_should_round_trip_route_input_through_json() {
        let input = CalculateRouteInput {
            calculator_name: "calc".to_owned(),
            departure_position: vec![-123.115, 49.285],
            destination_position: vec![-122.97, 49.2],
            waypoint_positions: vec![vec![-123.0, 49.25]],
            distance_unit: Some(DistanceUnit::Miles),
            include_leg_geometry: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        let parsed: CalculateRouteInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_should_hash_equal_inputs_equally() {
        let a = BatchDeleteGeofenceInput {
            collection_name: "fences".to_owned(),
            geofence_ids: vec!["g1".to_owned(), "g2".to_owned()],
        };
        let b = a.clone();
        let state = RandomState::new();
        assert_eq!(state.hash_one(&a), state.hash_one(&b));

        let reordered = BatchDeleteGeofenceInput {
            geofence_ids: vec!["g2".to_owned(), "g1".to_owned()],
            ..a.clone()
        };
        let set: HashSet<_> = [a, b, reordered].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_should_hash_tracker_input_with_enum_from_string() {
        let a = UpdateTrackerInput {
            tracker_name: "fleetA".to_owned(),
            pricing_plan: Some(PricingPlan::RequestBasedUsage),
            ..Default::default()
        };
        let b = UpdateTrackerInput {
            pricing_plan: Some("RequestBasedUsage".into()),
            ..a.clone()
        };
        let state = RandomState::new();
        assert_eq!(state.hash_one(&a), state.hash_one(&b));
    }

    #[test]
    fn test_should_keep_geometry_order_after_caller_mutation() {
        let mut ring = vec![
            vec![-123.12, 49.28],
            vec![-123.11, 49.28],
            vec![-123.11, 49.29],
            vec![-123.12, 49.28],
        ];
        let mut center = vec![-123.1, 49.28];
        let input = PutGeofenceInput {
            collection_name: "fences".to_owned(),
            geofence_id: "yard".to_owned(),
            geometry: GeofenceGeometry {
                circle: Some(Circle {
                    center: center.clone(),
                    radius: 50.0,
                }),
                polygon: vec![ring.clone()],
            },
        };

        ring.reverse();
        ring[0][0] = 0.0;
        center.swap(0, 1);

        let stored = &input.geometry.polygon[0];
        assert_eq!(stored[0], vec![-123.12, 49.28]);
        assert_eq!(stored[1], vec![-123.11, 49.28]);
        assert_eq!(stored[2], vec![-123.11, 49.29]);
        assert_eq!(
            input.geometry.circle.as_ref().map(|c| c.center.clone()),
            Some(vec![-123.1, 49.28])
        );
    }
}
