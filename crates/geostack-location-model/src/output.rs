//! Location operation outputs.
//!
//! JSON outputs tolerate missing members (`#[serde(default)]`) and ignore
//! members this client does not know. The four map resource outputs carry a
//! raw payload blob plus header-bound metadata instead of a JSON document.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::types::{
    BatchDeleteDevicePositionHistoryError, BatchDeleteGeofenceError, BatchEvaluateGeofencesError,
    BatchGetDevicePositionError, BatchPutGeofenceError, BatchPutGeofenceSuccess,
    BatchUpdateDevicePositionError, CalculateRouteMatrixSummary, CalculateRouteSummary,
    DataSourceConfiguration, DevicePosition, GeofenceGeometry, Leg,
    ListDevicePositionsResponseEntry, ListGeofenceCollectionsResponseEntry,
    ListGeofenceResponseEntry, ListMapsResponseEntry, ListPlaceIndexesResponseEntry,
    ListRouteCalculatorsResponseEntry, ListTrackersResponseEntry, MapConfiguration,
    PositionFiltering, PositionalAccuracy, PricingPlan, RouteMatrixEntry,
    SearchForPositionResult, SearchForTextResult, SearchPlaceIndexForPositionSummary,
    SearchPlaceIndexForTextSummary,
};

/// Declare outputs with no members.
macro_rules! empty_outputs {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $name {}
        )+
    };
}

empty_outputs! {
    /// Output for the `AssociateTrackerConsumer` operation.
    AssociateTrackerConsumerOutput;
    /// Output for the `DeleteTracker` operation.
    DeleteTrackerOutput;
    /// Output for the `DisassociateTrackerConsumer` operation.
    DisassociateTrackerConsumerOutput;
    /// Output for the `DeleteGeofenceCollection` operation.
    DeleteGeofenceCollectionOutput;
    /// Output for the `DeleteMap` operation.
    DeleteMapOutput;
    /// Output for the `DeletePlaceIndex` operation.
    DeletePlaceIndexOutput;
    /// Output for the `DeleteRouteCalculator` operation.
    DeleteRouteCalculatorOutput;
    /// Output for the `TagResource` operation.
    TagResourceOutput;
    /// Output for the `UntagResource` operation.
    UntagResourceOutput;
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Output for the `BatchDeleteDevicePositionHistory` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteDevicePositionHistoryOutput {
    /// Devices whose history could not be deleted.
    pub errors: Vec<BatchDeleteDevicePositionHistoryError>,
}

/// Output for the `BatchGetDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchGetDevicePositionOutput {
    /// Positions found.
    pub device_positions: Vec<DevicePosition>,
    /// Devices that could not be looked up.
    pub errors: Vec<BatchGetDevicePositionError>,
}

/// Output for the `BatchUpdateDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdateDevicePositionOutput {
    /// Updates that could not be stored.
    pub errors: Vec<BatchUpdateDevicePositionError>,
}

/// Output for the `CreateTracker` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateTrackerOutput {
    /// When the tracker was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// ARN of the tracker.
    pub tracker_arn: String,
    /// Name of the tracker.
    pub tracker_name: String,
}

/// Output for the `DescribeTracker` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTrackerOutput {
    /// When the tracker was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Tracker description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// KMS key protecting stored positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Position filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_filtering: Option<PositionFiltering>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Data source backing the pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
    /// Tags of the tracker.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// ARN of the tracker.
    pub tracker_arn: String,
    /// Name of the tracker.
    pub tracker_name: String,
    /// When the tracker was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output for the `GetDevicePosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDevicePositionOutput {
    /// Position accuracy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,
    /// The device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Last known `[longitude, latitude]`.
    pub position: Vec<f64>,
    /// Free-form properties attached to the update.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
    /// When the tracker received the position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_time: Option<DateTime<Utc>>,
    /// When the position was sampled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,
}

/// Output for the `GetDevicePositionHistory` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDevicePositionHistoryOutput {
    /// Positions of this page, oldest first.
    pub device_positions: Vec<DevicePosition>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListDevicePositions` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListDevicePositionsOutput {
    /// Devices of this page.
    pub entries: Vec<ListDevicePositionsResponseEntry>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListTrackerConsumers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTrackerConsumersOutput {
    /// ARNs of consuming geofence collections.
    pub consumer_arns: Vec<String>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListTrackers` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTrackersOutput {
    /// Trackers of this page.
    pub entries: Vec<ListTrackersResponseEntry>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `UpdateTracker` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateTrackerOutput {
    /// ARN of the tracker.
    pub tracker_arn: String,
    /// Name of the tracker.
    pub tracker_name: String,
    /// When the tracker was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Geofencing
// ---------------------------------------------------------------------------

/// Output for the `BatchDeleteGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteGeofenceOutput {
    /// Geofences that could not be deleted.
    pub errors: Vec<BatchDeleteGeofenceError>,
}

/// Output for the `BatchEvaluateGeofences` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchEvaluateGeofencesOutput {
    /// Positions that could not be evaluated.
    pub errors: Vec<BatchEvaluateGeofencesError>,
}

/// Output for the `BatchPutGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchPutGeofenceOutput {
    /// Geofences that could not be stored.
    pub errors: Vec<BatchPutGeofenceError>,
    /// Geofences that were stored.
    pub successes: Vec<BatchPutGeofenceSuccess>,
}

/// Output for the `CreateGeofenceCollection` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateGeofenceCollectionOutput {
    /// ARN of the collection.
    pub collection_arn: String,
    /// Name of the collection.
    pub collection_name: String,
    /// When the collection was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Output for the `DescribeGeofenceCollection` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeGeofenceCollectionOutput {
    /// ARN of the collection.
    pub collection_arn: String,
    /// Name of the collection.
    pub collection_name: String,
    /// When the collection was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Collection description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// KMS key protecting geofences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Data source backing the pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
    /// Tags of the collection.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// When the collection was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output for the `GetGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetGeofenceOutput {
    /// When the geofence was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Geofence identifier.
    pub geofence_id: String,
    /// Geofence geometry.
    pub geometry: GeofenceGeometry,
    /// Geofence status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the geofence was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output for the `ListGeofenceCollections` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListGeofenceCollectionsOutput {
    /// Collections of this page.
    pub entries: Vec<ListGeofenceCollectionsResponseEntry>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListGeofences` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListGeofencesOutput {
    /// Geofences of this page.
    pub entries: Vec<ListGeofenceResponseEntry>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `PutGeofence` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PutGeofenceOutput {
    /// When the geofence was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Geofence identifier.
    pub geofence_id: String,
    /// When the geofence was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output for the `UpdateGeofenceCollection` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateGeofenceCollectionOutput {
    /// ARN of the collection.
    pub collection_arn: String,
    /// Name of the collection.
    pub collection_name: String,
    /// When the collection was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Output for the `CreateMap` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateMapOutput {
    /// When the map was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// ARN of the map.
    pub map_arn: String,
    /// Name of the map.
    pub map_name: String,
}

/// Output for the `DescribeMap` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeMapOutput {
    /// Map style.
    pub configuration: MapConfiguration,
    /// When the map was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Data provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// Map description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ARN of the map.
    pub map_arn: String,
    /// Name of the map.
    pub map_name: String,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Tags of the map.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// When the map was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Declare outputs carrying a raw payload blob.
macro_rules! payload_outputs {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(rename_all = "PascalCase", default)]
            pub struct $name {
                /// Raw payload bytes.
                pub blob: Blob,
                /// Value of the `Cache-Control` header.
                #[serde(skip_serializing_if = "Option::is_none")]
                pub cache_control: Option<String>,
                /// Value of the `Content-Type` header.
                #[serde(skip_serializing_if = "Option::is_none")]
                pub content_type: Option<String>,
            }
        )+
    };
}

payload_outputs! {
    /// Output for the `GetMapGlyphs` operation.
    GetMapGlyphsOutput;
    /// Output for the `GetMapSprites` operation.
    GetMapSpritesOutput;
    /// Output for the `GetMapStyleDescriptor` operation.
    GetMapStyleDescriptorOutput;
    /// Output for the `GetMapTile` operation.
    GetMapTileOutput;
}

/// Output for the `ListMaps` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMapsOutput {
    /// Maps of this page.
    pub entries: Vec<ListMapsResponseEntry>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `UpdateMap` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateMapOutput {
    /// ARN of the map.
    pub map_arn: String,
    /// Name of the map.
    pub map_name: String,
    /// When the map was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Output for the `CreatePlaceIndex` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreatePlaceIndexOutput {
    /// When the index was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// ARN of the index.
    pub index_arn: String,
    /// Name of the index.
    pub index_name: String,
}

/// Output for the `DescribePlaceIndex` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribePlaceIndexOutput {
    /// When the index was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Data provider.
    pub data_source: String,
    /// How search results may be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_configuration: Option<DataSourceConfiguration>,
    /// Index description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ARN of the index.
    pub index_arn: String,
    /// Name of the index.
    pub index_name: String,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Tags of the index.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// When the index was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output for the `ListPlaceIndexes` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListPlaceIndexesOutput {
    /// Indexes of this page.
    pub entries: Vec<ListPlaceIndexesResponseEntry>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `SearchPlaceIndexForPosition` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchPlaceIndexForPositionOutput {
    /// Places near the position, closest first.
    pub results: Vec<SearchForPositionResult>,
    /// Echo of the request.
    pub summary: SearchPlaceIndexForPositionSummary,
}

/// Output for the `SearchPlaceIndexForText` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchPlaceIndexForTextOutput {
    /// Matching places, most relevant first.
    pub results: Vec<SearchForTextResult>,
    /// Echo of the request.
    pub summary: SearchPlaceIndexForTextSummary,
}

/// Output for the `UpdatePlaceIndex` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdatePlaceIndexOutput {
    /// ARN of the index.
    pub index_arn: String,
    /// Name of the index.
    pub index_name: String,
    /// When the index was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Output for the `CalculateRoute` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteOutput {
    /// Legs between consecutive stops.
    pub legs: Vec<Leg>,
    /// Route summary.
    pub summary: CalculateRouteSummary,
}

/// Output for the `CalculateRouteMatrix` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteMatrixOutput {
    /// One row per departure, one cell per destination.
    pub route_matrix: Vec<Vec<RouteMatrixEntry>>,
    /// Departures snapped to the road network.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snapped_departure_positions: Vec<Vec<f64>>,
    /// Destinations snapped to the road network.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snapped_destination_positions: Vec<Vec<f64>>,
    /// Matrix summary.
    pub summary: CalculateRouteMatrixSummary,
}

/// Output for the `CreateRouteCalculator` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateRouteCalculatorOutput {
    /// ARN of the calculator.
    pub calculator_arn: String,
    /// Name of the calculator.
    pub calculator_name: String,
    /// When the calculator was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Output for the `DescribeRouteCalculator` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeRouteCalculatorOutput {
    /// ARN of the calculator.
    pub calculator_arn: String,
    /// Name of the calculator.
    pub calculator_name: String,
    /// When the calculator was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Data provider.
    pub data_source: String,
    /// Calculator description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Tags of the calculator.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// When the calculator was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output for the `ListRouteCalculators` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRouteCalculatorsOutput {
    /// Calculators of this page.
    pub entries: Vec<ListRouteCalculatorsResponseEntry>,
    /// Token for the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `UpdateRouteCalculator` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UpdateRouteCalculatorOutput {
    /// ARN of the calculator.
    pub calculator_arn: String,
    /// Name of the calculator.
    pub calculator_name: String,
    /// When the calculator was updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Output for the `ListTagsForResource` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTagsForResourceOutput {
    /// Tags of the resource.
    pub tags: HashMap<String, String>,
}
