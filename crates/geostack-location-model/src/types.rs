//! Shared location service types.
//!
//! All structures follow the restJson1 wire format with `PascalCase` member
//! names. Structures use `#[serde(rename_all = "PascalCase")]`; members the
//! service may omit are `Option`s or empty collections, and `#[serde(default)]`
//! keeps decoding tolerant of sparse responses.
//!
//! Enums keep a single canonical string form. Each enum can be built from its
//! variant or from the exact wire string, and both paths produce equal values.
//! Strings unknown to this client are preserved in an `Unknown` variant so new
//! service values never break decoding.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Declare a string-backed enum with an `Unknown` fallback variant.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this client does not know about.
            Unknown(String),
        }

        impl $name {
            /// All wire values known to this client.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the wire-format string representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Returns `true` if this is one of the known variants.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(s.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from(s))
            }
        }
    };
}

string_enum! {
    /// Error code attached to a single failed batch item.
    BatchItemErrorCode {
        /// The caller lacks access to the item's resource.
        AccessDeniedError => "AccessDeniedError",
        /// The item conflicts with existing state.
        ConflictError => "ConflictError",
        /// The service failed while processing the item.
        InternalServerError => "InternalServerError",
        /// The item's resource does not exist.
        ResourceNotFoundError => "ResourceNotFoundError",
        /// The item was throttled.
        ThrottlingError => "ThrottlingError",
        /// The item failed validation.
        ValidationError => "ValidationError",
    }
}

string_enum! {
    /// Unit for route distances.
    DistanceUnit {
        /// Kilometers.
        Kilometers => "Kilometers",
        /// Miles.
        Miles => "Miles",
    }
}

string_enum! {
    /// Mode of travel for route calculation.
    TravelMode {
        /// Car routing.
        Car => "Car",
        /// Truck routing, honouring truck mode options.
        Truck => "Truck",
        /// Pedestrian routing.
        Walking => "Walking",
    }
}

string_enum! {
    /// Pricing plan attached to a resource.
    PricingPlan {
        /// Billed per request.
        RequestBasedUsage => "RequestBasedUsage",
        /// Billed for mobile asset tracking.
        MobileAssetTracking => "MobileAssetTracking",
        /// Billed for mobile asset management.
        MobileAssetManagement => "MobileAssetManagement",
    }
}

string_enum! {
    /// How a tracker filters incoming position updates.
    PositionFiltering {
        /// Keep at most one update per device every 30 seconds.
        TimeBased => "TimeBased",
        /// Drop updates that moved less than 30 meters.
        DistanceBased => "DistanceBased",
        /// Drop updates that moved less than the reported accuracy.
        AccuracyBased => "AccuracyBased",
    }
}

string_enum! {
    /// Intended use of place search results.
    IntendedUse {
        /// Results are used once and not stored.
        SingleUse => "SingleUse",
        /// Results may be stored.
        Storage => "Storage",
    }
}

string_enum! {
    /// Unit of a truck's weight.
    VehicleWeightUnit {
        /// Kilograms.
        Kilograms => "Kilograms",
        /// Pounds.
        Pounds => "Pounds",
    }
}

string_enum! {
    /// Unit of a truck's dimensions.
    DimensionUnit {
        /// Meters.
        Meters => "Meters",
        /// Feet.
        Feet => "Feet",
    }
}

string_enum! {
    /// Error code attached to a failed route matrix cell.
    RouteMatrixErrorCode {
        /// No route connects the two positions.
        RouteNotFound => "RouteNotFound",
        /// The route exceeds the maximum length.
        RouteTooLong => "RouteTooLong",
        /// Neither position could be snapped to the road network.
        PositionsNotFound => "PositionsNotFound",
        /// The destination could not be snapped to the road network.
        DestinationPositionNotFound => "DestinationPositionNotFound",
        /// The departure could not be snapped to the road network.
        DeparturePositionNotFound => "DeparturePositionNotFound",
        /// Any other validation failure.
        OtherValidationError => "OtherValidationError",
    }
}

string_enum! {
    /// Reason carried by a whole-call validation exception.
    ValidationExceptionReason {
        /// The operation is not recognized.
        UnknownOperation => "UnknownOperation",
        /// A required field is missing.
        Missing => "Missing",
        /// The request could not be parsed.
        CannotParse => "CannotParse",
        /// One or more fields failed validation.
        FieldValidationFailed => "FieldValidationFailed",
        /// Any other reason.
        Other => "Other",
    }
}

// ---------------------------------------------------------------------------
// Batch error shapes
// ---------------------------------------------------------------------------

/// Error details for a single failed batch item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchItemError {
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<BatchItemErrorCode>,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A device whose position history could not be deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteDevicePositionHistoryError {
    /// The device that failed.
    pub device_id: String,
    /// Why it failed.
    pub error: BatchItemError,
}

/// A geofence that could not be deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteGeofenceError {
    /// The geofence that failed.
    pub geofence_id: String,
    /// Why it failed.
    pub error: BatchItemError,
}

/// A device position that could not be evaluated against geofences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchEvaluateGeofencesError {
    /// The device that failed.
    pub device_id: String,
    /// Why it failed.
    pub error: BatchItemError,
    /// Sample time of the failed update.
    pub sample_time: DateTime<Utc>,
}

/// A device whose position could not be retrieved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchGetDevicePositionError {
    /// The device that failed.
    pub device_id: String,
    /// Why it failed.
    pub error: BatchItemError,
}

/// A geofence that could not be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchPutGeofenceError {
    /// The geofence that failed.
    pub geofence_id: String,
    /// Why it failed.
    pub error: BatchItemError,
}

/// A geofence that was stored successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchPutGeofenceSuccess {
    /// When the geofence was created.
    pub create_time: DateTime<Utc>,
    /// The stored geofence.
    pub geofence_id: String,
    /// When the geofence was last updated.
    pub update_time: DateTime<Utc>,
}

/// A device position update that could not be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchUpdateDevicePositionError {
    /// The device that failed.
    pub device_id: String,
    /// Why it failed.
    pub error: BatchItemError,
    /// Sample time of the failed update.
    pub sample_time: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Horizontal accuracy of a position, in meters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PositionalAccuracy {
    /// Estimated horizontal accuracy radius in meters.
    pub horizontal: f64,
}

/// A device position update sent to a tracker or evaluated against geofences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DevicePositionUpdate {
    /// Position accuracy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,
    /// The device reporting the position.
    pub device_id: String,
    /// `[longitude, latitude]`.
    pub position: Vec<f64>,
    /// Up to three free-form properties.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
    /// When the position was sampled on the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,
}

/// A stored device position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DevicePosition {
    /// Position accuracy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,
    /// The device that reported the position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// `[longitude, latitude]`.
    pub position: Vec<f64>,
    /// Free-form properties attached to the update.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
    /// When the tracker received the position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_time: Option<DateTime<Utc>>,
    /// When the position was sampled on the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,
}

/// One device entry returned by `ListDevicePositions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListDevicePositionsResponseEntry {
    /// Position accuracy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,
    /// The device.
    pub device_id: String,
    /// Last known `[longitude, latitude]`.
    pub position: Vec<f64>,
    /// Free-form properties attached to the update.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
    /// When the position was sampled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,
}

/// One tracker entry returned by `ListTrackers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListTrackersResponseEntry {
    /// When the tracker was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Tracker description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Data source backing the pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
    /// Tracker name.
    pub tracker_name: String,
    /// When the tracker was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Geofencing
// ---------------------------------------------------------------------------

/// A circular geofence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Circle {
    /// Center as `[longitude, latitude]`.
    pub center: Vec<f64>,
    /// Radius in meters.
    pub radius: f64,
}

/// Geometry of a geofence: either a circle or a polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GeofenceGeometry {
    /// Circular geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle: Option<Circle>,
    /// Linear rings, each a closed list of `[longitude, latitude]` vertices.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub polygon: Vec<Vec<Vec<f64>>>,
}

/// One geofence in a `BatchPutGeofence` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchPutGeofenceRequestEntry {
    /// Identifier of the geofence.
    pub geofence_id: String,
    /// Geometry of the geofence.
    pub geometry: GeofenceGeometry,
}

/// One collection entry returned by `ListGeofenceCollections`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListGeofenceCollectionsResponseEntry {
    /// Collection name.
    pub collection_name: String,
    /// When the collection was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Collection description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// Data source backing the pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
    /// When the collection was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// One geofence entry returned by `ListGeofences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListGeofenceResponseEntry {
    /// When the geofence was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Geofence identifier.
    pub geofence_id: String,
    /// Geofence geometry.
    pub geometry: GeofenceGeometry,
    /// Geofence status (e.g. `ACTIVE`, `PENDING`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the geofence was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Map style configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MapConfiguration {
    /// Style name, e.g. `VectorEsriStreets`.
    pub style: String,
}

/// One map entry returned by `ListMaps`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListMapsResponseEntry {
    /// When the map was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Data provider of the map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// Map description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Map name.
    pub map_name: String,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// When the map was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Data storage option for place search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataSourceConfiguration {
    /// How results are going to be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_use: Option<IntendedUse>,
}

/// Geometry of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlaceGeometry {
    /// `[longitude, latitude]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub point: Vec<f64>,
}

/// Time zone of a place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TimeZone {
    /// IANA time zone name.
    pub name: String,
    /// Offset from UTC in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
}

/// A place returned by place search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Place {
    /// Street number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    /// ISO 3166 alpha-3 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Place geometry.
    pub geometry: PlaceGeometry,
    /// Whether the position was interpolated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolated: Option<bool>,
    /// Full display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// City or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    /// Neighborhood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// County or district.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,
    /// Time zone of the place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
}

/// One result of a reverse geocoding search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchForPositionResult {
    /// Distance in meters from the queried position.
    pub distance: f64,
    /// The place found.
    pub place: Place,
}

/// One result of a text search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchForTextResult {
    /// Distance in meters from the bias position, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// The place found.
    pub place: Place,
    /// Relevance score between 0 and 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

/// Echo of a reverse geocoding request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchPlaceIndexForPositionSummary {
    /// Data provider used.
    pub data_source: String,
    /// Preferred language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result limit applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// The queried position.
    pub position: Vec<f64>,
}

/// Echo of a text search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchPlaceIndexForTextSummary {
    /// Bias position used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bias_position: Vec<f64>,
    /// Data provider used.
    pub data_source: String,
    /// Bounding box filter used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_b_box: Vec<f64>,
    /// Country filter used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_countries: Vec<String>,
    /// Preferred language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result limit applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// Bounding box of all results.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub result_b_box: Vec<f64>,
    /// The searched text.
    pub text: String,
}

/// One place index entry returned by `ListPlaceIndexes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListPlaceIndexesResponseEntry {
    /// When the index was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Data provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// Index description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Index name.
    pub index_name: String,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// When the index was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Route options for cars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteCarModeOptions {
    /// Avoid ferries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_ferries: Option<bool>,
    /// Avoid tolls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_tolls: Option<bool>,
}

/// Truck dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TruckDimensions {
    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Unit of all dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<DimensionUnit>,
    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Truck weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TruckWeight {
    /// Total weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Weight unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<VehicleWeightUnit>,
}

/// Route options for trucks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteTruckModeOptions {
    /// Avoid ferries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_ferries: Option<bool>,
    /// Avoid tolls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_tolls: Option<bool>,
    /// Truck dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<TruckDimensions>,
    /// Truck weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<TruckWeight>,
}

/// Geometry of a route leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LegGeometry {
    /// Ordered `[longitude, latitude]` vertices of the leg.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_string: Vec<Vec<f64>>,
}

/// One step of a route leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Step {
    /// Travel distance of the step.
    pub distance: f64,
    /// Travel time of the step in seconds.
    pub duration_seconds: f64,
    /// Where the step ends.
    pub end_position: Vec<f64>,
    /// Index of the step's first vertex in the leg's line string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry_offset: Option<i32>,
    /// Where the step starts.
    pub start_position: Vec<f64>,
}

/// One leg of a calculated route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Leg {
    /// Travel distance of the leg.
    pub distance: f64,
    /// Travel time of the leg in seconds.
    pub duration_seconds: f64,
    /// Where the leg ends.
    pub end_position: Vec<f64>,
    /// Leg geometry, present when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<LegGeometry>,
    /// Where the leg starts.
    pub start_position: Vec<f64>,
    /// Steps of the leg.
    pub steps: Vec<Step>,
}

/// Summary of a calculated route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteSummary {
    /// Data provider used.
    pub data_source: String,
    /// Total distance.
    pub distance: f64,
    /// Unit of all distances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Total travel time in seconds.
    pub duration_seconds: f64,
    /// Bounding box of the route `[min_lon, min_lat, max_lon, max_lat]`.
    pub route_b_box: Vec<f64>,
}

/// Error of a single route matrix cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteMatrixEntryError {
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<RouteMatrixErrorCode>,
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One cell of a route matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RouteMatrixEntry {
    /// Travel distance, absent when the cell failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Travel time in seconds, absent when the cell failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Why the cell failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RouteMatrixEntryError>,
}

/// Summary of a route matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CalculateRouteMatrixSummary {
    /// Data provider used.
    pub data_source: String,
    /// Unit of all distances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    /// Number of failed cells.
    pub error_count: i32,
    /// Number of cells.
    pub route_count: i32,
}

/// One route calculator entry returned by `ListRouteCalculators`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListRouteCalculatorsResponseEntry {
    /// Calculator name.
    pub calculator_name: String,
    /// When the calculator was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    /// Data provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// Calculator description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pricing plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
    /// When the calculator was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_normalize_enum_from_variant_and_string() {
        let from_variant = TravelMode::Truck;
        let from_string: TravelMode = "Truck".into();
        assert_eq!(from_variant, from_string);
        assert_eq!(from_string.as_str(), "Truck");
        assert!(from_string.is_known());
    }

    #[test]
    fn test_should_keep_unknown_enum_value() {
        let mode: TravelMode = "Bicycle".parse().unwrap();
        assert_eq!(mode, TravelMode::Unknown("Bicycle".to_owned()));
        assert_eq!(mode.to_string(), "Bicycle");
        assert!(!mode.is_known());
    }

    #[test]
    fn test_should_serialize_enum_as_canonical_string() {
        let json = serde_json::to_string(&BatchItemErrorCode::ResourceNotFoundError).unwrap();
        assert_eq!(json, "\"ResourceNotFoundError\"");
        let parsed: BatchItemErrorCode = serde_json::from_str("\"ThrottlingError\"").unwrap();
        assert_eq!(parsed, BatchItemErrorCode::ThrottlingError);
    }

    #[test]
    fn test_should_list_known_values() {
        assert_eq!(DistanceUnit::VALUES, &["Kilometers", "Miles"]);
        assert_eq!(RouteMatrixErrorCode::VALUES.len(), 6);
    }

    #[test]
    fn test_should_use_pascal_case_bbox_names() {
        let summary = CalculateRouteSummary {
            route_b_box: vec![1.0, 2.0, 3.0, 4.0],
            ..Default::default()
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("RouteBBox").is_some());
    }

    #[test]
    fn test_should_decode_geometry_with_polygon() {
        let json = r#"{"Polygon":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}"#;
        let geometry: GeofenceGeometry = serde_json::from_str(json).unwrap();
        assert!(geometry.circle.is_none());
        assert_eq!(geometry.polygon[0].len(), 4);
        assert_eq!(geometry.polygon[0][2], vec![1.0, 1.0]);
    }
}
