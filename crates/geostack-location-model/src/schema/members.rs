//! Member types shared across shapes.

use super::Member;
use crate::types::{
    BatchItemErrorCode, DimensionUnit, DistanceUnit, IntendedUse, PositionFiltering, PricingPlan,
    RouteMatrixErrorCode, TravelMode, VehicleWeightUnit,
};

/// Tracker, collection, map, index, and calculator names.
pub const NAME_PATTERN: &str = r"^[-._\w]+$";
/// Device and geofence identifiers.
pub const ID_PATTERN: &str = r"^[-._\p{L}\p{N}]+$";
/// Location resource ARNs.
pub const ARN_PATTERN: &str =
    r"^arn(:[a-z0-9]+([.-][a-z0-9]+)*){2}(:([a-z0-9]+([.-][a-z0-9]+)*)?){2}:([^/].*)?$";
/// Tag keys and values.
pub const TAG_PATTERN: &str = r"^([\p{L}\p{Z}\p{N}_.,:/=+\-@]*)$";
/// ISO 3166 alpha-3 country codes.
pub const COUNTRY_CODE_PATTERN: &str = r"^[A-Z]{3}$";

pub const STRING: Member = Member::string();
pub const INTEGER: Member = Member::integer();
pub const DOUBLE: Member = Member::double();
pub const BOOLEAN: Member = Member::boolean();
pub const TIMESTAMP: Member = Member::timestamp();
pub const BLOB: Member = Member::blob();

pub const RESOURCE_NAME: Member = Member::string().length(1, 100).pattern(NAME_PATTERN);
pub const IDENTIFIER: Member = Member::string().length(1, 100).pattern(ID_PATTERN);
pub const ARN: Member = Member::string().length(0, 1600).pattern(ARN_PATTERN);
pub const DESCRIPTION: Member = Member::string().length(0, 1000);
pub const KMS_KEY_ID: Member = Member::string().length(1, 2048);
pub const DATA_SOURCE: Member = Member::string().min_length(1);
pub const NEXT_TOKEN: Member = Member::string().length(1, 2000);
pub const LIST_MAX_RESULTS: Member = Member::integer().range(1.0, 100.0);
pub const SEARCH_MAX_RESULTS: Member = Member::integer().range(1.0, 50.0);
pub const LANGUAGE: Member = Member::string().length(2, 35);
pub const MAP_STYLE: Member = Member::string().length(1, 100).pattern(NAME_PATTERN);

pub const POSITION: Member = Member::list(&DOUBLE).length(2, 2);
pub const BOUNDING_BOX: Member = Member::list(&DOUBLE).length(4, 4);
pub const POSITION_LIST: Member = Member::list(&POSITION);

pub const TAG_KEY: Member = Member::string().length(1, 128).pattern(TAG_PATTERN);
pub const TAG_VALUE: Member = Member::string().length(0, 256).pattern(TAG_PATTERN);
pub const TAGS: Member = Member::map(&TAG_KEY, &TAG_VALUE).length(0, 50);
pub const TAG_KEYS: Member = Member::list(&TAG_KEY).length(1, 50);

pub const PROPERTY_KEY: Member = Member::string().length(1, 20);
pub const PROPERTY_VALUE: Member = Member::string().length(1, 40);
pub const POSITION_PROPERTIES: Member = Member::map(&PROPERTY_KEY, &PROPERTY_VALUE).length(0, 3);

pub const DEVICE_ID_BATCH: Member = Member::list(&IDENTIFIER).length(1, 10);
pub const GEOFENCE_ID_BATCH: Member = Member::list(&IDENTIFIER).length(1, 10);
pub const STRING_LIST: Member = Member::list(&STRING);
pub const COUNTRY_CODE: Member = Member::string().pattern(COUNTRY_CODE_PATTERN);
pub const COUNTRY_CODES: Member = Member::list(&COUNTRY_CODE).length(1, 100);

pub const PRICING_PLAN: Member = Member::enumeration(PricingPlan::VALUES);
pub const POSITION_FILTERING: Member = Member::enumeration(PositionFiltering::VALUES);
pub const INTENDED_USE: Member = Member::enumeration(IntendedUse::VALUES);
pub const DISTANCE_UNIT: Member = Member::enumeration(DistanceUnit::VALUES);
pub const TRAVEL_MODE: Member = Member::enumeration(TravelMode::VALUES);
pub const DIMENSION_UNIT: Member = Member::enumeration(DimensionUnit::VALUES);
pub const WEIGHT_UNIT: Member = Member::enumeration(VehicleWeightUnit::VALUES);
pub const BATCH_ITEM_ERROR_CODE: Member = Member::enumeration(BatchItemErrorCode::VALUES);
pub const ROUTE_MATRIX_ERROR_CODE: Member = Member::enumeration(RouteMatrixErrorCode::VALUES);
