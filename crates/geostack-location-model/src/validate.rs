//! Schema constraint validation.
//!
//! Validation serializes a shape to a JSON value and walks it against the
//! shape's schema, stopping at the first violation. Violations carry the
//! member path (`Updates[1].DeviceId`) so callers can tell which element of a
//! nested list failed.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use parking_lot::Mutex;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::schema::{FieldKind, Member, Shape, ShapeSchema};

/// Compiled patterns, keyed by their source.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// A single schema constraint that a value does not satisfy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{shape}.{path}: {kind}")]
pub struct ConstraintViolation {
    /// Shape whose member failed.
    pub shape: &'static str,
    /// Path of the offending member, e.g. `Entries[0].Geometry.Circle`.
    pub path: String,
    /// What went wrong.
    pub kind: ViolationKind,
}

/// The kind of constraint that failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViolationKind {
    /// A required member is absent.
    #[error("required member is missing")]
    Missing,

    /// A length is outside its bounds.
    #[error("length {actual} is outside {}", Bounds(.min, .max))]
    Length {
        /// Observed length.
        actual: usize,
        /// Minimum length.
        min: Option<usize>,
        /// Maximum length.
        max: Option<usize>,
    },

    /// A number is outside its bounds.
    #[error("value {actual} is outside {}", Bounds(.min, .max))]
    Range {
        /// Observed value.
        actual: f64,
        /// Minimum value.
        min: Option<f64>,
        /// Maximum value.
        max: Option<f64>,
    },

    /// A string does not match its pattern.
    #[error("value {actual:?} does not match pattern {pattern}")]
    Pattern {
        /// Observed value.
        actual: String,
        /// Expected pattern.
        pattern: &'static str,
    },

    /// A string is not one of the allowed enum values.
    #[error("value {actual:?} is not one of {allowed:?}")]
    EnumValue {
        /// Observed value.
        actual: String,
        /// Allowed values.
        allowed: &'static [&'static str],
    },

    /// A value has the wrong JSON type.
    #[error("expected a {expected} value")]
    TypeMismatch {
        /// Expected kind.
        expected: &'static str,
    },

    /// A pattern in the schema does not compile.
    #[error("invalid pattern {pattern}: {message}")]
    InvalidPattern {
        /// The pattern source.
        pattern: &'static str,
        /// Compiler error.
        message: String,
    },
}

/// Display helper for optional bounds.
struct Bounds<'a, T>(&'a Option<T>, &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Bounds<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0, self.1) {
            (Some(min), Some(max)) => write!(f, "[{min}, {max}]"),
            (Some(min), None) => write!(f, "[{min}, ..)"),
            (None, Some(max)) => write!(f, "(.., {max}]"),
            (None, None) => f.write_str("(.., ..)"),
        }
    }
}

/// Validate a shape against its schema.
///
/// # Errors
/// Returns the first violated constraint.
pub fn validate<S: Shape + Serialize>(shape: &S) -> Result<(), ConstraintViolation> {
    let value = serde_json::to_value(shape).map_err(|_| ConstraintViolation {
        shape: S::SCHEMA.name,
        path: String::new(),
        kind: ViolationKind::TypeMismatch {
            expected: "structure",
        },
    })?;
    validate_value(S::SCHEMA, &value)
}

/// Validate a JSON value against a schema.
///
/// # Errors
/// Returns the first violated constraint.
pub fn validate_value(schema: &'static ShapeSchema, value: &Value) -> Result<(), ConstraintViolation> {
    let mut path = String::new();
    check_structure(schema, value, &mut path).map_err(|(path, kind)| ConstraintViolation {
        shape: schema.name,
        path,
        kind,
    })
}

type Failure = (String, ViolationKind);

fn check_structure(schema: &ShapeSchema, value: &Value, path: &mut String) -> Result<(), Failure> {
    let Value::Object(object) = value else {
        return Err(fail(path, ViolationKind::TypeMismatch {
            expected: "structure",
        }));
    };

    for field in schema.fields {
        let len = path.len();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(field.wire_name);

        match object.get(field.wire_name) {
            None | Some(Value::Null) => {
                if field.required {
                    return Err(fail(path, ViolationKind::Missing));
                }
            }
            Some(v) => check_member(&field.member, v, path)?,
        }

        path.truncate(len);
    }
    Ok(())
}

fn check_member(member: &Member, value: &Value, path: &mut String) -> Result<(), Failure> {
    let constraints = &member.constraints;
    match member.kind {
        FieldKind::String => {
            let s = expect_str(value, "string", path)?;
            check_length(s.chars().count(), member, path)?;
            if let Some(pattern) = constraints.pattern {
                check_pattern(s, pattern, path)?;
            }
        }
        FieldKind::Enum(allowed) => {
            let s = expect_str(value, "string", path)?;
            if !allowed.contains(&s) {
                return Err(fail(path, ViolationKind::EnumValue {
                    actual: s.to_owned(),
                    allowed,
                }));
            }
        }
        FieldKind::Timestamp => {
            if !(value.is_string() || value.is_number()) {
                return Err(fail(path, ViolationKind::TypeMismatch {
                    expected: "timestamp",
                }));
            }
        }
        FieldKind::Blob => {
            let s = expect_str(value, "blob", path)?;
            let bytes = STANDARD
                .decode(s)
                .map_err(|_| fail(path, ViolationKind::TypeMismatch { expected: "blob" }))?;
            check_length(bytes.len(), member, path)?;
        }
        FieldKind::Integer | FieldKind::Double => {
            let Some(n) = value.as_f64() else {
                return Err(fail(path, ViolationKind::TypeMismatch {
                    expected: member.kind.type_name(),
                }));
            };
            if matches!(member.kind, FieldKind::Integer) && !(value.is_i64() || value.is_u64()) {
                return Err(fail(path, ViolationKind::TypeMismatch {
                    expected: "integer",
                }));
            }
            let below = constraints.min.is_some_and(|min| n < min);
            let above = constraints.max.is_some_and(|max| n > max);
            if below || above {
                return Err(fail(path, ViolationKind::Range {
                    actual: n,
                    min: constraints.min,
                    max: constraints.max,
                }));
            }
        }
        FieldKind::Boolean => {
            if !value.is_boolean() {
                return Err(fail(path, ViolationKind::TypeMismatch {
                    expected: "boolean",
                }));
            }
        }
        FieldKind::List(item) => {
            let Value::Array(items) = value else {
                return Err(fail(path, ViolationKind::TypeMismatch { expected: "list" }));
            };
            check_length(items.len(), member, path)?;
            for (i, v) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                check_member(item, v, path)?;
                path.truncate(len);
            }
        }
        FieldKind::Map { key, value: item } => {
            let Value::Object(entries) = value else {
                return Err(fail(path, ViolationKind::TypeMismatch { expected: "map" }));
            };
            check_length(entries.len(), member, path)?;
            for (k, v) in entries {
                let len = path.len();
                path.push_str(&format!("[{k:?}]"));
                check_member(key, &Value::String(k.clone()), path)?;
                check_member(item, v, path)?;
                path.truncate(len);
            }
        }
        FieldKind::Structure(schema) => check_structure(schema, value, path)?,
    }
    Ok(())
}

fn expect_str<'v>(value: &'v Value, expected: &'static str, path: &str) -> Result<&'v str, Failure> {
    value
        .as_str()
        .ok_or_else(|| fail(path, ViolationKind::TypeMismatch { expected }))
}

fn check_length(actual: usize, member: &Member, path: &str) -> Result<(), Failure> {
    let min = member.constraints.min_length;
    let max = member.constraints.max_length;
    if min.is_some_and(|m| actual < m) || max.is_some_and(|m| actual > m) {
        return Err(fail(path, ViolationKind::Length { actual, min, max }));
    }
    Ok(())
}

fn check_pattern(s: &str, pattern: &'static str, path: &str) -> Result<(), Failure> {
    let mut cache = PATTERNS.lock();
    let regex = match cache.get(pattern) {
        Some(regex) => regex,
        None => {
            let compiled = Regex::new(pattern).map_err(|e| {
                fail(path, ViolationKind::InvalidPattern {
                    pattern,
                    message: e.to_string(),
                })
            })?;
            cache.entry(pattern).or_insert(compiled)
        }
    };
    if regex.is_match(s) {
        Ok(())
    } else {
        Err(fail(path, ViolationKind::Pattern {
            actual: s.to_owned(),
            pattern,
        }))
    }
}

fn fail(path: &str, kind: ViolationKind) -> Failure {
    (path.to_owned(), kind)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone as _, Utc};

    use super::*;
    use crate::input::{
        BatchDeleteGeofenceInput, BatchUpdateDevicePositionInput, CalculateRouteInput,
        CreateTrackerInput, SearchPlaceIndexForTextInput, TagResourceInput, UntagResourceInput,
    };
    use crate::schema::FieldSchema;
    use crate::types::{DevicePositionUpdate, TravelMode};

    fn update(device_id: &str) -> DevicePositionUpdate {
        DevicePositionUpdate {
            device_id: device_id.to_owned(),
            position: vec![-123.1, 49.28],
            sample_time: Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_should_accept_valid_input() {
        let input = BatchDeleteGeofenceInput {
            collection_name: "fleet-fences".to_owned(),
            geofence_ids: vec!["g1".to_owned(), "g2".to_owned()],
        };
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_should_reject_name_longer_than_100() {
        let input = CreateTrackerInput {
            tracker_name: "a".repeat(101),
            ..Default::default()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "TrackerName");
        assert!(matches!(
            err.kind,
            ViolationKind::Length {
                actual: 101,
                min: Some(1),
                max: Some(100)
            }
        ));
    }

    #[test]
    fn test_should_reject_name_with_invalid_characters() {
        let input = CreateTrackerInput {
            tracker_name: "fleet A/1".to_owned(),
            ..Default::default()
        };
        let err = validate(&input).unwrap_err();
        assert!(matches!(err.kind, ViolationKind::Pattern { .. }));
    }

    #[test]
    fn test_should_reject_empty_batch() {
        let input = BatchDeleteGeofenceInput {
            collection_name: "fences".to_owned(),
            geofence_ids: Vec::new(),
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "GeofenceIds");
    }

    #[test]
    fn test_should_require_sample_time_on_updates() {
        let mut missing = update("truck-1");
        missing.sample_time = None;
        let input = BatchUpdateDevicePositionInput {
            tracker_name: "fleetA".to_owned(),
            updates: vec![update("truck-0"), missing],
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "Updates[1].SampleTime");
        assert_eq!(err.kind, ViolationKind::Missing);
    }

    #[test]
    fn test_should_measure_blob_in_decoded_bytes() {
        static BOUNDED: Member = Member::blob().length(1, 4);
        static FIELDS: [FieldSchema; 1] = [FieldSchema::body("Data", BOUNDED).required()];
        static SCHEMA: ShapeSchema = ShapeSchema {
            name: "TileBlob",
            fields: &FIELDS,
        };

        // "tile" is four bytes; padding must not count toward the length
        assert!(validate_value(&SCHEMA, &serde_json::json!({"Data": "dGlsZQ=="})).is_ok());

        let err = validate_value(&SCHEMA, &serde_json::json!({"Data": "dGlsZXM="})).unwrap_err();
        assert!(matches!(err.kind, ViolationKind::Length { actual: 5, .. }));

        let err = validate_value(&SCHEMA, &serde_json::json!({"Data": "%%%"})).unwrap_err();
        assert_eq!(err.kind, ViolationKind::TypeMismatch { expected: "blob" });
    }

    #[test]
    fn test_should_report_nested_path() {
        let input = BatchUpdateDevicePositionInput {
            tracker_name: "fleetA".to_owned(),
            updates: vec![update("truck-1"), update("truck/7")],
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "Updates[1].DeviceId");
        assert_eq!(err.shape, "BatchUpdateDevicePositionInput");
    }

    #[test]
    fn test_should_reject_position_with_three_coordinates() {
        let input = CalculateRouteInput {
            calculator_name: "calc".to_owned(),
            departure_position: vec![1.0, 2.0, 3.0],
            destination_position: vec![1.0, 2.0],
            ..Default::default()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "DeparturePosition");
    }

    #[test]
    fn test_should_reject_unknown_enum_value_on_send() {
        let input = CalculateRouteInput {
            calculator_name: "calc".to_owned(),
            departure_position: vec![1.0, 2.0],
            destination_position: vec![1.0, 2.0],
            travel_mode: Some(TravelMode::from("Bicycle")),
            ..Default::default()
        };
        let err = validate(&input).unwrap_err();
        assert!(matches!(err.kind, ViolationKind::EnumValue { .. }));
    }

    #[test]
    fn test_should_check_search_bounds() {
        let input = SearchPlaceIndexForTextInput {
            index_name: "places".to_owned(),
            text: "coffee".to_owned(),
            max_results: Some(51),
            ..Default::default()
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "MaxResults");
        assert!(matches!(err.kind, ViolationKind::Range { .. }));

        let input = SearchPlaceIndexForTextInput {
            filter_countries: vec!["usa".to_owned()],
            max_results: None,
            ..input
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "FilterCountries[0]");
    }

    #[test]
    fn test_should_validate_tags() {
        let arn = "arn:aws:geo:us-east-1:123456789012:tracker/fleetA".to_owned();
        let input = TagResourceInput {
            resource_arn: arn.clone(),
            tags: HashMap::from([("team".to_owned(), "ops".to_owned())]),
        };
        assert!(validate(&input).is_ok());

        let input = TagResourceInput {
            resource_arn: arn,
            tags: HashMap::from([(String::new(), "ops".to_owned())]),
        };
        let err = validate(&input).unwrap_err();
        assert!(err.path.starts_with("Tags["));
    }

    #[test]
    fn test_should_require_untag_keys() {
        let input = UntagResourceInput {
            resource_arn: "arn:aws:geo:us-east-1:123456789012:map/city".to_owned(),
            tag_keys: Vec::new(),
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.path, "TagKeys");
    }

    #[test]
    fn test_should_render_violation_message() {
        let input = CreateTrackerInput::default();
        let err = validate(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CreateTrackerInput.TrackerName: length 0 is outside [1, 100]"
        );
    }
}
