//! Batch result assembly.
//!
//! Batch operations answer with per-item errors (and, for `BatchPutGeofence`
//! and `BatchGetDevicePosition`, explicit successes). [`assemble`] pairs the
//! response with the request so callers get one report listing which keys
//! succeeded and which failed, in a stable order.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::input::{
    BatchDeleteDevicePositionHistoryInput, BatchDeleteGeofenceInput, BatchEvaluateGeofencesInput,
    BatchGetDevicePositionInput, BatchPutGeofenceInput, BatchUpdateDevicePositionInput,
};
use crate::output::{
    BatchDeleteDevicePositionHistoryOutput, BatchDeleteGeofenceOutput,
    BatchEvaluateGeofencesOutput, BatchGetDevicePositionOutput, BatchPutGeofenceOutput,
    BatchUpdateDevicePositionOutput,
};
use crate::types::{BatchItemError, DevicePositionUpdate};

/// Identifies one device position sample in an update or evaluation batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceSample {
    /// Device identifier.
    pub device_id: String,
    /// Sample timestamp, absent when the update did not carry one.
    pub sample_time: Option<DateTime<Utc>>,
}

impl From<&DevicePositionUpdate> for DeviceSample {
    fn from(update: &DevicePositionUpdate) -> Self {
        Self {
            device_id: update.device_id.clone(),
            sample_time: update.sample_time,
        }
    }
}

/// A batch request: the keys it asks the service to process.
pub trait BatchInput {
    /// Item key.
    type Key: Eq + Hash + Clone + Debug;

    /// Requested keys in request order.
    fn item_keys(&self) -> Vec<Self::Key>;
}

/// A batch response.
pub trait BatchOutput {
    /// Item key.
    type Key: Eq + Hash + Clone + Debug;

    /// Failed items in response order.
    fn failures(&self) -> Vec<(Self::Key, BatchItemError)>;

    /// Keys the service explicitly reports as succeeded, when it does.
    fn success_keys(&self) -> Option<Vec<Self::Key>> {
        None
    }
}

/// Outcome of a batch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport<K> {
    /// Keys that succeeded, in request order.
    pub succeeded: Vec<K>,
    /// Keys that failed with their error, in response order.
    pub failed: Vec<(K, BatchItemError)>,
}

impl<K> BatchReport<K> {
    /// Number of items accounted for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Whether the report holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every item succeeded.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// A batch response that does not match its request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchInconsistency {
    /// The response names a key that was never requested.
    #[error("response reports unrequested item {0}")]
    Unrequested(String),

    /// The same key is reported more than once.
    #[error("item {0} is reported more than once")]
    Duplicate(String),

    /// Reported successes and failures do not cover the request.
    #[error("response accounts for {reported} of {requested} requested items")]
    Incomplete {
        /// Distinct keys in the request.
        requested: usize,
        /// Keys the response accounts for.
        reported: usize,
    },
}

/// Pair a batch response with its request.
///
/// # Errors
/// Returns a [`BatchInconsistency`] when the response reports a key that was
/// not requested, reports a key twice (including in both collections), or
/// lists explicit successes that leave requested keys unaccounted for.
pub fn assemble<K, I, O>(input: &I, output: &O) -> Result<BatchReport<K>, BatchInconsistency>
where
    K: Eq + Hash + Clone + Debug,
    I: BatchInput<Key = K>,
    O: BatchOutput<Key = K>,
{
    let mut requested = Vec::new();
    let mut requested_set = HashSet::new();
    for key in input.item_keys() {
        if requested_set.insert(key.clone()) {
            requested.push(key);
        }
    }

    let failed = output.failures();
    let mut seen = HashSet::with_capacity(failed.len());
    for (key, _) in &failed {
        check_reported(key, &requested_set, &mut seen)?;
    }

    let succeeded = match output.success_keys() {
        Some(explicit) => {
            for key in &explicit {
                check_reported(key, &requested_set, &mut seen)?;
            }
            let reported = seen.len();
            if reported != requested.len() {
                warn!(requested = requested.len(), reported, "incomplete batch response");
                return Err(BatchInconsistency::Incomplete {
                    requested: requested.len(),
                    reported,
                });
            }
            requested.into_iter().filter(|k| explicit.contains(k)).collect()
        }
        None => requested.into_iter().filter(|k| !seen.contains(k)).collect(),
    };

    Ok(BatchReport { succeeded, failed })
}

fn check_reported<K: Eq + Hash + Clone + Debug>(
    key: &K,
    requested: &HashSet<K>,
    seen: &mut HashSet<K>,
) -> Result<(), BatchInconsistency> {
    if !requested.contains(key) {
        warn!(key = ?key, "batch response reports unrequested item");
        return Err(BatchInconsistency::Unrequested(format!("{key:?}")));
    }
    if !seen.insert(key.clone()) {
        warn!(key = ?key, "batch response reports item twice");
        return Err(BatchInconsistency::Duplicate(format!("{key:?}")));
    }
    Ok(())
}

macro_rules! impl_batch_ids {
    ($($input:ty => $ids:ident, $output:ty => $id:ident;)+) => {
        $(
            impl BatchInput for $input {
                type Key = String;

                fn item_keys(&self) -> Vec<String> {
                    self.$ids.clone()
                }
            }

            impl BatchOutput for $output {
                type Key = String;

                fn failures(&self) -> Vec<(String, BatchItemError)> {
                    self.errors
                        .iter()
                        .map(|e| (e.$id.clone(), e.error.clone()))
                        .collect()
                }
            }
        )+
    };
}

impl_batch_ids! {
    BatchDeleteDevicePositionHistoryInput => device_ids,
        BatchDeleteDevicePositionHistoryOutput => device_id;
    BatchDeleteGeofenceInput => geofence_ids, BatchDeleteGeofenceOutput => geofence_id;
}

macro_rules! impl_batch_samples {
    ($($input:ty => $updates:ident, $output:ty;)+) => {
        $(
            impl BatchInput for $input {
                type Key = DeviceSample;

                fn item_keys(&self) -> Vec<DeviceSample> {
                    self.$updates.iter().map(DeviceSample::from).collect()
                }
            }

            impl BatchOutput for $output {
                type Key = DeviceSample;

                fn failures(&self) -> Vec<(DeviceSample, BatchItemError)> {
                    self.errors
                        .iter()
                        .map(|e| {
                            let key = DeviceSample {
                                device_id: e.device_id.clone(),
                                sample_time: Some(e.sample_time),
                            };
                            (key, e.error.clone())
                        })
                        .collect()
                }
            }
        )+
    };
}

impl_batch_samples! {
    BatchUpdateDevicePositionInput => updates, BatchUpdateDevicePositionOutput;
    BatchEvaluateGeofencesInput => device_position_updates, BatchEvaluateGeofencesOutput;
}

impl BatchInput for BatchGetDevicePositionInput {
    type Key = String;

    fn item_keys(&self) -> Vec<String> {
        self.device_ids.clone()
    }
}

impl BatchOutput for BatchGetDevicePositionOutput {
    type Key = String;

    fn failures(&self) -> Vec<(String, BatchItemError)> {
        self.errors
            .iter()
            .map(|e| (e.device_id.clone(), e.error.clone()))
            .collect()
    }

    fn success_keys(&self) -> Option<Vec<String>> {
        Some(
            self.device_positions
                .iter()
                .filter_map(|p| p.device_id.clone())
                .collect(),
        )
    }
}

impl BatchInput for BatchPutGeofenceInput {
    type Key = String;

    fn item_keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.geofence_id.clone()).collect()
    }
}

impl BatchOutput for BatchPutGeofenceOutput {
    type Key = String;

    fn failures(&self) -> Vec<(String, BatchItemError)> {
        self.errors
            .iter()
            .map(|e| (e.geofence_id.clone(), e.error.clone()))
            .collect()
    }

    fn success_keys(&self) -> Option<Vec<String>> {
        Some(self.successes.iter().map(|s| s.geofence_id.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;
    use crate::types::{
        BatchDeleteGeofenceError, BatchItemErrorCode, BatchPutGeofenceError,
        BatchPutGeofenceRequestEntry, BatchPutGeofenceSuccess, BatchUpdateDevicePositionError,
        DevicePosition,
    };

    fn item_error(code: BatchItemErrorCode) -> BatchItemError {
        BatchItemError {
            code: Some(code),
            message: Some("not found".to_owned()),
        }
    }

    fn delete_input(ids: &[&str]) -> BatchDeleteGeofenceInput {
        BatchDeleteGeofenceInput {
            collection_name: "fleetA".to_owned(),
            geofence_ids: ids.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    fn delete_error(id: &str) -> BatchDeleteGeofenceError {
        BatchDeleteGeofenceError {
            geofence_id: id.to_owned(),
            error: item_error(BatchItemErrorCode::ResourceNotFoundError),
        }
    }

    #[test]
    fn test_should_split_partial_failure() {
        let input = delete_input(&["g1", "g2", "g3"]);
        let output = BatchDeleteGeofenceOutput {
            errors: vec![delete_error("g2")],
        };
        let report = assemble(&input, &output).unwrap();
        assert_eq!(report.succeeded, vec!["g1".to_owned(), "g3".to_owned()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "g2");
        assert_eq!(
            report.failed[0].1.code,
            Some(BatchItemErrorCode::ResourceNotFoundError)
        );
        assert_eq!(report.len(), 3);
        assert!(!report.is_complete_success());
    }

    #[test]
    fn test_should_report_full_success() {
        let input = delete_input(&["g1", "g2"]);
        let report = assemble(&input, &BatchDeleteGeofenceOutput::default()).unwrap();
        assert_eq!(report.succeeded.len(), 2);
        assert!(report.is_complete_success());
    }

    #[test]
    fn test_should_collapse_duplicate_requested_keys() {
        let input = delete_input(&["g1", "g1", "g2"]);
        let report = assemble(&input, &BatchDeleteGeofenceOutput::default()).unwrap();
        assert_eq!(report.succeeded, vec!["g1".to_owned(), "g2".to_owned()]);
    }

    #[test]
    fn test_should_reject_unrequested_key() {
        let input = delete_input(&["g1"]);
        let output = BatchDeleteGeofenceOutput {
            errors: vec![delete_error("g9")],
        };
        let err = assemble(&input, &output).unwrap_err();
        assert!(matches!(err, BatchInconsistency::Unrequested(_)));
    }

    #[test]
    fn test_should_reject_key_in_both_collections() {
        let input = BatchPutGeofenceInput {
            collection_name: "fleetA".to_owned(),
            entries: vec![BatchPutGeofenceRequestEntry {
                geofence_id: "g1".to_owned(),
                ..Default::default()
            }],
        };
        let output = BatchPutGeofenceOutput {
            errors: vec![BatchPutGeofenceError {
                geofence_id: "g1".to_owned(),
                error: item_error(BatchItemErrorCode::ValidationError),
            }],
            successes: vec![BatchPutGeofenceSuccess {
                geofence_id: "g1".to_owned(),
                ..Default::default()
            }],
        };
        let err = assemble(&input, &output).unwrap_err();
        assert!(matches!(err, BatchInconsistency::Duplicate(_)));
    }

    #[test]
    fn test_should_detect_missing_explicit_success() {
        let input = BatchGetDevicePositionInput {
            tracker_name: "fleetA".to_owned(),
            device_ids: vec!["d1".to_owned(), "d2".to_owned()],
        };
        let output = BatchGetDevicePositionOutput {
            device_positions: vec![DevicePosition {
                device_id: Some("d1".to_owned()),
                ..Default::default()
            }],
            errors: Vec::new(),
        };
        let err = assemble(&input, &output).unwrap_err();
        assert_eq!(err, BatchInconsistency::Incomplete {
            requested: 2,
            reported: 1
        });
    }

    #[test]
    fn test_should_key_updates_by_device_and_time() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 30).unwrap();
        let update = |sample_time| DevicePositionUpdate {
            device_id: "truck-1".to_owned(),
            position: vec![-123.1, 49.28],
            sample_time: Some(sample_time),
            ..Default::default()
        };
        let input = BatchUpdateDevicePositionInput {
            tracker_name: "fleetA".to_owned(),
            updates: vec![update(t0), update(t1)],
        };
        let output = BatchUpdateDevicePositionOutput {
            errors: vec![BatchUpdateDevicePositionError {
                device_id: "truck-1".to_owned(),
                error: item_error(BatchItemErrorCode::ThrottlingError),
                sample_time: t1,
            }],
        };
        let report = assemble(&input, &output).unwrap();
        assert_eq!(report.succeeded, vec![DeviceSample {
            device_id: "truck-1".to_owned(),
            sample_time: Some(t0),
        }]);
        assert_eq!(report.failed[0].0.sample_time, Some(t1));
    }
}
