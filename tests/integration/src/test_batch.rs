//! Batch operation integration tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use geostack_core::ClientConfig;
    use geostack_location_http::{LocationClient, SdkError};
    use geostack_location_model::batch::{DeviceSample, assemble};
    use geostack_location_model::input::{
        BatchDeleteGeofenceInput, BatchPutGeofenceInput, BatchUpdateDevicePositionInput,
    };
    use geostack_location_model::types::{
        BatchItemErrorCode, BatchPutGeofenceRequestEntry, Circle, DevicePositionUpdate,
        GeofenceGeometry,
    };
    use serde_json::json;

    use crate::{FakeTransport, location_client};

    #[tokio::test]
    async fn test_should_report_partial_geofence_delete_failure() {
        let (client, transport) = location_client();
        transport.respond_json(json!({
            "Errors": [{
                "GeofenceId": "g2",
                "Error": {"Code": "ResourceNotFoundError", "Message": "not found"}
            }]
        }));

        let input = BatchDeleteGeofenceInput {
            collection_name: "fleetA".to_owned(),
            geofence_ids: vec!["g1".to_owned(), "g2".to_owned()],
        };
        let output = client.batch_delete_geofence(input.clone()).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(
            request.uri.to_string(),
            "https://geofencing.geo.us-west-2.amazonaws.com/geofencing/v0/collections/fleetA/delete-geofences"
        );
        assert_eq!(request.json(), json!({"GeofenceIds": ["g1", "g2"]}));

        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].geofence_id, "g2");
        assert_eq!(
            output.errors[0].error.code,
            Some(BatchItemErrorCode::ResourceNotFoundError)
        );
        assert_eq!(output.errors[0].error.message.as_deref(), Some("not found"));

        let report = assemble(&input, &output).unwrap();
        assert_eq!(report.succeeded, vec!["g1".to_owned()]);
        assert_eq!(report.failed.len(), 1);
    }

    #[tokio::test]
    async fn test_should_account_for_every_batch_item() {
        let (client, transport) = location_client();
        let ids: Vec<String> = (1..=10).map(|i| format!("g{i}")).collect();
        transport.respond_json(json!({
            "Errors": [
                {"GeofenceId": "g3", "Error": {"Code": "AccessDeniedError"}},
                {"GeofenceId": "g7", "Error": {"Code": "ThrottlingError"}},
                {"GeofenceId": "g9", "Error": {"Code": "InternalServerError"}}
            ]
        }));

        let input = BatchDeleteGeofenceInput {
            collection_name: "fleetA".to_owned(),
            geofence_ids: ids.clone(),
        };
        let output = client.batch_delete_geofence(input.clone()).await.unwrap();
        let report = assemble(&input, &output).unwrap();

        assert_eq!(report.succeeded.len() + report.failed.len(), ids.len());
        assert!(
            report
                .succeeded
                .iter()
                .all(|id| report.failed.iter().all(|(failed, _)| failed != id))
        );
        let failed: Vec<_> = report.failed.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(failed, ["g3", "g7", "g9"]);
    }

    #[tokio::test]
    async fn test_should_pair_put_successes_and_errors() {
        let (client, transport) = location_client();
        transport.respond_json(json!({
            "Successes": [{
                "GeofenceId": "depot",
                "CreateTime": "2024-05-01T08:00:00Z",
                "UpdateTime": "2024-05-01T08:00:00Z"
            }],
            "Errors": [{
                "GeofenceId": "yard",
                "Error": {"Code": "ValidationError", "Message": "ring is not closed"}
            }]
        }));

        let circle = GeofenceGeometry {
            circle: Some(Circle {
                center: vec![-123.1, 49.28],
                radius: 250.0,
            }),
            ..Default::default()
        };
        let polygon = GeofenceGeometry {
            polygon: vec![vec![
                vec![-123.12, 49.28],
                vec![-123.11, 49.28],
                vec![-123.11, 49.29],
                vec![-123.12, 49.28],
            ]],
            ..Default::default()
        };
        let input = BatchPutGeofenceInput {
            collection_name: "fleetA".to_owned(),
            entries: vec![
                BatchPutGeofenceRequestEntry {
                    geofence_id: "depot".to_owned(),
                    geometry: circle,
                },
                BatchPutGeofenceRequestEntry {
                    geofence_id: "yard".to_owned(),
                    geometry: polygon,
                },
            ],
        };
        let output = client.batch_put_geofence(input.clone()).await.unwrap();

        let body = transport.last_request().json();
        assert_eq!(body["Entries"][0]["Geometry"]["Circle"]["Radius"], 250.0);
        assert!(body["Entries"][0]["Geometry"].get("Polygon").is_none());
        assert_eq!(body["Entries"][1]["Geometry"]["Polygon"][0][3][0], -123.12);

        let report = assemble(&input, &output).unwrap();
        assert_eq!(report.succeeded, vec!["depot".to_owned()]);
        assert_eq!(report.failed[0].0, "yard");
    }

    #[tokio::test]
    async fn test_should_key_position_update_errors_by_sample() {
        let (client, transport) = location_client();
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 1, 0).unwrap();
        transport.respond_json(json!({
            "Errors": [{
                "DeviceId": "truck-1",
                "SampleTime": "2024-05-01T08:01:00Z",
                "Error": {"Code": "ValidationError", "Message": "position out of range"}
            }]
        }));

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
        let output = client.batch_update_device_position(input.clone()).await.unwrap();

        let body = transport.last_request().json();
        assert_eq!(body["Updates"][0]["SampleTime"], "2024-05-01T08:00:00Z");
        assert_eq!(body["Updates"][1]["Position"], json!([-123.1, 49.28]));

        let report = assemble(&input, &output).unwrap();
        assert_eq!(report.succeeded, vec![DeviceSample {
            device_id: "truck-1".to_owned(),
            sample_time: Some(t0),
        }]);
        assert_eq!(report.failed[0].0.sample_time, Some(t1));
    }

    #[tokio::test]
    async fn test_should_not_invent_missing_sample_time() {
        let unsampled = DevicePositionUpdate {
            device_id: "truck-1".to_owned(),
            position: vec![-123.1, 49.28],
            ..Default::default()
        };
        let input = BatchUpdateDevicePositionInput {
            tracker_name: "fleetA".to_owned(),
            updates: vec![unsampled],
        };

        let (client, transport) = location_client();
        let err = client
            .batch_update_device_position(input.clone())
            .await
            .unwrap_err();
        match err {
            SdkError::Validation(violation) => {
                assert_eq!(violation.path, "Updates[0].SampleTime");
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
        assert!(transport.requests().is_empty());

        let transport = FakeTransport::default();
        let config = ClientConfig::builder().validate_requests(false).build();
        let client = LocationClient::new(config, transport.clone());
        client.batch_update_device_position(input).await.unwrap();
        let body = transport.last_request().json();
        assert!(body["Updates"][0].get("SampleTime").is_none());
    }
}
