//! Pagination integration tests.

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use geostack_location_http::PaginatedOutput;
    use geostack_location_model::input::{GetDevicePositionHistoryInput, ListGeofencesInput};
    use serde_json::json;

    use crate::location_client;

    fn geofence(id: &str) -> serde_json::Value {
        json!({
            "GeofenceId": id,
            "Geometry": {"Circle": {"Center": [-123.1, 49.28], "Radius": 100.0}},
            "Status": "ACTIVE",
            "CreateTime": "2024-05-01T08:00:00Z",
            "UpdateTime": "2024-05-01T08:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_should_list_every_geofence_once() {
        let (client, transport) = location_client();
        transport.respond_json(json!({
            "Entries": [geofence("g1"), geofence("g2")],
            "NextToken": "page-2"
        }));
        transport.respond_json(json!({
            "Entries": [geofence("g3"), geofence("g4")],
            "NextToken": "page-3"
        }));
        transport.respond_json(json!({"Entries": [geofence("g5")]}));

        let input = ListGeofencesInput {
            collection_name: "fleetA".to_owned(),
            max_results: Some(2),
            ..Default::default()
        };
        let entries = client.paginate(input).collect_items().await.unwrap();

        let ids: Vec<_> = entries.iter().map(|e| e.geofence_id.as_str()).collect();
        assert_eq!(ids, ["g1", "g2", "g3", "g4", "g5"]);

        let bodies: Vec<_> = transport.requests().iter().map(|r| r.json()).collect();
        assert_eq!(bodies, [
            json!({"MaxResults": 2}),
            json!({"MaxResults": 2, "NextToken": "page-2"}),
            json!({"MaxResults": 2, "NextToken": "page-3"}),
        ]);
        assert!(transport.requests().iter().all(|r| {
            r.uri.path() == "/geofencing/v0/collections/fleetA/list-geofences"
        }));
    }

    #[tokio::test]
    async fn test_should_stop_when_token_is_echoed() {
        let (client, transport) = location_client();
        transport.respond_json(json!({"Entries": [geofence("g1")], "NextToken": "stuck"}));
        transport.respond_json(json!({"Entries": [geofence("g1")], "NextToken": "stuck"}));
        transport.respond_json(json!({"Entries": [geofence("g1")], "NextToken": "stuck"}));

        let input = ListGeofencesInput {
            collection_name: "fleetA".to_owned(),
            ..Default::default()
        };
        let pages = client.paginate(input).collect_pages().await.unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_should_stream_position_history() {
        let (client, transport) = location_client();
        transport.respond_json(json!({
            "DevicePositions": [{
                "DeviceId": "truck-1",
                "Position": [-123.1, 49.28],
                "SampleTime": "2024-05-01T08:00:00Z",
                "ReceivedTime": "2024-05-01T08:00:01Z"
            }],
            "NextToken": "more"
        }));
        transport.respond_json(json!({
            "DevicePositions": [{
                "DeviceId": "truck-1",
                "Position": [-123.2, 49.29],
                "SampleTime": "2024-05-01T08:05:00Z",
                "ReceivedTime": "2024-05-01T08:05:01Z"
            }]
        }));

        let input = GetDevicePositionHistoryInput {
            tracker_name: "fleetA".to_owned(),
            device_id: "truck-1".to_owned(),
            ..Default::default()
        };
        let positions: Vec<_> = client
            .paginate(input)
            .into_stream()
            .map(|page| page.unwrap().into_items())
            .concat()
            .await;

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1].position, vec![-123.2, 49.29]);
    }

    #[tokio::test]
    async fn test_should_send_identical_requests_for_same_token() {
        let (client, transport) = location_client();
        let page = json!({"Entries": [geofence("g3")], "NextToken": "page-3"});
        transport.respond_json(page.clone());
        transport.respond_json(page);

        let input = ListGeofencesInput {
            collection_name: "fleetA".to_owned(),
            max_results: Some(1),
            next_token: Some("page-2".to_owned()),
        };
        let first = client.list_geofences(input.clone()).await.unwrap();
        let second = client.list_geofences(input).await.unwrap();

        assert_eq!(first, second);
        let requests = transport.requests();
        assert_eq!(requests[0].uri, requests[1].uri);
        assert_eq!(requests[0].body, requests[1].body);
    }

    #[tokio::test]
    async fn test_should_surface_error_after_first_page() {
        let (client, transport) = location_client();
        transport.respond_json(json!({"Entries": [geofence("g1")], "NextToken": "t"}));
        transport.respond(
            500,
            &[("x-amzn-ErrorType", "InternalServerException")],
            r#"{"message":"try again"}"#,
        );

        let input = ListGeofencesInput {
            collection_name: "fleetA".to_owned(),
            ..Default::default()
        };
        let err = client.paginate(input).collect_items().await.unwrap_err();

        assert!(err.is_transient());
        assert_eq!(transport.requests().len(), 2);
    }
}
