//! Request encoding integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::{TimeZone, Utc};
    use geostack_core::ClientConfig;
    use geostack_location_http::LocationClient;
    use geostack_location_model::input::{
        CalculateRouteInput, GetDevicePositionHistoryInput, SearchPlaceIndexForTextInput,
        TagResourceInput, UntagResourceInput,
    };
    use geostack_location_model::types::{DistanceUnit, TravelMode};
    use serde_json::json;

    use crate::{FakeTransport, location_client};

    const TRACKER_ARN: &str = "arn:aws:geo:us-west-2:123456789012:tracker/fleetA";

    #[tokio::test]
    async fn test_should_tag_resource_by_encoded_arn() {
        let (client, transport) = location_client();

        let input = TagResourceInput {
            resource_arn: TRACKER_ARN.to_owned(),
            tags: HashMap::from([("team".to_owned(), "dispatch".to_owned())]),
        };
        client.tag_resource(input).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(
            request.uri.host(),
            Some("metadata.geo.us-west-2.amazonaws.com")
        );
        assert_eq!(
            request.uri.path(),
            "/tags/arn%3Aaws%3Ageo%3Aus-west-2%3A123456789012%3Atracker%2FfleetA"
        );
        assert_eq!(request.json(), json!({"Tags": {"team": "dispatch"}}));
    }

    #[tokio::test]
    async fn test_should_untag_with_repeated_query_keys() {
        let (client, transport) = location_client();

        let input = UntagResourceInput {
            resource_arn: TRACKER_ARN.to_owned(),
            tag_keys: vec!["team".to_owned(), "cost/center".to_owned()],
        };
        client.untag_resource(input).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, http::Method::DELETE);
        assert_eq!(
            request.uri.query(),
            Some("tagKeys=team&tagKeys=cost%2Fcenter")
        );
        assert!(request.body.is_empty());
        assert!(request.headers.get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_should_encode_history_window_in_body() {
        let (client, transport) = location_client();

        let input = GetDevicePositionHistoryInput {
            tracker_name: "fleetA".to_owned(),
            device_id: "truck-1".to_owned(),
            start_time_inclusive: Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
            end_time_exclusive: Some(Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap()),
            max_results: Some(50),
            ..Default::default()
        };
        client.get_device_position_history(input).await.unwrap();

        let request = transport.last_request();
        assert_eq!(
            request.uri.path(),
            "/tracking/v0/trackers/fleetA/devices/truck-1/list-positions"
        );
        assert_eq!(
            request.json(),
            json!({
                "StartTimeInclusive": "2024-05-01T00:00:00Z",
                "EndTimeExclusive": "2024-05-02T00:00:00Z",
                "MaxResults": 50
            })
        );
    }

    #[tokio::test]
    async fn test_should_omit_unset_route_options() {
        let (client, transport) = location_client();
        transport.respond_json(json!({
            "Legs": [],
            "Summary": {
                "RouteBBox": [-123.12, 49.27, -123.1, 49.29],
                "DataSource": "Esri",
                "Distance": 2.4,
                "DurationSeconds": 420.0,
                "DistanceUnit": "Kilometers"
            }
        }));

        let input = CalculateRouteInput {
            calculator_name: "city-routes".to_owned(),
            departure_position: vec![-123.12, 49.28],
            destination_position: vec![-123.1, 49.27],
            travel_mode: Some(TravelMode::Car),
            ..Default::default()
        };
        let output = client.calculate_route(input).await.unwrap();

        let body = transport.last_request().json();
        assert_eq!(
            body,
            json!({
                "DeparturePosition": [-123.12, 49.28],
                "DestinationPosition": [-123.1, 49.27],
                "TravelMode": "Car"
            })
        );
        assert_eq!(output.summary.distance_unit, Some(DistanceUnit::Kilometers));
        assert_eq!(output.summary.route_b_box.len(), 4);
    }

    #[tokio::test]
    async fn test_should_route_through_endpoint_override() {
        let transport = FakeTransport::default();
        let config = ClientConfig::builder()
            .endpoint_url("http://localhost:4566")
            .build();
        let client = LocationClient::new(config, transport.clone());

        let input = SearchPlaceIndexForTextInput {
            index_name: "places".to_owned(),
            text: "coffee near Gastown".to_owned(),
            filter_countries: vec!["CAN".to_owned()],
            ..Default::default()
        };
        client.search_place_index_for_text(input).await.unwrap();

        let request = transport.last_request();
        assert_eq!(
            request.uri.to_string(),
            "http://localhost:4566/places/v0/indexes/places/search/text"
        );
        assert_eq!(request.headers["host"], "localhost:4566");
        assert_eq!(request.headers["content-type"], "application/json");
    }
}
