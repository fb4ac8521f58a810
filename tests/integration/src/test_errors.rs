//! Error handling integration tests.

#[cfg(test)]
mod tests {
    use geostack_location_http::SdkError;
    use geostack_location_model::error::{LocationErrorCode, ValidationExceptionField};
    use geostack_location_model::input::{
        CreateTrackerInput, DescribeTrackerInput, GetDevicePositionInput, ListTrackersInput,
        UpdateTrackerInput,
    };
    use geostack_location_model::types::{PricingPlan, ValidationExceptionReason};
    use geostack_location_model::validate::ViolationKind;

    use crate::location_client;

    #[tokio::test]
    async fn test_should_surface_service_validation_exception() {
        let (client, transport) = location_client();
        transport.respond(
            400,
            &[
                ("x-amzn-ErrorType", "ValidationException"),
                ("x-amzn-RequestId", "7d1c3e1a"),
            ],
            r#"{"message":"1 validation error detected","reason":"FieldValidationFailed","fieldList":[{"name":"PricingPlan","message":"unsupported plan"}]}"#,
        );

        let input = CreateTrackerInput {
            tracker_name: "fleetA".to_owned(),
            pricing_plan: Some(PricingPlan::RequestBasedUsage),
            ..Default::default()
        };
        let err = client.create_tracker(input).await.unwrap_err();
        let err = match err {
            SdkError::Service(err) => err,
            other => panic!("expected a service error, got {other:?}"),
        };
        assert_eq!(err.code, LocationErrorCode::ValidationException);
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "1 validation error detected");
        assert_eq!(err.request_id.as_deref(), Some("7d1c3e1a"));
        assert_eq!(
            err.reason,
            Some(ValidationExceptionReason::FieldValidationFailed)
        );
        assert_eq!(err.field_list, vec![ValidationExceptionField {
            name: "PricingPlan".to_owned(),
            message: "unsupported plan".to_owned(),
        }]);
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_input_without_io() {
        let (client, transport) = location_client();

        let input = CreateTrackerInput {
            tracker_name: "x".repeat(101),
            ..Default::default()
        };
        let err = client.create_tracker(input).await.unwrap_err();
        let violation = match err {
            SdkError::Validation(violation) => violation,
            other => panic!("expected a validation error, got {other:?}"),
        };
        assert_eq!(violation.path, "TrackerName");
        assert!(matches!(violation.kind, ViolationKind::Length { actual: 101, .. }));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_map_each_modeled_code() {
        let cases = [
            ("AccessDeniedException", 403, LocationErrorCode::AccessDeniedException),
            ("ConflictException", 409, LocationErrorCode::ConflictException),
            ("InternalServerException", 500, LocationErrorCode::InternalServerException),
            ("ResourceNotFoundException", 404, LocationErrorCode::ResourceNotFoundException),
            (
                "ServiceQuotaExceededException",
                402,
                LocationErrorCode::ServiceQuotaExceededException,
            ),
            ("ThrottlingException", 429, LocationErrorCode::ThrottlingException),
        ];

        let (client, transport) = location_client();
        for (code, status, expected) in cases {
            transport.respond(
                status,
                &[],
                format!(r#"{{"__type":"com.amazonaws.location#{code}","message":"{code}"}}"#),
            );
            let err = client
                .list_trackers(ListTrackersInput::default())
                .await
                .unwrap_err();
            assert_eq!(err.code(), Some(expected), "{code}");
            assert_eq!(
                err.as_service_error().unwrap().status_code.as_u16(),
                status,
                "{code}"
            );
        }
    }

    #[tokio::test]
    async fn test_should_flag_transient_errors() {
        let (client, transport) = location_client();
        transport.respond(
            429,
            &[("x-amzn-ErrorType", "ThrottlingException:http://internal.amazon.com/")],
            r#"{"message":"Rate exceeded"}"#,
        );

        let input = GetDevicePositionInput {
            tracker_name: "fleetA".to_owned(),
            device_id: "truck-1".to_owned(),
        };
        let err = client.get_device_position(input).await.unwrap_err();
        assert_eq!(err.code(), Some(LocationErrorCode::ThrottlingException));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_should_keep_unmodeled_error_code() {
        let (client, transport) = location_client();
        transport.respond(
            404,
            &[],
            r#"{"code":"TrackerGoneException","Message":"tracker was retired"}"#,
        );

        let input = DescribeTrackerInput {
            tracker_name: "retired".to_owned(),
        };
        let err = client.describe_tracker(input).await.unwrap_err();
        let err = err.as_service_error().unwrap();
        assert_eq!(err.code, LocationErrorCode::ResourceNotFoundException);
        assert_eq!(err.raw_code, "TrackerGoneException");
        assert_eq!(err.message, "tracker was retired");
    }

    #[tokio::test]
    async fn test_should_report_malformed_success_response() {
        let (client, transport) = location_client();
        transport.respond(200, &[], "<html>gateway</html>");

        let input = UpdateTrackerInput {
            tracker_name: "fleetA".to_owned(),
            description: Some("night shift".to_owned()),
            ..Default::default()
        };
        let err = client.update_tracker(input).await.unwrap_err();
        assert!(matches!(err, SdkError::Response { .. }));
    }
}
