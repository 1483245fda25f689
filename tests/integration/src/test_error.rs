//! Error handling integration tests.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use skyport_core::{BuildError, SdkError, TransportError};
    use skyport_elasticsearch_model::input::{
        AssociatePackageInput, DescribeElasticsearchDomainInput, GetUpgradeHistoryInput,
        ListDomainNamesInput, ListTagsInput,
    };
    use skyport_elasticsearch_model::{ElasticsearchErrorCode, Fault};

    use crate::{MockHandler, Reply, client};

    fn describe(name: &str) -> DescribeElasticsearchDomainInput {
        DescribeElasticsearchDomainInput {
            domain_name: Some(name.to_owned()),
        }
    }

    #[tokio::test]
    async fn test_should_return_resource_not_found() {
        let mock = MockHandler::new([Reply::status(404, r#"{"message":"Domain not found: ghost"}"#)
            .header("x-amzn-errortype", "ResourceNotFoundException")
            .header("x-amzn-requestid", "req-404")]);
        let err = client(&mock)
            .describe_elasticsearch_domain(describe("ghost"))
            .await
            .unwrap_err();

        let SdkError::Service(err) = err else {
            panic!("expected a service error");
        };
        assert_eq!(err.code, ElasticsearchErrorCode::ResourceNotFoundException);
        assert_eq!(err.fault, Fault::Client);
        assert_eq!(err.message, "Domain not found: ghost");
        assert_eq!(err.metadata.http_status_code, 404);
        assert_eq!(err.metadata.request_id.as_deref(), Some("req-404"));
        assert_eq!(
            err.to_string(),
            "ElasticsearchError(ResourceNotFoundException): Domain not found: ghost"
        );
    }

    #[tokio::test]
    async fn test_should_return_server_fault_for_internal_exception() {
        let body = json!({"__type": "com.amazonaws.elasticsearchservice#InternalException"});
        let mock = MockHandler::new([Reply::status(500, body.to_string())]);
        let err = client(&mock)
            .list_tags(ListTagsInput {
                arn: Some("arn:aws:es:us-east-1:1:domain/logs".to_owned()),
            })
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(err.code, ElasticsearchErrorCode::InternalException);
        assert_eq!(err.fault, Fault::Server);
        assert_eq!(err.message, "InternalException");

        // ListDomainNames only declares BaseException and ValidationException.
        let mock = MockHandler::new([Reply::status(500, body.to_string())]);
        let err = client(&mock)
            .list_domain_names(ListDomainNamesInput {})
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(
            err.code,
            ElasticsearchErrorCode::Unhandled("InternalException".to_owned())
        );
        assert_eq!(err.fault, Fault::Client);
    }

    #[tokio::test]
    async fn test_should_keep_unknown_code_and_fields() {
        let mock = MockHandler::new([Reply::status(
            400,
            json!({"Code": "Foo", "message": "bad thing", "Reason": "because"}).to_string(),
        )]);
        let err = client(&mock)
            .list_tags(ListTagsInput {
                arn: Some("arn:aws:es:us-east-1:1:domain/logs".to_owned()),
            })
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(err.code_str(), "Foo");
        assert!(!err.is_modeled());
        assert_eq!(err.fault, Fault::Client);
        assert_eq!(err.message, "bad thing");
        assert_eq!(err.field("Reason"), Some(&json!("because")));
    }

    #[tokio::test]
    async fn test_should_treat_undeclared_code_as_unhandled() {
        let mock = MockHandler::new([Reply::status(409, "{}")
            .header("x-amzn-errortype", "ConflictException:http://internal.amazon.com/")]);
        let err = client(&mock)
            .get_upgrade_history(GetUpgradeHistoryInput {
                domain_name: Some("logs".to_owned()),
                ..GetUpgradeHistoryInput::default()
            })
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(
            err.code,
            ElasticsearchErrorCode::Unhandled("ConflictException".to_owned())
        );

        let mock = MockHandler::new([Reply::status(409, "{}")
            .header("x-amzn-errortype", "ConflictException:http://internal.amazon.com/")]);
        let err = client(&mock)
            .associate_package(AssociatePackageInput {
                domain_name: Some("logs".to_owned()),
                package_id: Some("F1".to_owned()),
            })
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(err.code, ElasticsearchErrorCode::ConflictException);
    }

    #[tokio::test]
    async fn test_should_fall_back_to_unknown_error() {
        let mock = MockHandler::new([Reply::status(503, "<html>unavailable</html>")]);
        let err = client(&mock)
            .describe_elasticsearch_domain(describe("logs"))
            .await
            .unwrap_err()
            .into_service_error()
            .unwrap();
        assert_eq!(err.code_str(), "UnknownError");
        assert_eq!(err.message, "UnknownError");
        assert_eq!(err.metadata.http_status_code, 503);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_success_body() {
        let mock = MockHandler::new([Reply::status(200, "{\"DomainStatus\":")]);
        let err = client(&mock)
            .describe_elasticsearch_domain(describe("logs"))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Response { .. }));
    }

    #[tokio::test]
    async fn test_should_not_send_when_label_missing() {
        let mock = MockHandler::default();
        let err = client(&mock)
            .associate_package(AssociatePackageInput {
                domain_name: Some("logs".to_owned()),
                package_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Construction(BuildError::MissingLabel("PackageID"))
        ));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_should_surface_transport_failure() {
        let mock = MockHandler::new([Reply::Fail("connection refused".to_owned())]);
        let err = client(&mock)
            .list_domain_names(ListDomainNamesInput {})
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Dispatch(TransportError::Connect(_))));
        assert_eq!(mock.requests().len(), 1);
    }
}
