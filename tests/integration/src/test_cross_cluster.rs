//! Cross-cluster search connection integration tests.

#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::json;
    use skyport_elasticsearch_model::input::{
        AcceptInboundCrossClusterSearchConnectionInput,
        CreateOutboundCrossClusterSearchConnectionInput,
        DeleteOutboundCrossClusterSearchConnectionInput,
        DescribeInboundCrossClusterSearchConnectionsInput,
    };
    use skyport_elasticsearch_model::types::{
        DomainInformation, Filter, InboundCrossClusterSearchConnectionStatusCode,
        OutboundCrossClusterSearchConnectionStatusCode,
    };

    use crate::{MockHandler, Reply, body_json, client};

    fn domain(name: &str, owner: &str) -> DomainInformation {
        DomainInformation {
            domain_name: Some(name.to_owned()),
            owner_id: Some(owner.to_owned()),
            region: Some("us-east-1".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_should_request_outbound_connection() {
        let mock = MockHandler::new([Reply::ok(json!({
            "ConnectionAlias": "remote",
            "CrossClusterSearchConnectionId": "cc-1",
            "ConnectionStatus": {"StatusCode": "PENDING_ACCEPTANCE", "Message": "waiting"},
            "SourceDomainInfo": {"DomainName": "src", "OwnerId": "111", "Region": "us-east-1"},
            "DestinationDomainInfo": {"DomainName": "dst", "OwnerId": "222", "Region": "us-east-1"}
        }))]);
        let out = client(&mock)
            .create_outbound_cross_cluster_search_connection(
                CreateOutboundCrossClusterSearchConnectionInput {
                    connection_alias: Some("remote".to_owned()),
                    source_domain_info: Some(domain("src", "111")),
                    destination_domain_info: Some(domain("dst", "222")),
                },
            )
            .await
            .unwrap();
        assert_eq!(out.cross_cluster_search_connection_id.as_deref(), Some("cc-1"));
        assert_eq!(
            out.connection_status.unwrap().status_code,
            Some(OutboundCrossClusterSearchConnectionStatusCode::PendingAcceptance)
        );
        assert_eq!(out.destination_domain_info, Some(domain("dst", "222")));

        let req = mock.single_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/2015-01-01/es/ccs/outboundConnection");
        assert_eq!(
            body_json(&req),
            json!({
                "ConnectionAlias": "remote",
                "DestinationDomainInfo": {"DomainName": "dst", "OwnerId": "222", "Region": "us-east-1"},
                "SourceDomainInfo": {"DomainName": "src", "OwnerId": "111", "Region": "us-east-1"}
            })
        );
    }

    #[tokio::test]
    async fn test_should_accept_inbound_connection() {
        let mock = MockHandler::new([Reply::ok(json!({
            "CrossClusterSearchConnection": {
                "CrossClusterSearchConnectionId": "cc-1",
                "ConnectionStatus": {"StatusCode": "APPROVED"}
            }
        }))]);
        let out = client(&mock)
            .accept_inbound_cross_cluster_search_connection(
                AcceptInboundCrossClusterSearchConnectionInput {
                    cross_cluster_search_connection_id: Some("cc-1".to_owned()),
                },
            )
            .await
            .unwrap();
        let status = out
            .cross_cluster_search_connection
            .and_then(|c| c.connection_status)
            .and_then(|s| s.status_code);
        assert_eq!(
            status,
            Some(InboundCrossClusterSearchConnectionStatusCode::Approved)
        );

        let req = mock.single_request();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/2015-01-01/es/ccs/inboundConnection/cc-1/accept");
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn test_should_search_inbound_connections() {
        let mock = MockHandler::new([Reply::ok(json!({
            "CrossClusterSearchConnections": [{"CrossClusterSearchConnectionId": "cc-1"}]
        }))]);
        let out = client(&mock)
            .describe_inbound_cross_cluster_search_connections(
                DescribeInboundCrossClusterSearchConnectionsInput {
                    filters: Some(vec![Filter {
                        name: Some("source-domain-info.domain-name".to_owned()),
                        values: Some(vec!["src".to_owned()]),
                    }]),
                    ..DescribeInboundCrossClusterSearchConnectionsInput::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(out.cross_cluster_search_connections.unwrap().len(), 1);

        let req = mock.single_request();
        assert_eq!(req.path, "/2015-01-01/es/ccs/inboundConnection/search");
        assert_eq!(
            body_json(&req),
            json!({"Filters": [{"Name": "source-domain-info.domain-name", "Values": ["src"]}]})
        );
    }

    #[tokio::test]
    async fn test_should_delete_outbound_connection() {
        let mock = MockHandler::new([Reply::ok(json!({
            "CrossClusterSearchConnection": {"ConnectionStatus": {"StatusCode": "DELETING"}}
        }))]);
        let out = client(&mock)
            .delete_outbound_cross_cluster_search_connection(
                DeleteOutboundCrossClusterSearchConnectionInput {
                    cross_cluster_search_connection_id: Some("cc-2".to_owned()),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            out.cross_cluster_search_connection
                .and_then(|c| c.connection_status)
                .and_then(|s| s.status_code),
            Some(OutboundCrossClusterSearchConnectionStatusCode::Deleting)
        );
        let req = mock.single_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.path, "/2015-01-01/es/ccs/outboundConnection/cc-2");
    }
}
