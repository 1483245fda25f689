//! Domain lifecycle integration tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use http::Method;
    use serde_json::json;
    use skyport_elasticsearch_model::input::{
        CreateElasticsearchDomainInput, DeleteElasticsearchDomainInput,
        DeleteElasticsearchServiceRoleInput, DescribeElasticsearchDomainInput,
        DescribeElasticsearchDomainsInput, DescribeElasticsearchInstanceTypeLimitsInput,
        GetUpgradeStatusInput, UpdateElasticsearchDomainConfigInput,
        UpgradeElasticsearchDomainInput,
    };
    use skyport_elasticsearch_model::types::{
        EbsOptions, ElasticsearchClusterConfig, LogPublishingOption, LogType, OptionState,
        SnapshotOptions, Tag, UpgradeStatus, UpgradeStep, VolumeType,
    };

    use crate::{MockHandler, Reply, body_json, client, test_domain_name};

    #[tokio::test]
    async fn test_should_create_domain() {
        let name = test_domain_name("logs");
        let mock = MockHandler::new([Reply::ok(json!({
            "DomainStatus": {
                "DomainId": "123456789012/logs",
                "DomainName": name,
                "ARN": format!("arn:aws:es:us-east-1:123456789012:domain/{name}"),
                "Created": true,
                "Deleted": false,
                "Processing": true,
                "ElasticsearchVersion": "7.10",
                "ElasticsearchClusterConfig": {"InstanceType": "m5.large.elasticsearch", "InstanceCount": 2},
                "EBSOptions": {"EBSEnabled": true, "VolumeType": "gp2", "VolumeSize": 20}
            }
        }))]);
        let client = client(&mock);

        let mut logs = BTreeMap::new();
        logs.insert(
            LogType::IndexSlowLogs,
            LogPublishingOption {
                cloud_watch_logs_log_group_arn: Some("arn:aws:logs:us-east-1:1:log-group:slow".to_owned()),
                enabled: Some(true),
            },
        );
        let out = client
            .create_elasticsearch_domain(CreateElasticsearchDomainInput {
                domain_name: Some(name.clone()),
                elasticsearch_version: Some("7.10".to_owned()),
                elasticsearch_cluster_config: Some(ElasticsearchClusterConfig {
                    instance_type: Some("m5.large.elasticsearch".to_owned()),
                    instance_count: Some(2),
                    ..ElasticsearchClusterConfig::default()
                }),
                ebs_options: Some(EbsOptions {
                    ebs_enabled: Some(true),
                    volume_type: Some(VolumeType::Gp2),
                    volume_size: Some(20),
                    ..EbsOptions::default()
                }),
                snapshot_options: Some(SnapshotOptions {
                    automated_snapshot_start_hour: Some(0),
                }),
                log_publishing_options: Some(logs),
                tag_list: Some(vec![Tag::new("team", "search")]),
                ..CreateElasticsearchDomainInput::default()
            })
            .await
            .unwrap();

        let status = out.domain_status.unwrap();
        assert_eq!(status.domain_name.as_deref(), Some(name.as_str()));
        assert_eq!(status.processing, Some(true));
        assert_eq!(
            status.ebs_options.unwrap().volume_type,
            Some(VolumeType::Gp2)
        );

        let req = mock.single_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/2015-01-01/es/domain");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("user-agent"), Some("skyport-integration/1.0"));
        assert_eq!(req.header("host"), Some("localhost:4566"));
        assert_eq!(
            body_json(&req),
            json!({
                "DomainName": name,
                "EBSOptions": {"EBSEnabled": true, "VolumeSize": 20, "VolumeType": "gp2"},
                "ElasticsearchClusterConfig": {"InstanceCount": 2, "InstanceType": "m5.large.elasticsearch"},
                "ElasticsearchVersion": "7.10",
                "LogPublishingOptions": {
                    "INDEX_SLOW_LOGS": {
                        "CloudWatchLogsLogGroupArn": "arn:aws:logs:us-east-1:1:log-group:slow",
                        "Enabled": true
                    }
                },
                "SnapshotOptions": {"AutomatedSnapshotStartHour": 0},
                "TagList": [{"Key": "team", "Value": "search"}]
            })
        );
        assert_eq!(
            req.header("content-length"),
            Some(req.body_str().unwrap().len().to_string().as_str())
        );
    }

    #[tokio::test]
    async fn test_should_describe_and_delete_domain_by_label() {
        let mock = MockHandler::new([
            Reply::ok(json!({"DomainStatus": {"DomainName": "a b", "Created": true}})),
            Reply::ok(json!({"DomainStatus": {"DomainName": "a b", "Deleted": true}})),
        ]);
        let client = client(&mock);

        client
            .describe_elasticsearch_domain(DescribeElasticsearchDomainInput {
                domain_name: Some("a b".to_owned()),
            })
            .await
            .unwrap();
        let deleted = client
            .delete_elasticsearch_domain(DeleteElasticsearchDomainInput {
                domain_name: Some("a b".to_owned()),
            })
            .await
            .unwrap();
        assert_eq!(deleted.domain_status.unwrap().deleted, Some(true));

        let sent = mock.requests();
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].path, "/2015-01-01/es/domain/a%20b");
        assert!(sent[0].body.is_none());
        assert!(sent[0].header("content-type").is_none());
        assert!(sent[0].header("content-length").is_none());
        assert_eq!(sent[1].method, Method::DELETE);
        assert_eq!(sent[1].path, "/2015-01-01/es/domain/a%20b");
    }

    #[tokio::test]
    async fn test_should_describe_many_domains() {
        let mock = MockHandler::new([Reply::ok(json!({
            "DomainStatusList": [{"DomainName": "a"}, null, {"DomainName": "b"}]
        }))]);
        let out = client(&mock)
            .describe_elasticsearch_domains(DescribeElasticsearchDomainsInput {
                domain_names: Some(vec!["a".to_owned(), "b".to_owned()]),
            })
            .await
            .unwrap();
        assert_eq!(out.domain_status_list.unwrap().len(), 2);

        let req = mock.single_request();
        assert_eq!(req.path, "/2015-01-01/es/domain-info");
        assert_eq!(body_json(&req), json!({"DomainNames": ["a", "b"]}));
    }

    #[tokio::test]
    async fn test_should_update_domain_config() {
        let mock = MockHandler::new([Reply::ok(json!({
            "DomainConfig": {
                "SnapshotOptions": {
                    "Options": {"AutomatedSnapshotStartHour": 5},
                    "Status": {"CreationDate": 1_600_000_000, "UpdateDate": 1_600_000_500, "UpdateVersion": 7, "State": "Processing"}
                }
            }
        }))]);
        let out = client(&mock)
            .update_elasticsearch_domain_config(UpdateElasticsearchDomainConfigInput {
                domain_name: Some("logs".to_owned()),
                snapshot_options: Some(SnapshotOptions {
                    automated_snapshot_start_hour: Some(5),
                }),
                ..UpdateElasticsearchDomainConfigInput::default()
            })
            .await
            .unwrap();
        let snapshot = out.domain_config.unwrap().snapshot_options.unwrap();
        let status = snapshot.status.unwrap();
        assert_eq!(status.state, Some(OptionState::Processing));
        assert_eq!(status.update_date.unwrap().timestamp(), 1_600_000_500);

        let req = mock.single_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/2015-01-01/es/domain/logs/config");
        assert_eq!(
            body_json(&req),
            json!({"SnapshotOptions": {"AutomatedSnapshotStartHour": 5}})
        );
    }

    #[tokio::test]
    async fn test_should_send_empty_body_for_service_role_deletion() {
        let mock = MockHandler::new([Reply::status(200, "")]);
        client(&mock)
            .delete_elasticsearch_service_role(DeleteElasticsearchServiceRoleInput {})
            .await
            .unwrap();
        let req = mock.single_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.path, "/2015-01-01/es/role");
        assert_eq!(req.body_str(), Some(""));
        assert_eq!(req.header("content-length"), Some("0"));
        assert!(req.header("content-type").is_none());
    }

    #[tokio::test]
    async fn test_should_query_instance_type_limits() {
        let mock = MockHandler::new([Reply::ok(json!({
            "LimitsByRole": {
                "data": {"InstanceLimits": {"InstanceCountLimits": {"MinimumInstanceCount": 1, "MaximumInstanceCount": 80}}},
                "master": null
            }
        }))]);
        let out = client(&mock)
            .describe_elasticsearch_instance_type_limits(DescribeElasticsearchInstanceTypeLimitsInput {
                domain_name: Some("logs".to_owned()),
                elasticsearch_version: Some("7.10".to_owned()),
                instance_type: Some("m5.large.elasticsearch".to_owned()),
            })
            .await
            .unwrap();
        let limits = out.limits_by_role.unwrap();
        assert_eq!(limits.len(), 1);
        let count = limits["data"]
            .instance_limits
            .as_ref()
            .and_then(|l| l.instance_count_limits.as_ref())
            .unwrap();
        assert_eq!(count.maximum_instance_count, Some(80));

        let req = mock.single_request();
        assert_eq!(
            req.path_and_query(),
            "/2015-01-01/es/instanceTypeLimits/7.10/m5.large.elasticsearch?domainName=logs"
        );
    }

    #[tokio::test]
    async fn test_should_upgrade_and_poll_status() {
        let mock = MockHandler::new([
            Reply::ok(json!({"DomainName": "logs", "TargetVersion": "7.10", "PerformCheckOnly": true})),
            Reply::ok(json!({"UpgradeStep": "PRE_UPGRADE_CHECK", "StepStatus": "SUCCEEDED", "UpgradeName": "u1"})),
        ]);
        let client = client(&mock);
        let upgrade = client
            .upgrade_elasticsearch_domain(UpgradeElasticsearchDomainInput {
                domain_name: Some("logs".to_owned()),
                perform_check_only: Some(true),
                target_version: Some("7.10".to_owned()),
            })
            .await
            .unwrap();
        assert_eq!(upgrade.perform_check_only, Some(true));

        let status = client
            .get_upgrade_status(GetUpgradeStatusInput {
                domain_name: Some("logs".to_owned()),
            })
            .await
            .unwrap();
        assert_eq!(status.upgrade_step, Some(UpgradeStep::PreUpgradeCheck));
        assert_eq!(status.step_status, Some(UpgradeStatus::Succeeded));

        let sent = mock.requests();
        assert_eq!(
            body_json(&sent[0]),
            json!({"DomainName": "logs", "PerformCheckOnly": true, "TargetVersion": "7.10"})
        );
        assert_eq!(sent[1].path, "/2015-01-01/es/upgradeDomain/logs/status");
    }
}
