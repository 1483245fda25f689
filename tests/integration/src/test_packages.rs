//! Package integration tests.

#[cfg(test)]
mod tests {
    use http::Method;
    use serde_json::json;
    use skyport_elasticsearch_model::input::{
        AssociatePackageInput, CreatePackageInput, DeletePackageInput, DescribePackagesInput,
        DissociatePackageInput, UpdatePackageInput,
    };
    use skyport_elasticsearch_model::types::{
        DescribePackagesFilter, DescribePackagesFilterName, DomainPackageStatus, PackageSource,
        PackageStatus, PackageType,
    };

    use crate::{MockHandler, Reply, body_json, client};

    fn source() -> PackageSource {
        PackageSource {
            s3_bucket_name: Some("dicts".to_owned()),
            s3_key: Some("synonyms.txt".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_should_create_package() {
        let mock = MockHandler::new([Reply::ok(json!({
            "PackageDetails": {
                "PackageID": "F111",
                "PackageName": "synonyms",
                "PackageType": "TXT-DICTIONARY",
                "PackageStatus": "COPYING",
                "CreatedAt": 1_600_000_000.25
            }
        }))]);
        let out = client(&mock)
            .create_package(CreatePackageInput {
                package_name: Some("synonyms".to_owned()),
                package_type: Some(PackageType::TxtDictionary),
                package_source: Some(source()),
                package_description: None,
            })
            .await
            .unwrap();
        let details = out.package_details.unwrap();
        assert_eq!(details.package_id.as_deref(), Some("F111"));
        assert_eq!(details.package_status, Some(PackageStatus::Copying));
        assert_eq!(details.created_at.unwrap().timestamp_millis(), 1_600_000_000_250);

        let req = mock.single_request();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/2015-01-01/packages");
        assert_eq!(
            body_json(&req),
            json!({
                "PackageName": "synonyms",
                "PackageSource": {"S3BucketName": "dicts", "S3Key": "synonyms.txt"},
                "PackageType": "TXT-DICTIONARY"
            })
        );
    }

    #[tokio::test]
    async fn test_should_associate_and_dissociate_by_labels() {
        let mock = MockHandler::new([
            Reply::ok(json!({"DomainPackageDetails": {"PackageID": "F111", "DomainName": "logs", "DomainPackageStatus": "ASSOCIATING"}})),
            Reply::ok(json!({"DomainPackageDetails": {"PackageID": "F111", "DomainName": "logs", "DomainPackageStatus": "DISSOCIATING"}})),
        ]);
        let client = client(&mock);
        let associated = client
            .associate_package(AssociatePackageInput {
                domain_name: Some("logs".to_owned()),
                package_id: Some("F111".to_owned()),
            })
            .await
            .unwrap();
        assert_eq!(
            associated.domain_package_details.unwrap().domain_package_status,
            Some(DomainPackageStatus::Associating)
        );
        client
            .dissociate_package(DissociatePackageInput {
                domain_name: Some("logs".to_owned()),
                package_id: Some("F111".to_owned()),
            })
            .await
            .unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].path, "/2015-01-01/packages/associate/F111/logs");
        assert_eq!(sent[1].path, "/2015-01-01/packages/dissociate/F111/logs");
        assert!(sent.iter().all(|r| r.body.is_none()));
    }

    #[tokio::test]
    async fn test_should_send_package_id_in_update_body() {
        let mock = MockHandler::new([Reply::ok(json!({"PackageDetails": {"PackageID": "F111"}}))]);
        client(&mock)
            .update_package(UpdatePackageInput {
                package_id: Some("F111".to_owned()),
                package_source: Some(source()),
                commit_message: Some("more synonyms".to_owned()),
                package_description: None,
            })
            .await
            .unwrap();
        let req = mock.single_request();
        assert_eq!(req.path, "/2015-01-01/packages/update");
        assert_eq!(
            body_json(&req),
            json!({
                "CommitMessage": "more synonyms",
                "PackageID": "F111",
                "PackageSource": {"S3BucketName": "dicts", "S3Key": "synonyms.txt"}
            })
        );
    }

    #[tokio::test]
    async fn test_should_filter_packages() {
        let mock = MockHandler::new([Reply::ok(json!({
            "PackageDetailsList": [{"PackageID": "F1", "PackageStatus": "SOMETHING_NEW"}]
        }))]);
        let out = client(&mock)
            .describe_packages(DescribePackagesInput {
                filters: Some(vec![DescribePackagesFilter {
                    name: Some(DescribePackagesFilterName::PackageName),
                    value: Some(vec!["synonyms".to_owned()]),
                }]),
                max_results: Some(10),
                next_token: None,
            })
            .await
            .unwrap();
        let list = out.package_details_list.unwrap();
        assert_eq!(
            list[0].package_status,
            Some(PackageStatus::Unknown("SOMETHING_NEW".to_owned()))
        );

        let req = mock.single_request();
        assert_eq!(
            body_json(&req),
            json!({
                "Filters": [{"Name": "PackageName", "Value": ["synonyms"]}],
                "MaxResults": 10
            })
        );
    }

    #[tokio::test]
    async fn test_should_delete_package() {
        let mock = MockHandler::new([Reply::ok(json!({"PackageDetails": {"PackageStatus": "DELETING"}}))]);
        let out = client(&mock)
            .delete_package(DeletePackageInput {
                package_id: Some("F 1".to_owned()),
            })
            .await
            .unwrap();
        assert_eq!(
            out.package_details.unwrap().package_status,
            Some(PackageStatus::Deleting)
        );
        let req = mock.single_request();
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.path, "/2015-01-01/packages/F%201");
    }
}
