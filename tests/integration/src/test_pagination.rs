//! Pagination integration tests.

#[cfg(test)]
mod tests {
    use futures::{StreamExt, TryStreamExt};
    use serde_json::json;
    use skyport_elasticsearch_model::input::{
        DescribeReservedElasticsearchInstanceOfferingsInput, ListDomainsForPackageInput,
        ListElasticsearchInstanceTypesInput,
    };
    use skyport_elasticsearch_model::types::ReservedElasticsearchInstancePaymentOption;

    use crate::{MockHandler, Reply, client};

    #[tokio::test]
    async fn test_should_collect_all_instance_types() {
        let mock = MockHandler::new([
            Reply::ok(json!({"ElasticsearchInstanceTypes": ["m5.large.elasticsearch"], "NextToken": "a/b"})),
            Reply::ok(json!({"ElasticsearchInstanceTypes": ["r5.large.elasticsearch"], "NextToken": ""})),
        ]);
        let pages: Vec<_> = client(&mock)
            .list_elasticsearch_instance_types_paginator(
                ListElasticsearchInstanceTypesInput {
                    elasticsearch_version: Some("7.10".to_owned()),
                    domain_name: Some("logs".to_owned()),
                    ..ListElasticsearchInstanceTypesInput::default()
                },
                Some(30),
            )
            .try_collect()
            .await
            .unwrap();
        let types: Vec<String> = pages
            .into_iter()
            .flat_map(|p| p.elasticsearch_instance_types.unwrap_or_default())
            .collect();
        assert_eq!(types, vec!["m5.large.elasticsearch", "r5.large.elasticsearch"]);

        let sent = mock.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[0].path_and_query(),
            "/2015-01-01/es/instanceTypes/7.10?domainName=logs&maxResults=30"
        );
        assert_eq!(
            sent[1].path_and_query(),
            "/2015-01-01/es/instanceTypes/7.10?domainName=logs&maxResults=30&nextToken=a%2Fb"
        );
    }

    #[tokio::test]
    async fn test_should_page_reserved_offerings() {
        let mock = MockHandler::new([
            Reply::ok(json!({
                "ReservedElasticsearchInstanceOfferings": [{
                    "ReservedElasticsearchInstanceOfferingId": "o-1",
                    "Duration": 31_536_000,
                    "FixedPrice": 100.5,
                    "PaymentOption": "PARTIAL_UPFRONT",
                    "RecurringCharges": [{"RecurringChargeAmount": 0.05, "RecurringChargeFrequency": "Hourly"}]
                }],
                "NextToken": "p2"
            })),
            Reply::ok(json!({"ReservedElasticsearchInstanceOfferings": []})),
        ]);
        let pages: Vec<_> = client(&mock)
            .describe_reserved_elasticsearch_instance_offerings_paginator(
                DescribeReservedElasticsearchInstanceOfferingsInput::default(),
                None,
            )
            .collect()
            .await;
        assert_eq!(pages.len(), 2);
        let first = pages[0].as_ref().unwrap();
        let offering = &first.reserved_elasticsearch_instance_offerings.as_ref().unwrap()[0];
        assert_eq!(offering.duration, Some(31_536_000));
        assert_eq!(
            offering.payment_option,
            Some(ReservedElasticsearchInstancePaymentOption::PartialUpfront)
        );

        let sent = mock.requests();
        assert_eq!(sent[0].query_string(), "");
        assert_eq!(sent[1].query_string(), "nextToken=p2");
    }

    #[tokio::test]
    async fn test_should_stop_after_failed_page() {
        let mock = MockHandler::new([
            Reply::ok(json!({"DomainPackageDetailsList": [], "NextToken": "t1"})),
            Reply::status(400, json!({"code": "ValidationException"}).to_string()),
            Reply::ok(json!({"DomainPackageDetailsList": []})),
        ]);
        let pages: Vec<_> = client(&mock)
            .list_domains_for_package_paginator(
                ListDomainsForPackageInput {
                    package_id: Some("F1".to_owned()),
                    ..ListDomainsForPackageInput::default()
                },
                Some(2),
            )
            .collect()
            .await;
        assert_eq!(pages.len(), 2);
        assert!(pages[1].is_err());
        assert_eq!(mock.requests().len(), 2);
    }
}
