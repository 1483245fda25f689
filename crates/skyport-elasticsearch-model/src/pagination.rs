//! Continuation-token plumbing for the paginated operations.

use skyport_core::paginate::{PaginatedInput, PaginatedOutput};

use crate::input::{
    DescribeDomainAutoTunesInput, DescribeInboundCrossClusterSearchConnectionsInput,
    DescribeOutboundCrossClusterSearchConnectionsInput, DescribePackagesInput,
    DescribeReservedElasticsearchInstanceOfferingsInput,
    DescribeReservedElasticsearchInstancesInput, GetPackageVersionHistoryInput,
    GetUpgradeHistoryInput, ListDomainsForPackageInput, ListElasticsearchInstanceTypesInput,
    ListElasticsearchVersionsInput, ListPackagesForDomainInput,
};
use crate::output::{
    DescribeDomainAutoTunesOutput, DescribeInboundCrossClusterSearchConnectionsOutput,
    DescribeOutboundCrossClusterSearchConnectionsOutput, DescribePackagesOutput,
    DescribeReservedElasticsearchInstanceOfferingsOutput,
    DescribeReservedElasticsearchInstancesOutput, GetPackageVersionHistoryOutput,
    GetUpgradeHistoryOutput, ListDomainsForPackageOutput, ListElasticsearchInstanceTypesOutput,
    ListElasticsearchVersionsOutput, ListPackagesForDomainOutput,
};

macro_rules! paginated {
    ($($input:ty => $output:ty),+ $(,)?) => {
        $(
            impl PaginatedInput for $input {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn set_next_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }

                fn set_page_size(&mut self, page_size: i32) {
                    self.max_results = Some(page_size);
                }
            }

            impl PaginatedOutput for $output {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }
            }
        )+
    };
}

paginated! {
    DescribeDomainAutoTunesInput => DescribeDomainAutoTunesOutput,
    DescribeInboundCrossClusterSearchConnectionsInput
        => DescribeInboundCrossClusterSearchConnectionsOutput,
    DescribeOutboundCrossClusterSearchConnectionsInput
        => DescribeOutboundCrossClusterSearchConnectionsOutput,
    DescribePackagesInput => DescribePackagesOutput,
    DescribeReservedElasticsearchInstanceOfferingsInput
        => DescribeReservedElasticsearchInstanceOfferingsOutput,
    DescribeReservedElasticsearchInstancesInput => DescribeReservedElasticsearchInstancesOutput,
    GetPackageVersionHistoryInput => GetPackageVersionHistoryOutput,
    GetUpgradeHistoryInput => GetUpgradeHistoryOutput,
    ListDomainsForPackageInput => ListDomainsForPackageOutput,
    ListElasticsearchInstanceTypesInput => ListElasticsearchInstanceTypesOutput,
    ListElasticsearchVersionsInput => ListElasticsearchVersionsOutput,
    ListPackagesForDomainInput => ListPackagesForDomainOutput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_set_token_and_page_size() {
        let mut input = DescribePackagesInput::default();
        input.set_next_token(Some("abc".to_owned()));
        input.set_page_size(50);
        assert_eq!(PaginatedInput::next_token(&input), Some("abc"));
        assert_eq!(input.max_results, Some(50));
    }

    #[test]
    fn test_should_read_output_token() {
        let output: ListElasticsearchVersionsOutput =
            serde_json::from_str(r#"{"ElasticsearchVersions": ["7.10"], "NextToken": "n"}"#)
                .unwrap();
        assert_eq!(PaginatedOutput::next_token(&output), Some("n"));
    }
}
