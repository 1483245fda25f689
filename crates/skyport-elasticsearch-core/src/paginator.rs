//! Paginators for the token-paginated operations.
//!
//! Each paginator returns a [`Stream`] of pages. The stream copies the
//! returned `NextToken` into the next request and ends when the service stops
//! returning one.

use futures::Stream;
use skyport_core::paginate::{PaginatedInput, PaginatedOutput, paginate};
use skyport_elasticsearch_http::SerializeRequest;
use skyport_elasticsearch_model::input::{
    DescribeDomainAutoTunesInput, DescribeInboundCrossClusterSearchConnectionsInput,
    DescribeOutboundCrossClusterSearchConnectionsInput, DescribePackagesInput,
    DescribeReservedElasticsearchInstanceOfferingsInput,
    DescribeReservedElasticsearchInstancesInput, GetPackageVersionHistoryInput,
    GetUpgradeHistoryInput, ListDomainsForPackageInput, ListElasticsearchInstanceTypesInput,
    ListElasticsearchVersionsInput, ListPackagesForDomainInput,
};
use skyport_elasticsearch_model::output::{
    DescribeDomainAutoTunesOutput, DescribeInboundCrossClusterSearchConnectionsOutput,
    DescribeOutboundCrossClusterSearchConnectionsOutput, DescribePackagesOutput,
    DescribeReservedElasticsearchInstanceOfferingsOutput,
    DescribeReservedElasticsearchInstancesOutput, GetPackageVersionHistoryOutput,
    GetUpgradeHistoryOutput, ListDomainsForPackageOutput, ListElasticsearchInstanceTypesOutput,
    ListElasticsearchVersionsOutput, ListPackagesForDomainOutput,
};

use crate::client::{ClientResult, ElasticsearchClient};

impl ElasticsearchClient {
    /// Stream every page of a paginated operation.
    ///
    /// `page_size`, if given, overrides `MaxResults` on every request.
    pub fn paginator<I>(
        &self,
        mut input: I,
        page_size: Option<i32>,
    ) -> impl Stream<Item = ClientResult<I::Output>> + use<I>
    where
        I: SerializeRequest + PaginatedInput,
        I::Output: PaginatedOutput,
    {
        if let Some(size) = page_size {
            input.set_page_size(size);
        }
        let client = self.clone();
        paginate(input, move |input: I| {
            let client = client.clone();
            async move { client.send(input).await }
        })
    }
}

macro_rules! paginators {
    ($($(#[$doc:meta])* $name:ident($input:ty) -> $output:ty;)+) => {
        impl ElasticsearchClient {
            $(
                $(#[$doc])*
                pub fn $name(
                    &self,
                    input: $input,
                    page_size: Option<i32>,
                ) -> impl Stream<Item = ClientResult<$output>> + use<> {
                    self.paginator(input, page_size)
                }
            )+
        }
    };
}

paginators! {
    /// Pages of `DescribeDomainAutoTunes`.
    describe_domain_auto_tunes_paginator(DescribeDomainAutoTunesInput)
        -> DescribeDomainAutoTunesOutput;
    /// Pages of `DescribeInboundCrossClusterSearchConnections`.
    describe_inbound_cross_cluster_search_connections_paginator(
        DescribeInboundCrossClusterSearchConnectionsInput
    ) -> DescribeInboundCrossClusterSearchConnectionsOutput;
    /// Pages of `DescribeOutboundCrossClusterSearchConnections`.
    describe_outbound_cross_cluster_search_connections_paginator(
        DescribeOutboundCrossClusterSearchConnectionsInput
    ) -> DescribeOutboundCrossClusterSearchConnectionsOutput;
    /// Pages of `DescribePackages`.
    describe_packages_paginator(DescribePackagesInput) -> DescribePackagesOutput;
    /// Pages of `DescribeReservedElasticsearchInstanceOfferings`.
    describe_reserved_elasticsearch_instance_offerings_paginator(
        DescribeReservedElasticsearchInstanceOfferingsInput
    ) -> DescribeReservedElasticsearchInstanceOfferingsOutput;
    /// Pages of `DescribeReservedElasticsearchInstances`.
    describe_reserved_elasticsearch_instances_paginator(
        DescribeReservedElasticsearchInstancesInput
    ) -> DescribeReservedElasticsearchInstancesOutput;
    /// Pages of `GetPackageVersionHistory`.
    get_package_version_history_paginator(GetPackageVersionHistoryInput)
        -> GetPackageVersionHistoryOutput;
    /// Pages of `GetUpgradeHistory`.
    get_upgrade_history_paginator(GetUpgradeHistoryInput) -> GetUpgradeHistoryOutput;
    /// Pages of `ListDomainsForPackage`.
    list_domains_for_package_paginator(ListDomainsForPackageInput)
        -> ListDomainsForPackageOutput;
    /// Pages of `ListElasticsearchInstanceTypes`.
    list_elasticsearch_instance_types_paginator(ListElasticsearchInstanceTypesInput)
        -> ListElasticsearchInstanceTypesOutput;
    /// Pages of `ListElasticsearchVersions`.
    list_elasticsearch_versions_paginator(ListElasticsearchVersionsInput)
        -> ListElasticsearchVersionsOutput;
    /// Pages of `ListPackagesForDomain`.
    list_packages_for_domain_paginator(ListPackagesForDomainInput)
        -> ListPackagesForDomainOutput;
}
