//! Request serializers.
//!
//! Every operation input knows its operation, its output type and how to lay
//! itself out on the wire. Label checks happen here, before any I/O: a
//! missing or empty label fails with a [`BuildError`] naming the field.

use skyport_core::{BuildError, HttpRequest, RequestBuilder, ResolveEndpoint};
use skyport_elasticsearch_model::input::{
    AcceptInboundCrossClusterSearchConnectionInput, AddTagsInput, AssociatePackageInput,
    CancelElasticsearchServiceSoftwareUpdateInput, CreateElasticsearchDomainInput,
    CreateOutboundCrossClusterSearchConnectionInput, CreatePackageInput,
    DeleteElasticsearchDomainInput, DeleteElasticsearchServiceRoleInput,
    DeleteInboundCrossClusterSearchConnectionInput,
    DeleteOutboundCrossClusterSearchConnectionInput, DeletePackageInput,
    DescribeDomainAutoTunesInput, DescribeElasticsearchDomainConfigInput,
    DescribeElasticsearchDomainInput, DescribeElasticsearchDomainsInput,
    DescribeElasticsearchInstanceTypeLimitsInput,
    DescribeInboundCrossClusterSearchConnectionsInput,
    DescribeOutboundCrossClusterSearchConnectionsInput, DescribePackagesInput,
    DescribeReservedElasticsearchInstanceOfferingsInput,
    DescribeReservedElasticsearchInstancesInput, DissociatePackageInput,
    GetCompatibleElasticsearchVersionsInput, GetPackageVersionHistoryInput,
    GetUpgradeHistoryInput, GetUpgradeStatusInput, ListDomainNamesInput,
    ListDomainsForPackageInput, ListElasticsearchInstanceTypesInput,
    ListElasticsearchVersionsInput, ListPackagesForDomainInput, ListTagsInput,
    PurchaseReservedElasticsearchInstanceOfferingInput,
    RejectInboundCrossClusterSearchConnectionInput, RemoveTagsInput,
    StartElasticsearchServiceSoftwareUpdateInput, UpdateElasticsearchDomainConfigInput,
    UpdatePackageInput, UpgradeElasticsearchDomainInput,
};
use skyport_elasticsearch_model::output::{
    AcceptInboundCrossClusterSearchConnectionOutput, AddTagsOutput, AssociatePackageOutput,
    CancelElasticsearchServiceSoftwareUpdateOutput, CreateElasticsearchDomainOutput,
    CreateOutboundCrossClusterSearchConnectionOutput, CreatePackageOutput,
    DeleteElasticsearchDomainOutput, DeleteElasticsearchServiceRoleOutput,
    DeleteInboundCrossClusterSearchConnectionOutput,
    DeleteOutboundCrossClusterSearchConnectionOutput, DeletePackageOutput,
    DescribeDomainAutoTunesOutput, DescribeElasticsearchDomainConfigOutput,
    DescribeElasticsearchDomainOutput, DescribeElasticsearchDomainsOutput,
    DescribeElasticsearchInstanceTypeLimitsOutput,
    DescribeInboundCrossClusterSearchConnectionsOutput,
    DescribeOutboundCrossClusterSearchConnectionsOutput, DescribePackagesOutput,
    DescribeReservedElasticsearchInstanceOfferingsOutput,
    DescribeReservedElasticsearchInstancesOutput, DissociatePackageOutput,
    GetCompatibleElasticsearchVersionsOutput, GetPackageVersionHistoryOutput,
    GetUpgradeHistoryOutput, GetUpgradeStatusOutput, ListDomainNamesOutput,
    ListDomainsForPackageOutput, ListElasticsearchInstanceTypesOutput,
    ListElasticsearchVersionsOutput, ListPackagesForDomainOutput, ListTagsOutput,
    OperationOutput, PurchaseReservedElasticsearchInstanceOfferingOutput,
    RejectInboundCrossClusterSearchConnectionOutput, RemoveTagsOutput,
    StartElasticsearchServiceSoftwareUpdateOutput, UpdateElasticsearchDomainConfigOutput,
    UpdatePackageOutput, UpgradeElasticsearchDomainOutput,
};
use skyport_elasticsearch_model::operations::ElasticsearchOperation;

/// An operation input that can be turned into an HTTP request.
pub trait SerializeRequest {
    /// The output the operation returns.
    type Output: OperationOutput;

    /// The operation this input belongs to.
    const OPERATION: ElasticsearchOperation;

    /// Build the request for this input.
    fn serialize_request(&self, endpoint: &dyn ResolveEndpoint)
    -> Result<HttpRequest, BuildError>;
}

fn request(op: ElasticsearchOperation) -> RequestBuilder {
    RequestBuilder::new(op.method(), op.uri())
}

/// Inputs whose every field goes into the JSON body.
macro_rules! json_body {
    ($($input:ty => $output:ty, $op:ident;)+) => {
        $(
            impl SerializeRequest for $input {
                type Output = $output;
                const OPERATION: ElasticsearchOperation = ElasticsearchOperation::$op;

                fn serialize_request(
                    &self,
                    endpoint: &dyn ResolveEndpoint,
                ) -> Result<HttpRequest, BuildError> {
                    request(Self::OPERATION).json_body(self)?.build(endpoint)
                }
            }
        )+
    };
}

json_body! {
    AddTagsInput => AddTagsOutput, AddTags;
    CancelElasticsearchServiceSoftwareUpdateInput
        => CancelElasticsearchServiceSoftwareUpdateOutput, CancelElasticsearchServiceSoftwareUpdate;
    CreateElasticsearchDomainInput => CreateElasticsearchDomainOutput, CreateElasticsearchDomain;
    CreateOutboundCrossClusterSearchConnectionInput
        => CreateOutboundCrossClusterSearchConnectionOutput, CreateOutboundCrossClusterSearchConnection;
    CreatePackageInput => CreatePackageOutput, CreatePackage;
    DescribeElasticsearchDomainsInput
        => DescribeElasticsearchDomainsOutput, DescribeElasticsearchDomains;
    DescribeInboundCrossClusterSearchConnectionsInput
        => DescribeInboundCrossClusterSearchConnectionsOutput, DescribeInboundCrossClusterSearchConnections;
    DescribeOutboundCrossClusterSearchConnectionsInput
        => DescribeOutboundCrossClusterSearchConnectionsOutput, DescribeOutboundCrossClusterSearchConnections;
    DescribePackagesInput => DescribePackagesOutput, DescribePackages;
    PurchaseReservedElasticsearchInstanceOfferingInput
        => PurchaseReservedElasticsearchInstanceOfferingOutput, PurchaseReservedElasticsearchInstanceOffering;
    RemoveTagsInput => RemoveTagsOutput, RemoveTags;
    StartElasticsearchServiceSoftwareUpdateInput
        => StartElasticsearchServiceSoftwareUpdateOutput, StartElasticsearchServiceSoftwareUpdate;
    UpdatePackageInput => UpdatePackageOutput, UpdatePackage;
    UpgradeElasticsearchDomainInput => UpgradeElasticsearchDomainOutput, UpgradeElasticsearchDomain;
}

/// Inputs without parameters that still send an empty body.
macro_rules! empty_body {
    ($($input:ty => $output:ty, $op:ident;)+) => {
        $(
            impl SerializeRequest for $input {
                type Output = $output;
                const OPERATION: ElasticsearchOperation = ElasticsearchOperation::$op;

                fn serialize_request(
                    &self,
                    endpoint: &dyn ResolveEndpoint,
                ) -> Result<HttpRequest, BuildError> {
                    request(Self::OPERATION).empty_body().build(endpoint)
                }
            }
        )+
    };
}

empty_body! {
    DeleteElasticsearchServiceRoleInput
        => DeleteElasticsearchServiceRoleOutput, DeleteElasticsearchServiceRole;
    ListDomainNamesInput => ListDomainNamesOutput, ListDomainNames;
}

/// Inputs addressed by a single path label and nothing else.
macro_rules! single_label {
    ($($input:ty => $output:ty, $op:ident, $label:literal, $field:ident;)+) => {
        $(
            impl SerializeRequest for $input {
                type Output = $output;
                const OPERATION: ElasticsearchOperation = ElasticsearchOperation::$op;

                fn serialize_request(
                    &self,
                    endpoint: &dyn ResolveEndpoint,
                ) -> Result<HttpRequest, BuildError> {
                    request(Self::OPERATION)
                        .label($label, self.$field.as_deref())?
                        .build(endpoint)
                }
            }
        )+
    };
}

single_label! {
    AcceptInboundCrossClusterSearchConnectionInput
        => AcceptInboundCrossClusterSearchConnectionOutput, AcceptInboundCrossClusterSearchConnection,
        "CrossClusterSearchConnectionId", cross_cluster_search_connection_id;
    DeleteElasticsearchDomainInput
        => DeleteElasticsearchDomainOutput, DeleteElasticsearchDomain,
        "DomainName", domain_name;
    DeleteInboundCrossClusterSearchConnectionInput
        => DeleteInboundCrossClusterSearchConnectionOutput, DeleteInboundCrossClusterSearchConnection,
        "CrossClusterSearchConnectionId", cross_cluster_search_connection_id;
    DeleteOutboundCrossClusterSearchConnectionInput
        => DeleteOutboundCrossClusterSearchConnectionOutput, DeleteOutboundCrossClusterSearchConnection,
        "CrossClusterSearchConnectionId", cross_cluster_search_connection_id;
    DeletePackageInput => DeletePackageOutput, DeletePackage, "PackageID", package_id;
    DescribeElasticsearchDomainInput
        => DescribeElasticsearchDomainOutput, DescribeElasticsearchDomain,
        "DomainName", domain_name;
    DescribeElasticsearchDomainConfigInput
        => DescribeElasticsearchDomainConfigOutput, DescribeElasticsearchDomainConfig,
        "DomainName", domain_name;
    GetUpgradeStatusInput => GetUpgradeStatusOutput, GetUpgradeStatus, "DomainName", domain_name;
    RejectInboundCrossClusterSearchConnectionInput
        => RejectInboundCrossClusterSearchConnectionOutput, RejectInboundCrossClusterSearchConnection,
        "CrossClusterSearchConnectionId", cross_cluster_search_connection_id;
}

/// Inputs addressed by one path label and paged through the query string.
macro_rules! label_paged {
    ($($input:ty => $output:ty, $op:ident, $label:literal, $field:ident;)+) => {
        $(
            impl SerializeRequest for $input {
                type Output = $output;
                const OPERATION: ElasticsearchOperation = ElasticsearchOperation::$op;

                fn serialize_request(
                    &self,
                    endpoint: &dyn ResolveEndpoint,
                ) -> Result<HttpRequest, BuildError> {
                    request(Self::OPERATION)
                        .label($label, self.$field.as_deref())?
                        .query("maxResults", self.max_results)
                        .query("nextToken", self.next_token.as_deref())
                        .build(endpoint)
                }
            }
        )+
    };
}

label_paged! {
    GetPackageVersionHistoryInput
        => GetPackageVersionHistoryOutput, GetPackageVersionHistory, "PackageID", package_id;
    GetUpgradeHistoryInput => GetUpgradeHistoryOutput, GetUpgradeHistory, "DomainName", domain_name;
    ListDomainsForPackageInput
        => ListDomainsForPackageOutput, ListDomainsForPackage, "PackageID", package_id;
    ListPackagesForDomainInput
        => ListPackagesForDomainOutput, ListPackagesForDomain, "DomainName", domain_name;
}

impl SerializeRequest for AssociatePackageInput {
    type Output = AssociatePackageOutput;
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::AssociatePackage;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .label("PackageID", self.package_id.as_deref())?
            .label("DomainName", self.domain_name.as_deref())?
            .build(endpoint)
    }
}

impl SerializeRequest for DissociatePackageInput {
    type Output = DissociatePackageOutput;
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::DissociatePackage;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .label("PackageID", self.package_id.as_deref())?
            .label("DomainName", self.domain_name.as_deref())?
            .build(endpoint)
    }
}

impl SerializeRequest for DescribeDomainAutoTunesInput {
    type Output = DescribeDomainAutoTunesOutput;
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::DescribeDomainAutoTunes;

    // A GET that carries its paging fields in a JSON body.
    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .label("DomainName", self.domain_name.as_deref())?
            .json_body(self)?
            .build(endpoint)
    }
}

impl SerializeRequest for UpdateElasticsearchDomainConfigInput {
    type Output = UpdateElasticsearchDomainConfigOutput;
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::UpdateElasticsearchDomainConfig;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .label("DomainName", self.domain_name.as_deref())?
            .json_body(self)?
            .build(endpoint)
    }
}

impl SerializeRequest for DescribeElasticsearchInstanceTypeLimitsInput {
    type Output = DescribeElasticsearchInstanceTypeLimitsOutput;
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::DescribeElasticsearchInstanceTypeLimits;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .label("InstanceType", self.instance_type.as_deref())?
            .label("ElasticsearchVersion", self.elasticsearch_version.as_deref())?
            .query("domainName", self.domain_name.as_deref())
            .build(endpoint)
    }
}

impl SerializeRequest for ListElasticsearchInstanceTypesInput {
    type Output = ListElasticsearchInstanceTypesOutput;
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::ListElasticsearchInstanceTypes;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .label("ElasticsearchVersion", self.elasticsearch_version.as_deref())?
            .query("domainName", self.domain_name.as_deref())
            .query("maxResults", self.max_results)
            .query("nextToken", self.next_token.as_deref())
            .build(endpoint)
    }
}

impl SerializeRequest for DescribeReservedElasticsearchInstanceOfferingsInput {
    type Output = DescribeReservedElasticsearchInstanceOfferingsOutput;
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::DescribeReservedElasticsearchInstanceOfferings;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .query(
                "offeringId",
                self.reserved_elasticsearch_instance_offering_id.as_deref(),
            )
            .query("maxResults", self.max_results)
            .query("nextToken", self.next_token.as_deref())
            .build(endpoint)
    }
}

impl SerializeRequest for DescribeReservedElasticsearchInstancesInput {
    type Output = DescribeReservedElasticsearchInstancesOutput;
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::DescribeReservedElasticsearchInstances;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .query(
                "reservationId",
                self.reserved_elasticsearch_instance_id.as_deref(),
            )
            .query("maxResults", self.max_results)
            .query("nextToken", self.next_token.as_deref())
            .build(endpoint)
    }
}

impl SerializeRequest for GetCompatibleElasticsearchVersionsInput {
    type Output = GetCompatibleElasticsearchVersionsOutput;
    const OPERATION: ElasticsearchOperation =
        ElasticsearchOperation::GetCompatibleElasticsearchVersions;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .query("domainName", self.domain_name.as_deref())
            .build(endpoint)
    }
}

impl SerializeRequest for ListElasticsearchVersionsInput {
    type Output = ListElasticsearchVersionsOutput;
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::ListElasticsearchVersions;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .query("maxResults", self.max_results)
            .query("nextToken", self.next_token.as_deref())
            .build(endpoint)
    }
}

impl SerializeRequest for ListTagsInput {
    type Output = ListTagsOutput;
    const OPERATION: ElasticsearchOperation = ElasticsearchOperation::ListTags;

    fn serialize_request(
        &self,
        endpoint: &dyn ResolveEndpoint,
    ) -> Result<HttpRequest, BuildError> {
        request(Self::OPERATION)
            .query("arn", self.arn.as_deref())
            .build(endpoint)
    }
}
