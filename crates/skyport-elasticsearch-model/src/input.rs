//! Elasticsearch Service operation inputs.
//!
//! Each input serializes to exactly the JSON body of its request. Fields bound
//! to the URI path or the query string are marked `#[serde(skip)]` and picked
//! up by the request serializer instead. Absent fields are never emitted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{
    AdvancedSecurityOptionsInput, AutoTuneOptions, AutoTuneOptionsInput, CognitoOptions,
    DescribePackagesFilter, DomainEndpointOptions, DomainInformation, EbsOptions,
    ElasticsearchClusterConfig, EncryptionAtRestOptions, Filter, LogPublishingOption, LogType,
    NodeToNodeEncryptionOptions, PackageSource, PackageType, SnapshotOptions, Tag, VpcOptions,
};

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Input for `CreateElasticsearchDomain`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateElasticsearchDomainInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<AdvancedSecurityOptionsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune_options: Option<AutoTuneOptionsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<CognitoOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<DomainEndpointOptions>,
    /// Name of the new domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "EBSOptions", skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<EbsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_cluster_config: Option<ElasticsearchClusterConfig>,
    /// Engine version, e.g. `7.10`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_options: Option<EncryptionAtRestOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_publishing_options: Option<BTreeMap<LogType, LogPublishingOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_to_node_encryption_options: Option<NodeToNodeEncryptionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_options: Option<SnapshotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<Tag>>,
    #[serde(rename = "VPCOptions", skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<VpcOptions>,
}

/// Input for `DeleteElasticsearchDomain`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteElasticsearchDomainInput {
    /// Path label.
    #[serde(skip)]
    pub domain_name: Option<String>,
}

/// Input for `DeleteElasticsearchServiceRole`. Takes no parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteElasticsearchServiceRoleInput {}

/// Input for `DescribeElasticsearchDomain`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeElasticsearchDomainInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
}

/// Input for `DescribeElasticsearchDomainConfig`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeElasticsearchDomainConfigInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
}

/// Input for `DescribeElasticsearchDomains`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainsInput {
    /// Up to five domain names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_names: Option<Vec<String>>,
}

/// Input for `ListDomainNames`. Takes no parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListDomainNamesInput {}

/// Input for `UpdateElasticsearchDomainConfig`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateElasticsearchDomainConfigInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<AdvancedSecurityOptionsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune_options: Option<AutoTuneOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<CognitoOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<DomainEndpointOptions>,
    /// Path label.
    #[serde(skip)]
    pub domain_name: Option<String>,
    #[serde(rename = "EBSOptions", skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<EbsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_cluster_config: Option<ElasticsearchClusterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_options: Option<EncryptionAtRestOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_publishing_options: Option<BTreeMap<LogType, LogPublishingOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_to_node_encryption_options: Option<NodeToNodeEncryptionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_options: Option<SnapshotOptions>,
    #[serde(rename = "VPCOptions", skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<VpcOptions>,
}

/// Input for `DescribeDomainAutoTunes`.
///
/// Sent as a `GET` whose JSON body carries the paging fields.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainAutoTunesInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Instance types and versions
// ---------------------------------------------------------------------------

/// Input for `DescribeElasticsearchInstanceTypeLimits`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeElasticsearchInstanceTypeLimitsInput {
    /// Query parameter `domainName`.
    #[serde(skip)]
    pub domain_name: Option<String>,
    /// Path label.
    #[serde(skip)]
    pub elasticsearch_version: Option<String>,
    /// Path label.
    #[serde(skip)]
    pub instance_type: Option<String>,
}

/// Input for `GetCompatibleElasticsearchVersions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetCompatibleElasticsearchVersionsInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
}

/// Input for `ListElasticsearchInstanceTypes`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListElasticsearchInstanceTypesInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
    #[serde(skip)]
    pub elasticsearch_version: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

/// Input for `ListElasticsearchVersions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListElasticsearchVersionsInput {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Service software and upgrades
// ---------------------------------------------------------------------------

/// Input for `CancelElasticsearchServiceSoftwareUpdate`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelElasticsearchServiceSoftwareUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

/// Input for `StartElasticsearchServiceSoftwareUpdate`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartElasticsearchServiceSoftwareUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

/// Input for `GetUpgradeHistory`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpgradeHistoryInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

/// Input for `GetUpgradeStatus`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpgradeStatusInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
}

/// Input for `UpgradeElasticsearchDomain`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeElasticsearchDomainInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// Only run the eligibility check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_check_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_version: Option<String>,
}

// ---------------------------------------------------------------------------
// Cross-cluster search
// ---------------------------------------------------------------------------

/// Input for `AcceptInboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AcceptInboundCrossClusterSearchConnectionInput {
    #[serde(skip)]
    pub cross_cluster_search_connection_id: Option<String>,
}

/// Input for `CreateOutboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOutboundCrossClusterSearchConnectionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_domain_info: Option<DomainInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_domain_info: Option<DomainInformation>,
}

/// Input for `DeleteInboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteInboundCrossClusterSearchConnectionInput {
    #[serde(skip)]
    pub cross_cluster_search_connection_id: Option<String>,
}

/// Input for `DeleteOutboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteOutboundCrossClusterSearchConnectionInput {
    #[serde(skip)]
    pub cross_cluster_search_connection_id: Option<String>,
}

/// Input for `DescribeInboundCrossClusterSearchConnections`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInboundCrossClusterSearchConnectionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `DescribeOutboundCrossClusterSearchConnections`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOutboundCrossClusterSearchConnectionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `RejectInboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RejectInboundCrossClusterSearchConnectionInput {
    #[serde(skip)]
    pub cross_cluster_search_connection_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Packages
// ---------------------------------------------------------------------------

/// Input for `AssociatePackage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssociatePackageInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
    #[serde(skip)]
    pub package_id: Option<String>,
}

/// Input for `CreatePackage`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePackageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_source: Option<PackageSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
}

/// Input for `DeletePackage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletePackageInput {
    #[serde(skip)]
    pub package_id: Option<String>,
}

/// Input for `DescribePackages`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePackagesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<DescribePackagesFilter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `DissociatePackage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DissociatePackageInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
    #[serde(skip)]
    pub package_id: Option<String>,
}

/// Input for `GetPackageVersionHistory`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPackageVersionHistoryInput {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub package_id: Option<String>,
}

/// Input for `ListDomainsForPackage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListDomainsForPackageInput {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
    #[serde(skip)]
    pub package_id: Option<String>,
}

/// Input for `ListPackagesForDomain`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPackagesForDomainInput {
    #[serde(skip)]
    pub domain_name: Option<String>,
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
}

/// Input for `UpdatePackage`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePackageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_description: Option<String>,
    /// Sent in the body, not the path.
    #[serde(rename = "PackageID", skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_source: Option<PackageSource>,
}

// ---------------------------------------------------------------------------
// Reserved instances
// ---------------------------------------------------------------------------

/// Input for `DescribeReservedElasticsearchInstanceOfferings`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeReservedElasticsearchInstanceOfferingsInput {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Query parameter `offeringId`.
    #[serde(skip)]
    pub reserved_elasticsearch_instance_offering_id: Option<String>,
}

/// Input for `DescribeReservedElasticsearchInstances`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeReservedElasticsearchInstancesInput {
    #[serde(skip)]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub next_token: Option<String>,
    /// Query parameter `reservationId`.
    #[serde(skip)]
    pub reserved_elasticsearch_instance_id: Option<String>,
}

/// Input for `PurchaseReservedElasticsearchInstanceOffering`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseReservedElasticsearchInstanceOfferingInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_elasticsearch_instance_offering_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Input for `AddTags`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsInput {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<Tag>>,
}

/// Input for `ListTags`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListTagsInput {
    /// Query parameter `arn`.
    #[serde(skip)]
    pub arn: Option<String>,
}

/// Input for `RemoveTags`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveTagsInput {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_keys: Option<Vec<String>>,
}
