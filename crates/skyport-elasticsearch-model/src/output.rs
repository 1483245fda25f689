//! Elasticsearch Service operation outputs.
//!
//! Outputs are read from the JSON response body. Every output also carries
//! the [`ResponseMetadata`] taken from the response head, which is never part
//! of the body.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use skyport_core::ResponseMetadata;
use skyport_core::shape::{dense_list, dense_map};

use crate::types::{
    AutoTune, CompatibleVersionsMap, DomainInfo, DomainInformation, DomainPackageDetails,
    ElasticsearchDomainConfig, ElasticsearchDomainStatus, InboundCrossClusterSearchConnection,
    Limits, OutboundCrossClusterSearchConnection, OutboundCrossClusterSearchConnectionStatus,
    PackageDetails, PackageVersionHistory, ReservedElasticsearchInstance,
    ReservedElasticsearchInstanceOffering, ServiceSoftwareOptions, Tag, UpgradeHistory,
    UpgradeStatus, UpgradeStep,
};

/// An operation output decoded from a response.
pub trait OperationOutput: DeserializeOwned + Default {
    /// Whether the operation returns a JSON payload at all.
    const HAS_PAYLOAD: bool = true;

    /// Response metadata.
    fn metadata(&self) -> &ResponseMetadata;

    /// Attach the response metadata.
    fn set_metadata(&mut self, metadata: ResponseMetadata);
}

macro_rules! impl_output {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl OperationOutput for $ty {
                fn metadata(&self) -> &ResponseMetadata {
                    &self.metadata
                }

                fn set_metadata(&mut self, metadata: ResponseMetadata) {
                    self.metadata = metadata;
                }
            }
        )+
    };
}

macro_rules! impl_empty_output {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl OperationOutput for $ty {
                const HAS_PAYLOAD: bool = false;

                fn metadata(&self) -> &ResponseMetadata {
                    &self.metadata
                }

                fn set_metadata(&mut self, metadata: ResponseMetadata) {
                    self.metadata = metadata;
                }
            }
        )+
    };
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Output of `CreateElasticsearchDomain`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateElasticsearchDomainOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_status: Option<ElasticsearchDomainStatus>,
}

/// Output of `DeleteElasticsearchDomain`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteElasticsearchDomainOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_status: Option<ElasticsearchDomainStatus>,
}

/// Output of `DeleteElasticsearchServiceRole`. No payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteElasticsearchServiceRoleOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
}

/// Output of `DescribeElasticsearchDomain`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_status: Option<ElasticsearchDomainStatus>,
}

/// Output of `DescribeElasticsearchDomainConfig`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainConfigOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_config: Option<ElasticsearchDomainConfig>,
}

/// Output of `DescribeElasticsearchDomains`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchDomainsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub domain_status_list: Option<Vec<ElasticsearchDomainStatus>>,
}

/// Output of `ListDomainNames`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDomainNamesOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub domain_names: Option<Vec<DomainInfo>>,
}

/// Output of `UpdateElasticsearchDomainConfig`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateElasticsearchDomainConfigOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_config: Option<ElasticsearchDomainConfig>,
}

/// Output of `DescribeDomainAutoTunes`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainAutoTunesOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub auto_tunes: Option<Vec<AutoTune>>,
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Instance types and versions
// ---------------------------------------------------------------------------

/// Output of `DescribeElasticsearchInstanceTypeLimits`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeElasticsearchInstanceTypeLimitsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    /// Limits keyed by node role (`data`, `master`).
    #[serde(default, deserialize_with = "dense_map::deserialize")]
    pub limits_by_role: Option<BTreeMap<String, Limits>>,
}

/// Output of `GetCompatibleElasticsearchVersions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCompatibleElasticsearchVersionsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub compatible_elasticsearch_versions: Option<Vec<CompatibleVersionsMap>>,
}

/// Output of `ListElasticsearchInstanceTypes`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListElasticsearchInstanceTypesOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub elasticsearch_instance_types: Option<Vec<String>>,
    pub next_token: Option<String>,
}

/// Output of `ListElasticsearchVersions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListElasticsearchVersionsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub elasticsearch_versions: Option<Vec<String>>,
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Service software and upgrades
// ---------------------------------------------------------------------------

/// Output of `CancelElasticsearchServiceSoftwareUpdate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelElasticsearchServiceSoftwareUpdateOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub service_software_options: Option<ServiceSoftwareOptions>,
}

/// Output of `StartElasticsearchServiceSoftwareUpdate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartElasticsearchServiceSoftwareUpdateOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub service_software_options: Option<ServiceSoftwareOptions>,
}

/// Output of `GetUpgradeHistory`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUpgradeHistoryOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub next_token: Option<String>,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub upgrade_histories: Option<Vec<UpgradeHistory>>,
}

/// Output of `GetUpgradeStatus`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUpgradeStatusOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub step_status: Option<UpgradeStatus>,
    pub upgrade_name: Option<String>,
    pub upgrade_step: Option<UpgradeStep>,
}

/// Output of `UpgradeElasticsearchDomain`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeElasticsearchDomainOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_name: Option<String>,
    pub perform_check_only: Option<bool>,
    pub target_version: Option<String>,
}

// ---------------------------------------------------------------------------
// Cross-cluster search
// ---------------------------------------------------------------------------

/// Output of `AcceptInboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptInboundCrossClusterSearchConnectionOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub cross_cluster_search_connection: Option<InboundCrossClusterSearchConnection>,
}

/// Output of `CreateOutboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOutboundCrossClusterSearchConnectionOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub connection_alias: Option<String>,
    pub connection_status: Option<OutboundCrossClusterSearchConnectionStatus>,
    pub cross_cluster_search_connection_id: Option<String>,
    pub destination_domain_info: Option<DomainInformation>,
    pub source_domain_info: Option<DomainInformation>,
}

/// Output of `DeleteInboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteInboundCrossClusterSearchConnectionOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub cross_cluster_search_connection: Option<InboundCrossClusterSearchConnection>,
}

/// Output of `DeleteOutboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteOutboundCrossClusterSearchConnectionOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub cross_cluster_search_connection: Option<OutboundCrossClusterSearchConnection>,
}

/// Output of `DescribeInboundCrossClusterSearchConnections`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInboundCrossClusterSearchConnectionsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub cross_cluster_search_connections: Option<Vec<InboundCrossClusterSearchConnection>>,
    pub next_token: Option<String>,
}

/// Output of `DescribeOutboundCrossClusterSearchConnections`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOutboundCrossClusterSearchConnectionsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub cross_cluster_search_connections: Option<Vec<OutboundCrossClusterSearchConnection>>,
    pub next_token: Option<String>,
}

/// Output of `RejectInboundCrossClusterSearchConnection`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RejectInboundCrossClusterSearchConnectionOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub cross_cluster_search_connection: Option<InboundCrossClusterSearchConnection>,
}

// ---------------------------------------------------------------------------
// Packages
// ---------------------------------------------------------------------------

/// Output of `AssociatePackage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociatePackageOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_package_details: Option<DomainPackageDetails>,
}

/// Output of `CreatePackage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePackageOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub package_details: Option<PackageDetails>,
}

/// Output of `DeletePackage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePackageOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub package_details: Option<PackageDetails>,
}

/// Output of `DescribePackages`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePackagesOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub next_token: Option<String>,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub package_details_list: Option<Vec<PackageDetails>>,
}

/// Output of `DissociatePackage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DissociatePackageOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub domain_package_details: Option<DomainPackageDetails>,
}

/// Output of `GetPackageVersionHistory`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPackageVersionHistoryOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub next_token: Option<String>,
    #[serde(rename = "PackageID")]
    pub package_id: Option<String>,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub package_version_history_list: Option<Vec<PackageVersionHistory>>,
}

/// Output of `ListDomainsForPackage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDomainsForPackageOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub domain_package_details_list: Option<Vec<DomainPackageDetails>>,
    pub next_token: Option<String>,
}

/// Output of `ListPackagesForDomain`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPackagesForDomainOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub domain_package_details_list: Option<Vec<DomainPackageDetails>>,
    pub next_token: Option<String>,
}

/// Output of `UpdatePackage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePackageOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub package_details: Option<PackageDetails>,
}

// ---------------------------------------------------------------------------
// Reserved instances
// ---------------------------------------------------------------------------

/// Output of `DescribeReservedElasticsearchInstanceOfferings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedElasticsearchInstanceOfferingsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub next_token: Option<String>,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub reserved_elasticsearch_instance_offerings:
        Option<Vec<ReservedElasticsearchInstanceOffering>>,
}

/// Output of `DescribeReservedElasticsearchInstances`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedElasticsearchInstancesOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub next_token: Option<String>,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub reserved_elasticsearch_instances: Option<Vec<ReservedElasticsearchInstance>>,
}

/// Output of `PurchaseReservedElasticsearchInstanceOffering`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseReservedElasticsearchInstanceOfferingOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    pub reservation_name: Option<String>,
    pub reserved_elasticsearch_instance_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Output of `AddTags`. No payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTagsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
}

/// Output of `ListTags`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
    #[serde(default, deserialize_with = "dense_list::deserialize")]
    pub tag_list: Option<Vec<Tag>>,
}

/// Output of `RemoveTags`. No payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveTagsOutput {
    #[serde(skip)]
    pub metadata: ResponseMetadata,
}

impl_empty_output!(
    AddTagsOutput,
    DeleteElasticsearchServiceRoleOutput,
    RemoveTagsOutput,
);

impl_output!(
    AcceptInboundCrossClusterSearchConnectionOutput,
    AssociatePackageOutput,
    CancelElasticsearchServiceSoftwareUpdateOutput,
    CreateElasticsearchDomainOutput,
    CreateOutboundCrossClusterSearchConnectionOutput,
    CreatePackageOutput,
    DeleteElasticsearchDomainOutput,
    DeleteInboundCrossClusterSearchConnectionOutput,
    DeleteOutboundCrossClusterSearchConnectionOutput,
    DeletePackageOutput,
    DescribeDomainAutoTunesOutput,
    DescribeElasticsearchDomainOutput,
    DescribeElasticsearchDomainConfigOutput,
    DescribeElasticsearchDomainsOutput,
    DescribeElasticsearchInstanceTypeLimitsOutput,
    DescribeInboundCrossClusterSearchConnectionsOutput,
    DescribeOutboundCrossClusterSearchConnectionsOutput,
    DescribePackagesOutput,
    DescribeReservedElasticsearchInstanceOfferingsOutput,
    DescribeReservedElasticsearchInstancesOutput,
    DissociatePackageOutput,
    GetCompatibleElasticsearchVersionsOutput,
    GetPackageVersionHistoryOutput,
    GetUpgradeHistoryOutput,
    GetUpgradeStatusOutput,
    ListDomainNamesOutput,
    ListDomainsForPackageOutput,
    ListElasticsearchInstanceTypesOutput,
    ListElasticsearchVersionsOutput,
    ListPackagesForDomainOutput,
    ListTagsOutput,
    PurchaseReservedElasticsearchInstanceOfferingOutput,
    RejectInboundCrossClusterSearchConnectionOutput,
    StartElasticsearchServiceSoftwareUpdateOutput,
    UpdateElasticsearchDomainConfigOutput,
    UpdatePackageOutput,
    UpgradeElasticsearchDomainOutput,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutboundCrossClusterSearchConnectionStatusCode, PackageStatus};

    #[test]
    fn test_should_ignore_unknown_fields() {
        let out: ListTagsOutput = serde_json::from_str(
            r#"{"TagList": [{"Key": "a", "Value": "b"}, null], "Extra": 1}"#,
        )
        .unwrap();
        assert_eq!(out.tag_list, Some(vec![Tag::new("a", "b")]));
        assert_eq!(out.metadata, ResponseMetadata::default());
    }

    #[test]
    fn test_should_deserialize_outbound_connection() {
        let out: CreateOutboundCrossClusterSearchConnectionOutput = serde_json::from_str(
            r#"{
                "ConnectionAlias": "west",
                "ConnectionStatus": {"StatusCode": "PENDING_ACCEPTANCE"},
                "CrossClusterSearchConnectionId": "cid",
                "SourceDomainInfo": {"DomainName": "a", "OwnerId": "1", "Region": "us-east-1"}
            }"#,
        )
        .unwrap();
        assert_eq!(out.connection_alias.as_deref(), Some("west"));
        assert_eq!(
            out.connection_status.unwrap().status_code,
            Some(OutboundCrossClusterSearchConnectionStatusCode::PendingAcceptance)
        );
        assert!(out.destination_domain_info.is_none());
    }

    #[test]
    fn test_should_deserialize_package_history_with_acronym() {
        let out: GetPackageVersionHistoryOutput = serde_json::from_str(
            r#"{"PackageID": "F1", "PackageVersionHistoryList": [{"PackageVersion": "v2", "CreatedAt": 1.5}]}"#,
        )
        .unwrap();
        assert_eq!(out.package_id.as_deref(), Some("F1"));
        let history = out.package_version_history_list.unwrap();
        assert_eq!(history[0].package_version.as_deref(), Some("v2"));
        assert_eq!(history[0].created_at.unwrap().timestamp_millis(), 1500);
    }

    #[test]
    fn test_should_drop_null_limits_by_role() {
        let out: DescribeElasticsearchInstanceTypeLimitsOutput = serde_json::from_str(
            r#"{"LimitsByRole": {"data": {"InstanceLimits": {"InstanceCountLimits": {"MinimumInstanceCount": 1}}}, "master": null}}"#,
        )
        .unwrap();
        let limits = out.limits_by_role.unwrap();
        assert_eq!(limits.len(), 1);
        assert!(limits.contains_key("data"));
    }

    #[test]
    fn test_should_flag_payloadless_outputs() {
        assert!(!AddTagsOutput::HAS_PAYLOAD);
        assert!(!RemoveTagsOutput::HAS_PAYLOAD);
        assert!(DescribePackagesOutput::HAS_PAYLOAD);
        let details: PackageDetails = serde_json::from_str(r#"{"PackageStatus": "AVAILABLE"}"#).unwrap();
        assert_eq!(details.package_status, Some(PackageStatus::Available));
    }
}
