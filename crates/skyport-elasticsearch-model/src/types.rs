//! Shared Elasticsearch Service shapes.
//!
//! All structures use the REST+JSON wire format with `PascalCase` field names.
//! Every field is optional: absent values are omitted on the wire, `null`
//! entries inside lists and `null` map values are dropped when reading, and
//! timestamps travel as epoch seconds.
//!
//! String enums carry an `Unknown` variant so that values added by the service
//! later still parse.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skyport_core::shape::{dense_list, dense_map, epoch_seconds};
use skyport_core::string_enum;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

string_enum! {
    /// State of a domain configuration change.
    pub enum OptionState {
        /// The change needs the indices to be rebuilt.
        RequiresIndexDocuments => "RequiresIndexDocuments",
        /// The change is being applied.
        Processing => "Processing",
        /// The change is live.
        Active => "Active",
    }
}

string_enum! {
    /// Current Auto-Tune state of a domain.
    pub enum AutoTuneState {
        /// Enabled.
        Enabled => "ENABLED",
        /// Disabled.
        Disabled => "DISABLED",
        /// Being enabled.
        EnableInProgress => "ENABLE_IN_PROGRESS",
        /// Being disabled.
        DisableInProgress => "DISABLE_IN_PROGRESS",
        /// Disabled, rollback scheduled.
        DisabledAndRollbackScheduled => "DISABLED_AND_ROLLBACK_SCHEDULED",
        /// Disabled, rollback running.
        DisabledAndRollbackInProgress => "DISABLED_AND_ROLLBACK_IN_PROGRESS",
        /// Disabled, rollback done.
        DisabledAndRollbackComplete => "DISABLED_AND_ROLLBACK_COMPLETE",
        /// Disabled, rollback failed.
        DisabledAndRollbackError => "DISABLED_AND_ROLLBACK_ERROR",
        /// Auto-Tune failed.
        Error => "ERROR",
    }
}

string_enum! {
    /// Requested Auto-Tune state.
    pub enum AutoTuneDesiredState {
        /// Turn Auto-Tune on.
        Enabled => "ENABLED",
        /// Turn Auto-Tune off.
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// What happens to Auto-Tune changes when it is disabled.
    pub enum RollbackOnDisable {
        /// Keep the tuned settings.
        NoRollback => "NO_ROLLBACK",
        /// Revert to the defaults.
        DefaultRollback => "DEFAULT_ROLLBACK",
    }
}

string_enum! {
    /// Kind of Auto-Tune event.
    pub enum AutoTuneType {
        /// A scheduled tuning action.
        ScheduledAction => "SCHEDULED_ACTION",
    }
}

string_enum! {
    /// Kind of scheduled Auto-Tune action.
    pub enum ScheduledAutoTuneActionType {
        /// JVM heap size tuning.
        JvmHeapSizeTuning => "JVM_HEAP_SIZE_TUNING",
        /// JVM young generation tuning.
        JvmYoungGenTuning => "JVM_YOUNG_GEN_TUNING",
    }
}

string_enum! {
    /// Severity of a scheduled Auto-Tune action.
    pub enum ScheduledAutoTuneSeverityType {
        /// Low.
        Low => "LOW",
        /// Medium.
        Medium => "MEDIUM",
        /// High.
        High => "HIGH",
    }
}

string_enum! {
    /// Unit of a maintenance window duration.
    pub enum TimeUnit {
        /// Hours.
        Hours => "HOURS",
    }
}

string_enum! {
    /// TLS policy of the domain endpoint.
    pub enum TlsSecurityPolicy {
        /// TLS 1.0 and later.
        PolicyMinTls10201907 => "Policy-Min-TLS-1-0-2019-07",
        /// TLS 1.2 only.
        PolicyMinTls12201907 => "Policy-Min-TLS-1-2-2019-07",
    }
}

string_enum! {
    /// EBS volume type.
    pub enum VolumeType {
        /// Magnetic.
        Standard => "standard",
        /// General purpose SSD.
        Gp2 => "gp2",
        /// Provisioned IOPS SSD.
        Io1 => "io1",
    }
}

string_enum! {
    /// Log stream published to CloudWatch Logs.
    pub enum LogType {
        /// Index slow logs.
        IndexSlowLogs => "INDEX_SLOW_LOGS",
        /// Search slow logs.
        SearchSlowLogs => "SEARCH_SLOW_LOGS",
        /// Application error logs.
        EsApplicationLogs => "ES_APPLICATION_LOGS",
        /// Audit logs.
        AuditLogs => "AUDIT_LOGS",
    }
}

string_enum! {
    /// Status of a service software update.
    pub enum DeploymentStatus {
        /// Update is queued.
        PendingUpdate => "PENDING_UPDATE",
        /// Update is running.
        InProgress => "IN_PROGRESS",
        /// Update finished.
        Completed => "COMPLETED",
        /// The domain cannot be updated.
        NotEligible => "NOT_ELIGIBLE",
        /// An update is available.
        Eligible => "ELIGIBLE",
    }
}

string_enum! {
    /// Type of a custom package.
    pub enum PackageType {
        /// A text dictionary.
        TxtDictionary => "TXT-DICTIONARY",
    }
}

string_enum! {
    /// Lifecycle state of a package.
    pub enum PackageStatus {
        /// Copying from S3.
        Copying => "COPYING",
        /// Copying failed.
        CopyFailed => "COPY_FAILED",
        /// Being validated.
        Validating => "VALIDATING",
        /// Validation failed.
        ValidationFailed => "VALIDATION_FAILED",
        /// Ready to use.
        Available => "AVAILABLE",
        /// Being deleted.
        Deleting => "DELETING",
        /// Deleted.
        Deleted => "DELETED",
        /// Deletion failed.
        DeleteFailed => "DELETE_FAILED",
    }
}

string_enum! {
    /// State of a package association with a domain.
    pub enum DomainPackageStatus {
        /// Being associated.
        Associating => "ASSOCIATING",
        /// Association failed.
        AssociationFailed => "ASSOCIATION_FAILED",
        /// Associated.
        Active => "ACTIVE",
        /// Being dissociated.
        Dissociating => "DISSOCIATING",
        /// Dissociation failed.
        DissociationFailed => "DISSOCIATION_FAILED",
    }
}

string_enum! {
    /// Field a package filter applies to.
    pub enum DescribePackagesFilterName {
        /// Package id.
        PackageId => "PackageID",
        /// Package name.
        PackageName => "PackageName",
        /// Package status.
        PackageStatus => "PackageStatus",
    }
}

string_enum! {
    /// State of an inbound cross-cluster search connection.
    pub enum InboundCrossClusterSearchConnectionStatusCode {
        /// Waiting for the destination owner.
        PendingAcceptance => "PENDING_ACCEPTANCE",
        /// Accepted.
        Approved => "APPROVED",
        /// Being rejected.
        Rejecting => "REJECTING",
        /// Rejected.
        Rejected => "REJECTED",
        /// Being deleted.
        Deleting => "DELETING",
        /// Deleted.
        Deleted => "DELETED",
    }
}

string_enum! {
    /// State of an outbound cross-cluster search connection.
    pub enum OutboundCrossClusterSearchConnectionStatusCode {
        /// Waiting for the destination owner.
        PendingAcceptance => "PENDING_ACCEPTANCE",
        /// Being validated.
        Validating => "VALIDATING",
        /// Validation failed.
        ValidationFailed => "VALIDATION_FAILED",
        /// Being set up.
        Provisioning => "PROVISIONING",
        /// Usable.
        Active => "ACTIVE",
        /// Rejected by the destination owner.
        Rejected => "REJECTED",
        /// Being deleted.
        Deleting => "DELETING",
        /// Deleted.
        Deleted => "DELETED",
    }
}

string_enum! {
    /// How a reserved instance is paid for.
    pub enum ReservedElasticsearchInstancePaymentOption {
        /// Everything up front.
        AllUpfront => "ALL_UPFRONT",
        /// Part up front, the rest hourly.
        PartialUpfront => "PARTIAL_UPFRONT",
        /// Hourly only.
        NoUpfront => "NO_UPFRONT",
    }
}

string_enum! {
    /// Stage of a domain version upgrade.
    pub enum UpgradeStep {
        /// Eligibility checks.
        PreUpgradeCheck => "PRE_UPGRADE_CHECK",
        /// Snapshot before upgrading.
        Snapshot => "SNAPSHOT",
        /// The upgrade itself.
        Upgrade => "UPGRADE",
    }
}

string_enum! {
    /// Outcome of an upgrade step.
    pub enum UpgradeStatus {
        /// Running.
        InProgress => "IN_PROGRESS",
        /// Done.
        Succeeded => "SUCCEEDED",
        /// Done, with issues.
        SucceededWithIssues => "SUCCEEDED_WITH_ISSUES",
        /// Failed.
        Failed => "FAILED",
    }
}

// ---------------------------------------------------------------------------
// Status envelope
// ---------------------------------------------------------------------------

/// Lifecycle of one configuration option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionStatus {
    /// When the option was first set.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Whether the option is being removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_deletion: Option<bool>,
    /// Current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OptionState>,
    /// When the option last changed.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
    /// Version of the latest change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_version: Option<i32>,
}

// ---------------------------------------------------------------------------
// Access and security
// ---------------------------------------------------------------------------

/// The domain access policy document with its status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessPoliciesStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Advanced cluster options with their status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedOptionsStatus {
    #[serde(
        default,
        deserialize_with = "dense_map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Credentials of the master user of fine-grained access control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MasterUserOptions {
    /// IAM ARN of the master user.
    #[serde(rename = "MasterUserARN", skip_serializing_if = "Option::is_none")]
    pub master_user_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
}

/// SAML identity provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SamlIdp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// The IdP metadata XML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_content: Option<String>,
}

/// SAML settings as sent when creating or updating a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SamlOptionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp: Option<SamlIdp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_backend_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_key: Option<String>,
}

/// SAML settings as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SamlOptionsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp: Option<SamlIdp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_key: Option<String>,
}

/// Fine-grained access control settings as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedSecurityOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_user_database_enabled: Option<bool>,
    #[serde(rename = "SAMLOptions", skip_serializing_if = "Option::is_none")]
    pub saml_options: Option<SamlOptionsOutput>,
}

/// Fine-grained access control settings as sent by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedSecurityOptionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_user_database_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_options: Option<MasterUserOptions>,
    #[serde(rename = "SAMLOptions", skip_serializing_if = "Option::is_none")]
    pub saml_options: Option<SamlOptionsInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedSecurityOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AdvancedSecurityOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Amazon Cognito authentication for Kibana.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CognitoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CognitoOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<CognitoOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// HTTPS and custom endpoint settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainEndpointOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoint_certificate_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoint_enabled: Option<bool>,
    /// Reject plain HTTP traffic.
    #[serde(rename = "EnforceHTTPS", skip_serializing_if = "Option::is_none")]
    pub enforce_https: Option<bool>,
    #[serde(rename = "TLSSecurityPolicy", skip_serializing_if = "Option::is_none")]
    pub tls_security_policy: Option<TlsSecurityPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainEndpointOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<DomainEndpointOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Encryption of data at rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptionAtRestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptionAtRestOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EncryptionAtRestOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Encryption between nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeToNodeEncryptionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeToNodeEncryptionOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<NodeToNodeEncryptionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

// ---------------------------------------------------------------------------
// Auto-Tune
// ---------------------------------------------------------------------------

/// Length of a maintenance window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Duration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<TimeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

/// A recurring Auto-Tune maintenance window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTuneMaintenanceSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression_for_recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    /// First occurrence of the window.
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
}

/// Auto-Tune settings used when updating a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTuneOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_state: Option<AutoTuneDesiredState>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub maintenance_schedules: Option<Vec<AutoTuneMaintenanceSchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollback_on_disable: Option<RollbackOnDisable>,
}

/// Auto-Tune settings used when creating a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTuneOptionsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_state: Option<AutoTuneDesiredState>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub maintenance_schedules: Option<Vec<AutoTuneMaintenanceSchedule>>,
}

/// Auto-Tune state reported in the domain status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTuneOptionsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AutoTuneState>,
}

/// Auto-Tune configuration status. Same fields as [`OptionStatus`] plus an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTuneStatus {
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_deletion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AutoTuneState>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_version: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTuneOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AutoTuneOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AutoTuneStatus>,
}

/// A planned Auto-Tune action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledAutoTuneDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ScheduledAutoTuneActionType>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<ScheduledAutoTuneSeverityType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTuneDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_auto_tune_details: Option<ScheduledAutoTuneDetails>,
}

/// One Auto-Tune event of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTune {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune_details: Option<AutoTuneDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune_type: Option<AutoTuneType>,
}

// ---------------------------------------------------------------------------
// Cluster and storage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneAwarenessConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_count: Option<i32>,
}

/// Node layout of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticsearchClusterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i32>,
    /// Data node instance type, e.g. `m5.large.elasticsearch`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_awareness_config: Option<ZoneAwarenessConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_awareness_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticsearchClusterConfigStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ElasticsearchClusterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// EBS storage attached to data nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EbsOptions {
    #[serde(rename = "EBSEnabled", skip_serializing_if = "Option::is_none")]
    pub ebs_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    /// Volume size in GiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EbsOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EbsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticsearchVersionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Destination of one log stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogPublishingOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_watch_logs_log_group_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogPublishingOptionsStatus {
    #[serde(
        default,
        deserialize_with = "dense_map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<BTreeMap<LogType, LogPublishingOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Daily automated snapshot settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnapshotOptions {
    /// UTC hour at which the daily snapshot starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automated_snapshot_start_hour: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnapshotOptionsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SnapshotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// VPC placement requested by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcOptions {
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub subnet_ids: Option<Vec<String>>,
}

/// VPC placement as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcDerivedInfo {
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub availability_zones: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(rename = "VPCId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcDerivedInfoStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<VpcDerivedInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OptionStatus>,
}

/// Service software version and pending updates of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSoftwareOptions {
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub automated_update_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_deployment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_status: Option<DeploymentStatus>,
}

// ---------------------------------------------------------------------------
// Domain description
// ---------------------------------------------------------------------------

/// Full status of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticsearchDomainStatus {
    #[serde(rename = "ARN", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<String>,
    #[serde(
        default,
        deserialize_with = "dense_map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub advanced_options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<AdvancedSecurityOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune_options: Option<AutoTuneOptionsOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<CognitoOptions>,
    /// `false` while the domain is still being created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<bool>,
    /// `true` once deletion has started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<DomainEndpointOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "EBSOptions", skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<EbsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_cluster_config: Option<ElasticsearchClusterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_options: Option<EncryptionAtRestOptions>,
    /// Public endpoint for index and search requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// VPC endpoints, keyed by `vpc`.
    #[serde(
        default,
        deserialize_with = "dense_map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoints: Option<BTreeMap<String, String>>,
    #[serde(
        default,
        deserialize_with = "dense_map::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_publishing_options: Option<BTreeMap<LogType, LogPublishingOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_to_node_encryption_options: Option<NodeToNodeEncryptionOptions>,
    /// Whether a configuration change is in flight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_software_options: Option<ServiceSoftwareOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_options: Option<SnapshotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_processing: Option<bool>,
    #[serde(rename = "VPCOptions", skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<VpcDerivedInfo>,
}

/// Configuration of a domain, each option with its own status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElasticsearchDomainConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<AccessPoliciesStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<AdvancedOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<AdvancedSecurityOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune_options: Option<AutoTuneOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<CognitoOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<DomainEndpointOptionsStatus>,
    #[serde(rename = "EBSOptions", skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<EbsOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_cluster_config: Option<ElasticsearchClusterConfigStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_version: Option<ElasticsearchVersionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_options: Option<EncryptionAtRestOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_publishing_options: Option<LogPublishingOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_to_node_encryption_options: Option<NodeToNodeEncryptionOptionsStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_options: Option<SnapshotOptionsStatus>,
    #[serde(rename = "VPCOptions", skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<VpcDerivedInfoStatus>,
}

/// Name of a domain owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

/// A domain identified across accounts and regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// A resource tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Source and target versions of an in-place upgrade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompatibleVersionsMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_versions: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Cross-cluster search
// ---------------------------------------------------------------------------

/// A name and its values, used to filter connection searches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundCrossClusterSearchConnectionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<InboundCrossClusterSearchConnectionStatusCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundCrossClusterSearchConnectionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<OutboundCrossClusterSearchConnectionStatusCode>,
}

/// A connection request as seen by the destination domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InboundCrossClusterSearchConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<InboundCrossClusterSearchConnectionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_cluster_search_connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_domain_info: Option<DomainInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_domain_info: Option<DomainInformation>,
}

/// A connection request as seen by the source domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundCrossClusterSearchConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<OutboundCrossClusterSearchConnectionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_cluster_search_connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_domain_info: Option<DomainInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_domain_info: Option<DomainInformation>,
}

// ---------------------------------------------------------------------------
// Packages
// ---------------------------------------------------------------------------

/// S3 location of a package file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Filter for `DescribePackages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePackagesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<DescribePackagesFilterName>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Vec<String>>,
}

/// A custom package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_package_version: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ErrorDetails>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_description: Option<String>,
    #[serde(rename = "PackageID", skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_status: Option<PackageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
}

/// One version of a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageVersionHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_version: Option<String>,
}

/// A package associated with a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainPackageDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_package_status: Option<DomainPackageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ErrorDetails>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(rename = "PackageID", skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<PackageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_version: Option<String>,
    /// Path of the package on the cluster nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_path: Option<String>,
}

// ---------------------------------------------------------------------------
// Instance limits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdditionalLimit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceCountLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_instance_count: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count_limits: Option<InstanceCountLimits>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageTypeLimit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_sub_type_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_type_limits: Option<Vec<StorageTypeLimit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type_name: Option<String>,
}

/// Limits of one node role for an instance type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Limits {
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_limits: Option<Vec<AdditionalLimit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_limits: Option<InstanceLimits>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub storage_types: Option<Vec<StorageType>>,
}

// ---------------------------------------------------------------------------
// Reserved instances
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecurringCharge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_charge_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_charge_frequency: Option<String>,
}

/// A reserved instance offering available for purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedElasticsearchInstanceOffering {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Term length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<ReservedElasticsearchInstancePaymentOption>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurring_charges: Option<Vec<RecurringCharge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_elasticsearch_instance_offering_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_price: Option<f64>,
}

/// A purchased reservation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedElasticsearchInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_instance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch_instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_option: Option<ReservedElasticsearchInstancePaymentOption>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub recurring_charges: Option<Vec<RecurringCharge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_elasticsearch_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_elasticsearch_instance_offering_id: Option<String>,
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// Upgrades
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeStepItem {
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub issues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_step: Option<UpgradeStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_step_status: Option<UpgradeStatus>,
}

/// One past or running upgrade of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeHistory {
    #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "dense_list::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub steps_list: Option<Vec<UpgradeStepItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_status: Option<UpgradeStatus>,
}
