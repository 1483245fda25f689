//! The Elasticsearch Service client.

use std::sync::Arc;

use skyport_core::{InterceptorContext, InterceptorStack, ResolveEndpoint, SdkError};
use skyport_elasticsearch_http::{SerializeRequest, deserialize_response};
use skyport_elasticsearch_model::ElasticsearchError;
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
    PurchaseReservedElasticsearchInstanceOfferingOutput,
    RejectInboundCrossClusterSearchConnectionOutput, RemoveTagsOutput,
    StartElasticsearchServiceSoftwareUpdateOutput, UpdateElasticsearchDomainConfigOutput,
    UpdatePackageOutput, UpgradeElasticsearchDomainOutput,
};
use tracing::{debug, trace};

use crate::config::{ClientConfig, SERVICE_NAME};
use crate::interceptor::default_stack;

/// Result of a client call.
pub type ClientResult<T> = Result<T, SdkError<ElasticsearchError>>;

/// Client for the Elasticsearch Service.
///
/// Cheap to clone; clones share configuration, endpoint resolver and
/// interceptors.
#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: ClientConfig,
    endpoint: Arc<dyn ResolveEndpoint>,
    interceptors: InterceptorStack,
}

impl ElasticsearchClient {
    /// Build a client. The interceptor stack is fixed from here on.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let endpoint = config.endpoint_resolver();
        let interceptors = default_stack(&config.user_agent, &config.interceptors);
        debug!(
            region = %config.region,
            interceptors = ?interceptors.names(),
            "elasticsearch client created"
        );
        Self {
            inner: Arc::new(Inner {
                config,
                endpoint,
                interceptors,
            }),
        }
    }

    /// Build a client from [`ClientConfig::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The interceptors run around every call.
    #[must_use]
    pub fn interceptors(&self) -> &InterceptorStack {
        &self.inner.interceptors
    }

    /// Run one operation end to end.
    ///
    /// Nothing is sent if the input cannot be serialized.
    pub async fn send<I: SerializeRequest>(&self, input: I) -> ClientResult<I::Output> {
        let op = I::OPERATION;
        debug!(operation = %op, "dispatching operation");

        let mut request = input.serialize_request(self.inner.endpoint.as_ref())?;
        let ctx = InterceptorContext {
            service: SERVICE_NAME,
            operation: op.as_str(),
        };
        self.inner.interceptors.apply_request(&ctx, &mut request)?;
        trace!(operation = %op, uri = %request.uri(), headers = ?request.headers, "request ready");

        let response = self.inner.config.http_handler.handle(request).await?;
        self.inner
            .interceptors
            .apply_response(&ctx, response.status(), response.headers());

        deserialize_response(op, response).await
    }
}

macro_rules! operations {
    ($($(#[$doc:meta])* $method:ident($input:ty) -> $output:ty;)+) => {
        impl ElasticsearchClient {
            $(
                $(#[$doc])*
                pub async fn $method(&self, input: $input) -> ClientResult<$output> {
                    self.send(input).await
                }
            )+
        }
    };
}

operations! {
    // Domains
    /// Create a domain.
    create_elasticsearch_domain(CreateElasticsearchDomainInput) -> CreateElasticsearchDomainOutput;
    /// Delete a domain and all of its data.
    delete_elasticsearch_domain(DeleteElasticsearchDomainInput) -> DeleteElasticsearchDomainOutput;
    /// Delete the service-linked role used for VPC access.
    delete_elasticsearch_service_role(DeleteElasticsearchServiceRoleInput)
        -> DeleteElasticsearchServiceRoleOutput;
    /// Describe one domain.
    describe_elasticsearch_domain(DescribeElasticsearchDomainInput)
        -> DescribeElasticsearchDomainOutput;
    /// Describe the configuration of one domain.
    describe_elasticsearch_domain_config(DescribeElasticsearchDomainConfigInput)
        -> DescribeElasticsearchDomainConfigOutput;
    /// Describe up to five domains.
    describe_elasticsearch_domains(DescribeElasticsearchDomainsInput)
        -> DescribeElasticsearchDomainsOutput;
    /// List the domains owned by the account.
    list_domain_names(ListDomainNamesInput) -> ListDomainNamesOutput;
    /// Change the configuration of a domain.
    update_elasticsearch_domain_config(UpdateElasticsearchDomainConfigInput)
        -> UpdateElasticsearchDomainConfigOutput;
    /// Describe the Auto-Tune actions of a domain.
    describe_domain_auto_tunes(DescribeDomainAutoTunesInput) -> DescribeDomainAutoTunesOutput;

    // Versions and instance types
    /// Describe instance limits for an instance type and version.
    describe_elasticsearch_instance_type_limits(DescribeElasticsearchInstanceTypeLimitsInput)
        -> DescribeElasticsearchInstanceTypeLimitsOutput;
    /// List the versions a domain may upgrade to.
    get_compatible_elasticsearch_versions(GetCompatibleElasticsearchVersionsInput)
        -> GetCompatibleElasticsearchVersionsOutput;
    /// List instance types supported by a version.
    list_elasticsearch_instance_types(ListElasticsearchInstanceTypesInput)
        -> ListElasticsearchInstanceTypesOutput;
    /// List supported versions.
    list_elasticsearch_versions(ListElasticsearchVersionsInput)
        -> ListElasticsearchVersionsOutput;

    // Software updates and upgrades
    /// Cancel a scheduled service software update.
    cancel_elasticsearch_service_software_update(CancelElasticsearchServiceSoftwareUpdateInput)
        -> CancelElasticsearchServiceSoftwareUpdateOutput;
    /// Schedule a service software update.
    start_elasticsearch_service_software_update(StartElasticsearchServiceSoftwareUpdateInput)
        -> StartElasticsearchServiceSoftwareUpdateOutput;
    /// List past upgrades of a domain.
    get_upgrade_history(GetUpgradeHistoryInput) -> GetUpgradeHistoryOutput;
    /// Progress of the latest upgrade.
    get_upgrade_status(GetUpgradeStatusInput) -> GetUpgradeStatusOutput;
    /// Upgrade or check upgrade eligibility of a domain.
    upgrade_elasticsearch_domain(UpgradeElasticsearchDomainInput)
        -> UpgradeElasticsearchDomainOutput;

    // Cross-cluster search
    /// Accept an inbound connection request.
    accept_inbound_cross_cluster_search_connection(AcceptInboundCrossClusterSearchConnectionInput)
        -> AcceptInboundCrossClusterSearchConnectionOutput;
    /// Request a connection to a remote domain.
    create_outbound_cross_cluster_search_connection(
        CreateOutboundCrossClusterSearchConnectionInput
    ) -> CreateOutboundCrossClusterSearchConnectionOutput;
    /// Delete an inbound connection, as the destination owner.
    delete_inbound_cross_cluster_search_connection(DeleteInboundCrossClusterSearchConnectionInput)
        -> DeleteInboundCrossClusterSearchConnectionOutput;
    /// Delete an outbound connection, as the source owner.
    delete_outbound_cross_cluster_search_connection(
        DeleteOutboundCrossClusterSearchConnectionInput
    ) -> DeleteOutboundCrossClusterSearchConnectionOutput;
    /// List inbound connections, optionally filtered.
    describe_inbound_cross_cluster_search_connections(
        DescribeInboundCrossClusterSearchConnectionsInput
    ) -> DescribeInboundCrossClusterSearchConnectionsOutput;
    /// List outbound connections, optionally filtered.
    describe_outbound_cross_cluster_search_connections(
        DescribeOutboundCrossClusterSearchConnectionsInput
    ) -> DescribeOutboundCrossClusterSearchConnectionsOutput;
    /// Reject an inbound connection request.
    reject_inbound_cross_cluster_search_connection(RejectInboundCrossClusterSearchConnectionInput)
        -> RejectInboundCrossClusterSearchConnectionOutput;

    // Packages
    /// Attach a package to a domain.
    associate_package(AssociatePackageInput) -> AssociatePackageOutput;
    /// Register a package stored in S3.
    create_package(CreatePackageInput) -> CreatePackageOutput;
    /// Delete a package that no domain uses.
    delete_package(DeletePackageInput) -> DeletePackageOutput;
    /// Describe packages, optionally filtered.
    describe_packages(DescribePackagesInput) -> DescribePackagesOutput;
    /// Detach a package from a domain.
    dissociate_package(DissociatePackageInput) -> DissociatePackageOutput;
    /// List the versions of a package.
    get_package_version_history(GetPackageVersionHistoryInput) -> GetPackageVersionHistoryOutput;
    /// List the domains a package is attached to.
    list_domains_for_package(ListDomainsForPackageInput) -> ListDomainsForPackageOutput;
    /// List the packages attached to a domain.
    list_packages_for_domain(ListPackagesForDomainInput) -> ListPackagesForDomainOutput;
    /// Point a package at new contents.
    update_package(UpdatePackageInput) -> UpdatePackageOutput;

    // Reserved instances
    /// List reserved instance offerings.
    describe_reserved_elasticsearch_instance_offerings(
        DescribeReservedElasticsearchInstanceOfferingsInput
    ) -> DescribeReservedElasticsearchInstanceOfferingsOutput;
    /// List reserved instances bought by the account.
    describe_reserved_elasticsearch_instances(DescribeReservedElasticsearchInstancesInput)
        -> DescribeReservedElasticsearchInstancesOutput;
    /// Buy a reserved instance offering.
    purchase_reserved_elasticsearch_instance_offering(
        PurchaseReservedElasticsearchInstanceOfferingInput
    ) -> PurchaseReservedElasticsearchInstanceOfferingOutput;

    // Tags
    /// Attach tags to a domain.
    add_tags(AddTagsInput) -> AddTagsOutput;
    /// List the tags of a domain.
    list_tags(ListTagsInput) -> ListTagsOutput;
    /// Remove tags from a domain.
    remove_tags(RemoveTagsInput) -> RemoveTagsOutput;
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use skyport_core::{BuildError, HandlerFuture, HttpHandler, HttpRequest, SdkBody, TransportError};
    use skyport_core::{Endpoint, Region};

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        requests: Arc<Mutex<Vec<HttpRequest>>>,
        status: u16,
        body: &'static str,
    }

    impl Recorder {
        fn replying(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                ..Self::default()
            }
        }

        fn sent(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpHandler for Recorder {
        fn handle(&self, request: HttpRequest) -> HandlerFuture {
            self.requests.lock().unwrap().push(request);
            let response = http::Response::builder()
                .status(self.status)
                .header("x-amzn-requestid", "req-1")
                .body(SdkBody::from(self.body))
                .unwrap();
            Box::pin(async move { Ok(response) })
        }
    }

    fn client(handler: &Recorder) -> ElasticsearchClient {
        ElasticsearchClient::new(
            ClientConfig::builder()
                .region(Region::new("eu-west-1"))
                .build()
                .with_http_handler(handler.clone()),
        )
    }

    #[tokio::test]
    async fn test_should_send_list_domain_names() {
        let handler = Recorder::replying(200, r#"{"DomainNames":[{"DomainName":"logs"}]}"#);
        let out = client(&handler)
            .list_domain_names(ListDomainNamesInput::default())
            .await
            .unwrap();
        assert_eq!(
            out.domain_names.unwrap()[0].domain_name.as_deref(),
            Some("logs")
        );
        assert_eq!(out.metadata.request_id.as_deref(), Some("req-1"));

        let sent = handler.sent();
        assert_eq!(sent.len(), 1);
        let req = &sent[0];
        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.hostname, "es.eu-west-1.amazonaws.com");
        assert_eq!(req.path, "/2015-01-01/domain");
        assert_eq!(req.body_str(), Some(""));
        assert_eq!(req.header("content-length"), Some("0"));
        assert_eq!(req.header("host"), Some("es.eu-west-1.amazonaws.com"));
        assert!(req.header("amz-sdk-invocation-id").is_some());
    }

    #[tokio::test]
    async fn test_should_fail_fast_on_empty_label() {
        let handler = Recorder::replying(200, "{}");
        let err = client(&handler)
            .describe_elasticsearch_domain(DescribeElasticsearchDomainInput {
                domain_name: Some(String::new()),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Construction(BuildError::EmptyLabel("DomainName"))
        ));
        assert!(handler.sent().is_empty());
    }

    #[tokio::test]
    async fn test_should_report_missing_transport() {
        let client = ElasticsearchClient::new(ClientConfig::default());
        let err = client
            .list_domain_names(ListDomainNamesInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Dispatch(TransportError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_should_surface_service_error() {
        let handler = Recorder::replying(
            409,
            r#"{"__type":"ResourceAlreadyExistsException","message":"domain exists"}"#,
        );
        let err = client(&handler)
            .create_elasticsearch_domain(CreateElasticsearchDomainInput {
                domain_name: Some("logs".to_owned()),
                ..CreateElasticsearchDomainInput::default()
            })
            .await
            .unwrap_err();
        let service = err.into_service_error().unwrap();
        assert_eq!(service.code_str(), "ResourceAlreadyExistsException");
        assert!(service.is_modeled());
        assert_eq!(service.message, "domain exists");
        assert_eq!(service.metadata.http_status_code, 409);
    }

    #[tokio::test]
    async fn test_should_use_endpoint_override() {
        let handler = Recorder::replying(200, "");
        let client = ElasticsearchClient::new(
            ClientConfig::builder()
                .endpoint(Endpoint::new("localhost").with_protocol("http").with_port(4566))
                .build()
                .with_http_handler(handler.clone()),
        );
        client
            .add_tags(AddTagsInput {
                arn: Some("arn:aws:es:us-east-1:1:domain/logs".to_owned()),
                tag_list: None,
            })
            .await
            .unwrap();
        let sent = handler.sent();
        assert_eq!(sent[0].uri(), "http://localhost:4566/2015-01-01/tags");
        assert_eq!(sent[0].header("host"), Some("localhost:4566"));
    }
}
