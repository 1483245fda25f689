//! Elasticsearch Service operation table.
//!
//! Each operation has a fixed method, URI template and closed set of errors.

use std::fmt;

use http::Method;

use crate::error::ElasticsearchErrorCode::{
    self, AccessDeniedException, BaseException, ConflictException, DisabledOperationException,
    InternalException, InvalidPaginationTokenException, InvalidTypeException,
    LimitExceededException, ResourceAlreadyExistsException, ResourceNotFoundException,
    ValidationException,
};

macro_rules! operations {
    (
        $(
            $(#[$doc:meta])*
            $name:ident => $method:ident $uri:literal [$($err:ident),* $(,)?]
        ),+ $(,)?
    ) => {
        /// All Elasticsearch Service operations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ElasticsearchOperation {
            $(
                $(#[$doc])*
                $name,
            )+
        }

        impl ElasticsearchOperation {
            /// Every operation.
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// Returns the operation name.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                }
            }

            /// HTTP method.
            #[must_use]
            pub fn method(&self) -> Method {
                match self {
                    $(Self::$name => Method::$method,)+
                }
            }

            /// URI template with `{Label}` placeholders.
            #[must_use]
            pub fn uri(&self) -> &'static str {
                match self {
                    $(Self::$name => $uri,)+
                }
            }

            /// Error codes the operation may return.
            #[must_use]
            pub fn errors(&self) -> &'static [ElasticsearchErrorCode] {
                match self {
                    $(Self::$name => {
                        const ERRORS: &[ElasticsearchErrorCode] = &[$($err),*];
                        ERRORS
                    })+
                }
            }
        }
    };
}

operations! {
    /// Accept a cross-cluster search connection request.
    AcceptInboundCrossClusterSearchConnection => PUT
        "/2015-01-01/es/ccs/inboundConnection/{CrossClusterSearchConnectionId}/accept"
        [DisabledOperationException, LimitExceededException, ResourceNotFoundException],
    /// Tag a domain.
    AddTags => POST "/2015-01-01/tags"
        [BaseException, InternalException, LimitExceededException, ValidationException],
    /// Associate a package with a domain.
    AssociatePackage => POST "/2015-01-01/packages/associate/{PackageID}/{DomainName}"
        [AccessDeniedException, BaseException, ConflictException, InternalException,
         ResourceNotFoundException, ValidationException],
    /// Cancel a scheduled service software update.
    CancelElasticsearchServiceSoftwareUpdate => POST "/2015-01-01/es/serviceSoftwareUpdate/cancel"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// Create a domain.
    CreateElasticsearchDomain => POST "/2015-01-01/es/domain"
        [BaseException, DisabledOperationException, InternalException, InvalidTypeException,
         LimitExceededException, ResourceAlreadyExistsException, ValidationException],
    /// Request a cross-cluster search connection.
    CreateOutboundCrossClusterSearchConnection => POST "/2015-01-01/es/ccs/outboundConnection"
        [DisabledOperationException, InternalException, LimitExceededException,
         ResourceAlreadyExistsException],
    /// Create a package.
    CreatePackage => POST "/2015-01-01/packages"
        [AccessDeniedException, BaseException, InternalException, InvalidTypeException,
         LimitExceededException, ResourceAlreadyExistsException, ValidationException],
    /// Delete a domain.
    DeleteElasticsearchDomain => DELETE "/2015-01-01/es/domain/{DomainName}"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// Delete the service-linked role.
    DeleteElasticsearchServiceRole => DELETE "/2015-01-01/es/role"
        [BaseException, InternalException, ValidationException],
    /// Delete an inbound connection.
    DeleteInboundCrossClusterSearchConnection => DELETE
        "/2015-01-01/es/ccs/inboundConnection/{CrossClusterSearchConnectionId}"
        [DisabledOperationException, ResourceNotFoundException],
    /// Delete an outbound connection.
    DeleteOutboundCrossClusterSearchConnection => DELETE
        "/2015-01-01/es/ccs/outboundConnection/{CrossClusterSearchConnectionId}"
        [DisabledOperationException, ResourceNotFoundException],
    /// Delete a package.
    DeletePackage => DELETE "/2015-01-01/packages/{PackageID}"
        [AccessDeniedException, BaseException, ConflictException, InternalException,
         ResourceNotFoundException, ValidationException],
    /// List Auto-Tune actions of a domain.
    DescribeDomainAutoTunes => GET "/2015-01-01/es/domain/{DomainName}/autoTunes"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// Describe a domain.
    DescribeElasticsearchDomain => GET "/2015-01-01/es/domain/{DomainName}"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// Describe a domain's configuration.
    DescribeElasticsearchDomainConfig => GET "/2015-01-01/es/domain/{DomainName}/config"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// Describe several domains.
    DescribeElasticsearchDomains => POST "/2015-01-01/es/domain-info"
        [BaseException, InternalException, ValidationException],
    /// Describe instance type limits.
    DescribeElasticsearchInstanceTypeLimits => GET
        "/2015-01-01/es/instanceTypeLimits/{ElasticsearchVersion}/{InstanceType}"
        [BaseException, InternalException, InvalidTypeException, LimitExceededException,
         ResourceNotFoundException, ValidationException],
    /// Search inbound connections.
    DescribeInboundCrossClusterSearchConnections => POST
        "/2015-01-01/es/ccs/inboundConnection/search"
        [DisabledOperationException, InvalidPaginationTokenException],
    /// Search outbound connections.
    DescribeOutboundCrossClusterSearchConnections => POST
        "/2015-01-01/es/ccs/outboundConnection/search"
        [DisabledOperationException, InvalidPaginationTokenException],
    /// Search packages.
    DescribePackages => POST "/2015-01-01/packages/describe"
        [AccessDeniedException, BaseException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// List reserved instance offerings.
    DescribeReservedElasticsearchInstanceOfferings => GET "/2015-01-01/es/reservedInstanceOfferings"
        [DisabledOperationException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// List purchased reservations.
    DescribeReservedElasticsearchInstances => GET "/2015-01-01/es/reservedInstances"
        [DisabledOperationException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// Dissociate a package from a domain.
    DissociatePackage => POST "/2015-01-01/packages/dissociate/{PackageID}/{DomainName}"
        [AccessDeniedException, BaseException, ConflictException, InternalException,
         ResourceNotFoundException, ValidationException],
    /// List upgrade paths.
    GetCompatibleElasticsearchVersions => GET "/2015-01-01/es/compatibleVersions"
        [BaseException, DisabledOperationException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// List versions of a package.
    GetPackageVersionHistory => GET "/2015-01-01/packages/{PackageID}/history"
        [AccessDeniedException, BaseException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// List past upgrades of a domain.
    GetUpgradeHistory => GET "/2015-01-01/es/upgradeDomain/{DomainName}/history"
        [BaseException, DisabledOperationException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// Status of the latest upgrade.
    GetUpgradeStatus => GET "/2015-01-01/es/upgradeDomain/{DomainName}/status"
        [BaseException, DisabledOperationException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// List the caller's domains.
    ListDomainNames => GET "/2015-01-01/domain"
        [BaseException, ValidationException],
    /// List domains a package is associated with.
    ListDomainsForPackage => GET "/2015-01-01/packages/{PackageID}/domains"
        [AccessDeniedException, BaseException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// List instance types for a version.
    ListElasticsearchInstanceTypes => GET "/2015-01-01/es/instanceTypes/{ElasticsearchVersion}"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// List supported versions.
    ListElasticsearchVersions => GET "/2015-01-01/es/versions"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// List packages associated with a domain.
    ListPackagesForDomain => GET "/2015-01-01/domain/{DomainName}/packages"
        [AccessDeniedException, BaseException, InternalException, ResourceNotFoundException,
         ValidationException],
    /// List tags of a domain.
    ListTags => GET "/2015-01-01/tags"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// Buy a reserved instance offering.
    PurchaseReservedElasticsearchInstanceOffering => POST
        "/2015-01-01/es/purchaseReservedInstanceOffering"
        [DisabledOperationException, InternalException, LimitExceededException,
         ResourceAlreadyExistsException, ResourceNotFoundException, ValidationException],
    /// Reject a cross-cluster search connection request.
    RejectInboundCrossClusterSearchConnection => PUT
        "/2015-01-01/es/ccs/inboundConnection/{CrossClusterSearchConnectionId}/reject"
        [DisabledOperationException, ResourceNotFoundException],
    /// Remove tags from a domain.
    RemoveTags => POST "/2015-01-01/tags-removal"
        [BaseException, InternalException, ValidationException],
    /// Schedule a service software update.
    StartElasticsearchServiceSoftwareUpdate => POST "/2015-01-01/es/serviceSoftwareUpdate/start"
        [BaseException, InternalException, ResourceNotFoundException, ValidationException],
    /// Change a domain's configuration.
    UpdateElasticsearchDomainConfig => POST "/2015-01-01/es/domain/{DomainName}/config"
        [BaseException, InternalException, InvalidTypeException, LimitExceededException,
         ResourceNotFoundException, ValidationException],
    /// Upload a new package version.
    UpdatePackage => POST "/2015-01-01/packages/update"
        [AccessDeniedException, BaseException, InternalException, LimitExceededException,
         ResourceNotFoundException, ValidationException],
    /// Upgrade a domain to a newer version.
    UpgradeElasticsearchDomain => POST "/2015-01-01/es/upgradeDomain"
        [BaseException, DisabledOperationException, InternalException,
         ResourceAlreadyExistsException, ResourceNotFoundException, ValidationException],
}

impl ElasticsearchOperation {
    /// Find the declared error matching `code`, in short or namespaced form.
    #[must_use]
    pub fn declared_error(&self, code: &str) -> Option<ElasticsearchErrorCode> {
        self.errors().iter().find(|c| c.matches(code)).cloned()
    }
}

impl fmt::Display for ElasticsearchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
