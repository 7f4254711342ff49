//! Typed IDs for commonly used identifier kinds.
//!
//! These are the hand-maintained members of the ID fleet; per-service ID
//! types generated alongside API clients follow exactly the same pattern.
//! Each type binds a struct to its grammar via [`ResourceId`], with the
//! field-to-key mapping written out explicitly.

use std::fmt;

use crate::error::{GrammarError, ParseError};
use crate::parse::ParsedIdentifier;
use crate::registry::Registry;
use crate::resource_id::ResourceId;
use crate::segments::{Grammar, Segment};

/// Builds a registry holding every grammar defined in this module.
///
/// Intended to be called once at provider startup and shared read-only, e.g.
/// for best-effort re-casing of IDs found in state.
pub fn common_registry() -> Result<Registry, GrammarError> {
    Registry::new(vec![
        SubscriptionId::grammar(),
        ResourceGroupId::grammar(),
        ManagementGroupId::grammar(),
        OriginGroupId::grammar(),
        ScopedPrivateEndpointConnectionId::grammar(),
    ])
}

/// The ID of a subscription, e.g. `/subscriptions/1234`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    /// The subscription.
    pub subscription_id: String,
}

impl SubscriptionId {
    /// Builds the ID from its components.
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
        }
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscription (Subscription: {:?})", self.subscription_id)
    }
}

impl ResourceId for SubscriptionId {
    fn grammar() -> Grammar {
        Grammar::new(
            "SubscriptionId",
            vec![
                Segment::static_segment("subscriptions"),
                Segment::subscription_id("subscriptionId"),
            ],
        )
    }

    fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: parsed.required("subscriptionId")?,
        })
    }

    fn segment_values(&self) -> Vec<(&'static str, String)> {
        vec![("subscriptionId", self.subscription_id.clone())]
    }
}

/// The ID of a resource group, e.g.
/// `/subscriptions/1234/resourceGroups/my-group`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceGroupId {
    /// The subscription the resource group lives in.
    pub subscription_id: String,
    /// The resource group.
    pub resource_group_name: String,
}

impl ResourceGroupId {
    /// Builds the ID from its components.
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
        }
    }
}

impl fmt::Display for ResourceGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resource Group (Subscription: {:?}, Resource Group Name: {:?})",
            self.subscription_id, self.resource_group_name
        )
    }
}

impl ResourceId for ResourceGroupId {
    fn grammar() -> Grammar {
        Grammar::new(
            "ResourceGroupId",
            vec![
                Segment::static_segment("subscriptions"),
                Segment::subscription_id("subscriptionId"),
                Segment::static_segment("resourceGroups"),
                Segment::resource_group("resourceGroupName"),
            ],
        )
    }

    fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: parsed.required("subscriptionId")?,
            resource_group_name: parsed.required("resourceGroupName")?,
        })
    }

    fn segment_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("subscriptionId", self.subscription_id.clone()),
            ("resourceGroupName", self.resource_group_name.clone()),
        ]
    }
}

/// The ID of a management group, e.g.
/// `/providers/Microsoft.Management/managementGroups/group1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagementGroupId {
    /// The management group.
    pub group_id: String,
}

impl ManagementGroupId {
    /// Builds the ID from its components.
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
        }
    }
}

impl fmt::Display for ManagementGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Management Group (Group: {:?})", self.group_id)
    }
}

impl ResourceId for ManagementGroupId {
    fn grammar() -> Grammar {
        Grammar::new(
            "ManagementGroupId",
            vec![
                Segment::static_segment("providers"),
                Segment::resource_provider("resourceProvider", "Microsoft.Management"),
                Segment::static_segment("managementGroups"),
                Segment::user_specified("groupId", "group1"),
            ],
        )
    }

    fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError> {
        Ok(Self {
            group_id: parsed.required("groupId")?,
        })
    }

    fn segment_values(&self) -> Vec<(&'static str, String)> {
        vec![("groupId", self.group_id.clone())]
    }
}

/// The ID of a CDN origin group, e.g.
/// `/subscriptions/1234/resourceGroups/my-group/providers/Microsoft.CDN/profiles/profile1/originGroups/group1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OriginGroupId {
    /// The subscription the origin group lives in.
    pub subscription_id: String,
    /// The resource group the origin group lives in.
    pub resource_group_name: String,
    /// The CDN profile the origin group belongs to.
    pub profile_name: String,
    /// The origin group.
    pub origin_group_name: String,
}

impl OriginGroupId {
    /// Builds the ID from its components.
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        profile_name: impl Into<String>,
        origin_group_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            profile_name: profile_name.into(),
            origin_group_name: origin_group_name.into(),
        }
    }
}

impl fmt::Display for OriginGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Origin Group (Subscription: {:?}, Resource Group Name: {:?}, Profile Name: {:?}, Origin Group Name: {:?})",
            self.subscription_id,
            self.resource_group_name,
            self.profile_name,
            self.origin_group_name
        )
    }
}

impl ResourceId for OriginGroupId {
    fn grammar() -> Grammar {
        Grammar::new(
            "OriginGroupId",
            vec![
                Segment::static_segment("subscriptions"),
                Segment::subscription_id("subscriptionId"),
                Segment::static_segment("resourceGroups"),
                Segment::resource_group("resourceGroupName"),
                Segment::static_segment("providers"),
                Segment::resource_provider("resourceProvider", "Microsoft.CDN"),
                Segment::static_segment("profiles"),
                Segment::user_specified("profileName", "profileValue"),
                Segment::static_segment("originGroups"),
                Segment::user_specified("originGroupName", "originGroupValue"),
            ],
        )
    }

    fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError> {
        Ok(Self {
            subscription_id: parsed.required("subscriptionId")?,
            resource_group_name: parsed.required("resourceGroupName")?,
            profile_name: parsed.required("profileName")?,
            origin_group_name: parsed.required("originGroupName")?,
        })
    }

    fn segment_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("subscriptionId", self.subscription_id.clone()),
            ("resourceGroupName", self.resource_group_name.clone()),
            ("profileName", self.profile_name.clone()),
            ("originGroupName", self.origin_group_name.clone()),
        ]
    }
}

/// The ID of a private endpoint connection attached at an arbitrary scope,
/// e.g. `{scope}/privateEndpointConnections/connection1` where `{scope}` is a
/// subscription, resource group, management group, or another resource's full
/// ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopedPrivateEndpointConnectionId {
    /// The scope the connection is attached to, with its leading `/`.
    pub scope: String,
    /// The private endpoint connection.
    pub private_endpoint_connection_name: String,
}

impl ScopedPrivateEndpointConnectionId {
    /// Builds the ID from its components.
    pub fn new(
        scope: impl Into<String>,
        private_endpoint_connection_name: impl Into<String>,
    ) -> Self {
        Self {
            scope: scope.into(),
            private_endpoint_connection_name: private_endpoint_connection_name.into(),
        }
    }
}

impl fmt::Display for ScopedPrivateEndpointConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scoped Private Endpoint Connection (Scope: {:?}, Private Endpoint Connection Name: {:?})",
            self.scope, self.private_endpoint_connection_name
        )
    }
}

impl ResourceId for ScopedPrivateEndpointConnectionId {
    fn grammar() -> Grammar {
        Grammar::new(
            "ScopedPrivateEndpointConnectionId",
            vec![
                Segment::scope("scope"),
                Segment::static_segment("privateEndpointConnections"),
                Segment::user_specified("privateEndpointConnectionName", "connectionValue"),
            ],
        )
    }

    fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError> {
        Ok(Self {
            scope: parsed.required("scope")?,
            private_endpoint_connection_name: parsed
                .required("privateEndpointConnectionName")?,
        })
    }

    fn segment_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("scope", self.scope.clone()),
            (
                "privateEndpointConnectionName",
                self.private_endpoint_connection_name.clone(),
            ),
        ]
    }
}
