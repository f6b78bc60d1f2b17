//! The four root scopes: tenant, subscription, resource group and
//! management group.
//!
//! A root scope has no parent. Each may carry scope-level children, e.g.
//! `/subscriptions/sub1/tagNames/name1/tagValues/value1`.

use crate::error::ArmIdError;
use crate::id::{ResourceId, ResourceKind};
use crate::keywords::{
    MANAGEMENT_GROUPS, MANAGEMENT_NAMESPACE, PROVIDERS, RESOURCES_NAMESPACE, RESOURCE_GROUPS,
    SUBSCRIPTIONS,
};
use crate::macros::{id_strings, scope_children};
use crate::segment::{
    children_scope_equal, eq_fold, push_child_types, push_child_types_mut, push_children,
    type_path, ScopeChild, Segments,
};

// =============================================================================
// Tenant
// =============================================================================

/// The tenant, `/`. The universal root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantId {
    pub(crate) children: Vec<ScopeChild>,
}

impl TenantId {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty for the bare tenant, otherwise the child types joined by `/`.
    pub fn type_string(&self) -> String {
        type_path("", &self.children)
    }

    /// Same shape, ignoring names.
    pub fn scope_equal(&self, other: &Self) -> bool {
        children_scope_equal(&self.children, &other.children)
    }
}

impl Segments for TenantId {
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>) {
        push_children(&self.children, out);
    }

    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        push_child_types(&self.children, out);
    }

    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        push_child_types_mut(&mut self.children, out);
    }
}

scope_children!(TenantId);
id_strings!(TenantId);

// =============================================================================
// Subscription
// =============================================================================

/// `/subscriptions/{id}`.
#[derive(Debug, Clone)]
pub struct SubscriptionId {
    id: String,
    pub(crate) subscriptions_segment: String,
    pub(crate) children: Vec<ScopeChild>,
}

impl SubscriptionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_segments(SUBSCRIPTIONS, id)
    }

    pub(crate) fn from_segments(
        subscriptions_segment: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subscriptions_segment: subscriptions_segment.into(),
            children: Vec::new(),
        }
    }

    /// The subscription identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn type_string(&self) -> String {
        type_path(&format!("{RESOURCES_NAMESPACE}/{SUBSCRIPTIONS}"), &self.children)
    }

    /// Same shape, ignoring the subscription id and child names.
    pub fn scope_equal(&self, other: &Self) -> bool {
        children_scope_equal(&self.children, &other.children)
    }
}

impl PartialEq for SubscriptionId {
    fn eq(&self, other: &Self) -> bool {
        eq_fold(&self.id, &other.id) && self.children == other.children
    }
}

impl Eq for SubscriptionId {}

impl Segments for SubscriptionId {
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.subscriptions_segment);
        out.push(&self.id);
        push_children(&self.children, out);
    }

    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.subscriptions_segment);
        push_child_types(&self.children, out);
    }

    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        out.push(&mut self.subscriptions_segment);
        push_child_types_mut(&mut self.children, out);
    }
}

scope_children!(SubscriptionId);
id_strings!(SubscriptionId);

// =============================================================================
// Resource Group
// =============================================================================

/// `/subscriptions/{subscription_id}/resourceGroups/{name}`.
#[derive(Debug, Clone)]
pub struct ResourceGroup {
    subscription_id: String,
    name: String,
    pub(crate) subscriptions_segment: String,
    pub(crate) resource_groups_segment: String,
    pub(crate) children: Vec<ScopeChild>,
}

impl ResourceGroup {
    #[must_use]
    pub fn new(subscription_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::from_segments(SUBSCRIPTIONS, subscription_id, RESOURCE_GROUPS, name)
    }

    pub(crate) fn from_segments(
        subscriptions_segment: impl Into<String>,
        subscription_id: impl Into<String>,
        resource_groups_segment: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            name: name.into(),
            subscriptions_segment: subscriptions_segment.into(),
            resource_groups_segment: resource_groups_segment.into(),
            children: Vec::new(),
        }
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn set_subscription_id(&mut self, subscription_id: impl Into<String>) {
        self.subscription_id = subscription_id.into();
    }

    /// The resource group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The subscription this resource group belongs to.
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::from_segments(self.subscriptions_segment.clone(), self.subscription_id.clone())
    }

    pub fn type_string(&self) -> String {
        type_path(
            &format!("{RESOURCES_NAMESPACE}/{SUBSCRIPTIONS}/{RESOURCE_GROUPS}"),
            &self.children,
        )
    }

    pub fn scope_equal(&self, other: &Self) -> bool {
        children_scope_equal(&self.children, &other.children)
    }
}

impl PartialEq for ResourceGroup {
    fn eq(&self, other: &Self) -> bool {
        eq_fold(&self.subscription_id, &other.subscription_id)
            && eq_fold(&self.name, &other.name)
            && self.children == other.children
    }
}

impl Eq for ResourceGroup {}

impl Segments for ResourceGroup {
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.subscriptions_segment);
        out.push(&self.subscription_id);
        out.push(&self.resource_groups_segment);
        out.push(&self.name);
        push_children(&self.children, out);
    }

    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.subscriptions_segment);
        out.push(&self.resource_groups_segment);
        push_child_types(&self.children, out);
    }

    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        out.push(&mut self.subscriptions_segment);
        out.push(&mut self.resource_groups_segment);
        push_child_types_mut(&mut self.children, out);
    }
}

scope_children!(ResourceGroup);
id_strings!(ResourceGroup);

// =============================================================================
// Management Group
// =============================================================================

/// `/providers/Microsoft.Management/managementGroups/{name}`.
#[derive(Debug, Clone)]
pub struct ManagementGroup {
    name: String,
    pub(crate) providers_segment: String,
    pub(crate) namespace_segment: String,
    pub(crate) management_groups_segment: String,
    pub(crate) children: Vec<ScopeChild>,
}

impl ManagementGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_segments(PROVIDERS, MANAGEMENT_NAMESPACE, MANAGEMENT_GROUPS, name)
    }

    pub(crate) fn from_segments(
        providers_segment: impl Into<String>,
        namespace_segment: impl Into<String>,
        management_groups_segment: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            providers_segment: providers_segment.into(),
            namespace_segment: namespace_segment.into(),
            management_groups_segment: management_groups_segment.into(),
            children: Vec::new(),
        }
    }

    /// The management group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn type_string(&self) -> String {
        type_path(
            &format!("{MANAGEMENT_NAMESPACE}/{MANAGEMENT_GROUPS}"),
            &self.children,
        )
    }

    pub fn scope_equal(&self, other: &Self) -> bool {
        children_scope_equal(&self.children, &other.children)
    }
}

impl PartialEq for ManagementGroup {
    fn eq(&self, other: &Self) -> bool {
        eq_fold(&self.name, &other.name) && self.children == other.children
    }
}

impl Eq for ManagementGroup {}

impl Segments for ManagementGroup {
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.providers_segment);
        out.push(&self.namespace_segment);
        out.push(&self.management_groups_segment);
        out.push(&self.name);
        push_children(&self.children, out);
    }

    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.namespace_segment);
        out.push(&self.management_groups_segment);
        push_child_types(&self.children, out);
    }

    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        out.push(&mut self.namespace_segment);
        out.push(&mut self.management_groups_segment);
        push_child_types_mut(&mut self.children, out);
    }
}

scope_children!(ManagementGroup);
id_strings!(ManagementGroup);

// =============================================================================
// Root Scope
// =============================================================================

/// One of the four scopes an id chain terminates at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootScope {
    Tenant(TenantId),
    Subscription(SubscriptionId),
    ResourceGroup(ResourceGroup),
    ManagementGroup(ManagementGroup),
}

impl RootScope {
    pub fn kind(&self) -> ResourceKind {
        match self {
            RootScope::Tenant(_) => ResourceKind::Tenant,
            RootScope::Subscription(_) => ResourceKind::Subscription,
            RootScope::ResourceGroup(_) => ResourceKind::ResourceGroup,
            RootScope::ManagementGroup(_) => ResourceKind::ManagementGroup,
        }
    }

    pub fn type_string(&self) -> String {
        match self {
            RootScope::Tenant(id) => id.type_string(),
            RootScope::Subscription(id) => id.type_string(),
            RootScope::ResourceGroup(id) => id.type_string(),
            RootScope::ManagementGroup(id) => id.type_string(),
        }
    }

    pub fn children(&self) -> &[ScopeChild] {
        match self {
            RootScope::Tenant(id) => id.children(),
            RootScope::Subscription(id) => id.children(),
            RootScope::ResourceGroup(id) => id.children(),
            RootScope::ManagementGroup(id) => id.children(),
        }
    }

    pub fn scope_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (RootScope::Tenant(a), RootScope::Tenant(b)) => a.scope_equal(b),
            (RootScope::Subscription(a), RootScope::Subscription(b)) => a.scope_equal(b),
            (RootScope::ResourceGroup(a), RootScope::ResourceGroup(b)) => a.scope_equal(b),
            (RootScope::ManagementGroup(a), RootScope::ManagementGroup(b)) => a.scope_equal(b),
            _ => false,
        }
    }
}

impl Segments for RootScope {
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RootScope::Tenant(id) => id.push_path(out),
            RootScope::Subscription(id) => id.push_path(out),
            RootScope::ResourceGroup(id) => id.push_path(out),
            RootScope::ManagementGroup(id) => id.push_path(out),
        }
    }

    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RootScope::Tenant(id) => id.push_static(out),
            RootScope::Subscription(id) => id.push_static(out),
            RootScope::ResourceGroup(id) => id.push_static(out),
            RootScope::ManagementGroup(id) => id.push_static(out),
        }
    }

    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        match self {
            RootScope::Tenant(id) => id.push_static_mut(out),
            RootScope::Subscription(id) => id.push_static_mut(out),
            RootScope::ResourceGroup(id) => id.push_static_mut(out),
            RootScope::ManagementGroup(id) => id.push_static_mut(out),
        }
    }
}

id_strings!(RootScope);

impl From<TenantId> for RootScope {
    fn from(id: TenantId) -> Self {
        RootScope::Tenant(id)
    }
}

impl From<SubscriptionId> for RootScope {
    fn from(id: SubscriptionId) -> Self {
        RootScope::Subscription(id)
    }
}

impl From<ResourceGroup> for RootScope {
    fn from(id: ResourceGroup) -> Self {
        RootScope::ResourceGroup(id)
    }
}

impl From<ManagementGroup> for RootScope {
    fn from(id: ManagementGroup) -> Self {
        RootScope::ManagementGroup(id)
    }
}

impl TryFrom<ResourceId> for RootScope {
    type Error = ArmIdError;

    fn try_from(id: ResourceId) -> Result<Self, Self::Error> {
        match id {
            ResourceId::Tenant(id) => Ok(RootScope::Tenant(id)),
            ResourceId::Subscription(id) => Ok(RootScope::Subscription(id)),
            ResourceId::ResourceGroup(id) => Ok(RootScope::ResourceGroup(id)),
            ResourceId::ManagementGroup(id) => Ok(RootScope::ManagementGroup(id)),
            ResourceId::Scoped(id) => Err(ArmIdError::NotRootScope { id: id.to_string() }),
        }
    }
}

impl std::str::FromStr for RootScope {
    type Err = ArmIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_resource_id(s)?.try_into()
    }
}

impl serde::Serialize for RootScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for RootScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
