//! The `ResourceId` sum type and the operations shared by every shape.

use std::fmt;

use crate::error::ArmIdError;
use crate::macros::id_strings;
use crate::root::{ManagementGroup, ResourceGroup, RootScope, SubscriptionId, TenantId};
use crate::scoped::ScopedResourceId;
use crate::segment::{ScopeChild, Segments};

/// Discriminates the five id shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Tenant,
    Subscription,
    ResourceGroup,
    ManagementGroup,
    Scoped,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Tenant => "tenant",
            ResourceKind::Subscription => "subscription",
            ResourceKind::ResourceGroup => "resource_group",
            ResourceKind::ManagementGroup => "management_group",
            ResourceKind::Scoped => "scoped",
        }
    }

    pub fn is_root(&self) -> bool {
        !matches!(self, ResourceKind::Scoped)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ResourceKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A parsed or constructed resource id.
///
/// Equality compares every segment case-insensitively. The text of each
/// segment is kept as given, so formatting reproduces the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceId {
    Tenant(TenantId),
    Subscription(SubscriptionId),
    ResourceGroup(ResourceGroup),
    ManagementGroup(ManagementGroup),
    Scoped(ScopedResourceId),
}

impl ResourceId {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceId::Tenant(_) => ResourceKind::Tenant,
            ResourceId::Subscription(_) => ResourceKind::Subscription,
            ResourceId::ResourceGroup(_) => ResourceKind::ResourceGroup,
            ResourceId::ManagementGroup(_) => ResourceKind::ManagementGroup,
            ResourceId::Scoped(_) => ResourceKind::Scoped,
        }
    }

    pub fn is_root(&self) -> bool {
        self.kind().is_root()
    }

    pub fn as_scoped(&self) -> Option<&ScopedResourceId> {
        match self {
            ResourceId::Scoped(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_scoped_mut(&mut self) -> Option<&mut ScopedResourceId> {
        match self {
            ResourceId::Scoped(id) => Some(id),
            _ => None,
        }
    }

    /// Provider namespace of the leaf level, if it is provider scoped.
    pub fn provider(&self) -> Option<&str> {
        self.as_scoped().map(ScopedResourceId::provider)
    }

    /// Scope-level children of the leaf level.
    pub fn children(&self) -> &[ScopeChild] {
        match self {
            ResourceId::Tenant(id) => id.children(),
            ResourceId::Subscription(id) => id.children(),
            ResourceId::ResourceGroup(id) => id.children(),
            ResourceId::ManagementGroup(id) => id.children(),
            ResourceId::Scoped(id) => id.children(),
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ScopeChild> {
        match self {
            ResourceId::Tenant(id) => &mut id.children,
            ResourceId::Subscription(id) => &mut id.children,
            ResourceId::ResourceGroup(id) => &mut id.children,
            ResourceId::ManagementGroup(id) => &mut id.children,
            ResourceId::Scoped(id) => &mut id.children,
        }
    }

    /// Child types of the leaf level.
    pub fn types(&self) -> Vec<&str> {
        self.children().iter().map(ScopeChild::resource_type).collect()
    }

    /// Child names of the leaf level, paired with `types()`.
    pub fn names(&self) -> Vec<&str> {
        self.children().iter().map(ScopeChild::name).collect()
    }

    /// Appends a `/{resource_type}/{name}` child to the leaf level.
    pub fn push_child(&mut self, resource_type: impl Into<String>, name: impl Into<String>) {
        self.children_mut()
            .push(ScopeChild::new(resource_type, name));
    }

    /// Fully qualified type of the leaf, e.g. `Microsoft.Foo/foos/bars`.
    pub fn type_string(&self) -> String {
        match self {
            ResourceId::Tenant(id) => id.type_string(),
            ResourceId::Subscription(id) => id.type_string(),
            ResourceId::ResourceGroup(id) => id.type_string(),
            ResourceId::ManagementGroup(id) => id.type_string(),
            ResourceId::Scoped(id) => id.type_string(),
        }
    }

    /// One level up, or `None` at the top.
    ///
    /// Root scopes drop their innermost child and have no parent once they
    /// have none. See [`ScopedResourceId::parent`] for provider levels.
    pub fn parent(&self) -> Option<ResourceId> {
        if let ResourceId::Scoped(id) = self {
            return id.parent();
        }
        if self.children().is_empty() {
            return None;
        }
        let mut parent = self.clone();
        parent.children_mut().pop();
        Some(parent)
    }

    /// Successive `parent()` values, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = ResourceId> {
        std::iter::successors(self.parent(), ResourceId::parent)
    }

    /// The root scope terminating the parent chain, with its own children.
    pub fn root_scope(&self) -> RootScope {
        match self {
            ResourceId::Tenant(id) => RootScope::Tenant(id.clone()),
            ResourceId::Subscription(id) => RootScope::Subscription(id.clone()),
            ResourceId::ResourceGroup(id) => RootScope::ResourceGroup(id.clone()),
            ResourceId::ManagementGroup(id) => RootScope::ManagementGroup(id.clone()),
            ResourceId::Scoped(id) => id.root_scope(),
        }
    }

    /// Structural equality that ignores values: subscription ids, group names
    /// and child names may differ.
    pub fn scope_equal(&self, other: &ResourceId) -> bool {
        match (self, other) {
            (ResourceId::Tenant(a), ResourceId::Tenant(b)) => a.scope_equal(b),
            (ResourceId::Subscription(a), ResourceId::Subscription(b)) => a.scope_equal(b),
            (ResourceId::ResourceGroup(a), ResourceId::ResourceGroup(b)) => a.scope_equal(b),
            (ResourceId::ManagementGroup(a), ResourceId::ManagementGroup(b)) => a.scope_equal(b),
            (ResourceId::Scoped(a), ResourceId::Scoped(b)) => a.scope_equal(b),
            _ => false,
        }
    }
}

impl Segments for ResourceId {
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ResourceId::Tenant(id) => id.push_path(out),
            ResourceId::Subscription(id) => id.push_path(out),
            ResourceId::ResourceGroup(id) => id.push_path(out),
            ResourceId::ManagementGroup(id) => id.push_path(out),
            ResourceId::Scoped(id) => id.push_path(out),
        }
    }

    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ResourceId::Tenant(id) => id.push_static(out),
            ResourceId::Subscription(id) => id.push_static(out),
            ResourceId::ResourceGroup(id) => id.push_static(out),
            ResourceId::ManagementGroup(id) => id.push_static(out),
            ResourceId::Scoped(id) => id.push_static(out),
        }
    }

    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        match self {
            ResourceId::Tenant(id) => id.push_static_mut(out),
            ResourceId::Subscription(id) => id.push_static_mut(out),
            ResourceId::ResourceGroup(id) => id.push_static_mut(out),
            ResourceId::ManagementGroup(id) => id.push_static_mut(out),
            ResourceId::Scoped(id) => id.push_static_mut(out),
        }
    }

    fn push_route_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ResourceId::Scoped(id) => id.push_route_static(out),
            root => root.push_static(out),
        }
    }
}

id_strings!(ResourceId);

impl From<TenantId> for ResourceId {
    fn from(id: TenantId) -> Self {
        ResourceId::Tenant(id)
    }
}

impl From<SubscriptionId> for ResourceId {
    fn from(id: SubscriptionId) -> Self {
        ResourceId::Subscription(id)
    }
}

impl From<ResourceGroup> for ResourceId {
    fn from(id: ResourceGroup) -> Self {
        ResourceId::ResourceGroup(id)
    }
}

impl From<ManagementGroup> for ResourceId {
    fn from(id: ManagementGroup) -> Self {
        ResourceId::ManagementGroup(id)
    }
}

impl From<ScopedResourceId> for ResourceId {
    fn from(id: ScopedResourceId) -> Self {
        ResourceId::Scoped(id)
    }
}

impl From<RootScope> for ResourceId {
    fn from(root: RootScope) -> Self {
        match root {
            RootScope::Tenant(id) => ResourceId::Tenant(id),
            RootScope::Subscription(id) => ResourceId::Subscription(id),
            RootScope::ResourceGroup(id) => ResourceId::ResourceGroup(id),
            RootScope::ManagementGroup(id) => ResourceId::ManagementGroup(id),
        }
    }
}

impl std::str::FromStr for ResourceId {
    type Err = ArmIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_resource_id(s)
    }
}

impl serde::Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ResourceId {
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
