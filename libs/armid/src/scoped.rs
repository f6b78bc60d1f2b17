//! Provider scoped resources: `{parent}/providers/{namespace}/{type}/{name}...`.

use crate::error::ArmIdError;
use crate::id::ResourceId;
use crate::keywords::PROVIDERS;
use crate::macros::{id_strings, scope_children};
use crate::normalize::normalize_route_scope;
use crate::root::RootScope;
use crate::segment::{
    children_scope_equal, eq_fold, push_child_types, push_child_types_mut, push_children,
    type_path, ScopeChild, Segments,
};

/// A resource owned by a provider namespace, scoped under any other id.
///
/// The parent scope is owned, so a chain of scoped ids always ends at exactly
/// one [`RootScope`].
#[derive(Debug, Clone)]
pub struct ScopedResourceId {
    parent_scope: Box<ResourceId>,
    provider: String,
    pub(crate) providers_segment: String,
    pub(crate) children: Vec<ScopeChild>,
}

impl ScopedResourceId {
    /// Creates a provider level id, `{parent}/providers/{provider}`.
    #[must_use]
    pub fn new(parent_scope: impl Into<ResourceId>, provider: impl Into<String>) -> Self {
        Self::from_segments(parent_scope, PROVIDERS, provider)
    }

    pub(crate) fn from_segments(
        parent_scope: impl Into<ResourceId>,
        providers_segment: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            parent_scope: Box::new(parent_scope.into()),
            provider: provider.into(),
            providers_segment: providers_segment.into(),
            children: Vec::new(),
        }
    }

    pub fn parent_scope(&self) -> &ResourceId {
        &self.parent_scope
    }

    pub fn set_parent_scope(&mut self, parent_scope: impl Into<ResourceId>) {
        self.parent_scope = Box::new(parent_scope.into());
    }

    /// The provider namespace, e.g. `Microsoft.Foo`.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn set_provider(&mut self, provider: impl Into<String>) {
        self.provider = provider.into();
    }

    /// `{provider}/{types...}` of this level only; ancestors do not contribute.
    pub fn type_string(&self) -> String {
        type_path(&self.provider, &self.children)
    }

    /// One level up.
    ///
    /// Drops the innermost child when there is one. A bare provider level
    /// nested in another scoped id yields that id; directly under a root
    /// scope it has no parent.
    pub fn parent(&self) -> Option<ResourceId> {
        if !self.children.is_empty() {
            let mut parent = self.clone();
            parent.children.pop();
            return Some(ResourceId::Scoped(parent));
        }
        match self.parent_scope.as_ref() {
            ResourceId::Scoped(scoped) => Some(ResourceId::Scoped(scoped.clone())),
            _ => None,
        }
    }

    /// The root scope terminating the parent chain.
    pub fn root_scope(&self) -> RootScope {
        self.parent_scope.root_scope()
    }

    /// Same provider, child types and ancestor shape; values are ignored.
    pub fn scope_equal(&self, other: &Self) -> bool {
        eq_fold(&self.provider, &other.provider)
            && children_scope_equal(&self.children, &other.children)
            && self.parent_scope.scope_equal(&other.parent_scope)
    }

    /// Rewrites this level's provider and child types to the casing used by
    /// `template`, which must match `route_scope_string()`. Ancestors are left
    /// alone.
    pub fn normalize_route_scope(&mut self, template: &str) -> Result<(), ArmIdError> {
        normalize_route_scope(self, template)
    }

    pub(crate) fn push_route_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        out.push(&mut self.provider);
        push_child_types_mut(&mut self.children, out);
    }
}

impl PartialEq for ScopedResourceId {
    fn eq(&self, other: &Self) -> bool {
        eq_fold(&self.provider, &other.provider)
            && self.children == other.children
            && self.parent_scope == other.parent_scope
    }
}

impl Eq for ScopedResourceId {}

impl Segments for ScopedResourceId {
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.parent_scope.push_path(out);
        out.push(&self.providers_segment);
        out.push(&self.provider);
        push_children(&self.children, out);
    }

    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.parent_scope.push_static(out);
        self.push_route_static(out);
    }

    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>) {
        let Self {
            parent_scope,
            provider,
            children,
            ..
        } = self;
        parent_scope.push_static_mut(out);
        out.push(provider);
        push_child_types_mut(children, out);
    }

    fn push_route_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.provider);
        push_child_types(&self.children, out);
    }
}

scope_children!(ScopedResourceId);
id_strings!(ScopedResourceId);
