//! Parsing resource id strings.
//!
//! ```text
//! id        := "/" | root extension*
//! root      := "/subscriptions/{id}" ["/resourceGroups/{name}"]
//!            | "/providers/Microsoft.Management/managementGroups/{name}"
//!            | ""                                   (tenant)
//! extension := "/{type}/{name}"
//!            | "/providers/{namespace}"
//! ```
//!
//! Keywords match case-insensitively. Every segment keeps its input text.

use tracing::{debug, trace};

use crate::error::{ArmIdError, ExtensionContext};
use crate::id::ResourceId;
use crate::keywords::{
    MANAGEMENT_GROUPS, MANAGEMENT_NAMESPACE, PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS,
};
use crate::root::{ManagementGroup, ResourceGroup, RootScope, SubscriptionId, TenantId};
use crate::scoped::ScopedResourceId;
use crate::segment::eq_fold;

/// Parses a resource id such as
/// `/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Foo/foos/foo1`.
pub fn parse_resource_id(input: &str) -> Result<ResourceId, ArmIdError> {
    let result = parse(input);
    match &result {
        Ok(id) => trace!(id = input, kind = %id.kind(), "parsed resource id"),
        Err(error) => debug!(id = input, %error, "rejected resource id"),
    }
    result
}

fn parse(input: &str) -> Result<ResourceId, ArmIdError> {
    let body = input
        .strip_prefix('/')
        .ok_or(ArmIdError::MissingLeadingSlash)?;
    if body.is_empty() {
        return Ok(TenantId::new().into());
    }

    let segments: Vec<&str> = body.split('/').collect();
    if let Some(index) = segments.iter().position(|segment| segment.is_empty()) {
        return Err(ArmIdError::EmptySegment {
            position: index + 1,
        });
    }

    let (root, rest) = split_root(&segments);
    extend(root.into(), rest)
}

/// Splits off the root scope; the tenant root consumes nothing.
fn split_root<'s, 'a>(segments: &'s [&'a str]) -> (RootScope, &'s [&'a str]) {
    match segments {
        [subscriptions, subscription_id, resource_groups, name, rest @ ..]
            if eq_fold(subscriptions, SUBSCRIPTIONS) && eq_fold(resource_groups, RESOURCE_GROUPS) =>
        {
            let rg = ResourceGroup::from_segments(
                *subscriptions,
                *subscription_id,
                *resource_groups,
                *name,
            );
            (rg.into(), rest)
        }
        [subscriptions, subscription_id, rest @ ..] if eq_fold(subscriptions, SUBSCRIPTIONS) => {
            let sub = SubscriptionId::from_segments(*subscriptions, *subscription_id);
            (sub.into(), rest)
        }
        [providers, namespace, management_groups, name, rest @ ..]
            if eq_fold(providers, PROVIDERS)
                && eq_fold(namespace, MANAGEMENT_NAMESPACE)
                && eq_fold(management_groups, MANAGEMENT_GROUPS) =>
        {
            let mg = ManagementGroup::from_segments(*providers, *namespace, *management_groups, *name);
            (mg.into(), rest)
        }
        rest => (TenantId::new().into(), rest),
    }
}

/// Consumes `/{type}/{name}` pairs onto `current`, opening a new provider
/// level at every `providers` keyword.
fn extend(mut current: ResourceId, mut rest: &[&str]) -> Result<ResourceId, ArmIdError> {
    let mut context = ExtensionContext::RootLevel;
    loop {
        match rest {
            [] => return Ok(current),
            [providers, tail @ ..] if eq_fold(providers, PROVIDERS) => {
                let [namespace, tail @ ..] = tail else {
                    return Err(ArmIdError::MissingProviderNamespace);
                };
                context = ExtensionContext::Provider(namespace.to_string());
                current = ScopedResourceId::from_segments(current, *providers, *namespace).into();
                rest = tail;
            }
            [resource_type, name, tail @ ..] => {
                current.push_child(*resource_type, *name);
                rest = tail;
            }
            [resource_type] => {
                return Err(ArmIdError::MissingTypeName {
                    context,
                    resource_type: resource_type.to_string(),
                });
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
