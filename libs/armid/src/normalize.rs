//! Imposing a canonical casing on the static segments of an id.
//!
//! A scope template has the same shape as a scope string, e.g.
//! `/SUBSCRIPTIONS/RESOURCEGROUPS/MICROSOFT.FOO/FOOS`. When it matches the
//! id's own scope string case-insensitively, segment for segment, each static
//! segment of the id is overwritten with the template's text.

use tracing::debug;

use crate::error::ArmIdError;
use crate::scoped::ScopedResourceId;
use crate::segment::{eq_fold, Segments};

/// Splits a scope template into its segments. `/` has none; a template
/// without the leading slash is not a scope string.
fn template_segments(template: &str) -> Option<Vec<&str>> {
    let body = template.strip_prefix('/')?;
    if body.is_empty() {
        Some(Vec::new())
    } else {
        Some(body.split('/').collect())
    }
}

/// Overwrites `targets` with `template` if they match; leaves them untouched
/// otherwise.
fn rewrite(targets: Vec<&mut String>, template: Option<&[&str]>) -> bool {
    let Some(template) = template else {
        return false;
    };
    let matches = targets.len() == template.len()
        && targets
            .iter()
            .zip(template)
            .all(|(target, segment)| eq_fold(target, segment));
    if !matches {
        return false;
    }
    for (target, segment) in targets.into_iter().zip(template) {
        target.clear();
        target.push_str(segment);
    }
    true
}

pub(crate) fn normalize_scope<T: Segments>(id: &mut T, template: &str) -> Result<(), ArmIdError> {
    let segments = template_segments(template);
    let mut targets = Vec::new();
    id.push_static_mut(&mut targets);
    if rewrite(targets, segments.as_deref()) {
        return Ok(());
    }

    let id = id.path_string();
    debug!(%id, template, "scope template does not match id");
    Err(ArmIdError::ScopeMismatch {
        template: template.to_string(),
        id,
    })
}

pub(crate) fn normalize_route_scope(
    id: &mut ScopedResourceId,
    template: &str,
) -> Result<(), ArmIdError> {
    let segments = template_segments(template);
    let mut targets = Vec::new();
    id.push_route_static_mut(&mut targets);
    if rewrite(targets, segments.as_deref()) {
        return Ok(());
    }

    let id = id.to_string();
    debug!(%id, template, "route scope template does not match id");
    Err(ArmIdError::RouteScopeMismatch {
        template: template.to_string(),
        id,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::id::ResourceId;
    use crate::root::{ManagementGroup, ResourceGroup, SubscriptionId, TenantId};

    fn scoped(parent: impl Into<ResourceId>, provider: &str, pairs: &[(&str, &str)]) -> ScopedResourceId {
        let mut id = ScopedResourceId::new(parent, provider);
        for (resource_type, name) in pairs {
            id.push_child(*resource_type, *name);
        }
        id
    }

    #[test]
    fn test_template_segments() {
        assert_eq!(template_segments("/"), Some(vec![]));
        assert_eq!(template_segments("/A/b"), Some(vec!["A", "b"]));
        assert_eq!(template_segments(""), None);
        assert_eq!(template_segments("A/b"), None);
    }

    #[rstest]
    #[case::tenant(TenantId::new().into(), "/", "/")]
    #[case::subscription(SubscriptionId::new("sub1").into(), "/SUBSCRIPTIONS", "/SUBSCRIPTIONS/sub1")]
    #[case::resource_group(
        ResourceGroup::new("sub1", "grp1").into(),
        "/SUBSCRIPTIONS/RESOURCEGROUPS",
        "/SUBSCRIPTIONS/sub1/RESOURCEGROUPS/grp1"
    )]
    #[case::management_group(
        ManagementGroup::new("grp1").into(),
        "/MICROSOFT.MANAGEMENT/MANAGEMENTGROUPS",
        "/providers/MICROSOFT.MANAGEMENT/MANAGEMENTGROUPS/grp1"
    )]
    #[case::scoped_under_tenant(
        scoped(TenantId::new(), "MICROSOFT.Foo", &[("FOOS", "foo1")]).into(),
        "/microsoft.foo/foos",
        "/providers/microsoft.foo/foos/foo1"
    )]
    #[case::scoped_under_resource_group_lower(
        scoped(ResourceGroup::new("sub1", "rg1"), "MICROSOFT.Foo", &[("FOOS", "foo1")]).into(),
        "/subscriptions/resourcegroups/microsoft.foo/foos",
        "/subscriptions/sub1/resourcegroups/rg1/providers/microsoft.foo/foos/foo1"
    )]
    #[case::scoped_under_resource_group_upper(
        scoped(ResourceGroup::new("sub1", "rg1"), "MICROSOFT.Foo", &[("FOOS", "foo1")]).into(),
        "/SUBSCRIPTIONS/RESOURCEGROUPS/MICROSOFT.FOO/FOOS",
        "/SUBSCRIPTIONS/sub1/RESOURCEGROUPS/rg1/providers/MICROSOFT.FOO/FOOS/foo1"
    )]
    #[case::subscription_children(
        SubscriptionId::new("sub1")
            .with_child("tagNames", "name1")
            .with_child("tagValues", "value1")
            .into(),
        "/SUBSCRIPTIONS/TAGNAMES/TAGVALUES",
        "/SUBSCRIPTIONS/sub1/TAGNAMES/name1/TAGVALUES/value1"
    )]
    #[case::resource_group_children(
        ResourceGroup::new("sub1", "rg1").with_child("deployments", "deploy1").into(),
        "/SUBSCRIPTIONS/RESOURCEGROUPS/DEPLOYMENTS",
        "/SUBSCRIPTIONS/sub1/RESOURCEGROUPS/rg1/DEPLOYMENTS/deploy1"
    )]
    #[case::management_group_children(
        ManagementGroup::new("group1").with_child("foos", "foo1").into(),
        "/MICROSOFT.MANAGEMENT/MANAGEMENTGROUPS/FOOS",
        "/providers/MICROSOFT.MANAGEMENT/MANAGEMENTGROUPS/group1/FOOS/foo1"
    )]
    #[case::management_group_nested(
        scoped(
            scoped(ManagementGroup::new("mg1"), "Microsoft.Foo", &[("foos", "foo1")]),
            "Microsoft.Bar",
            &[("bars", "bar1")]
        )
        .into(),
        "/MICROSOFT.MANAGEMENT/MANAGEMENTGROUPS/MICROSOFT.FOO/FOOS/MICROSOFT.BAR/BARS",
        "/providers/MICROSOFT.MANAGEMENT/MANAGEMENTGROUPS/mg1/providers/MICROSOFT.FOO/FOOS/foo1/providers/MICROSOFT.BAR/BARS/bar1"
    )]
    #[case::rp_level(
        scoped(TenantId::new(), "Microsoft.Foo", &[]).into(),
        "/MICROSOFT.FOO",
        "/providers/MICROSOFT.FOO"
    )]
    #[case::rp_level_nested(
        scoped(scoped(TenantId::new(), "Microsoft.Foo", &[]), "Microsoft.Bar", &[]).into(),
        "/MICROSOFT.FOO/MICROSOFT.BAR",
        "/providers/MICROSOFT.FOO/providers/MICROSOFT.BAR"
    )]
    fn test_normalize(#[case] id: ResourceId, #[case] template: &str, #[case] expected: &str) {
        let mut id = id;
        id.normalize(template).unwrap();
        assert_eq!(id.to_string(), expected);
    }

    #[rstest]
    #[case::different_provider("/Microsoft.Bar/foos")]
    #[case::fewer_segments("/Microsoft.Foo")]
    #[case::more_segments("/Microsoft.Foo/foos/bars")]
    #[case::root_segments("/subscriptions/Microsoft.Foo/foos")]
    #[case::no_leading_slash("Microsoft.Foo/foos")]
    fn test_normalize_mismatch_leaves_id_untouched(#[case] template: &str) {
        let original: ResourceId = scoped(TenantId::new(), "Microsoft.Foo", &[("foos", "foo1")]).into();
        let mut id = original.clone();
        let err = id.normalize(template).unwrap_err();
        assert_eq!(
            err,
            ArmIdError::ScopeMismatch {
                template: template.to_string(),
                id: "/providers/Microsoft.Foo/foos/foo1".to_string(),
            }
        );
        assert_eq!(id.to_string(), original.to_string());
    }

    #[rstest]
    #[case::tenant(TenantId::new().into(), "")]
    #[case::subscription(SubscriptionId::new("sub1").into(), "SUBSCRIPTIONS")]
    fn test_normalize_requires_leading_slash(#[case] id: ResourceId, #[case] template: &str) {
        let mut id = id;
        let before = id.to_string();
        assert!(id.normalize(template).unwrap_err().is_mismatch());
        assert_eq!(id.to_string(), before);
    }

    #[test]
    fn test_normalize_mismatch_message() {
        let mut id: ResourceId = scoped(TenantId::new(), "Microsoft.Foo", &[("foos", "foo1")]).into();
        let err = id.normalize("/Microsoft.Bar/foos").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"mismatch scope string ("/Microsoft.Bar/foos") for id "/providers/Microsoft.Foo/foos/foo1""#
        );
    }

    #[rstest]
    #[case::under_tenant(
        scoped(TenantId::new(), "MICROSOFT.Foo", &[("FOOS", "foo1")]),
        "/microsoft.foo/foos",
        "/providers/microsoft.foo/foos/foo1"
    )]
    #[case::under_resource_group(
        scoped(ResourceGroup::new("sub1", "rg1"), "MICROSOFT.Foo", &[("FOOS", "foo1")]),
        "/microsoft.foo/foos",
        "/subscriptions/sub1/resourceGroups/rg1/providers/microsoft.foo/foos/foo1"
    )]
    #[case::nested_leaves_ancestors(
        scoped(
            scoped(ResourceGroup::new("sub1", "rg1"), "Microsoft.Foo", &[("foos", "foo1")]),
            "Microsoft.Bar",
            &[("BARS", "bar1")]
        ),
        "/microsoft.bar/bars",
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Foo/foos/foo1/providers/microsoft.bar/bars/bar1"
    )]
    fn test_normalize_route_scope(
        #[case] id: ScopedResourceId,
        #[case] template: &str,
        #[case] expected: &str,
    ) {
        let mut id = id;
        id.normalize_route_scope(template).unwrap();
        assert_eq!(id.to_string(), expected);
    }

    #[test]
    fn test_normalize_route_scope_mismatch() {
        let mut id = scoped(TenantId::new(), "Microsoft.Foo", &[("foos", "foo1")]);
        let err = id.normalize_route_scope("/Microsoft.Bar/foos").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"mismatch route scope string ("/Microsoft.Bar/foos") for id "/providers/Microsoft.Foo/foos/foo1""#
        );
        assert_eq!(id.provider(), "Microsoft.Foo");
    }

    #[test]
    fn test_normalize_route_scope_rejects_full_scope_string() {
        let mut id = scoped(ResourceGroup::new("sub1", "rg1"), "Microsoft.Foo", &[("foos", "foo1")]);
        let err = id
            .normalize_route_scope("/subscriptions/resourceGroups/Microsoft.Foo/foos")
            .unwrap_err();
        assert!(err.is_mismatch());
    }

    #[test]
    fn test_normalize_route_scope_requires_leading_slash() {
        let mut id = scoped(TenantId::new(), "Microsoft.Foo", &[("foos", "foo1")]);
        let err = id.normalize_route_scope("MICROSOFT.FOO/FOOS").unwrap_err();
        assert!(matches!(err, ArmIdError::RouteScopeMismatch { .. }));
        assert_eq!(id.to_string(), "/providers/Microsoft.Foo/foos/foo1");
    }
}
