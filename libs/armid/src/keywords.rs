//! Fixed segments of the resource id grammar.
//!
//! These are matched case-insensitively when parsing; the literal text found
//! in the input is kept on the parsed value.

pub const SUBSCRIPTIONS: &str = "subscriptions";
pub const RESOURCE_GROUPS: &str = "resourceGroups";
pub const PROVIDERS: &str = "providers";
pub const MANAGEMENT_NAMESPACE: &str = "Microsoft.Management";
pub const MANAGEMENT_GROUPS: &str = "managementGroups";

/// Namespace owning the subscription and resource group types.
pub const RESOURCES_NAMESPACE: &str = "Microsoft.Resources";
