//! # armid
//!
//! Typed Azure Resource Manager resource ids: parsing, formatting and scope
//! normalization.
//!
//! ## Id Shapes
//!
//! Every id is one of five shapes:
//!
//! - `/` - the tenant
//! - `/subscriptions/{id}`
//! - `/subscriptions/{id}/resourceGroups/{name}`
//! - `/providers/Microsoft.Management/managementGroups/{name}`
//! - `{scope}/providers/{namespace}` - a provider scoped resource under any
//!   other id, including another provider scoped resource
//!
//! Each may be followed by scope-level children, `/{type}/{name}` pairs, e.g.
//! `/subscriptions/sub1/tagNames/name1/tagValues/value1`.
//!
//! ## Design Principles
//!
//! - Ids roundtrip: parse → format → parse yields an equal id
//! - Keywords and types compare case-insensitively but keep their text
//! - Values (ids, names) are never rewritten; normalization only touches
//!   keywords, provider namespaces and types
//! - A provider scoped id owns its parent scope, so the chain always ends at
//!   one of the four root scopes
//!
//! ```
//! use armid::ResourceId;
//!
//! let id: ResourceId = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Foo/foos/foo1"
//!     .parse()
//!     .unwrap();
//! assert_eq!(id.type_string(), "Microsoft.Foo/foos");
//! assert_eq!(id.scope_string(), "/subscriptions/resourceGroups/Microsoft.Foo/foos");
//! assert_eq!(id.root_scope().to_string(), "/subscriptions/sub1/resourceGroups/rg1");
//! ```

mod error;
mod id;
pub mod keywords;
mod macros;
mod normalize;
mod parser;
mod root;
mod scoped;
mod segment;

pub use error::{ArmIdError, ExtensionContext};
pub use id::{ResourceId, ResourceKind};
pub use parser::parse_resource_id;
pub use root::{ManagementGroup, ResourceGroup, RootScope, SubscriptionId, TenantId};
pub use scoped::ScopedResourceId;
pub use segment::ScopeChild;
