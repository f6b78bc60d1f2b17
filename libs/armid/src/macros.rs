//! Macros for the operations every id shape shares.

/// Implements the scope-level child accessors on a struct with a
/// `children: Vec<ScopeChild>` field.
///
/// This generates:
/// - `types()` / `names()`, the parallel type and name sequences
/// - `children()` to borrow the pairs
/// - `push_child()` / `pop_child()` for in-place edits
/// - `with_child()` for builder-style construction
macro_rules! scope_children {
    ($name:ident) => {
        impl $name {
            /// Scope-level child types, outermost first.
            pub fn types(&self) -> Vec<&str> {
                self.children
                    .iter()
                    .map(|child| child.resource_type())
                    .collect()
            }

            /// Scope-level child names, paired index for index with `types()`.
            pub fn names(&self) -> Vec<&str> {
                self.children.iter().map(|child| child.name()).collect()
            }

            /// Scope-level children as type/name pairs.
            pub fn children(&self) -> &[$crate::ScopeChild] {
                &self.children
            }

            /// Appends a `/{resource_type}/{name}` child.
            pub fn push_child(&mut self, resource_type: impl Into<String>, name: impl Into<String>) {
                self.children
                    .push($crate::ScopeChild::new(resource_type, name));
            }

            /// Removes and returns the innermost child.
            pub fn pop_child(&mut self) -> Option<$crate::ScopeChild> {
                self.children.pop()
            }

            /// Returns this id extended with a `/{resource_type}/{name}` child.
            #[must_use]
            pub fn with_child(
                mut self,
                resource_type: impl Into<String>,
                name: impl Into<String>,
            ) -> Self {
                self.push_child(resource_type, name);
                self
            }
        }
    };
}

/// Implements the string views, hashing and scope normalization for a type
/// implementing `Segments`.
macro_rules! id_strings {
    ($name:ident) => {
        impl $name {
            /// The id with every value segment removed, e.g.
            /// `/subscriptions/resourceGroups/Microsoft.Foo/foos`.
            pub fn scope_string(&self) -> String {
                crate::segment::Segments::scope_string(self)
            }

            /// Like `scope_string()`, restricted to the leaf provider level.
            pub fn route_scope_string(&self) -> String {
                crate::segment::Segments::route_scope_string(self)
            }

            /// Rewrites the static segments to the casing used by `template`.
            ///
            /// `template` must match `scope_string()` case-insensitively,
            /// segment for segment. On mismatch nothing is changed.
            pub fn normalize(&mut self, template: &str) -> Result<(), $crate::ArmIdError> {
                crate::normalize::normalize_scope(self, template)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&crate::segment::Segments::path_string(self))
            }
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                crate::segment::Segments::hash_segments(self, state);
            }
        }
    };
}

pub(crate) use id_strings;
pub(crate) use scope_children;
