//! Segment-level building blocks shared by every id shape.

use std::hash::{Hash, Hasher};

/// Case-insensitive segment comparison. Stored text is never folded.
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Hashes a segment consistently with [`eq_fold`].
pub(crate) fn hash_fold<H: Hasher>(segment: &str, state: &mut H) {
    for c in segment.chars().flat_map(char::to_lowercase) {
        c.hash(state);
    }
    // separator so ["ab", "c"] and ["a", "bc"] differ
    state.write_u8(0xff);
}

/// A scope-level child resource: one `/{type}/{name}` pair.
#[derive(Debug, Clone)]
pub struct ScopeChild {
    pub(crate) resource_type: String,
    pub(crate) name: String,
}

impl ScopeChild {
    /// Creates a child from its type and name segments.
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }

    /// The type segment, e.g. `tagNames`.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// The name segment, e.g. `name1`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name segment.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn same_type(&self, other: &Self) -> bool {
        eq_fold(&self.resource_type, &other.resource_type)
    }
}

impl PartialEq for ScopeChild {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other) && eq_fold(&self.name, &other.name)
    }
}

impl Eq for ScopeChild {}

pub(crate) fn children_scope_equal(a: &[ScopeChild], b: &[ScopeChild]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_type(y))
}

pub(crate) fn push_children<'a>(children: &'a [ScopeChild], out: &mut Vec<&'a str>) {
    for child in children {
        out.push(&child.resource_type);
        out.push(&child.name);
    }
}

pub(crate) fn push_child_types<'a>(children: &'a [ScopeChild], out: &mut Vec<&'a str>) {
    out.extend(children.iter().map(|child| child.resource_type.as_str()));
}

pub(crate) fn push_child_types_mut<'a>(
    children: &'a mut [ScopeChild],
    out: &mut Vec<&'a mut String>,
) {
    out.extend(children.iter_mut().map(|child| &mut child.resource_type));
}

pub(crate) fn type_path(base: &str, children: &[ScopeChild]) -> String {
    let mut out = base.to_string();
    for child in children {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&child.resource_type);
    }
    out
}

/// Walks the segments of an id.
///
/// Static segments are the keywords, provider namespaces and child types: the
/// parts a scope string is made of. Everything else is a value.
pub(crate) trait Segments {
    /// Every path segment, outermost first.
    fn push_path<'a>(&'a self, out: &mut Vec<&'a str>);

    /// Static segments in scope string order.
    fn push_static<'a>(&'a self, out: &mut Vec<&'a str>);

    /// Mutable view of the same segments [`Segments::push_static`] yields.
    fn push_static_mut<'a>(&'a mut self, out: &mut Vec<&'a mut String>);

    /// Static segments of the leaf level only.
    fn push_route_static<'a>(&'a self, out: &mut Vec<&'a str>) {
        self.push_static(out);
    }

    fn path_string(&self) -> String {
        let mut segments = Vec::new();
        self.push_path(&mut segments);
        format!("/{}", segments.join("/"))
    }

    fn scope_string(&self) -> String {
        let mut segments = Vec::new();
        self.push_static(&mut segments);
        format!("/{}", segments.join("/"))
    }

    fn route_scope_string(&self) -> String {
        let mut segments = Vec::new();
        self.push_route_static(&mut segments);
        format!("/{}", segments.join("/"))
    }

    fn hash_segments<H: Hasher>(&self, state: &mut H) {
        let mut segments = Vec::new();
        self.push_path(&mut segments);
        for segment in segments {
            hash_fold(segment, state);
        }
    }
}
