//! Error types for resource id parsing and normalization.

use std::fmt;

use thiserror::Error;

/// Where in the id the parser was extending when it ran out of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionContext {
    /// Scope-level children directly under a root scope.
    RootLevel,
    /// Child types under the given provider namespace.
    Provider(String),
}

impl fmt::Display for ExtensionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionContext::RootLevel => f.write_str("extending for root level RP"),
            ExtensionContext::Provider(namespace) => write!(f, "extending for RP {namespace}"),
        }
    }
}

/// Errors that can occur when parsing or normalizing resource ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArmIdError {
    /// The id does not start with a slash (this includes the empty string).
    #[error("id should start with \"/\"")]
    MissingLeadingSlash,

    /// Two consecutive slashes, or a trailing slash.
    #[error("empty segment found behind {position}th \"/\"")]
    EmptySegment { position: usize },

    /// A `providers` keyword with nothing after it.
    #[error("missing provider namespace segment")]
    MissingProviderNamespace,

    /// A resource type segment without its name.
    #[error("{context}: missing resource type name after type {resource_type}")]
    MissingTypeName {
        context: ExtensionContext,
        resource_type: String,
    },

    /// The scope template does not describe this id.
    #[error("mismatch scope string ({template:?}) for id {id:?}")]
    ScopeMismatch { template: String, id: String },

    /// The route scope template does not describe the leaf level of this id.
    #[error("mismatch route scope string ({template:?}) for id {id:?}")]
    RouteScopeMismatch { template: String, id: String },

    /// A root scope was required but the id is provider scoped.
    #[error("id {id:?} is not a root scope")]
    NotRootScope { id: String },
}

impl ArmIdError {
    /// Returns true if this error was raised while parsing the id grammar.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ArmIdError::MissingLeadingSlash
                | ArmIdError::EmptySegment { .. }
                | ArmIdError::MissingProviderNamespace
                | ArmIdError::MissingTypeName { .. }
        )
    }

    /// Returns true if this error indicates a scope template mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            ArmIdError::ScopeMismatch { .. } | ArmIdError::RouteScopeMismatch { .. }
        )
    }
}
