//! Segment and grammar types describing the shape of a Resource ID.
//!
//! A [`Grammar`] is pure data: an ordered list of [`Segment`]s that is the
//! single source of truth consumed by both the parser and the formatter, so
//! the two cannot drift apart. Grammars carry no behavior beyond
//! introspection; construction-time invariants are checked by
//! [`Grammar::validate`], which the registry runs for every grammar it
//! accepts.
//!
//! # Example
//!
//! ```
//! use arm_resource_ids::segments::{Grammar, Segment};
//!
//! let grammar = Grammar::new(
//!     "ResourceGroupId",
//!     vec![
//!         Segment::static_segment("subscriptions"),
//!         Segment::subscription_id("subscriptionId"),
//!         Segment::static_segment("resourceGroups"),
//!         Segment::resource_group("resourceGroupName"),
//!     ],
//! );
//! assert!(grammar.validate().is_ok());
//! assert_eq!(
//!     grammar.example_id(),
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GrammarError;

/// The example subscription ID used in documentation and error hints.
pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// The example resource group name used in documentation and error hints.
pub const EXAMPLE_RESOURCE_GROUP: &str = "example-resource-group";

/// The example scope used in documentation and error hints.
pub const EXAMPLE_SCOPE: &str =
    "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group";

/// One typed element of a Resource ID's path grammar.
///
/// The closed set of variants is matched exhaustively by the parser and the
/// formatter; there is no fallthrough case. Use the constructor functions
/// rather than building variants directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    /// A fixed path element, e.g. `subscriptions`. Matches exactly one
    /// element and binds nothing.
    Static {
        /// The literal text expected, in canonical casing.
        literal: String,
    },

    /// A resource provider namespace, e.g. `Microsoft.Cdn`. Matches exactly
    /// one element; the canonical literal is bound under `key` regardless of
    /// the input's casing.
    ResourceProvider {
        /// The key the canonical provider namespace is bound to.
        key: String,
        /// The provider namespace in canonical casing.
        provider: String,
    },

    /// A subscription ID. Matches exactly one non-empty element verbatim.
    SubscriptionId {
        /// The key the subscription ID is bound to.
        key: String,
    },

    /// A resource group name. Matches exactly one non-empty element verbatim.
    ResourceGroup {
        /// The key the resource group name is bound to.
        key: String,
    },

    /// A user-specified value such as a resource name. Matches exactly one
    /// non-empty element verbatim.
    UserSpecified {
        /// The key the value is bound to.
        key: String,
        /// A sample value used for documentation and error hints.
        example: String,
    },

    /// One of a closed set of allowed values. Matches exactly one element;
    /// the canonical value from the set is bound under `key`.
    Constant {
        /// The key the matched value is bound to.
        key: String,
        /// The allowed values, in canonical casing.
        values: Vec<String>,
    },

    /// A variable-length ARM scope: tenant, management group, subscription,
    /// resource group, or another resource's full ID. Matches one or more
    /// elements; the scope is bound verbatim (with its leading `/`) under
    /// `key`.
    Scope {
        /// The key the scope is bound to.
        key: String,
    },
}

impl Segment {
    /// A static segment matching `literal` exactly.
    pub fn static_segment(literal: impl Into<String>) -> Self {
        Self::Static {
            literal: literal.into(),
        }
    }

    /// A resource provider segment binding the canonical `provider` namespace
    /// under `key`.
    pub fn resource_provider(key: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::ResourceProvider {
            key: key.into(),
            provider: provider.into(),
        }
    }

    /// A subscription ID segment bound under `key`.
    pub fn subscription_id(key: impl Into<String>) -> Self {
        Self::SubscriptionId { key: key.into() }
    }

    /// A resource group segment bound under `key`.
    pub fn resource_group(key: impl Into<String>) -> Self {
        Self::ResourceGroup { key: key.into() }
    }

    /// A user-specified segment bound under `key`, with `example` used for
    /// documentation and error hints.
    pub fn user_specified(key: impl Into<String>, example: impl Into<String>) -> Self {
        Self::UserSpecified {
            key: key.into(),
            example: example.into(),
        }
    }

    /// A constant segment bound under `key`, accepting any of `values`.
    pub fn constant(key: impl Into<String>, values: Vec<String>) -> Self {
        Self::Constant {
            key: key.into(),
            values,
        }
    }

    /// A scope segment bound under `key`.
    pub fn scope(key: impl Into<String>) -> Self {
        Self::Scope { key: key.into() }
    }

    /// The key this segment binds, or `None` for static segments.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Static { .. } => None,
            Self::ResourceProvider { key, .. }
            | Self::SubscriptionId { key }
            | Self::ResourceGroup { key }
            | Self::UserSpecified { key, .. }
            | Self::Constant { key, .. }
            | Self::Scope { key } => Some(key),
        }
    }

    /// A sample value for this segment, used to compose example IDs.
    pub fn example(&self) -> &str {
        match self {
            Self::Static { literal } => literal,
            Self::ResourceProvider { provider, .. } => provider,
            Self::SubscriptionId { .. } => EXAMPLE_SUBSCRIPTION_ID,
            Self::ResourceGroup { .. } => EXAMPLE_RESOURCE_GROUP,
            Self::UserSpecified { example, .. } => example,
            Self::Constant { values, .. } => values.first().map(String::as_str).unwrap_or(""),
            Self::Scope { .. } => EXAMPLE_SCOPE,
        }
    }

    /// A short description of what this segment expects, used in errors.
    pub fn describe(&self) -> String {
        match self {
            Self::Static { literal } => literal.clone(),
            Self::ResourceProvider { provider, .. } => provider.clone(),
            Self::SubscriptionId { key }
            | Self::ResourceGroup { key }
            | Self::UserSpecified { key, .. }
            | Self::Scope { key } => format!("value for {key}"),
            Self::Constant { key, values } => format!("one of {values:?} for {key}"),
        }
    }

    /// Whether this segment matches a fixed literal the scope resolver can
    /// anchor on.
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static { .. })
    }

    /// Whether this segment is a scope.
    pub fn is_scope(&self) -> bool {
        matches!(self, Self::Scope { .. })
    }
}

/// The full ordered segment sequence describing one Resource ID shape.
///
/// Grammars are immutable once built and may be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    name: String,
    segments: Vec<Segment>,
}

impl Grammar {
    /// Creates a grammar for the identifier kind `name`.
    ///
    /// No validation happens here; call [`Grammar::validate`] (directly, or by
    /// registering the grammar with a [`Registry`]) to check the structural
    /// invariants before first use.
    ///
    /// [`Registry`]: crate::registry::Registry
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }

    /// The identifier kind this grammar describes, e.g. `OriginGroupId`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered segments of this grammar.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Checks the structural invariants of this grammar:
    ///
    /// - at least one segment
    /// - every dynamic segment has a unique, non-empty key
    /// - static, provider, and constant segments have something to match
    /// - at most one scope segment, and a scope that is not the final segment
    ///   is immediately followed by a static segment so its extent is
    ///   determinable
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.segments.is_empty() {
            return Err(GrammarError::Empty {
                name: self.name.clone(),
            });
        }

        let mut keys: Vec<&str> = Vec::new();
        let mut scope_seen = false;
        for (position, segment) in self.segments.iter().enumerate() {
            if let Some(key) = segment.key() {
                if key.is_empty() {
                    return Err(GrammarError::EmptyKey {
                        name: self.name.clone(),
                        position,
                    });
                }
                if keys.contains(&key) {
                    return Err(GrammarError::DuplicateKey {
                        name: self.name.clone(),
                        key: key.to_string(),
                    });
                }
                keys.push(key);
            }

            match segment {
                Segment::Static { literal } if literal.is_empty() => {
                    return Err(GrammarError::EmptyLiteral {
                        name: self.name.clone(),
                        position,
                    });
                }
                Segment::ResourceProvider { provider, .. } if provider.is_empty() => {
                    return Err(GrammarError::EmptyLiteral {
                        name: self.name.clone(),
                        position,
                    });
                }
                Segment::Constant { values, .. }
                    if values.is_empty() || values.iter().any(String::is_empty) =>
                {
                    return Err(GrammarError::EmptyLiteral {
                        name: self.name.clone(),
                        position,
                    });
                }
                Segment::Scope { .. } => {
                    if scope_seen {
                        return Err(GrammarError::MultipleScopes {
                            name: self.name.clone(),
                        });
                    }
                    scope_seen = true;

                    let anchored = match self.segments.get(position + 1) {
                        None => true,
                        Some(next) => next.is_static(),
                    };
                    if !anchored {
                        return Err(GrammarError::UnanchoredScope {
                            name: self.name.clone(),
                            position,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Composes a full sample ID from the segment examples, e.g.
    /// `/subscriptions/12345678-…/resourceGroups/example-resource-group`.
    ///
    /// Used to build "expected an ID like …" hints in validation errors.
    pub fn example_id(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            // Scope examples already carry their leading slash.
            if !segment.is_scope() {
                out.push('/');
            }
            out.push_str(segment.example());
        }
        out
    }
}
