//! Error types for Resource ID parsing and grammar construction.

use thiserror::Error;

/// Errors returned when parsing a Resource ID string against a [`Grammar`].
///
/// Every variant carries the offending input and enough positional context to
/// build an actionable message. Parsing is total: any input, however
/// malformed, produces one of these values rather than a panic. The single
/// exception is [`ParseError::SegmentNotBound`], which signals a mismatch
/// between a grammar and the struct it is bound to. That is a programmer
/// error, unreachable for a correctly defined ID type, and is treated as an
/// assertion failure rather than user-facing feedback.
///
/// [`Grammar`]: crate::segments::Grammar
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A path element did not match the literal the grammar expects at that
    /// position.
    #[error("parsing {input:?}: expected {expected:?} but got {found:?} at segment {position}")]
    UnexpectedSegment {
        /// The literal (or a description of the value) the grammar expected.
        expected: String,
        /// The path element actually found in the input.
        found: String,
        /// Zero-based index of the path element within the input.
        position: usize,
        /// The full input being parsed.
        input: String,
    },

    /// The input ran out of path elements before the grammar was satisfied.
    #[error("parsing {input:?}: input ended before the {expected:?} segment at position {position}")]
    UnexpectedEndOfInput {
        /// A description of the next segment the grammar expected.
        expected: String,
        /// Zero-based index of the missing path element.
        position: usize,
        /// The full input being parsed.
        input: String,
    },

    /// The grammar was fully satisfied but path elements remain.
    #[error("parsing {input:?}: unexpected trailing segments {remaining:?}")]
    TrailingSegments {
        /// The unconsumed path elements.
        remaining: Vec<String>,
        /// The full input being parsed.
        input: String,
    },

    /// A scope segment matched zero path elements.
    #[error("parsing {input:?}: the scope for segment {key:?} cannot be empty")]
    EmptyScope {
        /// The key of the scope segment.
        key: String,
        /// The full input being parsed.
        input: String,
    },

    /// A structurally successful parse did not bind a key the ID struct
    /// requires. This means the grammar and the struct have drifted apart and
    /// must never happen for a correctly defined ID type.
    #[error("the segment {key:?} was not bound after parsing {input:?} (bound: {bound:?})")]
    SegmentNotBound {
        /// The key that was expected but absent.
        key: String,
        /// The keys that were bound.
        bound: Vec<String>,
        /// The full input being parsed.
        input: String,
    },
}

impl ParseError {
    /// Returns the input string the error refers to.
    pub fn input(&self) -> &str {
        match self {
            Self::UnexpectedSegment { input, .. } => input,
            Self::UnexpectedEndOfInput { input, .. } => input,
            Self::TrailingSegments { input, .. } => input,
            Self::EmptyScope { input, .. } => input,
            Self::SegmentNotBound { input, .. } => input,
        }
    }

    /// Returns true for user-facing errors: everything except
    /// [`ParseError::SegmentNotBound`].
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::SegmentNotBound { .. })
    }
}

/// Errors detected when validating a [`Grammar`] at construction or registry
/// build time.
///
/// These fail fast with a descriptive message instead of surfacing as odd
/// parse behavior at first use.
///
/// [`Grammar`]: crate::segments::Grammar
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The grammar contains no segments.
    #[error("grammar {name:?} has no segments")]
    Empty {
        /// The grammar's kind name.
        name: String,
    },

    /// A dynamic segment has an empty key.
    #[error("grammar {name:?}: segment at position {position} has an empty key")]
    EmptyKey {
        /// The grammar's kind name.
        name: String,
        /// Zero-based index of the offending segment.
        position: usize,
    },

    /// Two segments within the grammar bind the same key.
    #[error("grammar {name:?}: the key {key:?} is bound by more than one segment")]
    DuplicateKey {
        /// The grammar's kind name.
        name: String,
        /// The duplicated key.
        key: String,
    },

    /// A static or provider segment has an empty literal, or a constant
    /// segment has no allowed values.
    #[error("grammar {name:?}: segment at position {position} has no literal to match")]
    EmptyLiteral {
        /// The grammar's kind name.
        name: String,
        /// Zero-based index of the offending segment.
        position: usize,
    },

    /// A scope segment is not the final segment and is not immediately
    /// followed by a static segment, so its extent cannot be determined.
    #[error("grammar {name:?}: the scope segment at position {position} must be last or be followed by a static segment")]
    UnanchoredScope {
        /// The grammar's kind name.
        name: String,
        /// Zero-based index of the scope segment.
        position: usize,
    },

    /// The grammar contains more than one scope segment.
    #[error("grammar {name:?} contains more than one scope segment")]
    MultipleScopes {
        /// The grammar's kind name.
        name: String,
    },

    /// Two grammars with the same kind name were registered.
    #[error("a grammar named {name:?} is already registered")]
    DuplicateGrammar {
        /// The duplicated kind name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnexpectedSegment {
            expected: "resourceGroups".to_string(),
            found: "resourcegroups".to_string(),
            position: 2,
            input: "/subscriptions/x/resourcegroups/y".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "parsing \"/subscriptions/x/resourcegroups/y\": expected \"resourceGroups\" but got \"resourcegroups\" at segment 2"
        );

        let err = ParseError::TrailingSegments {
            remaining: vec!["extra".to_string()],
            input: "/subscriptions/x/extra".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "parsing \"/subscriptions/x/extra\": unexpected trailing segments [\"extra\"]"
        );
    }

    #[test]
    fn test_parse_error_input_accessor() {
        let err = ParseError::EmptyScope {
            key: "scope".to_string(),
            input: "/providers/Microsoft.Foo".to_string(),
        };
        assert_eq!(err.input(), "/providers/Microsoft.Foo");
    }

    #[test]
    fn test_user_error_classification() {
        let user = ParseError::UnexpectedEndOfInput {
            expected: "resourceGroups".to_string(),
            position: 2,
            input: "/subscriptions/x".to_string(),
        };
        assert!(user.is_user_error());

        let internal = ParseError::SegmentNotBound {
            key: "profileName".to_string(),
            bound: vec!["subscriptionId".to_string()],
            input: "/subscriptions/x".to_string(),
        };
        assert!(!internal.is_user_error());
    }

    #[test]
    fn test_grammar_error_display() {
        let err = GrammarError::UnanchoredScope {
            name: "ScopedThing".to_string(),
            position: 0,
        };
        assert_eq!(
            format!("{}", err),
            "grammar \"ScopedThing\": the scope segment at position 0 must be last or be followed by a static segment"
        );
    }
}
