//! Resolution of variable-length scope segments.
//!
//! An ARM scope is one of `/` (tenant root), `/subscriptions/{id}`,
//! `/subscriptions/{id}/resourceGroups/{rg}`,
//! `/providers/Microsoft.Management/managementGroups/{id}`, or the full ID of
//! another resource. Because a scope spans a variable number of path elements,
//! its extent is determined by the static segment that follows it in the
//! grammar: the resolver searches the remaining input from the end for that
//! anchor literal and assigns everything strictly before it to the scope. This
//! yields the longest recognizable scope, which matters when the scoped
//! resource is itself nested under another resource. When the scope is the
//! grammar's final segment it consumes all remaining input.

use crate::error::ParseError;

/// The outcome of resolving a scope segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedScope {
    /// The scope value, verbatim from the input, with its leading `/`.
    pub value: String,
    /// How many path elements the scope consumed.
    pub consumed: usize,
}

/// Resolves the scope segment `key` against the unconsumed path elements.
///
/// `offset` is the absolute index of `remaining[0]` within the input, used for
/// error positions. `anchor` is the literal of the static segment following
/// the scope, or `None` when the scope is the final segment.
pub(crate) fn resolve_scope(
    input: &str,
    remaining: &[&str],
    offset: usize,
    key: &str,
    anchor: Option<&str>,
    case_sensitive: bool,
) -> Result<ResolvedScope, ParseError> {
    if remaining.is_empty() {
        return Err(ParseError::EmptyScope {
            key: key.to_string(),
            input: input.to_string(),
        });
    }

    let end = match anchor {
        None => remaining.len(),
        Some(literal) => {
            let matched = remaining.iter().rposition(|element| {
                if case_sensitive {
                    *element == literal
                } else {
                    element.eq_ignore_ascii_case(literal)
                }
            });
            match matched {
                Some(index) => index,
                None => {
                    return Err(ParseError::UnexpectedSegment {
                        expected: literal.to_string(),
                        found: remaining.last().map(|s| s.to_string()).unwrap_or_default(),
                        position: offset + remaining.len() - 1,
                        input: input.to_string(),
                    });
                }
            }
        }
    };

    if end == 0 {
        return Err(ParseError::EmptyScope {
            key: key.to_string(),
            input: input.to_string(),
        });
    }

    let mut value = String::new();
    for element in &remaining[..end] {
        value.push('/');
        value.push_str(element);
    }

    Ok(ResolvedScope {
        value,
        consumed: end,
    })
}
