//! Canonical rendering of Resource IDs from a grammar.
//!
//! [`format`] is the mirror image of [`parse`]: it walks the same grammar the
//! parser consumes and emits `/`-joined path elements, using the grammar's
//! canonical literals for static, provider, and constant segments regardless
//! of how the source value was originally cased. Two calls over equal values
//! always produce byte-identical strings, which downstream cache keys and
//! state storage rely on.
//!
//! `/` inside a dynamic value is not escaped. A value containing a literal
//! `/` would format into a string that no longer parses back to the same
//! fields. This mirrors the ARM wire format, where IDs with such names are
//! already ambiguous, and is left as-is for compatibility with stored
//! identifiers; callers must not put `/` into dynamic values.
//!
//! [`parse`]: crate::parse::parse

use crate::error::ParseError;
use crate::segments::{Grammar, Segment};

/// Formats a Resource ID from `values`, one entry per dynamic segment key of
/// `grammar`.
///
/// Scope values are emitted verbatim (they carry their own leading `/`);
/// every other segment contributes `/` followed by the canonical literal or
/// the bound value. A key absent from `values` yields
/// [`ParseError::SegmentNotBound`], which for a correctly defined ID type is
/// unreachable.
pub fn format(grammar: &Grammar, values: &[(&str, String)]) -> Result<String, ParseError> {
    let mut out = String::new();
    for segment in grammar.segments() {
        match segment {
            Segment::Static { literal } => {
                out.push('/');
                out.push_str(literal);
            }
            Segment::ResourceProvider { provider, .. } => {
                out.push('/');
                out.push_str(provider);
            }
            Segment::Scope { key } => {
                let value = lookup(values, key, &out)?;
                out.push_str(&value);
            }
            Segment::SubscriptionId { key }
            | Segment::ResourceGroup { key }
            | Segment::UserSpecified { key, .. }
            | Segment::Constant { key, .. } => {
                let value = lookup(values, key, &out)?;
                out.push('/');
                out.push_str(&value);
            }
        }
    }
    Ok(out)
}

fn lookup(values: &[(&str, String)], key: &str, partial: &str) -> Result<String, ParseError> {
    values
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.clone())
        .ok_or_else(|| ParseError::SegmentNotBound {
            key: key.to_string(),
            bound: values.iter().map(|(k, _)| k.to_string()).collect(),
            input: partial.to_string(),
        })
}
