//! The matcher that walks a grammar against an input string.
//!
//! [`parse`] is the single decoding entry point: it splits the input on `/`,
//! walks the grammar's segments left to right, and either produces a
//! [`ParsedIdentifier`] binding every dynamic segment's key to its matched
//! value, or a [`ParseError`] describing exactly where the input diverged.
//! There is no backtracking except inside the scope resolver, and the walk is
//! O(input length) with no I/O, so calls are safe from any thread.
//!
//! # Example
//!
//! ```
//! use arm_resource_ids::parse::parse;
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
//! let parsed = parse("/subscriptions/1234/resourceGroups/example", &grammar, true).unwrap();
//! assert_eq!(parsed.get("subscriptionId"), Some("1234"));
//! assert_eq!(parsed.get("resourceGroupName"), Some("example"));
//! ```

use std::collections::BTreeMap;

use crate::error::ParseError;
use crate::scope::resolve_scope;
use crate::segments::{Grammar, Segment};

/// The field map produced by a successful parse.
///
/// Keys are the dynamic segment keys of the grammar; values are the matched
/// path elements (canonical casing for provider and constant segments). The
/// raw path elements are retained for diagnostics when a required key turns
/// out to be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    input: String,
    values: BTreeMap<String, String>,
    raw_segments: Vec<String>,
}

impl ParsedIdentifier {
    /// Returns the value bound to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value bound to `key`, or a [`ParseError::SegmentNotBound`]
    /// naming the keys that were bound.
    ///
    /// A missing key after a structurally successful parse means the grammar
    /// and the ID struct consuming it have drifted apart; see
    /// [`ParseError::SegmentNotBound`] for the failure semantics.
    pub fn required(&self, key: &str) -> Result<String, ParseError> {
        match self.values.get(key) {
            Some(value) => Ok(value.clone()),
            None => Err(ParseError::SegmentNotBound {
                key: key.to_string(),
                bound: self.values.keys().cloned().collect(),
                input: self.input.clone(),
            }),
        }
    }

    /// The raw path elements the parse consumed, in input order.
    pub fn raw_segments(&self) -> &[String] {
        &self.raw_segments
    }

    /// The input string this identifier was parsed from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The full key-to-value map, ordered by key.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

/// Parses `input` against `grammar`, producing the bound field map.
///
/// With `case_sensitive` set, static, provider, and constant literals must
/// match the grammar's canonical casing exactly; this is the mode for
/// user-authored configuration. With it unset, literals match in any casing
/// and the canonical casing is what gets bound; this is the mode for values
/// echoed back by the API.
pub fn parse(
    input: &str,
    grammar: &Grammar,
    case_sensitive: bool,
) -> Result<ParsedIdentifier, ParseError> {
    let mut elements: Vec<&str> = input.split('/').collect();
    while elements.first() == Some(&"") {
        elements.remove(0);
    }
    while elements.last() == Some(&"") {
        elements.pop();
    }

    let segments = grammar.segments();
    let mut values: BTreeMap<String, String> = BTreeMap::new();
    let mut position = 0usize;

    for (index, segment) in segments.iter().enumerate() {
        if let Segment::Scope { key } = segment {
            let anchor = match segments.get(index + 1) {
                Some(Segment::Static { literal }) => Some(literal.as_str()),
                _ => None,
            };
            let resolved = resolve_scope(
                input,
                &elements[position..],
                position,
                key,
                anchor,
                case_sensitive,
            )?;
            values.insert(key.clone(), resolved.value);
            position += resolved.consumed;
            continue;
        }

        let element = match elements.get(position) {
            Some(element) => *element,
            None => {
                return Err(ParseError::UnexpectedEndOfInput {
                    expected: segment.describe(),
                    position,
                    input: input.to_string(),
                });
            }
        };

        match segment {
            Segment::Static { literal } => {
                if !literal_matches(literal, element, case_sensitive) {
                    return Err(unexpected(literal, element, position, input));
                }
            }
            Segment::ResourceProvider { key, provider } => {
                if !literal_matches(provider, element, case_sensitive) {
                    return Err(unexpected(provider, element, position, input));
                }
                // Always bind the canonical namespace: the API echoes
                // provider namespaces in inconsistent casing.
                values.insert(key.clone(), provider.clone());
            }
            Segment::Constant {
                key,
                values: allowed,
            } => {
                let matched = allowed
                    .iter()
                    .find(|value| literal_matches(value, element, case_sensitive));
                match matched {
                    Some(value) => {
                        values.insert(key.clone(), value.clone());
                    }
                    None => {
                        return Err(unexpected(&segment.describe(), element, position, input));
                    }
                }
            }
            Segment::SubscriptionId { key }
            | Segment::ResourceGroup { key }
            | Segment::UserSpecified { key, .. } => {
                if element.is_empty() {
                    return Err(unexpected(&segment.describe(), element, position, input));
                }
                values.insert(key.clone(), element.to_string());
            }
            Segment::Scope { .. } => unreachable!("scope segments are handled above"),
        }

        position += 1;
    }

    if position < elements.len() {
        return Err(ParseError::TrailingSegments {
            remaining: elements[position..].iter().map(|s| s.to_string()).collect(),
            input: input.to_string(),
        });
    }

    Ok(ParsedIdentifier {
        input: input.to_string(),
        values,
        raw_segments: elements.iter().map(|s| s.to_string()).collect(),
    })
}

fn literal_matches(literal: &str, element: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        literal == element
    } else {
        literal.eq_ignore_ascii_case(element)
    }
}

fn unexpected(expected: &str, found: &str, position: usize, input: &str) -> ParseError {
    ParseError::UnexpectedSegment {
        expected: expected.to_string(),
        found: found.to_string(),
        position,
        input: input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin_group_grammar() -> Grammar {
        Grammar::new(
            "OriginGroupId",
            vec![
                Segment::static_segment("subscriptions"),
                Segment::subscription_id("subscriptionId"),
                Segment::static_segment("resourceGroups"),
                Segment::resource_group("resourceGroupName"),
                Segment::static_segment("providers"),
                Segment::resource_provider("resourceProvider", "Microsoft.CDN"),
                Segment::static_segment("profiles"),
                Segment::user_specified("profileName", "profileValue"),
                Segment::static_segment("originGroups"),
                Segment::user_specified("originGroupName", "originGroupValue"),
            ],
        )
    }

    fn scoped_connection_grammar() -> Grammar {
        Grammar::new(
            "ScopedPrivateEndpointConnectionId",
            vec![
                Segment::scope("scope"),
                Segment::static_segment("privateEndpointConnections"),
                Segment::user_specified("privateEndpointConnectionName", "connectionValue"),
            ],
        )
    }

    const ORIGIN_GROUP_ID: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.CDN/profiles/profileValue/originGroups/originGroupValue";

    #[test]
    fn test_parse_strict() {
        let parsed = parse(ORIGIN_GROUP_ID, &origin_group_grammar(), true).unwrap();
        assert_eq!(
            parsed.get("subscriptionId"),
            Some("12345678-1234-9876-4563-123456789012")
        );
        assert_eq!(parsed.get("resourceGroupName"), Some("example-resource-group"));
        assert_eq!(parsed.get("resourceProvider"), Some("Microsoft.CDN"));
        assert_eq!(parsed.get("profileName"), Some("profileValue"));
        assert_eq!(parsed.get("originGroupName"), Some("originGroupValue"));
        assert_eq!(parsed.raw_segments().len(), 10);
        assert_eq!(parsed.input(), ORIGIN_GROUP_ID);
    }

    #[test]
    fn test_parse_rejects_mis_cased_static_literal() {
        let input = ORIGIN_GROUP_ID.replace("resourceGroups", "resourcegroups");
        let err = parse(&input, &origin_group_grammar(), true).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedSegment {
                expected: "resourceGroups".to_string(),
                found: "resourcegroups".to_string(),
                position: 2,
                input: input.clone(),
            }
        );
    }

    #[test]
    fn test_parse_insensitive_binds_canonical_provider() {
        let input = ORIGIN_GROUP_ID.replace("Microsoft.CDN", "microsoft.cdn");

        let err = parse(&input, &origin_group_grammar(), true).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedSegment { position: 5, .. }));

        let parsed = parse(&input, &origin_group_grammar(), false).unwrap();
        assert_eq!(parsed.get("resourceProvider"), Some("Microsoft.CDN"));
    }

    #[test]
    fn test_parse_truncated_input() {
        let input = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.CDN/profiles/profileValue/originGroups";
        let err = parse(input, &origin_group_grammar(), true).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEndOfInput {
                expected: "value for originGroupName".to_string(),
                position: 9,
                input: input.to_string(),
            }
        );
    }

    #[test]
    fn test_parse_trailing_segments() {
        let input = format!("{ORIGIN_GROUP_ID}/extra");
        let err = parse(&input, &origin_group_grammar(), true).unwrap_err();
        assert_eq!(
            err,
            ParseError::TrailingSegments {
                remaining: vec!["extra".to_string()],
                input: input.clone(),
            }
        );
    }

    #[test]
    fn test_parse_empty_and_slash_only_inputs() {
        for input in ["", "/", "//", "///"] {
            let err = parse(input, &origin_group_grammar(), true).unwrap_err();
            assert!(
                matches!(err, ParseError::UnexpectedEndOfInput { position: 0, .. }),
                "input {input:?} produced {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_ignores_leading_and_trailing_slashes() {
        let input = format!("{ORIGIN_GROUP_ID}/");
        let parsed = parse(&input, &origin_group_grammar(), true).unwrap();
        assert_eq!(parsed.get("originGroupName"), Some("originGroupValue"));
    }

    #[test]
    fn test_parse_rejects_empty_inner_element() {
        let input = ORIGIN_GROUP_ID.replace("profileValue", "");
        let err = parse(&input, &origin_group_grammar(), true).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedSegment { position: 7, .. }
        ));
    }

    #[test]
    fn test_parse_scope_longest_match() {
        let input = "/subscriptions/S/resourceGroups/G/providers/Microsoft.Foo/bars/B/privateEndpointConnections/N";
        let parsed = parse(input, &scoped_connection_grammar(), true).unwrap();
        assert_eq!(
            parsed.get("scope"),
            Some("/subscriptions/S/resourceGroups/G/providers/Microsoft.Foo/bars/B")
        );
        assert_eq!(parsed.get("privateEndpointConnectionName"), Some("N"));
    }

    #[test]
    fn test_parse_scope_missing_anchor() {
        let input = "/subscriptions/S/resourceGroups/G";
        let err = parse(input, &scoped_connection_grammar(), true).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedSegment { .. }));
    }

    #[test]
    fn test_parse_scope_empty() {
        let input = "/privateEndpointConnections/N";
        let err = parse(input, &scoped_connection_grammar(), true).unwrap_err();
        assert_eq!(
            err,
            ParseError::EmptyScope {
                key: "scope".to_string(),
                input: input.to_string(),
            }
        );
    }

    #[test]
    fn test_parse_constant_segment() {
        let grammar = Grammar::new(
            "VolumeId",
            vec![
                Segment::static_segment("volumes"),
                Segment::constant(
                    "volumeType",
                    vec!["Standard".to_string(), "Premium".to_string()],
                ),
            ],
        );

        let parsed = parse("/volumes/Premium", &grammar, true).unwrap();
        assert_eq!(parsed.get("volumeType"), Some("Premium"));

        // Strict parsing requires canonical casing; insensitive binds it.
        assert!(parse("/volumes/premium", &grammar, true).is_err());
        let parsed = parse("/volumes/premium", &grammar, false).unwrap();
        assert_eq!(parsed.get("volumeType"), Some("Premium"));

        let err = parse("/volumes/Basic", &grammar, true).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedSegment { position: 1, .. }));
    }

    #[test]
    fn test_required_reports_bound_keys() {
        let parsed = parse(ORIGIN_GROUP_ID, &origin_group_grammar(), true).unwrap();
        assert_eq!(
            parsed.required("profileName").unwrap(),
            "profileValue".to_string()
        );

        let err = parsed.required("noSuchKey").unwrap_err();
        match err {
            ParseError::SegmentNotBound { key, bound, .. } => {
                assert_eq!(key, "noSuchKey");
                assert!(bound.contains(&"profileName".to_string()));
            }
            other => panic!("expected SegmentNotBound, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_never_panics_on_garbage() {
        let grammar = origin_group_grammar();
        let inputs = [
            "not-a-valid-id",
            "subscriptions",
            "/subscriptions//resourceGroups/",
            "/////",
            "/subscriptions/a/resourceGroups/b/providers/Microsoft.CDN/profiles/c/originGroups/d/e/f/g/h",
            "\u{0}\u{1}/\u{2}",
        ];
        for input in inputs {
            // Any result is fine as long as it is a value, not a panic.
            let _ = parse(input, &grammar, true);
            let _ = parse(input, &grammar, false);
        }
    }
}
