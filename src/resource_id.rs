//! The trait binding a typed ID struct to its grammar.
//!
//! Each identifier kind implements [`ResourceId`] by supplying its grammar,
//! an explicit field-by-field conversion from a parse result, and the list of
//! values it binds. The trait's provided methods then give every ID type the
//! same surface: strict [`parse`](ResourceId::parse) for user configuration,
//! lenient [`parse_insensitively`](ResourceId::parse_insensitively) for API
//! responses, canonical [`id`](ResourceId::id) for storage and lookup, and
//! [`validate`](ResourceId::validate) as a standalone input check.
//!
//! The conversion is deliberately explicit rather than reflective: every
//! required field is named in `from_parse_result`, so a grammar/struct
//! mismatch is caught by the compiler where possible and surfaces as
//! [`ParseError::SegmentNotBound`] where not.

use std::fmt;

use crate::error::ParseError;
use crate::format::format;
use crate::parse::{parse, ParsedIdentifier};
use crate::segments::Grammar;

/// A typed Resource ID bound to one grammar.
///
/// Implementations are immutable value types: construct them from known field
/// values or by parsing a string; there is no mutation API. The `Display`
/// implementation is a human-readable description of the components, distinct
/// from the canonical form returned by [`id`](ResourceId::id).
pub trait ResourceId: Sized + fmt::Display {
    /// The grammar describing this identifier's shape.
    fn grammar() -> Grammar;

    /// Builds the typed ID from a parse result, naming every required field.
    fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError>;

    /// The value bound to each dynamic segment key, in grammar order.
    fn segment_values(&self) -> Vec<(&'static str, String)>;

    /// Parses `input` with strict casing.
    ///
    /// Use this for user-authored configuration, where a mis-cased literal is
    /// an input error the user should fix.
    fn parse(input: &str) -> Result<Self, ParseError> {
        let parsed = parse(input, &Self::grammar(), true)?;
        Self::from_parse_result(&parsed)
    }

    /// Parses `input` accepting any casing for static and provider literals.
    ///
    /// Use this only for values echoed back by the API, which cases literals
    /// inconsistently. Never feed user input through this method: it would
    /// silently accept strings the strict parser rejects, and the canonical
    /// form produced by [`id`](ResourceId::id) would then differ from what
    /// the user wrote.
    fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        let parsed = parse(input, &Self::grammar(), false)?;
        Self::from_parse_result(&parsed)
    }

    /// The canonical string form of this ID.
    ///
    /// Guaranteed to parse back (strictly) into an equal value, and two calls
    /// on equal values always produce byte-identical strings.
    ///
    /// # Panics
    ///
    /// Panics if a dynamic segment of the grammar has no value in
    /// [`segment_values`](ResourceId::segment_values). That is a
    /// grammar/struct mismatch in the ID type's definition, unreachable for a
    /// correctly defined type.
    fn id(&self) -> String {
        match format(&Self::grammar(), &self.segment_values()) {
            Ok(id) => id,
            Err(err) => panic!("formatting {}: {err}", Self::grammar().name()),
        }
    }

    /// Validates that `input` is a well-formed ID of this kind, discarding
    /// the parsed value.
    fn validate(input: &str) -> Result<(), Vec<ParseError>> {
        match Self::parse(input) {
            Ok(_) => Ok(()),
            Err(err) => Err(vec![err]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::Segment;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct WidgetId {
        subscription_id: String,
        widget_name: String,
    }

    impl fmt::Display for WidgetId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "Widget (Subscription: {:?}, Widget Name: {:?})",
                self.subscription_id, self.widget_name
            )
        }
    }

    impl ResourceId for WidgetId {
        fn grammar() -> Grammar {
            Grammar::new(
                "WidgetId",
                vec![
                    Segment::static_segment("subscriptions"),
                    Segment::subscription_id("subscriptionId"),
                    Segment::static_segment("widgets"),
                    Segment::user_specified("widgetName", "widgetValue"),
                ],
            )
        }

        fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError> {
            Ok(Self {
                subscription_id: parsed.required("subscriptionId")?,
                widget_name: parsed.required("widgetName")?,
            })
        }

        fn segment_values(&self) -> Vec<(&'static str, String)> {
            vec![
                ("subscriptionId", self.subscription_id.clone()),
                ("widgetName", self.widget_name.clone()),
            ]
        }
    }

    // A deliberately broken ID type: its grammar binds a key the struct
    // never supplies.
    #[derive(Debug)]
    struct BrokenId;

    impl fmt::Display for BrokenId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Broken")
        }
    }

    impl ResourceId for BrokenId {
        fn grammar() -> Grammar {
            Grammar::new(
                "BrokenId",
                vec![
                    Segment::static_segment("widgets"),
                    Segment::user_specified("widgetName", "widgetValue"),
                ],
            )
        }

        fn from_parse_result(parsed: &ParsedIdentifier) -> Result<Self, ParseError> {
            parsed.required("aKeyTheGrammarNeverBinds")?;
            Ok(Self)
        }

        fn segment_values(&self) -> Vec<(&'static str, String)> {
            vec![]
        }
    }

    #[test]
    fn test_parse_and_id_round_trip() {
        let id = WidgetId {
            subscription_id: "1234".to_string(),
            widget_name: "w1".to_string(),
        };
        let formatted = id.id();
        assert_eq!(formatted, "/subscriptions/1234/widgets/w1");
        assert_eq!(WidgetId::parse(&formatted).unwrap(), id);
    }

    #[test]
    fn test_parse_insensitively_recovers_canonical_form() {
        let id = WidgetId::parse_insensitively("/SUBSCRIPTIONS/1234/Widgets/w1").unwrap();
        assert_eq!(id.id(), "/subscriptions/1234/widgets/w1");

        assert!(WidgetId::parse("/SUBSCRIPTIONS/1234/Widgets/w1").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(WidgetId::validate("/subscriptions/1234/widgets/w1").is_ok());

        let errors = WidgetId::validate("not-a-valid-id").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_user_error());
    }

    #[test]
    fn test_display_is_a_description_not_the_id() {
        let id = WidgetId {
            subscription_id: "1234".to_string(),
            widget_name: "w1".to_string(),
        };
        assert_eq!(
            format!("{id}"),
            "Widget (Subscription: \"1234\", Widget Name: \"w1\")"
        );
    }

    #[test]
    fn test_grammar_struct_mismatch_is_segment_not_bound() {
        let err = BrokenId::parse("/widgets/w1").unwrap_err();
        assert!(matches!(err, ParseError::SegmentNotBound { .. }));
        assert!(!err.is_user_error());
    }

    #[test]
    #[should_panic(expected = "widgetName")]
    fn test_formatting_with_missing_binding_panics() {
        struct UnboundId;

        impl fmt::Display for UnboundId {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "Unbound")
            }
        }

        impl ResourceId for UnboundId {
            fn grammar() -> Grammar {
                WidgetId::grammar()
            }

            fn from_parse_result(_: &ParsedIdentifier) -> Result<Self, ParseError> {
                Ok(Self)
            }

            fn segment_values(&self) -> Vec<(&'static str, String)> {
                vec![("subscriptionId", "1234".to_string())]
            }
        }

        let _ = UnboundId.id();
    }
}
