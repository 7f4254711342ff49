//! Configuration-input validation helpers.
//!
//! The configuration-schema layer registers validators with the signature
//! `(value, key) -> (warnings, errors)`. This module adapts the strict parser
//! of any [`ResourceId`] type to that shape, working over `serde_json::Value`
//! since that is how configuration input arrives. Error messages embed the
//! grammar's example ID so the user sees the expected shape, not just the
//! point of divergence.
//!
//! # Example
//!
//! ```
//! use arm_resource_ids::commonids::ResourceGroupId;
//! use arm_resource_ids::validation::validate_id;
//! use serde_json::json;
//!
//! let (warnings, errors) =
//!     validate_id::<ResourceGroupId>(&json!("/subscriptions/1234/resourceGroups/rg"), "id");
//! assert!(warnings.is_empty());
//! assert!(errors.is_empty());
//!
//! let (_, errors) = validate_id::<ResourceGroupId>(&json!("not-a-valid-id"), "id");
//! assert_eq!(errors.len(), 1);
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::error::ParseError;
use crate::resource_id::ResourceId;

/// Errors produced by configuration-input validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The configuration value was not a string.
    #[error("expected {key:?} to be a string, got {found}")]
    NotAString {
        /// The configuration key being validated.
        key: String,
        /// The JSON type actually found.
        found: &'static str,
    },

    /// The configuration value did not parse as the expected ID kind.
    #[error("{key:?} is not a valid {kind} (expected an ID like {example:?}): {source}")]
    InvalidId {
        /// The configuration key being validated.
        key: String,
        /// The identifier kind that was expected.
        kind: String,
        /// A sample ID of the expected shape.
        example: String,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },
}

/// Validates that `value` is a string holding a well-formed ID of kind `T`.
///
/// Returns the `(warnings, errors)` pair the configuration-schema layer
/// expects. Warnings are currently never produced; the tuple keeps the
/// registered signature stable.
pub fn validate_id<T: ResourceId>(value: &Value, key: &str) -> (Vec<String>, Vec<ValidationError>) {
    let input = match value {
        Value::String(input) => input,
        other => {
            return (
                Vec::new(),
                vec![ValidationError::NotAString {
                    key: key.to_string(),
                    found: json_type_name(other),
                }],
            );
        }
    };

    match T::parse(input) {
        Ok(_) => (Vec::new(), Vec::new()),
        Err(source) => {
            let grammar = T::grammar();
            (
                Vec::new(),
                vec![ValidationError::InvalidId {
                    key: key.to_string(),
                    kind: grammar.name().to_string(),
                    example: grammar.example_id(),
                    source,
                }],
            )
        }
    }
}

/// Returns a closure validating IDs of kind `T`, for registration with the
/// configuration-schema layer.
pub fn validator_for<T: ResourceId>(
) -> impl Fn(&Value, &str) -> (Vec<String>, Vec<ValidationError>) {
    validate_id::<T>
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
