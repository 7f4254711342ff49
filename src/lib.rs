//! ARM Resource ID grammar engine
//!
//! This crate implements the hierarchical resource-identifier grammar used by
//! Azure Resource Manager providers: a declarative description of path-shaped
//! IDs such as
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/{provider}/{type}/{name}`,
//! together with a parser, a canonical formatter, and validation hooks for
//! configuration input.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - **Segments and grammars**: a [`Grammar`](segments::Grammar) is an ordered
//!   list of typed [`Segment`](segments::Segment)s, pure data consumed
//!   identically by the parser and the formatter
//! - **Parsing**: [`parse::parse`] walks a grammar against an input string in
//!   strict or case-insensitive mode, producing a field map or a structured
//!   [`ParseError`]
//! - **Scope resolution**: variable-length ARM scopes (tenant, management
//!   group, subscription, resource group, or another resource) are matched
//!   longest-first against the grammar's anchor
//! - **Formatting**: [`format::format`] renders the canonical string form,
//!   always using the grammar's canonical literal casing
//! - **Typed IDs**: the [`ResourceId`] trait binds a concrete struct to a
//!   grammar, giving it `parse`, `parse_insensitively`, `id`, and `validate`
//! - **A registry**: an immutable, constructor-built collection of known
//!   grammars, with best-effort re-casing of IDs found in state
//! - **Validation**: helpers with the configuration-schema layer's
//!   `(value, key) -> (warnings, errors)` signature
//!
//! # Quick Start
//!
//! ```
//! use arm_resource_ids::commonids::OriginGroupId;
//! use arm_resource_ids::ResourceId;
//!
//! // Strict parsing, for user-authored configuration.
//! let id = OriginGroupId::parse(
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/example-resource-group/providers/Microsoft.CDN/profiles/profileValue/originGroups/originGroupValue",
//! )?;
//! assert_eq!(id.profile_name, "profileValue");
//!
//! // Lenient parsing, for values echoed back by the API. The canonical form
//! // always comes back with the grammar's casing.
//! let echoed = OriginGroupId::parse_insensitively(
//!     "/subscriptions/12345678-1234-9876-4563-123456789012/resourcegroups/example-resource-group/providers/microsoft.cdn/profiles/profileValue/origingroups/originGroupValue",
//! )?;
//! assert_eq!(echoed.id(), id.id());
//! # Ok::<(), arm_resource_ids::ParseError>(())
//! ```
//!
//! # Parsing modes
//!
//! `parse` is for user input and rejects any deviation from the canonical
//! casing of static and provider literals. `parse_insensitively` is for
//! values echoed back by the API, which cases literals inconsistently; it
//! accepts any casing but binds the canonical form, so a later `id()` call
//! reproduces the canonical string. Never run user input through the
//! insensitive mode: it would silently accept strings the strict parser
//! rejects.
//!
//! # Concurrency
//!
//! The engine is purely functional over immutable inputs, with no shared
//! mutable state and no I/O. Grammars, registries, and typed IDs can be shared
//! and used from any number of threads; every operation is bounded and
//! O(input length).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commonids;
pub mod error;
pub mod format;
pub mod logging;
pub mod parse;
pub mod registry;
pub mod resource_id;
mod scope;
pub mod segments;
pub mod validation;

// Re-export main types at crate root
pub use error::{GrammarError, ParseError};
pub use logging::{init_logging, try_init_logging};
pub use parse::ParsedIdentifier;
pub use registry::Registry;
pub use resource_id::ResourceId;
pub use segments::{Grammar, Segment};
pub use validation::{validate_id, validator_for, ValidationError};

// Re-export commonly used external types
pub use serde_json;
pub use tracing;
