//! A read-only registry of known identifier grammars.
//!
//! The registry is built once by a constructor, validating every grammar it
//! accepts, and is immutable thereafter: there is no ambient registration at
//! load time and no mutation API, so a shared reference can be handed to
//! anything that needs it from any thread. Its one derived operation is
//! best-effort re-casing of IDs found in stored state, which the provider
//! uses to repair literal casing the API mangled.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::GrammarError;
use crate::format::format;
use crate::parse::parse;
use crate::segments::Grammar;

/// An immutable collection of grammars keyed by identifier-kind name.
#[derive(Debug, Clone)]
pub struct Registry {
    grammars: BTreeMap<String, Grammar>,
}

impl Registry {
    /// Builds a registry from `grammars`, validating each one.
    ///
    /// Fails fast on the first invalid grammar or duplicated kind name, so a
    /// malformed grammar is caught at startup rather than at first parse.
    pub fn new(grammars: Vec<Grammar>) -> Result<Self, GrammarError> {
        let mut map = BTreeMap::new();
        for grammar in grammars {
            grammar.validate()?;
            let name = grammar.name().to_string();
            if map.insert(name.clone(), grammar).is_some() {
                return Err(GrammarError::DuplicateGrammar { name });
            }
        }
        debug!(grammars = map.len(), "built resource id registry");
        Ok(Self { grammars: map })
    }

    /// Returns the grammar registered under `kind`, if any.
    pub fn get(&self, kind: &str) -> Option<&Grammar> {
        self.grammars.get(kind)
    }

    /// The registered kind names, in lexical order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.grammars.keys().map(String::as_str)
    }

    /// The number of registered grammars.
    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }

    /// Best-effort re-casing of `input` to canonical literal casing.
    ///
    /// Tries each registered grammar insensitively, in kind-name order, and
    /// reformats the first match canonically. Returns the input unchanged
    /// when no grammar matches; this never fails, since the result is only
    /// ever a cosmetic repair of IDs already held in state.
    pub fn recase(&self, input: &str) -> String {
        for (kind, grammar) in &self.grammars {
            let Ok(parsed) = parse(input, grammar, false) else {
                continue;
            };
            let values: Vec<(&str, String)> = parsed
                .values()
                .iter()
                .map(|(key, value)| (key.as_str(), value.clone()))
                .collect();
            // Every dynamic key was just bound by the same grammar, so
            // formatting cannot miss one.
            if let Ok(recased) = format(grammar, &values) {
                trace!(kind = kind.as_str(), "re-cased resource id");
                return recased;
            }
        }
        input.to_string()
    }
}
