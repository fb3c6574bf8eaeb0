//! Compiler directives
//!
//! The fixed language level and optimization/safety switches every module is
//! compiled under. Defaults turn off the runtime checks that only cost speed
//! in shipped code (bounds, wraparound, none checks) and turn on C division
//! and type inference.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE_LEVEL: &str = "3";

/// A directive value as Cython spells it on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Bool(bool),
    Text(String),
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveValue::Bool(true) => f.write_str("True"),
            DirectiveValue::Bool(false) => f.write_str("False"),
            DirectiveValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        DirectiveValue::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerDirectives {
    language_level: String,
    directives: BTreeMap<String, DirectiveValue>,
}

impl Default for CompilerDirectives {
    fn default() -> Self {
        let directives = [
            ("binding", false),
            ("boundscheck", false),
            ("wraparound", false),
            ("initializedcheck", false),
            ("cdivision", true),
            ("infer_types", true),
            ("nonecheck", false),
            ("profile", false),
            ("linetrace", false),
            ("emit_code_comments", false),
            ("optimize.use_switch", true),
            ("optimize.unpack_method_calls", true),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), DirectiveValue::from(value)))
        .collect();

        Self {
            language_level: DEFAULT_LANGUAGE_LEVEL.to_string(),
            directives,
        }
    }
}

impl CompilerDirectives {
    pub fn with_language_level(mut self, level: impl Into<String>) -> Self {
        self.language_level = level.into();
        self
    }

    /// Override or add individual directives.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, DirectiveValue)>,
    {
        self.directives.extend(overrides);
        self
    }

    pub fn language_level(&self) -> &str {
        &self.language_level
    }

    pub fn get(&self, name: &str) -> Option<&DirectiveValue> {
        self.directives.get(name)
    }

    /// `name=value` pairs, language level first, then directives by name.
    pub fn pairs(&self) -> Vec<String> {
        std::iter::once(format!("language_level={}", self.language_level))
            .chain(
                self.directives
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, value)),
            )
            .collect()
    }
}
