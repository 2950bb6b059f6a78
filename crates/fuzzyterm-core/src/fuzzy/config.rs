//! Fuzzy match configuration
//!
//! `FuzzyConfig` is the validated, immutable value object driving the whole
//! matching pipeline. All range checks happen once, in `build()`; a
//! constructed config is guaranteed valid for its lifetime and is never
//! silently coerced toward a nearby valid value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::limits::{DEFAULT_MAX_EXPANSIONS, MAX_SUPPORTED_DISTANCE};

/// Errors raised at configuration build time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Edit budget outside the supported range
    #[error("max_edits must be within [0, {max}], got {given}", max = MAX_SUPPORTED_DISTANCE)]
    MaxEditsOutOfRange { given: u32 },

    /// Field name is empty
    #[error("field must not be empty")]
    EmptyField,
}

/// Result type for configuration building
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Validated parameters for approximate matching of one query term.
///
/// Immutable after construction: safe for unsynchronized concurrent reads
/// from multiple threads. Equality and hashing are structural over every
/// field, in declaration order.
///
/// Deserialization routes through the builder's `build()`, so a config
/// cannot enter the program without passing validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FuzzyConfigBuilder")]
pub struct FuzzyConfig {
    field: String,
    term: String,
    max_edits: u32,
    prefix_length: usize,
    max_expansions: usize,
    transpositions: bool,
}

impl FuzzyConfig {
    /// Create a config with default matching parameters:
    /// `max_edits = 2`, `prefix_length = 0`, `max_expansions = 50`,
    /// `transpositions = true`.
    pub fn new(field: impl Into<String>, term: impl Into<String>) -> ConfigResult<Self> {
        Self::builder(field, term).build()
    }

    /// Start building a config with explicit parameters.
    pub fn builder(field: impl Into<String>, term: impl Into<String>) -> FuzzyConfigBuilder {
        FuzzyConfigBuilder {
            field: field.into(),
            term: term.into(),
            max_edits: MAX_SUPPORTED_DISTANCE,
            prefix_length: 0,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            transpositions: true,
        }
    }

    /// Name of the indexed field being queried.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The query term's literal text.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Query term length in codepoints.
    pub fn term_len(&self) -> usize {
        self.term.chars().count()
    }

    /// Maximum number of edits allowed, within `[0, 2]`.
    pub fn max_edits(&self) -> u32 {
        self.max_edits
    }

    /// Number of leading codepoints that must match verbatim.
    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Upper bound on distinct matched terms considered by the rewrite
    /// stage. The core exposes this value but does not clamp it against any
    /// global clause ceiling.
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Whether an adjacent-codepoint swap counts as a single edit.
    pub fn transpositions(&self) -> bool {
        self.transpositions
    }

    /// One-way rendering for logs and query explanations.
    ///
    /// The field prefix is elided when it matches the display field:
    /// `render("title")` on a body-field config yields `"body:trm~2"`,
    /// on a title-field config just `"trm~2"`.
    pub fn render(&self, display_field: &str) -> String {
        let mut out = String::new();
        if self.field != display_field {
            out.push_str(&self.field);
            out.push(':');
        }
        out.push_str(&self.term);
        out.push('~');
        out.push_str(&self.max_edits.to_string());
        out
    }
}

impl fmt::Display for FuzzyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}~{}", self.field, self.term, self.max_edits)
    }
}

/// Builder for [`FuzzyConfig`].
///
/// All setters are infallible; validation runs once in [`build`], so no
/// partially constructed config is ever observable. Also the `Deserialize`
/// surface of [`FuzzyConfig`]: missing parameters take the documented
/// defaults.
///
/// [`build`]: FuzzyConfigBuilder::build
#[derive(Debug, Clone, Deserialize)]
pub struct FuzzyConfigBuilder {
    field: String,
    term: String,
    #[serde(default = "default_max_edits")]
    max_edits: u32,
    #[serde(default)]
    prefix_length: usize,
    #[serde(default = "default_max_expansions")]
    max_expansions: usize,
    #[serde(default = "default_transpositions")]
    transpositions: bool,
}

fn default_max_edits() -> u32 {
    MAX_SUPPORTED_DISTANCE
}

fn default_max_expansions() -> usize {
    DEFAULT_MAX_EXPANSIONS
}

fn default_transpositions() -> bool {
    true
}

impl FuzzyConfigBuilder {
    pub fn max_edits(mut self, max_edits: u32) -> Self {
        self.max_edits = max_edits;
        self
    }

    pub fn prefix_length(mut self, prefix_length: usize) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    pub fn max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = transpositions;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> ConfigResult<FuzzyConfig> {
        if self.field.is_empty() {
            return Err(ConfigError::EmptyField);
        }
        if self.max_edits > MAX_SUPPORTED_DISTANCE {
            return Err(ConfigError::MaxEditsOutOfRange {
                given: self.max_edits,
            });
        }
        Ok(FuzzyConfig {
            field: self.field,
            term: self.term,
            max_edits: self.max_edits,
            prefix_length: self.prefix_length,
            max_expansions: self.max_expansions,
            transpositions: self.transpositions,
        })
    }
}

impl TryFrom<FuzzyConfigBuilder> for FuzzyConfig {
    type Error = ConfigError;

    fn try_from(builder: FuzzyConfigBuilder) -> ConfigResult<Self> {
        builder.build()
    }
}
