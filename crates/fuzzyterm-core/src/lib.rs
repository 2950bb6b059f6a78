//! fuzzyterm core engine
//!
//! Approximate (fuzzy) term matching for a full-text search engine: given a
//! query term and an edit-distance budget, decide which dictionary terms
//! count as matches and how strongly each one scores. The numeric and
//! boundary semantics here (minimum-length exclusion, transposition
//! handling, distance scaling) are bit-exact with the existing index format.
//!
//! # Pipeline
//!
//! 1. Build a [`fuzzy::FuzzyConfig`] - validation happens once, up front
//! 2. [`fuzzy::dispatch`] picks the exact or fuzzy path
//! 3. The matcher lazily yields scored [`fuzzy::Candidate`]s
//! 4. [`rewrite::TopTermsCollector`] ranks and caps them
//!
//! # Example
//!
//! ```rust
//! use fuzzyterm_core::dictionary::MemoryDictionary;
//! use fuzzyterm_core::fuzzy::{dispatch, FuzzyConfig};
//! use fuzzyterm_core::rewrite::TopTermsCollector;
//!
//! let dict = MemoryDictionary::with_terms("body", ["apple", "apply", "ample", "orange"]);
//! let config = FuzzyConfig::new("body", "apple").unwrap();
//!
//! let ranked = TopTermsCollector::new(config.max_expansions())
//!     .collect(dispatch(&config, &dict))
//!     .unwrap();
//! assert_eq!(ranked[0].term, "apple");
//! assert_eq!(ranked[0].boost, 1.0);
//! ```

pub mod dictionary;
pub mod fuzzy;
pub mod legacy;
pub mod limits;
pub mod rewrite;

// Re-export main types at crate root
pub use dictionary::{
    DictResult, DictionaryError, MemoryDictionary, PostingsHandle, TermCursor, TermDictionary,
    TermEntry,
};
pub use fuzzy::{
    dispatch, select_strategy, Candidate, ConfigError, ConfigResult, FuzzyConfig,
    FuzzyTermEnumerator, MatchStrategy, TermMatcher,
};
pub use legacy::similarity_to_edits;
pub use limits::{DEFAULT_MAX_EXPANSIONS, MAX_SUPPORTED_DISTANCE};
pub use rewrite::TopTermsCollector;
