//! Approximate Term Matching
//!
//! The fuzzy-matching decision and scoring pipeline:
//!
//! 1. [`FuzzyConfig`] - validated, immutable matching parameters
//! 2. [`dispatch`] - exact-vs-fuzzy path selection (pure, no I/O)
//! 3. [`FuzzyTermEnumerator`] - lazy walk of the term dictionary within the
//!    edit budget
//! 4. [`scoring`] - the length-scaled eligibility rule and boost
//!
//! # Example
//!
//! ```rust
//! use fuzzyterm_core::dictionary::MemoryDictionary;
//! use fuzzyterm_core::fuzzy::{dispatch, FuzzyConfig};
//!
//! let dict = MemoryDictionary::with_terms("body", ["apple", "apply", "orange"]);
//! let config = FuzzyConfig::new("body", "applw").unwrap();
//!
//! let terms: Vec<String> = dispatch(&config, &dict)
//!     .map(|c| c.unwrap().term)
//!     .collect();
//! assert_eq!(terms, vec!["apple", "apply"]);
//! ```

mod config;
mod dispatch;
mod enumerator;
pub mod scoring;

pub use config::{ConfigError, ConfigResult, FuzzyConfig, FuzzyConfigBuilder};
pub use dispatch::{dispatch, select_strategy, ExactMatcher, MatchStrategy, TermMatcher};
pub use enumerator::{Candidate, FuzzyTermEnumerator};
