//! Exact-vs-fuzzy match dispatch
//!
//! Given a validated config, chooses between an exact single-term lookup and
//! the fuzzy enumerator. The decision is pure and side-effect-free: no
//! dictionary access happens until the returned matcher is pulled.

use tracing::debug;

use crate::dictionary::{DictResult, TermDictionary};
use crate::fuzzy::config::FuzzyConfig;
use crate::fuzzy::enumerator::{Candidate, FuzzyTermEnumerator};

/// Which matching path a config resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Only the query term itself can match: zero budget, or the whole term
    /// is required prefix.
    Exact,
    /// Edit-distance enumeration over the field's term dictionary.
    Fuzzy,
}

/// Decide the matching path for a config.
///
/// Exact when `max_edits == 0` or the required prefix covers the whole term
/// (a prefix longer than the term is legal and simply forces this path).
pub fn select_strategy(config: &FuzzyConfig) -> MatchStrategy {
    if config.max_edits() == 0 || config.prefix_length() >= config.term_len() {
        MatchStrategy::Exact
    } else {
        MatchStrategy::Fuzzy
    }
}

/// Build the matcher for a config over a dictionary snapshot.
///
/// Deterministic: the same config and snapshot always produce the same
/// strategy and, on consumption, the same candidate ordering.
pub fn dispatch<'a>(config: &FuzzyConfig, dictionary: &'a dyn TermDictionary) -> TermMatcher<'a> {
    let strategy = select_strategy(config);
    debug!(query = %config, ?strategy, "dispatching term matcher");
    match strategy {
        MatchStrategy::Exact => TermMatcher::Exact(ExactMatcher::new(dictionary, config)),
        MatchStrategy::Fuzzy => TermMatcher::Fuzzy(FuzzyTermEnumerator::new(dictionary, config)),
    }
}

/// A pull-based candidate source, exact or fuzzy.
///
/// Both arms yield `DictResult<Candidate>` so one rewrite stage can consume
/// either without caring which path was taken.
pub enum TermMatcher<'a> {
    Exact(ExactMatcher<'a>),
    Fuzzy(FuzzyTermEnumerator<'a>),
}

impl Iterator for TermMatcher<'_> {
    type Item = DictResult<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            TermMatcher::Exact(matcher) => matcher.next(),
            TermMatcher::Fuzzy(enumerator) => enumerator.next(),
        }
    }
}

/// Matcher accepting exactly the query term.
///
/// Performs a single dictionary lookup on the first pull; no edit-distance
/// computation occurs on this path.
pub struct ExactMatcher<'a> {
    dictionary: &'a dyn TermDictionary,
    field: String,
    term: String,
    done: bool,
}

impl<'a> ExactMatcher<'a> {
    fn new(dictionary: &'a dyn TermDictionary, config: &FuzzyConfig) -> Self {
        Self {
            dictionary,
            field: config.field().to_string(),
            term: config.term().to_string(),
            done: false,
        }
    }
}

impl Iterator for ExactMatcher<'_> {
    type Item = DictResult<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.done = true;
        match self.dictionary.lookup(&self.field, &self.term) {
            Ok(Some(entry)) => Some(Ok(Candidate {
                term: entry.text,
                postings: entry.postings,
                distance: 0,
                boost: 1.0,
            })),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
