//! Lazy fuzzy candidate enumeration
//!
//! Walks a field's term dictionary in order and yields every candidate
//! within the edit budget, scored by length-scaled similarity. The walk is
//! pull-based: the dictionary cursor is opened on the first pull and each
//! advance touches at most one term, so callers can stop early (the rewrite
//! stage does, at `max_expansions`) by simply dropping the iterator.
//!
//! Restartable only via fresh construction; a cursor error ends the
//! sequence after being yielded.

use serde::{Deserialize, Serialize};
use strsim::{levenshtein, osa_distance};
use tracing::trace;

use crate::dictionary::{DictResult, PostingsHandle, TermCursor, TermDictionary};
use crate::fuzzy::config::FuzzyConfig;
use crate::fuzzy::scoring;

/// A term accepted as an approximate match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub term: String,
    pub postings: PostingsHandle,
    pub distance: u32,
    /// Normalized similarity in `(0, 1]`; higher is closer.
    pub boost: f64,
}

/// Lazy enumerator over a field's terms within the edit budget.
///
/// Yields candidates in dictionary (raw-byte) order; ranking by boost is the
/// rewrite stage's job.
pub struct FuzzyTermEnumerator<'a> {
    dictionary: &'a dyn TermDictionary,
    cursor: Option<TermCursor<'a>>,
    field: String,
    query: String,
    query_len: usize,
    /// Byte length of the required verbatim prefix within `query`.
    prefix_bytes: usize,
    max_edits: u32,
    transpositions: bool,
    done: bool,
}

impl<'a> FuzzyTermEnumerator<'a> {
    /// Build an enumerator for a config. Performs no dictionary access;
    /// the cursor is opened on the first pull.
    pub fn new(dictionary: &'a dyn TermDictionary, config: &FuzzyConfig) -> Self {
        let query = config.term().to_string();
        let prefix_bytes = query
            .char_indices()
            .nth(config.prefix_length())
            .map_or(query.len(), |(offset, _)| offset);
        Self {
            dictionary,
            cursor: None,
            field: config.field().to_string(),
            query_len: config.term_len(),
            query,
            prefix_bytes,
            max_edits: config.max_edits(),
            transpositions: config.transpositions(),
            done: false,
        }
    }
}

impl Iterator for FuzzyTermEnumerator<'_> {
    type Item = DictResult<Candidate>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.cursor.is_none() {
            match self.dictionary.terms(&self.field) {
                Ok(cursor) => self.cursor = Some(cursor),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        let prefix = &self.query[..self.prefix_bytes];
        let query_suffix = &self.query[self.prefix_bytes..];
        let cursor = self.cursor.as_mut()?;

        for entry in cursor {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            // Required verbatim prefix; byte equality is codepoint equality
            // on a char boundary.
            if !entry.text.starts_with(prefix) {
                continue;
            }

            let candidate_len = entry.text.chars().count();

            // Length difference is a lower bound on edit distance
            if self.query_len.abs_diff(candidate_len) > self.max_edits as usize {
                continue;
            }

            let candidate_suffix = &entry.text[self.prefix_bytes..];
            let distance = if self.transpositions {
                osa_distance(query_suffix, candidate_suffix) as u32
            } else {
                levenshtein(query_suffix, candidate_suffix) as u32
            };
            if !scoring::eligible(distance, self.max_edits, self.query_len, candidate_len) {
                continue;
            }

            let boost = scoring::boost(distance, self.query_len, candidate_len);
            trace!(term = %entry.text, distance, boost, "fuzzy candidate accepted");
            return Some(Ok(Candidate {
                term: entry.text,
                postings: entry.postings,
                distance,
                boost,
            }));
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryError, MemoryDictionary};

    fn config(term: &str) -> FuzzyConfig {
        FuzzyConfig::new("body", term).unwrap()
    }

    fn matched_terms(dict: &MemoryDictionary, config: &FuzzyConfig) -> Vec<String> {
        FuzzyTermEnumerator::new(dict, config)
            .map(|c| c.unwrap().term)
            .collect()
    }

    #[test]
    fn yields_terms_within_budget_in_dictionary_order() {
        let dict = MemoryDictionary::with_terms("body", ["appld", "apple", "apply", "orange"]);
        let terms = matched_terms(&dict, &config("apple"));
        assert_eq!(terms, vec!["appld", "apple", "apply"]);
    }

    #[test]
    fn short_candidate_excluded_by_length_rule() {
        // distance "abcd" -> "ab" is 2, but min length 2 requires d < 2
        let dict = MemoryDictionary::with_terms("body", ["ab", "abcd"]);
        let terms = matched_terms(&dict, &config("abcd"));
        assert_eq!(terms, vec!["abcd"]);
    }

    #[test]
    fn one_codepoint_query_only_matches_itself() {
        let dict = MemoryDictionary::with_terms("body", ["a", "ab", "abc"]);
        let terms = matched_terms(&dict, &config("a"));
        assert_eq!(terms, vec!["a"]);
    }

    #[test]
    fn transpositions_toggle_changes_distance() {
        let dict = MemoryDictionary::with_terms("body", ["apple"]);

        // "appel" -> "apple" is one adjacent swap
        let osa = FuzzyConfig::builder("body", "appel")
            .max_edits(1)
            .transpositions(true)
            .build()
            .unwrap();
        assert_eq!(matched_terms(&dict, &osa), vec!["apple"]);

        // classic Levenshtein charges two edits for the same swap
        let classic = FuzzyConfig::builder("body", "appel")
            .max_edits(1)
            .transpositions(false)
            .build()
            .unwrap();
        assert!(matched_terms(&dict, &classic).is_empty());
    }

    #[test]
    fn prefix_is_required_verbatim() {
        let dict = MemoryDictionary::with_terms("body", ["apple", "bpple"]);
        let config = FuzzyConfig::builder("body", "apple")
            .prefix_length(1)
            .build()
            .unwrap();
        let terms = matched_terms(&dict, &config);
        assert_eq!(terms, vec!["apple"]);
    }

    #[test]
    fn unicode_prefix_split_is_codepoint_based() {
        // required prefix "hé" spans three bytes but two codepoints
        let dict = MemoryDictionary::with_terms("body", ["hallo", "héllo", "héllp"]);
        let config = FuzzyConfig::builder("body", "héllo")
            .prefix_length(2)
            .build()
            .unwrap();
        let terms = matched_terms(&dict, &config);
        assert_eq!(terms, vec!["héllo", "héllp"]);
    }

    #[test]
    fn boost_decreases_with_distance() {
        let dict = MemoryDictionary::with_terms("body", ["apple", "apply", "appyl"]);
        let candidates: Vec<Candidate> = FuzzyTermEnumerator::new(&dict, &config("apple"))
            .map(|c| c.unwrap())
            .collect();
        let exact = candidates.iter().find(|c| c.term == "apple").unwrap();
        let one_off = candidates.iter().find(|c| c.term == "apply").unwrap();
        assert_eq!(exact.boost, 1.0);
        assert_eq!(one_off.boost, 1.0 - 1.0 / 5.0);
        assert!(exact.boost > one_off.boost);
    }

    #[test]
    fn cursor_error_ends_the_sequence() {
        struct BrokenDictionary;
        impl TermDictionary for BrokenDictionary {
            fn lookup(
                &self,
                _field: &str,
                _term: &str,
            ) -> DictResult<Option<crate::dictionary::TermEntry>> {
                Err(DictionaryError::Unreadable {
                    field: "body".into(),
                    detail: "segment gone".into(),
                })
            }
            fn terms(&self, field: &str) -> DictResult<TermCursor<'_>> {
                Err(DictionaryError::Unreadable {
                    field: field.to_string(),
                    detail: "segment gone".into(),
                })
            }
        }

        let dict = BrokenDictionary;
        let mut enumerator = FuzzyTermEnumerator::new(&dict, &config("apple"));
        assert!(enumerator.next().unwrap().is_err());
        assert!(enumerator.next().is_none());
    }

    #[test]
    fn restart_requires_fresh_construction() {
        let dict = MemoryDictionary::with_terms("body", ["apple", "apply"]);
        let config = config("apple");

        let mut first = FuzzyTermEnumerator::new(&dict, &config);
        first.next();
        drop(first); // early stop needs no explicit release

        let terms = matched_terms(&dict, &config);
        assert_eq!(terms, vec!["apple", "apply"]);
    }
}
