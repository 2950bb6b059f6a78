//! In-memory term dictionary
//!
//! A BTreeMap-backed implementation for testing and development. String
//! ordering in Rust is raw-byte lexicographic, which is exactly the total
//! order the dictionary contract requires.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::dictionary::error::DictResult;
use crate::dictionary::traits::{PostingsHandle, TermCursor, TermDictionary, TermEntry};

/// In-memory term dictionary.
///
/// Stores one sorted term table per field. Useful for:
/// - Unit testing
/// - Development/prototyping
/// - Small transient indexes that never hit disk
#[derive(Debug, Default)]
pub struct MemoryDictionary {
    fields: AHashMap<String, BTreeMap<String, PostingsHandle>>,
    next_handle: u64,
}

impl MemoryDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary with an initial set of terms for one field.
    pub fn with_terms<I, S>(field: &str, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        for term in terms {
            dict.insert(field, term.into());
        }
        dict
    }

    /// Insert a term into a field, returning its postings handle.
    ///
    /// Re-inserting an existing term returns the handle already assigned.
    pub fn insert(&mut self, field: &str, term: impl Into<String>) -> PostingsHandle {
        let table = self.fields.entry(field.to_string()).or_default();
        let next = &mut self.next_handle;
        *table.entry(term.into()).or_insert_with(|| {
            let handle = PostingsHandle(*next);
            *next += 1;
            handle
        })
    }

    /// Names of all fields with at least one term.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }
}

impl TermDictionary for MemoryDictionary {
    fn lookup(&self, field: &str, term: &str) -> DictResult<Option<TermEntry>> {
        Ok(self.fields.get(field).and_then(|table| {
            table.get(term).map(|&postings| TermEntry {
                text: term.to_string(),
                postings,
            })
        }))
    }

    fn terms(&self, field: &str) -> DictResult<TermCursor<'_>> {
        match self.fields.get(field) {
            Some(table) => Ok(Box::new(table.iter().map(|(text, &postings)| {
                Ok(TermEntry {
                    text: text.clone(),
                    postings,
                })
            }))),
            None => Ok(Box::new(std::iter::empty())),
        }
    }

    fn term_count(&self, field: &str) -> DictResult<usize> {
        Ok(self.fields.get(field).map_or(0, BTreeMap::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_present_and_absent() {
        let dict = MemoryDictionary::with_terms("body", ["apple", "apply"]);
        let entry = dict.lookup("body", "apple").unwrap();
        assert_eq!(entry.unwrap().text, "apple");
        assert!(dict.lookup("body", "banana").unwrap().is_none());
        assert!(dict.lookup("title", "apple").unwrap().is_none());
    }

    #[test]
    fn terms_iterate_in_byte_order() {
        let dict = MemoryDictionary::with_terms("body", ["pear", "apple", "Zebra", "apply"]);
        let texts: Vec<String> = dict
            .terms("body")
            .unwrap()
            .map(|e| e.unwrap().text)
            .collect();
        // Uppercase sorts before lowercase in raw bytes
        assert_eq!(texts, vec!["Zebra", "apple", "apply", "pear"]);
    }

    #[test]
    fn unknown_field_yields_empty_cursor() {
        let dict = MemoryDictionary::new();
        assert_eq!(dict.terms("missing").unwrap().count(), 0);
        assert_eq!(dict.term_count("missing").unwrap(), 0);
    }

    #[test]
    fn reinsert_keeps_handle() {
        let mut dict = MemoryDictionary::new();
        let first = dict.insert("body", "apple");
        let again = dict.insert("body", "apple");
        assert_eq!(first, again);
        assert_eq!(dict.term_count("body").unwrap(), 1);
    }
}
