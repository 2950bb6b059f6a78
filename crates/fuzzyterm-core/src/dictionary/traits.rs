//! Term dictionary trait definitions

use serde::{Deserialize, Serialize};

use crate::dictionary::error::DictResult;

/// Opaque handle to the postings list of an indexed term.
///
/// The matching core never dereferences this; it is carried through so that
/// callers can resolve matched terms back to their postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostingsHandle(pub u64);

/// One entry of a field's term dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    pub text: String,
    pub postings: PostingsHandle,
}

/// Pull-based cursor over a field's terms.
///
/// Each advance may touch the underlying term source, so every item is a
/// `DictResult`. Dropping the cursor releases it; no explicit close call.
pub type TermCursor<'a> = Box<dyn Iterator<Item = DictResult<TermEntry>> + Send + 'a>;

/// Read access to the sorted term dictionary of an index.
///
/// Implementations must yield terms in a fixed total order (lexicographic by
/// raw bytes). The exact-match path uses `lookup`; the fuzzy path walks
/// `terms`. Backends:
/// - Native: segment files, mmap'd term indexes
/// - Testing: in-memory
pub trait TermDictionary: Send + Sync {
    /// Look up a single term in a field.
    ///
    /// Returns `None` if the term is not indexed. A field with no terms is
    /// not an error.
    fn lookup(&self, field: &str, term: &str) -> DictResult<Option<TermEntry>>;

    /// Cursor over all terms of a field, in raw-byte lexicographic order.
    ///
    /// A field with no terms yields an empty cursor.
    fn terms(&self, field: &str) -> DictResult<TermCursor<'_>>;

    /// Number of distinct terms indexed for a field.
    fn term_count(&self, field: &str) -> DictResult<usize> {
        let mut count = 0;
        for entry in self.terms(field)? {
            entry?;
            count += 1;
        }
        Ok(count)
    }
}
