//! Term Dictionary Access
//!
//! Read-only access to the sorted term dictionary of an index, consumed by
//! the match dispatcher. Two interfaces:
//!
//! - `lookup` - single-term probe, used by the exact-match path
//! - `terms` - ordered cursor over a field's terms, walked by the fuzzy path
//!
//! The cursor order is fixed (raw-byte lexicographic) so that repeated
//! enumeration over the same snapshot is fully deterministic.

mod error;
mod memory;
mod traits;

pub use error::{DictResult, DictionaryError};
pub use memory::MemoryDictionary;
pub use traits::{PostingsHandle, TermCursor, TermDictionary, TermEntry};
