//! Edit-distance domain constants.
//!
//! These values are fixed by the index format: ranked results produced under
//! one budget must remain comparable with results produced by older segments.

/// Maximum edit distance the matching core supports.
///
/// Budgets above this value are rejected at configuration time rather than
/// clamped.
pub const MAX_SUPPORTED_DISTANCE: u32 = 2;

/// Default cap on the number of distinct matched terms considered.
pub const DEFAULT_MAX_EXPANSIONS: usize = 50;

/// Effective edit budget for a pair of term lengths.
///
/// A candidate is only acceptable when its distance is strictly less than the
/// shorter of the two codepoint lengths, so the usable budget is
/// `min(max_edits, shorter_len - 1)`. A zero-length side leaves no budget at
/// all: even a zero-distance "match" is scaled to nothing.
pub fn effective_budget(max_edits: u32, query_len: usize, candidate_len: usize) -> Option<u32> {
    let shorter = query_len.min(candidate_len);
    if shorter == 0 {
        return None;
    }
    Some(max_edits.min((shorter - 1) as u32))
}
