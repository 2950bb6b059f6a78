//! Length-dependent match eligibility and boost
//!
//! A candidate is eligible only when its distance is strictly less than the
//! shorter of the two codepoint lengths, in addition to the edit budget.
//! The strict inequality is load-bearing: boost is scaled by the shorter
//! length, and a distance equal to it would score zero. Short terms are
//! therefore harder to match than the raw budget suggests - "abcd" with two
//! edits never reaches a two-codepoint candidate, and a one-codepoint query
//! never reaches a three-codepoint candidate.

/// Is a candidate of length `candidate_len` an acceptable match for a query
/// of length `query_len` at distance `distance`, under budget `max_edits`?
///
/// Lengths are codepoint counts; the rule is `distance <= max_edits` AND
/// `distance < min(query_len, candidate_len)`.
pub fn eligible(distance: u32, max_edits: u32, query_len: usize, candidate_len: usize) -> bool {
    distance <= max_edits && (distance as usize) < query_len.min(candidate_len)
}

/// Normalized similarity for an accepted candidate, in `(0, 1]`.
///
/// `1 - distance / min(query_len, candidate_len)`; only meaningful for pairs
/// that passed [`eligible`], which guarantees a positive result.
pub fn boost(distance: u32, query_len: usize, candidate_len: usize) -> f64 {
    let shorter = query_len.min(candidate_len);
    1.0 - (distance as f64 / shorter as f64)
}
