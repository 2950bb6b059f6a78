//! Legacy fractional-similarity compatibility
//!
//! Older query APIs expressed fuzziness as a fractional minimum similarity
//! in `[0, 1)` instead of an integer edit budget. This module keeps the
//! historical conversion bit-exact so queries written against old indexes
//! keep selecting the same terms.

use crate::limits::MAX_SUPPORTED_DISTANCE;

/// Convert a deprecated fractional similarity plus a term length into an
/// equivalent integer edit budget.
///
/// - `minimum_similarity >= 1.0`: interpreted as an edit count already,
///   truncated and capped at [`MAX_SUPPORTED_DISTANCE`].
/// - `minimum_similarity == 0.0`: exact match (`0` edits), not "unbounded".
/// - otherwise: `trunc((1 - minimum_similarity) * term_len)`, capped. The
///   product is computed in f64 after widening the similarity, matching the
///   historical arithmetic exactly (so `0.8` over a 5-codepoint term yields
///   `0`, not `1`, because the widened `0.8` is slightly above four fifths).
///
/// Values below zero are not validated; they fall through to the fractional
/// branch, where `1 - minimum_similarity` exceeds one and the cap almost
/// always applies. This mirrors the historical contract as-is.
pub fn similarity_to_edits(minimum_similarity: f32, term_len: usize) -> u32 {
    if minimum_similarity >= 1.0 {
        (minimum_similarity as u32).min(MAX_SUPPORTED_DISTANCE)
    } else if minimum_similarity == 0.0 {
        0
    } else {
        let raw = ((1.0 - f64::from(minimum_similarity)) * term_len as f64) as u32;
        raw.min(MAX_SUPPORTED_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_similarity_is_an_edit_count() {
        assert_eq!(similarity_to_edits(1.0, 10), 1);
        assert_eq!(similarity_to_edits(2.0, 10), 2);
        assert_eq!(similarity_to_edits(5.0, 10), 2);
    }

    #[test]
    fn zero_means_exact() {
        assert_eq!(similarity_to_edits(0.0, 10), 0);
        assert_eq!(similarity_to_edits(0.0, 0), 0);
    }

    #[test]
    fn fractional_scales_with_term_length() {
        assert_eq!(similarity_to_edits(0.5, 10), 2); // trunc(5.0) capped at 2
        assert_eq!(similarity_to_edits(0.9, 10), 1); // trunc(1.0)
        assert_eq!(similarity_to_edits(0.95, 10), 0); // trunc(0.5)
    }

    #[test]
    fn widened_float_arithmetic_is_preserved() {
        // 0.8f32 widens to slightly above 0.8, so the product lands just
        // below 1.0 and truncates to zero
        assert_eq!(similarity_to_edits(0.8, 5), 0);
    }

    #[test]
    fn fractional_truncates_toward_zero() {
        assert_eq!(similarity_to_edits(0.75, 7), 1); // 1.75 -> 1
        assert_eq!(similarity_to_edits(0.3, 2), 1); // 1.4 -> 1
    }

    #[test]
    fn negative_falls_through_to_fractional_branch() {
        // (1 - (-0.5)) * 10 = 15, capped at 2; documented as-is
        assert_eq!(similarity_to_edits(-0.5, 10), 2);
        assert_eq!(similarity_to_edits(-1.0, 0), 0);
    }
}
