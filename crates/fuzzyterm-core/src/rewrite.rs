//! Top-terms rewrite glue
//!
//! The generic rewrite stage turns a candidate stream into the ranked term
//! list a composite query is built from. Ordering is by decreasing boost
//! with ties broken by dictionary (term) order, truncated to the expansion
//! cap. The cap is whatever the caller passes - typically
//! [`FuzzyConfig::max_expansions`]; clamping against a global clause ceiling
//! is the caller's business, not this crate's.
//!
//! [`FuzzyConfig::max_expansions`]: crate::fuzzy::FuzzyConfig::max_expansions

use tracing::debug;

use crate::dictionary::DictResult;
use crate::fuzzy::Candidate;

/// Collects a candidate stream into a ranked, capped term list.
#[derive(Debug, Clone, Copy)]
pub struct TopTermsCollector {
    cap: usize,
}

impl TopTermsCollector {
    /// Collector keeping at most `cap` terms.
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    /// Drain a matcher and return the top terms by boost.
    ///
    /// The first dictionary error aborts collection and propagates
    /// unchanged.
    pub fn collect<I>(&self, matcher: I) -> DictResult<Vec<Candidate>>
    where
        I: Iterator<Item = DictResult<Candidate>>,
    {
        let mut candidates = Vec::new();
        for candidate in matcher {
            candidates.push(candidate?);
        }

        // Sort by boost descending, then by term for stability
        candidates.sort_by(|a, b| {
            b.boost
                .partial_cmp(&a.boost)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });

        candidates.truncate(self.cap);
        debug!(kept = candidates.len(), cap = self.cap, "collected top terms");
        Ok(candidates)
    }
}
