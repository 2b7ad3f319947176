use rayon::prelude::*;
use std::collections::HashMap;

use crate::core::scoring::{calculate_score, label, MATCH_THRESHOLD};
use crate::models::{Accuracy, Contact, ContactMatch, ScoringWeights};

/// Pairwise duplicate matcher.
///
/// Enumerates every unordered pair of contacts exactly once (positions
/// i < j in the input sequence), scores each pair, and reports the pairs
/// whose score strictly exceeds the match threshold. The input is never
/// mutated and the result is a pure function of the input sequence.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Find possible duplicate pairs in a contact list.
    ///
    /// Returns one `ContactMatch` per qualifying pair, in pair-enumeration
    /// order: `source_id` is always the contact at the lower input index.
    /// An empty or single-element input yields an empty result.
    pub fn find_possible_matches(&self, contacts: &[Contact]) -> Vec<ContactMatch> {
        let mut matches = Vec::new();

        for i in 0..contacts.len() {
            for j in (i + 1)..contacts.len() {
                if let Some(m) = self.score_pair(&contacts[i], &contacts[j]) {
                    matches.push(m);
                }
            }
        }

        matches
    }

    /// Parallel variant of [`find_possible_matches`](Self::find_possible_matches).
    ///
    /// Partitions the outer index range across worker threads; per-pair
    /// scores are independent, and collecting an indexed parallel iterator
    /// reassembles the results in enumeration order, so the output is
    /// identical to the sequential variant.
    pub fn find_possible_matches_parallel(&self, contacts: &[Contact]) -> Vec<ContactMatch> {
        (0..contacts.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                let c1 = &contacts[i];
                contacts[i + 1..]
                    .iter()
                    .filter_map(move |c2| self.score_pair(c1, c2))
            })
            .collect()
    }

    fn score_pair(&self, c1: &Contact, c2: &Contact) -> Option<ContactMatch> {
        let score = calculate_score(c1, c2, &self.weights);
        if score > MATCH_THRESHOLD {
            Some(ContactMatch {
                source_id: c1.id,
                match_id: c2.id,
                accuracy: label(score),
            })
        } else {
            None
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Tally matches by accuracy band. The result always carries all three
/// bands, even when a count is zero.
pub fn count_accuracy_levels(matches: &[ContactMatch]) -> HashMap<Accuracy, usize> {
    let mut counts = HashMap::from([
        (Accuracy::High, 0),
        (Accuracy::Medium, 0),
        (Accuracy::Low, 0),
    ]);

    for m in matches {
        *counts.entry(m.accuracy).or_insert(0) += 1;
    }

    counts
}
