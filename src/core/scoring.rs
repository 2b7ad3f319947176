use crate::core::comparators::{address_score, email_score, name_score, zip_score};
use crate::models::{Accuracy, Contact, ScoringWeights};

/// Score a pair must strictly exceed to be reported as a possible duplicate.
pub const MATCH_THRESHOLD: i32 = 27;
/// Lowest score in the "High" accuracy band.
pub const HIGH_ACCURACY_MIN: i32 = 40;
/// Lowest score in the "Medium" accuracy band.
pub const MEDIUM_ACCURACY_MIN: i32 = 30;

/// Calculate the similarity score for a pair of contacts.
///
/// The score is the sum of four independent sub-scores: the name/surname
/// combination, email, postal code, and street address. Each comparator
/// treats an absent field as contributing nothing.
pub fn calculate_score(c1: &Contact, c2: &Contact, weights: &ScoringWeights) -> i32 {
    let mut score = name_pair_score(c1, c2, weights);

    score += email_score(
        c1.email_address.as_deref(),
        c2.email_address.as_deref(),
        weights.email_full,
        weights.email_partial,
    );

    score += zip_score(c1.zip_code.as_deref(), c2.zip_code.as_deref(), weights.zip);

    score += address_score(
        c1.address.as_deref(),
        c2.address.as_deref(),
        weights.address_full,
        weights.address_partial,
        weights.address_mismatch_penalty,
    );

    score
}

/// Combined first-name and surname score.
///
/// Agreement on both tokens, even partially, is far stronger evidence of
/// identity than either token alone, so a bonus is added when both
/// sub-scores are positive.
pub fn name_pair_score(c1: &Contact, c2: &Contact, weights: &ScoringWeights) -> i32 {
    let first = name_score(
        c1.first_name.as_deref(),
        c2.first_name.as_deref(),
        weights.name_full,
        weights.name_partial,
    );
    let last = name_score(
        c1.last_name.as_deref(),
        c2.last_name.as_deref(),
        weights.name_full,
        weights.name_partial,
    );

    let total = first + last;
    if first > 0 && last > 0 {
        total + weights.name_surname_bonus
    } else {
        total
    }
}

/// Map a raw pair score onto its accuracy band.
pub fn label(score: i32) -> Accuracy {
    if score >= HIGH_ACCURACY_MIN {
        Accuracy::High
    } else if score >= MEDIUM_ACCURACY_MIN {
        Accuracy::Medium
    } else {
        Accuracy::Low
    }
}
