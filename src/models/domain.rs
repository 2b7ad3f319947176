use serde::{Deserialize, Serialize};
use std::fmt;

/// Hand-tuned weight table for the attribute comparators.
///
/// A shared email address or street address is much stronger evidence of a
/// duplicate than a shared name: two distinct people can easily carry the
/// same first or last name, so a lone name agreement stays below the match
/// threshold on its own.
pub const NAME_MATCH_FULL: i32 = 12;
pub const NAME_MATCH_PARTIAL: i32 = 7;
pub const NAME_SURNAME_BONUS: i32 = 10;
pub const EMAIL_MATCH_FULL: i32 = 20;
pub const EMAIL_MATCH_PARTIAL: i32 = 17;
pub const ZIP_MATCH: i32 = 3;
pub const ADDRESS_MATCH_FULL: i32 = 20;
pub const ADDRESS_MATCH_PARTIAL: i32 = 17;
pub const ADDRESS_MISMATCH_PENALTY: i32 = -10;

/// A contact record under duplicate inspection.
///
/// Only the identifier is required; every text field may be absent. An
/// absent field contributes nothing to a pair's score, it is never counted
/// as a match or a mismatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
    #[serde(rename = "zipCode", default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Accuracy band derived from a pair's similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accuracy {
    High,
    Medium,
    Low,
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Accuracy::High => "High",
            Accuracy::Medium => "Medium",
            Accuracy::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

/// A reported duplicate pair.
///
/// `source_id` belongs to the contact that appeared earlier in the input
/// sequence. The raw score is not retained, only the accuracy band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMatch {
    #[serde(rename = "sourceId")]
    pub source_id: i64,
    #[serde(rename = "matchId")]
    pub match_id: i64,
    pub accuracy: Accuracy,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub name_full: i32,
    pub name_partial: i32,
    pub name_surname_bonus: i32,
    pub email_full: i32,
    pub email_partial: i32,
    pub zip: i32,
    pub address_full: i32,
    pub address_partial: i32,
    pub address_mismatch_penalty: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name_full: NAME_MATCH_FULL,
            name_partial: NAME_MATCH_PARTIAL,
            name_surname_bonus: NAME_SURNAME_BONUS,
            email_full: EMAIL_MATCH_FULL,
            email_partial: EMAIL_MATCH_PARTIAL,
            zip: ZIP_MATCH,
            address_full: ADDRESS_MATCH_FULL,
            address_partial: ADDRESS_MATCH_PARTIAL,
            address_mismatch_penalty: ADDRESS_MISMATCH_PENALTY,
        }
    }
}
