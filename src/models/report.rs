use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::domain::{Accuracy, ContactMatch};

/// Per-band tally of reported matches. Always carries all three bands,
/// zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracySummary {
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "Low")]
    pub low: usize,
}

impl AccuracySummary {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

impl From<&HashMap<Accuracy, usize>> for AccuracySummary {
    fn from(counts: &HashMap<Accuracy, usize>) -> Self {
        Self {
            high: counts.get(&Accuracy::High).copied().unwrap_or(0),
            medium: counts.get(&Accuracy::Medium).copied().unwrap_or(0),
            low: counts.get(&Accuracy::Low).copied().unwrap_or(0),
        }
    }
}

/// Full output of a batch matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(rename = "totalContacts")]
    pub total_contacts: usize,
    #[serde(rename = "pairsCompared")]
    pub pairs_compared: usize,
    pub matches: Vec<ContactMatch>,
    pub summary: AccuracySummary,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl MatchReport {
    pub fn new(total_contacts: usize, matches: Vec<ContactMatch>, summary: AccuracySummary) -> Self {
        Self {
            total_contacts,
            pairs_compared: total_contacts * total_contacts.saturating_sub(1) / 2,
            matches,
            summary,
            generated_at: chrono::Utc::now(),
        }
    }
}
