// Model exports
pub mod domain;
pub mod report;

pub use domain::{Accuracy, Contact, ContactMatch, ScoringWeights};
pub use report::{AccuracySummary, MatchReport};
