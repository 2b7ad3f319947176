// Core algorithm exports
pub mod comparators;
pub mod matcher;
pub mod scoring;

pub use comparators::{address_score, email_score, name_score, zip_score};
pub use matcher::{count_accuracy_levels, Matcher};
pub use scoring::{
    calculate_score, label, name_pair_score, HIGH_ACCURACY_MIN, MATCH_THRESHOLD,
    MEDIUM_ACCURACY_MIN,
};
